//! # Domain models returned by the Foodgram API
//!
//! These mirror the JSON the backend serialises, so every type is
//! `Serialize + Deserialize`. They are also `Clone + PartialEq` because the UI
//! keeps them inside signals and passes them as component props.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Recipe`] | A full recipe as listed by `GET /recipes/`, including the per-user `is_favorited` / `is_in_shopping_cart` flags. |
//! | [`RecipeSummary`] | The short form (`id`, `name`, `image`, `cooking_time`) embedded in subscriptions and returned by cart/favourite toggles. |
//! | [`User`] | A user as seen by the viewer, with the viewer-relative `is_subscribed` flag. |
//! | [`Subscription`] | A followed author together with a preview of their recipes and the total recipe count. |
//! | [`Page`] | The backend's pagination envelope. |
//! | [`PasswordChange`] | The payload of the change-password form. |

use serde::{Deserialize, Serialize};

/// Recipe tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// An ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    pub measurement_unit: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_amount() -> u32 {
    1
}

/// A Foodgram user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl User {
    /// "First Last", falling back to the username when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// A full recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: String,
    pub cooking_time: u32,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_in_shopping_cart: bool,
}

/// Short recipe representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub cooking_time: u32,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            cooking_time: recipe.cooking_time,
        }
    }
}

/// A followed author, flattened the way the backend sends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(flatten)]
    pub author: User,
    /// At most `recipes_limit` of the author's recipes.
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub recipes_count: u32,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.author.id
    }

    /// Recipes the author has beyond the embedded preview.
    pub fn hidden_recipes(&self) -> u32 {
        self.recipes_count.saturating_sub(self.recipes.len() as u32)
    }
}

/// Pagination envelope: `{count, next, previous, results}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }
}

/// Payload sent to `POST /users/set_password/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub repeat_password: String,
}

/// Credentials sent to `POST /auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub auth_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = User {
            id: 1,
            email: "cook@example.com".to_string(),
            username: "cook".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "cook");

        user.first_name = "Anna".to_string();
        assert_eq!(user.display_name(), "Anna");

        user.last_name = "Petrova".to_string();
        assert_eq!(user.display_name(), "Anna Petrova");
    }

    #[test]
    fn test_hidden_recipes() {
        let sub = Subscription {
            author: User::default(),
            recipes: vec![RecipeSummary {
                id: 1,
                name: "Soup".to_string(),
                image: None,
                cooking_time: 30,
            }],
            recipes_count: 4,
        };
        assert_eq!(sub.hidden_recipes(), 3);
    }
}
