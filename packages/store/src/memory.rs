use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::client::{ApiResult, FoodgramClient};
use crate::error::ApiError;
use crate::models::{
    Credentials, Ingredient, Page, PasswordChange, Recipe, RecipeSummary, Subscription, User,
};
use crate::query::{RecipeQuery, SubscriptionQuery};

const DEFAULT_PAGE_SIZE: u32 = 6;
const DEFAULT_RECIPES_LIMIT: u32 = 5;
const TOKEN: &str = "memory-token";

/// A recorded client call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    SignIn(String),
    SignOut,
    CurrentUser,
    ChangePassword,
    GetRecipes(RecipeQuery),
    AddToCart(u64),
    RemoveFromCart(u64),
    AddToFavorites(u64),
    RemoveFromFavorites(u64),
    DownloadShoppingList,
    GetSubscriptions(SubscriptionQuery),
    Unsubscribe(u64),
}

#[derive(Debug)]
struct MemoryState {
    viewer: User,
    password: String,
    signed_in: bool,
    users: BTreeMap<u64, User>,
    /// In creation order; listed newest first like the backend does.
    recipes: Vec<Recipe>,
    cart: BTreeSet<u64>,
    favorites: BTreeSet<u64>,
    /// Followed author ids, in follow order.
    follows: Vec<u64>,
    next_id: u64,
    fail_next: Option<ApiError>,
    calls: Vec<Call>,
}

/// In-memory Foodgram backend for tests.
///
/// Starts signed in as `cook@example.com` / `cookpass`. Mirrors the
/// backend's observable rules: toggles reject no-ops, lists are paginated with
/// `limit`, and the shopping list sums ingredient amounts per name and unit.
#[derive(Clone, Debug)]
pub struct MemoryClient {
    state: Arc<Mutex<MemoryState>>,
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClient {
    pub fn new() -> Self {
        let viewer = User {
            id: 1,
            email: "cook@example.com".to_string(),
            username: "cook".to_string(),
            first_name: "Home".to_string(),
            last_name: "Cook".to_string(),
            is_subscribed: false,
        };
        let mut users = BTreeMap::new();
        users.insert(viewer.id, viewer.clone());
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                viewer,
                password: "cookpass".to_string(),
                signed_in: true,
                users,
                recipes: Vec::new(),
                cart: BTreeSet::new(),
                favorites: BTreeSet::new(),
                follows: Vec::new(),
                next_id: 100,
                fail_next: None,
                calls: Vec::new(),
            })),
        }
    }

    /// Add a recipe authored by the viewer.
    pub fn add_recipe(&self, name: &str, cooking_time: u32) -> u64 {
        let viewer = self.state.lock().unwrap().viewer.id;
        self.add_recipe_by(viewer, name, cooking_time)
    }

    pub fn add_recipe_by(&self, author_id: u64, name: &str, cooking_time: u32) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        let author = state.users.get(&author_id).cloned();
        state.recipes.push(Recipe {
            id,
            name: name.to_string(),
            cooking_time,
            author,
            ..Recipe::default()
        });
        id
    }

    pub fn add_ingredient(&self, recipe_id: u64, name: &str, unit: &str, amount: u32) {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        if let Some(recipe) = state.recipes.iter_mut().find(|r| r.id == recipe_id) {
            recipe.ingredients.push(Ingredient {
                id,
                name: name.to_string(),
                measurement_unit: unit.to_string(),
                amount,
            });
        }
    }

    pub fn add_author(&self, username: &str) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        state.users.insert(
            id,
            User {
                id,
                email: format!("{username}@example.com"),
                username: username.to_string(),
                ..User::default()
            },
        );
        id
    }

    pub fn follow(&self, author_id: u64) {
        let mut state = self.state.lock().unwrap();
        if !state.follows.contains(&author_id) {
            state.follows.push(author_id);
        }
    }

    pub fn put_in_cart(&self, recipe_id: u64) {
        self.state.lock().unwrap().cart.insert(recipe_id);
    }

    pub fn clear_cart(&self) {
        self.state.lock().unwrap().cart.clear();
    }

    pub fn cart(&self) -> Vec<u64> {
        self.state.lock().unwrap().cart.iter().copied().collect()
    }

    pub fn favorites(&self) -> Vec<u64> {
        self.state.lock().unwrap().favorites.iter().copied().collect()
    }

    pub fn follows(&self) -> Vec<u64> {
        self.state.lock().unwrap().follows.clone()
    }

    pub fn password(&self) -> String {
        self.state.lock().unwrap().password.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.lock().unwrap().signed_in
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.state.lock().unwrap().fail_next = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Record the call, then apply `op` unless a failure was queued.
    fn with_state<T>(
        &self,
        call: Call,
        needs_auth: bool,
        op: impl FnOnce(&mut MemoryState) -> ApiResult<T>,
    ) -> ApiResult<T> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }
        if needs_auth && !state.signed_in {
            return Err(ApiError::Unauthorized);
        }
        op(&mut state)
    }
}

impl MemoryState {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn recipe_exists(&self, id: u64) -> ApiResult<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)
    }

    /// A recipe with the viewer-relative flags filled in.
    fn present(&self, recipe: &Recipe) -> Recipe {
        let mut recipe = recipe.clone();
        recipe.is_in_shopping_cart = self.signed_in && self.cart.contains(&recipe.id);
        recipe.is_favorited = self.signed_in && self.favorites.contains(&recipe.id);
        if let Some(author) = recipe.author.as_mut() {
            author.is_subscribed = self.signed_in && self.follows.contains(&author.id);
        }
        recipe
    }
}

fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> ApiResult<Page<T>> {
    let count = items.len() as u64;
    let limit = limit.max(1) as usize;
    let page = page.max(1) as usize;
    let start = (page - 1) * limit;
    if start > 0 && start >= items.len() {
        return Err(ApiError::NotFound);
    }
    let results = items.into_iter().skip(start).take(limit).collect();
    Ok(Page::new(results, count))
}

impl FoodgramClient for MemoryClient {
    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<String> {
        self.with_state(Call::SignIn(credentials.email.clone()), false, |state| {
            if credentials.email == state.viewer.email && credentials.password == state.password {
                state.signed_in = true;
                Ok(TOKEN.to_string())
            } else {
                Err(ApiError::rejected(
                    "Unable to log in with provided credentials.",
                ))
            }
        })
    }

    async fn sign_out(&self) -> ApiResult<()> {
        self.with_state(Call::SignOut, true, |state| {
            state.signed_in = false;
            Ok(())
        })
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.with_state(Call::CurrentUser, true, |state| Ok(state.viewer.clone()))
    }

    async fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        self.with_state(Call::ChangePassword, true, |state| {
            if change.current_password != state.password {
                return Err(ApiError::rejected("Invalid password."));
            }
            if change.new_password.chars().count() < 8 {
                return Err(ApiError::rejected(
                    "This password is too short. It must contain at least 8 characters.",
                ));
            }
            state.password = change.new_password.clone();
            Ok(())
        })
    }

    async fn get_recipes(&self, query: &RecipeQuery) -> ApiResult<Page<Recipe>> {
        self.with_state(Call::GetRecipes(query.clone()), false, |state| {
            let listed: Vec<Recipe> = state
                .recipes
                .iter()
                .rev()
                .map(|r| state.present(r))
                .filter(|r| query.is_in_shopping_cart != Some(true) || r.is_in_shopping_cart)
                .filter(|r| query.is_favorited != Some(true) || r.is_favorited)
                .collect();
            paginate(listed, query.page, query.limit.unwrap_or(DEFAULT_PAGE_SIZE))
        })
    }

    async fn add_to_cart(&self, recipe_id: u64) -> ApiResult<RecipeSummary> {
        self.with_state(Call::AddToCart(recipe_id), true, |state| {
            let summary = RecipeSummary::from(state.recipe_exists(recipe_id)?);
            if !state.cart.insert(recipe_id) {
                return Err(ApiError::rejected("Recipe is already in the cart"));
            }
            Ok(summary)
        })
    }

    async fn remove_from_cart(&self, recipe_id: u64) -> ApiResult<()> {
        self.with_state(Call::RemoveFromCart(recipe_id), true, |state| {
            state.recipe_exists(recipe_id)?;
            if !state.cart.remove(&recipe_id) {
                return Err(ApiError::rejected("Recipe is not in the cart"));
            }
            Ok(())
        })
    }

    async fn add_to_favorites(&self, recipe_id: u64) -> ApiResult<RecipeSummary> {
        self.with_state(Call::AddToFavorites(recipe_id), true, |state| {
            let summary = RecipeSummary::from(state.recipe_exists(recipe_id)?);
            if !state.favorites.insert(recipe_id) {
                return Err(ApiError::rejected("Recipe is already in favourites"));
            }
            Ok(summary)
        })
    }

    async fn remove_from_favorites(&self, recipe_id: u64) -> ApiResult<()> {
        self.with_state(Call::RemoveFromFavorites(recipe_id), true, |state| {
            state.recipe_exists(recipe_id)?;
            if !state.favorites.remove(&recipe_id) {
                return Err(ApiError::rejected("Recipe is not in favourites"));
            }
            Ok(())
        })
    }

    async fn download_shopping_list(&self) -> ApiResult<String> {
        self.with_state(Call::DownloadShoppingList, true, |state| {
            let mut totals: BTreeMap<String, u64> = BTreeMap::new();
            for recipe in state.recipes.iter().filter(|r| state.cart.contains(&r.id)) {
                for ingredient in &recipe.ingredients {
                    let key = format!("{}, {}", ingredient.name, ingredient.measurement_unit);
                    *totals.entry(key).or_default() += u64::from(ingredient.amount);
                }
            }
            Ok(totals
                .into_iter()
                .map(|(name, amount)| format!("{name} - {amount}\n"))
                .collect())
        })
    }

    async fn get_subscriptions(&self, query: &SubscriptionQuery) -> ApiResult<Page<Subscription>> {
        self.with_state(Call::GetSubscriptions(query.clone()), true, |state| {
            let preview = query.recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT) as usize;
            let listed: Vec<Subscription> = state
                .follows
                .iter()
                .filter_map(|id| state.users.get(id))
                .map(|author| {
                    let authored: Vec<&Recipe> = state
                        .recipes
                        .iter()
                        .rev()
                        .filter(|r| r.author.as_ref().map(|a| a.id) == Some(author.id))
                        .collect();
                    Subscription {
                        author: User {
                            is_subscribed: true,
                            ..author.clone()
                        },
                        recipes: authored
                            .iter()
                            .take(preview)
                            .map(|r| RecipeSummary::from(*r))
                            .collect(),
                        recipes_count: authored.len() as u32,
                    }
                })
                .collect();
            paginate(listed, query.page, query.limit.unwrap_or(DEFAULT_PAGE_SIZE))
        })
    }

    async fn unsubscribe(&self, author_id: u64) -> ApiResult<()> {
        self.with_state(Call::Unsubscribe(author_id), true, |state| {
            if !state.users.contains_key(&author_id) {
                return Err(ApiError::NotFound);
            }
            let before = state.follows.len();
            state.follows.retain(|id| *id != author_id);
            if state.follows.len() == before {
                return Err(ApiError::rejected("You are not subscribed to this author"));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recipes_are_listed_newest_first_with_flags() {
        let client = MemoryClient::new();
        let soup = client.add_recipe("Soup", 30);
        let salad = client.add_recipe("Salad", 10);
        client.put_in_cart(soup);

        let page = client.get_recipes(&RecipeQuery::page(1)).await.unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results[0].id, salad);
        assert!(!page.results[0].is_in_shopping_cart);
        assert!(page.results[1].is_in_shopping_cart);

        let cart = client
            .get_recipes(&RecipeQuery::shopping_cart(999))
            .await
            .unwrap();
        assert_eq!(cart.count, 1);
        assert_eq!(cart.results[0].name, "Soup");
    }

    #[tokio::test]
    async fn test_toggles_reject_noops() {
        let client = MemoryClient::new();
        let soup = client.add_recipe("Soup", 30);

        assert_eq!(client.add_to_cart(soup).await.unwrap().name, "Soup");
        assert!(matches!(client.add_to_cart(soup).await, Err(ApiError::Rejected(_))));
        client.remove_from_cart(soup).await.unwrap();
        assert!(matches!(client.remove_from_cart(soup).await, Err(ApiError::Rejected(_))));
        assert_eq!(client.remove_from_cart(4242).await, Err(ApiError::NotFound));

        client.add_to_favorites(soup).await.unwrap();
        assert_eq!(client.favorites(), vec![soup]);
        client.remove_from_favorites(soup).await.unwrap();
        assert!(client.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_shopping_list_sums_ingredients() {
        let client = MemoryClient::new();
        let soup = client.add_recipe("Soup", 30);
        let pie = client.add_recipe("Pie", 60);
        let salad = client.add_recipe("Salad", 5);
        client.add_ingredient(soup, "potato", "g", 300);
        client.add_ingredient(pie, "potato", "g", 200);
        client.add_ingredient(pie, "egg", "pcs", 2);
        client.add_ingredient(salad, "cucumber", "pcs", 1);
        client.put_in_cart(soup);
        client.put_in_cart(pie);

        let text = client.download_shopping_list().await.unwrap();
        assert_eq!(text, "egg, pcs - 2\npotato, g - 500\n");
    }

    #[tokio::test]
    async fn test_subscriptions_preview_and_pagination() {
        let client = MemoryClient::new();
        let anna = client.add_author("anna");
        for i in 0..7 {
            client.add_recipe_by(anna, &format!("Dish {i}"), 10);
        }
        client.follow(anna);

        let query = SubscriptionQuery {
            page: 1,
            limit: Some(6),
            recipes_limit: Some(3),
        };
        let page = client.get_subscriptions(&query).await.unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].recipes.len(), 3);
        assert_eq!(page.results[0].recipes_count, 7);
        assert_eq!(page.results[0].recipes[0].name, "Dish 6");

        let beyond = SubscriptionQuery { page: 2, ..query };
        assert_eq!(client.get_subscriptions(&beyond).await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_auth_rules() {
        let client = MemoryClient::new();
        client.sign_out().await.unwrap();
        assert_eq!(client.current_user().await, Err(ApiError::Unauthorized));

        let wrong = Credentials {
            email: "cook@example.com".to_string(),
            password: "nope".to_string(),
        };
        assert!(matches!(client.sign_in(&wrong).await, Err(ApiError::Rejected(_))));

        let right = Credentials {
            password: "cookpass".to_string(),
            ..wrong
        };
        assert_eq!(client.sign_in(&right).await.unwrap(), "memory-token");
        assert_eq!(client.current_user().await.unwrap().username, "cook");
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let client = MemoryClient::new();
        client.fail_next(ApiError::Network("offline".to_string()));
        assert!(client.current_user().await.is_err());
        assert!(client.current_user().await.is_ok());
        assert_eq!(client.calls(), vec![Call::CurrentUser, Call::CurrentUser]);
    }
}
