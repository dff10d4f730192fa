//! # Recipe list owner
//!
//! [`RecipeBook`] owns the recipes a page shows and the cart/favourite toggles
//! on them. Toggles are optimistic: [`RecipeBook::begin`] flips the flag right
//! away and returns a [`PendingToggle`]; once the server answered,
//! [`RecipeBook::settle`] keeps the flip or rolls it back. A rollback is
//! skipped when a newer page has replaced the list since the toggle began.
//!
//! Only one toggle of each kind may be in flight per recipe; a second click
//! while the first is pending is ignored.

use crate::client::{ApiResult, FoodgramClient};
use crate::models::{Page, Recipe};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Cart,
    Favorite,
}

/// A toggle applied locally and awaiting the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingToggle {
    pub recipe_id: u64,
    pub toggle: Toggle,
    pub to_add: bool,
    revision: u64,
}

impl PendingToggle {
    /// Issue the matching API call.
    pub async fn send<C: FoodgramClient>(&self, client: &C) -> ApiResult<()> {
        match (self.toggle, self.to_add) {
            (Toggle::Cart, true) => client.add_to_cart(self.recipe_id).await.map(|_| ()),
            (Toggle::Cart, false) => client.remove_from_cart(self.recipe_id).await,
            (Toggle::Favorite, true) => client.add_to_favorites(self.recipe_id).await.map(|_| ()),
            (Toggle::Favorite, false) => client.remove_from_favorites(self.recipe_id).await,
        }
    }

    /// How a confirmed toggle moves the orders count.
    pub fn orders_delta(&self) -> i64 {
        match (self.toggle, self.to_add) {
            (Toggle::Cart, true) => 1,
            (Toggle::Cart, false) => -1,
            (Toggle::Favorite, _) => 0,
        }
    }
}

/// Apply a confirmed toggle to the orders count, never going below zero.
pub fn adjust_orders(orders: u64, delta: i64) -> u64 {
    orders.saturating_add_signed(delta)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    count: u64,
    pending: Vec<(u64, Toggle)>,
    /// Bumped whenever a fetched page replaces the list.
    revision: u64,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Total on the server, which may exceed the loaded page.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn get(&self, recipe_id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    /// Replace the list with a freshly fetched page.
    pub fn set_page(&mut self, page: Page<Recipe>) {
        self.count = page.count;
        self.recipes = page.results;
        self.revision += 1;
    }

    /// Recipes still flagged as in the cart, in list order.
    pub fn in_cart(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|r| r.is_in_shopping_cart)
    }

    pub fn is_pending(&self, recipe_id: u64, toggle: Toggle) -> bool {
        self.pending.contains(&(recipe_id, toggle))
    }

    /// Optimistically set `toggle` on a recipe. `None` when the recipe is not
    /// listed, already in the requested state, or a toggle is in flight.
    pub fn begin(
        &mut self,
        recipe_id: u64,
        toggle: Toggle,
        to_add: bool,
    ) -> Option<PendingToggle> {
        if self.is_pending(recipe_id, toggle) {
            return None;
        }
        let recipe = self.recipes.iter_mut().find(|r| r.id == recipe_id)?;
        let flag = flag_mut(recipe, toggle);
        if *flag == to_add {
            return None;
        }
        *flag = to_add;
        self.pending.push((recipe_id, toggle));
        Some(PendingToggle {
            recipe_id,
            toggle,
            to_add,
            revision: self.revision,
        })
    }

    /// Reconcile a toggle with the server's answer, rolling back on failure.
    pub fn settle(&mut self, pending: &PendingToggle, result: ApiResult<()>) -> ApiResult<()> {
        self.pending
            .retain(|entry| *entry != (pending.recipe_id, pending.toggle));
        let Err(err) = result else {
            return Ok(());
        };
        if pending.revision != self.revision {
            tracing::debug!(
                "{:?} toggle on recipe {} failed after a reload, keeping fetched flags",
                pending.toggle,
                pending.recipe_id
            );
            return Err(err);
        }
        tracing::warn!(
            "rolling back {:?} toggle on recipe {}: {err}",
            pending.toggle,
            pending.recipe_id
        );
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == pending.recipe_id) {
            let flag = flag_mut(recipe, pending.toggle);
            if *flag == pending.to_add {
                *flag = !pending.to_add;
            }
        }
        Err(err)
    }
}

fn flag_mut(recipe: &mut Recipe, toggle: Toggle) -> &mut bool {
    match toggle {
        Toggle::Cart => &mut recipe.is_in_shopping_cart,
        Toggle::Favorite => &mut recipe.is_favorited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn recipe(id: u64, name: &str, in_cart: bool) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            cooking_time: 10,
            is_in_shopping_cart: in_cart,
            ..Recipe::default()
        }
    }

    fn book() -> RecipeBook {
        let mut book = RecipeBook::new();
        book.set_page(Page::new(
            vec![
                recipe(1, "Soup", true),
                recipe(2, "Salad", false),
                recipe(3, "Pie", true),
            ],
            3,
        ));
        book
    }

    #[test]
    fn test_in_cart_keeps_order() {
        let book = book();
        let names: Vec<_> = book.in_cart().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Pie"]);
        assert_eq!(book.count(), 3);
    }

    #[test]
    fn test_confirmed_removal() {
        let mut book = book();
        let pending = book.begin(1, Toggle::Cart, false).unwrap();
        assert_eq!(pending.orders_delta(), -1);
        assert_eq!(book.in_cart().count(), 1);
        assert!(book.is_pending(1, Toggle::Cart));

        assert!(book.settle(&pending, Ok(())).is_ok());
        assert!(!book.is_pending(1, Toggle::Cart));
        assert!(!book.get(1).unwrap().is_in_shopping_cart);
    }

    #[test]
    fn test_failed_toggle_rolls_back() {
        let mut book = book();
        let pending = book.begin(2, Toggle::Favorite, true).unwrap();
        assert!(book.get(2).unwrap().is_favorited);

        let err = book.settle(&pending, Err(ApiError::rejected("already favourited")));
        assert_eq!(err, Err(ApiError::rejected("already favourited")));
        assert!(!book.get(2).unwrap().is_favorited);
    }

    #[test]
    fn test_failed_toggle_after_reload_keeps_fetched_flag() {
        let mut book = book();
        let pending = book.begin(2, Toggle::Favorite, true).unwrap();

        // The server already reports the recipe as favourited.
        let mut fresh = recipe(2, "Salad", false);
        fresh.is_favorited = true;
        book.set_page(Page::new(vec![fresh], 1));

        let result = book.settle(&pending, Err(ApiError::Network("offline".to_string())));
        assert!(result.is_err());
        assert!(book.get(2).unwrap().is_favorited);
        assert!(!book.is_pending(2, Toggle::Favorite));
    }

    #[test]
    fn test_begin_rejects_noops_and_double_clicks() {
        let mut book = book();
        assert!(book.begin(2, Toggle::Cart, false).is_none());
        assert!(book.begin(42, Toggle::Cart, true).is_none());

        let first = book.begin(2, Toggle::Cart, true).unwrap();
        assert!(book.begin(2, Toggle::Cart, false).is_none());
        // A favourite toggle on the same recipe is independent.
        assert!(book.begin(2, Toggle::Favorite, true).is_some());
        book.settle(&first, Ok(())).unwrap();
        assert!(book.begin(2, Toggle::Cart, false).is_some());
    }

    #[test]
    fn test_adjust_orders() {
        assert_eq!(adjust_orders(2, 1), 3);
        assert_eq!(adjust_orders(2, -1), 1);
        assert_eq!(adjust_orders(0, -1), 0);
    }
}
