use crate::client::ApiResult;
use crate::config::PagesConfig;
use crate::fetch::{Fetch, Phase, Request, Ticket};
use crate::models::{Page, Recipe};
use crate::query::RecipeQuery;
use crate::recipes::{PendingToggle, RecipeBook, Toggle};

/// The "List of purchases" page.
///
/// Loads the whole cart as one page on mount. Removing an item goes through
/// the shared cart toggle of [`RecipeBook`].
#[derive(Clone, Debug, PartialEq)]
pub struct CartPage {
    pub book: RecipeBook,
    fetch: Fetch<RecipeQuery>,
    limit: u32,
}

impl CartPage {
    pub fn new(pages: &PagesConfig) -> Self {
        Self {
            book: RecipeBook::new(),
            fetch: Fetch::new(),
            limit: pages.cart_limit,
        }
    }

    pub fn phase(&self) -> &Phase<RecipeQuery> {
        self.fetch.phase()
    }

    pub fn mount(&mut self) -> Request<RecipeQuery> {
        self.fetch.begin(RecipeQuery::shopping_cart(self.limit))
    }

    pub fn retry(&mut self) -> Option<Request<RecipeQuery>> {
        self.fetch.retry()
    }

    /// Returns whether the response was applied.
    pub fn on_response(&mut self, ticket: Ticket, result: ApiResult<Page<Recipe>>) -> bool {
        match self.fetch.settle(ticket, result) {
            Some(page) => {
                self.book.set_page(page);
                true
            }
            None => false,
        }
    }

    /// The purchase list, in the order the server returned it.
    pub fn purchases(&self) -> Vec<Recipe> {
        self.book.in_cart().cloned().collect()
    }

    /// Start removing a recipe from the cart.
    pub fn remove(&mut self, recipe_id: u64) -> Option<PendingToggle> {
        self.book.begin(recipe_id, Toggle::Cart, false)
    }

    pub fn settle(&mut self, pending: &PendingToggle, result: ApiResult<()>) -> ApiResult<()> {
        self.book.settle(pending, result)
    }
}

/// The download button only makes sense with something in the cart.
pub fn show_download(orders: u64) -> bool {
    orders > 0
}
