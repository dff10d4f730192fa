use crate::client::ApiResult;
use crate::config::PagesConfig;
use crate::fetch::{Fetch, Phase, Request, Ticket};
use crate::meta::{self, PageMeta};
use crate::models::{Page, Recipe};
use crate::pagination::Pagination;
use crate::query::RecipeQuery;
use crate::recipes::{PendingToggle, RecipeBook, Toggle};

/// Which recipes a list page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecipeFilter {
    #[default]
    All,
    Favorites,
}

impl RecipeFilter {
    pub fn meta(&self) -> PageMeta {
        match self {
            RecipeFilter::All => meta::RECIPES,
            RecipeFilter::Favorites => meta::FAVORITES,
        }
    }
}

/// The paginated Recipes and Favourites pages.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipesPage {
    pub book: RecipeBook,
    fetch: Fetch<RecipeQuery>,
    filter: RecipeFilter,
    page: u32,
    page_size: u32,
}

impl RecipesPage {
    pub fn new(pages: &PagesConfig, filter: RecipeFilter) -> Self {
        Self {
            book: RecipeBook::new(),
            fetch: Fetch::new(),
            filter,
            page: 1,
            page_size: pages.recipes_page_size,
        }
    }

    pub fn filter(&self) -> RecipeFilter {
        self.filter
    }

    pub fn phase(&self) -> &Phase<RecipeQuery> {
        self.fetch.phase()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    fn query(&self) -> RecipeQuery {
        let query = RecipeQuery::page(self.page).with_limit(self.page_size);
        match self.filter {
            RecipeFilter::All => query,
            RecipeFilter::Favorites => query.favorited(),
        }
    }

    pub fn mount(&mut self) -> Request<RecipeQuery> {
        let query = self.query();
        self.fetch.begin(query)
    }

    pub fn change_page(&mut self, page: u32) -> Option<Request<RecipeQuery>> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.mount())
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

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.book.count(), self.page_size, self.page)
    }

    /// Recipes to render. On Favourites, a recipe unliked in place drops out.
    pub fn visible(&self) -> Vec<Recipe> {
        self.book
            .recipes()
            .iter()
            .filter(|r| self.filter == RecipeFilter::All || r.is_favorited)
            .cloned()
            .collect()
    }

    pub fn toggle(
        &mut self,
        recipe_id: u64,
        toggle: Toggle,
        to_add: bool,
    ) -> Option<PendingToggle> {
        self.book.begin(recipe_id, toggle, to_add)
    }

    pub fn settle(&mut self, pending: &PendingToggle, result: ApiResult<()>) -> ApiResult<()> {
        self.book.settle(pending, result)
    }
}
