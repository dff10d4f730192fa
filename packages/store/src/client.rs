//! # The Foodgram API as seen by the frontend
//!
//! [`FoodgramClient`] is the async boundary between page logic and the
//! backend. The `api` crate implements it over HTTP; [`crate::MemoryClient`]
//! implements it in memory for tests. Page controllers and state owners never
//! depend on a concrete client.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{Credentials, Page, PasswordChange, Recipe, RecipeSummary, Subscription, User};
use crate::query::{RecipeQuery, SubscriptionQuery};

pub type ApiResult<T> = Result<T, ApiError>;

/// Async operations offered by the Foodgram REST API.
pub trait FoodgramClient {
    /// Exchange credentials for an auth token.
    fn sign_in(&self, credentials: &Credentials) -> impl Future<Output = ApiResult<String>>;

    /// Invalidate the current token.
    fn sign_out(&self) -> impl Future<Output = ApiResult<()>>;

    /// The user the current token belongs to.
    fn current_user(&self) -> impl Future<Output = ApiResult<User>>;

    fn change_password(&self, change: &PasswordChange) -> impl Future<Output = ApiResult<()>>;

    fn get_recipes(&self, query: &RecipeQuery) -> impl Future<Output = ApiResult<Page<Recipe>>>;

    fn add_to_cart(&self, recipe_id: u64) -> impl Future<Output = ApiResult<RecipeSummary>>;

    fn remove_from_cart(&self, recipe_id: u64) -> impl Future<Output = ApiResult<()>>;

    fn add_to_favorites(&self, recipe_id: u64) -> impl Future<Output = ApiResult<RecipeSummary>>;

    fn remove_from_favorites(&self, recipe_id: u64) -> impl Future<Output = ApiResult<()>>;

    /// The aggregated shopping list as plain text, one ingredient per line.
    fn download_shopping_list(&self) -> impl Future<Output = ApiResult<String>>;

    fn get_subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> impl Future<Output = ApiResult<Page<Subscription>>>;

    fn unsubscribe(&self, author_id: u64) -> impl Future<Output = ApiResult<()>>;
}
