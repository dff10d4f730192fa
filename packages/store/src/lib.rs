pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod meta;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod pagination;
pub mod query;
pub mod recipes;
pub mod subscriptions;

mod memory;
pub use memory::{Call, MemoryClient};

pub use client::{ApiResult, FoodgramClient};
pub use config::FoodgramConfig;
pub use error::ApiError;
pub use fetch::{Fetch, Phase, Request, Ticket};
pub use models::{
    AuthToken, Credentials, Ingredient, Page, PasswordChange, Recipe, RecipeSummary, Subscription,
    Tag, User,
};
pub use navigation::{visible_entries, NavigationEntry, NAVIGATION};
pub use pagination::Pagination;
pub use query::{RecipeQuery, SubscriptionQuery};
pub use recipes::{adjust_orders, PendingToggle, RecipeBook, Toggle};
pub use subscriptions::{PendingRemoval, SubscriptionBook};
