//! # Page controllers
//!
//! One controller per routed page. Each is a plain state machine: the view
//! feeds it events (mount, page change, retry, user actions) and performs the
//! [`Request`](crate::fetch::Request)s it hands back, then reports the
//! responses. None of them perform I/O themselves.
//!
//! | Controller | Page |
//! |------------|------|
//! | [`CartPage`] | List of purchases |
//! | [`SubscriptionsPage`] | My followings |
//! | [`RecipesPage`] | Recipes and Favourites |
//! | [`ChangePasswordPage`] | Change the password |
//! | [`SignInPage`] | Sign in |

mod cart;
pub use cart::{show_download, CartPage};

pub mod change_password;
pub use change_password::ChangePasswordPage;

mod recipes;
pub use recipes::{RecipeFilter, RecipesPage};

pub mod sign_in;
pub use sign_in::SignInPage;

mod subscriptions;
pub use subscriptions::SubscriptionsPage;
