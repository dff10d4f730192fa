//! # API crate — the Foodgram REST backend over HTTP
//!
//! [`HttpClient`] implements [`store::FoodgramClient`] with `reqwest`, which
//! uses the browser's `fetch` on wasm and hyper natively, so the web and
//! desktop frontends share one client.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | `HttpClient`: token auth, URL building, one method per endpoint |
//! | [`errors`] | Turns non-success responses into [`store::ApiError`], decoding the backend's error bodies |
//!
//! ## Endpoints
//!
//! | Client operation | Request |
//! |------------------|---------|
//! | `sign_in` / `sign_out` | `POST /auth/token/login/`, `POST /auth/token/logout/` |
//! | `current_user` | `GET /users/me/` |
//! | `change_password` | `POST /users/set_password/` |
//! | `get_recipes` | `GET /recipes/?page&limit&is_in_shopping_cart&is_favorited&author` |
//! | `add_to_cart` / `remove_from_cart` | `GET` / `DELETE /recipes/{id}/shopping_cart/` |
//! | `add_to_favorites` / `remove_from_favorites` | `GET` / `DELETE /recipes/{id}/favorite/` |
//! | `download_shopping_list` | `GET /recipes/download_shopping_cart/` |
//! | `get_subscriptions` | `GET /users/subscriptions/?page&limit&recipes_limit` |
//! | `unsubscribe` | `DELETE /users/{id}/subscribe/` |

pub mod errors;
pub mod http;

pub use http::HttpClient;
pub use store::{ApiError, ApiResult, FoodgramClient};
