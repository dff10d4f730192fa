//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{
    use_api, use_auth, Access, ApiHandle, AuthProvider, AuthState, RequireAuth, SignOutButton,
};

pub mod download;
mod session;

mod navbar;
pub use navbar::{Navbar, CHANGE_PASSWORD_HREF, SIGN_IN_HREF};

pub mod notices;
pub use notices::{notify, use_notices, NoticeLevel, NoticeStack, Notices};

mod provider;
pub use provider::{use_config, use_orders, FoodgramProvider, Orders, FOODGRAM_CSS};
