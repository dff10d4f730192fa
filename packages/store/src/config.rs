//! # Frontend configuration — `foodgram.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost/api"
//!
//! [pages]
//! recipes_page_size = 6
//! subscriptions_page_size = 6
//! subscription_recipes_limit = 5
//! cart_limit = 999
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`FoodgramConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodgramConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pages: PagesConfig,
}

/// Where the REST API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Page sizes and limits used by the list pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_page_size")]
    pub recipes_page_size: u32,
    #[serde(default = "default_page_size")]
    pub subscriptions_page_size: u32,
    /// How many recipes each subscription card previews.
    #[serde(default = "default_recipes_limit")]
    pub subscription_recipes_limit: u32,
    /// The cart is fetched as a single page of this size.
    #[serde(default = "default_cart_limit")]
    pub cart_limit: u32,
}

fn default_page_size() -> u32 {
    6
}

fn default_recipes_limit() -> u32 {
    5
}

fn default_cart_limit() -> u32 {
    999
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            recipes_page_size: default_page_size(),
            subscriptions_page_size: default_page_size(),
            subscription_recipes_limit: default_recipes_limit(),
            cart_limit: default_cart_limit(),
        }
    }
}

impl FoodgramConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "foodgram.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Builder method to point at another API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }
}
