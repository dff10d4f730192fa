//! Document-head metadata per page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
}

impl PageMeta {
    pub const fn new(title: &'static str) -> Self {
        Self { title }
    }

    /// Content of `<meta name="description">`.
    pub fn description(&self) -> String {
        format!("Foodgram - {}", self.title)
    }

    /// Content of `<meta property="og:title">`.
    pub fn og_title(&self) -> &'static str {
        self.title
    }
}

pub const CART: PageMeta = PageMeta::new("List of purchases");
pub const CHANGE_PASSWORD: PageMeta = PageMeta::new("Change the password");
pub const SUBSCRIPTIONS: PageMeta = PageMeta::new("My followings");
pub const RECIPES: PageMeta = PageMeta::new("Recipes");
pub const FAVORITES: PageMeta = PageMeta::new("Favourites");
pub const SIGN_IN: PageMeta = PageMeta::new("Sign in");
pub const NOT_FOUND: PageMeta = PageMeta::new("Page not found");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_meta() {
        assert_eq!(CART.title, "List of purchases");
        assert_eq!(CART.description(), "Foodgram - List of purchases");
        assert_eq!(CART.og_title(), "List of purchases");
    }
}
