//! Query parameters for the list endpoints.
//!
//! Only the parameters that are set end up in the query string; booleans go
//! over the wire as `1` / `0` like the backend's filter set expects.

/// Parameters of `GET /recipes/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    pub page: u32,
    pub limit: Option<u32>,
    pub is_in_shopping_cart: Option<bool>,
    pub is_favorited: Option<bool>,
}

impl RecipeQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// The single request the cart page issues.
    pub fn shopping_cart(limit: u32) -> Self {
        Self {
            page: 1,
            limit: Some(limit),
            is_in_shopping_cart: Some(true),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn favorited(mut self) -> Self {
        self.is_favorited = Some(true);
        self
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(flag) = self.is_in_shopping_cart {
            pairs.push(("is_in_shopping_cart", flag_value(flag)));
        }
        if let Some(flag) = self.is_favorited {
            pairs.push(("is_favorited", flag_value(flag)));
        }
        pairs
    }
}

/// Parameters of `GET /users/subscriptions/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionQuery {
    pub page: u32,
    pub limit: Option<u32>,
    pub recipes_limit: Option<u32>,
}

impl SubscriptionQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(limit) = self.recipes_limit {
            pairs.push(("recipes_limit", limit.to_string()));
        }
        pairs
    }
}

fn flag_value(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_cart_query() {
        let pairs = RecipeQuery::shopping_cart(999).to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("limit", "999".to_string()),
                ("is_in_shopping_cart", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_unset_parameters_are_omitted() {
        assert_eq!(RecipeQuery::page(3).to_pairs(), vec![("page", "3".to_string())]);

        let pairs = RecipeQuery::page(2).with_limit(6).favorited().to_pairs();
        assert!(pairs.contains(&("is_favorited", "1".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "is_in_shopping_cart"));
    }

    #[test]
    fn test_subscription_query() {
        let query = SubscriptionQuery {
            page: 4,
            limit: Some(6),
            recipes_limit: Some(5),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "4".to_string()),
                ("limit", "6".to_string()),
                ("recipes_limit", "5".to_string()),
            ]
        );
    }
}
