use api::HttpClient;
use dioxus::prelude::*;
use store::{adjust_orders, FoodgramClient, FoodgramConfig, RecipeQuery};

use crate::auth::{use_api, use_auth, AuthProvider};
use crate::notices::Notices;

pub const FOODGRAM_CSS: Asset = asset!("/assets/styling/foodgram.css");

/// Number of recipes in the viewer's cart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orders(pub u64);

impl Orders {
    pub fn adjust(&mut self, delta: i64) {
        self.0 = adjust_orders(self.0, delta);
    }
}

pub fn use_config() -> Signal<FoodgramConfig> {
    use_context::<Signal<FoodgramConfig>>()
}

pub fn use_orders() -> Signal<Orders> {
    use_context::<Signal<Orders>>()
}

/// Root of every Foodgram app: provides configuration, the API client, auth,
/// the orders count and notices to everything below.
#[component]
pub fn FoodgramProvider(config: FoodgramConfig, children: Element) -> Element {
    use_context_provider(|| {
        let client = HttpClient::from_config(&config.api);
        tracing::info!("using API at {}", client.base_url());
        Signal::new(client)
    });
    use_context_provider(|| Signal::new(config));
    use_context_provider(|| Signal::new(Notices::default()));
    use_context_provider(|| Signal::new(Orders::default()));

    rsx! {
        document::Stylesheet { href: FOODGRAM_CSS }
        AuthProvider {
            OrdersSync {}
            {children}
        }
    }
}

/// Keeps the orders count in step with the signed-in user.
#[component]
fn OrdersSync() -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut orders = use_orders();

    use_effect(move || {
        if !auth().is_authenticated() {
            orders.set(Orders::default());
            return;
        }
        spawn(async move {
            match api.client().get_recipes(&RecipeQuery::shopping_cart(1)).await {
                Ok(page) => orders.set(Orders(page.count)),
                Err(e) => tracing::warn!("could not count orders: {}", e),
            }
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_never_negative() {
        let mut orders = Orders(1);
        orders.adjust(-1);
        assert_eq!(orders, Orders(0));
        orders.adjust(-1);
        assert_eq!(orders, Orders(0));
        orders.adjust(1);
        assert_eq!(orders, Orders(1));
    }
}
