use dioxus::prelude::*;
use store::Subscription;

use super::{Button, ButtonVariant};
use crate::icons::FaClock;
use crate::Icon;

/// Followed authors with a preview of their recipes.
#[component]
pub fn SubscriptionList(
    subscriptions: Vec<Subscription>,
    on_unsubscribe: EventHandler<u64>,
) -> Element {
    if subscriptions.is_empty() {
        return rsx! {
            p { class: "empty", "You are not following anyone yet." }
        };
    }

    rsx! {
        div {
            class: "subscription-list",
            for subscription in subscriptions {
                SubscriptionCard {
                    key: "{subscription.id()}",
                    subscription: subscription.clone(),
                    on_unsubscribe: on_unsubscribe,
                }
            }
        }
    }
}

#[component]
fn SubscriptionCard(subscription: Subscription, on_unsubscribe: EventHandler<u64>) -> Element {
    let author_id = subscription.id();
    let hidden = subscription.hidden_recipes();

    rsx! {
        article {
            class: "subscription",
            h2 { class: "subscription-author", "{subscription.author.display_name()}" }
            ul {
                class: "subscription-recipes",
                for recipe in subscription.recipes.iter() {
                    li {
                        key: "{recipe.id}",
                        class: "subscription-recipe",
                        if let Some(image) = recipe.image.clone() {
                            img { src: "{image}", alt: "{recipe.name}" }
                        }
                        span { class: "subscription-recipe-name", "{recipe.name}" }
                        span {
                            class: "subscription-recipe-time",
                            Icon { width: 12, height: 12, icon: FaClock }
                            " {recipe.cooking_time} min."
                        }
                    }
                }
            }
            if hidden > 0 {
                p { class: "subscription-more", "{hidden} more recipes..." }
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| on_unsubscribe.call(author_id),
                "Unsubscribe"
            }
        }
    }
}
