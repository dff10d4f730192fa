use dioxus::prelude::*;
use store::Recipe;

use crate::icons::FaClock;
use crate::Icon;

/// The recipes in the cart, each with a remove button.
#[component]
pub fn PurchaseList(purchases: Vec<Recipe>, on_remove: EventHandler<u64>) -> Element {
    if purchases.is_empty() {
        return rsx! {
            p { class: "empty", "The list of purchases is empty." }
        };
    }

    rsx! {
        ul {
            class: "purchase-list",
            for recipe in purchases {
                li {
                    key: "{recipe.id}",
                    class: "purchase",
                    if let Some(image) = recipe.image.clone() {
                        img { class: "purchase-image", src: "{image}", alt: "{recipe.name}" }
                    }
                    div {
                        class: "purchase-body",
                        h3 { class: "purchase-title", "{recipe.name}" }
                        p {
                            class: "purchase-time",
                            Icon { width: 12, height: 12, icon: FaClock }
                            " {recipe.cooking_time} min."
                        }
                    }
                    button {
                        class: "purchase-delete",
                        onclick: move |_| on_remove.call(recipe.id),
                        "Remove"
                    }
                }
            }
        }
    }
}
