use dioxus::prelude::*;
use store::{Recipe, Toggle};

use super::{Button, ButtonVariant};
use crate::icons::{FaBasketShopping, FaCheck, FaClock, FaHeart};
use crate::Icon;

/// A recipe in the Recipes or Favourites grid.
///
/// Toggle buttons only show for signed-in viewers. `on_toggle` receives the
/// toggle and whether to add.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    signed_in: bool,
    #[props(default)] busy: bool,
    on_toggle: EventHandler<(Toggle, bool)>,
) -> Element {
    let in_cart = recipe.is_in_shopping_cart;
    let liked = recipe.is_favorited;

    rsx! {
        article {
            class: "recipe-card",
            if let Some(image) = recipe.image.clone() {
                img { class: "recipe-card-image", src: "{image}", alt: "{recipe.name}" }
            }
            div {
                class: "recipe-card-body",
                div {
                    class: "recipe-card-header",
                    h3 { class: "recipe-card-title", "{recipe.name}" }
                    if signed_in {
                        button {
                            class: if liked { "recipe-card-like active" } else { "recipe-card-like" },
                            title: if liked { "Remove from favourites" } else { "Add to favourites" },
                            disabled: busy,
                            onclick: move |_| on_toggle.call((Toggle::Favorite, !liked)),
                            Icon { width: 14, height: 14, icon: FaHeart }
                        }
                    }
                }
                div {
                    class: "recipe-card-tags",
                    for tag in recipe.tags.iter() {
                        span {
                            key: "{tag.id}",
                            class: "tag",
                            style: tag.color.as_ref().map(|c| format!("background-color: {c}")).unwrap_or_default(),
                            "{tag.name}"
                        }
                    }
                }
                p {
                    class: "recipe-card-time",
                    Icon { width: 12, height: 12, icon: FaClock }
                    " {recipe.cooking_time} min."
                }
                if let Some(author) = recipe.author.as_ref() {
                    p { class: "recipe-card-author", "{author.display_name()}" }
                }
            }
            if signed_in {
                Button {
                    variant: if in_cart { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                    disabled: busy,
                    onclick: move |_| on_toggle.call((Toggle::Cart, !in_cart)),
                    if in_cart {
                        Icon { width: 12, height: 12, icon: FaCheck }
                        " In the cart"
                    } else {
                        Icon { width: 12, height: 12, icon: FaBasketShopping }
                        " Add to cart"
                    }
                }
            }
        }
    }
}
