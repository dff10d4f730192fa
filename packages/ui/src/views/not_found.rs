use dioxus::prelude::*;
use store::meta;
use store::navigation::RECIPES_HREF;

use crate::components::{Container, Main, MetaTags, Title};

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        MetaTags { meta: meta::NOT_FOUND }
        Main {
            Container {
                Title { title: meta::NOT_FOUND.title.to_string() }
                p { class: "empty", "There is nothing at this address." }
                Link { class: "button button-outline", to: RECIPES_HREF, "Back to recipes" }
            }
        }
    }
}
