use dioxus::prelude::*;
use store::pages::RecipeFilter;

#[component]
pub fn Recipes() -> Element {
    rsx! {
        ui::views::RecipesView {}
    }
}

#[component]
pub fn Favorites() -> Element {
    rsx! {
        ui::views::RecipesView { filter: RecipeFilter::Favorites }
    }
}

#[component]
pub fn Cart() -> Element {
    rsx! {
        ui::views::CartView {}
    }
}

#[component]
pub fn Subscriptions() -> Element {
    rsx! {
        ui::views::SubscriptionsView {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));
    rsx! {
        ui::views::NotFoundView {}
    }
}
