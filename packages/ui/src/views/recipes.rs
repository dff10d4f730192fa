use dioxus::prelude::*;
use store::pages::{RecipeFilter, RecipesPage};
use store::{FoodgramClient, RecipeQuery, Request, Toggle};

use crate::auth::{use_api, use_auth, ApiHandle};
use crate::components::{Container, Main, MetaTags, PageStatus, Pagination, RecipeCard, Title};
use crate::notices::{notify, use_notices, NoticeLevel, Notices};
use crate::provider::{use_config, use_orders, Orders};

fn load(api: ApiHandle, mut page: Signal<RecipesPage>, request: Request<RecipeQuery>) {
    spawn(async move {
        let result = api.client().get_recipes(&request.params).await;
        page.write().on_response(request.ticket, result);
    });
}

fn toggle(
    api: ApiHandle,
    mut page: Signal<RecipesPage>,
    mut orders: Signal<Orders>,
    mut notices: Signal<Notices>,
    recipe_id: u64,
    (kind, to_add): (Toggle, bool),
) {
    let Some(pending) = page.write().toggle(recipe_id, kind, to_add) else {
        return;
    };
    spawn(async move {
        let result = pending.send(&api.client()).await;
        match page.write().settle(&pending, result) {
            Ok(()) => orders.write().adjust(pending.orders_delta()),
            Err(e) => {
                let action = match (kind, to_add) {
                    (Toggle::Cart, true) => "add the recipe to the cart",
                    (Toggle::Cart, false) => "remove the recipe from the cart",
                    (Toggle::Favorite, true) => "add the recipe to favourites",
                    (Toggle::Favorite, false) => "remove the recipe from favourites",
                };
                notify(&mut notices, NoticeLevel::Error, &format!("Could not {action}: {e}"));
            }
        }
    });
}

/// The Recipes and Favourites grids.
#[component]
pub fn RecipesView(#[props(default)] filter: RecipeFilter) -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();
    let orders = use_orders();
    let notices = use_notices();
    let mut page = use_signal(|| RecipesPage::new(&config.peek().pages, filter));

    use_hook(move || {
        let request = page.write().mount();
        load(api, page, request);
    });

    let signed_in = auth().is_authenticated();
    let state = page.read().clone();
    let meta = state.filter().meta();
    let loading = state.phase().is_loading();
    let error = state.phase().error().cloned();
    let failed = error.is_some();
    let recipes = state.visible();

    rsx! {
        MetaTags { meta: meta }
        Main {
            Container {
                Title { title: meta.title.to_string() }
                PageStatus {
                    loading: loading,
                    error: error,
                    on_retry: move |_| {
                        let request = page.write().retry();
                        if let Some(request) = request {
                            load(api, page, request);
                        }
                    },
                }
                if !loading && !failed {
                    if recipes.is_empty() {
                        p { class: "empty", "No recipes yet." }
                    }
                    div {
                        class: "recipe-grid",
                        for recipe in recipes {
                            RecipeCard {
                                key: "{recipe.id}",
                                busy: state.book.is_pending(recipe.id, Toggle::Cart)
                                    || state.book.is_pending(recipe.id, Toggle::Favorite),
                                signed_in: signed_in,
                                on_toggle: move |change| toggle(api, page, orders, notices, recipe.id, change),
                                recipe: recipe.clone(),
                            }
                        }
                    }
                }
                Pagination {
                    pagination: state.pagination(),
                    on_change: move |number| {
                        let request = page.write().change_page(number);
                        if let Some(request) = request {
                            load(api, page, request);
                        }
                    },
                }
            }
        }
    }
}
