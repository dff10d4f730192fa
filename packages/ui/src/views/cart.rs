use dioxus::prelude::*;
use store::meta;
use store::pages::{show_download, CartPage};
use store::{FoodgramClient, RecipeQuery, Request};

use crate::auth::{use_api, ApiHandle};
use crate::components::{Button, Container, Main, MetaTags, PageStatus, PurchaseList, Title};
use crate::download::{save_text, SHOPPING_LIST_FILE};
use crate::icons::FaDownload;
use crate::notices::{notify, use_notices, NoticeLevel, Notices};
use crate::provider::{use_config, use_orders, Orders};
use crate::Icon;

fn load(api: ApiHandle, mut page: Signal<CartPage>, request: Request<RecipeQuery>) {
    spawn(async move {
        let result = api.client().get_recipes(&request.params).await;
        page.write().on_response(request.ticket, result);
    });
}

fn remove(
    api: ApiHandle,
    mut page: Signal<CartPage>,
    mut orders: Signal<Orders>,
    mut notices: Signal<Notices>,
    recipe_id: u64,
) {
    let Some(pending) = page.write().remove(recipe_id) else {
        return;
    };
    spawn(async move {
        let result = pending.send(&api.client()).await;
        match page.write().settle(&pending, result) {
            Ok(()) => orders.write().adjust(pending.orders_delta()),
            Err(e) => notify(
                &mut notices,
                NoticeLevel::Error,
                &format!("Could not remove the recipe from the cart: {e}"),
            ),
        }
    });
}

fn download(api: ApiHandle, mut notices: Signal<Notices>, mut downloading: Signal<bool>) {
    downloading.set(true);
    spawn(async move {
        match api.client().download_shopping_list().await {
            Ok(text) => match save_text(SHOPPING_LIST_FILE, &text) {
                Ok(location) => notify(
                    &mut notices,
                    NoticeLevel::Success,
                    &format!("Shopping list saved to {location}"),
                ),
                Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
            },
            Err(e) => notify(
                &mut notices,
                NoticeLevel::Error,
                &format!("Could not download the shopping list: {e}"),
            ),
        }
        downloading.set(false);
    });
}

/// "List of purchases": the cart, item removal and the shopping list download.
#[component]
pub fn CartView() -> Element {
    let api = use_api();
    let config = use_config();
    let orders = use_orders();
    let notices = use_notices();
    let mut page = use_signal(|| CartPage::new(&config.peek().pages));
    let downloading = use_signal(|| false);

    use_hook(move || {
        let request = page.write().mount();
        load(api, page, request);
    });

    let (loading, error) = {
        let state = page.read();
        (state.phase().is_loading(), state.phase().error().cloned())
    };
    let failed = error.is_some();
    let purchases = page.read().purchases();

    rsx! {
        MetaTags { meta: meta::CART }
        Main {
            Container {
                Title { title: meta::CART.title.to_string() }
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
                    PurchaseList {
                        purchases: purchases,
                        on_remove: move |id| remove(api, page, orders, notices, id),
                    }
                }
                if show_download(orders().0) {
                    Button {
                        class: "download",
                        disabled: downloading(),
                        onclick: move |_| download(api, notices, downloading),
                        Icon { width: 14, height: 14, icon: FaDownload }
                        if downloading() { " Preparing..." } else { " Download list" }
                    }
                }
            }
        }
    }
}
