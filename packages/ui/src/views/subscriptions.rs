use dioxus::prelude::*;
use store::meta;
use store::pages::SubscriptionsPage;
use store::{FoodgramClient, Request, SubscriptionQuery};

use crate::auth::{use_api, ApiHandle};
use crate::components::{Container, Main, MetaTags, PageStatus, Pagination, SubscriptionList, Title};
use crate::notices::{notify, use_notices, NoticeLevel, Notices};
use crate::provider::use_config;

fn load(api: ApiHandle, mut page: Signal<SubscriptionsPage>, request: Request<SubscriptionQuery>) {
    spawn(async move {
        let result = api.client().get_subscriptions(&request.params).await;
        page.write().on_response(request.ticket, result);
    });
}

fn unsubscribe(
    api: ApiHandle,
    mut page: Signal<SubscriptionsPage>,
    mut notices: Signal<Notices>,
    author_id: u64,
) {
    let Some(pending) = page.write().begin_remove(author_id) else {
        return;
    };
    spawn(async move {
        let result = pending.send(&api.client()).await;
        let settled = page.write().settle_remove(pending, result);
        match settled {
            Ok(Some(reload)) => load(api, page, reload),
            Ok(None) => {}
            Err(e) => notify(
                &mut notices,
                NoticeLevel::Error,
                &format!("Could not unsubscribe: {e}"),
            ),
        }
    });
}

/// "My followings": paginated followed authors with unsubscribe.
#[component]
pub fn SubscriptionsView() -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();
    let mut page = use_signal(|| SubscriptionsPage::new(&config.peek().pages));

    use_hook(move || {
        let request = page.write().mount();
        load(api, page, request);
    });

    let state = page.read().clone();
    let loading = state.phase().is_loading();
    let error = state.phase().error().cloned();
    let failed = error.is_some();

    rsx! {
        MetaTags { meta: meta::SUBSCRIPTIONS }
        Main {
            Container {
                Title { title: meta::SUBSCRIPTIONS.title.to_string() }
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
                    SubscriptionList {
                        subscriptions: state.book.subscriptions().to_vec(),
                        on_unsubscribe: move |author_id| unsubscribe(api, page, notices, author_id),
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
