use dioxus::prelude::*;
use store::meta::PageMeta;
use store::ApiError;

use super::{Button, ButtonVariant};

/// Document title plus the `description` and `og:title` meta tags.
#[component]
pub fn MetaTags(meta: PageMeta) -> Element {
    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: meta.description() }
        document::Meta { property: "og:title", content: meta.og_title() }
    }
}

#[component]
pub fn Main(children: Element) -> Element {
    rsx! {
        main { class: "main", {children} }
    }
}

#[component]
pub fn Container(children: Element) -> Element {
    rsx! {
        div { class: "container", {children} }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        h1 { class: "title", "{title}" }
    }
}

/// Loading line or load error with a retry button. Renders nothing once
/// loaded.
#[component]
pub fn PageStatus(loading: bool, error: Option<ApiError>, on_retry: EventHandler<()>) -> Element {
    if loading {
        return rsx! {
            p { class: "page-status", "Loading..." }
        };
    }
    match error {
        Some(err) => rsx! {
            div {
                class: "page-status error",
                p { "Could not load this page: {err}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        },
        None => rsx! {},
    }
}
