use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Numbered page buttons with previous/next arrows. Hidden for a single page.
#[component]
pub fn Pagination(pagination: store::Pagination, on_change: EventHandler<u32>) -> Element {
    if !pagination.is_needed() {
        return rsx! {};
    }
    let current = pagination.current;

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "pagination-arrow",
                title: "Previous page",
                disabled: !pagination.has_previous(),
                onclick: move |_| on_change.call(pagination.clamp(current.saturating_sub(1))),
                Icon { width: 12, height: 12, icon: FaChevronLeft }
            }
            for page in pagination.pages() {
                button {
                    key: "{page}",
                    class: if page == current { "pagination-page active" } else { "pagination-page" },
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            button {
                class: "pagination-arrow",
                title: "Next page",
                disabled: !pagination.has_next(),
                onclick: move |_| on_change.call(pagination.clamp(current + 1)),
                Icon { width: 12, height: 12, icon: FaChevronRight }
            }
        }
    }
}
