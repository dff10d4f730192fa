use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SignInView {
            on_signed_in: move |_| {
                nav.replace(Route::Recipes {});
            },
        }
    }
}
