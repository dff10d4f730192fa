use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    let navigate_sign_in = move |_: ()| {
        nav.push(Route::SignIn {});
    };

    rsx! {
        ui::Navbar { on_signed_out: navigate_sign_in }
        Outlet::<Route> {}
        ui::NoticeStack {}
    }
}

/// Routes below this layout need a signed-in user.
#[component]
pub fn Guarded() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::RequireAuth {
            on_denied: move |_| {
                nav.replace(Route::SignIn {});
            },
            Outlet::<Route> {}
        }
    }
}
