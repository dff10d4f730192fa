use dioxus::prelude::*;
use store::PasswordChange;

use crate::Route;

#[component]
pub fn ChangePassword() -> Element {
    let nav = use_navigator();
    let api = ui::use_api();
    let notices = ui::use_notices();
    let mut submitting = use_signal(|| false);

    let on_password_change = move |change: PasswordChange| {
        spawn(async move {
            submitting.set(true);
            let changed = ui::views::change_password(api, notices, change).await;
            submitting.set(false);
            if changed {
                nav.push(Route::SignIn {});
            }
        });
    };

    rsx! {
        ui::views::ChangePasswordView {
            on_password_change: on_password_change,
            submitting: submitting(),
        }
    }
}
