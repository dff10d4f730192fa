use dioxus::prelude::*;
use store::meta;
use store::pages::change_password::{CURRENT_PASSWORD, NEW_PASSWORD, REPEAT_PASSWORD};
use store::pages::ChangePasswordPage;
use store::{FoodgramClient, PasswordChange};

use crate::auth::ApiHandle;
use crate::components::{Button, Container, Input, Main, MetaTags, Title};
use crate::notices::{notify, NoticeLevel, Notices};

/// "Change the password" form. Submitting hands the payload to
/// `on_password_change`; the form itself never calls the API.
#[component]
pub fn ChangePasswordView(
    on_password_change: EventHandler<PasswordChange>,
    #[props(default)] submitting: bool,
) -> Element {
    let mut page = use_signal(ChangePasswordPage::new);

    let state = page.read().clone();
    let can_submit = state.can_submit() && !submitting;
    let mismatch = !state.form.value(REPEAT_PASSWORD).is_empty() && !state.passwords_match();
    let error = |name: &str| state.form.error(name).map(str::to_string);

    rsx! {
        MetaTags { meta: meta::CHANGE_PASSWORD }
        Main {
            Container {
                Title { title: meta::CHANGE_PASSWORD.title.to_string() }
                form {
                    class: "form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let state = page.read();
                        if state.can_submit() {
                            on_password_change.call(state.payload());
                        }
                    },
                    Input {
                        id: CURRENT_PASSWORD.to_string(),
                        label: "Current password",
                        r#type: "password",
                        required: true,
                        value: state.form.value(CURRENT_PASSWORD).to_string(),
                        error: error(CURRENT_PASSWORD),
                        oninput: move |evt: FormEvent| page.write().handle_change(CURRENT_PASSWORD, evt.value()),
                    }
                    Input {
                        id: NEW_PASSWORD.to_string(),
                        label: "New password",
                        r#type: "password",
                        required: true,
                        value: state.form.value(NEW_PASSWORD).to_string(),
                        error: error(NEW_PASSWORD),
                        oninput: move |evt: FormEvent| page.write().handle_change(NEW_PASSWORD, evt.value()),
                    }
                    Input {
                        id: REPEAT_PASSWORD.to_string(),
                        label: "Repeat the new password",
                        r#type: "password",
                        required: true,
                        value: state.form.value(REPEAT_PASSWORD).to_string(),
                        error: if mismatch { Some("Passwords do not match.".to_string()) } else { error(REPEAT_PASSWORD) },
                        oninput: move |evt: FormEvent| page.write().handle_change(REPEAT_PASSWORD, evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        disabled: !can_submit,
                        "Change the password"
                    }
                }
            }
        }
    }
}

/// The application's `on_password_change`: calls `set_password`, then signs
/// out. Returns whether the password was changed; failures become notices.
pub async fn change_password(
    api: ApiHandle,
    mut notices: Signal<Notices>,
    change: PasswordChange,
) -> bool {
    match api.client().change_password(&change).await {
        Ok(()) => {
            notify(
                &mut notices,
                NoticeLevel::Success,
                "Password changed. Please sign in with the new password.",
            );
            api.sign_out().await;
            true
        }
        Err(e) => {
            notify(
                &mut notices,
                NoticeLevel::Error,
                &format!("Could not change the password: {e}"),
            );
            false
        }
    }
}
