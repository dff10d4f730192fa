use dioxus::prelude::*;
use store::meta;
use store::pages::sign_in::{EMAIL, PASSWORD};
use store::pages::SignInPage;

use crate::auth::{use_api, use_auth};
use crate::components::{Button, Container, Input, Main, MetaTags, Title};
use crate::notices::{notify, use_notices, NoticeLevel};

/// Email and password sign-in. Already signed-in visitors are passed straight
/// to `on_signed_in`.
#[component]
pub fn SignInView(on_signed_in: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notices = use_notices();
    let mut page = use_signal(SignInPage::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if auth().is_authenticated() {
            on_signed_in.call(());
        }
    });

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = {
            let state = page.read();
            if !state.can_submit() || loading() {
                return;
            }
            state.credentials()
        };
        spawn(async move {
            error.set(None);
            loading.set(true);
            match api.sign_in(credentials).await {
                Ok(user) => {
                    page.write().form.reset();
                    notify(
                        &mut notices,
                        NoticeLevel::Info,
                        &format!("Welcome, {}", user.display_name()),
                    );
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let state = page.read().clone();
    let field_error = |name: &str| state.form.error(name).map(str::to_string);

    rsx! {
        MetaTags { meta: meta::SIGN_IN }
        Main {
            Container {
                Title { title: meta::SIGN_IN.title.to_string() }
                form {
                    class: "form",
                    onsubmit: handle_sign_in,
                    if let Some(message) = error() {
                        div { class: "form-alert", "{message}" }
                    }
                    Input {
                        id: EMAIL.to_string(),
                        label: "Email",
                        r#type: "email",
                        required: true,
                        value: state.form.value(EMAIL).to_string(),
                        error: field_error(EMAIL),
                        oninput: move |evt: FormEvent| page.write().handle_change(EMAIL, evt.value()),
                    }
                    Input {
                        id: PASSWORD.to_string(),
                        label: "Password",
                        r#type: "password",
                        required: true,
                        value: state.form.value(PASSWORD).to_string(),
                        error: field_error(PASSWORD),
                        oninput: move |evt: FormEvent| page.write().handle_change(PASSWORD, evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        disabled: loading() || !state.can_submit(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
