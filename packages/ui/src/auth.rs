//! Authentication context and hooks for the UI.

use api::HttpClient;
use dioxus::prelude::*;
use store::{ApiResult, Credentials, FoodgramClient, User};

use crate::session;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the stored token has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

/// What a guarded route should do for the current visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Pending,
    Granted,
    Denied,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn access(&self) -> Access {
        if self.loading {
            Access::Pending
        } else if self.is_authenticated() {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Hands out API clients carrying the current token.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    base: Signal<HttpClient>,
    auth: Signal<AuthState>,
}

impl ApiHandle {
    /// A client for the current session. Does not subscribe the caller.
    pub fn client(&self) -> HttpClient {
        self.base.peek().with_token(self.auth.peek().token.clone())
    }

    /// Exchange credentials for a token, load the user and persist the
    /// session.
    pub async fn sign_in(mut self, credentials: Credentials) -> ApiResult<User> {
        let anonymous = self.base.peek().with_token(None);
        let token = anonymous.sign_in(&credentials).await?;
        let user = anonymous.with_token(Some(token.clone())).current_user().await?;
        session::save_token(&token);
        self.auth.set(AuthState {
            user: Some(user.clone()),
            token: Some(token),
            loading: false,
        });
        Ok(user)
    }

    /// Drop the session locally whatever the server says.
    pub async fn sign_out(mut self) {
        if let Err(e) = self.client().sign_out().await {
            tracing::warn!("token logout failed: {}", e);
        }
        session::clear_token();
        self.auth.set(AuthState::signed_out());
        tracing::info!("signed out");
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        base: use_context::<Signal<HttpClient>>(),
        auth: use_auth(),
    }
}

/// Provider component that manages authentication state.
/// Restores the saved token on mount and checks it against `/users/me/`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(|| AuthState {
        token: session::load_token(),
        ..AuthState::default()
    });
    use_context_provider(|| auth_state);
    let base = use_context::<Signal<HttpClient>>();

    use_hook(move || {
        spawn(async move {
            let Some(token) = auth_state.peek().token.clone() else {
                auth_state.set(AuthState::signed_out());
                return;
            };
            let client = base.peek().with_token(Some(token));
            match client.current_user().await {
                Ok(user) => {
                    tracing::info!("restored session for {}", user.email);
                    let mut state = auth_state.write();
                    state.user = Some(user);
                    state.loading = false;
                }
                Err(e) if e.is_auth() => {
                    tracing::info!("stored token rejected, signing out");
                    session::clear_token();
                    auth_state.set(AuthState::signed_out());
                }
                Err(e) => {
                    tracing::warn!("could not restore session: {}", e);
                    auth_state.write().loading = false;
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Button to sign the current user out.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut busy = use_signal(|| false);

    let onclick = move |_| async move {
        busy.set(true);
        api.sign_out().await;
        busy.set(false);
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

/// Renders `children` only for signed-in users; calls `on_denied` once the
/// auth check finished without a user.
#[component]
pub fn RequireAuth(on_denied: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if auth().access() == Access::Denied {
            on_denied.call(());
        }
    });

    match auth().access() {
        Access::Pending => rsx! {
            p { class: "page-status", "Loading..." }
        },
        Access::Denied => rsx! {},
        Access::Granted => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access() {
        assert_eq!(AuthState::default().access(), Access::Pending);
        assert_eq!(AuthState::signed_out().access(), Access::Denied);
        let state = AuthState {
            user: Some(User::default()),
            token: Some("abc".to_string()),
            loading: false,
        };
        assert_eq!(state.access(), Access::Granted);
    }
}
