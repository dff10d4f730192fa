use dioxus::prelude::*;
use store::navigation::{visible_entries, CART_HREF, NAVIGATION, RECIPES_HREF};

use crate::auth::{use_auth, SignOutButton};
use crate::icons::{FaBasketShopping, FaUtensils};
use crate::provider::use_orders;
use crate::Icon;

pub const CHANGE_PASSWORD_HREF: &str = "/change-password";
pub const SIGN_IN_HREF: &str = "/signin";

/// Top menu: the navigation entries the visitor may see, the orders badge on
/// the cart entry, and the account links.
#[component]
pub fn Navbar(on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let orders = use_orders();
    let signed_in = auth().is_authenticated();
    let username = auth().user.map(|u| u.display_name());

    rsx! {
        header {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: RECIPES_HREF,
                Icon { width: 18, height: 18, icon: FaUtensils }
                span { "Foodgram" }
            }
            nav {
                class: "navbar-menu",
                for entry in visible_entries(NAVIGATION, signed_in) {
                    Link {
                        key: "{entry.href}",
                        class: "navbar-link",
                        active_class: "active",
                        to: entry.href,
                        "{entry.title}"
                        if entry.href == CART_HREF && orders().0 > 0 {
                            span {
                                class: "navbar-badge",
                                title: "Recipes in the cart",
                                Icon { width: 12, height: 12, icon: FaBasketShopping }
                                "{orders().0}"
                            }
                        }
                    }
                }
            }
            div {
                class: "navbar-account",
                if signed_in {
                    if let Some(name) = username {
                        span { class: "navbar-user", "{name}" }
                    }
                    Link {
                        class: "navbar-link",
                        active_class: "active",
                        to: CHANGE_PASSWORD_HREF,
                        "Change password"
                    }
                    SignOutButton {
                        class: "navbar-button",
                        on_signed_out: on_signed_out,
                    }
                } else if !auth().loading {
                    Link {
                        class: "navbar-button",
                        to: SIGN_IN_HREF,
                        "Sign in"
                    }
                }
            }
        }
    }
}
