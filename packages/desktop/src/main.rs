use dioxus::prelude::*;

use views::{
    AppLayout, Cart, ChangePassword, Favorites, Guarded, NotFound, Recipes, SignIn, Subscriptions,
};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/recipes")]
        Recipes {},
        #[route("/signin")]
        SignIn {},
        #[layout(Guarded)]
            #[route("/favorites")]
            Favorites {},
            #[route("/cart")]
            Cart {},
            #[route("/subscriptions")]
            Subscriptions {},
            #[route("/change-password")]
            ChangePassword {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::FoodgramProvider {
            config: config::load(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/recipes`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Recipes {});
    rsx! {}
}
