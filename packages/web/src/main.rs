use dioxus::prelude::*;

use ui::{AuthProvider, BackendProvider, Toaster};
use views::{AppLayout, AuthPage, Home, Landing, NotFound, ProfilePage, Submit};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    AuthPage {},
    #[nest("/home")]
        #[layout(AppLayout)]
            #[route("/")]
            Home {},
            #[route("/submit")]
            Submit {},
            #[route("/profile")]
            ProfilePage {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            AuthProvider {
                Toaster {
                    Router::<Route> {}
                }
            }
        }
    }
}
