//! Shell for the signed-in pages.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Spinner};
use ui::icons::{FaHouse, FaPlus, FaRightFromBracket, FaUser};
use ui::{described, use_auth, use_toast, Icon, Navbar};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect({
        let auth = auth.clone();
        move || {
            if !auth.loading() && auth.user().is_none() {
                nav.replace(Route::Landing {});
            }
        }
    });

    if auth.loading() {
        return rsx! {
            div {
                class: "flex min-h-screen items-center justify-center",
                div {
                    class: "flex flex-col items-center gap-3 text-neutral-500",
                    Spinner {}
                    "Loading..."
                }
            }
        };
    }

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let on_home = route == Route::Home {};
    let on_submit = route == Route::Submit {};
    let on_profile = route == Route::ProfilePage {};

    let sign_out = move |_: MouseEvent| {
        let auth = auth.clone();
        spawn(async move {
            auth.sign_out().await;
            toast.success("Signed out".to_string(), described("See you next time!"));
            nav.replace(Route::Landing {});
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-neutral-50",
            Navbar {
                NavItem { to: Route::Home {}, active: on_home, label: "Home",
                    Icon { icon: FaHouse, width: 14, height: 14 }
                }
                NavItem { to: Route::Submit {}, active: on_submit, label: "Submit",
                    Icon { icon: FaPlus, width: 14, height: 14 }
                }
                NavItem { to: Route::ProfilePage {}, active: on_profile, label: "Profile",
                    Icon { icon: FaUser, width: 14, height: 14 }
                }
                span { class: "hidden px-2 text-sm text-neutral-500 md:inline", "{user.label()}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: sign_out,
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { class: "hidden sm:inline", "Sign Out" }
                }
            }
            main {
                class: "mx-auto max-w-4xl px-4 py-8",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavItem(to: Route, active: bool, #[props(into)] label: String, children: Element) -> Element {
    let class = if active {
        "bg-indigo-100 text-indigo-700"
    } else {
        "text-neutral-600 hover:bg-neutral-100"
    };

    rsx! {
        Link {
            class: "inline-flex items-center gap-2 rounded-md px-3 py-2 text-sm font-medium {class}",
            to,
            {children}
            span { class: "hidden sm:inline", "{label}" }
        }
    }
}
