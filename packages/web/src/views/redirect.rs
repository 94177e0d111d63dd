use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Send an already signed-in user on to the feed.
pub(super) fn use_signed_in_redirect() {
    let auth = use_auth();
    let nav = use_navigator();
    use_effect(move || {
        if !auth.loading() && auth.user().is_some() {
            nav.replace(Route::Home {});
        }
    });
}
