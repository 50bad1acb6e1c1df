use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiError;
use crate::identity::{clear_admin_token, get_admin_token};
use crate::Route;

/// Bounces to the admin login page when no token is stored. Admin pages
/// call this on mount; the token itself is only verified by the server.
#[hook]
pub fn use_admin_guard() {
    let navigator = use_navigator().expect("Navigator not available");

    use_effect_with((), move |_| {
        if get_admin_token().is_none() {
            navigator.push(&Route::AdminLogin);
        }
        || ()
    });
}

/// A 401/403 means the stored token went stale: discard it and send the
/// operator back through login. Returns true when the error was consumed.
pub fn eject_if_unauthorized(error: &ApiError, navigator: &Navigator) -> bool {
    if error.is_auth() {
        clear_admin_token();
        navigator.push(&Route::AdminLogin);
        true
    } else {
        false
    }
}
