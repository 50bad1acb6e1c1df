use yew::prelude::*;
use yew_router::prelude::*;

use shared::validation::{validate_name, validate_phone};

use crate::identity::browser_identity;
use crate::styles;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Signed in means both fields are persisted and still pass validation.
    let signed_in = {
        let creds = browser_identity().load();
        match (creds.full_name.as_deref(), creds.phone.as_deref()) {
            (Some(name), Some(phone)) => {
                validate_name(name).is_ok() && validate_phone(phone).is_ok()
            }
            _ => false,
        }
    };

    let (target, label) = if signed_in {
        (Route::Spin, "Go to spin")
    } else {
        (Route::Login, "Sign in to spin")
    };

    html! {
        <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-center")}>
            <div class={classes!(styles::CARD, "max-w-xl", "w-full", "text-center", "space-y-4")}>
                <h1 class={styles::TEXT_H1}>{"Lucky Wheel"}</h1>
                <p class={styles::TEXT_BODY}>
                    {"Spin for a chance to win discounts and treats. One spin per cooldown period."}
                </p>
                <div class="mt-2">
                    <Link<Route> to={target} classes={styles::BUTTON_PRIMARY}>
                        { label }
                    </Link<Route>>
                </div>
                <p class={styles::TEXT_SMALL}>
                    {"You'll be asked for your name and phone on first sign in so staff can verify your code."}
                </p>
            </div>
        </div>
    }
}
