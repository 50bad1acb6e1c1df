pub mod analytics;
pub mod login;
pub mod prizes;
pub mod redeem;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_admin_guard;
use crate::identity::clear_admin_token;
use crate::styles;
use crate::Route;

#[function_component(AdminHome)]
pub fn admin_home() -> Html {
    use_admin_guard();
    let navigator = use_navigator().expect("Navigator not available");

    let on_logout = Callback::from(move |_| {
        clear_admin_token();
        navigator.push(&Route::AdminLogin);
    });

    html! {
        <div class={classes!(styles::CONTAINER, "py-8")}>
            <div class={classes!(styles::CARD, "max-w-lg", "mx-auto", "space-y-6")}>
                <h2 class={styles::TEXT_H2}>{"Admin"}</h2>
                <div class="flex gap-3 flex-wrap">
                    <Link<Route> to={Route::AdminRedeem} classes={styles::BUTTON_PRIMARY}>
                        {"Redeem"}
                    </Link<Route>>
                    <Link<Route> to={Route::AdminPrizes} classes={styles::BUTTON_PRIMARY}>
                        {"Set prizes"}
                    </Link<Route>>
                    <Link<Route> to={Route::AdminAnalytics} classes={styles::BUTTON_PRIMARY}>
                        {"Analytics"}
                    </Link<Route>>
                </div>
                <div>
                    <button onclick={on_logout} class={styles::BUTTON_SECONDARY}>
                        {"Log out"}
                    </button>
                </div>
            </div>
        </div>
    }
}
