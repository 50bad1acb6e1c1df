use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::admin::Analytics;
use shared::constants::ADMIN_ANALYTICS_ENDPOINT;

use crate::api::admin_post;
use crate::components::countdown::format_local;
use crate::hooks::{eject_if_unauthorized, use_admin_guard};
use crate::styles;
use crate::Route;

fn stat_card(label: &str, value: i64) -> Html {
    html! {
        <div class={styles::STAT_CARD}>
            <div class={styles::TEXT_SECONDARY}>{ label.to_string() }</div>
            <div class="text-2xl font-semibold text-gray-900 dark:text-white">{ value }</div>
        </div>
    }
}

#[function_component(AdminAnalytics)]
pub fn admin_analytics() -> Html {
    use_admin_guard();
    let navigator = use_navigator().expect("Navigator not available");

    let data = use_state(|| None::<Analytics>);
    let error = use_state(String::new);

    {
        let data = data.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let body = serde_json::json!({});
                match admin_post::<Analytics, _>(ADMIN_ANALYTICS_ENDPOINT, &body).await {
                    Ok(analytics) => data.set(Some(analytics)),
                    Err(err) => {
                        if !eject_if_unauthorized(&err, &navigator) {
                            error.set(err.message);
                        }
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class={classes!(styles::CONTAINER, "py-8")}>
            <div class={classes!(styles::CARD, "max-w-4xl", "mx-auto", "space-y-6")}>
                <h2 class={styles::TEXT_H2}>{"Analytics"}</h2>

                <Link<Route> to={Route::Admin} classes={styles::LINK}>
                    {"Back to admin"}
                </Link<Route>>

                if !(*error).is_empty() {
                    <div class={styles::CARD_ERROR}>{ (*error).clone() }</div>
                }

                {
                    match &*data {
                        Some(analytics) => html! {
                            <>
                                <section class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                                    { stat_card("Users", analytics.totals.users) }
                                    { stat_card("Spins", analytics.totals.spins) }
                                    { stat_card("Codes", analytics.totals.codes) }
                                    { stat_card("Redeemed", analytics.totals.redeemed) }
                                    { stat_card("Expired", analytics.totals.expired) }
                                    { stat_card("Active", analytics.totals.active) }
                                </section>

                                <section class="space-y-2">
                                    <h3 class={styles::TEXT_H3}>{"By prize"}</h3>
                                    <table class={styles::TABLE}>
                                        <thead>
                                            <tr>
                                                <th class={styles::TABLE_HEADER}>{"Prize"}</th>
                                                <th class={classes!(styles::TABLE_HEADER, "text-right")}>{"Issued"}</th>
                                                <th class={classes!(styles::TABLE_HEADER, "text-right")}>{"Redeemed"}</th>
                                                <th class={classes!(styles::TABLE_HEADER, "text-right")}>{"Expired"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            { for analytics.prizes.iter().map(|p| html! {
                                                <tr key={p.prize_id}>
                                                    <td class={styles::TABLE_CELL}>{ p.prize_name.clone() }</td>
                                                    <td class={classes!(styles::TABLE_CELL, "text-right")}>{ p.issued }</td>
                                                    <td class={classes!(styles::TABLE_CELL, "text-right")}>{ p.redeemed }</td>
                                                    <td class={classes!(styles::TABLE_CELL, "text-right")}>{ p.expired }</td>
                                                </tr>
                                            }) }
                                        </tbody>
                                    </table>
                                </section>

                                <section class="space-y-2">
                                    <h3 class={styles::TEXT_H3}>{"Recent redemptions"}</h3>
                                    <ul class="space-y-1">
                                        { for analytics.recent.iter().enumerate().map(|(i, r)| html! {
                                            <li key={i} class={styles::TEXT_BODY}>
                                                <code class={styles::CODE_PILL}>{ r.code.clone() }</code>
                                                {" · "}{ r.prize.clone() }
                                                {
                                                    match &r.redeemed_at {
                                                        Some(at) => html! { <>{" · "}{ format_local(at) }</> },
                                                        None => html! {},
                                                    }
                                                }
                                                {
                                                    match (r.user_name.as_deref(), r.user_phone.as_deref()) {
                                                        (Some(name), _) => html! { format!(" ({name})") },
                                                        (None, Some(phone)) => html! { format!(" ({phone})") },
                                                        (None, None) => html! {},
                                                    }
                                                }
                                            </li>
                                        }) }
                                    </ul>
                                </section>
                            </>
                        },
                        None if (*error).is_empty() => html! {
                            <div class="flex justify-center py-8">
                                <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                                </svg>
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
