use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::admin::{RedeemRequest, RedeemResponse, RedeemStatus};
use shared::constants::ADMIN_REDEEM_ENDPOINT;

use crate::api::admin_post;
use crate::components::countdown::format_local;
use crate::hooks::{eject_if_unauthorized, use_admin_guard};
use crate::styles;
use crate::Route;

#[function_component(AdminRedeem)]
pub fn admin_redeem() -> Html {
    use_admin_guard();
    let navigator = use_navigator().expect("Navigator not available");

    let code = use_state(String::new);
    let result = use_state(|| None::<RedeemResponse>);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let on_code_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_redeem = {
        let code = code.clone();
        let result = result.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = code.trim().to_string();
            if trimmed.is_empty() || *loading {
                return;
            }
            loading.set(true);
            error.set(String::new());
            result.set(None);

            let request = RedeemRequest { code: trimmed };
            let result = result.clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match admin_post::<RedeemResponse, _>(ADMIN_REDEEM_ENDPOINT, &request).await {
                    Ok(response) => result.set(Some(response)),
                    Err(err) => {
                        if !eject_if_unauthorized(&err, &navigator) {
                            error.set(err.message);
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_clear = {
        let code = code.clone();
        let result = result.clone();
        let error = error.clone();
        Callback::from(move |_| {
            code.set(String::new());
            result.set(None);
            error.set(String::new());
        })
    };

    html! {
        <div class={classes!(styles::CONTAINER, "py-8")}>
            <div class={classes!(styles::CARD, "max-w-2xl", "mx-auto", "space-y-4")}>
                <h2 class={styles::TEXT_H2}>{"Redeem a code"}</h2>

                <Link<Route> to={Route::Admin} classes={styles::LINK}>
                    {"Back to admin"}
                </Link<Route>>

                <form class="flex gap-3 items-center" onsubmit={on_redeem}>
                    <input
                        placeholder="Paste or scan the customer code"
                        value={(*code).clone()}
                        oninput={on_code_input}
                        class={classes!(styles::INPUT, "flex-1", "mt-0")}
                    />
                    <button
                        type="submit"
                        disabled={code.trim().is_empty() || *loading}
                        class={styles::BUTTON_PRIMARY}
                    >
                        { if *loading { "Please wait..." } else { "Redeem" } }
                    </button>
                    <button type="button" onclick={on_clear} class={styles::BUTTON_SECONDARY}>
                        {"Clear"}
                    </button>
                </form>

                if !(*error).is_empty() {
                    <div class={styles::CARD_ERROR}>{ (*error).clone() }</div>
                }

                {
                    match &*result {
                        Some(response) => {
                            let (card, label) = match response.status {
                                RedeemStatus::Redeemed => (styles::CARD_SUCCESS, "Redeemed"),
                                RedeemStatus::AlreadyRedeemed => (styles::CARD_WARNING, "Already redeemed"),
                                RedeemStatus::Expired => (styles::CARD_ERROR, "Expired"),
                                RedeemStatus::Invalid => (styles::CARD_ERROR, "Invalid code"),
                            };
                            html! {
                                <div class={card}>
                                    <div><b>{"Status: "}</b>{ label }</div>
                                    {
                                        match &response.prize_name {
                                            Some(name) => html! {
                                                <div>
                                                    <b>{"Prize: "}</b>{ name }
                                                    {
                                                        match &response.prize_value {
                                                            Some(value) => html! { format!(" ({value})") },
                                                            None => html! {},
                                                        }
                                                    }
                                                </div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                    {
                                        match &response.redeemed_at {
                                            Some(at) => html! {
                                                <div><b>{"Redeemed at: "}</b>{ format_local(at) }</div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                </div>
                            }
                        }
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
