use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use shared::constants::COPY_FAILED_ERROR;
use shared::countdown::is_expired;
use shared::shared_spin::{SpinResult, SpinStatus};

use crate::components::countdown::{format_local, parse_timestamp_ms, Countdown};
use crate::hooks::use_now;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub requesting: bool,
    pub has_active_code: bool,
    /// Next eligible spin time from the latest server response, if any.
    pub cooldown_until: Option<String>,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let now = use_now();

    let cooling = props
        .cooldown_until
        .as_deref()
        .and_then(parse_timestamp_ms)
        .map(|target| !is_expired(now, target))
        .unwrap_or(false);

    let disabled = props.is_spinning || props.requesting || props.has_active_code || cooling;

    let label = if props.is_spinning {
        html! { {"Spinning..."} }
    } else if props.requesting {
        html! { {"Please wait..."} }
    } else if props.has_active_code {
        html! { {"You already have a code"} }
    } else if cooling {
        html! {
            <>
                {"Next spin in "}
                <Countdown to={props.cooldown_until.clone().unwrap_or_default()} />
            </>
        }
    } else {
        html! { {"Spin"} }
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            {disabled}
            class={classes!(styles::BUTTON_PRIMARY, "w-full", "max-w-[300px]", "py-3", "text-lg", "gap-2")}
        >
            { label }
        </button>
    }
}

fn next_spin_row(next_spin_at: &Option<String>) -> Html {
    match next_spin_at {
        Some(at) => html! {
            <div class={styles::TEXT_BODY}>
                {"Next spin: "}{ format_local(at) }{" · "}
                <Countdown to={at.clone()} />
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub result: SpinResult,
}

/// Renders the latest server result. What is shown is a pure projection of
/// the status, one arm per variant.
#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let copied = use_state(|| false);
    let copy_error = use_state(String::new);

    let on_copy = {
        let code = props.result.code.clone();
        let copied = copied.clone();
        let copy_error = copy_error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(code) = code.clone() else { return };
            let copied = copied.clone();
            let copy_error = copy_error.clone();
            spawn_local(async move {
                let Some(clipboard) = window().map(|w| w.navigator().clipboard()) else {
                    copy_error.set(COPY_FAILED_ERROR.to_string());
                    return;
                };
                match JsFuture::from(clipboard.write_text(&code)).await {
                    Ok(_) => {
                        copied.set(true);
                        TimeoutFuture::new(1200).await;
                        copied.set(false);
                    }
                    Err(_) => copy_error.set(COPY_FAILED_ERROR.to_string()),
                }
            });
        })
    };

    let result = &props.result;
    let banner = match result.status {
        SpinStatus::New | SpinStatus::ExistingActive => styles::CARD_SUCCESS,
        SpinStatus::Cooldown => styles::CARD_WARNING,
        _ => styles::CARD_ERROR,
    };

    let detail = match result.status {
        SpinStatus::New | SpinStatus::ExistingActive => html! {
            <div class="space-y-2">
                <div class={styles::TEXT_BODY}>
                    <b>{"You won: "}</b>{ result.prize_name.clone().unwrap_or_default() }
                    {
                        match &result.prize_value {
                            Some(value) => html! { <i>{ format!(" ({value})") }</i> },
                            None => html! {},
                        }
                    }
                </div>
                <div class="flex gap-3 items-center flex-wrap">
                    <span class={styles::TEXT_BODY}>
                        {"Code: "}
                        <code class={styles::CODE_PILL}>{ result.code.clone().unwrap_or_default() }</code>
                    </span>
                    <button
                        onclick={on_copy}
                        disabled={result.code.is_none()}
                        class={styles::BUTTON_SECONDARY}
                    >
                        { if *copied { "Copied!" } else { "Copy" } }
                    </button>
                </div>
                {
                    match &result.expires_at {
                        Some(at) => html! {
                            <div class={styles::TEXT_BODY}>
                                {"Expires: "}{ format_local(at) }{" · "}
                                <Countdown to={at.clone()} />
                                {" left"}
                            </div>
                        },
                        None => html! {},
                    }
                }
                if !(*copy_error).is_empty() {
                    <p class={styles::TEXT_ERROR}>{ (*copy_error).clone() }</p>
                }
            </div>
        },
        SpinStatus::AlreadyRedeemed => html! {
            <div class="space-y-1">
                {
                    match &result.redeemed_at {
                        Some(at) => html! {
                            <div class={styles::TEXT_BODY}>
                                {"Last redeemed at: "}<b>{ format_local(at) }</b>
                            </div>
                        },
                        None => html! {},
                    }
                }
                { next_spin_row(&result.next_spin_at) }
            </div>
        },
        SpinStatus::Expired => html! {
            <div class="space-y-1">
                {
                    match &result.expires_at {
                        Some(at) => html! {
                            <div class={styles::TEXT_BODY}>
                                {"Last code expired: "}<b>{ format_local(at) }</b>
                            </div>
                        },
                        None => html! {},
                    }
                }
                { next_spin_row(&result.next_spin_at) }
            </div>
        },
        SpinStatus::Cooldown => next_spin_row(&result.next_spin_at),
        SpinStatus::None => html! {},
    };

    html! {
        <section class="mt-6 space-y-3" aria-live="polite">
            if !result.message.is_empty() {
                <div class={banner}>{ result.message.clone() }</div>
            }
            { detail }
        </section>
    }
}
