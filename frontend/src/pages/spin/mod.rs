mod spin_support;
mod wheel_canvas;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::constants::{PRIZES_ENDPOINT, SPIN_ENDPOINT, STATUS_ENDPOINT};
use shared::countdown::is_expired;
use shared::prize_pool::PrizeSummary;
use shared::shared_spin::{SpinRequest, SpinResult, SpinSession, StatusRequest};
use shared::validation::{normalize_phone, validate_name, validate_phone};
use shared::wheel::{build_wedges, plan_spin, WheelConfig};

use crate::api::{get_json, post_json};
use crate::components::countdown::parse_timestamp_ms;
use crate::identity::browser_identity;
use crate::styles;
use crate::Route;

use spin_support::{ResultCard, SpinButton};
use wheel_canvas::{ease_out_cubic, WheelCanvas};

/// Validated identity for request payloads, or None when signed out.
fn signed_in_credentials() -> Option<(String, String)> {
    let creds = browser_identity().load();
    let name = creds.full_name?;
    let phone = creds.phone?;
    if validate_name(&name).is_ok() && validate_phone(&phone).is_ok() {
        Some((name, phone))
    } else {
        None
    }
}

// Drives the rotation state through a requestAnimationFrame loop, then
// releases the spin lock after a short settle margin.
fn animate_rotation(
    rotation: UseStateHandle<f64>,
    spinning: UseStateHandle<bool>,
    start: f64,
    target: f64,
    duration_ms: u32,
    settle_ms: u32,
) {
    spinning.set(true);
    let start_time = js_sys::Date::now();
    let change = target - start;
    let duration = f64::from(duration_ms);

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        let progress = (elapsed / duration).min(1.0);
        rotation.set(start + change * ease_out_cubic(progress));

        if elapsed < duration {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        } else {
            rotation.set(target);
            let spinning = spinning.clone();
            spawn_local(async move {
                TimeoutFuture::new(settle_ms).await;
                spinning.set(false);
            });
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web_sys::window() {
        let _ =
            window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

#[function_component(Spin)]
pub fn spin() -> Html {
    let navigator = use_navigator().expect("Navigator not available");

    let session = use_state(SpinSession::new);
    let error_message = use_state(String::new);
    let rotation = use_state(|| 0.0f64);
    let spinning = use_state(|| false);
    let prizes = use_state(Vec::<PrizeSummary>::new);

    let signed_in = signed_in_credentials();

    // Require sign-in before anything else renders.
    {
        let navigator = navigator.clone();
        let missing = signed_in.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    // Active prize list for wedge labels; order defines the wedge index.
    {
        let prizes = prizes.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get_json::<Vec<PrizeSummary>>(PRIZES_ENDPOINT).await {
                    Ok(list) => prizes.set(list),
                    Err(err) => log::warn!("failed to load prize list: {err}"),
                }
            });
            || ()
        });
    }

    // Restores state without animating the wheel.
    let refresh_status = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: ()| {
            let Some((_, phone)) = signed_in_credentials() else {
                return;
            };
            let mut current = (*session).clone();
            if !current.begin() {
                return;
            }
            session.set(current.clone());

            let session = session.clone();
            let error_message = error_message.clone();
            spawn_local(async move {
                let identity = browser_identity();
                let request = StatusRequest {
                    phone: normalize_phone(&phone),
                    device_hash: identity.device_id(true),
                };
                match post_json::<SpinResult, _>(STATUS_ENDPOINT, &request).await {
                    Ok(result) => {
                        current.settle(result);
                        session.set(current);
                    }
                    Err(err) => {
                        current.fail();
                        session.set(current);
                        error_message.set(err.message);
                    }
                }
            });
        })
    };

    // Preload the current status once on mount.
    {
        let refresh_status = refresh_status.clone();
        use_effect_with((), move |_| {
            refresh_status.emit(());
            || ()
        });
    }

    let start_spin = {
        let session = session.clone();
        let error_message = error_message.clone();
        let rotation = rotation.clone();
        let spinning = spinning.clone();

        Callback::from(move |_: MouseEvent| {
            if *spinning {
                return;
            }
            let mut current = (*session).clone();
            if current.spin_blocked() {
                return;
            }
            // Time-based gate: the server said when the next spin opens.
            let cooling = current
                .last
                .as_ref()
                .and_then(|r| r.next_spin_at.as_deref())
                .and_then(parse_timestamp_ms)
                .map(|target| !is_expired(js_sys::Date::now(), target))
                .unwrap_or(false);
            if cooling {
                return;
            }
            let Some((full_name, phone)) = signed_in_credentials() else {
                return;
            };
            if !current.begin() {
                return;
            }
            session.set(current.clone());
            error_message.set(String::new());

            let session = session.clone();
            let error_message = error_message.clone();
            let rotation = rotation.clone();
            let spinning = spinning.clone();
            let current_angle = *rotation;

            spawn_local(async move {
                let identity = browser_identity();
                let request = SpinRequest {
                    full_name,
                    phone: normalize_phone(&phone),
                    device_hash: identity.device_id(false),
                };
                match post_json::<SpinResult, _>(SPIN_ENDPOINT, &request).await {
                    Ok(result) => {
                        // A spin action always rotates the wheel; without
                        // usable wedge data the plan is an unaligned full
                        // turn rather than a silent no-op.
                        let config = WheelConfig::default();
                        let plan = plan_spin(
                            &config,
                            current_angle,
                            result.wedge_index,
                            result.wedges_count,
                        );
                        current.settle(result);
                        session.set(current);
                        animate_rotation(
                            rotation,
                            spinning,
                            current_angle,
                            plan.target_angle,
                            config.spin_duration_ms,
                            config.settle_ms,
                        );
                    }
                    Err(err) => {
                        current.fail();
                        session.set(current);
                        error_message.set(err.message);
                    }
                }
            });
        })
    };

    let Some((full_name, _)) = signed_in else {
        return html! {};
    };

    let config = WheelConfig::default();
    let wedges = build_wedges(&prizes);
    let cooldown_until = session
        .last
        .as_ref()
        .and_then(|r| r.next_spin_at.clone());

    html! {
        <div class={classes!(styles::CONTAINER, "py-8")}>
            <div class={classes!(styles::CARD, "max-w-3xl", "mx-auto")}>
                <header class="flex items-baseline justify-between gap-3 mb-6">
                    <div>
                        <h1 class={styles::TEXT_H2}>{"Lucky Wheel"}</h1>
                        <p class={styles::TEXT_SMALL}>
                            {"Signed in as "}<b>{ full_name }</b>
                            {" · "}
                            <Link<Route> to={Route::Login} classes={styles::LINK}>{"change"}</Link<Route>>
                        </p>
                    </div>
                </header>

                <div class="grid gap-6 md:grid-cols-[minmax(260px,420px)_1fr] items-center">
                    <WheelCanvas
                        rotation={*rotation}
                        is_spinning={*spinning}
                        wedges={wedges}
                        pointer_deg={config.pointer_deg}
                    />

                    <div class="flex flex-col gap-3 items-start">
                        <SpinButton
                            is_spinning={*spinning}
                            requesting={session.requesting()}
                            has_active_code={session.has_active_code()}
                            cooldown_until={cooldown_until}
                            onclick={start_spin}
                        />
                        <button
                            onclick={refresh_status.reform(|_: MouseEvent| ())}
                            class={styles::BUTTON_SECONDARY}
                        >
                            {"Refresh status"}
                        </button>
                        if !(*error_message).is_empty() {
                            <div role="alert" class={styles::TEXT_ERROR}>
                                { (*error_message).clone() }
                            </div>
                        }
                    </div>
                </div>

                {
                    match &session.last {
                        Some(result) => html! { <ResultCard result={result.clone()} /> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
