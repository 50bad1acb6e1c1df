use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::constants::{
    INVALID_PHONE_ERROR, NAME_CHARACTERS_ERROR, NAME_REQUIRED_ERROR, NAME_TOO_SHORT_ERROR,
    PHONE_REQUIRED_ERROR,
};
use shared::validation::{validate_name, validate_phone};

use crate::identity::browser_identity;
use crate::styles;
use crate::Route;

fn name_error(raw: &str) -> Option<&'static str> {
    match validate_name(raw) {
        Ok(()) => None,
        Err(e) => Some(match e.code.as_ref() {
            "name_too_short" => NAME_TOO_SHORT_ERROR,
            "name_invalid_characters" => NAME_CHARACTERS_ERROR,
            _ => NAME_REQUIRED_ERROR,
        }),
    }
}

fn phone_error(raw: &str) -> Option<&'static str> {
    match validate_phone(raw) {
        Ok(()) => None,
        Err(e) => Some(match e.code.as_ref() {
            "phone_required" => PHONE_REQUIRED_ERROR,
            _ => INVALID_PHONE_ERROR,
        }),
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator().expect("Navigator not available");

    // Prefill from the identity store so returning customers only confirm.
    let stored = browser_identity().load();
    let full_name = use_state(|| stored.full_name.unwrap_or_default());
    let phone = use_state(|| stored.phone.unwrap_or_default());
    let touched_name = use_state(|| false);
    let touched_phone = use_state(|| false);

    let name_invalid = name_error(&full_name);
    let phone_invalid = phone_error(&phone);
    let can_submit = name_invalid.is_none() && phone_invalid.is_none();

    let on_name_input = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_submit = {
        let full_name = full_name.clone();
        let phone = phone.clone();
        let touched_name = touched_name.clone();
        let touched_phone = touched_phone.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched_name.set(true);
            touched_phone.set(true);
            if name_error(&full_name).is_some() || phone_error(&phone).is_some() {
                return;
            }
            // Validation passed, so the store may persist the pair.
            browser_identity().save(&full_name, &phone);
            navigator.push(&Route::Spin);
        })
    };

    let input_class = |value: &str, touched: bool, error: Option<&str>| {
        if value.is_empty() {
            styles::INPUT
        } else if error.is_none() {
            styles::INPUT_OK
        } else if touched {
            styles::INPUT_ERROR
        } else {
            styles::INPUT
        }
    };

    html! {
        <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-center")}>
            <div class={classes!(styles::CARD, "max-w-md", "w-full")}>
                <h2 class={styles::TEXT_H2}>{"Welcome"}</h2>
                <p class={styles::TEXT_SECONDARY}>{"Sign in to spin the wheel"}</p>

                <form class={styles::FORM} onsubmit={on_submit}>
                    <div>
                        <label class={styles::TEXT_LABEL} for="full-name">{"Full name"}</label>
                        <input
                            id="full-name"
                            type="text"
                            autocomplete="name"
                            placeholder="Aysel Mammadova"
                            value={(*full_name).clone()}
                            oninput={on_name_input}
                            onblur={{
                                let touched_name = touched_name.clone();
                                Callback::from(move |_| touched_name.set(true))
                            }}
                            class={input_class(&full_name, *touched_name, name_invalid)}
                        />
                        <p class={styles::TEXT_HINT}>{"Please enter your first and last name."}</p>
                        if *touched_name {
                            if let Some(reason) = name_invalid {
                                <p class={styles::TEXT_ERROR}>{ reason }</p>
                            }
                        }
                    </div>

                    <div>
                        <label class={styles::TEXT_LABEL} for="phone">{"Phone"}</label>
                        <input
                            id="phone"
                            type="tel"
                            autocomplete="tel"
                            inputmode="tel"
                            placeholder="+994 55 123 45 67"
                            value={(*phone).clone()}
                            oninput={on_phone_input}
                            onblur={{
                                let touched_phone = touched_phone.clone();
                                Callback::from(move |_| touched_phone.set(true))
                            }}
                            class={input_class(&phone, *touched_phone, phone_invalid)}
                        />
                        <p class={styles::TEXT_HINT}>{"Include your country code (for example +994...)."}</p>
                        if *touched_phone {
                            if let Some(reason) = phone_invalid {
                                <p class={styles::TEXT_ERROR}>{ reason }</p>
                            }
                        }
                    </div>

                    <div class="flex gap-3 items-center">
                        <button
                            type="submit"
                            disabled={!can_submit}
                            class={styles::BUTTON_PRIMARY}
                        >
                            {"Continue"}
                        </button>
                        <Link<Route> to={Route::Home} classes={styles::BUTTON_SECONDARY}>
                            {"Back"}
                        </Link<Route>>
                    </div>

                    <p class={styles::TEXT_SMALL}>
                        {"We keep your name and phone on this device for convenience. You can change them later."}
                    </p>
                </form>
            </div>
        </div>
    }
}
