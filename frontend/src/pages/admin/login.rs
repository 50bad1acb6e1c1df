use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::admin::{AdminLoginRequest, AdminLoginResponse};
use shared::constants::ADMIN_LOGIN_ENDPOINT;

use crate::api::post_json;
use crate::identity::set_admin_token;
use crate::styles;
use crate::Route;

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let navigator = use_navigator().expect("Navigator not available");

    let password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if password.trim().is_empty() || *loading {
                return;
            }
            loading.set(true);
            error.set(String::new());

            let request = AdminLoginRequest {
                password: (*password).clone(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match post_json::<AdminLoginResponse, _>(ADMIN_LOGIN_ENDPOINT, &request).await {
                    Ok(response) => {
                        set_admin_token(&response.token);
                        navigator.push(&Route::Admin);
                    }
                    Err(err) => error.set(err.message),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-center")}>
            <div class={classes!(styles::CARD, "max-w-sm", "w-full")}>
                <h2 class={styles::TEXT_H2}>{"Admin sign in"}</h2>
                <form class={styles::FORM} onsubmit={on_submit}>
                    <div>
                        <label class={styles::TEXT_LABEL} for="admin-password">{"Password"}</label>
                        <input
                            id="admin-password"
                            type="password"
                            placeholder="Admin password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            class={styles::INPUT}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={password.trim().is_empty() || *loading}
                        class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                    >
                        { if *loading { "Please wait..." } else { "Sign in" } }
                    </button>
                    if !(*error).is_empty() {
                        <p class={styles::TEXT_ERROR}>{ (*error).clone() }</p>
                    }
                </form>
            </div>
        </div>
    }
}
