use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use shared::constants::ADMIN_PRIZES_ENDPOINT;
use shared::prize_pool::{
    can_submit, total_active_weight, Prize, PrizesSetRequest, PrizesSetResponse,
};

use crate::api::{admin_delete, admin_get, admin_put};
use crate::hooks::{eject_if_unauthorized, use_admin_guard, use_form_state};
use crate::styles;
use crate::Route;

const ICON_OPTIONS: [(&str, &str); 9] = [
    ("", "(none)"),
    ("donut", "Donut"),
    ("coffee", "Coffee"),
    ("croissant", "Croissant"),
    ("cake", "Cake"),
    ("cookie", "Cookie"),
    ("percent", "Percent"),
    ("gift", "Gift"),
    ("star", "Star"),
];

/// Draft row with a stable client-side key; the prize itself may not have a
/// server id yet.
#[derive(Clone, PartialEq)]
struct PrizeRow {
    uid: String,
    prize: Prize,
}

fn wrap_rows(prizes: Vec<Prize>) -> Vec<PrizeRow> {
    prizes
        .into_iter()
        .map(|prize| PrizeRow {
            uid: Uuid::new_v4().to_string(),
            prize,
        })
        .collect()
}

fn fresh_row() -> PrizeRow {
    PrizeRow {
        uid: Uuid::new_v4().to_string(),
        prize: Prize {
            id: None,
            name: String::new(),
            kind: "other".to_string(),
            value: None,
            weight: 0,
            active: true,
            icon: None,
        },
    }
}

fn update_row(rows: &UseStateHandle<Vec<PrizeRow>>, uid: &str, apply: impl FnOnce(&mut Prize)) {
    let mut next: Vec<PrizeRow> = (**rows).clone();
    if let Some(row) = next.iter_mut().find(|r| r.uid == uid) {
        apply(&mut row.prize);
        rows.set(next);
    }
}

/// Outgoing payload: blank values become null, client keys are dropped.
fn draft_prizes(rows: &[PrizeRow]) -> Vec<Prize> {
    rows.iter()
        .map(|row| {
            let mut prize = row.prize.clone();
            if prize
                .value
                .as_deref()
                .map(|v| v.trim().is_empty())
                .unwrap_or(false)
            {
                prize.value = None;
            }
            prize
        })
        .collect()
}

#[function_component(AdminPrizes)]
pub fn admin_prizes() -> Html {
    use_admin_guard();
    let navigator = use_navigator().expect("Navigator not available");

    let rows = use_state(Vec::<PrizeRow>::new);
    let form = use_form_state();
    let saving = use_state(|| false);
    let busy_uid = use_state(|| None::<String>);

    // Load the full draft list; re-run after every successful save so
    // server-assigned ids replace client drafts.
    let load_rows = {
        let rows = rows.clone();
        let handle_error = form.handle_error.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            let rows = rows.clone();
            let handle_error = handle_error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match admin_get::<Vec<Prize>>(ADMIN_PRIZES_ENDPOINT).await {
                    Ok(list) => rows.set(wrap_rows(list)),
                    Err(err) => {
                        if !eject_if_unauthorized(&err, &navigator) {
                            handle_error.emit(err.message);
                        }
                    }
                }
            });
        })
    };

    {
        let load_rows = load_rows.clone();
        use_effect_with((), move |_| {
            load_rows.emit(());
            || ()
        });
    }

    let on_add_row = {
        let rows = rows.clone();
        Callback::from(move |_| {
            let mut next = (*rows).clone();
            next.push(fresh_row());
            rows.set(next);
        })
    };

    let on_save = {
        let rows = rows.clone();
        let saving = saving.clone();
        let form = form.clone();
        let navigator = navigator.clone();
        let load_rows = load_rows.clone();
        Callback::from(move |_| {
            let prizes = draft_prizes(&rows);
            if !can_submit(&prizes) || *saving {
                return;
            }
            saving.set(true);

            let saving = saving.clone();
            let form = form.clone();
            let navigator = navigator.clone();
            let load_rows = load_rows.clone();
            spawn_local(async move {
                let request = PrizesSetRequest { prizes };
                match admin_put::<PrizesSetResponse, _>(ADMIN_PRIZES_ENDPOINT, &request).await {
                    Ok(response) if response.ok => {
                        form.handle_success
                            .emit(response.message.unwrap_or_else(|| "Saved".to_string()));
                        load_rows.emit(());
                    }
                    Ok(response) => {
                        form.handle_error
                            .emit(response.message.unwrap_or_else(|| "Could not save".to_string()));
                    }
                    Err(err) => {
                        if !eject_if_unauthorized(&err, &navigator) {
                            form.handle_error.emit(err.message);
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    let prizes = draft_prizes(&rows);
    let valid = can_submit(&prizes);
    let total_weight = total_active_weight(&prizes);

    html! {
        <div class={classes!(styles::CONTAINER, "py-8")}>
            <div class={classes!(styles::CARD, "max-w-5xl", "mx-auto", "space-y-4")}>
                <h2 class={styles::TEXT_H2}>{"Configure prizes"}</h2>

                <Link<Route> to={Route::Admin} classes={styles::LINK}>
                    {"Back to admin"}
                </Link<Route>>

                <div class="flex gap-3 items-center flex-wrap">
                    <button onclick={on_add_row} class={styles::BUTTON_SECONDARY}>
                        {"Add prize"}
                    </button>
                    <button
                        onclick={on_save}
                        disabled={!valid || *saving}
                        class={styles::BUTTON_PRIMARY}
                    >
                        { if *saving { "Saving..." } else { "Save changes" } }
                    </button>
                    <span class={styles::TEXT_SECONDARY}>
                        {"Total active weight: "}<b>{ total_weight }</b>
                    </span>
                </div>

                if !form.error.is_empty() {
                    <div class={styles::CARD_ERROR}>{ form.error.clone() }</div>
                }
                if !form.success.is_empty() {
                    <div class={styles::CARD_SUCCESS}>{ form.success.clone() }</div>
                }

                <div class="overflow-x-auto">
                    <table class={styles::TABLE}>
                        <thead>
                            <tr>
                                <th class={styles::TABLE_HEADER}>{"Active"}</th>
                                <th class={styles::TABLE_HEADER}>{"Name"}</th>
                                <th class={styles::TABLE_HEADER}>{"Type"}</th>
                                <th class={styles::TABLE_HEADER}>{"Value"}</th>
                                <th class={styles::TABLE_HEADER}>{"Weight"}</th>
                                <th class={styles::TABLE_HEADER}>{"Odds"}</th>
                                <th class={styles::TABLE_HEADER}>{"Icon"}</th>
                                <th class={styles::TABLE_HEADER}></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|row| render_row(
                                row,
                                &rows,
                                &busy_uid,
                                &form.handle_error,
                                &form.handle_success,
                                &navigator,
                                total_weight,
                            )) }
                            if rows.is_empty() {
                                <tr>
                                    <td colspan="8" class={classes!(styles::TABLE_CELL, "opacity-70")}>
                                        {"No prizes yet. Click \"Add prize\" to create one."}
                                    </td>
                                </tr>
                            }
                        </tbody>
                    </table>
                </div>

                <p class={styles::TEXT_SMALL}>
                    {"A prize's chance is its weight divided by the sum of weights of all active prizes. \
                      Set weight 0 to keep a prize defined but never drawn."}
                </p>
            </div>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_row(
    row: &PrizeRow,
    rows: &UseStateHandle<Vec<PrizeRow>>,
    busy_uid: &UseStateHandle<Option<String>>,
    handle_error: &Callback<String>,
    handle_success: &Callback<String>,
    navigator: &Navigator,
    total_weight: i64,
) -> Html {
    let uid = row.uid.clone();
    let prize = &row.prize;
    let busy = busy_uid.as_deref() == Some(row.uid.as_str());

    let on_active = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_row(&rows, &uid, |p| p.active = input.checked());
        })
    };

    let on_name = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_row(&rows, &uid, |p| p.name = input.value());
        })
    };

    let on_kind = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_row(&rows, &uid, |p| p.kind = input.value());
        })
    };

    let on_value = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            update_row(&rows, &uid, |p| {
                p.value = if value.is_empty() { None } else { Some(value) }
            });
        })
    };

    let on_weight = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let weight = input.value().parse::<i64>().unwrap_or(0).max(0);
            update_row(&rows, &uid, |p| p.weight = weight);
        })
    };

    let on_icon = {
        let rows = rows.clone();
        let uid = uid.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            update_row(&rows, &uid, |p| {
                p.icon = if value.is_empty() { None } else { Some(value) }
            });
        })
    };

    let on_remove = {
        let rows = rows.clone();
        let uid = uid.clone();
        let busy_uid = busy_uid.clone();
        let handle_error = handle_error.clone();
        let handle_success = handle_success.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(row) = rows.iter().find(|r| r.uid == uid).cloned() else {
                return;
            };

            // A draft row was never saved: removing it is purely local.
            let Some(id) = row.prize.id else {
                let next: Vec<PrizeRow> =
                    rows.iter().filter(|r| r.uid != uid).cloned().collect();
                rows.set(next);
                return;
            };

            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete prize \"{}\"?", row.prize.name))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            busy_uid.set(Some(uid.clone()));
            let rows = rows.clone();
            let uid = uid.clone();
            let busy_uid = busy_uid.clone();
            let handle_error = handle_error.clone();
            let handle_success = handle_success.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match admin_delete(&format!("{ADMIN_PRIZES_ENDPOINT}/{id}")).await {
                    Ok(()) => {
                        // Only drop the row once the server confirmed.
                        let next: Vec<PrizeRow> =
                            rows.iter().filter(|r| r.uid != uid).cloned().collect();
                        rows.set(next);
                        handle_success.emit("Prize deleted".to_string());
                    }
                    Err(err) => {
                        if !eject_if_unauthorized(&err, &navigator) {
                            handle_error.emit(err.message);
                        }
                    }
                }
                busy_uid.set(None);
            });
        })
    };

    let odds = if prize.active && prize.weight > 0 && total_weight > 0 {
        format!(
            "{:.0}%",
            prize.weight as f64 / total_weight as f64 * 100.0
        )
    } else {
        "-".to_string()
    };

    html! {
        <tr key={row.uid.clone()}>
            <td class={classes!(styles::TABLE_CELL, "text-center")}>
                <input type="checkbox" checked={prize.active} onchange={on_active} />
            </td>
            <td class={styles::TABLE_CELL}>
                <input
                    value={prize.name.clone()}
                    oninput={on_name}
                    placeholder="10% discount / Free coffee"
                    class={classes!(styles::INPUT, "mt-0")}
                />
            </td>
            <td class={styles::TABLE_CELL}>
                <input
                    value={prize.kind.clone()}
                    oninput={on_kind}
                    placeholder="discount / free_item / other"
                    class={classes!(styles::INPUT, "mt-0")}
                />
            </td>
            <td class={styles::TABLE_CELL}>
                <input
                    value={prize.value.clone().unwrap_or_default()}
                    oninput={on_value}
                    placeholder="10% / Cappuccino"
                    class={classes!(styles::INPUT, "mt-0")}
                />
            </td>
            <td class={classes!(styles::TABLE_CELL, "w-28")}>
                <input
                    type="number"
                    min="0"
                    step="1"
                    value={prize.weight.to_string()}
                    oninput={on_weight}
                    class={classes!(styles::INPUT, "mt-0")}
                />
            </td>
            <td class={styles::TABLE_CELL}>{ odds }</td>
            <td class={styles::TABLE_CELL}>
                <select onchange={on_icon} class={classes!(styles::INPUT, "mt-0")}>
                    { for ICON_OPTIONS.iter().map(|(value, label)| html! {
                        <option
                            value={*value}
                            selected={prize.icon.as_deref().unwrap_or("") == *value}
                        >
                            { *label }
                        </option>
                    }) }
                </select>
            </td>
            <td class={styles::TABLE_CELL}>
                <button onclick={on_remove} disabled={busy} class={styles::BUTTON_DANGER}>
                    { if busy { "Removing..." } else { "Remove" } }
                </button>
            </td>
        </tr>
    }
}
