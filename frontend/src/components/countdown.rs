use chrono::{DateTime, Local, NaiveDateTime};
use yew::prelude::*;

use shared::countdown::{format_hms, is_expired, remaining_seconds};

use crate::hooks::use_now;

/// Server timestamps arrive as RFC-3339, occasionally without an offset.
pub fn parse_timestamp_ms(raw: &str) -> Option<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis() as f64);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis() as f64)
}

/// Human-readable local rendering of a server timestamp.
pub fn format_local(raw: &str) -> String {
    match parse_timestamp_ms(raw) {
        Some(ms) => DateTime::from_timestamp_millis(ms as i64)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => raw.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    /// RFC-3339 target timestamp.
    pub to: String,
}

/// Live HH:MM:SS until the target, fed by the shared one-second tick. A past
/// timestamp reads as expired rather than a negative duration.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let now = use_now();

    match parse_timestamp_ms(&props.to) {
        Some(target) if !is_expired(now, target) => html! {
            <span class="font-mono font-semibold">
                { format_hms(remaining_seconds(now, target)) }
            </span>
        },
        Some(_) => html! { <span class="font-semibold">{"expired"}</span> },
        None => html! {},
    }
}
