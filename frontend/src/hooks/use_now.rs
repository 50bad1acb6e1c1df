use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Single once-per-second tick producing "now" in epoch milliseconds.
/// Countdown displays consume this value and stay pure; the interval is
/// dropped when the consuming view unmounts.
#[hook]
pub fn use_now() -> f64 {
    let now = use_state(js_sys::Date::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1000, move || {
                now.set(js_sys::Date::now());
            });
            move || drop(interval)
        });
    }

    *now
}
