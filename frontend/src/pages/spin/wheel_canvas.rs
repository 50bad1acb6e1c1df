use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::wheel::Wedge;

// Warm pastel palette, one entry per wedge, cycled.
const WEDGE_COLORS: [&str; 10] = [
    "#ffd1c1", "#ffe6a7", "#c2e8ce", "#d8d3ff", "#ffc2cc", "#fbe0a0", "#c7efd8", "#e3ddff",
    "#ffd8cd", "#f7edc9",
];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub is_spinning: bool,
    pub wedges: Vec<Wedge>,
    pub pointer_deg: f64,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;
        let wedges = props.wedges.clone();
        let pointer_deg = props.pointer_deg;

        use_effect_with(
            (rotation, is_spinning, wedges, pointer_deg),
            move |(rotation, is_spinning, wedges, pointer_deg)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        draw_wheel(&canvas, &context, *rotation, *is_spinning, wedges, *pointer_deg);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(178, 74, 59, 0.35));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    rotation: f64,
    is_spinning: bool,
    wedges: &[Wedge],
    pointer_deg: f64,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = (width.min(height)) / 2.0 - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Rim halo, slightly stronger while the wheel is moving
    let glow = if is_spinning { 0.25 } else { 0.12 };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(231, 106, 90, {glow})"));
    let _ = context.arc(center_x, center_y, radius + 14.0, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str(if dark { "#1f2430" } else { "#fffaf3" });
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.fill();

    // Everything the spin rotates is drawn inside this save/restore
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center_x, -center_y);

    for wedge in wedges {
        let start = wedge.start_deg * PI / 180.0;
        let end = wedge.end_deg * PI / 180.0;

        context.begin_path();
        context.set_fill_style_str(WEDGE_COLORS[wedge.index % WEDGE_COLORS.len()]);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.fill();

        context.begin_path();
        context.set_stroke_style_str(if dark {
            "rgba(255, 255, 255, 0.35)"
        } else {
            "rgba(255, 255, 255, 0.9)"
        });
        context.set_line_width(2.0);
        context.move_to(center_x, center_y);
        context.line_to(
            center_x + radius * start.cos(),
            center_y + radius * start.sin(),
        );
        context.stroke();
    }

    // Labels sit upright along each wedge's mid angle
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#5a352f");
    context.set_font("bold 15px 'Segoe UI', Roboto, system-ui, sans-serif");
    for wedge in wedges {
        if wedge.name.is_empty() {
            continue;
        }
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(wedge.mid_deg * PI / 180.0);
        let _ = context.translate(radius * 0.62, 0.0);
        let label: String = if wedge.name.chars().count() > 18 {
            format!("{}…", wedge.name.chars().take(17).collect::<String>())
        } else {
            wedge.name.clone()
        };
        let _ = context.fill_text(&label, 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Hub
    let hub_radius = radius * 0.22;
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#fff7f2" });
    let _ = context.arc(center_x, center_y, hub_radius, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str(if dark { "#454b63" } else { "#f3dfcc" });
    context.set_line_width(5.0);
    let _ = context.arc(center_x, center_y, hub_radius, 0.0, 2.0 * PI);
    context.stroke();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if is_spinning {
        "rgba(231, 106, 90, 0.8)"
    } else {
        "rgba(231, 106, 90, 0.5)"
    });
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Fixed pointer at the configured angle, outside the rotating layer
    let pointer_rad = pointer_deg * PI / 180.0;
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(pointer_rad);
    context.begin_path();
    context.move_to(radius - 6.0, 0.0);
    context.line_to(radius + 24.0, -16.0);
    context.line_to(radius + 24.0, 16.0);
    context.close_path();
    context.set_fill_style_str("#b24a3b");
    context.fill();
    context.set_stroke_style_str("#8d362a");
    context.set_line_width(1.5);
    context.stroke();
    context.restore();
}

// Easing for the spin animation: fast start, long deceleration.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}
