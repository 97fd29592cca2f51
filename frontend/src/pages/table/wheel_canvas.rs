use std::f64::consts::{FRAC_PI_2, TAU};

use shared::wheel::{color_of, PocketColor, Wheel};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with((rotation, is_spinning), move |(rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                draw(
                    &context,
                    canvas.width() as f64,
                    canvas.height() as f64,
                    *rotation,
                    *is_spinning,
                );
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="450"
            height="450"
            class="w-full max-w-[450px] h-auto rounded-full shadow-lg"
        />
    }
}

fn pocket_fill(color: PocketColor) -> &'static str {
    match color {
        PocketColor::Red => "#ff0000",
        PocketColor::Black => "#000000",
        PocketColor::Green => "#008000",
    }
}

fn draw(
    context: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    rotation: f64,
    is_spinning: bool,
) {
    let wheel = Wheel::european();
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 40.0;
    let rim_width = 18.0;
    let segment = wheel.segment_angle();

    context.clear_rect(0.0, 0.0, width, height);

    // gold rim
    context.begin_path();
    context.set_fill_style_str("#d4af37");
    let _ = context.arc(center_x, center_y, radius + rim_width, 0.0, TAU);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str("#9b7a1d");
    context.set_line_width(2.0);
    let _ = context.arc(center_x, center_y, radius + rim_width, 0.0, TAU);
    context.stroke();

    // pockets
    for (index, &pocket) in wheel.pockets().iter().enumerate() {
        let start = rotation + index as f64 * segment;
        let end = start + segment;

        context.begin_path();
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.set_fill_style_str(pocket_fill(color_of(pocket)));
        context.fill();

        // pocket number kept upright along the segment center
        let text_radius = radius * 0.85;
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(start + segment / 2.0);
        let _ = context.translate(text_radius, 0.0);
        let _ = context.rotate(FRAC_PI_2);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 14px Arial");
        let _ = context.fill_text(&pocket.to_string(), 0.0, 0.0);
        context.restore();
    }

    // hub
    context.begin_path();
    let _ = context.arc(center_x, center_y, radius * 0.58, 0.0, TAU);
    context.set_fill_style_str("#111111");
    context.fill();

    // ring highlight while the wheel is moving
    context.begin_path();
    context.set_stroke_style_str(if is_spinning {
        "rgba(255, 215, 0, 0.8)"
    } else {
        "rgba(255, 255, 255, 0.35)"
    });
    context.set_line_width(3.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, TAU);
    context.stroke();

    // fixed pointer overlapping the rim at 12 o'clock
    let tip_y = center_y - radius - 12.0;
    let base_y = center_y - radius + 16.0;
    let half_width = 11.0;
    context.save();
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(6.0);
    context.set_fill_style_str("#ff0000");
    context.begin_path();
    context.move_to(center_x, base_y);
    context.line_to(center_x - half_width, tip_y);
    context.line_to(center_x + half_width, tip_y);
    context.close_path();
    context.fill();
    context.restore();
}
