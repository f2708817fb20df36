use std::f64::consts::TAU;

use js_sys::Math;
use shared::{ExplosionFlash, Particle, Rocket};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Washes the previous frame with a faint black overlay instead of clearing
/// it, so everything in motion streaks.
pub fn fade_frame(context: &CanvasRenderingContext2d, width: f64, height: f64) {
    context.set_fill_style_str("rgba(0,0,0,0.08)");
    context.fill_rect(0.0, 0.0, width, height);
}

pub fn draw_particle(
    context: &CanvasRenderingContext2d,
    particle: &Particle,
) -> Result<(), JsValue> {
    context.save();

    context.set_global_alpha(particle.life);
    context.set_fill_style_str(&format!(
        "hsl({}, 100%, {}%)",
        particle.hue, particle.lightness
    ));
    context.begin_path();

    // The radius rolls fresh every frame; the flicker is the point.
    let radius = Math::random() * 4.0 + 2.0;
    context.arc(particle.x, particle.y, radius, 0.0, TAU)?;

    context.fill();
    context.restore();

    Ok(())
}

pub fn draw_rocket(context: &CanvasRenderingContext2d, rocket: &Rocket) {
    context.save();

    context.set_global_alpha(0.8);
    context.set_stroke_style_str("#fff");
    context.set_line_width(2.0);
    context.begin_path();

    for (from, to) in rocket.trail_segments() {
        context.move_to(from.0, from.1);
        context.line_to(to.0, to.1);
    }

    context.stroke();
    context.restore();
}

pub fn draw_flash(
    context: &CanvasRenderingContext2d,
    flash: &ExplosionFlash,
) -> Result<(), JsValue> {
    let radius = 60.0 * flash.brightness;

    context.save();
    context.set_global_alpha(flash.life * 0.6);

    let gradient =
        context.create_radial_gradient(flash.x, flash.y, 0.0, flash.x, flash.y, radius)?;

    gradient.add_color_stop(0.0, &format!("rgba(255,255,255,{})", flash.brightness * 1.2))?;
    gradient.add_color_stop(0.3, &format!("rgba(255,255,200,{})", flash.brightness * 0.8))?;
    gradient.add_color_stop(0.7, &format!("rgba(255,255,255,{})", flash.brightness * 0.4))?;
    gradient.add_color_stop(1.0, "rgba(0,0,0,0)")?;

    context.set_fill_style_canvas_gradient(&gradient);
    context.fill_rect(flash.x - radius, flash.y - radius, radius * 2.0, radius * 2.0);

    context.restore();

    Ok(())
}
