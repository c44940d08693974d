//! Color and gradient literals.
//!
//! Opaque colors render as `#RRGGBB` (with `white`/`black` shortcuts),
//! translucent ones as `rgba(...)`. Linear gradients render as CSS
//! `linear-gradient(...)` with the angle converted from the design tool's
//! convention.

use crate::format_number;
use framecode_scene::node::top_paint;
use framecode_scene::paint::GradientPaint;
use framecode_scene::{Paint, Rgb, Rgba};

/// Format a color with the given alpha.
pub fn color(r: f64, g: f64, b: f64, alpha: f64) -> String {
    if r == 1.0 && g == 1.0 && b == 1.0 && alpha == 1.0 {
        return "white".into();
    }
    if r == 0.0 && g == 0.0 && b == 0.0 && alpha == 1.0 {
        return "black".into();
    }

    if alpha == 1.0 {
        return format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b));
    }

    format!(
        "rgba({}, {}, {}, {})",
        format_number(r * 255.0),
        format_number(g * 255.0),
        format_number(b * 255.0),
        format_number(alpha)
    )
}

pub fn rgb_color(rgb: Rgb, alpha: f64) -> String {
    color(rgb.r, rgb.g, rgb.b, alpha)
}

pub fn rgba_color(rgba: Rgba) -> String {
    color(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Color of the top fill when it is a solid paint, otherwise empty.
pub fn color_from_fills(fills: &[Paint]) -> String {
    match top_paint(fills) {
        Some(Paint::Solid(solid)) => rgb_color(solid.color, solid.opacity),
        _ => String::new(),
    }
}

/// Gradient of the top fill when it is a linear gradient, otherwise empty.
pub fn gradient_from_fills(fills: &[Paint]) -> String {
    match top_paint(fills) {
        Some(Paint::GradientLinear(gradient)) => linear_gradient(gradient),
        _ => String::new(),
    }
}

/// Rotation of the gradient transform in degrees. When the first row
/// collapses to zero the rotation comes from the second row.
pub fn gradient_angle(fill: &GradientPaint) -> f64 {
    let [[a, b, _], [c, d, _]] = fill.gradient_transform;
    let rotation = if a != 0.0 || b != 0.0 {
        let r = (a * a + b * b).sqrt();
        if b > 0.0 {
            (a / r).acos()
        } else {
            -(a / r).acos()
        }
    } else if c != 0.0 || d != 0.0 {
        let s = (c * c + d * d).sqrt();
        let skewed = if d > 0.0 {
            (-c / s).acos()
        } else {
            -(c / s).acos()
        };
        std::f64::consts::FRAC_PI_2 - skewed
    } else {
        0.0
    };
    rotation.to_degrees()
}

/// Render a linear gradient. The first stop is pinned to `0%` and the last
/// to `100%`; each stop's alpha is scaled by the paint opacity.
pub fn linear_gradient(fill: &GradientPaint) -> String {
    // CSS measures 0deg pointing up, the design tool pointing right.
    let angle = (gradient_angle(fill) + 90.0).round() as i64;
    let last = fill.gradient_stops.len().saturating_sub(1);

    let stops: Vec<String> = fill
        .gradient_stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let position = if index == 0 {
                "0%".to_string()
            } else if index == last {
                "100%".to_string()
            } else {
                format!("{}%", (stop.position * 100.0).round() as i64)
            };
            format!(
                "rgba({}, {}, {}, {:.2}) {position}",
                channel(stop.color.r),
                channel(stop.color.g),
                channel(stop.color.b),
                stop.color.a * fill.opacity,
            )
        })
        .collect();

    format!("linear-gradient({angle}deg, {})", stops.join(", "))
}
