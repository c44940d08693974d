//! Paints and effects attached to scene nodes.
//!
//! Channel values are normalized to `0.0..=1.0`, as the design tool
//! exports them.

use serde::{Deserialize, Serialize};

/// An opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A color with its own alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_one")]
    pub a: f64,
}

fn default_one() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// A surface treatment: solid color, gradient or image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    GradientLinear(GradientPaint),
    GradientRadial(GradientPaint),
    GradientAngular(GradientPaint),
    GradientDiamond(GradientPaint),
    Image(ImagePaint),
}

impl Paint {
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid(paint) => paint.visible,
            Paint::GradientLinear(paint)
            | Paint::GradientRadial(paint)
            | Paint::GradientAngular(paint)
            | Paint::GradientDiamond(paint) => paint.visible,
            Paint::Image(paint) => paint.visible,
        }
    }

    /// Shorthand for a visible, fully opaque solid paint.
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Paint::Solid(SolidPaint {
            color: Rgb { r, g, b },
            opacity: 1.0,
            visible: true,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidPaint {
    pub color: Rgb,
    #[serde(default = "default_one")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    pub gradient_stops: Vec<GradientStop>,
    /// Affine transform from gradient space to node space, as two rows
    /// `[[a, c, e], [b, d, f]]`.
    #[serde(default = "identity_transform")]
    pub gradient_transform: [[f64; 3]; 2],
    #[serde(default = "default_one")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn identity_transform() -> [[f64; 3]; 2] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgba,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    #[serde(default = "default_one")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Default for ImagePaint {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            visible: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur(Blur),
    BackgroundBlur(Blur),
}

impl Effect {
    pub fn is_visible(&self) -> bool {
        match self {
            Effect::DropShadow(shadow) | Effect::InnerShadow(shadow) => shadow.visible,
            Effect::LayerBlur(blur) | Effect::BackgroundBlur(blur) => blur.visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Rgba,
    pub offset: Offset,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    pub radius: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}
