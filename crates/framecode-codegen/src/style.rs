//! Style declarations.
//!
//! Each rule is a pure function from a node (and its parent, for layout
//! decisions) to a list of declarations. Rules only emit a declaration when
//! the attribute differs from the CSS default. `attribute` turns the
//! collected list into a `style` attribute in HTML or JSX syntax.

use crate::color::{color_from_fills, gradient_from_fills, rgb_color, rgba_color};
use crate::{format_number, RenderSettings};
use framecode_scene::node::{
    top_paint, AutoLayout, BlendMode, CornerRadius, CounterAxisAlign, LayoutMode,
    LayoutPositioning, LayoutSizing, PrimaryAxisAlign,
};
use framecode_scene::paint::Effect;
use framecode_scene::text::TextAutoResize;
use framecode_scene::{NodeKind, Paint, SceneNode};

// =========================================================================
// Declarations
// =========================================================================

/// A declaration value. Lengths lose their unit in JSX, where React adds
/// `px` itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    Px(f64),
    Number(f64),
    Keyword(String),
}

impl CssValue {
    fn to_css(&self) -> String {
        match self {
            CssValue::Px(n) => format!("{}px", format_number(*n)),
            CssValue::Number(n) => format_number(*n),
            CssValue::Keyword(s) => s.clone(),
        }
    }

    fn to_jsx(&self) -> String {
        match self {
            CssValue::Px(n) | CssValue::Number(n) => format_number(*n),
            CssValue::Keyword(s) => {
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        }
    }
}

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: CssValue,
}

impl Declaration {
    pub fn px(property: &'static str, value: f64) -> Self {
        Self {
            property,
            value: CssValue::Px(value),
        }
    }

    pub fn number(property: &'static str, value: f64) -> Self {
        Self {
            property,
            value: CssValue::Number(value),
        }
    }

    pub fn keyword(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: CssValue::Keyword(value.into()),
        }
    }

    /// `width: 10px` in CSS, `width: 10` in JSX (with camelCase properties).
    pub fn render(&self, jsx: bool) -> String {
        if jsx {
            format!("{}: {}", camel_case(self.property), self.value.to_jsx())
        } else {
            format!("{}: {}", self.property, self.value.to_css())
        }
    }
}

fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for ch in property.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Join declarations the way they appear inside a style attribute.
pub fn join(declarations: &[Declaration], jsx: bool) -> String {
    let separator = if jsx { ", " } else { "; " };
    declarations
        .iter()
        .map(|d| d.render(jsx))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Style attribute for a list of declarations: ` style="..."` in HTML,
/// ` style={{...}}` in JSX, or empty when there is nothing to say.
pub fn style_attribute(declarations: &[Declaration], jsx: bool) -> String {
    if declarations.is_empty() {
        String::new()
    } else if jsx {
        format!(" style={{{{{}}}}}", join(declarations, jsx))
    } else {
        format!(" style=\"{}\"", escape_attribute(&join(declarations, jsx)))
    }
}

/// Escape a value for a double-quoted attribute.
pub(crate) fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// All attributes of a node's element: the optional layer name followed by
/// the style attribute.
pub fn attribute(node: &SceneNode, declarations: &[Declaration], settings: &RenderSettings) -> String {
    let mut out = String::new();
    if settings.layer_name {
        let name: String = node.name.split_whitespace().collect();
        if !name.is_empty() {
            out.push_str(&format!(" data-layer=\"{}\"", escape_attribute(&name)));
        }
    }
    out.push_str(&style_attribute(declarations, settings.jsx));
    out
}

// =========================================================================
// Layout helpers
// =========================================================================

/// The auto-layout that arranges a node's children: the explicit one, or
/// the inferred one when layout optimization is enabled.
pub fn effective_layout<'a>(node: &'a SceneNode, settings: &RenderSettings) -> Option<&'a AutoLayout> {
    let frame = node.frame()?;
    frame.auto_layout.as_ref().or(if settings.optimize_layout {
        frame.inferred_auto_layout.as_ref()
    } else {
        None
    })
}

/// Whether a node is taken out of its parent's flow.
pub fn is_absolute(node: &SceneNode, parent: Option<&SceneNode>, settings: &RenderSettings) -> bool {
    if node.layout_positioning == LayoutPositioning::Absolute {
        return true;
    }
    match parent {
        None => false,
        Some(parent) => effective_layout(parent, settings).is_none(),
    }
}

/// Flex container declarations for an auto-layout. `display` is `flex`
/// when the parent flows in the same direction, `inline-flex` otherwise.
pub fn auto_layout_props(parent: Option<&SceneNode>, layout: &AutoLayout) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    if layout.layout_mode == LayoutMode::Vertical {
        declarations.push(Declaration::keyword("flex-direction", "column"));
    }

    let justify = match layout.primary_axis_align_items {
        PrimaryAxisAlign::Min => "flex-start",
        PrimaryAxisAlign::Center => "center",
        PrimaryAxisAlign::Max => "flex-end",
        PrimaryAxisAlign::SpaceBetween => "space-between",
    };
    declarations.push(Declaration::keyword("justify-content", justify));

    let align = match layout.counter_axis_align_items {
        CounterAxisAlign::Min => "flex-start",
        CounterAxisAlign::Center => "center",
        CounterAxisAlign::Max => "flex-end",
        CounterAxisAlign::Baseline => "baseline",
    };
    declarations.push(Declaration::keyword("align-items", align));

    if layout.item_spacing > 0.0 && layout.primary_axis_align_items != PrimaryAxisAlign::SpaceBetween {
        declarations.push(Declaration::px("gap", layout.item_spacing));
    }

    let parent_mode = parent
        .and_then(SceneNode::frame)
        .and_then(|frame| frame.auto_layout.as_ref())
        .map(|parent_layout| parent_layout.layout_mode);
    let display = if parent_mode == Some(layout.layout_mode) {
        "flex"
    } else {
        "inline-flex"
    };
    declarations.push(Declaration::keyword("display", display));

    declarations
}

// =========================================================================
// Position rules
// =========================================================================

/// Size, padding, position and blending: everything that places a node.
pub fn position_styles(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    settings: &RenderSettings,
) -> Vec<Declaration> {
    let mut declarations = size(node, parent, settings);
    declarations.extend(padding(node, settings));
    declarations.extend(position(node, parent, settings));
    declarations.extend(blend(node));
    declarations
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Width and height, unless the node hugs its content or fills its parent.
pub fn size(node: &SceneNode, parent: Option<&SceneNode>, settings: &RenderSettings) -> Vec<Declaration> {
    let (width, height) = match &node.kind {
        NodeKind::Text(text) => match text.text_auto_resize {
            TextAutoResize::WidthAndHeight => (false, false),
            TextAutoResize::Height => (true, false),
            TextAutoResize::None | TextAutoResize::Truncate => (true, true),
        },
        _ => (true, true),
    };

    let mut declarations = Vec::new();
    if width {
        declarations.extend(axis_size(node, parent, settings, Axis::Horizontal));
    }
    if height {
        declarations.extend(axis_size(node, parent, settings, Axis::Vertical));
    }
    declarations
}

fn axis_size(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    settings: &RenderSettings,
    axis: Axis,
) -> Option<Declaration> {
    let (sizing, length, property) = match axis {
        Axis::Horizontal => (node.layout_sizing_horizontal, node.width, "width"),
        Axis::Vertical => (node.layout_sizing_vertical, node.height, "height"),
    };

    match sizing {
        LayoutSizing::Fill => {
            if let Some(parent_layout) = parent.and_then(|p| effective_layout(p, settings)) {
                let primary = match parent_layout.layout_mode {
                    LayoutMode::Horizontal => Axis::Horizontal,
                    LayoutMode::Vertical => Axis::Vertical,
                };
                return Some(if primary == axis {
                    Declaration::keyword("flex", "1 1 0")
                } else {
                    Declaration::keyword("align-self", "stretch")
                });
            }
        }
        LayoutSizing::Hug => {
            if effective_layout(node, settings).is_some() {
                return None;
            }
        }
        LayoutSizing::Fixed => {}
    }

    Some(Declaration::px(property, length))
}

/// Padding of the node's own auto-layout, in the shortest CSS form.
pub fn padding(node: &SceneNode, settings: &RenderSettings) -> Vec<Declaration> {
    let Some(layout) = effective_layout(node, settings) else {
        return Vec::new();
    };
    let (top, right, bottom, left) = (
        layout.padding_top,
        layout.padding_right,
        layout.padding_bottom,
        layout.padding_left,
    );

    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        return Vec::new();
    }
    if top == right && right == bottom && bottom == left {
        return vec![Declaration::px("padding", top)];
    }
    let value = if top == bottom && left == right {
        format!("{}px {}px", format_number(top), format_number(left))
    } else {
        format!(
            "{}px {}px {}px {}px",
            format_number(top),
            format_number(right),
            format_number(bottom),
            format_number(left)
        )
    };
    vec![Declaration::keyword("padding", value)]
}

/// Absolute offsets inside a parent without auto-layout; `relative` on
/// containers whose children are positioned absolutely.
pub fn position(node: &SceneNode, parent: Option<&SceneNode>, settings: &RenderSettings) -> Vec<Declaration> {
    if is_absolute(node, parent, settings) {
        // Group children use the coordinate space of the group's parent.
        let (x, y) = match parent {
            Some(group) if matches!(group.kind, NodeKind::Group(_)) => {
                (node.x - group.x, node.y - group.y)
            }
            _ => (node.x, node.y),
        };
        return vec![
            Declaration::px("left", x),
            Declaration::px("top", y),
            Declaration::keyword("position", "absolute"),
        ];
    }

    let lays_out_absolutely = match &node.kind {
        NodeKind::Group(_) => true,
        NodeKind::Frame(_) | NodeKind::Component(_) | NodeKind::ComponentSet(_) => {
            effective_layout(node, settings).is_none()
        }
        _ => false,
    };
    if lays_out_absolutely {
        vec![Declaration::keyword("position", "relative")]
    } else {
        Vec::new()
    }
}

/// Rotation, opacity and blend mode.
pub fn blend(node: &SceneNode) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    if node.rotation.round() != 0.0 {
        declarations.push(Declaration::keyword(
            "transform",
            format!("rotate({}deg)", format_number(-node.rotation)),
        ));
        declarations.push(Declaration::keyword("transform-origin", "0 0"));
    }

    if node.opacity < 1.0 {
        declarations.push(Declaration::number("opacity", node.opacity));
    }

    if let Some(mode) = blend_mode_name(node.blend_mode) {
        declarations.push(Declaration::keyword("mix-blend-mode", mode));
    }

    declarations
}

fn blend_mode_name(mode: BlendMode) -> Option<&'static str> {
    let name = match mode {
        BlendMode::Multiply => "multiply",
        BlendMode::Screen => "screen",
        BlendMode::Overlay => "overlay",
        BlendMode::Darken => "darken",
        BlendMode::Lighten => "lighten",
        BlendMode::ColorDodge => "color-dodge",
        BlendMode::ColorBurn => "color-burn",
        BlendMode::HardLight => "hard-light",
        BlendMode::SoftLight => "soft-light",
        BlendMode::Difference => "difference",
        BlendMode::Exclusion => "exclusion",
        BlendMode::Hue => "hue",
        BlendMode::Saturation => "saturation",
        BlendMode::Color => "color",
        BlendMode::Luminosity => "luminosity",
        // No CSS equivalent.
        BlendMode::PassThrough | BlendMode::Normal | BlendMode::LinearBurn | BlendMode::LinearDodge => {
            return None
        }
    };
    Some(name)
}

// =========================================================================
// Shape rules
// =========================================================================

/// Background, shadows, border, corner radius and blur.
pub fn shape_styles(node: &SceneNode) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    // Text color belongs to the text segments, not the box.
    if !matches!(node.kind, NodeKind::Text(_)) {
        declarations.extend(background(node.fills.as_deref().unwrap_or_default()));
    }
    declarations.extend(shadow(node));
    declarations.extend(border_radius(node));
    declarations.extend(border(node));
    declarations.extend(blur(node));
    declarations
}

/// `background` from the top fill: a solid color or a linear gradient.
/// Image fills produce nothing here; containers substitute a placeholder.
pub fn background(fills: &[Paint]) -> Vec<Declaration> {
    let value = match top_paint(fills) {
        Some(Paint::Solid(_)) => color_from_fills(fills),
        Some(Paint::GradientLinear(_)) => gradient_from_fills(fills),
        _ => String::new(),
    };
    if value.is_empty() {
        Vec::new()
    } else {
        vec![Declaration::keyword("background", value)]
    }
}

pub fn shadow(node: &SceneNode) -> Vec<Declaration> {
    let shadows: Vec<String> = node
        .effects
        .iter()
        .filter(|effect| effect.is_visible())
        .filter_map(|effect| {
            let (shadow, inset) = match effect {
                Effect::DropShadow(shadow) => (shadow, ""),
                Effect::InnerShadow(shadow) => (shadow, "inset "),
                _ => return None,
            };
            Some(format!(
                "{inset}{}px {}px {}px {}px {}",
                format_number(shadow.offset.x),
                format_number(shadow.offset.y),
                format_number(shadow.radius),
                format_number(shadow.spread),
                rgba_color(shadow.color)
            ))
        })
        .collect();

    if shadows.is_empty() {
        Vec::new()
    } else {
        vec![Declaration::keyword("box-shadow", shadows.join(", "))]
    }
}

pub fn border_radius(node: &SceneNode) -> Vec<Declaration> {
    if matches!(node.kind, NodeKind::Ellipse) {
        return vec![Declaration::px("border-radius", 9999.0)];
    }
    match node.corner_radius {
        CornerRadius::Uniform(radius) if radius > 0.0 => vec![Declaration::px("border-radius", radius)],
        CornerRadius::Uniform(_) => Vec::new(),
        CornerRadius::Mixed {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => {
            if top_left == top_right && top_right == bottom_right && bottom_right == bottom_left {
                if top_left > 0.0 {
                    vec![Declaration::px("border-radius", top_left)]
                } else {
                    Vec::new()
                }
            } else {
                vec![Declaration::keyword(
                    "border-radius",
                    format!(
                        "{}px {}px {}px {}px",
                        format_number(top_left),
                        format_number(top_right),
                        format_number(bottom_right),
                        format_number(bottom_left)
                    ),
                )]
            }
        }
    }
}

/// Solid border from the topmost visible stroke.
pub fn border(node: &SceneNode) -> Vec<Declaration> {
    if node.stroke_weight <= 0.0 {
        return Vec::new();
    }
    match top_paint(&node.strokes) {
        Some(Paint::Solid(stroke)) => vec![Declaration::keyword(
            "border",
            format!(
                "{}px solid {}",
                format_number(node.stroke_weight),
                rgb_color(stroke.color, stroke.opacity)
            ),
        )],
        _ => Vec::new(),
    }
}

pub fn blur(node: &SceneNode) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for effect in node.effects.iter().filter(|effect| effect.is_visible()) {
        match effect {
            Effect::LayerBlur(blur) => declarations.push(Declaration::keyword(
                "filter",
                format!("blur({}px)", format_number(blur.radius)),
            )),
            Effect::BackgroundBlur(blur) => declarations.push(Declaration::keyword(
                "backdrop-filter",
                format!("blur({}px)", format_number(blur.radius)),
            )),
            Effect::DropShadow(_) | Effect::InnerShadow(_) => {}
        }
    }
    declarations
}
