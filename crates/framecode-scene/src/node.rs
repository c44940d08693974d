//! Scene tree for design-to-markup conversion.
//!
//! A `SceneNode` carries the attributes every node shares (geometry,
//! visibility, paints, blending) and a `NodeKind` holding what is specific
//! to its type. Kinds are a closed set so the renderer can match on them
//! exhaustively.

use indexmap::IndexMap;

use serde::{Deserialize, Serialize};

use crate::paint::{Effect, Paint};
use crate::text::TextNode;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// One element of the design document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees, counter-clockwise.
    #[serde(default)]
    pub rotation: f64,

    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub blend_mode: BlendMode,
    #[serde(default)]
    pub is_mask: bool,
    #[serde(default)]
    pub is_asset: bool,

    /// Paints from bottom to top. `None` means the node cannot carry fills
    /// at all (groups), which is different from an empty list.
    #[serde(default)]
    pub fills: Option<Vec<Paint>>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub corner_radius: CornerRadius,

    #[serde(default)]
    pub layout_positioning: LayoutPositioning,
    #[serde(default)]
    pub layout_sizing_horizontal: LayoutSizing,
    #[serde(default)]
    pub layout_sizing_vertical: LayoutSizing,

    #[serde(flatten)]
    pub kind: NodeKind,
}

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

impl SceneNode {
    /// Create a visible node of the given kind with default attributes.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            blend_mode: BlendMode::default(),
            is_mask: false,
            is_asset: false,
            fills: None,
            strokes: Vec::new(),
            stroke_weight: 0.0,
            effects: Vec::new(),
            corner_radius: CornerRadius::default(),
            layout_positioning: LayoutPositioning::default(),
            layout_sizing_horizontal: LayoutSizing::default(),
            layout_sizing_vertical: LayoutSizing::default(),
            kind,
        }
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(fills);
        self
    }

    /// Child nodes in paint order. Leaf kinds have none.
    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Group(group) | NodeKind::Section(group) => &group.children,
            NodeKind::Frame(frame) | NodeKind::Component(frame) | NodeKind::ComponentSet(frame) => {
                &frame.children
            }
            NodeKind::Instance(instance) => &instance.children,
            _ => &[],
        }
    }

    /// The topmost visible fill, if the node has any.
    pub fn top_fill(&self) -> Option<&Paint> {
        self.fills.as_deref().and_then(top_paint)
    }

    /// Whether the node can be represented as a placeholder asset: it must
    /// carry fills, opacity and layout alignment. Sections have fills but no
    /// opacity or alignment.
    pub fn supports_asset(&self) -> bool {
        self.fills.is_some() && !matches!(self.kind, NodeKind::Section(_))
    }

    /// The frame payload for FRAME, COMPONENT and COMPONENT_SET nodes.
    pub fn frame(&self) -> Option<&Frame> {
        match &self.kind {
            NodeKind::Frame(frame) | NodeKind::Component(frame) | NodeKind::ComponentSet(frame) => {
                Some(frame)
            }
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(SceneNode::subtree_len).sum::<usize>()
    }
}

/// The topmost visible paint of a bottom-to-top paint list.
pub fn top_paint(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().rev().find(|paint| paint.is_visible())
}

/// Node type with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Rectangle,
    Ellipse,
    Line,
    /// Rendered purely as a placeholder asset.
    Vector,
    Star,
    Polygon,
    BooleanOperation,
    Slice,
    Group(Group),
    Frame(Frame),
    Component(Frame),
    ComponentSet(Frame),
    Instance(Instance),
    Section(Group),
    Text(TextNode),
}

/// Payload of GROUP and SECTION nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// Payload of FRAME, COMPONENT and COMPONENT_SET nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub children: Vec<SceneNode>,
    /// Explicit auto-layout. `None` is layout mode NONE.
    #[serde(default)]
    pub auto_layout: Option<AutoLayout>,
    /// Auto-layout the design tool inferred from the children's arrangement.
    #[serde(default)]
    pub inferred_auto_layout: Option<AutoLayout>,
}

/// Payload of INSTANCE nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Variant property name to value, in the component's order.
    #[serde(default)]
    pub variant_properties: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Row/column child arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub primary_axis_align_items: PrimaryAxisAlign,
    #[serde(default)]
    pub counter_axis_align_items: CounterAxisAlign,
    #[serde(default)]
    pub item_spacing: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
}

impl AutoLayout {
    pub fn new(layout_mode: LayoutMode) -> Self {
        Self {
            layout_mode,
            primary_axis_align_items: PrimaryAxisAlign::default(),
            counter_axis_align_items: CounterAxisAlign::default(),
            item_spacing: 0.0,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
}

/// Whether a child of an auto-layout frame opts out of the flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    #[default]
    Auto,
    Absolute,
}

/// How a node is sized along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    #[default]
    Fixed,
    Hug,
    Fill,
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    #[serde(rename_all = "camelCase")]
    Mixed {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

impl Default for CornerRadius {
    fn default() -> Self {
        CornerRadius::Uniform(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    #[default]
    PassThrough,
    Normal,
    Darken,
    Multiply,
    LinearBurn,
    ColorBurn,
    Lighten,
    Screen,
    LinearDodge,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}
