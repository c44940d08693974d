//! HTML code generator.
//!
//! Walks the scene tree depth-first and emits one element per node. Every
//! element starts with a newline; children are indented under their parent.
//! Nodes that cannot be rendered contribute an empty string, never an error.
//! Text nodes record their segments in the context's text-style cache.

use crate::style::{self, Declaration};
use crate::{indent, text, RenderContext};
use framecode_scene::node::{Frame, Group, Instance, LayoutMode};
use framecode_scene::text::TextNode;
use framecode_scene::{NodeKind, Paint, SceneNode};
use tracing::{debug, trace};

/// Base URL of the placeholder image service.
pub const PLACEHOLDER_URL: &str = "https://via.placeholder.com";

/// Generate markup for the root nodes of a selection.
pub fn generate(nodes: &[SceneNode], ctx: &mut RenderContext) -> String {
    let markup = generate_nodes(nodes, None, ctx);
    // Each element opens with a newline; the first one has nothing above it.
    match markup.strip_prefix('\n') {
        Some(stripped) => stripped.to_string(),
        None => markup,
    }
}

fn generate_nodes<'a>(
    nodes: impl IntoIterator<Item = &'a SceneNode>,
    parent: Option<&SceneNode>,
    ctx: &mut RenderContext,
) -> String {
    let mut out = String::new();

    for node in nodes {
        if !node.visible {
            debug!(node = %node.name, "skipping invisible node");
            continue;
        }
        trace!(node = %node.name, id = %node.id, "generating node");

        if node.is_asset || node.is_mask {
            out.push_str(&generate_asset(node, parent, ctx));
        }
        out.push_str(&generate_node(node, parent, ctx));
    }

    out
}

fn generate_node(node: &SceneNode, parent: Option<&SceneNode>, ctx: &mut RenderContext) -> String {
    match &node.kind {
        NodeKind::Rectangle | NodeKind::Ellipse => generate_container(node, parent, "", Vec::new(), ctx),
        NodeKind::Group(group) => generate_group(node, group, parent, ctx),
        NodeKind::Frame(frame) | NodeKind::Component(frame) | NodeKind::ComponentSet(frame) => {
            generate_frame(node, frame, parent, ctx)
        }
        NodeKind::Instance(instance) => generate_instance(node, instance, ctx),
        NodeKind::Section(section) => generate_section(node, section, parent, ctx),
        NodeKind::Text(text) => generate_text(node, text, parent, ctx),
        NodeKind::Line => generate_line(node, parent, ctx),
        NodeKind::Vector => generate_asset(node, parent, ctx),
        NodeKind::Star | NodeKind::Polygon | NodeKind::BooleanOperation | NodeKind::Slice => {
            debug!(node = %node.name, "unsupported node kind");
            String::new()
        }
    }
}

/// Zero or negative size. Rounding can leave values like `-0.000004`.
fn is_degenerate(node: &SceneNode) -> bool {
    node.width < 0.0 || node.height <= 0.0
}

/// Placeholder image URL for the node's rounded pixel size.
pub fn placeholder_url(node: &SceneNode) -> String {
    format!(
        "{PLACEHOLDER_URL}/{}x{}",
        node.width.round() as i64,
        node.height.round() as i64
    )
}

fn has_image_fill(node: &SceneNode) -> bool {
    matches!(node.top_fill(), Some(Paint::Image(_)))
}

// =========================================================================
// Containers
// =========================================================================

/// A styled `div` (or `img` for image fills) around already generated
/// children. Degenerate nodes return the children unwrapped.
fn generate_container(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    children: &str,
    additional: Vec<Declaration>,
    ctx: &RenderContext,
) -> String {
    if is_degenerate(node) {
        debug!(node = %node.name, width = node.width, height = node.height, "dropping degenerate wrapper");
        return children.to_string();
    }

    let settings = &ctx.settings;
    let mut declarations = style::position_styles(node, parent, settings);
    declarations.extend(style::shape_styles(node));

    let mut tag = "div";
    let mut src = String::new();
    if has_image_fill(node) {
        if node.children().is_empty() {
            tag = "img";
            src = format!(" src=\"{}\"", placeholder_url(node));
        } else {
            declarations.push(Declaration::keyword(
                "background-image",
                format!("url({})", placeholder_url(node)),
            ));
        }
    }
    declarations.extend(additional);

    let attr = style::attribute(node, &declarations, settings);

    if !children.is_empty() {
        format!("\n<{tag}{attr}{src}>{}\n</{tag}>", indent(children))
    } else if tag == "img" || settings.jsx {
        format!("\n<{tag}{attr}{src} />")
    } else {
        format!("\n<{tag}{attr}{src}></{tag}>")
    }
}

fn generate_group(
    node: &SceneNode,
    group: &Group,
    parent: Option<&SceneNode>,
    ctx: &mut RenderContext,
) -> String {
    if is_degenerate(node) || group.children.is_empty() {
        debug!(node = %node.name, "skipping empty or degenerate group");
        return String::new();
    }

    let declarations = style::position_styles(node, parent, &ctx.settings);
    let children = generate_nodes(&group.children, Some(node), ctx);

    if declarations.is_empty() {
        return children;
    }
    let attr = style::attribute(node, &declarations, &ctx.settings);
    format!("\n<div{attr}>{}\n</div>", indent(&children))
}

fn generate_frame(
    node: &SceneNode,
    frame: &Frame,
    parent: Option<&SceneNode>,
    ctx: &mut RenderContext,
) -> String {
    let children = generate_nodes(sorted_children(frame, ctx), Some(node), ctx);

    let layout = match (&frame.auto_layout, &frame.inferred_auto_layout) {
        (Some(explicit), _) => Some(explicit),
        (None, Some(inferred)) if ctx.settings.optimize_layout => Some(inferred),
        // No layout: children are absolutely positioned.
        _ => None,
    };
    let additional = layout
        .map(|layout| style::auto_layout_props(parent, layout))
        .unwrap_or_default();

    generate_container(node, parent, &children, additional, ctx)
}

/// Children in flow order when an inferred layout drives the frame, so the
/// markup order matches the visual order.
fn sorted_children<'a>(frame: &'a Frame, ctx: &RenderContext) -> Vec<&'a SceneNode> {
    let mut children: Vec<&SceneNode> = frame.children.iter().collect();
    if children.len() <= 1 || !ctx.settings.optimize_layout {
        return children;
    }
    if let Some(inferred) = &frame.inferred_auto_layout {
        match inferred.layout_mode {
            LayoutMode::Horizontal => children.sort_by(|a, b| a.x.total_cmp(&b.x)),
            LayoutMode::Vertical => children.sort_by(|a, b| a.y.total_cmp(&b.y)),
        }
    }
    children
}

/// A self-closing tag named after the component, with one attribute per
/// variant property. Children are not rendered.
fn generate_instance(node: &SceneNode, instance: &Instance, ctx: &RenderContext) -> String {
    let mut name = strip_whitespace(&node.name);
    if name.is_empty() {
        name = "UnknownComponent".to_string();
    }

    let props: Vec<String> = instance
        .variant_properties
        .iter()
        .map(|(key, value)| {
            let key = strip_whitespace(key).to_lowercase();
            let value = strip_whitespace(value).to_lowercase();
            if ctx.settings.jsx {
                format!("{key}={{{value}}}")
            } else {
                format!("{key}='{value}'")
            }
        })
        .collect();

    let props = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(" "))
    };
    format!("\n<{name}{props} />")
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Sections only carry size, position and background.
fn generate_section(
    node: &SceneNode,
    section: &Group,
    parent: Option<&SceneNode>,
    ctx: &mut RenderContext,
) -> String {
    let children = generate_nodes(&section.children, Some(node), ctx);

    let settings = &ctx.settings;
    let mut declarations = style::size(node, parent, settings);
    declarations.extend(style::position(node, parent, settings));
    declarations.extend(style::background(node.fills.as_deref().unwrap_or_default()));
    let attr = style::attribute(node, &declarations, settings);

    if children.is_empty() {
        format!("\n<div{attr}></div>")
    } else {
        format!("\n<div{attr}>{}\n</div>", indent(&children))
    }
}

/// Uniform text folds its style into the container; mixed text becomes one
/// `span` per segment. Every segment is recorded in the text-style cache.
fn generate_text(
    node: &SceneNode,
    text_node: &TextNode,
    parent: Option<&SceneNode>,
    ctx: &mut RenderContext,
) -> String {
    let mut declarations = style::position_styles(node, parent, &ctx.settings);
    declarations.extend(text::text_align(text_node));

    let jsx = ctx.settings.jsx;
    let segments = text::segments(text_node, jsx);

    let content = if let [segment] = segments.as_slice() {
        declarations.extend(segment.declarations.iter().cloned());
        segment.text.clone()
    } else {
        segments
            .iter()
            .map(|segment| {
                format!(
                    "<span{}>{}</span>",
                    style::style_attribute(&segment.declarations, jsx),
                    segment.text
                )
            })
            .collect()
    };

    let attr = style::attribute(node, &declarations, &ctx.settings);
    ctx.text_styles.extend(segments);

    format!("\n<div{attr}>{content}</div>")
}

fn generate_line(node: &SceneNode, parent: Option<&SceneNode>, ctx: &RenderContext) -> String {
    let mut declarations = style::position_styles(node, parent, &ctx.settings);
    declarations.extend(style::shape_styles(node));
    let attr = style::attribute(node, &declarations, &ctx.settings);
    format!("\n<div{attr}></div>")
}

/// Placeholder for an exported asset: an `img` for image fills, an empty
/// styled `div` otherwise. Nodes without fills contribute nothing.
pub fn generate_asset(node: &SceneNode, parent: Option<&SceneNode>, ctx: &RenderContext) -> String {
    if !node.supports_asset() {
        return String::new();
    }

    let mut declarations = style::position_styles(node, parent, &ctx.settings);
    declarations.extend(style::shape_styles(node));
    let attr = style::attribute(node, &declarations, &ctx.settings);

    if has_image_fill(node) {
        format!("\n<img{attr} src=\"{}\" />", placeholder_url(node))
    } else {
        format!("\n<div{attr}></div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderSettings;
    use framecode_scene::node::AutoLayout;
    use framecode_scene::paint::ImagePaint;
    use framecode_scene::text::{TextRun, TextStyle};
    use pretty_assertions::assert_eq;

    fn gen_with(nodes: &[SceneNode], settings: RenderSettings) -> (String, RenderContext) {
        let mut ctx = RenderContext::new(settings);
        let html = generate(nodes, &mut ctx);
        (html, ctx)
    }

    fn gen(nodes: &[SceneNode]) -> (String, RenderContext) {
        gen_with(nodes, RenderSettings::default())
    }

    fn rect(name: &str, x: f64, y: f64, w: f64, h: f64) -> SceneNode {
        SceneNode::new(name, NodeKind::Rectangle)
            .with_bounds(x, y, w, h)
            .with_fills(Vec::new())
    }

    fn frame(children: Vec<SceneNode>, auto_layout: Option<AutoLayout>) -> SceneNode {
        SceneNode::new(
            "frame",
            NodeKind::Frame(Frame {
                children,
                auto_layout,
                inferred_auto_layout: None,
            }),
        )
        .with_bounds(0.0, 0.0, 100.0, 100.0)
        .with_fills(Vec::new())
    }

    fn group(children: Vec<SceneNode>) -> SceneNode {
        SceneNode::new("group", NodeKind::Group(Group { children })).with_bounds(0.0, 0.0, 50.0, 50.0)
    }

    fn image() -> Paint {
        Paint::Image(ImagePaint::default())
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    #[test]
    fn test_empty_selection() {
        let (html, ctx) = gen(&[]);
        assert_eq!(html, "");
        assert!(ctx.text_styles.is_empty());
    }

    #[test]
    fn test_invisible_subtree_skipped() {
        let mut hidden = frame(vec![rect("inner", 0.0, 0.0, 5.0, 5.0)], None);
        hidden.visible = false;
        let (html, _) = gen(&[hidden]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_unsupported_kinds_contribute_nothing() {
        let nodes: Vec<SceneNode> = [
            NodeKind::Star,
            NodeKind::Polygon,
            NodeKind::BooleanOperation,
            NodeKind::Slice,
        ]
        .into_iter()
        .map(|kind| SceneNode::new("shape", kind).with_bounds(0.0, 0.0, 10.0, 10.0))
        .collect();
        let (html, _) = gen(&nodes);
        assert_eq!(html, "");
    }

    #[test]
    fn test_siblings_keep_input_order() {
        let (html, _) = gen(&[rect("a", 0.0, 0.0, 1.0, 1.0), rect("b", 0.0, 0.0, 2.0, 2.0)]);
        assert_eq!(
            html,
            "<div style=\"width: 1px; height: 1px\"></div>\n<div style=\"width: 2px; height: 2px\"></div>"
        );
    }

    #[test]
    fn test_ellipse() {
        let node = SceneNode::new("dot", NodeKind::Ellipse)
            .with_bounds(0.0, 0.0, 8.0, 8.0)
            .with_fills(vec![Paint::solid(1.0, 1.0, 1.0)]);
        let (html, _) = gen(&[node]);
        assert_eq!(
            html,
            "<div style=\"width: 8px; height: 8px; background: white; border-radius: 9999px\"></div>"
        );
    }

    // =========================================================================
    // Degenerate geometry
    // =========================================================================

    #[test]
    fn test_degenerate_rectangle_dropped() {
        let (html, _) = gen(&[rect("flat", 0.0, 0.0, 10.0, 0.0), rect("neg", 0.0, 0.0, -0.000004, 5.0)]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_degenerate_frame_children_escape() {
        let mut parent = frame(vec![rect("child", 1.0, 2.0, 3.0, 4.0)], None);
        parent.height = -0.000004;
        let (html, _) = gen(&[parent]);
        assert_eq!(
            html,
            "<div style=\"width: 3px; height: 4px; left: 1px; top: 2px; position: absolute\"></div>"
        );
    }

    #[test]
    fn test_degenerate_or_empty_group_dropped() {
        let (html, _) = gen(&[group(Vec::new())]);
        assert_eq!(html, "");

        let mut flat = group(vec![rect("child", 0.0, 0.0, 3.0, 4.0)]);
        flat.height = 0.0;
        let (html, _) = gen(&[flat]);
        assert_eq!(html, "");
    }

    // =========================================================================
    // Containers
    // =========================================================================

    #[test]
    fn test_nested_indentation() {
        let inner = frame(vec![rect("leaf", 0.0, 0.0, 1.0, 1.0)], Some(AutoLayout::new(LayoutMode::Vertical)));
        let outer = frame(vec![inner], Some(AutoLayout::new(LayoutMode::Vertical)));
        let (html, _) = gen(&[outer]);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("<div"));
        assert!(lines[1].starts_with("  <div"));
        assert!(lines[1].contains("display: flex"));
        assert!(lines[2].starts_with("    <div style=\"width: 1px; height: 1px\">"));
        assert_eq!(lines[3], "  </div>");
        assert_eq!(lines[4], "</div>");
    }

    #[test]
    fn test_frame_without_layout_children_absolute() {
        let (html, _) = gen(&[frame(vec![rect("a", 4.0, 8.0, 1.0, 1.0)], None)]);
        assert_eq!(
            html,
            "<div style=\"width: 100px; height: 100px; position: relative\">\n  \
             <div style=\"width: 1px; height: 1px; left: 4px; top: 8px; position: absolute\"></div>\n\
             </div>"
        );
    }

    #[test]
    fn test_inferred_layout_used_when_optimizing() {
        let mut node = frame(
            vec![rect("b", 50.0, 0.0, 1.0, 1.0), rect("a", 10.0, 0.0, 2.0, 2.0)],
            None,
        );
        if let NodeKind::Frame(frame) = &mut node.kind {
            frame.inferred_auto_layout = Some(AutoLayout::new(LayoutMode::Horizontal));
        }

        let (plain, _) = gen(&[node.clone()]);
        assert!(plain.contains("position: relative"));
        assert!(!plain.contains("display"));
        assert!(plain.find("width: 1px").unwrap() < plain.find("width: 2px").unwrap());

        let settings = RenderSettings {
            optimize_layout: true,
            ..RenderSettings::default()
        };
        let (optimized, _) = gen_with(&[node], settings);
        assert!(optimized.contains("display: inline-flex"));
        assert!(!optimized.contains("absolute"));
        // Sorted by x: "a" (width 2) comes first.
        assert!(optimized.find("width: 2px").unwrap() < optimized.find("width: 1px").unwrap());
    }

    #[test]
    fn test_explicit_layout_wins_over_inferred() {
        let mut node = frame(vec![rect("a", 0.0, 0.0, 1.0, 1.0)], Some(AutoLayout::new(LayoutMode::Horizontal)));
        if let NodeKind::Frame(frame) = &mut node.kind {
            frame.inferred_auto_layout = Some(AutoLayout::new(LayoutMode::Vertical));
        }
        let settings = RenderSettings {
            optimize_layout: true,
            ..RenderSettings::default()
        };
        let (html, _) = gen_with(&[node], settings);
        assert!(!html.contains("flex-direction: column"));
        assert!(html.contains("justify-content: flex-start"));
    }

    #[test]
    fn test_component_and_set_render_like_frames() {
        let layout = Frame {
            children: vec![rect("a", 0.0, 0.0, 1.0, 1.0)],
            auto_layout: Some(AutoLayout::new(LayoutMode::Vertical)),
            inferred_auto_layout: None,
        };
        for kind in [NodeKind::Component(layout.clone()), NodeKind::ComponentSet(layout.clone())] {
            let node = SceneNode::new("c", kind).with_bounds(0.0, 0.0, 10.0, 10.0);
            let (html, _) = gen(&[node]);
            assert!(html.contains("flex-direction: column"));
            assert!(html.contains("width: 1px"));
        }
    }

    #[test]
    fn test_group_wraps_children() {
        let (html, _) = gen(&[group(vec![rect("a", 5.0, 5.0, 1.0, 1.0)])]);
        assert_eq!(
            html,
            "<div style=\"width: 50px; height: 50px; position: relative\">\n  \
             <div style=\"width: 1px; height: 1px; left: 5px; top: 5px; position: absolute\"></div>\n\
             </div>"
        );
    }

    #[test]
    fn test_jsx_empty_container_self_closes() {
        let settings = RenderSettings {
            jsx: true,
            ..RenderSettings::default()
        };
        let (html, _) = gen_with(&[rect("a", 0.0, 0.0, 1.0, 1.0)], settings);
        assert_eq!(html, "<div style={{width: 1, height: 1}} />");
    }

    // =========================================================================
    // Images and assets
    // =========================================================================

    #[test]
    fn test_image_fill_without_children_is_img() {
        let node = rect("photo", 0.0, 0.0, 120.4, 79.6).with_fills(vec![image()]);
        let (html, _) = gen(&[node]);
        assert_eq!(
            html,
            "<img style=\"width: 120.4px; height: 79.6px\" src=\"https://via.placeholder.com/120x80\" />"
        );
    }

    #[test]
    fn test_image_fill_with_children_is_background() {
        let node = frame(vec![rect("a", 0.0, 0.0, 1.0, 1.0)], None).with_fills(vec![image()]);
        let (html, _) = gen(&[node]);
        assert!(html.starts_with(
            "<div style=\"width: 100px; height: 100px; position: relative; background-image: url(https://via.placeholder.com/100x100)\">"
        ));
    }

    #[test]
    fn test_vector_is_asset_only() {
        let node = SceneNode::new("icon", NodeKind::Vector)
            .with_bounds(0.0, 0.0, 24.0, 24.0)
            .with_fills(vec![Paint::solid(0.0, 0.0, 0.0)]);
        let (html, _) = gen(&[node]);
        assert_eq!(html, "<div style=\"width: 24px; height: 24px; background: black\"></div>");
    }

    #[test]
    fn test_vector_without_fills_is_empty() {
        let node = SceneNode::new("icon", NodeKind::Vector).with_bounds(0.0, 0.0, 24.0, 24.0);
        let (html, _) = gen(&[node]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_asset_flag_emits_twice() {
        let mut node = rect("logo", 0.0, 0.0, 10.0, 10.0).with_fills(vec![image()]);
        node.is_asset = true;
        let (html, _) = gen(&[node]);
        let placeholder = "<img style=\"width: 10px; height: 10px\" src=\"https://via.placeholder.com/10x10\" />";
        assert_eq!(html, format!("{placeholder}\n{placeholder}"));
    }

    #[test]
    fn test_mask_flag_emits_asset_and_shape() {
        let mut node = rect("mask", 0.0, 0.0, 10.0, 10.0).with_fills(vec![Paint::solid(1.0, 0.0, 0.0)]);
        node.is_mask = true;
        let (html, _) = gen(&[node]);
        assert_eq!(html.matches("<div").count(), 2);
    }

    #[test]
    fn test_asset_flag_on_group_only_renders_group() {
        let mut node = group(vec![rect("a", 0.0, 0.0, 1.0, 1.0)]);
        node.is_asset = true;
        let (html, _) = gen(&[node]);
        assert_eq!(html.matches("<div").count(), 2);
    }

    // =========================================================================
    // Instances, sections, lines
    // =========================================================================

    fn instance(name: &str, variants: &[(&str, &str)]) -> SceneNode {
        SceneNode::new(
            name,
            NodeKind::Instance(Instance {
                variant_properties: variants
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                children: vec![rect("inner", 0.0, 0.0, 1.0, 1.0)],
            }),
        )
        .with_bounds(0.0, 0.0, 80.0, 32.0)
    }

    #[test]
    fn test_instance_html() {
        let (html, _) = gen(&[instance("Primary Button", &[("Size", "Extra Large"), ("State", "Hover")])]);
        assert_eq!(html, "<PrimaryButton size='extralarge' state='hover' />");
    }

    #[test]
    fn test_instance_keeps_variant_order() {
        let (html, _) = gen(&[instance("Button", &[("State", "Hover"), ("Size", "Large")])]);
        assert_eq!(html, "<Button state='hover' size='large' />");
    }

    #[test]
    fn test_instance_from_json_keeps_variant_order() {
        let scene = framecode_scene::Scene::from_json(
            r#"{"type": "INSTANCE", "name": "Button", "variantProperties": {"State": "Hover", "Size": "Large"}}"#,
        )
        .unwrap();
        let (html, _) = gen(&scene.nodes);
        assert_eq!(html, "<Button state='hover' size='large' />");
    }

    #[test]
    fn test_instance_jsx() {
        let settings = RenderSettings {
            jsx: true,
            ..RenderSettings::default()
        };
        let (html, _) = gen_with(&[instance("Chip", &[("Tone Name", "Info")])], settings);
        assert_eq!(html, "<Chip tonename={info} />");
    }

    #[test]
    fn test_instance_without_name_or_variants() {
        let (html, _) = gen(&[instance("  ", &[])]);
        assert_eq!(html, "<UnknownComponent />");
    }

    #[test]
    fn test_section() {
        let mut node = SceneNode::new(
            "Section",
            NodeKind::Section(Group {
                children: vec![rect("a", 2.0, 3.0, 1.0, 1.0)],
            }),
        )
        .with_bounds(0.0, 0.0, 300.0, 200.0)
        .with_fills(vec![Paint::solid(1.0, 1.0, 1.0)]);
        node.opacity = 0.5;
        let (html, _) = gen(&[node]);
        assert_eq!(
            html,
            "<div style=\"width: 300px; height: 200px; background: white\">\n  \
             <div style=\"width: 1px; height: 1px; left: 2px; top: 3px; position: absolute\"></div>\n\
             </div>"
        );
    }

    #[test]
    fn test_empty_section() {
        let node = SceneNode::new("Section", NodeKind::Section(Group::default())).with_bounds(0.0, 0.0, 30.0, 20.0);
        let (html, _) = gen(&[node]);
        assert_eq!(html, "<div style=\"width: 30px; height: 20px\"></div>");
    }

    #[test]
    fn test_line_always_emitted() {
        let mut node = SceneNode::new("divider", NodeKind::Line).with_bounds(0.0, 0.0, 100.0, 0.0);
        node.strokes = vec![Paint::solid(0.0, 0.0, 0.0)];
        node.stroke_weight = 1.0;
        let (html, _) = gen(&[node]);
        assert_eq!(
            html,
            "<div style=\"width: 100px; height: 0px; border: 1px solid black\"></div>"
        );
    }

    // =========================================================================
    // Text
    // =========================================================================

    fn text(runs: Vec<TextRun>) -> SceneNode {
        SceneNode::new(
            "text",
            NodeKind::Text(TextNode {
                runs,
                ..TextNode::default()
            }),
        )
        .with_bounds(0.0, 0.0, 40.0, 16.0)
        .with_fills(Vec::new())
    }

    fn sized(size: f64) -> TextStyle {
        TextStyle {
            font_size: size,
            ..TextStyle::default()
        }
    }

    #[test]
    fn test_uniform_text_inline() {
        let (html, ctx) = gen(&[text(vec![TextRun::new("Hello", sized(14.0)), TextRun::new("!", sized(14.0))])]);
        assert_eq!(
            html,
            "<div style=\"width: 40px; height: 16px; font-size: 14px; font-family: Inter; font-weight: 400; word-wrap: break-word\">Hello!</div>"
        );
        assert_eq!(ctx.text_styles.len(), 1);
        assert_eq!(ctx.text_styles.segments()[0].text, "Hello!");
    }

    #[test]
    fn test_mixed_text_spans() {
        let (html, ctx) = gen(&[text(vec![
            TextRun::new("a", sized(10.0)),
            TextRun::new("b", sized(11.0)),
            TextRun::new("c", sized(12.0)),
        ])]);
        assert_eq!(html.matches("<span").count(), 3);
        assert!(html.contains("</span><span"));
        assert!(html.contains(
            "<span style=\"font-size: 11px; font-family: Inter; font-weight: 400; word-wrap: break-word\">b</span>"
        ));
        assert_eq!(ctx.text_styles.len(), 3);
    }

    #[test]
    fn test_mixed_text_spans_jsx() {
        let settings = RenderSettings {
            jsx: true,
            ..RenderSettings::default()
        };
        let (html, _) = gen_with(&[text(vec![TextRun::new("a", sized(10.0)), TextRun::new("b", sized(11.0))])], settings);
        assert!(html.contains("<span style={{fontSize: 10, fontFamily: 'Inter', fontWeight: 400, wordWrap: 'break-word'}}>a</span>"));
    }

    #[test]
    fn test_jsx_text_braces_escaped() {
        let settings = RenderSettings {
            jsx: true,
            ..RenderSettings::default()
        };
        let (html, _) = gen_with(&[text(vec![TextRun::new("a {b}", sized(14.0))])], settings);
        assert!(html.ends_with(">a {'{'}b{'}'}</div>"));
    }

    #[test]
    fn test_text_cache_accumulates_across_nodes() {
        let nested = frame(
            vec![text(vec![TextRun::new("one", sized(10.0))])],
            Some(AutoLayout::new(LayoutMode::Vertical)),
        );
        let (_, ctx) = gen(&[nested, text(vec![TextRun::new("two", sized(10.0)), TextRun::new("2", sized(12.0))])]);
        let texts: Vec<&str> = ctx.text_styles.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "2"]);
    }

    #[test]
    fn test_invisible_text_not_cached() {
        let mut hidden = text(vec![TextRun::new("secret", sized(10.0))]);
        hidden.visible = false;
        let (_, ctx) = gen(&[hidden]);
        assert!(ctx.text_styles.is_empty());
    }
}
