//! framecode Code Generator
//!
//! Renders a design scene tree into HTML or JSX markup with inline styles.
//! Every top-level call builds a fresh `RenderContext` holding the settings
//! and the text-style cache; the context is threaded through the recursive
//! walk, so calls never share state.
//!
//! ```text
//! [SceneNode] + RenderSettings → generate() → RenderOutput { markup, text_styles }
//! ```

pub mod color;
pub mod html;
pub mod report;
pub mod style;
pub mod text;
pub mod variables;

use framecode_scene::SceneNode;
use serde::{Deserialize, Serialize};
use tracing::debug_span;

pub use report::TextStyleCache;
pub use text::TextSegment;

/// Options chosen by the user in the host UI. Immutable for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// Emit a `data-layer` attribute carrying the node name.
    pub layer_name: bool,
    /// Emit JSX (`style={{...}}`) instead of HTML attributes.
    pub jsx: bool,
    /// Prefer inferred auto-layout over absolute positioning.
    pub optimize_layout: bool,
}

/// State threaded through one render.
/// The text path appends to `text_styles`; nothing else mutates it.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub settings: RenderSettings,
    pub text_styles: TextStyleCache,
}

impl RenderContext {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            text_styles: TextStyleCache::new(),
        }
    }
}

/// The result of rendering a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub markup: String,
    /// Text segments in the order their nodes were rendered.
    pub text_styles: TextStyleCache,
}

/// Render the root nodes of a selection into markup.
pub fn generate(nodes: &[SceneNode], settings: &RenderSettings) -> RenderOutput {
    let _span = debug_span!(
        "generate",
        roots = nodes.len(),
        jsx = settings.jsx,
        optimize_layout = settings.optimize_layout
    )
    .entered();

    let mut ctx = RenderContext::new(*settings);
    let markup = html::generate(nodes, &mut ctx);

    RenderOutput {
        markup,
        text_styles: ctx.text_styles,
    }
}

/// Renders selections one after another and keeps the text styles of the
/// most recent one for a later report.
#[derive(Debug, Default)]
pub struct Generator {
    previous: TextStyleCache,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `nodes`, replacing the text styles of any previous call.
    pub fn generate(&mut self, nodes: &[SceneNode], settings: &RenderSettings) -> String {
        let output = generate(nodes, settings);
        self.previous = output.text_styles;
        output.markup
    }

    /// Report of the text styles collected by the most recent `generate`.
    pub fn text_styles_report(&self, jsx: bool) -> String {
        self.previous.report(jsx)
    }
}

/// Format a number with at most two decimals, dropping trailing zeros.
/// `12.0` → `12`, `0.5` → `0.5`, `1.0 / 3.0` → `0.33`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".into();
    }
    let fixed = format!("{n:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".into()
    } else {
        trimmed.to_string()
    }
}

/// Indent every non-blank line by two spaces.
pub(crate) fn indent(markup: &str) -> String {
    markup
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
