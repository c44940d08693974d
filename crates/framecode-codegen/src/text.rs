//! Text segments.
//!
//! A text node's runs are merged into contiguous segments of identical
//! style. Each segment carries the declarations for its font, color and
//! spacing, and its characters escaped for markup.

use crate::color::color_from_fills;
use crate::style::{self, Declaration};
use framecode_scene::text::{
    LetterSpacing, LineHeight, TextAlign, TextCase, TextDecoration, TextNode, TextStyle,
};

/// A run of uniformly styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    /// Escaped characters, line breaks as `<br/>`.
    pub text: String,
    pub declarations: Vec<Declaration>,
}

impl TextSegment {
    /// The declarations as they appear inside a style attribute.
    pub fn style(&self, jsx: bool) -> String {
        style::join(&self.declarations, jsx)
    }
}

/// Split a text node into segments of identical style.
pub fn segments(text: &TextNode, jsx: bool) -> Vec<TextSegment> {
    let mut grouped: Vec<(String, &TextStyle)> = Vec::new();
    for run in text.runs.iter().filter(|run| !run.characters.is_empty()) {
        if let Some((characters, style)) = grouped.last_mut() {
            if **style == run.style {
                characters.push_str(&run.characters);
                continue;
            }
        }
        grouped.push((run.characters.clone(), &run.style));
    }

    grouped
        .into_iter()
        .map(|(characters, style)| TextSegment {
            text: markup_text(&characters, jsx),
            declarations: segment_declarations(style),
        })
        .collect()
}

/// Escape markup characters and turn newlines into `<br/>`. JSX also needs
/// its expression braces escaped.
fn markup_text(characters: &str, jsx: bool) -> String {
    let mut out = String::with_capacity(characters.len());
    for ch in characters.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br/>"),
            '{' if jsx => out.push_str("{'{'}"),
            '}' if jsx => out.push_str("{'}'}"),
            _ => out.push(ch),
        }
    }
    out
}

fn segment_declarations(style: &TextStyle) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    let color = color_from_fills(&style.fills);
    if !color.is_empty() {
        declarations.push(Declaration::keyword("color", color));
    }
    declarations.push(Declaration::px("font-size", style.font_size));
    declarations.push(Declaration::keyword("font-family", style.font_family.clone()));
    if style.font_style.to_lowercase().contains("italic") {
        declarations.push(Declaration::keyword("font-style", "italic"));
    }
    declarations.push(Declaration::number("font-weight", style.font_weight));

    match style.text_decoration {
        TextDecoration::None => {}
        TextDecoration::Underline => declarations.push(Declaration::keyword("text-decoration", "underline")),
        TextDecoration::Strikethrough => {
            declarations.push(Declaration::keyword("text-decoration", "line-through"))
        }
    }

    let transform = match style.text_case {
        TextCase::Original => None,
        TextCase::Upper => Some("uppercase"),
        TextCase::Lower => Some("lowercase"),
        TextCase::Title => Some("capitalize"),
    };
    if let Some(transform) = transform {
        declarations.push(Declaration::keyword("text-transform", transform));
    }

    let line_height = match style.line_height {
        LineHeight::Auto => 0.0,
        LineHeight::Pixels { value } => value,
        LineHeight::Percent { value } => style.font_size * value / 100.0,
    };
    if line_height > 0.0 {
        // Unitless line heights are multipliers in JSX, so keep the unit.
        declarations.push(Declaration::keyword(
            "line-height",
            format!("{}px", crate::format_number(line_height)),
        ));
    }

    let letter_spacing = match style.letter_spacing {
        LetterSpacing::Pixels { value } => value,
        LetterSpacing::Percent { value } => style.font_size * value / 100.0,
    };
    if letter_spacing != 0.0 {
        declarations.push(Declaration::px("letter-spacing", letter_spacing));
    }

    declarations.push(Declaration::keyword("word-wrap", "break-word"));
    declarations
}

/// `text-align` for anything but left alignment.
pub fn text_align(text: &TextNode) -> Vec<Declaration> {
    let align = match text.text_align_horizontal {
        TextAlign::Left => return Vec::new(),
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justified => "justify",
    };
    vec![Declaration::keyword("text-align", align)]
}
