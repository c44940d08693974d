//! Text node payload.
//!
//! Text is stored as runs, each with the full style that applies to its
//! characters. Neighbouring runs may share a style; the renderer merges
//! them into contiguous segments.

use serde::{Deserialize, Serialize};

use crate::paint::Paint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(default)]
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub text_align_horizontal: TextAlign,
    #[serde(default)]
    pub text_auto_resize: TextAutoResize,
}

impl TextNode {
    /// The node's full character content.
    pub fn characters(&self) -> String {
        self.runs.iter().map(|run| run.characters.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub characters: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(characters: impl Into<String>, style: TextStyle) -> Self {
        Self {
            characters: characters.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_family: String,
    /// Face name as the font reports it, e.g. `Regular` or `Bold Italic`.
    pub font_style: String,
    pub font_size: f64,
    pub font_weight: f64,
    pub fills: Vec<Paint>,
    pub text_decoration: TextDecoration,
    pub text_case: TextCase,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            font_style: "Regular".into(),
            font_size: 12.0,
            font_weight: 400.0,
            fills: Vec::new(),
            text_decoration: TextDecoration::default(),
            text_case: TextCase::default(),
            line_height: LineHeight::default(),
            letter_spacing: LetterSpacing::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    #[default]
    None,
    Height,
    WidthAndHeight,
    Truncate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    Pixels { value: f64 },
    Percent { value: f64 },
}

impl Default for LetterSpacing {
    fn default() -> Self {
        LetterSpacing::Pixels { value: 0.0 }
    }
}
