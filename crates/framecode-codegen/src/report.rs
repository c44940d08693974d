//! Text-style cache and report.
//!
//! The text path records every segment it renders; after a render the host
//! can show the computed styles without walking the tree again.

use crate::text::TextSegment;

/// Report shown when the last render contained no text.
pub const NO_TEXT_STYLES: &str = "// No text styles in this selection";

/// Segments of the text nodes rendered by one call, in render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleCache {
    segments: Vec<TextSegment>,
}

impl TextStyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, segments: impl IntoIterator<Item = TextSegment>) {
        self.segments.extend(segments);
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Each segment as a `// text` comment followed by one declaration per
    /// line, segments separated by `---`.
    pub fn report(&self, jsx: bool) -> String {
        if self.segments.is_empty() {
            return NO_TEXT_STYLES.to_string();
        }

        self.segments
            .iter()
            .map(|segment| {
                let declarations: Vec<String> = segment
                    .declarations
                    .iter()
                    .map(|d| d.render(jsx))
                    .collect();
                format!("// {}\n{}", segment.text, declarations.join(";\n"))
            })
            .collect::<Vec<_>>()
            .join("\n---\n")
    }
}
