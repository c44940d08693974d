//! framecode scene model
//!
//! The node tree a design tool exports: frames, groups, shapes, text and
//! component instances with their paints and layout attributes. Scenes are
//! loaded from the JSON a plugin host serializes, and are read-only from
//! then on.
//!
//! # Example
//!
//! ```
//! use framecode_scene::Scene;
//!
//! let scene = Scene::from_json("[]").unwrap();
//! assert!(scene.nodes.is_empty());
//! ```

pub mod node;
pub mod paint;
pub mod text;

pub use node::{NodeKind, SceneNode};
pub use paint::{Paint, Rgb, Rgba};
pub use text::{TextNode, TextRun, TextStyle};

use serde::Deserialize;

/// Scene loading error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Scene error at line {line}, column {column}: {message}")]
pub struct SceneError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// The root nodes of a selection, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self { nodes }
    }

    /// Load a scene from JSON. Accepts either an array of root nodes or a
    /// single node object.
    pub fn from_json(source: &str) -> Result<Scene, SceneError> {
        if source.trim_start().starts_with('{') {
            let node: SceneNode = serde_json::from_str(source)?;
            Ok(Scene { nodes: vec![node] })
        } else {
            Ok(serde_json::from_str(source)?)
        }
    }

    /// Number of nodes across all root subtrees.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::subtree_len).sum()
    }
}
