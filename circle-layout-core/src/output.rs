//! Output types for the JavaScript renderer.
//!
//! These structs are serialized to JSON and handed back across the wasm
//! boundary.

use serde::Serialize;

use crate::geometry::Circle;
use crate::tree::TreeError;

/// A laid out node ready for drawing
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: String,
    pub parent: Option<String>,
    /// World coordinates
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Center relative to the parent's center
    pub local_x: f64,
    pub local_y: f64,
    pub folded: bool,
}

/// Error information for the caller's diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>, // 1-based, JSON input errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>, // 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

impl ErrorInfo {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
            node: None,
        }
    }
}

impl From<serde_json::Error> for ErrorInfo {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
            line: Some(e.line()),
            column: Some(e.column()),
            node: None,
        }
    }
}

impl From<TreeError> for ErrorInfo {
    fn from(e: TreeError) -> Self {
        Self {
            message: e.msg,
            line: None,
            column: None,
            node: e.node,
        }
    }
}

/// Result of `layout_hierarchy`
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Result of `pack_circles`
#[derive(Debug, Clone, Serialize)]
pub struct PackOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub circles: Vec<Circle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<Circle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
