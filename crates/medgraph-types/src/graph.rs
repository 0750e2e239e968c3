//! Renderer-agnostic graph view.
//!
//! The projection engine emits this structure; any downstream renderer can
//! consume it without further transformation. Node ids are entity names and
//! are unique within a view.

/// A single node in a projected graph view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub color: String,
    /// Tooltip text, where the projection has one to offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A single edge in a projected graph view, referencing nodes by id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// An ordered set of nodes and edges ready for rendering.
///
/// A view is only ever constructed with at least one node and one edge; a
/// projection that collects nothing signals `NoData` instead of emitting an
/// empty view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    /// True if the view contains a node with this id.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// True if the view contains an edge between these ids, in either
    /// direction.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }
}
