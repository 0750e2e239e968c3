//! Fixed styling vocabulary for graph views and charts.
//!
//! Colours are plain strings handed through to the renderer; the engine
//! attaches them but never interprets them.

use medgraph_types::Severity;

/// Which projection a node is being styled for. The patient view uses
/// named colours; the population-level views use the hex palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphScope {
    Patient,
    Hospital,
    DiseaseNetwork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Person,
    Disease,
    /// A co-occurring disease on the periphery of the disease network view.
    RelatedDisease,
}

/// Colour for edges that carry no severity information.
pub const PLAIN_EDGE_COLOR: &str = "#95a5a6";

/// Ten-colour palette cycled through chart slices, index modulo ten.
pub const CHART_COLORS: [&str; 10] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#1abc9c", "#34495e", "#e67e22",
    "#95a5a6", "#d35400",
];

/// One colour per severity bucket, in [`Severity::ALL`] order.
pub const SEVERITY_CHART_COLORS: [&str; 4] = ["#2ecc71", "#f39c12", "#e74c3c", "#9b59b6"];

pub fn node_color(scope: GraphScope, kind: NodeKind) -> &'static str {
    match (scope, kind) {
        (GraphScope::Patient, NodeKind::Person) => "blue",
        (GraphScope::Patient, _) => "green",
        (_, NodeKind::Person) => "#3498db",
        (_, NodeKind::Disease) => "#e74c3c",
        (_, NodeKind::RelatedDisease) => "#95a5a6",
    }
}

/// Edge colour for a diagnosis of the given severity; unknown or missing
/// severities fall back to the neutral grey.
pub fn severity_color(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Mild) => "#2ecc71",
        Some(Severity::Moderate) => "#f39c12",
        Some(Severity::Severe) => "#e74c3c",
        Some(Severity::Critical) => "#9b59b6",
        None => PLAIN_EDGE_COLOR,
    }
}
