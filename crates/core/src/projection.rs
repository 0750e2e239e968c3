//! Deduplicated node/edge views for graph rendering.

use crate::cypher;
use crate::error::ProjectionError;
use crate::style::{node_color, severity_color, GraphScope, NodeKind, PLAIN_EDGE_COLOR};
use medgraph_store::Gateway;
use medgraph_types::{GraphEdge, GraphNode, GraphView, Severity};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

/// Incremental view assembly with node deduplication.
///
/// Node identity is the entity name; the first insertion of an id wins and
/// later insertions are ignored, so attributes always come from the row
/// that introduced the node.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    seen: HashSet<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node unless its id is already present. Returns whether the
    /// node was inserted, which callers use to attach first-sight edges.
    pub fn add_node(&mut self, id: &str, color: &str, title: Option<String>) -> bool {
        if !self.seen.insert(id.to_owned()) {
            return false;
        }
        self.nodes.push(GraphNode {
            id: id.to_owned(),
            label: id.to_owned(),
            color: color.to_owned(),
            title,
        });
        true
    }

    pub fn add_edge(&mut self, from: &str, to: &str, color: &str, title: Option<String>) {
        self.edges.push(GraphEdge {
            from: from.to_owned(),
            to: to.to_owned(),
            color: color.to_owned(),
            title,
        });
    }

    /// Finish the view. A view missing either nodes or edges is reported
    /// as [`ProjectionError::NoData`] rather than rendered blank.
    pub fn finish(self) -> Result<GraphView, ProjectionError> {
        if self.nodes.is_empty() || self.edges.is_empty() {
            return Err(ProjectionError::NoData);
        }
        Ok(GraphView {
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}

/// Builds the three renderable views over the graph.
pub struct GraphProjector<G> {
    gateway: Arc<G>,
}

impl<G> Clone for GraphProjector<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: Gateway> GraphProjector<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// One person and their `HAS_DISEASE` neighbourhood. Disease nodes
    /// carry the description as hover title; edges are uncoloured by
    /// severity since the plain relation has none.
    pub async fn patient_graph(&self, name: &str) -> Result<GraphView, ProjectionError> {
        let rows = self
            .gateway
            .run(cypher::PERSON_DISEASES, vec![("name", json!(name))])
            .await?;

        let mut builder = GraphBuilder::new();
        builder.add_node(name, node_color(GraphScope::Patient, NodeKind::Person), None);
        for row in &rows {
            let disease = row.string("name").map_err(ProjectionError::from)?;
            let description = row.opt_string("description");
            if builder.add_node(
                &disease,
                node_color(GraphScope::Patient, NodeKind::Disease),
                description,
            ) {
                builder.add_edge(name, &disease, PLAIN_EDGE_COLOR, None);
            }
        }
        builder.finish()
    }

    /// Every patient and disease in the store. Nodes appear for every
    /// diagnosis row regardless of status, but only *active* diagnoses
    /// contribute edges, coloured by severity.
    pub async fn hospital_graph(&self) -> Result<GraphView, ProjectionError> {
        let rows = self.gateway.run(cypher::HOSPITAL_OVERVIEW, Vec::new()).await?;

        let mut builder = GraphBuilder::new();
        for row in &rows {
            let patient = row.string("patient").map_err(ProjectionError::from)?;
            let age = row.int("age").map_err(ProjectionError::from)?;
            let disease = row.string("disease").map_err(ProjectionError::from)?;
            let severity_raw = row.opt_string("severity");
            let severity = severity_raw.as_deref().and_then(Severity::parse);
            let status = row.opt_string("status").unwrap_or_default();

            builder.add_node(
                &patient,
                node_color(GraphScope::Hospital, NodeKind::Person),
                Some(format!("Patient: {patient}\nAge: {age}")),
            );
            builder.add_node(
                &disease,
                node_color(GraphScope::Hospital, NodeKind::Disease),
                Some(format!("Disease: {disease}")),
            );
            if status == "active" {
                builder.add_edge(
                    &patient,
                    &disease,
                    severity_color(severity),
                    Some(format!(
                        "Severity: {}\nStatus: {status}",
                        severity_raw.as_deref().unwrap_or("unknown")
                    )),
                );
            }
        }
        builder.finish()
    }

    /// One disease at the centre, its diagnosed patients around it, and
    /// each patient's *other* active diseases on the periphery. Edges from
    /// the centre are attached when the patient node is first seen, so a
    /// patient diagnosed twice still gets exactly one spoke.
    pub async fn disease_network(&self, disease: &str) -> Result<GraphView, ProjectionError> {
        let rows = self
            .gateway
            .run(cypher::DISEASE_NETWORK, vec![("disease", json!(disease))])
            .await?;

        let mut builder = GraphBuilder::new();
        builder.add_node(
            disease,
            node_color(GraphScope::DiseaseNetwork, NodeKind::Disease),
            None,
        );
        for row in &rows {
            let patient = row.string("patient").map_err(ProjectionError::from)?;
            let age = row.int("age").map_err(ProjectionError::from)?;
            if builder.add_node(
                &patient,
                node_color(GraphScope::DiseaseNetwork, NodeKind::Person),
                Some(format!("Patient: {patient}\nAge: {age}")),
            ) {
                builder.add_edge(
                    disease,
                    &patient,
                    node_color(GraphScope::DiseaseNetwork, NodeKind::Disease),
                    None,
                );
            }
            if let Some(other) = row.opt_string("other_disease") {
                if builder.add_node(
                    &other,
                    node_color(GraphScope::DiseaseNetwork, NodeKind::RelatedDisease),
                    None,
                ) {
                    builder.add_edge(&patient, &other, PLAIN_EDGE_COLOR, None);
                }
            }
        }
        builder.finish()
    }
}
