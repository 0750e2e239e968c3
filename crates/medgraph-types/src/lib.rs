//! # MedGraph Types
//!
//! Shared domain model for the MedGraph patient–disease knowledge graph.
//!
//! This crate contains pure data types only: clinical enums, entity and
//! per-query record structs, and the renderer-agnostic graph view emitted by
//! the projection engine. **No store concerns**: Cypher, sessions, and row
//! decoding belong in `medgraph-store` and `medgraph-core`.

pub mod graph;
pub mod records;

pub use graph::{GraphEdge, GraphNode, GraphView};
pub use records::{
    DiagnosedPatient, DiagnosisRecord, Disease, DiseaseCount, DiseaseRef, Distribution,
    DoctorStats, HistoryRecord, MedicalRecord, PatientDetails, Person, PrescriptionRecord,
    TimelineEvent, TimelineKind, VitalsRecord,
};

/// Error returned when parsing a clinical enum from its wire form.
#[derive(Debug, thiserror::Error)]
#[error("unrecognised {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Severity of a diagnosis, carried on `DIAGNOSED_WITH` relations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// All severities, in escalating order. This is also the fixed bucket
    /// order of the severity distribution chart.
    pub const ALL: [Severity; 4] = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }

    /// Lenient parse for values read back from the store. Unrecognised
    /// values map to `None` rather than an error, since historic data may
    /// predate the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s).ok_or_else(|| ParseEnumError {
            kind: "severity",
            value: s.to_owned(),
        })
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a diagnosis. Mutated in place; repeat diagnoses are
/// separate relations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisStatus {
    #[default]
    Active,
    Resolved,
    Chronic,
}

impl DiagnosisStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosisStatus::Active => "active",
            DiagnosisStatus::Resolved => "resolved",
            DiagnosisStatus::Chronic => "chronic",
        }
    }

    /// Lenient parse for values read back from the store.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(DiagnosisStatus::Active),
            "resolved" => Some(DiagnosisStatus::Resolved),
            "chronic" => Some(DiagnosisStatus::Chronic),
            _ => None,
        }
    }
}

impl std::str::FromStr for DiagnosisStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosisStatus::parse(s).ok_or_else(|| ParseEnumError {
            kind: "diagnosis status",
            value: s.to_owned(),
        })
    }
}

impl std::fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-mass index from weight in kilograms and height in centimetres.
///
/// Returns `None` unless both measurements are positive. The result is
/// computed at insertion time from the vitals record's own measurements and
/// is never back-filled.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg > 0.0 && height_cm > 0.0 {
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}
