//! Entity and per-query record structs.
//!
//! Each read operation in the core maps store rows into one of these shapes
//! at the gateway boundary, so downstream consumers never see untyped
//! field mappings. Timestamps are RFC 3339 strings throughout, which keeps
//! them lexicographically sortable.

use crate::{DiagnosisStatus, Severity};
use std::collections::BTreeMap;

/// A person node. `name` is the unique key; immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

/// A disease node. `name` is the unique key; immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Disease {
    pub name: String,
    pub description: String,
}

/// A disease as seen from one of a person's `HAS_DISEASE` edges.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiseaseRef {
    pub name: String,
    pub description: String,
}

/// A person together with every disease they are related to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatientDetails {
    pub name: String,
    pub age: i64,
    pub diseases: Vec<DiseaseRef>,
}

/// One `DIAGNOSED_WITH` relation as part of a patient's medical record.
///
/// `severity` and `status` are `None` when the stored value is not a
/// recognised enum member; the projection engine styles such edges with the
/// neutral colour.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiagnosisRecord {
    pub disease: String,
    pub doctor: String,
    pub date: String,
    pub notes: String,
    pub severity: Option<Severity>,
    pub status: Option<DiagnosisStatus>,
}

/// One prescription node owned by a patient.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PrescriptionRecord {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub doctor: String,
    pub duration: String,
    pub date: String,
    pub status: String,
    pub notes: String,
}

/// One vital-signs node owned by a patient. `bmi` is derived from the
/// record's own weight/height at insertion time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VitalsRecord {
    pub blood_pressure: String,
    pub heart_rate: i64,
    pub temperature: f64,
    pub weight: f64,
    pub height: f64,
    pub bmi: Option<f64>,
    pub date: String,
}

/// One medical-history node owned by a patient.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryRecord {
    pub condition: String,
    pub date_diagnosed: String,
    pub resolved: bool,
    pub notes: String,
}

/// A patient's complete medical record: every sub-list is independently
/// queried and independently ordered; missing data yields an empty list,
/// never an error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MedicalRecord {
    pub patient: Person,
    pub diagnoses: Vec<DiagnosisRecord>,
    pub prescriptions: Vec<PrescriptionRecord>,
    pub vitals: Vec<VitalsRecord>,
    pub medical_history: Vec<HistoryRecord>,
}

/// A patient found by an active-diagnosis search, annotated with the
/// diagnosing doctor, date and severity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiagnosedPatient {
    pub patient_name: String,
    pub age: i64,
    pub doctor: String,
    pub diagnosed_date: String,
    pub severity: Option<Severity>,
}

/// Which event stream a timeline entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Diagnosis,
    Prescription,
    Vitals,
}

/// One entry in a patient's merged medical timeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEvent {
    pub item: String,
    pub date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// A disease with how often it occurs in some scope.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiseaseCount {
    pub disease: String,
    pub count: i64,
}

/// Aggregated performance statistics for one doctor. Every metric is an
/// independent query; absence of data yields zeros and empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DoctorStats {
    pub total_patients: i64,
    pub severity_distribution: BTreeMap<String, i64>,
    pub common_diseases: Vec<DiseaseCount>,
    pub total_prescriptions: i64,
}

/// Chart-ready label/value/colour triples, one entry per index.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub colors: Vec<String>,
}
