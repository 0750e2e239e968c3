//! Diagnosis lifecycle and per-patient medical record aggregation.

use crate::cypher;
use crate::error::{OpError, OpResult};
use medgraph_store::Gateway;
use medgraph_types::{
    body_mass_index, DiagnosedPatient, DiagnosisRecord, DiagnosisStatus, HistoryRecord,
    MedicalRecord, Person, PrescriptionRecord, Severity, VitalsRecord,
};
use serde_json::json;
use std::sync::Arc;

/// Aggregator over the clinical side of the graph: `DIAGNOSED_WITH`
/// relations plus the prescription, vitals and history nodes hanging off
/// each patient.
///
/// Timestamps written by this service are RFC 3339 strings from the wall
/// clock at call time; descending lexicographic order on them is
/// descending chronological order.
pub struct MedicalRecordService<G> {
    pub(crate) gateway: Arc<G>,
}

impl<G> Clone for MedicalRecordService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl<G: Gateway> MedicalRecordService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Record a new diagnosis relation, always born with `active` status.
    /// Repeat diagnoses of the same disease are allowed; each is a new
    /// relation with its own date.
    pub async fn create_diagnosis(
        &self,
        patient: &str,
        disease: &str,
        doctor: &str,
        notes: &str,
        severity: Severity,
    ) -> OpResult<String> {
        let endpoints = self
            .gateway
            .run(
                cypher::DIAGNOSIS_ENDPOINTS,
                vec![("patient", json!(patient)), ("disease", json!(disease))],
            )
            .await?;
        if endpoints.is_empty() {
            return Err(OpError::NotFound("Patient or disease not found".into()));
        }
        self.gateway
            .run(
                cypher::CREATE_DIAGNOSIS,
                vec![
                    ("patient", json!(patient)),
                    ("disease", json!(disease)),
                    ("doctor", json!(doctor)),
                    ("date", json!(now_rfc3339())),
                    ("notes", json!(notes)),
                    ("severity", json!(severity.as_str())),
                ],
            )
            .await?;
        tracing::info!(patient, disease, doctor, "created diagnosis");
        Ok("Diagnosis created successfully".into())
    }

    /// Move a diagnosis to a new lifecycle status. When the pair has been
    /// diagnosed more than once, the most recent relation by date is the
    /// one updated. Non-empty notes are stored as resolution notes.
    pub async fn update_diagnosis_status(
        &self,
        patient: &str,
        disease: &str,
        status: DiagnosisStatus,
        notes: &str,
    ) -> OpResult<String> {
        let rows = self
            .gateway
            .run(
                cypher::UPDATE_DIAGNOSIS_STATUS,
                vec![
                    ("patient", json!(patient)),
                    ("disease", json!(disease)),
                    ("status", json!(status.as_str())),
                    ("notes", json!(notes)),
                    ("updated_at", json!(now_rfc3339())),
                ],
            )
            .await?;
        if rows.is_empty() {
            return Err(OpError::NotFound("Diagnosis not found".into()));
        }
        tracing::info!(patient, disease, status = status.as_str(), "updated diagnosis");
        Ok(format!("Diagnosis status updated to {}", status.as_str()))
    }

    /// Attach a prescription node to a patient, born `active`.
    pub async fn add_prescription(
        &self,
        patient: &str,
        medication: &str,
        dosage: &str,
        frequency: &str,
        doctor: &str,
        duration: &str,
        notes: &str,
    ) -> OpResult<String> {
        let rows = self
            .gateway
            .run(
                cypher::CREATE_PRESCRIPTION,
                vec![
                    ("patient", json!(patient)),
                    ("medication", json!(medication)),
                    ("dosage", json!(dosage)),
                    ("frequency", json!(frequency)),
                    ("doctor", json!(doctor)),
                    ("duration", json!(duration)),
                    ("notes", json!(notes)),
                    ("prescribed_date", json!(now_rfc3339())),
                ],
            )
            .await?;
        if rows.is_empty() {
            return Err(OpError::NotFound(format!("Patient '{patient}' not found")));
        }
        tracing::info!(patient, medication, "added prescription");
        Ok("Prescription added successfully".into())
    }

    /// Record a vital-signs reading. BMI is derived here, from this
    /// reading's own weight and height, and only when both are positive.
    pub async fn add_vitals(
        &self,
        patient: &str,
        blood_pressure: &str,
        heart_rate: i64,
        temperature: f64,
        weight: f64,
        height: f64,
        notes: &str,
    ) -> OpResult<String> {
        let bmi = body_mass_index(weight, height);
        let rows = self
            .gateway
            .run(
                cypher::CREATE_VITALS,
                vec![
                    ("patient", json!(patient)),
                    ("blood_pressure", json!(blood_pressure)),
                    ("heart_rate", json!(heart_rate)),
                    ("temperature", json!(temperature)),
                    ("weight", json!(weight)),
                    ("height", json!(height)),
                    ("bmi", json!(bmi)),
                    ("notes", json!(notes)),
                    ("recorded_at", json!(now_rfc3339())),
                ],
            )
            .await?;
        if rows.is_empty() {
            return Err(OpError::NotFound(format!("Patient '{patient}' not found")));
        }
        tracing::info!(patient, "recorded vital signs");
        Ok("Vital signs recorded successfully".into())
    }

    /// Attach a past-condition entry to a patient's history.
    pub async fn add_medical_history(
        &self,
        patient: &str,
        condition: &str,
        date_diagnosed: &str,
        resolved: bool,
        notes: &str,
    ) -> OpResult<String> {
        let rows = self
            .gateway
            .run(
                cypher::CREATE_HISTORY,
                vec![
                    ("patient", json!(patient)),
                    ("condition", json!(condition)),
                    ("date_diagnosed", json!(date_diagnosed)),
                    ("resolved", json!(resolved)),
                    ("notes", json!(notes)),
                    ("created_at", json!(now_rfc3339())),
                ],
            )
            .await?;
        if rows.is_empty() {
            return Err(OpError::NotFound(format!("Patient '{patient}' not found")));
        }
        tracing::info!(patient, condition, "added medical history");
        Ok("Medical history added successfully".into())
    }

    /// Assemble a patient's complete record from four independent queries.
    /// Sub-lists come back newest first; vitals are capped at the five most
    /// recent readings. A patient with no clinical data gets empty lists.
    pub async fn get_patient_medical_record(&self, patient: &str) -> OpResult<MedicalRecord> {
        let person_rows = self
            .gateway
            .run(cypher::PERSON_BY_NAME, vec![("name", json!(patient))])
            .await?;
        let person_row = person_rows
            .first()
            .ok_or_else(|| OpError::NotFound(format!("Patient '{patient}' not found")))?;
        let person = Person {
            name: person_row.string("name").map_err(OpError::from)?,
            age: person_row.int("age").map_err(OpError::from)?,
        };

        let name_param = || vec![("name", json!(patient))];

        let diagnoses = self
            .gateway
            .run(cypher::RECORD_DIAGNOSES, name_param())
            .await?
            .iter()
            .map(|row| {
                Ok(DiagnosisRecord {
                    disease: row.string("disease")?,
                    doctor: row.string("doctor")?,
                    date: row.string("date")?,
                    notes: row.opt_string("notes").unwrap_or_default(),
                    severity: row.opt_string("severity").as_deref().and_then(Severity::parse),
                    status: row
                        .opt_string("status")
                        .as_deref()
                        .and_then(DiagnosisStatus::parse),
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;

        let prescriptions = self
            .gateway
            .run(cypher::RECORD_PRESCRIPTIONS, name_param())
            .await?
            .iter()
            .map(|row| {
                Ok(PrescriptionRecord {
                    medication: row.string("medication")?,
                    dosage: row.opt_string("dosage").unwrap_or_default(),
                    frequency: row.opt_string("frequency").unwrap_or_default(),
                    doctor: row.string("doctor")?,
                    duration: row.opt_string("duration").unwrap_or_default(),
                    date: row.string("date")?,
                    status: row.opt_string("status").unwrap_or_default(),
                    notes: row.opt_string("notes").unwrap_or_default(),
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;

        let vitals = self
            .gateway
            .run(cypher::RECORD_VITALS, name_param())
            .await?
            .iter()
            .map(|row| {
                Ok(VitalsRecord {
                    blood_pressure: row.string("blood_pressure")?,
                    heart_rate: row.int("heart_rate")?,
                    temperature: row.float("temperature")?,
                    weight: row.float("weight")?,
                    height: row.float("height")?,
                    bmi: row.opt_float("bmi"),
                    date: row.string("date")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;

        let medical_history = self
            .gateway
            .run(cypher::RECORD_HISTORY, name_param())
            .await?
            .iter()
            .map(|row| {
                Ok(HistoryRecord {
                    condition: row.string("condition")?,
                    date_diagnosed: row.string("date_diagnosed")?,
                    resolved: row.boolean("resolved")?,
                    notes: row.opt_string("notes").unwrap_or_default(),
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;

        Ok(MedicalRecord {
            patient: person,
            diagnoses,
            prescriptions,
            vitals,
            medical_history,
        })
    }

    /// Every patient holding an *active* diagnosis of the named disease,
    /// newest diagnosis first. Resolved and chronic cases are excluded.
    pub async fn search_by_diagnosis(&self, disease: &str) -> OpResult<Vec<DiagnosedPatient>> {
        let rows = self
            .gateway
            .run(cypher::SEARCH_BY_DIAGNOSIS, vec![("disease", json!(disease))])
            .await?;
        rows.iter()
            .map(|row| {
                Ok(DiagnosedPatient {
                    patient_name: row.string("patient_name")?,
                    age: row.int("age")?,
                    doctor: row.string("doctor")?,
                    diagnosed_date: row.string("diagnosed_date")?,
                    severity: row.opt_string("severity").as_deref().and_then(Severity::parse),
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)
    }
}
