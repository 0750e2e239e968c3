//! In-memory gateway for exercising the engine layers without a store.
//!
//! The mock dispatches on the exact query template and evaluates it against
//! plain vectors, so check-then-insert sequences, ordering clauses and
//! row-shape contracts are all genuinely exercised by the unit tests.

use crate::cypher;
use async_trait::async_trait;
use medgraph_store::{Gateway, Params, Row, StoreError};
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub(crate) struct Diag {
    pub patient: String,
    pub disease: String,
    pub doctor: String,
    pub date: String,
    pub notes: String,
    pub severity: String,
    pub status: String,
    pub resolution_notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Rx {
    pub patient: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub doctor: String,
    pub duration: String,
    pub notes: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Vitals {
    pub patient: String,
    pub blood_pressure: String,
    pub heart_rate: i64,
    pub temperature: f64,
    pub weight: f64,
    pub height: f64,
    pub bmi: Option<f64>,
    pub date: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct History {
    pub patient: String,
    pub condition: String,
    pub date_diagnosed: String,
    pub resolved: bool,
    pub notes: String,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub persons: Vec<(String, i64)>,
    pub diseases: Vec<(String, String)>,
    pub has_disease: Vec<(String, String)>,
    pub diagnoses: Vec<Diag>,
    pub prescriptions: Vec<Rx>,
    pub vitals: Vec<Vitals>,
    pub history: Vec<History>,
    pub fail: bool,
}

#[derive(Debug, Default)]
pub(crate) struct MockGateway {
    state: Mutex<State>,
}

fn param<'a>(params: &'a Params, name: &str) -> &'a Value {
    params
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
        .unwrap_or(&Value::Null)
}

fn str_param(params: &Params, name: &str) -> String {
    param(params, name).as_str().unwrap_or_default().to_owned()
}

fn row(value: Value) -> Row {
    Row::from_value(value).expect("mock rows are objects")
}

/// Count occurrences per key, preserving first-seen order.
fn tally(keys: impl Iterator<Item = String>) -> Vec<(String, i64)> {
    let mut counts: Vec<(String, i64)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        mock.state.lock().expect("mock lock").fail = true;
        mock
    }

    pub fn with_state(f: impl FnOnce(&mut State)) -> Self {
        let mock = Self::default();
        f(&mut mock.state.lock().expect("mock lock"));
        mock
    }

    pub fn person(state: &mut State, name: &str, age: i64) {
        state.persons.push((name.to_owned(), age));
    }

    pub fn disease(state: &mut State, name: &str, description: &str) {
        state.diseases.push((name.to_owned(), description.to_owned()));
    }

    /// Read access to the backing state, for asserting on stored fields
    /// that no read query surfaces.
    pub fn snapshot<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        f(&self.state.lock().expect("mock lock"))
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn run(&self, cypher_text: &str, params: Params) -> Result<Vec<Row>, StoreError> {
        let mut state = self.state.lock().expect("mock lock");
        if state.fail {
            return Err(StoreError::Decode("simulated store failure".into()));
        }

        let rows = match cypher_text {
            cypher::PERSON_EXISTS => {
                let name = str_param(&params, "name");
                state
                    .persons
                    .iter()
                    .filter(|(n, _)| *n == name)
                    .map(|(n, _)| row(json!({ "name": n })))
                    .collect()
            }
            cypher::CREATE_PERSON => {
                let name = str_param(&params, "name");
                let age = param(&params, "age").as_i64().unwrap_or_default();
                state.persons.push((name, age));
                Vec::new()
            }
            cypher::DISEASE_EXISTS => {
                let name = str_param(&params, "name");
                state
                    .diseases
                    .iter()
                    .filter(|(n, _)| *n == name)
                    .map(|(n, _)| row(json!({ "name": n })))
                    .collect()
            }
            cypher::CREATE_DISEASE => {
                let name = str_param(&params, "name");
                let description = str_param(&params, "description");
                state.diseases.push((name, description));
                Vec::new()
            }
            cypher::RELATIONSHIP_COUNT => {
                let person = str_param(&params, "person");
                let disease = str_param(&params, "disease");
                let count = state
                    .has_disease
                    .iter()
                    .filter(|(p, d)| *p == person && *d == disease)
                    .count() as i64;
                vec![row(json!({ "count": count }))]
            }
            cypher::CREATE_RELATIONSHIP => {
                let person = str_param(&params, "person");
                let disease = str_param(&params, "disease");
                let both = state.persons.iter().any(|(n, _)| *n == person)
                    && state.diseases.iter().any(|(n, _)| *n == disease);
                if both {
                    state.has_disease.push((person, disease));
                }
                Vec::new()
            }
            cypher::DELETE_RELATIONSHIP => {
                let person = str_param(&params, "person");
                let disease = str_param(&params, "disease");
                state
                    .has_disease
                    .retain(|(p, d)| !(*p == person && *d == disease));
                Vec::new()
            }
            cypher::PERSON_DISEASES | cypher::PERSON_DISEASES_BY_NAME => {
                let name = str_param(&params, "name");
                let mut linked: Vec<(String, String)> = state
                    .has_disease
                    .iter()
                    .filter(|(p, _)| *p == name)
                    .filter_map(|(_, d)| {
                        state
                            .diseases
                            .iter()
                            .find(|(n, _)| n == d)
                            .map(|(n, desc)| (n.clone(), desc.clone()))
                    })
                    .collect();
                if cypher_text == cypher::PERSON_DISEASES_BY_NAME {
                    linked.sort_by(|a, b| a.0.cmp(&b.0));
                }
                linked
                    .into_iter()
                    .map(|(n, desc)| row(json!({ "name": n, "description": desc })))
                    .collect()
            }
            cypher::LIST_PERSONS => {
                let mut persons = state.persons.clone();
                persons.sort_by(|a, b| a.0.cmp(&b.0));
                persons
                    .into_iter()
                    .map(|(n, age)| row(json!({ "name": n, "age": age })))
                    .collect()
            }
            cypher::LIST_DISEASES => {
                let mut diseases = state.diseases.clone();
                diseases.sort_by(|a, b| a.0.cmp(&b.0));
                diseases
                    .into_iter()
                    .map(|(n, desc)| row(json!({ "name": n, "description": desc })))
                    .collect()
            }
            cypher::SEARCH_PERSONS => {
                let term = str_param(&params, "term").to_lowercase();
                let mut matches: Vec<(String, i64)> = state
                    .persons
                    .iter()
                    .filter(|(n, _)| n.to_lowercase().contains(&term))
                    .cloned()
                    .collect();
                matches.sort_by(|a, b| a.0.cmp(&b.0));
                matches.truncate(20);
                matches
                    .into_iter()
                    .map(|(n, age)| row(json!({ "name": n, "age": age })))
                    .collect()
            }
            cypher::PERSON_BY_NAME => {
                let name = str_param(&params, "name");
                state
                    .persons
                    .iter()
                    .filter(|(n, _)| *n == name)
                    .map(|(n, age)| row(json!({ "name": n, "age": age })))
                    .collect()
            }
            cypher::DIAGNOSIS_ENDPOINTS => {
                let patient = str_param(&params, "patient");
                let disease = str_param(&params, "disease");
                let both = state.persons.iter().any(|(n, _)| *n == patient)
                    && state.diseases.iter().any(|(n, _)| *n == disease);
                if both {
                    vec![row(json!({ "patient": patient, "disease": disease }))]
                } else {
                    Vec::new()
                }
            }
            cypher::CREATE_DIAGNOSIS => {
                let patient = str_param(&params, "patient");
                let disease = str_param(&params, "disease");
                let both = state.persons.iter().any(|(n, _)| *n == patient)
                    && state.diseases.iter().any(|(n, _)| *n == disease);
                if both {
                    state.diagnoses.push(Diag {
                        patient,
                        disease,
                        doctor: str_param(&params, "doctor"),
                        date: str_param(&params, "date"),
                        notes: str_param(&params, "notes"),
                        severity: str_param(&params, "severity"),
                        status: "active".into(),
                        resolution_notes: None,
                    });
                }
                Vec::new()
            }
            cypher::UPDATE_DIAGNOSIS_STATUS => {
                let patient = str_param(&params, "patient");
                let disease = str_param(&params, "disease");
                let status = str_param(&params, "status");
                let notes = str_param(&params, "notes");
                let target = state
                    .diagnoses
                    .iter_mut()
                    .filter(|d| d.patient == patient && d.disease == disease)
                    .max_by(|a, b| a.date.cmp(&b.date));
                match target {
                    Some(diag) => {
                        diag.status = status.clone();
                        if !notes.is_empty() {
                            diag.resolution_notes = Some(notes);
                        }
                        vec![row(json!({ "status": status }))]
                    }
                    None => Vec::new(),
                }
            }
            cypher::CREATE_HISTORY => {
                let patient = str_param(&params, "patient");
                if !state.persons.iter().any(|(n, _)| *n == patient) {
                    return Ok(Vec::new());
                }
                let condition = str_param(&params, "condition");
                state.history.push(History {
                    patient,
                    condition: condition.clone(),
                    date_diagnosed: str_param(&params, "date_diagnosed"),
                    resolved: param(&params, "resolved").as_bool().unwrap_or_default(),
                    notes: str_param(&params, "notes"),
                });
                vec![row(json!({ "condition": condition }))]
            }
            cypher::CREATE_PRESCRIPTION => {
                let patient = str_param(&params, "patient");
                if !state.persons.iter().any(|(n, _)| *n == patient) {
                    return Ok(Vec::new());
                }
                let medication = str_param(&params, "medication");
                state.prescriptions.push(Rx {
                    patient,
                    medication: medication.clone(),
                    dosage: str_param(&params, "dosage"),
                    frequency: str_param(&params, "frequency"),
                    doctor: str_param(&params, "doctor"),
                    duration: str_param(&params, "duration"),
                    notes: str_param(&params, "notes"),
                    date: str_param(&params, "prescribed_date"),
                    status: "active".into(),
                });
                vec![row(json!({ "medication": medication }))]
            }
            cypher::CREATE_VITALS => {
                let patient = str_param(&params, "patient");
                if !state.persons.iter().any(|(n, _)| *n == patient) {
                    return Ok(Vec::new());
                }
                let recorded_at = str_param(&params, "recorded_at");
                state.vitals.push(Vitals {
                    patient,
                    blood_pressure: str_param(&params, "blood_pressure"),
                    heart_rate: param(&params, "heart_rate").as_i64().unwrap_or_default(),
                    temperature: param(&params, "temperature").as_f64().unwrap_or_default(),
                    weight: param(&params, "weight").as_f64().unwrap_or_default(),
                    height: param(&params, "height").as_f64().unwrap_or_default(),
                    bmi: param(&params, "bmi").as_f64(),
                    date: recorded_at.clone(),
                });
                vec![row(json!({ "recorded_at": recorded_at }))]
            }
            cypher::RECORD_DIAGNOSES => {
                let name = str_param(&params, "name");
                let mut diags: Vec<Diag> = state
                    .diagnoses
                    .iter()
                    .filter(|d| d.patient == name)
                    .cloned()
                    .collect();
                diags.sort_by(|a, b| b.date.cmp(&a.date));
                diags
                    .into_iter()
                    .map(|d| {
                        row(json!({
                            "disease": d.disease,
                            "doctor": d.doctor,
                            "date": d.date,
                            "notes": d.notes,
                            "severity": d.severity,
                            "status": d.status,
                        }))
                    })
                    .collect()
            }
            cypher::RECORD_PRESCRIPTIONS => {
                let name = str_param(&params, "name");
                let mut scripts: Vec<Rx> = state
                    .prescriptions
                    .iter()
                    .filter(|rx| rx.patient == name)
                    .cloned()
                    .collect();
                scripts.sort_by(|a, b| b.date.cmp(&a.date));
                scripts
                    .into_iter()
                    .map(|rx| {
                        row(json!({
                            "medication": rx.medication,
                            "dosage": rx.dosage,
                            "frequency": rx.frequency,
                            "doctor": rx.doctor,
                            "duration": rx.duration,
                            "date": rx.date,
                            "status": rx.status,
                            "notes": rx.notes,
                        }))
                    })
                    .collect()
            }
            cypher::RECORD_VITALS => {
                let name = str_param(&params, "name");
                let mut readings: Vec<Vitals> = state
                    .vitals
                    .iter()
                    .filter(|v| v.patient == name)
                    .cloned()
                    .collect();
                readings.sort_by(|a, b| b.date.cmp(&a.date));
                readings.truncate(5);
                readings
                    .into_iter()
                    .map(|v| {
                        row(json!({
                            "blood_pressure": v.blood_pressure,
                            "heart_rate": v.heart_rate,
                            "temperature": v.temperature,
                            "weight": v.weight,
                            "height": v.height,
                            "bmi": v.bmi,
                            "date": v.date,
                        }))
                    })
                    .collect()
            }
            cypher::RECORD_HISTORY => {
                let name = str_param(&params, "name");
                let mut entries: Vec<History> = state
                    .history
                    .iter()
                    .filter(|h| h.patient == name)
                    .cloned()
                    .collect();
                entries.sort_by(|a, b| b.date_diagnosed.cmp(&a.date_diagnosed));
                entries
                    .into_iter()
                    .map(|h| {
                        row(json!({
                            "condition": h.condition,
                            "date_diagnosed": h.date_diagnosed,
                            "resolved": h.resolved,
                            "notes": h.notes,
                        }))
                    })
                    .collect()
            }
            cypher::SEARCH_BY_DIAGNOSIS => {
                let disease = str_param(&params, "disease");
                let mut diags: Vec<Diag> = state
                    .diagnoses
                    .iter()
                    .filter(|d| d.disease == disease && d.status == "active")
                    .cloned()
                    .collect();
                diags.sort_by(|a, b| b.date.cmp(&a.date));
                diags
                    .into_iter()
                    .map(|d| {
                        let age = state
                            .persons
                            .iter()
                            .find(|(n, _)| *n == d.patient)
                            .map(|(_, a)| *a)
                            .unwrap_or_default();
                        row(json!({
                            "patient_name": d.patient,
                            "age": age,
                            "doctor": d.doctor,
                            "diagnosed_date": d.date,
                            "severity": d.severity,
                        }))
                    })
                    .collect()
            }
            cypher::DOCTOR_PATIENT_COUNT => {
                let doctor = str_param(&params, "doctor");
                let mut patients: Vec<&str> = state
                    .diagnoses
                    .iter()
                    .filter(|d| d.doctor == doctor)
                    .map(|d| d.patient.as_str())
                    .collect();
                patients.sort_unstable();
                patients.dedup();
                vec![row(json!({ "total_patients": patients.len() as i64 }))]
            }
            cypher::DOCTOR_SEVERITY => {
                let doctor = str_param(&params, "doctor");
                tally(
                    state
                        .diagnoses
                        .iter()
                        .filter(|d| d.doctor == doctor)
                        .map(|d| d.severity.clone()),
                )
                .into_iter()
                .map(|(severity, count)| row(json!({ "severity": severity, "count": count })))
                .collect()
            }
            cypher::DOCTOR_DISEASES => {
                let doctor = str_param(&params, "doctor");
                let mut counts = tally(
                    state
                        .diagnoses
                        .iter()
                        .filter(|d| d.doctor == doctor)
                        .map(|d| d.disease.clone()),
                );
                counts.sort_by(|a, b| b.1.cmp(&a.1));
                counts.truncate(5);
                counts
                    .into_iter()
                    .map(|(disease, count)| row(json!({ "disease": disease, "count": count })))
                    .collect()
            }
            cypher::DOCTOR_PRESCRIPTIONS => {
                let doctor = str_param(&params, "doctor");
                let count = state
                    .prescriptions
                    .iter()
                    .filter(|rx| rx.doctor == doctor)
                    .count() as i64;
                vec![row(json!({ "total_prescriptions": count }))]
            }
            cypher::DISEASE_DISTRIBUTION => {
                let mut counts = tally(
                    state
                        .diagnoses
                        .iter()
                        .filter(|d| d.status == "active")
                        .map(|d| d.disease.clone()),
                );
                counts.sort_by(|a, b| b.1.cmp(&a.1));
                counts.truncate(10);
                counts
                    .into_iter()
                    .map(|(disease, count)| {
                        row(json!({ "disease": disease, "patient_count": count }))
                    })
                    .collect()
            }
            cypher::SEVERITY_DISTRIBUTION => tally(
                state
                    .diagnoses
                    .iter()
                    .filter(|d| d.status == "active")
                    .map(|d| d.severity.clone()),
            )
            .into_iter()
            .map(|(severity, count)| row(json!({ "severity": severity, "count": count })))
            .collect(),
            cypher::TIMELINE_DIAGNOSES => {
                let name = str_param(&params, "name");
                let mut diags: Vec<Diag> = state
                    .diagnoses
                    .iter()
                    .filter(|d| d.patient == name)
                    .cloned()
                    .collect();
                diags.sort_by(|a, b| b.date.cmp(&a.date));
                diags
                    .into_iter()
                    .map(|d| {
                        row(json!({
                            "item": d.disease,
                            "date": d.date,
                            "severity": d.severity,
                            "status": d.status,
                        }))
                    })
                    .collect()
            }
            cypher::TIMELINE_PRESCRIPTIONS => {
                let name = str_param(&params, "name");
                let mut scripts: Vec<Rx> = state
                    .prescriptions
                    .iter()
                    .filter(|rx| rx.patient == name)
                    .cloned()
                    .collect();
                scripts.sort_by(|a, b| b.date.cmp(&a.date));
                scripts
                    .into_iter()
                    .map(|rx| {
                        row(json!({
                            "item": rx.medication,
                            "date": rx.date,
                            "status": rx.status,
                        }))
                    })
                    .collect()
            }
            cypher::TIMELINE_VITALS => {
                let name = str_param(&params, "name");
                let mut readings: Vec<Vitals> = state
                    .vitals
                    .iter()
                    .filter(|v| v.patient == name)
                    .cloned()
                    .collect();
                readings.sort_by(|a, b| b.date.cmp(&a.date));
                readings.truncate(10);
                readings
                    .into_iter()
                    .map(|v| {
                        row(json!({
                            "item": "Vitals Recorded",
                            "date": v.date,
                            "status": "active",
                        }))
                    })
                    .collect()
            }
            cypher::HOSPITAL_OVERVIEW => state
                .diagnoses
                .iter()
                .map(|d| {
                    let age = state
                        .persons
                        .iter()
                        .find(|(n, _)| *n == d.patient)
                        .map(|(_, a)| *a)
                        .unwrap_or_default();
                    row(json!({
                        "patient": d.patient,
                        "age": age,
                        "disease": d.disease,
                        "severity": d.severity,
                        "status": d.status,
                    }))
                })
                .collect(),
            cypher::DISEASE_NETWORK => {
                let disease = str_param(&params, "disease");
                let mut rows = Vec::new();
                for diag in state.diagnoses.iter().filter(|d| d.disease == disease) {
                    let age = state
                        .persons
                        .iter()
                        .find(|(n, _)| *n == diag.patient)
                        .map(|(_, a)| *a)
                        .unwrap_or_default();
                    let others: Vec<&Diag> = state
                        .diagnoses
                        .iter()
                        .filter(|d| {
                            d.patient == diag.patient
                                && d.disease != disease
                                && d.status == "active"
                        })
                        .collect();
                    if others.is_empty() {
                        rows.push(row(json!({
                            "patient": diag.patient,
                            "age": age,
                            "other_disease": Value::Null,
                            "severity": Value::Null,
                        })));
                    } else {
                        for other in others {
                            rows.push(row(json!({
                                "patient": diag.patient,
                                "age": age,
                                "other_disease": other.disease,
                                "severity": other.severity,
                            })));
                        }
                    }
                }
                rows
            }
            cypher::CONTEXT_DISEASES => {
                let query = str_param(&params, "query").to_lowercase();
                state
                    .diseases
                    .iter()
                    .filter(|(n, desc)| {
                        n.to_lowercase().contains(&query)
                            || desc.to_lowercase().contains(&query)
                    })
                    .take(5)
                    .map(|(n, desc)| row(json!({ "name": n, "description": desc })))
                    .collect()
            }
            cypher::CONTEXT_PATIENTS => {
                let query = str_param(&params, "query").to_lowercase();
                state
                    .persons
                    .iter()
                    .filter(|(n, _)| n.to_lowercase().contains(&query))
                    .filter_map(|(n, age)| {
                        let conditions: Vec<Value> = state
                            .diagnoses
                            .iter()
                            .filter(|d| d.patient == *n)
                            .map(|d| json!({ "disease": d.disease, "severity": d.severity }))
                            .collect();
                        if conditions.is_empty() {
                            None
                        } else {
                            Some(row(json!({
                                "patient": n,
                                "age": age,
                                "conditions": conditions,
                            })))
                        }
                    })
                    .take(3)
                    .collect()
            }
            cypher::CONTEXT_TREATMENTS => {
                let query = str_param(&params, "query").to_lowercase();
                state
                    .diseases
                    .iter()
                    .filter(|(n, _)| n.to_lowercase().contains(&query))
                    .filter_map(|(disease, _)| {
                        let mut medications: Vec<String> = Vec::new();
                        for diag in state.diagnoses.iter().filter(|d| d.disease == *disease) {
                            for rx in state
                                .prescriptions
                                .iter()
                                .filter(|rx| rx.patient == diag.patient)
                            {
                                if !medications.contains(&rx.medication) {
                                    medications.push(rx.medication.clone());
                                }
                            }
                        }
                        if medications.is_empty() {
                            None
                        } else {
                            Some(row(json!({
                                "disease": disease,
                                "medications": medications,
                            })))
                        }
                    })
                    .take(5)
                    .collect()
            }
            other => {
                return Err(StoreError::Decode(format!(
                    "mock gateway has no handler for query: {other}"
                )))
            }
        };
        Ok(rows)
    }
}
