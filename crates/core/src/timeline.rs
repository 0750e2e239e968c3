//! Merged per-patient medical timeline.

use crate::cypher;
use crate::error::{OpError, OpResult};
use crate::record::MedicalRecordService;
use medgraph_store::Gateway;
use medgraph_types::{Severity, TimelineEvent, TimelineKind};
use serde_json::json;

impl<G: Gateway> MedicalRecordService<G> {
    /// A patient's diagnoses, prescriptions and vitals readings merged
    /// into one newest-first stream. Vitals contribute at most their ten
    /// most recent readings, each as a fixed "Vitals Recorded" marker.
    ///
    /// The merge sort is stable on the RFC 3339 date, so events sharing a
    /// timestamp keep their source order: diagnoses, then prescriptions,
    /// then vitals.
    pub async fn patient_timeline(&self, patient: &str) -> OpResult<Vec<TimelineEvent>> {
        let name_param = || vec![("name", json!(patient))];
        let mut events: Vec<TimelineEvent> = Vec::new();

        for row in self
            .gateway
            .run(cypher::TIMELINE_DIAGNOSES, name_param())
            .await?
        {
            events.push(TimelineEvent {
                item: row.string("item").map_err(OpError::from)?,
                date: row.string("date").map_err(OpError::from)?,
                status: row.opt_string("status").unwrap_or_default(),
                kind: TimelineKind::Diagnosis,
                severity: row.opt_string("severity").as_deref().and_then(Severity::parse),
            });
        }

        for row in self
            .gateway
            .run(cypher::TIMELINE_PRESCRIPTIONS, name_param())
            .await?
        {
            events.push(TimelineEvent {
                item: row.string("item").map_err(OpError::from)?,
                date: row.string("date").map_err(OpError::from)?,
                status: row.opt_string("status").unwrap_or_default(),
                kind: TimelineKind::Prescription,
                severity: None,
            });
        }

        for row in self
            .gateway
            .run(cypher::TIMELINE_VITALS, name_param())
            .await?
        {
            events.push(TimelineEvent {
                item: row.string("item").map_err(OpError::from)?,
                date: row.string("date").map_err(OpError::from)?,
                status: row.opt_string("status").unwrap_or_default(),
                kind: TimelineKind::Vitals,
                severity: None,
            });
        }

        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }
}
