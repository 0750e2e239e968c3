//! Population and per-doctor statistics.

use crate::cypher;
use crate::error::{OpError, OpResult};
use crate::record::MedicalRecordService;
use crate::style::{CHART_COLORS, SEVERITY_CHART_COLORS};
use medgraph_store::Gateway;
use medgraph_types::{DiseaseCount, Distribution, DoctorStats, Severity};
use serde_json::json;

impl<G: Gateway> MedicalRecordService<G> {
    /// Aggregate statistics for one doctor, assembled from four
    /// independent queries. A doctor the store has never seen gets zeros
    /// and empty collections, not an error.
    pub async fn doctor_performance(&self, doctor: &str) -> OpResult<DoctorStats> {
        let mut stats = DoctorStats::default();
        let doctor_param = || vec![("doctor", json!(doctor))];

        if let Some(row) = self
            .gateway
            .run(cypher::DOCTOR_PATIENT_COUNT, doctor_param())
            .await?
            .first()
        {
            stats.total_patients = row.int("total_patients").map_err(OpError::from)?;
        }

        for row in self
            .gateway
            .run(cypher::DOCTOR_SEVERITY, doctor_param())
            .await?
        {
            if let Some(severity) = row.opt_string("severity") {
                let count = row.int("count").map_err(OpError::from)?;
                stats.severity_distribution.insert(severity, count);
            }
        }

        stats.common_diseases = self
            .gateway
            .run(cypher::DOCTOR_DISEASES, doctor_param())
            .await?
            .iter()
            .map(|row| {
                Ok(DiseaseCount {
                    disease: row.string("disease")?,
                    count: row.int("count")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;

        if let Some(row) = self
            .gateway
            .run(cypher::DOCTOR_PRESCRIPTIONS, doctor_param())
            .await?
            .first()
        {
            stats.total_prescriptions = row.int("total_prescriptions").map_err(OpError::from)?;
        }

        Ok(stats)
    }

    /// Active-diagnosis counts for the ten most common diseases, most
    /// common first, each slice coloured by cycling the chart palette.
    pub async fn disease_distribution(&self) -> OpResult<Distribution> {
        let rows = self
            .gateway
            .run(cypher::DISEASE_DISTRIBUTION, Vec::new())
            .await?;
        let mut dist = Distribution::default();
        for (i, row) in rows.iter().enumerate() {
            dist.labels.push(row.string("disease").map_err(OpError::from)?);
            dist.values
                .push(row.int("patient_count").map_err(OpError::from)?);
            dist.colors
                .push(CHART_COLORS[i % CHART_COLORS.len()].to_owned());
        }
        Ok(dist)
    }

    /// Active diagnoses bucketed by severity. All four buckets are always
    /// present, in mild-to-critical order, zero-filled where empty;
    /// unrecognised severity values are dropped.
    pub async fn severity_distribution(&self) -> OpResult<Distribution> {
        let rows = self
            .gateway
            .run(cypher::SEVERITY_DISTRIBUTION, Vec::new())
            .await?;
        let mut counts = [0i64; Severity::ALL.len()];
        for row in &rows {
            let Some(severity) = row.opt_string("severity").as_deref().and_then(Severity::parse)
            else {
                continue;
            };
            let idx = Severity::ALL
                .iter()
                .position(|s| *s == severity)
                .unwrap_or_default();
            counts[idx] = row.int("count").map_err(OpError::from)?;
        }
        Ok(Distribution {
            labels: Severity::ALL.iter().map(|s| s.as_str().to_owned()).collect(),
            values: counts.to_vec(),
            colors: SEVERITY_CHART_COLORS.iter().map(|c| (*c).to_owned()).collect(),
        })
    }
}
