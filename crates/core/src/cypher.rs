//! Cypher templates for every engine operation.
//!
//! Queries are fixed templates with named parameters; nothing is ever
//! interpolated into the query text. Every `RETURN` clause projects scalar
//! fields (or `collect(...)` lists of them) under stable aliases, so rows
//! decode into flat field mappings at the gateway boundary.

// --- Entity repository ---

pub(crate) const PERSON_EXISTS: &str = "MATCH (p:Person {name: $name}) RETURN p.name AS name";

pub(crate) const CREATE_PERSON: &str = "CREATE (p:Person {name: $name, age: $age})";

pub(crate) const DISEASE_EXISTS: &str = "MATCH (d:Disease {name: $name}) RETURN d.name AS name";

pub(crate) const CREATE_DISEASE: &str =
    "CREATE (d:Disease {name: $name, description: $description})";

pub(crate) const RELATIONSHIP_COUNT: &str = "\
MATCH (p:Person {name: $person})-[r:HAS_DISEASE]->(d:Disease {name: $disease})
RETURN count(r) AS count";

pub(crate) const CREATE_RELATIONSHIP: &str = "\
MATCH (p:Person {name: $person}), (d:Disease {name: $disease})
CREATE (p)-[:HAS_DISEASE]->(d)";

pub(crate) const DELETE_RELATIONSHIP: &str = "\
MATCH (p:Person {name: $person})-[r:HAS_DISEASE]->(d:Disease {name: $disease})
DELETE r";

pub(crate) const PERSON_DISEASES: &str = "\
MATCH (p:Person {name: $name})-[:HAS_DISEASE]->(d:Disease)
RETURN d.name AS name, d.description AS description";

pub(crate) const LIST_PERSONS: &str =
    "MATCH (p:Person) RETURN p.name AS name, p.age AS age ORDER BY p.name";

pub(crate) const LIST_DISEASES: &str =
    "MATCH (d:Disease) RETURN d.name AS name, d.description AS description ORDER BY d.name";

pub(crate) const SEARCH_PERSONS: &str = "\
MATCH (p:Person)
WHERE toLower(p.name) CONTAINS toLower($term)
RETURN p.name AS name, p.age AS age
ORDER BY p.name
LIMIT 20";

pub(crate) const PERSON_BY_NAME: &str =
    "MATCH (p:Person {name: $name}) RETURN p.name AS name, p.age AS age";

pub(crate) const PERSON_DISEASES_BY_NAME: &str = "\
MATCH (p:Person {name: $name})-[:HAS_DISEASE]->(d:Disease)
RETURN d.name AS name, d.description AS description
ORDER BY d.name";

// --- Medical record aggregator ---

pub(crate) const DIAGNOSIS_ENDPOINTS: &str = "\
MATCH (p:Person {name: $patient}), (d:Disease {name: $disease})
RETURN p.name AS patient, d.name AS disease";

pub(crate) const CREATE_DIAGNOSIS: &str = "\
MATCH (p:Person {name: $patient}), (d:Disease {name: $disease})
CREATE (p)-[r:DIAGNOSED_WITH {
    doctor: $doctor,
    date: $date,
    notes: $notes,
    severity: $severity,
    status: 'active'
}]->(d)";

/// Mutates the most recent relation for the pair; repeat diagnoses are
/// allowed, so the `ORDER BY r.date DESC LIMIT 1` makes the update target
/// deterministic. `resolution_notes` is only written when notes were given.
pub(crate) const UPDATE_DIAGNOSIS_STATUS: &str = "\
MATCH (p:Person {name: $patient})-[r:DIAGNOSED_WITH]->(d:Disease {name: $disease})
WITH r ORDER BY r.date DESC LIMIT 1
SET r.status = $status, r.updated_at = $updated_at
FOREACH (_ IN CASE WHEN $notes <> '' THEN [1] ELSE [] END |
    SET r.resolution_notes = $notes)
RETURN r.status AS status";

pub(crate) const CREATE_HISTORY: &str = "\
MATCH (p:Person {name: $patient})
CREATE (h:MedicalHistory {
    condition: $condition,
    date_diagnosed: $date_diagnosed,
    resolved: $resolved,
    notes: $notes,
    created_at: $created_at
})
CREATE (p)-[:HAS_HISTORY]->(h)
RETURN h.condition AS condition";

pub(crate) const CREATE_PRESCRIPTION: &str = "\
MATCH (p:Person {name: $patient})
CREATE (rx:Prescription {
    medication: $medication,
    dosage: $dosage,
    frequency: $frequency,
    doctor: $doctor,
    duration: $duration,
    notes: $notes,
    prescribed_date: $prescribed_date,
    status: 'active'
})
CREATE (p)-[:HAS_PRESCRIPTION]->(rx)
RETURN rx.medication AS medication";

pub(crate) const CREATE_VITALS: &str = "\
MATCH (p:Person {name: $patient})
CREATE (v:VitalSigns {
    blood_pressure: $blood_pressure,
    heart_rate: $heart_rate,
    temperature: $temperature,
    weight: $weight,
    height: $height,
    bmi: $bmi,
    notes: $notes,
    recorded_at: $recorded_at
})
CREATE (p)-[:HAS_VITALS]->(v)
RETURN v.recorded_at AS recorded_at";

pub(crate) const RECORD_DIAGNOSES: &str = "\
MATCH (p:Person {name: $name})-[r:DIAGNOSED_WITH]->(d:Disease)
RETURN d.name AS disease, r.doctor AS doctor, r.date AS date,
       r.notes AS notes, r.severity AS severity, r.status AS status
ORDER BY r.date DESC";

pub(crate) const RECORD_PRESCRIPTIONS: &str = "\
MATCH (p:Person {name: $name})-[:HAS_PRESCRIPTION]->(rx:Prescription)
RETURN rx.medication AS medication, rx.dosage AS dosage,
       rx.frequency AS frequency, rx.doctor AS doctor,
       rx.duration AS duration, rx.prescribed_date AS date,
       rx.status AS status, rx.notes AS notes
ORDER BY rx.prescribed_date DESC";

pub(crate) const RECORD_VITALS: &str = "\
MATCH (p:Person {name: $name})-[:HAS_VITALS]->(v:VitalSigns)
RETURN v.blood_pressure AS blood_pressure, v.heart_rate AS heart_rate,
       v.temperature AS temperature, v.weight AS weight,
       v.height AS height, v.bmi AS bmi, v.recorded_at AS date
ORDER BY v.recorded_at DESC
LIMIT 5";

pub(crate) const RECORD_HISTORY: &str = "\
MATCH (p:Person {name: $name})-[:HAS_HISTORY]->(h:MedicalHistory)
RETURN h.condition AS condition, h.date_diagnosed AS date_diagnosed,
       h.resolved AS resolved, h.notes AS notes
ORDER BY h.date_diagnosed DESC";

pub(crate) const SEARCH_BY_DIAGNOSIS: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease {name: $disease})
WHERE r.status = 'active'
RETURN p.name AS patient_name, p.age AS age,
       r.doctor AS doctor, r.date AS diagnosed_date,
       r.severity AS severity
ORDER BY r.date DESC";

// --- Statistics ---

pub(crate) const DOCTOR_PATIENT_COUNT: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE r.doctor = $doctor
RETURN count(DISTINCT p) AS total_patients";

pub(crate) const DOCTOR_SEVERITY: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE r.doctor = $doctor
RETURN r.severity AS severity, count(*) AS count";

pub(crate) const DOCTOR_DISEASES: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE r.doctor = $doctor
RETURN d.name AS disease, count(*) AS count
ORDER BY count DESC
LIMIT 5";

pub(crate) const DOCTOR_PRESCRIPTIONS: &str = "\
MATCH (p:Person)-[:HAS_PRESCRIPTION]->(rx:Prescription)
WHERE rx.doctor = $doctor
RETURN count(*) AS total_prescriptions";

pub(crate) const DISEASE_DISTRIBUTION: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE r.status = 'active'
RETURN d.name AS disease, count(p) AS patient_count
ORDER BY patient_count DESC
LIMIT 10";

pub(crate) const SEVERITY_DISTRIBUTION: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE r.status = 'active'
RETURN r.severity AS severity, count(*) AS count";

// --- Timeline ---

pub(crate) const TIMELINE_DIAGNOSES: &str = "\
MATCH (p:Person {name: $name})-[r:DIAGNOSED_WITH]->(d:Disease)
RETURN d.name AS item, r.date AS date, r.severity AS severity,
       r.status AS status
ORDER BY r.date DESC";

pub(crate) const TIMELINE_PRESCRIPTIONS: &str = "\
MATCH (p:Person {name: $name})-[:HAS_PRESCRIPTION]->(rx:Prescription)
RETURN rx.medication AS item, rx.prescribed_date AS date,
       rx.status AS status
ORDER BY rx.prescribed_date DESC";

pub(crate) const TIMELINE_VITALS: &str = "\
MATCH (p:Person {name: $name})-[:HAS_VITALS]->(v:VitalSigns)
RETURN 'Vitals Recorded' AS item, v.recorded_at AS date,
       'active' AS status
ORDER BY v.recorded_at DESC
LIMIT 10";

// --- Graph projection ---

pub(crate) const HOSPITAL_OVERVIEW: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
RETURN p.name AS patient, p.age AS age, d.name AS disease,
       r.severity AS severity, r.status AS status";

pub(crate) const DISEASE_NETWORK: &str = "\
MATCH (p:Person)-[r1:DIAGNOSED_WITH]->(d1:Disease {name: $disease})
OPTIONAL MATCH (p)-[r2:DIAGNOSED_WITH]->(d2:Disease)
WHERE d2.name <> $disease AND r2.status = 'active'
RETURN p.name AS patient, p.age AS age,
       d2.name AS other_disease, r2.severity AS severity";

// --- Advisory context ---

pub(crate) const CONTEXT_DISEASES: &str = "\
MATCH (d:Disease)
WHERE toLower(d.name) CONTAINS toLower($query)
   OR toLower(d.description) CONTAINS toLower($query)
RETURN d.name AS name, d.description AS description
LIMIT 5";

pub(crate) const CONTEXT_PATIENTS: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE toLower(p.name) CONTAINS toLower($query)
RETURN p.name AS patient, p.age AS age,
       collect({disease: d.name, severity: r.severity}) AS conditions
LIMIT 3";

pub(crate) const CONTEXT_TREATMENTS: &str = "\
MATCH (p:Person)-[r:DIAGNOSED_WITH]->(d:Disease)
WHERE toLower(d.name) CONTAINS toLower($query)
MATCH (p)-[:HAS_PRESCRIPTION]->(rx:Prescription)
RETURN d.name AS disease,
       collect(DISTINCT rx.medication) AS medications
LIMIT 5";
