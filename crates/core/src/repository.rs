//! CRUD and existence checks for Person and Disease entities.

use crate::cypher;
use crate::error::{OpError, OpResult};
use medgraph_store::Gateway;
use medgraph_types::{Disease, DiseaseRef, PatientDetails, Person};
use serde_json::json;
use std::sync::Arc;

/// Repository over Person and Disease nodes and the `HAS_DISEASE` relation.
///
/// Mutations follow a check-then-act sequence: the existence probe and the
/// write are separate store round-trips, so two concurrent identical creates
/// can both pass the probe. The store carries no uniqueness constraint, and
/// the duplicate check is advisory rather than transactional.
pub struct EntityRepository<G> {
    gateway: Arc<G>,
}

impl<G> Clone for EntityRepository<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: Gateway> EntityRepository<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Create a person node keyed by name.
    pub async fn create_person(&self, name: &str, age: i64) -> OpResult<String> {
        let existing = self
            .gateway
            .run(cypher::PERSON_EXISTS, vec![("name", json!(name))])
            .await?;
        if !existing.is_empty() {
            return Err(OpError::AlreadyExists(format!(
                "Person '{name}' already exists"
            )));
        }
        self.gateway
            .run(
                cypher::CREATE_PERSON,
                vec![("name", json!(name)), ("age", json!(age))],
            )
            .await?;
        tracing::info!(person = name, "created person");
        Ok(format!("Successfully created person '{name}'"))
    }

    /// Create a disease node keyed by name.
    pub async fn create_disease(&self, name: &str, description: &str) -> OpResult<String> {
        let existing = self
            .gateway
            .run(cypher::DISEASE_EXISTS, vec![("name", json!(name))])
            .await?;
        if !existing.is_empty() {
            return Err(OpError::AlreadyExists(format!(
                "Disease '{name}' already exists"
            )));
        }
        self.gateway
            .run(
                cypher::CREATE_DISEASE,
                vec![
                    ("name", json!(name)),
                    ("description", json!(description)),
                ],
            )
            .await?;
        tracing::info!(disease = name, "created disease");
        Ok(format!("Successfully created disease '{name}'"))
    }

    /// Link a person to a disease with a plain `HAS_DISEASE` edge.
    ///
    /// Both endpoints are verified first so the caller gets a precise
    /// message naming the missing one; at most one edge per pair.
    pub async fn create_relationship(&self, person: &str, disease: &str) -> OpResult<String> {
        let persons = self
            .gateway
            .run(cypher::PERSON_EXISTS, vec![("name", json!(person))])
            .await?;
        if persons.is_empty() {
            return Err(OpError::NotFound(format!(
                "Person '{person}' does not exist"
            )));
        }
        let diseases = self
            .gateway
            .run(cypher::DISEASE_EXISTS, vec![("name", json!(disease))])
            .await?;
        if diseases.is_empty() {
            return Err(OpError::NotFound(format!(
                "Disease '{disease}' does not exist"
            )));
        }
        if self.relationship_count(person, disease).await? > 0 {
            return Err(OpError::AlreadyExists(format!(
                "Relationship already exists between '{person}' and '{disease}'"
            )));
        }
        self.gateway
            .run(
                cypher::CREATE_RELATIONSHIP,
                vec![("person", json!(person)), ("disease", json!(disease))],
            )
            .await?;
        tracing::info!(person, disease, "created relationship");
        Ok(format!(
            "Successfully created relationship between '{person}' and '{disease}'"
        ))
    }

    /// Remove the `HAS_DISEASE` edge between a person and a disease.
    pub async fn delete_relationship(&self, person: &str, disease: &str) -> OpResult<String> {
        if self.relationship_count(person, disease).await? == 0 {
            return Err(OpError::NotFound(format!(
                "No relationship exists between '{person}' and '{disease}'"
            )));
        }
        self.gateway
            .run(
                cypher::DELETE_RELATIONSHIP,
                vec![("person", json!(person)), ("disease", json!(disease))],
            )
            .await?;
        tracing::info!(person, disease, "removed relationship");
        Ok(format!(
            "Successfully removed relationship between '{person}' and '{disease}'"
        ))
    }

    async fn relationship_count(&self, person: &str, disease: &str) -> OpResult<i64> {
        let rows = self
            .gateway
            .run(
                cypher::RELATIONSHIP_COUNT,
                vec![("person", json!(person)), ("disease", json!(disease))],
            )
            .await?;
        match rows.first() {
            Some(row) => Ok(row.int("count").map_err(OpError::from)?),
            None => Ok(0),
        }
    }

    /// Every disease a person is related to, in store emission order.
    /// An unknown person yields an empty list, not an error.
    pub async fn fetch_person_diseases(&self, name: &str) -> OpResult<Vec<DiseaseRef>> {
        let rows = self
            .gateway
            .run(cypher::PERSON_DISEASES, vec![("name", json!(name))])
            .await?;
        rows.iter()
            .map(|row| {
                Ok(DiseaseRef {
                    name: row.string("name")?,
                    description: row.string("description")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)
    }

    /// Every person, ordered by name.
    pub async fn list_persons(&self) -> OpResult<Vec<Person>> {
        let rows = self.gateway.run(cypher::LIST_PERSONS, Vec::new()).await?;
        rows.iter()
            .map(|row| {
                Ok(Person {
                    name: row.string("name")?,
                    age: row.int("age")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)
    }

    /// Every disease, ordered by name.
    pub async fn list_diseases(&self) -> OpResult<Vec<Disease>> {
        let rows = self.gateway.run(cypher::LIST_DISEASES, Vec::new()).await?;
        rows.iter()
            .map(|row| {
                Ok(Disease {
                    name: row.string("name")?,
                    description: row.string("description")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)
    }

    /// Case-insensitive substring search over person names, capped at 20
    /// matches. An empty term matches everyone, subject to the cap.
    pub async fn search_persons(&self, term: &str) -> OpResult<Vec<Person>> {
        let rows = self
            .gateway
            .run(cypher::SEARCH_PERSONS, vec![("term", json!(term))])
            .await?;
        rows.iter()
            .map(|row| {
                Ok(Person {
                    name: row.string("name")?,
                    age: row.int("age")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)
    }

    /// A person with their related diseases, diseases ordered by name.
    pub async fn get_person_details(&self, name: &str) -> OpResult<PatientDetails> {
        let rows = self
            .gateway
            .run(cypher::PERSON_BY_NAME, vec![("name", json!(name))])
            .await?;
        let person = rows
            .first()
            .ok_or_else(|| OpError::NotFound(format!("Person '{name}' not found")))?;
        let details = PatientDetails {
            name: person.string("name").map_err(OpError::from)?,
            age: person.int("age").map_err(OpError::from)?,
            diseases: Vec::new(),
        };

        let disease_rows = self
            .gateway
            .run(cypher::PERSON_DISEASES_BY_NAME, vec![("name", json!(name))])
            .await?;
        let diseases = disease_rows
            .iter()
            .map(|row| {
                Ok(DiseaseRef {
                    name: row.string("name")?,
                    description: row.string("description")?,
                })
            })
            .collect::<Result<_, medgraph_store::StoreError>>()
            .map_err(OpError::from)?;
        Ok(PatientDetails { diseases, ..details })
    }
}
