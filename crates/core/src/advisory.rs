//! Context assembly for the external text-completion collaborator.
//!
//! The engine's only job here is retrieval and prompt construction: it
//! gathers graph context relevant to a free-text question, truncates it to
//! a character budget, and hands the prompt to an injected completion
//! backend. No HTTP client lives in this crate.

use crate::cypher;
use crate::error::{OpError, OpResult};
use async_trait::async_trait;
use medgraph_store::Gateway;
use serde_json::json;
use std::sync::Arc;

/// Advisory character budget for assembled context, keeping prompts within
/// the completion backend's token limits.
pub const CONTEXT_CHAR_LIMIT: usize = 3000;

const ANSWER_SYSTEM_PROMPT: &str = "You are a medical AI assistant. Answer questions based on \
     the provided context from a medical database.";

/// A chat-style text completion backend.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
#[error("completion backend failure: {0}")]
pub struct CompletionError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error(transparent)]
    Op(#[from] OpError),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl From<medgraph_store::StoreError> for AdvisoryError {
    fn from(err: medgraph_store::StoreError) -> Self {
        Self::Op(OpError::Store(err))
    }
}

/// Retrieval-augmented medical assistant over the knowledge graph.
pub struct MedicalAssistant<G, C> {
    gateway: Arc<G>,
    completion: C,
}

/// Truncate to at most `limit` characters without splitting a character.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_owned(),
        None => text.to_owned(),
    }
}

impl<G: Gateway, C: TextCompletion> MedicalAssistant<G, C> {
    pub fn new(gateway: Arc<G>, completion: C) -> Self {
        Self { gateway, completion }
    }

    /// Gather graph context relevant to a free-text query: diseases whose
    /// name or description mentions it, patients whose name mentions it
    /// with their conditions, and medication patterns for matching
    /// diseases. Sections are joined and capped at [`CONTEXT_CHAR_LIMIT`].
    pub async fn medical_context(&self, query: &str) -> OpResult<String> {
        let query_param = || vec![("query", json!(query))];
        let mut parts: Vec<String> = Vec::new();

        for row in self
            .gateway
            .run(cypher::CONTEXT_DISEASES, query_param())
            .await?
        {
            parts.push(format!(
                "Disease: {}\nDescription: {}\n",
                row.string("name").map_err(OpError::from)?,
                row.opt_string("description").unwrap_or_default(),
            ));
        }

        for row in self
            .gateway
            .run(cypher::CONTEXT_PATIENTS, query_param())
            .await?
        {
            let conditions = row
                .rows("conditions")
                .map_err(OpError::from)?
                .iter()
                .map(|c| {
                    format!(
                        "{} ({})",
                        c.opt_string("disease").unwrap_or_default(),
                        c.opt_string("severity").unwrap_or_default(),
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!(
                "Patient: {}, Age: {}\nConditions: {}\n",
                row.string("patient").map_err(OpError::from)?,
                row.int("age").map_err(OpError::from)?,
                conditions,
            ));
        }

        for row in self
            .gateway
            .run(cypher::CONTEXT_TREATMENTS, query_param())
            .await?
        {
            parts.push(format!(
                "Disease: {}\nCommon Medications: {}\n",
                row.string("disease").map_err(OpError::from)?,
                row.strings("medications").map_err(OpError::from)?.join(", "),
            ));
        }

        Ok(truncate_chars(&parts.join("\n"), CONTEXT_CHAR_LIMIT))
    }

    /// Answer a free-text question against graph-derived context.
    pub async fn answer_medical_question(&self, question: &str) -> Result<String, AdvisoryError> {
        let context = self.medical_context(question).await.map_err(AdvisoryError::Op)?;
        let prompt = format!(
            "Context from medical database:\n{context}\n\nQuestion: {question}\n\n\
             Please provide a comprehensive answer based on the context provided.\n\
             If the context doesn't contain relevant information, provide general \
             medical guidance."
        );
        let answer = self
            .completion
            .complete(ANSWER_SYSTEM_PROMPT, &prompt, 0.7, 400)
            .await?;
        Ok(answer)
    }
}
