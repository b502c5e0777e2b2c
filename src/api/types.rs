//! Wire types for the `/analyze` endpoint.
//!
//! The backend contract guarantees very little: every response field except
//! `summary` may be absent, and even `summary` is defaulted here so a sparse
//! body never fails the decode. Absent and present-but-empty collections are
//! treated identically downstream.

use serde::{Deserialize, Serialize};

/// Body of a single `/analyze` request. Built fresh per submission and
/// dropped once the call returns.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub log_text: String,
    pub top_k: u32,
}

/// Parsed analysis result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub mitre_matches: Vec<MitreMatch>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

/// One MITRE ATT&CK technique match, in backend order. The order carries no
/// ranking guarantee beyond what the backend chose to emit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MitreMatch {
    #[serde(default)]
    pub technique_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tactic: String,
    #[serde(default)]
    pub evidence: String,
}

/// A retrieved log record judged relevant to the submitted snippet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvidenceItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub metadata: EvidenceMetadata,
}

impl EvidenceItem {
    /// Display identity: the backend id when present, otherwise the item's
    /// 1-based position in the list.
    pub fn display_id(&self, index: usize) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => (index + 1).to_string(),
        }
    }
}

/// Source metadata attached to an evidence item. Every field is optional;
/// absence renders as empty, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvidenceMetadata {
    pub event_type: Option<String>,
    pub source: Option<String>,
    pub ingest_time: Option<String>,
    pub timestamp: Option<String>,
    pub hash: Option<String>,
}

impl EvidenceMetadata {
    /// The timestamp to display: `ingest_time` wins over `timestamp`, and
    /// neither yields an empty string. Never both.
    pub fn display_timestamp(&self) -> &str {
        self.ingest_time
            .as_deref()
            .or(self.timestamp.as_deref())
            .unwrap_or("")
    }
}
