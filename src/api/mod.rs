//! Analysis API surface: HTTP client, wire types, and error taxonomy.

mod client;
mod error;
mod types;

pub use client::{AnalysisClient, DEFAULT_TOP_K};
pub use error::AnalysisError;
pub use types::{
    AnalysisRequest, AnalysisResponse, EvidenceItem, EvidenceMetadata, MitreMatch,
};
