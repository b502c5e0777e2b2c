//! Error taxonomy for analysis calls.

use thiserror::Error;

/// Classified failure of a single `/analyze` exchange.
///
/// All three variants are converted to their `Display` text at the session
/// boundary and shown to the operator; none is retried automatically.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Connection-level failure: refused, timed out, DNS, TLS.
    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Server reachable but returned a non-success status. The body clause
    /// is omitted when the body itself could not be read.
    #[error("API returned {} {}{}", .status, .status_text, body_suffix(.body))]
    Http {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// Success status but the body was not valid JSON.
    #[error("failed to decode analysis response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(": {body}"),
        None => String::new(),
    }
}
