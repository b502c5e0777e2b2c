//! Intents driving the session state machine.

use crate::api::AnalysisResponse;

/// User actions and system events processed by the session reducer.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// The input buffer changed (typing, deletion, paste).
    InputChanged(String),

    /// Operator asked for an analysis. Ignored while a request is in
    /// flight or when the trimmed input is empty.
    Submit,

    /// Spinner tick while a request is in flight.
    AnimationTick,

    /// The in-flight request resolved. `generation` identifies which
    /// submission this completion belongs to; errors arrive pre-rendered
    /// as operator-facing text.
    Completed {
        generation: u64,
        outcome: Result<AnalysisResponse, String>,
    },

    /// Explicit clear: reset input, result, and error.
    Clear,
}
