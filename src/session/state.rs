//! Session state: the input buffer plus the analysis phase.

use crate::api::AnalysisResponse;

/// Phase of the current analysis exchange. Exactly one is active; entering
/// a new phase supersedes any previous result or error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisPhase {
    /// No request in flight, nothing displayed.
    #[default]
    Idle,

    /// A request is in flight.
    Busy {
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// Last request succeeded; the response is displayed.
    Success(AnalysisResponse),

    /// Last request failed; the message is displayed as an error.
    Failure { message: String },
}

/// Complete UI-visible session state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Operator's log snippet. Editing it does not clear a displayed result.
    pub input: String,

    /// Current analysis phase.
    pub phase: AnalysisPhase,

    /// Submission counter. Completions carry the generation they were
    /// dispatched under; stale ones are discarded by the reducer.
    pub generation: u64,
}

impl SessionState {
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Busy { .. })
    }

    /// Submit guard: trimmed input non-empty and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        match &self.phase {
            AnalysisPhase::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            AnalysisPhase::Failure { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_with_empty_input() {
        let state = SessionState::default();
        assert_eq!(state.phase, AnalysisPhase::Idle);
        assert!(state.input.is_empty());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn can_submit_requires_nonblank_input() {
        let mut state = SessionState::default();
        assert!(!state.can_submit());

        state.input = "   \n\t ".to_string();
        assert!(!state.can_submit());

        state.input = "Failed password for root".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn can_submit_is_false_while_busy() {
        let state = SessionState {
            input: "some log line".to_string(),
            phase: AnalysisPhase::Busy { animation_tick: 0 },
            generation: 1,
        };
        assert!(state.is_busy());
        assert!(!state.can_submit());
    }

    #[test]
    fn accessors_match_phase() {
        let failure = SessionState {
            phase: AnalysisPhase::Failure {
                message: "boom".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(failure.error_message(), Some("boom"));
        assert!(failure.response().is_none());

        let success = SessionState {
            phase: AnalysisPhase::Success(AnalysisResponse::default()),
            ..Default::default()
        };
        assert!(success.response().is_some());
        assert_eq!(success.error_message(), None);
    }
}
