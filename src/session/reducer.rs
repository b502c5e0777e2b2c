//! Reducer for the session state machine.

use super::intent::SessionIntent;
use super::state::{AnalysisPhase, SessionState};

/// Pure state transitions: (state, intent) -> state.
///
/// All guards live here: single-flight submission, the empty-input check,
/// and discarding completions that no longer match the current submission.
pub struct SessionReducer;

impl SessionReducer {
    pub fn reduce(state: SessionState, intent: SessionIntent) -> SessionState {
        match intent {
            SessionIntent::InputChanged(input) => SessionState { input, ..state },

            SessionIntent::Submit => {
                // Not queued, not an error: a submit while busy or with a
                // blank snippet is silently ignored.
                if !state.can_submit() {
                    return state;
                }
                SessionState {
                    phase: AnalysisPhase::Busy { animation_tick: 0 },
                    generation: state.generation + 1,
                    ..state
                }
            }

            SessionIntent::AnimationTick => match state.phase {
                AnalysisPhase::Busy { animation_tick } => SessionState {
                    phase: AnalysisPhase::Busy {
                        animation_tick: animation_tick.wrapping_add(1),
                    },
                    ..state
                },
                _ => state,
            },

            SessionIntent::Completed { generation, outcome } => {
                // A completion is applied only if the session still awaits
                // it: same generation, still busy. Anything else is a late
                // arrival for a superseded screen.
                if generation != state.generation || !state.is_busy() {
                    return state;
                }
                let phase = match outcome {
                    Ok(response) => AnalysisPhase::Success(response),
                    Err(message) => AnalysisPhase::Failure { message },
                };
                SessionState { phase, ..state }
            }

            SessionIntent::Clear => SessionState {
                input: String::new(),
                phase: AnalysisPhase::Idle,
                generation: state.generation,
            },
        }
    }
}
