//! Analysis session state machine.
//!
//! # Architecture
//!
//! Unidirectional data flow in three pieces:
//! - `state.rs` - session state (input buffer + analysis phase)
//! - `intent.rs` - user actions and network completions
//! - `reducer.rs` - pure state transitions
//!
//! The view layer is a pure projection of [`SessionState`]; side effects
//! (the network call) live in `ui::app`, which feeds completions back in as
//! intents tagged with a submission generation.

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{AnalysisPhase, SessionState};
