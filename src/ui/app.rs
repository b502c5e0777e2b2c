//! Application state holder and side-effect dispatcher.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::api::{AnalysisClient, AnalysisResponse, DEFAULT_TOP_K};
use crate::session::{SessionIntent, SessionReducer, SessionState};
use crate::ui::events::AppEvent;

/// Owns the session state and the resources the reducer must not touch:
/// the HTTP client, the runtime handle, and the event-loop sender.
///
/// All state transitions go through [`SessionReducer`]; this type only adds
/// the one side effect (spawning the network call) next to the `Submit`
/// transition it belongs to.
pub struct App {
    session: SessionState,
    client: Arc<AnalysisClient>,
    runtime: tokio::runtime::Handle,
    events_tx: Sender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(
        client: AnalysisClient,
        runtime: tokio::runtime::Handle,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            session: SessionState::default(),
            client: Arc::new(client),
            runtime,
            events_tx,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.session = SessionReducer::reduce(std::mem::take(&mut self.session), intent);
    }

    pub fn insert_char(&mut self, c: char) {
        let mut input = self.session.input.clone();
        input.push(c);
        self.dispatch(SessionIntent::InputChanged(input));
    }

    pub fn insert_str(&mut self, text: &str) {
        let mut input = self.session.input.clone();
        input.push_str(text);
        self.dispatch(SessionIntent::InputChanged(input));
    }

    pub fn delete_char(&mut self) {
        let mut input = self.session.input.clone();
        input.pop();
        self.dispatch(SessionIntent::InputChanged(input));
    }

    /// Submit the current snippet. A no-op unless the guard holds (trimmed
    /// non-empty input, nothing in flight); when it does, exactly one task
    /// is spawned and its completion is posted back tagged with the new
    /// generation.
    pub fn submit(&mut self) {
        if !self.session.can_submit() {
            return;
        }

        self.dispatch(SessionIntent::Submit);

        let generation = self.session.generation;
        let log_text = self.session.input.clone();
        let client = Arc::clone(&self.client);
        let events_tx = self.events_tx.clone();

        tracing::info!(generation, "dispatching analysis request");

        self.runtime.spawn(async move {
            let outcome = client
                .analyze(&log_text, DEFAULT_TOP_K)
                .await
                .map_err(|err| err.to_string());
            // The loop may already be gone on shutdown; nothing to do then.
            let _ = events_tx.send(AppEvent::AnalysisComplete { generation, outcome });
        });
    }

    pub fn clear(&mut self) {
        self.dispatch(SessionIntent::Clear);
    }

    pub fn on_tick(&mut self) {
        if self.session.is_busy() {
            self.dispatch(SessionIntent::AnimationTick);
        }
    }

    pub fn on_analysis_complete(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResponse, String>,
    ) {
        self.dispatch(SessionIntent::Completed { generation, outcome });
    }
}
