use crate::chat::responder::respond;
use crate::chat::transcript::Transcript;
use crate::prelude::ModelParameters;
use crate::processing::report::{ModelReport, ReportBuilder};
use crate::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use std::collections::HashMap;

/// State owned by one classroom session: current parameters and chat history.
#[derive(Debug, Default)]
pub struct Session {
    parameters: ModelParameters,
    transcript: Transcript,
    metrics: MetricsRecorder,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: ModelParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: ModelParameters) {
        self.parameters = parameters;
    }

    /// Full re-evaluation for the session's current parameters.
    pub fn render(&self, builder: &ReportBuilder) -> ModelReport {
        self.metrics.record_render();
        builder.build(&self.parameters)
    }

    /// Records the question and its canned reply. Blank input is ignored.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        if question.trim().is_empty() {
            return None;
        }
        let response = respond(question);
        self.transcript.push_exchange(question, response);
        self.metrics.record_question();
        Some(response)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

/// Sessions keyed by id, created on first mutable access and dropped on `remove`.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    defaults: ModelParameters,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// New sessions start from `defaults` instead of the slider defaults.
    pub fn with_defaults(defaults: ModelParameters) -> Self {
        Self {
            sessions: HashMap::new(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &ModelParameters {
        &self.defaults
    }

    pub fn session_mut(&mut self, id: &str) -> &mut Session {
        let defaults = self.defaults;
        self.sessions.entry(id.to_string()).or_insert_with(|| {
            LogManager::scoped("session").trace(&format!("opening session {id}"));
            Session::with_parameters(defaults)
        })
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Ends a session; its transcript is dropped with it.
    pub fn remove(&mut self, id: &str) -> Option<Session> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            LogManager::scoped("session").trace(&format!("closing session {id}"));
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::Topic;
    use crate::chat::transcript::{Role, GREETING};

    #[test]
    fn one_question_yields_three_entries() {
        let mut session = Session::new();
        let response = session.ask("What is the equation?").unwrap();
        assert_eq!(response, Topic::Formula.explanation());

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, GREETING);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "What is the equation?");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, response);
    }

    #[test]
    fn blank_question_is_ignored() {
        let mut session = Session::new();
        assert!(session.ask("   ").is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.metrics().questions, 0);
    }

    #[test]
    fn transcript_grows_in_pairs() {
        let mut session = Session::new();
        for question in ["graph?", "decay?", "banana"] {
            session.ask(question);
        }
        assert_eq!(session.transcript().len(), 7);
        assert_eq!(session.metrics().questions, 3);
    }

    #[test]
    fn render_uses_session_parameters() {
        let mut session = Session::new();
        session.set_parameters(ModelParameters::new(40.0, -5, 0).unwrap());
        let report = session.render(&ReportBuilder::new());
        assert_eq!(report.final_speed, 40.0);
        assert_eq!(session.metrics().renders, 1);
    }

    #[test]
    fn store_creates_sessions_lazily_and_isolates_them() {
        let mut store = SessionStore::new();
        assert!(store.get("a").is_none());

        store.session_mut("a").ask("decay");
        store.session_mut("b");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").unwrap().transcript().len(), 3);
        assert_eq!(store.get("b").unwrap().transcript().len(), 1);
    }

    #[test]
    fn store_seeds_new_sessions_with_configured_defaults() {
        let defaults = ModelParameters::new(45.0, -5, 3).unwrap();
        let mut store = SessionStore::with_defaults(defaults);
        assert_eq!(*store.session_mut("x").parameters(), defaults);
        assert_eq!(*SessionStore::new().session_mut("y").parameters(), ModelParameters::default());
    }

    #[test]
    fn removing_a_session_drops_its_transcript() {
        let mut store = SessionStore::new();
        store.session_mut("a").ask("what is the model?");

        let removed = store.remove("a").unwrap();
        assert_eq!(removed.transcript().len(), 3);
        assert!(store.get("a").is_none());
        assert!(store.remove("a").is_none());

        assert_eq!(store.session_mut("a").transcript().len(), 1);
    }
}
