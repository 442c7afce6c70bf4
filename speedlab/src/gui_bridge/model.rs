use serde::{Deserialize, Serialize};
use speedcore::chat::Message;
use speedcore::telemetry::MetricsSnapshot;
use speedcore::ModelParameters;

/// Body of `POST /session/{id}/parameters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersRequest {
    pub initial_speed: f64,
    pub rate_percent: i32,
    pub hours: u32,
}

/// Body of `POST /session/{id}/ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: Option<String>,
    pub transcript: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub parameters: ModelParameters,
    pub metrics: MetricsSnapshot,
    pub transcript: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub status: String,
    pub message: String,
}

impl ErrorReply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
        }
    }
}
