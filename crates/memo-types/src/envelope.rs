//! Request envelope DTOs matching the voice platform's JSON schema.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-turn request envelope delivered by the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    pub session: Session,
    pub request: Request,
}

impl RequestEnvelope {
    /// Platform-assigned identity the attribute bag is keyed by.
    pub fn user_id(&self) -> &str {
        &self.session.user.user_id
    }

    pub fn application_id(&self) -> &str {
        &self.session.application.application_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Application,
    pub user: User,
    #[serde(default)]
    pub new: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// The request union, tagged by the JSON `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Request types this skill does not model. Kept deserializable so they
    /// reach the dispatcher's fallback instead of failing the turn at the
    /// codec.
    #[serde(other)]
    Unknown,
}

impl Request {
    /// Short tag for logging and dispatch-miss errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
            Request::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub locale: String,
    /// Slot-collection progress, re-sent in full by the platform each turn.
    #[serde(default)]
    pub dialog_state: Option<DialogState>,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Platform-tracked progress of slot collection for a multi-turn intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    Started,
    InProgress,
    Completed,
}

/// A named user goal resolved by the platform's NLU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Value of a named slot, if present and non-empty.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
