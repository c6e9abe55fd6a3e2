//! Traits for attribute storage and request handling.

use crate::{AttributeBag, RequestEnvelope, ResponseEnvelope};
use async_trait::async_trait;

/// Key-value gateway for the per-user attribute bag.
///
/// Contract: `load` returns an empty bag for a user with nothing stored;
/// "not found" is never an error. `save` must complete before the turn's
/// response is returned. Neither operation retries internally; retry policy
/// belongs to the caller.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<AttributeBag, AttributeStoreError>;

    async fn save(&self, user_id: &str, bag: &AttributeBag) -> Result<(), AttributeStoreError>;
}

/// One entry in the ordered dispatch table.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Whether this handler serves the request. Predicates are evaluated in
    /// registration order; the first match wins.
    fn matches(&self, envelope: &RequestEnvelope) -> bool;

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError>;
}

/// Per-turn view passed to handlers: the envelope plus the attribute store.
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub attributes: &'a dyn AttributeStore,
}

#[derive(Debug, thiserror::Error)]
pub enum AttributeStoreError {
    #[error("attribute store timeout: {0}")]
    Timeout(String),
    #[error("attribute store throttled: {0}")]
    Throttled(String),
    #[error("attribute store permission denied: {0}")]
    PermissionDenied(String),
    #[error("attribute store error: {0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("no handler matched {0} request")]
    DispatchMiss(&'static str),
    #[error("persistence: {0}")]
    Persistence(#[from] AttributeStoreError),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}
