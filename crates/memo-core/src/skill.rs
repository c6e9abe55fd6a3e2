//! Ordered predicate-dispatch table over request handlers.

use crate::handlers::{
    CancelStopHandler, CreateMemoHandler, DeleteMemoHandler, HelpHandler, LaunchHandler,
    ListenMemoHandler, SessionEndedHandler,
};
use crate::speech;
use memo_types::{
    AttributeStore, Handler, HandlerInput, RequestEnvelope, ResponseBuilder, ResponseEnvelope,
    SkillError,
};
use std::sync::Arc;

/// The skill: an immutable dispatch table built once at startup plus the
/// shared attribute store.
///
/// Dispatch walks the table in registration order and runs the first handler
/// whose predicate matches; a request no handler claims is a dispatch miss.
/// `invoke` converts every error into the apology response after logging it,
/// so a turn is never dropped and no raw error reaches the user.
pub struct Skill {
    handlers: Vec<Box<dyn Handler>>,
    store: Arc<dyn AttributeStore>,
}

impl Skill {
    /// Standard table: launch, create, delete, listen, help, cancel/stop,
    /// session-ended.
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        Self::with_handlers(
            store,
            vec![
                Box::new(LaunchHandler),
                Box::new(CreateMemoHandler),
                Box::new(DeleteMemoHandler),
                Box::new(ListenMemoHandler),
                Box::new(HelpHandler),
                Box::new(CancelStopHandler),
                Box::new(SessionEndedHandler),
            ],
        )
    }

    pub fn with_handlers(store: Arc<dyn AttributeStore>, handlers: Vec<Box<dyn Handler>>) -> Self {
        Self { handlers, store }
    }

    /// Run one turn to completion. Infallible by contract: errors become the
    /// apology response.
    pub async fn invoke(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        match self.dispatch(envelope).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    request = envelope.request.kind(),
                    error = %e,
                    "turn failed, answering with apology"
                );
                apology()
            }
        }
    }

    async fn dispatch(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let input = HandlerInput {
            envelope,
            attributes: self.store.as_ref(),
        };
        for handler in &self.handlers {
            if handler.matches(envelope) {
                return handler.handle(&input).await;
            }
        }
        Err(SkillError::DispatchMiss(envelope.request.kind()))
    }
}

/// Terminal fallback response for any failed turn.
pub fn apology() -> ResponseEnvelope {
    ResponseBuilder::new()
        .speak(speech::APOLOGY)
        .reprompt(speech::APOLOGY)
        .build()
}
