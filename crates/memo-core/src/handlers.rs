//! Handler value types composing the dispatch table.

use crate::dialog::{continuation, DialogGate};
use crate::{memos, speech};
use async_trait::async_trait;
use memo_types::{
    Handler, HandlerInput, IntentRequest, Request, RequestEnvelope, ResponseBuilder,
    ResponseEnvelope, SkillError,
};

const CREATE_INTENT: &str = "CreateMemoIntent";
const DELETE_INTENT: &str = "DeleteMemoIntent";
const LISTEN_INTENT: &str = "ListenMemoIntent";
const HELP_INTENT: &str = "AMAZON.HelpIntent";
const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
const STOP_INTENT: &str = "AMAZON.StopIntent";
const MEMO_SLOT: &str = "Memo";

/// The intent request when the envelope carries one of the given intent
/// names. One handler may declare several names (cancel + stop).
fn intent_request<'a>(envelope: &'a RequestEnvelope, names: &[&str]) -> Option<&'a IntentRequest> {
    match &envelope.request {
        Request::IntentRequest(req) if names.contains(&req.intent.name.as_str()) => Some(req),
        _ => None,
    }
}

/// Greets the user with their current message count.
pub struct LaunchHandler;

#[async_trait]
impl Handler for LaunchHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::LaunchRequest(_))
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        let bag = input.attributes.load(input.envelope.user_id()).await?;
        let text = speech::welcome(bag.memos.len());
        Ok(ResponseBuilder::new()
            .speak(text.as_str())
            .reprompt(text.as_str())
            .with_simple_card(speech::CARD_TITLE, text.as_str())
            .build())
    }
}

/// Appends a memo once the platform has finished collecting the `Memo` slot;
/// until then every turn is delegated back for more slot filling.
pub struct CreateMemoHandler;

#[async_trait]
impl Handler for CreateMemoHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        intent_request(envelope, &[CREATE_INTENT]).is_some()
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        let request = intent_request(input.envelope, &[CREATE_INTENT]).ok_or_else(|| {
            SkillError::MalformedRequest("create handler invoked without create intent".to_string())
        })?;

        if continuation(request.dialog_state) == DialogGate::Delegate {
            tracing::debug!(intent = CREATE_INTENT, "delegating slot collection");
            return Ok(ResponseBuilder::new()
                .delegate(Some(request.intent.clone()))
                .build());
        }

        let memo = request
            .intent
            .slot_value(MEMO_SLOT)
            .ok_or_else(|| {
                SkillError::MalformedRequest(format!(
                    "dialog completed without a {} slot value",
                    MEMO_SLOT
                ))
            })?
            .to_string();

        let user_id = input.envelope.user_id();
        let mut bag = input.attributes.load(user_id).await?;
        memos::create(&mut bag, memo.as_str());
        input.attributes.save(user_id, &bag).await?;
        tracing::info!(count = bag.memos.len(), "memo created");

        let text = speech::memo_created(&memo);
        Ok(ResponseBuilder::new()
            .speak(text.as_str())
            .with_simple_card(speech::CARD_TITLE, text.as_str())
            .build())
    }
}

/// Clears every memo. Whole-list deletion is the only granularity offered.
pub struct DeleteMemoHandler;

#[async_trait]
impl Handler for DeleteMemoHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        intent_request(envelope, &[DELETE_INTENT]).is_some()
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        let user_id = input.envelope.user_id();
        let mut bag = input.attributes.load(user_id).await?;
        memos::delete_all(&mut bag);
        input.attributes.save(user_id, &bag).await?;
        tracing::info!("memos deleted");

        Ok(ResponseBuilder::new()
            .speak(speech::DELETION_DONE)
            .reprompt(speech::DELETION_DONE)
            .with_simple_card(speech::CARD_TITLE, speech::DELETION_DONE)
            .build())
    }
}

/// Reads the stored memos back in creation order.
pub struct ListenMemoHandler;

#[async_trait]
impl Handler for ListenMemoHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        intent_request(envelope, &[LISTEN_INTENT]).is_some()
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        let bag = input.attributes.load(input.envelope.user_id()).await?;
        let text = speech::listing(&memos::list(&bag));
        Ok(ResponseBuilder::new()
            .speak(text.as_str())
            .reprompt(text.as_str())
            .with_simple_card(speech::CARD_TITLE, text.as_str())
            .build())
    }
}

pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        intent_request(envelope, &[HELP_INTENT]).is_some()
    }

    async fn handle(&self, _input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        Ok(ResponseBuilder::new()
            .speak(speech::HELP)
            .reprompt(speech::HELP)
            .with_simple_card(speech::CARD_TITLE, speech::HELP)
            .build())
    }
}

/// One handler for both built-in cancel and stop intents.
pub struct CancelStopHandler;

#[async_trait]
impl Handler for CancelStopHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        intent_request(envelope, &[CANCEL_INTENT, STOP_INTENT]).is_some()
    }

    async fn handle(&self, _input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        Ok(ResponseBuilder::new()
            .speak(speech::GOODBYE)
            .with_simple_card(speech::CARD_TITLE, speech::GOODBYE)
            .build())
    }
}

/// Acknowledges the platform's session teardown with an empty response.
pub struct SessionEndedHandler;

#[async_trait]
impl Handler for SessionEndedHandler {
    fn matches(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::SessionEndedRequest(_))
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<ResponseEnvelope, SkillError> {
        if let Request::SessionEndedRequest(req) = &input.envelope.request {
            tracing::info!(
                reason = req.reason.as_deref().unwrap_or("unknown"),
                "session ended"
            );
        }
        Ok(ResponseBuilder::new().build())
    }
}
