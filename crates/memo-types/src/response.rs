//! Response envelope DTOs and builder matching the voice platform's JSON schema.

use crate::Intent;
use serde::{Deserialize, Serialize};

/// Outgoing envelope for one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Spoken output. The platform also accepts SSML; this skill emits plain text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Returns control to the platform to continue built-in slot collection.
    #[serde(rename = "Dialog.Delegate")]
    DialogDelegate {
        #[serde(
            rename = "updatedIntent",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        updated_intent: Option<Intent>,
    },
}

/// Builder for one turn's response.
///
/// Setting a reprompt marks the session as staying open
/// (`shouldEndSession: false`). Without one the field is omitted and the
/// platform applies its end-of-session default.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.output_speech = Some(OutputSpeech::PlainText { text: text.into() });
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::PlainText { text: text.into() },
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn with_simple_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.response.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Hands the turn back to the platform to keep collecting slots,
    /// echoing the intent as received so far.
    pub fn delegate(mut self, updated_intent: Option<Intent>) -> Self {
        self.response
            .directives
            .push(Directive::DialogDelegate { updated_intent });
        self
    }

    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: "1.0".to_string(),
            response: self.response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompt_keeps_the_session_open() {
        let envelope = ResponseBuilder::new()
            .speak("hello")
            .reprompt("hello")
            .with_simple_card("Memo", "hello")
            .build();
        let j = serde_json::to_value(&envelope).unwrap();
        assert_eq!(j["version"], "1.0");
        assert_eq!(j["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(j["response"]["outputSpeech"]["text"], "hello");
        assert_eq!(j["response"]["card"]["type"], "Simple");
        assert_eq!(j["response"]["reprompt"]["outputSpeech"]["text"], "hello");
        assert_eq!(j["response"]["shouldEndSession"], false);
    }

    #[test]
    fn speech_without_reprompt_omits_should_end_session() {
        let envelope = ResponseBuilder::new().speak("Goodbye!").build();
        let j = serde_json::to_value(&envelope).unwrap();
        assert!(j["response"].get("shouldEndSession").is_none());
        assert!(j["response"].get("reprompt").is_none());
    }

    #[test]
    fn delegate_serializes_the_dialog_directive() {
        let intent = Intent {
            name: "CreateMemoIntent".to_string(),
            slots: Default::default(),
        };
        let envelope = ResponseBuilder::new().delegate(Some(intent)).build();
        let j = serde_json::to_value(&envelope).unwrap();
        assert_eq!(j["response"]["directives"][0]["type"], "Dialog.Delegate");
        assert_eq!(
            j["response"]["directives"][0]["updatedIntent"]["name"],
            "CreateMemoIntent"
        );
        assert!(j["response"].get("outputSpeech").is_none());
    }

    #[test]
    fn empty_response_serializes_to_bare_envelope() {
        let envelope = ResponseBuilder::new().build();
        let j = serde_json::to_value(&envelope).unwrap();
        assert_eq!(j["response"], serde_json::json!({}));
    }
}
