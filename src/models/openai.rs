//! OpenAI chat-completions request types for vision models.
//!
//! Only the request side is modelled. Completion responses are relayed to the
//! caller untouched, so they never get a Rust type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Chat-completions request body.
///
/// Covers the full request surface of the vision preview models. The
/// conversion path only sets `model`, `max_tokens` and `messages`; every
/// unset optional field is omitted from the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// ID of the model to use.
    pub model: String,

    /// The conversation so far.
    pub messages: Vec<ChatMessage>,

    /// Function definitions the model may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<Value>>,

    /// Controls which function, if any, is called.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// The maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_of: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,

    /// Token ID to bias mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<HashMap<String, f32>>,

    /// Up to four sequences where generation stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopSequence>,
}

impl CompletionRequest {
    /// A request with only the required fields set.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            functions: None,
            function_call: None,
            stream: None,
            temperature: None,
            top_p: None,
            max_tokens: None,
            n: None,
            best_of: None,
            frequency_penalty: None,
            presence_penalty: None,
            logit_bias: None,
            stop: None,
        }
    }
}

/// Stop condition: a single sequence or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopSequence {
    Single(String),
    Multiple(Vec<String>),
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
            name: None,
        }
    }

    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Function,
}

/// Message content - plain text or a mixed list of parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One element of a mixed content list.
///
/// Text parts travel as bare JSON strings; image parts are tagged objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Image(ImagePart),
}

impl ContentPart {
    /// An image reference at the given fidelity.
    pub fn image(url: impl Into<String>, detail: ImageDetail) -> Self {
        ContentPart::Image(ImagePart::ImageUrl {
            image_url: ImageUrl::Detailed {
                url: url.into(),
                detail,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImagePart {
    ImageUrl { image_url: ImageUrl },
}

/// Image reference: a bare URL or a URL with a detail level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageUrl {
    Plain(String),
    Detailed { url: String, detail: ImageDetail },
}

/// How much image resolution the model should spend tokens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Low,
    High,
    Auto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_optional_fields_are_omitted() {
        let request = CompletionRequest::new("gpt-4-vision-preview", vec![ChatMessage::system("hi")]);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-4-vision-preview",
                "messages": [{ "role": "system", "content": "hi" }]
            })
        );
    }

    #[test]
    fn test_mixed_content_wire_format() {
        let message = ChatMessage::user(vec![
            ContentPart::image("https://example.com/a.png", ImageDetail::High),
            ContentPart::Text("describe".to_string()),
        ]);
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [
                    {
                        "type": "image_url",
                        "image_url": { "url": "https://example.com/a.png", "detail": "high" }
                    },
                    "describe"
                ]
            })
        );
    }

    #[test]
    fn test_plain_image_url_deserializes() {
        let part: ContentPart = serde_json::from_value(json!({
            "type": "image_url",
            "image_url": "data:image/png;base64,AAAA"
        }))
        .unwrap();

        match part {
            ContentPart::Image(ImagePart::ImageUrl { image_url }) => {
                assert_eq!(image_url, ImageUrl::Plain("data:image/png;base64,AAAA".to_string()));
            }
            other => panic!("expected image part, got {:?}", other),
        }
    }

    #[test]
    fn test_stop_accepts_string_or_list() {
        let single: StopSequence = serde_json::from_value(json!("</html>")).unwrap();
        let multiple: StopSequence = serde_json::from_value(json!(["a", "b"])).unwrap();

        assert_eq!(single, StopSequence::Single("</html>".to_string()));
        assert_eq!(multiple, StopSequence::Multiple(vec!["a".to_string(), "b".to_string()]));
    }
}
