// Conversion request to chat-completion request translation

use crate::config::OpenAiConfig;
use crate::models::{ChatMessage, CompletionRequest, ContentPart, ConversionRequest, ImageDetail};

/// System prompt sent with every conversion.
pub const SYSTEM_PROMPT: &str = "You are an expert tailwind developer. A user will provide you with a \
low-fidelity wireframe of an application and you will return a single HTML file \
that uses Tailwind CSS to create the website. Use creative license to make the \
application more fleshed out. If you need to insert an image, use placehold.co \
to create a placeholder image. Respond only with the HTML file.";

/// Instruction that accompanies the image in the user message.
pub const USER_INSTRUCTION: &str = "Turn this into a single html file using tailwind.";

/// Build the upstream request for one wireframe.
///
/// The result always holds exactly two messages: the system prompt, then a
/// user message with the image (high detail) followed by the instruction.
pub fn build_completion_request(req: &ConversionRequest, config: &OpenAiConfig) -> CompletionRequest {
    let messages = vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(vec![
            ContentPart::image(req.image.clone(), ImageDetail::High),
            ContentPart::Text(USER_INSTRUCTION.to_string()),
        ]),
    ];

    let mut request = CompletionRequest::new(config.model.clone(), messages);
    request.max_tokens = Some(config.max_tokens);
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImagePart, ImageUrl, MessageContent, Role};
    use proptest::prelude::*;
    use serde_json::json;

    fn convert(image: &str) -> CompletionRequest {
        let req = ConversionRequest {
            image: image.to_string(),
        };
        build_completion_request(&req, &OpenAiConfig::default())
    }

    #[test]
    fn test_request_wire_format() {
        let value = serde_json::to_value(convert("https://example.com/wireframe.png")).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-4-vision-preview",
                "max_tokens": 4096,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    {
                        "role": "user",
                        "content": [
                            {
                                "type": "image_url",
                                "image_url": {
                                    "url": "https://example.com/wireframe.png",
                                    "detail": "high"
                                }
                            },
                            "Turn this into a single html file using tailwind."
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_prompt_mentions_tailwind_and_placeholders() {
        assert!(SYSTEM_PROMPT.contains("Tailwind CSS"));
        assert!(SYSTEM_PROMPT.contains("placehold.co"));
        assert!(SYSTEM_PROMPT.ends_with("Respond only with the HTML file."));
        assert!(!SYSTEM_PROMPT.contains("  "));
    }

    #[test]
    fn test_model_and_ceiling_follow_config() {
        let config = OpenAiConfig {
            model: "gpt-4o".to_string(),
            max_tokens: 1024,
            ..OpenAiConfig::default()
        };
        let req = ConversionRequest {
            image: "x".to_string(),
        };
        let request = build_completion_request(&req, &config);

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, Some(1024));
        assert!(request.temperature.is_none());
        assert!(request.stream.is_none());
    }

    proptest! {
        #[test]
        fn image_reference_is_forwarded_verbatim(image in ".*") {
            let request = convert(&image);
            prop_assert_eq!(request.messages.len(), 2);

            let system = &request.messages[0];
            prop_assert_eq!(system.role, Role::System);
            prop_assert_eq!(&system.content, &MessageContent::Text(SYSTEM_PROMPT.to_string()));

            let user = &request.messages[1];
            prop_assert_eq!(user.role, Role::User);
            let expected = MessageContent::Parts(vec![
                ContentPart::Image(ImagePart::ImageUrl {
                    image_url: ImageUrl::Detailed { url: image.clone(), detail: ImageDetail::High },
                }),
                ContentPart::Text(USER_INSTRUCTION.to_string()),
            ]);
            prop_assert_eq!(&user.content, &expected);
        }
    }
}
