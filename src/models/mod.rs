//! Data models for both sides of the proxy.
//!
//! - `conversion`: The inbound request accepted from callers.
//! - `openai`: The outbound chat-completions request sent upstream.

pub mod conversion;
pub mod openai;

pub use conversion::ConversionRequest;
pub use openai::{
    ChatMessage, CompletionRequest, ContentPart, ImageDetail, ImagePart, ImageUrl, MessageContent,
    Role, StopSequence,
};
