// Translation module for building upstream requests

pub mod request;

pub use request::{build_completion_request, SYSTEM_PROMPT, USER_INSTRUCTION};
