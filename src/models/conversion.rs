// Inbound conversion request

use serde::{Deserialize, Serialize};

/// Body of `POST /api/toHtml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// URL or data URI of the wireframe screenshot. Forwarded as-is.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let req: ConversionRequest =
            serde_json::from_str(r#"{"image":"data:image/png;base64,AAAA","html":"<p></p>"}"#).unwrap();
        assert_eq!(req.image, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_missing_image_is_rejected() {
        assert!(serde_json::from_str::<ConversionRequest>("{}").is_err());
        assert!(serde_json::from_str::<ConversionRequest>(r#"{"image":42}"#).is_err());
    }
}
