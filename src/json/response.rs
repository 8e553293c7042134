//! Typed access over JSON text received from outside the filesystem

use crate::error::Result;
use crate::json::JsonAccess;
use crate::utils;
use serde_json::{Map, Value};

/// A parsed JSON object response, e.g. the body of an HTTP reply
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    response_text: String,
    response: Map<String, Value>,
}

impl JsonResponse {
    /// Parse `text`, whose root must be an object
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid JSON or a type error when the root
    /// is not an object.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let response_text = text.into();
        let response = utils::parse_object(&response_text)?;
        Ok(Self {
            response_text,
            response,
        })
    }

    /// The original text
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// The parsed object
    pub fn response(&self) -> &Map<String, Value> {
        &self.response
    }
}

impl JsonAccess for JsonResponse {
    fn content(&self) -> &Map<String, Value> {
        &self.response
    }
}

impl std::str::FromStr for JsonResponse {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_read() {
        let response = JsonResponse::parse(r#"{"status": "ok", "count": 3, "ids": [1, 2, 3]}"#).unwrap();

        assert_eq!(response.get_string("status").unwrap(), "ok");
        assert_eq!(response.get_i32("count").unwrap(), 3);
        let ids: Vec<u32> = response.get("ids").unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(response.response_text().contains("status"));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!("[1, 2]".parse::<JsonResponse>().is_err());
        assert!("not json".parse::<JsonResponse>().is_err());
    }
}
