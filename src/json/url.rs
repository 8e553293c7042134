//! Reading JSON over HTTP(S)

use crate::codec::CodecProfile;
use crate::error::{Error, Result};
use crate::json::{JsonFile, Refreshable};
use crate::utils;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON content fetched with a blocking HTTP GET
///
/// The body is parsed the same way a file's content is, and can be persisted
/// to a local [`JsonFile`] afterwards.
#[derive(Debug, Clone)]
pub struct JsonUrlReader {
    url: String,
    content: Value,
}

impl JsonUrlReader {
    /// Fetch and parse `url`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the request fails or the body cannot be
    /// read, or a parse error if the body is not valid JSON.
    pub fn fetch(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let content = fetch_value(&url)?;
        Ok(Self { url, content })
    }

    /// The requested URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parsed body
    pub fn content_as_element(&self) -> &Value {
        &self.content
    }

    /// Parsed body as an object
    ///
    /// # Errors
    ///
    /// Returns a type error if the body is not an object.
    pub fn content_as_object(&self) -> Result<&Map<String, Value>> {
        self.content.as_object().ok_or_else(|| Error::TypeMismatch {
            key: self.url.clone(),
            expected: "object".into(),
            actual: crate::error::type_name(&self.content).into(),
        })
    }

    /// Body converted into `T`
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not fit `T`.
    pub fn deserialize_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.content.clone())?)
    }

    /// Member `key` of the body converted into `T`
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an object, the member is absent,
    /// or it does not fit `T`.
    pub fn deserialize_field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .content_as_object()?
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Persist the body to `file`, replacing its content
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to_file(&self, file: &JsonFile, profile: CodecProfile) -> Result<()> {
        file.write_str(&profile.to_string(&self.content)?)
    }
}

impl Refreshable for JsonUrlReader {
    fn refresh(&mut self) -> Result<()> {
        self.content = fetch_value(&self.url)?;
        Ok(())
    }
}

fn fetch_value(url: &str) -> Result<Value> {
    debug!("Fetching JSON from {url}");
    let body = ureq::get(url)
        .call()
        .map_err(|e| Error::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?
        .into_string()
        .map_err(|e| Error::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    utils::parse_value(&body)
}
