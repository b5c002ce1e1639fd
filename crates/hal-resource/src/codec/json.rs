//! JSON text encoding/decoding.
//!
//! The resource codec never touches JSON text itself. It works on
//! `serde_json::Value` trees and hands text conversion to a [`JsonCodec`].

use serde_json::Value;

use crate::error::HalError;

/// Converts between JSON text and a generic JSON tree.
pub trait JsonCodec {
    /// Parses JSON text into a tree.
    fn decode(&self, text: &str) -> Result<Value, HalError>;

    /// Renders a tree as JSON text.
    fn encode(&self, value: &Value) -> Result<String, HalError>;
}

/// [`JsonCodec`] backed by `serde_json`.
///
/// Object key order is preserved in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJson {
    /// Emit indented output.
    pub pretty: bool,
}

impl SerdeJson {
    /// Creates a codec producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec producing indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonCodec for SerdeJson {
    fn decode(&self, text: &str) -> Result<Value, HalError> {
        Ok(serde_json::from_str(text)?)
    }

    fn encode(&self, value: &Value) -> Result<String, HalError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}
