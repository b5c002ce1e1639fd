//! JSON encoding/decoding for HAL resources.
//!
//! Serialization walks a [`Resource`] into a `serde_json::Value` tree and
//! hands it to a [`JsonCodec`] for rendering. Parsing goes the other way
//! through [`extract::extract_resource`].

pub mod extract;
pub mod json;

use serde_json::Value;

use crate::error::HalError;
use crate::model::{Resource, ToCanonicalMap};

pub use extract::{ParseOptions, extract_resource, link_from_object};
pub use json::{JsonCodec, SerdeJson};

/// Resource codec with an injected JSON collaborator.
///
/// ```rust
/// use hal_resource::codec::{HalCodec, ParseOptions, SerdeJson};
/// use hal_resource::Resource;
///
/// let codec = HalCodec::new(SerdeJson::new()).with_options(ParseOptions::new().max_depth(4));
/// let resource = Resource::with_self("/orders").unwrap();
///
/// let text = codec.serialize(&resource).unwrap();
/// assert_eq!(text, r#"{"_links":{"self":{"href":"/orders"}}}"#);
/// assert_eq!(codec.parse(&text).unwrap(), resource);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HalCodec<J = SerdeJson> {
    json: J,
    options: ParseOptions,
}

impl<J: JsonCodec> HalCodec<J> {
    /// Creates a codec with default parse options.
    pub fn new(json: J) -> Self {
        Self {
            json,
            options: ParseOptions::default(),
        }
    }

    /// Replaces the parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Serializes a resource to JSON text.
    pub fn serialize(&self, resource: &Resource) -> Result<String, HalError> {
        self.json.encode(&to_value(resource))
    }

    /// Parses JSON text into a resource.
    pub fn parse(&self, text: &str) -> Result<Resource, HalError> {
        let tree = self.json.decode(text)?;
        extract_resource(&tree, &self.options)
    }
}

/// Serializes a resource to compact JSON text.
pub fn serialize(resource: &Resource) -> Result<String, HalError> {
    HalCodec::new(SerdeJson::new()).serialize(resource)
}

/// Serializes a resource to indented JSON text.
pub fn serialize_pretty(resource: &Resource) -> Result<String, HalError> {
    HalCodec::new(SerdeJson::pretty()).serialize(resource)
}

/// Parses JSON text into a resource with default options.
pub fn parse(text: &str) -> Result<Resource, HalError> {
    HalCodec::new(SerdeJson::new()).parse(text)
}

/// Converts a resource to its JSON tree.
pub fn to_value(resource: &Resource) -> Value {
    Value::Object(resource.to_canonical_map())
}

/// Extracts a resource from a JSON tree with default options.
pub fn from_value(value: &Value) -> Result<Resource, HalError> {
    extract_resource(value, &ParseOptions::default())
}
