//! Link objects.
//!
//! A link is an immutable hypermedia reference: a target URI (or URI
//! template) plus optional descriptive attributes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::HalError;
use crate::model::ToCanonicalMap;

/// Optional attributes of a [`Link`].
///
/// ```rust
/// use hal_resource::LinkOptions;
///
/// let opts = LinkOptions::new().templated(true).name("ex");
/// assert!(opts.is_templated());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LinkOptions {
    templated: bool,
    media_type: Option<String>,
    name: Option<String>,
    profile: Option<String>,
    title: Option<String>,
    hreflang: Option<String>,
}

impl LinkOptions {
    /// Creates an empty option set (not templated, no attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the href as a URI template.
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    /// Sets the media type hint (`type` on the wire).
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the secondary key used to select among links of one relation.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the profile URI.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets the human-readable title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the language of the target resource.
    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Returns whether the templated flag is set.
    pub fn is_templated(&self) -> bool {
        self.templated
    }
}

/// A hypermedia link.
///
/// Two links are equal when every attribute matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    href: String,
    options: LinkOptions,
}

impl Link {
    /// Creates a link. The href must be non-empty; template syntax is not
    /// checked.
    pub fn new(href: impl Into<String>, options: LinkOptions) -> Result<Self, HalError> {
        let href = href.into();
        if href.is_empty() {
            return Err(HalError::EmptyHref);
        }
        Ok(Self { href, options })
    }

    /// Creates a non-templated link without attributes.
    pub fn from_href(href: impl Into<String>) -> Result<Self, HalError> {
        Self::new(href, LinkOptions::default())
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_templated(&self) -> bool {
        self.options.templated
    }

    pub fn media_type(&self) -> Option<&str> {
        self.options.media_type.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    pub fn profile(&self) -> Option<&str> {
        self.options.profile.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.options.hreflang.as_deref()
    }

    /// Returns the attributes this link was built with.
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }
}

impl ToCanonicalMap for Link {
    fn to_canonical_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("href".to_string(), Value::String(self.href.clone()));
        if self.options.templated {
            map.insert("templated".to_string(), Value::Bool(true));
        }

        let optionals = [
            ("type", &self.options.media_type),
            ("name", &self.options.name),
            ("profile", &self.options.profile),
            ("title", &self.options.title),
            ("hreflang", &self.options.hreflang),
        ];
        for (key, value) in optionals {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        map
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_canonical_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let attrs = Map::<String, Value>::deserialize(deserializer)?;
        crate::codec::extract::link_from_object(&attrs, "$").map_err(serde::de::Error::custom)
    }
}
