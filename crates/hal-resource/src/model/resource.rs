//! The HAL resource.
//!
//! A resource is a property map plus two relation groups: links and
//! embedded resources. It owns its embedded children, so a resource and
//! everything under it form a tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::HalError;
use crate::limits::{CURIES_RELATION, EMBEDDED_KEY, LINKS_KEY, SELF_RELATION, is_reserved_key};
use crate::model::{Link, LinkOptions, RelationGroup, ToCanonicalMap};

/// A HAL resource.
///
/// ```rust
/// use hal_resource::{LinkOptions, Resource};
///
/// let mut resource = Resource::with_self("/orders").unwrap();
/// resource.set_property("currentlyProcessing", 14).unwrap();
/// resource.add_link("next", "/orders/2", LinkOptions::new()).unwrap();
///
/// assert_eq!(resource.href(), Some("/orders"));
/// assert_eq!(resource.property("currentlyProcessing"), Some(&14.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    properties: Map<String, Value>,
    links: RelationGroup<Link>,
    embedded: RelationGroup<Resource>,
}

impl Resource {
    /// Creates an empty resource with no self link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resource whose `self` relation points at `href`.
    pub fn with_self(href: impl Into<String>) -> Result<Self, HalError> {
        let mut resource = Self::new();
        resource.add_link(SELF_RELATION, href, LinkOptions::default())?;
        Ok(resource)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns a property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Sets a property, replacing any previous value.
    ///
    /// Fails with [`HalError::ReservedKey`] for `_links` and `_embedded`.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, HalError> {
        let key = key.into();
        if is_reserved_key(&key) {
            return Err(HalError::ReservedKey { key });
        }
        self.properties.insert(key, value.into());
        Ok(self)
    }

    /// Removes a property, returning its value.
    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.shift_remove(key)
    }

    /// All properties, in insertion order.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// Adds a link under `relation`.
    pub fn add_link(
        &mut self,
        relation: impl Into<String>,
        href: impl Into<String>,
        options: LinkOptions,
    ) -> Result<&mut Self, HalError> {
        let link = Link::new(href, options)?;
        self.links.add(relation, link)?;
        Ok(self)
    }

    /// Registers a CURIE: a templated `curies` link carrying `name`.
    pub fn add_namespace(
        &mut self,
        name: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<&mut Self, HalError> {
        self.add_link(
            CURIES_RELATION,
            href,
            LinkOptions::new().templated(true).name(name),
        )
    }

    /// Returns the first CURIE registered under `name`.
    pub fn namespace(&self, name: &str) -> Option<&Link> {
        self.namespaces()
            .iter()
            .find(|curie| curie.name() == Some(name))
    }

    /// All CURIEs, empty if none are registered.
    pub fn namespaces(&self) -> &[Link] {
        self.links.fetch(CURIES_RELATION, &[])
    }

    /// Returns the href of the first `self` link.
    pub fn href(&self) -> Option<&str> {
        self.links
            .get(SELF_RELATION)
            .and_then(|links| links.first())
            .map(Link::href)
    }

    pub fn links(&self) -> &RelationGroup<Link> {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut RelationGroup<Link> {
        &mut self.links
    }

    // =========================================================================
    // Embedded resources
    // =========================================================================

    /// Embeds `resource` under `relation`.
    pub fn embed_resource(
        &mut self,
        relation: impl Into<String>,
        resource: Resource,
    ) -> Result<&mut Self, HalError> {
        self.embedded.add(relation, resource)?;
        Ok(self)
    }

    pub fn embedded(&self) -> &RelationGroup<Resource> {
        &self.embedded
    }

    pub fn embedded_mut(&mut self) -> &mut RelationGroup<Resource> {
        &mut self.embedded
    }
}

impl ToCanonicalMap for Resource {
    /// Properties first, then `_links` and `_embedded` when non-empty.
    fn to_canonical_map(&self) -> Map<String, Value> {
        let mut map = self.properties.clone();
        if !self.links.is_empty() {
            map.insert(
                LINKS_KEY.to_string(),
                Value::Object(self.links.to_canonical_map()),
            );
        }
        if !self.embedded.is_empty() {
            map.insert(
                EMBEDDED_KEY.to_string(),
                Value::Object(self.embedded.to_canonical_map()),
            );
        }
        map
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_canonical_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        crate::codec::from_value(&value).map_err(serde::de::Error::custom)
    }
}
