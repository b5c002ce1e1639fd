//! Builder API for ergonomic Resource construction.
//!
//! Provides a fluent interface over the fallible [`Resource`] mutators.
//! The first error is remembered and returned from [`ResourceBuilder::build`].
//!
//! # Example
//!
//! ```rust
//! use hal_resource::model::builder::ResourceBuilder;
//!
//! let resource = ResourceBuilder::new()
//!     .self_link("/orders")
//!     .property("currentlyProcessing", 14)
//!     .link("next", "/orders/1", |l| l.name("hotdog"))
//!     .link("next", "/orders/9", |l| l)
//!     .embed("orders", |order| order
//!         .self_link("/orders/123")
//!         .property("total", 30.0)
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(resource.href(), Some("/orders"));
//! ```

use serde_json::Value;

use crate::error::HalError;
use crate::limits::SELF_RELATION;
use crate::model::{LinkOptions, Resource};

/// Builder for constructing a [`Resource`].
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    resource: Resource,
    error: Option<HalError>,
}

impl ResourceBuilder {
    /// Creates a builder for an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `self` link.
    pub fn self_link(self, href: impl Into<String>) -> Self {
        self.link(SELF_RELATION, href, |l| l)
    }

    /// Sets a property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.resource.set_property(key, value) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Adds a link, configuring its attributes with `f`.
    pub fn link<F>(mut self, relation: impl Into<String>, href: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(LinkOptions) -> LinkOptions,
    {
        if self.error.is_none() {
            let options = f(LinkOptions::new());
            if let Err(err) = self.resource.add_link(relation, href, options) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Adds a CURIE namespace.
    pub fn namespace(mut self, name: impl Into<String>, href: impl Into<String>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.resource.add_namespace(name, href) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Embeds a resource built with a nested builder.
    pub fn embed<F>(mut self, relation: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(ResourceBuilder) -> ResourceBuilder,
    {
        if self.error.is_none() {
            match f(ResourceBuilder::new()).build() {
                Ok(child) => self = self.embed_resource(relation, child),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Embeds an already built resource.
    pub fn embed_resource(mut self, relation: impl Into<String>, resource: Resource) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.resource.embed_resource(relation, resource) {
                self.error = Some(err);
            }
        }
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Returns the resource, or the first error raised while building it.
    pub fn build(self) -> Result<Resource, HalError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::ToCanonicalMap;

    #[test]
    fn test_builder_matches_mutators() {
        let built = ResourceBuilder::new()
            .self_link("http://example.com")
            .link("posts", "/posts", |l| l)
            .link("author", "http://locks.io", |l| l.title("Locks"))
            .property("title", "Entry point")
            .build()
            .unwrap();

        let mut manual = Resource::with_self("http://example.com").unwrap();
        manual
            .add_link("posts", "/posts", LinkOptions::new())
            .unwrap()
            .add_link("author", "http://locks.io", LinkOptions::new().title("Locks"))
            .unwrap()
            .set_property("title", "Entry point")
            .unwrap();

        assert_eq!(built, manual);
    }

    #[test]
    fn test_builder_nested_embed() {
        let resource = ResourceBuilder::new()
            .namespace("ex", "http://example.com/rels/{rel}")
            .embed("ex:item", |item| item.self_link("/items/1").property("n", 1))
            .build()
            .unwrap();

        assert_eq!(
            Value::Object(resource.to_canonical_map()),
            json!({
                "_links": {
                    "curies": {
                        "href": "http://example.com/rels/{rel}",
                        "templated": true,
                        "name": "ex",
                    },
                },
                "_embedded": {
                    "ex:item": { "n": 1, "_links": { "self": { "href": "/items/1" } } },
                },
            })
        );
    }

    #[test]
    fn test_builder_keeps_first_error() {
        let result = ResourceBuilder::new()
            .property("_links", 1)
            .link("next", "", |l| l)
            .build();
        assert_eq!(
            result,
            Err(HalError::ReservedKey {
                key: "_links".to_string()
            })
        );
    }

    #[test]
    fn test_builder_propagates_nested_error() {
        let result = ResourceBuilder::new()
            .embed("child", |child| child.self_link(""))
            .build();
        assert_eq!(result, Err(HalError::EmptyHref));
    }
}
