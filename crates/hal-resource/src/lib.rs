//! HAL: Hypertext Application Language resources for Rust.
//!
//! This crate provides an in-memory model of HAL resources and a codec to
//! and from the `application/hal+json` wire form.
//!
//! # Overview
//!
//! A HAL resource has:
//! - **Properties**: arbitrary JSON values keyed by name
//! - **Links** (`_links`): hypermedia references grouped by relation
//! - **Embedded resources** (`_embedded`): full sub-documents grouped by relation
//!
//! A relation holding one item is written as a bare object; a relation
//! holding several is written as an array.
//!
//! # Quick Start
//!
//! ```rust
//! use hal_resource::{LinkOptions, Resource};
//! use hal_resource::codec::{parse, serialize};
//!
//! let mut order = Resource::with_self("/orders/123").unwrap();
//! order.set_property("total", 30.0).unwrap();
//! order.set_property("currency", "USD").unwrap();
//!
//! let mut orders = Resource::with_self("/orders").unwrap();
//! orders.add_link("next", "/orders/1", LinkOptions::new().name("hotdog")).unwrap();
//! orders.add_link("next", "/orders/9", LinkOptions::new()).unwrap();
//! orders.embed_resource("orders", order).unwrap();
//!
//! let text = serialize(&orders).unwrap();
//! let decoded = parse(&text).unwrap();
//! assert_eq!(orders, decoded);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Link, RelationGroup, Resource, builder)
//! - [`codec`]: JSON serialization and extraction
//! - [`error`]: Error types
//! - [`limits`]: Reserved names and parsing limits
//!
//! # Untrusted Input
//!
//! Parsing rejects documents whose `_embedded` nesting exceeds
//! [`limits::MAX_EMBED_DEPTH`] (configurable through
//! [`codec::ParseOptions`]), and reports malformed `_links`/`_embedded`
//! sections with the JSON path of the offending value.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{HalCodec, JsonCodec, ParseOptions, SerdeJson, parse, serialize, serialize_pretty};
pub use error::{ErrorCode, HalError};
pub use model::{Link, LinkOptions, Relation, RelationGroup, Resource, ResourceBuilder, ToCanonicalMap};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Media type of HAL JSON documents.
pub const MEDIA_TYPE: &str = "application/hal+json";
