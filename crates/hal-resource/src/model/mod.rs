//! Data model types for HAL.
//!
//! This module contains the in-memory resource model:
//! - Links (hypermedia references)
//! - Relation groups (relation-keyed single-or-many containers)
//! - Resources (properties, links and embedded resources)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod link;
pub mod relation;
pub mod resource;

pub use builder::ResourceBuilder;
pub use link::{Link, LinkOptions};
pub use relation::{Relation, RelationGroup, ToCanonicalMap};
pub use resource::Resource;
