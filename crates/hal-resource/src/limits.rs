//! Limits and reserved names for HAL documents.

/// Property key holding the serialized links of a resource.
pub const LINKS_KEY: &str = "_links";

/// Property key holding the serialized embedded resources of a resource.
pub const EMBEDDED_KEY: &str = "_embedded";

/// Keys that may never be used as property names.
pub const RESERVED_KEYS: [&str; 2] = [LINKS_KEY, EMBEDDED_KEY];

/// Relation under which a resource's own link is stored.
pub const SELF_RELATION: &str = "self";

/// Relation under which CURIE namespaces are stored.
pub const CURIES_RELATION: &str = "curies";

/// Default maximum nesting of `_embedded` levels accepted when parsing.
///
/// The top-level document is depth 0.
pub const MAX_EMBED_DEPTH: usize = 32;

/// Returns true if `key` is reserved for `_links` or `_embedded`.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
