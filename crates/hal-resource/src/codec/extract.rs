//! Resource extraction from JSON trees.
//!
//! A document is split into properties, `_links` and `_embedded`; embedded
//! documents are extracted recursively. Each relation value is normalized
//! into a list of items, every item is converted first, and then the items
//! are added one at a time, so a one-element array comes back as a bare
//! single-item relation.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::HalError;
use crate::limits::{EMBEDDED_KEY, LINKS_KEY, MAX_EMBED_DEPTH};
use crate::model::{Link, LinkOptions, Resource};

/// Options for parsing HAL documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum `_embedded` nesting accepted. The top-level document is
    /// depth 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_EMBED_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum embedding depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Extracts a resource from a JSON tree.
pub fn extract_resource(value: &Value, options: &ParseOptions) -> Result<Resource, HalError> {
    extract_at(value, options, 0, "$")
}

fn extract_at(
    value: &Value,
    options: &ParseOptions,
    depth: usize,
    path: &str,
) -> Result<Resource, HalError> {
    if depth > options.max_depth {
        debug!(path, max_depth = options.max_depth, "embedded nesting too deep");
        return Err(HalError::DepthExceeded {
            max: options.max_depth,
        });
    }
    let Value::Object(object) = value else {
        return Err(HalError::malformed(path, "resource must be a JSON object"));
    };

    let mut resource = Resource::new();
    extract_properties(&mut resource, object)?;

    if let Some(links) = object.get(LINKS_KEY) {
        extract_links(&mut resource, links, &format!("{path}.{LINKS_KEY}"))?;
    }
    if let Some(embedded) = object.get(EMBEDDED_KEY) {
        let path = format!("{path}.{EMBEDDED_KEY}");
        extract_embedded(&mut resource, embedded, options, depth, &path)?;
    }

    Ok(resource)
}

fn extract_properties(resource: &mut Resource, object: &Map<String, Value>) -> Result<(), HalError> {
    for (key, value) in object {
        if key == LINKS_KEY || key == EMBEDDED_KEY {
            continue;
        }
        resource.set_property(key.clone(), value.clone())?;
    }
    Ok(())
}

fn extract_links(resource: &mut Resource, section: &Value, path: &str) -> Result<(), HalError> {
    let Value::Object(relations) = section else {
        return Err(HalError::malformed(path, "_links must be a JSON object"));
    };

    for (relation, value) in relations {
        let path = format!("{path}.{relation}");
        trace!(relation = relation.as_str(), "extracting links");
        let items = relation_items(
            value,
            &path,
            "relation must be a link object or an array of link objects",
        )?;
        let links = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let at = item_path(value, &path, i);
                match item {
                    Value::Object(attrs) => link_from_object(attrs, &at),
                    _ => Err(HalError::malformed(at, "link must be a JSON object")),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        for link in links {
            resource.links_mut().add(relation.clone(), link)?;
        }
    }
    Ok(())
}

fn extract_embedded(
    resource: &mut Resource,
    section: &Value,
    options: &ParseOptions,
    depth: usize,
    path: &str,
) -> Result<(), HalError> {
    let Value::Object(relations) = section else {
        return Err(HalError::malformed(path, "_embedded must be a JSON object"));
    };

    for (relation, value) in relations {
        let path = format!("{path}.{relation}");
        trace!(relation = relation.as_str(), depth, "extracting embedded resources");
        let items = relation_items(
            value,
            &path,
            "relation must be a resource object or an array of resource objects",
        )?;
        let children = items
            .iter()
            .enumerate()
            .map(|(i, item)| extract_at(item, options, depth + 1, &item_path(value, &path, i)))
            .collect::<Result<Vec<_>, _>>()?;

        for child in children {
            resource.embed_resource(relation.clone(), child)?;
        }
    }
    Ok(())
}

/// Normalizes a relation value into its items: a bare object is one item.
fn relation_items<'a>(
    value: &'a Value,
    path: &str,
    reason: &'static str,
) -> Result<&'a [Value], HalError> {
    match value {
        Value::Object(_) => Ok(std::slice::from_ref(value)),
        Value::Array(items) => Ok(items),
        _ => Err(HalError::malformed(path, reason)),
    }
}

fn item_path(value: &Value, path: &str, index: usize) -> String {
    if value.is_array() {
        format!("{path}[{index}]")
    } else {
        path.to_string()
    }
}

/// Builds a link from its JSON-object form.
///
/// `href` is required and must be a non-empty string. A `templated` that is
/// not a boolean, a `type`, `name`, `profile`, `title` or `hreflang` that is
/// not a string, and any other attribute are ignored.
pub fn link_from_object(attrs: &Map<String, Value>, path: &str) -> Result<Link, HalError> {
    let href = match attrs.get("href") {
        Some(Value::String(href)) if !href.is_empty() => href,
        Some(Value::String(_)) => return Err(HalError::malformed(path, "link href is empty")),
        Some(_) => return Err(HalError::malformed(path, "link href must be a string")),
        None => return Err(HalError::malformed(path, "link object lacks href")),
    };

    let mut options = LinkOptions::new();
    for (key, value) in attrs {
        match (key.as_str(), value) {
            ("href", _) => {}
            ("templated", Value::Bool(templated)) => options = options.templated(*templated),
            ("type", Value::String(v)) => options = options.media_type(v.as_str()),
            ("name", Value::String(v)) => options = options.name(v.as_str()),
            ("profile", Value::String(v)) => options = options.profile(v.as_str()),
            ("title", Value::String(v)) => options = options.title(v.as_str()),
            ("hreflang", Value::String(v)) => options = options.hreflang(v.as_str()),
            ("templated" | "type" | "name" | "profile" | "title" | "hreflang", _) => {
                debug!(path, attribute = key.as_str(), "ignoring mistyped link attribute");
            }
            (other, _) => debug!(path, attribute = other, "ignoring unknown link attribute"),
        }
    }

    Link::new(href.as_str(), options)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Relation;

    fn extract(value: Value) -> Result<Resource, HalError> {
        extract_resource(&value, &ParseOptions::default())
    }

    #[test]
    fn test_properties_copied_verbatim() {
        let resource = extract(json!({
            "nested": { "_links": { "self": { "href": "/not-a-link" } } },
            "list": [1, 2, 3],
        }))
        .unwrap();

        assert_eq!(
            resource.property("nested"),
            Some(&json!({ "_links": { "self": { "href": "/not-a-link" } } }))
        );
        assert!(resource.links().is_empty());
    }

    #[test]
    fn test_empty_document() {
        let resource = extract(json!({})).unwrap();
        assert_eq!(resource, Resource::new());
    }

    #[test]
    fn test_single_link_stays_bare() {
        let resource = extract(json!({ "_links": { "self": { "href": "/a" } } })).unwrap();
        assert!(matches!(resource.links().raw("self"), Some(Relation::One(_))));
    }

    #[test]
    fn test_single_element_array_collapses() {
        let resource = extract(json!({
            "_links": { "next": [{ "href": "/a" }] },
            "_embedded": { "e": [{ "x": 1 }] },
        }))
        .unwrap();
        assert!(matches!(resource.links().raw("next"), Some(Relation::One(_))));
        assert!(matches!(resource.embedded().raw("e"), Some(Relation::One(_))));

        let mut child = Resource::new();
        child.set_property("x", 1).unwrap();
        let mut expected = Resource::new();
        expected
            .add_link("next", "/a", LinkOptions::new())
            .unwrap()
            .embed_resource("e", child)
            .unwrap();
        assert_eq!(resource, expected);
    }

    #[test]
    fn test_multi_element_array_keeps_order() {
        let resource = extract(json!({
            "_links": { "next": [{ "href": "/1" }, { "href": "/2" }, { "href": "/3" }] },
        }))
        .unwrap();
        let hrefs: Vec<_> = resource.links().get("next").unwrap().iter().map(Link::href).collect();
        assert_eq!(hrefs, ["/1", "/2", "/3"]);
        assert!(resource.links().raw("next").unwrap().is_many());
    }

    #[test]
    fn test_empty_array_relation_skipped() {
        let resource = extract(json!({ "_links": { "item": [] }, "_embedded": { "e": [] } })).unwrap();
        assert!(resource.links().is_empty());
        assert!(resource.embedded().is_empty());
    }

    #[test]
    fn test_link_attributes() {
        let resource = extract(json!({
            "_links": {
                "find": {
                    "href": "/orders{?id}",
                    "templated": true,
                    "type": "application/hal+json",
                    "name": "finder",
                    "profile": "http://example.com/profile",
                    "title": "Find",
                    "hreflang": "en",
                    "deprecation": "http://example.com/deprecated",
                },
            },
        }))
        .unwrap();

        let link = &resource.links().get("find").unwrap()[0];
        assert!(link.is_templated());
        assert_eq!(link.media_type(), Some("application/hal+json"));
        assert_eq!(link.name(), Some("finder"));
        assert_eq!(link.profile(), Some("http://example.com/profile"));
        assert_eq!(link.title(), Some("Find"));
        assert_eq!(link.hreflang(), Some("en"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = extract(json!([1, 2])).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$"));
    }

    #[test]
    fn test_links_section_must_be_object() {
        let err = extract(json!({ "_links": [] })).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$._links"));
    }

    #[test]
    fn test_link_relation_shape() {
        let err = extract(json!({ "_links": { "self": "/a" } })).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$._links.self"));

        let err = extract(json!({ "_links": { "next": [{ "href": "/a" }, 3] } })).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$._links.next[1]"));
    }

    #[test]
    fn test_link_requires_href() {
        for link in [json!({}), json!({ "href": 1 }), json!({ "href": "" })] {
            let err = extract(json!({ "_links": { "self": link } })).unwrap_err();
            assert!(matches!(err, HalError::MalformedInput { .. }));
        }
    }

    #[test]
    fn test_mistyped_link_attributes_ignored() {
        let resource = extract(json!({
            "_links": { "a": { "href": "/a", "templated": "yes", "title": 5, "name": "n" } },
        }))
        .unwrap();
        let link = &resource.links().get("a").unwrap()[0];
        assert_eq!(link, &Link::new("/a", LinkOptions::new().name("n")).unwrap());
    }

    #[test]
    fn test_templated_false_accepted() {
        let resource = extract(json!({ "_links": { "a": { "href": "/a", "templated": false } } }))
            .unwrap();
        assert!(!resource.links().get("a").unwrap()[0].is_templated());
    }

    #[test]
    fn test_embedded_shape() {
        let err = extract(json!({ "_embedded": { "orders": 7 } })).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$._embedded.orders"));

        let err = extract(json!({ "_embedded": { "orders": [{}, "x"] } })).unwrap_err();
        assert!(matches!(err, HalError::MalformedInput { ref path, .. } if path == "$._embedded.orders[1]"));
    }

    #[test]
    fn test_embedded_recursion() {
        let resource = extract(json!({
            "_embedded": {
                "orders": [
                    { "_links": { "self": { "href": "/orders/1" } } },
                    {
                        "_links": { "self": { "href": "/orders/2" } },
                        "_embedded": { "customer": { "name": "ada" } },
                    },
                ],
            },
        }))
        .unwrap();

        let orders = resource.embedded().get("orders").unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].href(), Some("/orders/1"));
        let customer = &orders[1].embedded().get("customer").unwrap()[0];
        assert_eq!(customer.property("name"), Some(&json!("ada")));
    }

    #[test]
    fn test_depth_limit() {
        let mut doc = json!({ "leaf": true });
        for _ in 0..3 {
            doc = json!({ "_embedded": { "child": doc } });
        }

        let options = ParseOptions::new().max_depth(3);
        assert!(extract_resource(&doc, &options).is_ok());

        let options = ParseOptions::new().max_depth(2);
        assert_eq!(
            extract_resource(&doc, &options),
            Err(HalError::DepthExceeded { max: 2 })
        );
    }

    #[test]
    fn test_link_from_object_ignores_unknown() {
        let attrs = json!({ "href": "/a", "deprecation": "soon" });
        let Value::Object(attrs) = attrs else { unreachable!() };
        let link = link_from_object(&attrs, "$").unwrap();
        assert_eq!(link, Link::from_href("/a").unwrap());
    }
}
