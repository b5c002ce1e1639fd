//! Relation-keyed containers.
//!
//! HAL groups links and embedded resources by relation name. A relation
//! holding one item serializes as a bare object; a relation holding several
//! serializes as an array. [`RelationGroup`] remembers which shape each
//! relation has while always handing callers a slice to read.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::HalError;

/// Conversion of an item into its JSON-object form.
///
/// Everything stored in a [`RelationGroup`] must implement this.
pub trait ToCanonicalMap {
    /// Returns the JSON-object form of this item.
    fn to_canonical_map(&self) -> Map<String, Value>;

    /// Returns false if this item has no JSON-object form.
    ///
    /// Relation groups reject such items on insert.
    fn has_canonical_map(&self) -> bool {
        true
    }
}

impl ToCanonicalMap for Map<String, Value> {
    fn to_canonical_map(&self) -> Map<String, Value> {
        self.clone()
    }
}

impl ToCanonicalMap for Value {
    fn to_canonical_map(&self) -> Map<String, Value> {
        match self {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        }
    }

    fn has_canonical_map(&self) -> bool {
        self.is_object()
    }
}

/// The stored shape of one relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation<T> {
    /// A single item, serialized as a bare object.
    One(T),
    /// A sequence of items, serialized as an array. Never empty.
    Many(Vec<T>),
}

impl<T> Relation<T> {
    /// Returns the items as a slice, wrapping a single item.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Relation::One(item) => std::slice::from_ref(item),
            Relation::Many(items) => items,
        }
    }

    /// Consumes the relation, returning its items as a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Relation::One(item) => vec![item],
            Relation::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns true if this relation serializes as an array.
    pub fn is_many(&self) -> bool {
        matches!(self, Relation::Many(_))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Appends items, promoting a single item to a sequence.
    fn extend(&mut self, new_items: Vec<T>) {
        let current = std::mem::replace(self, Relation::Many(Vec::new()));
        let mut items = current.into_vec();
        items.extend(new_items);
        *self = Relation::Many(items);
    }
}

impl<T: ToCanonicalMap> Relation<T> {
    /// Returns the wire form: a bare object for `One`, an array for `Many`.
    pub fn to_value(&self) -> Value {
        match self {
            Relation::One(item) => Value::Object(item.to_canonical_map()),
            Relation::Many(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Value::Object(item.to_canonical_map()))
                    .collect(),
            ),
        }
    }
}

/// Items grouped by relation name, in insertion order.
///
/// Equality compares relation names and stored shapes, ignoring the order
/// in which relations were inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGroup<T> {
    relations: IndexMap<String, Relation<T>>,
}

impl<T> Default for RelationGroup<T> {
    fn default() -> Self {
        Self {
            relations: IndexMap::new(),
        }
    }
}

impl<T: ToCanonicalMap> RelationGroup<T> {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item to a relation.
    ///
    /// A new relation stores the item bare. Adding to a relation with one
    /// item turns it into a two-item sequence; adding to a sequence appends.
    ///
    /// ```rust
    /// use hal_resource::{Link, RelationGroup};
    ///
    /// let mut links = RelationGroup::new();
    /// links.add("next", Link::from_href("/orders/1").unwrap()).unwrap();
    /// links.add("next", Link::from_href("/orders/9").unwrap()).unwrap();
    /// assert_eq!(links.get("next").unwrap().len(), 2);
    /// ```
    pub fn add(&mut self, relation: impl Into<String>, item: T) -> Result<(), HalError> {
        let relation = relation.into();
        validate_items(&relation, std::slice::from_ref(&item))?;

        match self.relations.get_mut(&relation) {
            Some(existing) => existing.extend(vec![item]),
            None => {
                self.relations.insert(relation, Relation::One(item));
            }
        }
        Ok(())
    }

    /// Adds several items to a relation in one call.
    ///
    /// A new relation is stored as a sequence even when `items` holds a
    /// single element. Items are appended to an existing relation.
    pub fn add_many(&mut self, relation: impl Into<String>, items: Vec<T>) -> Result<(), HalError> {
        let relation = relation.into();
        validate_items(&relation, &items)?;

        match self.relations.get_mut(&relation) {
            Some(existing) => existing.extend(items),
            None => {
                self.relations.insert(relation, Relation::Many(items));
            }
        }
        Ok(())
    }

    /// Replaces a relation wholesale, discarding any prior value.
    pub fn set(&mut self, relation: impl Into<String>, value: Relation<T>) -> Result<(), HalError> {
        let relation = relation.into();
        validate_items(&relation, value.as_slice())?;
        self.relations.insert(relation, value);
        Ok(())
    }
}

impl<T> RelationGroup<T> {
    /// Returns the items of a relation, or `None` if it is unknown.
    ///
    /// A single stored item is returned as a one-element slice.
    pub fn get(&self, relation: &str) -> Option<&[T]> {
        self.relations.get(relation).map(Relation::as_slice)
    }

    /// Returns the items of a relation, or `default` if it is unknown.
    pub fn fetch<'a>(&'a self, relation: &str, default: &'a [T]) -> &'a [T] {
        self.get(relation).unwrap_or(default)
    }

    /// Returns the items of a relation, or the result of `default` if it is
    /// unknown.
    pub fn fetch_or_else<F>(&self, relation: &str, default: F) -> Cow<'_, [T]>
    where
        T: Clone,
        F: FnOnce() -> Vec<T>,
    {
        match self.get(relation) {
            Some(items) => Cow::Borrowed(items),
            None => Cow::Owned(default()),
        }
    }

    /// Returns the stored shape of a relation.
    pub fn raw(&self, relation: &str) -> Option<&Relation<T>> {
        self.relations.get(relation)
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.relations.contains_key(relation)
    }

    /// Removes a relation, preserving the order of the others.
    pub fn remove(&mut self, relation: &str) -> Option<Relation<T>> {
        self.relations.shift_remove(relation)
    }

    /// Number of relations (not items).
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Iterates relation names in insertion order.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    /// Iterates relations with their items as slices.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.relations
            .iter()
            .map(|(name, relation)| (name.as_str(), relation.as_slice()))
    }

    /// Iterates relations with their stored shapes.
    pub fn iter_raw(&self) -> impl Iterator<Item = (&str, &Relation<T>)> {
        self.relations
            .iter()
            .map(|(name, relation)| (name.as_str(), relation))
    }
}

impl<T: ToCanonicalMap> ToCanonicalMap for RelationGroup<T> {
    fn to_canonical_map(&self) -> Map<String, Value> {
        self.relations
            .iter()
            .map(|(name, relation)| (name.clone(), relation.to_value()))
            .collect()
    }
}

fn validate_items<T: ToCanonicalMap>(relation: &str, items: &[T]) -> Result<(), HalError> {
    if items.is_empty() {
        return Err(HalError::InvalidItem {
            relation: relation.to_string(),
            reason: "no items given",
        });
    }
    if !items.iter().all(ToCanonicalMap::has_canonical_map) {
        return Err(HalError::InvalidItem {
            relation: relation.to_string(),
            reason: "item has no JSON object form",
        });
    }
    Ok(())
}
