//! # Homogeneous payload collections
//!
//! [`Collection<T>`] is an ordered list of payloads of one type. Order is
//! preserved through every operation and on export; duplicates by value
//! are permitted (no deduplication). Removal drops the first element
//! equal to the argument and is a no-op when nothing matches.
//!
//! The [`CollectionItem`] trait pins the wire key the list serializes
//! under and the variant tag instance-of rules compare against.

use omie_core::error::{ImportError, ValidationError};

use crate::any::PayloadKind;
use crate::payload::Payload;

/// A payload type that can be collected into a wire list.
pub trait CollectionItem: Payload {
    /// Wire key under which the homogeneous list serializes
    /// (e.g. `tags`, `ServicosPrestados`).
    const WIRE_KEY: &'static str;

    /// Variant tag of the collection, for instance-of rules.
    const COLLECTION_KIND: PayloadKind;
}

/// Ordered list of homogeneous payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: CollectionItem> {
    items: Vec<T>,
}

impl<T: CollectionItem> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CollectionItem> Collection<T> {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, preserving insertion order.
    pub fn add(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Remove the first element equal to `item`. No-op when absent —
    /// not an error.
    pub fn remove(&mut self, item: &T) -> &mut Self {
        if let Some(index) = self.items.iter().position(|i| i == item) {
            self.items.remove(index);
        }
        self
    }

    /// Members in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Member count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate every member in order.
    ///
    /// Failures carry an indexed path such as
    /// `ServicosPrestados[1].nQtde` so the caller knows which member
    /// (and which of its fields) failed.
    pub fn assert(&self) -> Result<(), ValidationError> {
        for (index, item) in self.items.iter().enumerate() {
            item.assert()
                .map_err(|e| e.prefixed(&format!("{}[{index}]", T::WIRE_KEY)))?;
        }
        Ok(())
    }

    /// Export members in order as JSON objects. An empty collection
    /// exports as an empty array; whether that array is emitted or the
    /// field omitted entirely is the owning payload's decision.
    pub fn to_list(&self) -> Vec<serde_json::Value> {
        self.items
            .iter()
            .map(|i| serde_json::Value::Object(i.to_object()))
            .collect()
    }

    /// Build a collection from the raw body's wire-key array.
    ///
    /// A missing or null wire key yields an empty collection (absent
    /// optional sections import as empty); each present member must
    /// import cleanly.
    pub fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        match body.get(T::WIRE_KEY) {
            Some(entries) => Self::from_entries(entries),
            None => Ok(Self::new()),
        }
    }

    /// Build a collection from a bare JSON array of members. Anything
    /// that is not an array yields an empty collection.
    pub fn from_entries(entries: &serde_json::Value) -> Result<Self, ImportError> {
        let mut collection = Self::new();
        if let serde_json::Value::Array(entries) = entries {
            for entry in entries {
                collection.add(T::import(entry)?);
            }
        }
        Ok(collection)
    }
}

impl<'a, T: CollectionItem> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagPayload;

    #[test]
    fn add_preserves_order_and_duplicates() {
        let mut tags = Collection::<TagPayload>::new();
        tags.add(TagPayload::new("vip"))
            .add(TagPayload::new("newsletter"))
            .add(TagPayload::new("vip")); // duplicate by value is fine

        assert_eq!(tags.len(), 3);
        let exported = tags.to_list();
        assert_eq!(exported[0]["tag"], "vip");
        assert_eq!(exported[1]["tag"], "newsletter");
        assert_eq!(exported[2]["tag"], "vip");
    }

    #[test]
    fn remove_drops_only_the_first_match() {
        let mut tags = Collection::<TagPayload>::new();
        tags.add(TagPayload::new("vip"))
            .add(TagPayload::new("vip"));

        tags.remove(&TagPayload::new("vip"));
        assert_eq!(tags.len(), 1);

        // Removing a missing element is a no-op, not an error.
        tags.remove(&TagPayload::new("absent"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn empty_collection_exports_empty_array() {
        let tags = Collection::<TagPayload>::new();
        assert!(tags.is_empty());
        assert_eq!(tags.to_list(), Vec::<serde_json::Value>::new());
    }

    #[test]
    fn import_missing_key_yields_empty() {
        let body = serde_json::json!({});
        let tags = Collection::<TagPayload>::import(&body).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn import_reads_wire_key_array() {
        let body = serde_json::json!({ "tags": [{ "tag": "a" }, { "tag": "b" }] });
        let tags = Collection::<TagPayload>::import(&body).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.items()[0].tag(), "a");
    }

    /// Minimal item whose required field can actually be left null, so
    /// the indexed-path behavior of `assert` is observable.
    #[derive(Debug, Clone, PartialEq)]
    struct ProbeItem {
        fields: FieldSet,
    }

    use crate::rule::Rule;
    use crate::schema::{FieldPolicy, Schema};
    use crate::value::{FieldSet, ValueKind};

    impl ProbeItem {
        fn new(campo: Option<&str>) -> Self {
            let mut fields = FieldSet::with_keys(&["campo"]);
            if let Some(campo) = campo {
                fields.set("campo", campo);
            }
            Self { fields }
        }
    }

    impl Payload for ProbeItem {
        fn schema() -> Schema {
            Schema::new().field(
                "campo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
        }

        fn field_set(&self) -> &FieldSet {
            &self.fields
        }

        fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
            Ok(Self::new(body.get("campo").and_then(|v| v.as_str())))
        }
    }

    impl CollectionItem for ProbeItem {
        const WIRE_KEY: &'static str = "campos";
        const COLLECTION_KIND: PayloadKind = PayloadKind::Characteristics;
    }

    #[test]
    fn member_failure_carries_indexed_path() {
        let mut probes = Collection::<ProbeItem>::new();
        probes.add(ProbeItem::new(Some("ok")));
        probes.add(ProbeItem::new(None));

        let err = probes.assert().unwrap_err();
        assert_eq!(err.field(), "campos[1].campo");
        assert!(matches!(
            err,
            omie_core::error::ValidationError::MissingRequiredField { .. }
        ));
    }
}
