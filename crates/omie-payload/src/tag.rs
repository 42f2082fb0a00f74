//! Client tag payload (`tag`) and its collection wire binding.

use omie_core::error::ImportError;
use omie_core::format;

use crate::any::PayloadKind;
use crate::collection::{Collection, CollectionItem};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A single free-form tag attached to a client.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPayload {
    fields: FieldSet,
}

/// Ordered list of tags; serializes under the `tags` wire key and is
/// omitted from a client export when empty.
pub type TagCollection = Collection<TagPayload>;

impl TagPayload {
    /// Create a tag.
    pub fn new(tag: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["tag"]),
        };
        payload.change_tag(tag);
        payload
    }

    /// Change the `tag` field.
    pub fn change_tag(&mut self, tag: &str) -> &mut Self {
        self.fields.set("tag", tag);
        self
    }

    /// Get the `tag` field.
    pub fn tag(&self) -> &str {
        self.fields.str_field("tag").unwrap_or("")
    }
}

impl Payload for TagPayload {
    fn schema() -> Schema {
        Schema::new().field("tag", FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]))
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["tag"])?;
        Ok(Self::new(&format::string_of(&obj["tag"])))
    }
}

impl CollectionItem for TagPayload {
    const WIRE_KEY: &'static str = "tags";
    const COLLECTION_KIND: PayloadKind = PayloadKind::Tags;
}
