//! Client characteristic payload (`campo`/`conteudo` pair) and its
//! collection wire binding.

use omie_core::error::ImportError;
use omie_core::format;

use crate::any::PayloadKind;
use crate::collection::{Collection, CollectionItem};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A named characteristic attached to a client: a field name (`campo`,
/// cut at 30 characters) and its content (`conteudo`, cut at 60).
#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicPayload {
    fields: FieldSet,
}

/// Ordered list of characteristics; serializes under the
/// `caracteristicas` wire key and is omitted from a client export when
/// empty.
pub type CharacteristicCollection = Collection<CharacteristicPayload>;

impl CharacteristicPayload {
    /// Create a characteristic.
    pub fn new(campo: &str, conteudo: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["campo", "conteudo"]),
        };
        payload.change_campo(campo).change_conteudo(conteudo);
        payload
    }

    /// Change the `campo` field, cut at 30 characters.
    pub fn change_campo(&mut self, campo: &str) -> &mut Self {
        self.fields.set("campo", format::cut(campo, 30));
        self
    }

    /// Change the `conteudo` field, cut at 60 characters.
    pub fn change_conteudo(&mut self, conteudo: &str) -> &mut Self {
        self.fields.set("conteudo", format::cut(conteudo, 60));
        self
    }

    /// Get the `campo` field.
    pub fn campo(&self) -> &str {
        self.fields.str_field("campo").unwrap_or("")
    }

    /// Get the `conteudo` field.
    pub fn conteudo(&self) -> &str {
        self.fields.str_field("conteudo").unwrap_or("")
    }
}

impl Payload for CharacteristicPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "campo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(30)]),
            )
            .field(
                "conteudo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["campo", "conteudo"])?;
        Ok(Self::new(
            &format::string_of(&obj["campo"]),
            &format::string_of(&obj["conteudo"]),
        ))
    }
}

impl CollectionItem for CharacteristicPayload {
    const WIRE_KEY: &'static str = "caracteristicas";
    const COLLECTION_KIND: PayloadKind = PayloadKind::Characteristics;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_cut_to_wire_limits() {
        let long = "x".repeat(100);
        let c = CharacteristicPayload::new(&long, &long);
        assert_eq!(c.campo().chars().count(), 30);
        assert_eq!(c.conteudo().chars().count(), 60);
        // Cut at set time, so the schema's max-length rules pass.
        assert!(c.assert().is_ok());
    }

    #[test]
    fn import_requires_both_keys() {
        let err =
            CharacteristicPayload::import(&serde_json::json!({ "campo": "Setor" })).unwrap_err();
        assert_eq!(err, ImportError::missing("conteudo"));
    }
}
