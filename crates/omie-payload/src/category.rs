//! Financial category payload (`codigo`, `descricao`, `natureza`).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A financial category entry from the upstream register.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPayload {
    fields: FieldSet,
}

impl CategoryPayload {
    /// Create a category.
    pub fn new(code: &str, description: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["codigo", "descricao", "natureza"]),
        };
        payload.change_code(code).change_description(description);
        payload
    }

    /// Change the `codigo` field.
    pub fn change_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("codigo", value);
        self
    }

    /// Change the `descricao` field.
    pub fn change_description(&mut self, value: &str) -> &mut Self {
        self.fields.set("descricao", value);
        self
    }

    /// Change the `natureza` field.
    pub fn change_objective(&mut self, value: &str) -> &mut Self {
        self.fields.set("natureza", value);
        self
    }

    /// Get the `codigo` field.
    pub fn code(&self) -> &str {
        self.fields.str_field("codigo").unwrap_or("")
    }

    /// Get the `descricao` field.
    pub fn description(&self) -> &str {
        self.fields.str_field("descricao").unwrap_or("")
    }

    /// Get the `natureza` field.
    pub fn objective(&self) -> Option<&str> {
        self.fields.str_field("natureza")
    }
}

impl Payload for CategoryPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "codigo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(20)]),
            )
            .field(
                "descricao",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(50)]),
            )
            .field(
                "natureza",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["codigo", "descricao"])?;

        let mut payload = Self::new(
            &format::string_of(&obj["codigo"]),
            &format::string_of(&obj["descricao"]),
        );
        if let Some(natureza) = obj.get("natureza") {
            payload.change_objective(&format::string_of(natureza));
        }
        Ok(payload)
    }
}
