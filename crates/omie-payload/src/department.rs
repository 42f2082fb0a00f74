//! Department register payload (`codigo`, `descricao`, `estrutura`,
//! `inativo`).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A department entry from the upstream register.
///
/// The `inativo` flag uses the upstream "S"/"N" convention and is
/// toggled through [`enable`](Self::enable)/[`disable`](Self::disable)
/// rather than a raw string setter.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentPayload {
    fields: FieldSet,
}

impl DepartmentPayload {
    /// Create a department.
    pub fn new(code: &str, description: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["codigo", "descricao", "estrutura", "inativo"]),
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

    /// Change the `estrutura` field.
    pub fn change_structure(&mut self, value: &str) -> &mut Self {
        self.fields.set("estrutura", value);
        self
    }

    /// Mark the department active (`inativo` = "N").
    pub fn enable(&mut self) -> &mut Self {
        self.fields.set("inativo", "N");
        self
    }

    /// Mark the department inactive (`inativo` = "S").
    pub fn disable(&mut self) -> &mut Self {
        self.fields.set("inativo", "S");
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

    /// Get the `estrutura` field.
    pub fn structure(&self) -> Option<&str> {
        self.fields.str_field("estrutura")
    }

    /// Whether the department is active. Unset means active.
    pub fn is_enabled(&self) -> bool {
        self.fields.str_field("inativo").unwrap_or("N") == "N"
    }
}

impl Payload for DepartmentPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "codigo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(40)]),
            )
            .field(
                "descricao",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "estrutura",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "inativo",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::allowed(&["S", "N"])]),
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
        if let Some(estrutura) = obj.get("estrutura") {
            payload.change_structure(&format::string_of(estrutura));
        }
        if let Some(inativo) = obj.get("inativo") {
            if format::string_of(inativo) == "S" {
                payload.disable();
            } else {
                payload.enable();
            }
        }
        Ok(payload)
    }
}
