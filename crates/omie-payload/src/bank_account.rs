//! Bank account register payload (`nCodCC`, `descricao`).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A bank account entry from the upstream register.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccountPayload {
    fields: FieldSet,
}

impl BankAccountPayload {
    /// Create a bank account entry.
    pub fn new(code: i64, description: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["nCodCC", "descricao"]),
        };
        payload.change_code(code).change_description(description);
        payload
    }

    /// Change the `nCodCC` field.
    pub fn change_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodCC", value);
        self
    }

    /// Change the `descricao` field.
    pub fn change_description(&mut self, value: &str) -> &mut Self {
        self.fields.set("descricao", value);
        self
    }

    /// Get the `nCodCC` field.
    pub fn code(&self) -> i64 {
        self.fields.int_field("nCodCC").unwrap_or(0)
    }

    /// Get the `descricao` field.
    pub fn description(&self) -> &str {
        self.fields.str_field("descricao").unwrap_or("")
    }
}

impl Payload for BankAccountPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "nCodCC",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "descricao",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(50)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["nCodCC", "descricao"])?;
        Ok(Self::new(
            format::int_of(&obj["nCodCC"]),
            &format::string_of(&obj["descricao"]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_string_code_coerces_on_import() {
        let body = serde_json::json!({ "nCodCC": "2502", "descricao": "Conta corrente" });
        let account = BankAccountPayload::import(&body).unwrap();
        assert_eq!(account.code(), 2502);
        assert!(account.assert().is_ok());
    }

    #[test]
    fn import_requires_both_keys() {
        let err = BankAccountPayload::import(&serde_json::json!({ "nCodCC": 1 })).unwrap_err();
        assert_eq!(err, ImportError::missing("descricao"));
    }
}
