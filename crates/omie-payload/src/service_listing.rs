//! Service register payload (`cCodigo`, `nCodServ`, `cDescricao`).
//!
//! The upstream listing endpoint returns this record split across two
//! sub-objects (`cabecalho` and `intListar`); `import` reads that shape
//! and flattens it into the payload's own field set.

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A service entry from the upstream service register.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceListingPayload {
    fields: FieldSet,
}

impl ServiceListingPayload {
    /// Create a service entry.
    pub fn new(sku: &str, code: i64, description: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["cCodigo", "nCodServ", "cDescricao"]),
        };
        payload
            .change_sku(sku)
            .change_code(code)
            .change_description(description);
        payload
    }

    /// Change the `cCodigo` field.
    pub fn change_sku(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodigo", value);
        self
    }

    /// Change the `nCodServ` field.
    pub fn change_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodServ", value);
        self
    }

    /// Change the `cDescricao` field.
    pub fn change_description(&mut self, value: &str) -> &mut Self {
        self.fields.set("cDescricao", value);
        self
    }

    /// Get the `cCodigo` field.
    pub fn sku(&self) -> &str {
        self.fields.str_field("cCodigo").unwrap_or("")
    }

    /// Get the `nCodServ` field.
    pub fn code(&self) -> i64 {
        self.fields.int_field("nCodServ").unwrap_or(0)
    }

    /// Get the `cDescricao` field.
    pub fn description(&self) -> &str {
        self.fields.str_field("cDescricao").unwrap_or("")
    }
}

impl Payload for ServiceListingPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "cCodigo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "nCodServ",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "cDescricao",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(50)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    /// Imports from the listing response shape: `cabecalho.cCodigo`,
    /// `intListar.nCodServ`, `cabecalho.cDescricao`.
    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cabecalho", "intListar"])?;

        let header = &obj["cabecalho"];
        let listing = &obj["intListar"];
        Ok(Self::new(
            &format::string_of(header.get("cCodigo").unwrap_or(&serde_json::Value::Null)),
            format::int_of(listing.get("nCodServ").unwrap_or(&serde_json::Value::Null)),
            &format::string_of(header.get("cDescricao").unwrap_or(&serde_json::Value::Null)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_flattens_the_listing_shape() {
        let body = serde_json::json!({
            "cabecalho": { "cCodigo": "SRV-01", "cDescricao": "Consultoria" },
            "intListar": { "nCodServ": 123456 },
        });
        let service = ServiceListingPayload::import(&body).unwrap();
        assert_eq!(service.sku(), "SRV-01");
        assert_eq!(service.code(), 123456);
        assert!(service.assert().is_ok());

        // Export is flat, in the payload's own vocabulary.
        let out = service.to_object();
        let keys: Vec<&String> = out.keys().collect();
        assert_eq!(keys, ["cCodigo", "nCodServ", "cDescricao"]);
    }

    #[test]
    fn import_requires_both_sections() {
        let err = ServiceListingPayload::import(&serde_json::json!({ "cabecalho": {} }))
            .unwrap_err();
        assert_eq!(err, ImportError::missing("intListar"));
    }
}
