//! City register payload (`cCod`, `cNome`, `cUF`, IBGE/SIAFI codes).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A city from the upstream register, used to fill address fields via
/// [`AddressPayload::apply_city`](crate::address::AddressPayload::apply_city).
#[derive(Debug, Clone, PartialEq)]
pub struct CityPayload {
    fields: FieldSet,
}

impl CityPayload {
    /// Create a city entry.
    pub fn new(code: &str, name: &str, uf: &str, ibge: i64, siafi: i64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["cCod", "cNome", "cUF", "nCodIBGE", "nCodSIAFI"]),
        };
        payload
            .change_code(code)
            .change_name(name)
            .change_state(uf)
            .change_ibge_code(ibge)
            .change_siafi_code(siafi);
        payload
    }

    /// Change the `cCod` field.
    pub fn change_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCod", value);
        self
    }

    /// Change the `cNome` field.
    pub fn change_name(&mut self, value: &str) -> &mut Self {
        self.fields.set("cNome", value);
        self
    }

    /// Change the `cUF` field.
    pub fn change_state(&mut self, value: &str) -> &mut Self {
        self.fields.set("cUF", value);
        self
    }

    /// Change the `nCodIBGE` field.
    pub fn change_ibge_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodIBGE", value);
        self
    }

    /// Change the `nCodSIAFI` field.
    pub fn change_siafi_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodSIAFI", value);
        self
    }

    /// Get the `cCod` field.
    pub fn code(&self) -> &str {
        self.fields.str_field("cCod").unwrap_or("")
    }

    /// Get the `cNome` field.
    pub fn name(&self) -> &str {
        self.fields.str_field("cNome").unwrap_or("")
    }

    /// Get the `cUF` field.
    pub fn state(&self) -> &str {
        self.fields.str_field("cUF").unwrap_or("")
    }

    /// Get the `nCodIBGE` field.
    pub fn ibge_code(&self) -> i64 {
        self.fields.int_field("nCodIBGE").unwrap_or(0)
    }

    /// Get the `nCodSIAFI` field.
    pub fn siafi_code(&self) -> i64 {
        self.fields.int_field("nCodSIAFI").unwrap_or(0)
    }
}

impl Payload for CityPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "cCod",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "cNome",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "cUF",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(2)]),
            )
            .field(
                "nCodIBGE",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nCodSIAFI",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Int)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cCod", "cNome", "cUF", "nCodIBGE", "nCodSIAFI"])?;
        Ok(Self::new(
            &format::string_of(&obj["cCod"]),
            &format::string_of(&obj["cNome"]),
            &format::string_of(&obj["cUF"]),
            format::int_of(&obj["nCodIBGE"]),
            format::int_of(&obj["nCodSIAFI"]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_and_export_keep_wire_names() {
        let body = serde_json::json!({
            "cCod": "3550308",
            "cNome": "São Paulo",
            "cUF": "SP",
            "nCodIBGE": 3550308,
            "nCodSIAFI": 7107,
        });
        let city = CityPayload::import(&body).unwrap();
        assert!(city.assert().is_ok());

        let out = city.to_object();
        let keys: Vec<&String> = out.keys().collect();
        assert_eq!(keys, ["cCod", "cNome", "cUF", "nCodIBGE", "nCodSIAFI"]);
        assert_eq!(out["cUF"], "SP");
    }

    #[test]
    fn state_longer_than_two_chars_fails_assert() {
        let city = CityPayload::new("1", "Test", "ABC", 1, 1);
        let err = city.assert().unwrap_err();
        assert_eq!(err.field(), "cUF");
    }
}
