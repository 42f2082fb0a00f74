//! Client address payload.
//!
//! ## Behavior
//!
//! Text fields are uppercased at set time, the zipcode goes through the
//! canonical `00000-000` mask, and `codigo_pais` / `pesquisar_cep` carry
//! fixed defaults (`"1058"`, `"S"`). Only the zipcode is required.

use omie_core::error::ImportError;
use omie_core::format;

use crate::city::CityPayload;
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// A Brazilian postal address attached to a client record.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressPayload {
    fields: FieldSet,
}

impl AddressPayload {
    /// Create an address from its zipcode.
    pub fn new(zipcode: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "endereco",
                "endereco_numero",
                "complemento",
                "bairro",
                "estado",
                "cidade",
                "cep",
                "codigo_pais",
                "pesquisar_cep",
            ]),
        };
        payload.fields.set("codigo_pais", "1058");
        payload.fields.set("pesquisar_cep", "S");
        payload.change_zipcode(zipcode);
        payload
    }

    /// Change the `endereco` field, uppercased.
    pub fn change_street(&mut self, value: &str) -> &mut Self {
        self.fields.set("endereco", format::upper(value));
        self
    }

    /// Change the `endereco_numero` field.
    pub fn change_number(&mut self, value: &str) -> &mut Self {
        self.fields.set("endereco_numero", value);
        self
    }

    /// Change the `complemento` field, uppercased.
    pub fn change_complement(&mut self, value: &str) -> &mut Self {
        self.fields.set("complemento", format::upper(value));
        self
    }

    /// Change the `bairro` field, uppercased.
    pub fn change_district(&mut self, value: &str) -> &mut Self {
        self.fields.set("bairro", format::upper(value));
        self
    }

    /// Change the `estado` field, uppercased.
    pub fn change_state(&mut self, value: &str) -> &mut Self {
        self.fields.set("estado", format::upper(value));
        self
    }

    /// Change the `cidade` field.
    pub fn change_city(&mut self, value: &str) -> &mut Self {
        self.fields.set("cidade", value);
        self
    }

    /// Change the `cep` field through the `00000-000` mask.
    pub fn change_zipcode(&mut self, value: &str) -> &mut Self {
        self.fields.set("cep", format::zipcode(value));
        self
    }

    /// Copy the city register's code and state into this address.
    pub fn apply_city(&mut self, city: &CityPayload) -> &mut Self {
        self.change_city(city.code());
        self.change_state(city.state());
        self
    }

    /// Get the `cep` field.
    pub fn zipcode(&self) -> &str {
        self.fields.str_field("cep").unwrap_or("")
    }

    /// Get the `cidade` field.
    pub fn city(&self) -> &str {
        self.fields.str_field("cidade").unwrap_or("")
    }

    /// Get the `estado` field.
    pub fn state(&self) -> &str {
        self.fields.str_field("estado").unwrap_or("")
    }
}

impl Payload for AddressPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "endereco",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "endereco_numero",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(10)]),
            )
            .field(
                "complemento",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "bairro",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "estado",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(2)]),
            )
            .field(
                "cidade",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(40)]),
            )
            .field(
                "cep",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(10)]),
            )
            .field(
                "codigo_pais",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "pesquisar_cep",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cep"])?;

        let mut address = Self::new(&format::string_of(&obj["cep"]));
        if let Some(v) = obj.get("endereco") {
            address.change_street(&format::string_of(v));
        }
        if let Some(v) = obj.get("endereco_numero") {
            address.change_number(&format::string_of(v));
        }
        if let Some(v) = obj.get("complemento") {
            address.change_complement(&format::string_of(v));
        }
        if let Some(v) = obj.get("bairro") {
            address.change_district(&format::string_of(v));
        }
        if let Some(v) = obj.get("estado") {
            address.change_state(&format::string_of(v));
        }
        if let Some(v) = obj.get("cidade") {
            address.change_city(&format::string_of(v));
        }
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omie_core::error::ValidationError;

    #[test]
    fn defaults_and_masking() {
        let mut address = AddressPayload::new("01310100");
        address
            .change_street("avenida paulista")
            .change_number("1000")
            .change_state("sp");

        let out = address.to_object();
        assert_eq!(out["cep"], "01310-100");
        assert_eq!(out["endereco"], "AVENIDA PAULISTA");
        assert_eq!(out["estado"], "SP");
        assert_eq!(out["codigo_pais"], "1058");
        assert_eq!(out["pesquisar_cep"], "S");
        assert!(address.assert().is_ok());
    }

    #[test]
    fn state_longer_than_two_chars_fails() {
        let mut address = AddressPayload::new("01310100");
        address.fields.set("estado", "SAO");
        assert_eq!(
            address.assert(),
            Err(ValidationError::TooLong {
                field: "estado".into(),
                max: 2,
                len: 3,
            })
        );
    }

    #[test]
    fn every_declared_field_has_a_schema_entry() {
        let address = AddressPayload::new("01310100");
        let schema = AddressPayload::schema();
        for (key, _) in address.field_set().iter() {
            assert!(
                schema.fields().iter().any(|(name, _)| *name == key),
                "no schema entry for {key}"
            );
        }
        assert!(address.assert().is_ok());
    }

    #[test]
    fn apply_city_copies_code_and_state() {
        let city = CityPayload::new("SAO PAULO (SP)", "São Paulo", "SP", 3550308, 7107);

        let mut address = AddressPayload::new("01310100");
        address.apply_city(&city);
        assert_eq!(address.city(), "SAO PAULO (SP)");
        assert_eq!(address.state(), "SP");
    }

    #[test]
    fn import_requires_only_the_zipcode() {
        let address =
            AddressPayload::import(&serde_json::json!({ "cep": "01310100" })).unwrap();
        assert_eq!(address.zipcode(), "01310-100");

        let err = AddressPayload::import(&serde_json::json!({})).unwrap_err();
        assert_eq!(err, ImportError::missing("cep"));
    }
}
