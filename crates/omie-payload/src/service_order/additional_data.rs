//! Service order additional data section (`InformacoesAdicionais`).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// The `InformacoesAdicionais` section: issuing city, category, invoice
/// observations and bank account. Everything here is required.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalDataPayload {
    fields: FieldSet,
}

impl AdditionalDataPayload {
    /// Create the section from its four required fields.
    pub fn new(city: &str, category: &str, observations: &str, bank_account: i64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "cCidPrestServ",
                "cCodCateg",
                "cDadosAdicNF",
                "nCodCC",
            ]),
        };
        payload
            .change_city(city)
            .change_category(category)
            .change_observations(observations)
            .change_bank_account(bank_account);
        payload
    }

    /// Change the `cCidPrestServ` field.
    pub fn change_city(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCidPrestServ", value);
        self
    }

    /// Change the `cCodCateg` field.
    pub fn change_category(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodCateg", value);
        self
    }

    /// Change the `cDadosAdicNF` field.
    pub fn change_observations(&mut self, value: &str) -> &mut Self {
        self.fields.set("cDadosAdicNF", value);
        self
    }

    /// Change the `nCodCC` field.
    pub fn change_bank_account(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodCC", value);
        self
    }

    /// Get the `cCidPrestServ` field.
    pub fn city(&self) -> &str {
        self.fields.str_field("cCidPrestServ").unwrap_or("")
    }

    /// Get the `cCodCateg` field.
    pub fn category(&self) -> &str {
        self.fields.str_field("cCodCateg").unwrap_or("")
    }

    /// Get the `cDadosAdicNF` field.
    pub fn observations(&self) -> &str {
        self.fields.str_field("cDadosAdicNF").unwrap_or("")
    }

    /// Get the `nCodCC` field.
    pub fn bank_account(&self) -> i64 {
        self.fields.int_field("nCodCC").unwrap_or(0)
    }
}

impl Payload for AdditionalDataPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "cCidPrestServ",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(40)]),
            )
            .field(
                "cCodCateg",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(20)]),
            )
            .field(
                "cDadosAdicNF",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "nCodCC",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cCidPrestServ", "cCodCateg", "cDadosAdicNF", "nCodCC"])?;
        Ok(Self::new(
            &format::string_of(&obj["cCidPrestServ"]),
            &format::string_of(&obj["cCodCateg"]),
            &format::string_of(&obj["cDadosAdicNF"]),
            format::int_of(&obj["nCodCC"]),
        ))
    }
}
