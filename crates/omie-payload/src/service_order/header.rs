//! Service order header section (`Cabecalho`).

use chrono::NaiveDate;

use omie_core::error::ImportError;
use omie_core::format;

use crate::client::ClientPayload;
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// The `Cabecalho` section of a service order.
///
/// `cEtapa`, `nQtdeParc` and `cCodParc` carry contract defaults
/// (`"10"`, `1`, `"999"`); the forecast date defaults to today.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPayload {
    fields: FieldSet,
}

impl HeaderPayload {
    /// Create a header from its required fields.
    pub fn new(integration_code: &str, os_number: &str, amount: f64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "cCodIntOS",
                "nCodOS",
                "cNumOS",
                "cCodIntCli",
                "nCodCli",
                "dDtPrevisao",
                "cEtapa",
                "nCodVend",
                "nQtdeParc",
                "cCodParc",
                "nValorTotal",
                "nValorTotalImpRet",
                "nCodCtr",
            ]),
        };
        payload.fields.set("cEtapa", "10");
        payload.fields.set("nQtdeParc", 1i64);
        payload.fields.set("cCodParc", "999");
        payload
            .change_integration_code(integration_code)
            .change_os_number(os_number)
            .change_total_amount(amount)
            .change_date(format::today());
        payload
    }

    /// Copy the client's integration and register codes into this header.
    pub fn associate_client(&mut self, client: &ClientPayload) -> &mut Self {
        if let Some(code) = client.integration_code() {
            self.change_client_integration_code(code);
        }
        if let Some(code) = client.omie_code() {
            self.change_client_code(code);
        }
        self
    }

    /// Change the `cCodIntOS` field.
    pub fn change_integration_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodIntOS", value);
        self
    }

    /// Change the `nCodOS` field.
    pub fn change_os_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodOS", value);
        self
    }

    /// Change the `cNumOS` field.
    pub fn change_os_number(&mut self, value: &str) -> &mut Self {
        self.fields.set("cNumOS", value);
        self
    }

    /// Change the `cCodIntCli` field.
    pub fn change_client_integration_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodIntCli", value);
        self
    }

    /// Change the `nCodCli` field.
    pub fn change_client_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodCli", value);
        self
    }

    /// Change the `dDtPrevisao` field.
    pub fn change_date(&mut self, value: NaiveDate) -> &mut Self {
        self.fields.set("dDtPrevisao", value);
        self
    }

    /// Change the `cEtapa` field.
    pub fn change_stage(&mut self, value: &str) -> &mut Self {
        self.fields.set("cEtapa", value);
        self
    }

    /// Change the `nCodVend` field.
    pub fn change_seller_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodVend", value);
        self
    }

    /// Change the `nQtdeParc` field.
    pub fn change_installments(&mut self, value: i64) -> &mut Self {
        self.fields.set("nQtdeParc", value);
        self
    }

    /// Change the `cCodParc` field.
    pub fn change_installment_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodParc", value);
        self
    }

    /// Change the `nValorTotal` field.
    pub fn change_total_amount(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValorTotal", value);
        self
    }

    /// Change the `nValorTotalImpRet` field.
    pub fn change_total_amount_with_tax(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValorTotalImpRet", value);
        self
    }

    /// Change the `nCodCtr` field.
    pub fn change_contract_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodCtr", value);
        self
    }

    /// Get the `cCodIntOS` field.
    pub fn integration_code(&self) -> &str {
        self.fields.str_field("cCodIntOS").unwrap_or("")
    }

    /// Get the `nCodOS` field.
    pub fn os_code(&self) -> Option<i64> {
        self.fields.int_field("nCodOS")
    }

    /// Get the `cNumOS` field.
    pub fn os_number(&self) -> &str {
        self.fields.str_field("cNumOS").unwrap_or("")
    }

    /// Get the `cCodIntCli` field.
    pub fn client_integration_code(&self) -> Option<&str> {
        self.fields.str_field("cCodIntCli")
    }

    /// Get the `nCodCli` field.
    pub fn client_code(&self) -> Option<i64> {
        self.fields.int_field("nCodCli")
    }

    /// Get the `dDtPrevisao` field; falls back to today when unset.
    pub fn date(&self) -> NaiveDate {
        self.fields
            .date_field("dDtPrevisao")
            .unwrap_or_else(format::today)
    }

    /// Get the `cEtapa` field.
    pub fn stage(&self) -> Option<&str> {
        self.fields.str_field("cEtapa")
    }

    /// Get the `nCodVend` field.
    pub fn seller_code(&self) -> Option<i64> {
        self.fields.int_field("nCodVend")
    }

    /// Get the `nQtdeParc` field.
    pub fn installments(&self) -> Option<i64> {
        self.fields.int_field("nQtdeParc")
    }

    /// Get the `cCodParc` field.
    pub fn installment_code(&self) -> Option<&str> {
        self.fields.str_field("cCodParc")
    }

    /// Get the `nValorTotal` field.
    pub fn total_amount(&self) -> f64 {
        self.fields.float_field("nValorTotal").unwrap_or(0.0)
    }

    /// Get the `nValorTotalImpRet` field.
    pub fn total_amount_with_tax(&self) -> Option<f64> {
        self.fields.float_field("nValorTotalImpRet")
    }

    /// Get the `nCodCtr` field.
    pub fn contract_code(&self) -> Option<i64> {
        self.fields.int_field("nCodCtr")
    }
}

impl Payload for HeaderPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "cCodIntOS",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field("nCodOS", FieldPolicy::optional(vec![Rule::Type(ValueKind::Int)]))
            .field(
                "cNumOS",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(15)]),
            )
            .field(
                "cCodIntCli",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "nCodCli",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field("dDtPrevisao", FieldPolicy::required(vec![Rule::Date]))
            .field(
                "cEtapa",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "nCodVend",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nQtdeParc",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "cCodParc",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
            .field(
                "nValorTotal",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Float)]),
            )
            .field(
                "nValorTotalImpRet",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Float)]),
            )
            .field(
                "nCodCtr",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Int)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cCodIntOS", "cNumOS", "nValorTotal"])?;

        let mut header = Self::new(
            &format::string_of(&obj["cCodIntOS"]),
            &format::string_of(&obj["cNumOS"]),
            format::float_of(&obj["nValorTotal"]),
        );

        if let Some(v) = obj.get("nCodOS") {
            header.change_os_code(format::int_of(v));
        }
        if let Some(v) = obj.get("cCodIntCli") {
            header.change_client_integration_code(&format::string_of(v));
        }
        if let Some(v) = obj.get("nCodCli") {
            header.change_client_code(format::int_of(v));
        }
        if let Some(v) = obj.get("dDtPrevisao") {
            if let Some(date) = format::parse_wire_date(&format::string_of(v)) {
                header.change_date(date);
            }
        }
        if let Some(v) = obj.get("cEtapa") {
            header.change_stage(&format::string_of(v));
        }
        if let Some(v) = obj.get("nCodVend") {
            header.change_seller_code(format::int_of(v));
        }
        if let Some(v) = obj.get("nQtdeParc") {
            header.change_installments(format::int_of(v));
        }
        if let Some(v) = obj.get("cCodParc") {
            header.change_installment_code(&format::string_of(v));
        }
        if let Some(v) = obj.get("nValorTotalImpRet") {
            header.change_total_amount_with_tax(format::float_of(v));
        }
        if let Some(v) = obj.get("nCodCtr") {
            header.change_contract_code(format::int_of(v));
        }

        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omie_core::error::ValidationError;

    fn sample() -> HeaderPayload {
        HeaderPayload::new("os-2022-0001", "0001", 250.0)
    }

    #[test]
    fn defaults_make_a_header_that_only_lacks_the_client() {
        let header = sample();
        assert_eq!(header.stage(), Some("10"));
        assert_eq!(header.installments(), Some(1));
        assert_eq!(header.installment_code(), Some("999"));
        assert_eq!(header.date(), format::today());
        // nCodCli is the only required field the constructor leaves open.
        assert_eq!(
            header.assert(),
            Err(ValidationError::MissingRequiredField {
                field: "nCodCli".into(),
            })
        );
    }

    #[test]
    fn associate_client_copies_both_codes() {
        let mut client =
            ClientPayload::new("Empresa", "Empresa", "11222333000181", "a@b.co");
        client.change_integration_code("cli-9").change_omie_code(77);

        let mut header = sample();
        header.associate_client(&client);
        assert_eq!(header.client_integration_code(), Some("cli-9"));
        assert_eq!(header.client_code(), Some(77));
        assert!(header.assert().is_ok());
    }

    #[test]
    fn date_exports_in_wire_format() {
        let mut header = sample();
        header
            .change_client_code(1)
            .change_date(NaiveDate::from_ymd_opt(2022, 12, 25).unwrap());
        let out = header.to_object();
        assert_eq!(out["dDtPrevisao"], "25/12/2022");
    }

    #[test]
    fn import_requires_the_constructor_triple() {
        let header = HeaderPayload::import(&serde_json::json!({
            "cCodIntOS": "os-1", "cNumOS": "0001", "nValorTotal": 99.9,
        }))
        .unwrap();
        assert_eq!(header.total_amount(), 99.9);

        let err = HeaderPayload::import(&serde_json::json!({ "cCodIntOS": "os-1" }))
            .unwrap_err();
        assert_eq!(err, ImportError::missing("cNumOS"));
    }

    #[test]
    fn import_keeps_every_field_of_an_exported_header() {
        let mut header = sample();
        header
            .change_client_code(5500)
            .change_os_code(12)
            .change_client_integration_code("cli-3")
            .change_seller_code(8)
            .change_total_amount_with_tax(240.5)
            .change_contract_code(31)
            .change_date(NaiveDate::from_ymd_opt(2023, 3, 4).unwrap());
        assert!(header.assert().is_ok());

        let back =
            HeaderPayload::import(&serde_json::Value::Object(header.to_object())).unwrap();
        assert_eq!(back, header);
        assert!(back.assert().is_ok());
    }
}
