//! Order installment (`Parcelas` member).

use chrono::NaiveDate;

use omie_core::error::ImportError;
use omie_core::format;

use crate::any::PayloadKind;
use crate::collection::{Collection, CollectionItem};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// One installment of an order's payment plan. `nao_gerar_boleto`
/// defaults to `"S"` (no billet generated).
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentPayload {
    fields: FieldSet,
}

/// The `Parcelas` list.
pub type InstallmentCollection = Collection<InstallmentPayload>;

impl InstallmentPayload {
    /// Create an installment.
    pub fn new(number: i64, due_date: NaiveDate, amount: f64, percentage: i64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "nParcela",
                "dDtVenc",
                "nValor",
                "nPercentual",
                "nao_gerar_boleto",
            ]),
        };
        payload.fields.set("nao_gerar_boleto", "S");
        payload
            .change_number(number)
            .change_due_date(due_date)
            .change_amount(amount)
            .change_percentage(percentage);
        payload
    }

    /// Change the `nParcela` field.
    pub fn change_number(&mut self, value: i64) -> &mut Self {
        self.fields.set("nParcela", value);
        self
    }

    /// Change the `dDtVenc` field.
    pub fn change_due_date(&mut self, value: NaiveDate) -> &mut Self {
        self.fields.set("dDtVenc", value);
        self
    }

    /// Change the `nValor` field.
    pub fn change_amount(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValor", value);
        self
    }

    /// Change the `nPercentual` field.
    pub fn change_percentage(&mut self, value: i64) -> &mut Self {
        self.fields.set("nPercentual", value);
        self
    }

    /// Change the `nao_gerar_boleto` flag; `true` suppresses the billet.
    pub fn change_not_generate_billet(&mut self, value: bool) -> &mut Self {
        self.fields
            .set("nao_gerar_boleto", if value { "S" } else { "N" });
        self
    }

    /// Get the `nParcela` field.
    pub fn number(&self) -> i64 {
        self.fields.int_field("nParcela").unwrap_or(0)
    }

    /// Get the `dDtVenc` field; falls back to today when unset.
    pub fn due_date(&self) -> NaiveDate {
        self.fields
            .date_field("dDtVenc")
            .unwrap_or_else(format::today)
    }

    /// Get the `nValor` field.
    pub fn amount(&self) -> f64 {
        self.fields.float_field("nValor").unwrap_or(0.0)
    }

    /// Get the `nPercentual` field.
    pub fn percentage(&self) -> i64 {
        self.fields.int_field("nPercentual").unwrap_or(0)
    }

    /// Get the `nao_gerar_boleto` flag.
    pub fn not_generate_billet(&self) -> &str {
        self.fields.str_field("nao_gerar_boleto").unwrap_or("S")
    }
}

impl Payload for InstallmentPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "nParcela",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field("dDtVenc", FieldPolicy::required(vec![Rule::Date]))
            .field(
                "nValor",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Float)]),
            )
            .field(
                "nPercentual",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nao_gerar_boleto",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::allowed(&["S", "N"])]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    /// Imports the due date from its `dd/mm/YYYY` wire form; an
    /// unparseable date falls back to today.
    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["nParcela", "dDtVenc", "nValor", "nPercentual"])?;
        let due_date = format::parse_wire_date(&format::string_of(&obj["dDtVenc"]))
            .unwrap_or_else(format::today);
        Ok(Self::new(
            format::int_of(&obj["nParcela"]),
            due_date,
            format::float_of(&obj["nValor"]),
            format::int_of(&obj["nPercentual"]),
        ))
    }
}

impl CollectionItem for InstallmentPayload {
    const WIRE_KEY: &'static str = "Parcelas";
    const COLLECTION_KIND: PayloadKind = PayloadKind::Installments;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_exports_in_wire_format() {
        let installment = InstallmentPayload::new(1, date(2023, 1, 15), 125.5, 50);
        assert!(installment.assert().is_ok());
        let out = installment.to_object();
        assert_eq!(out["dDtVenc"], "15/01/2023");
        assert_eq!(out["nao_gerar_boleto"], "S");
    }

    #[test]
    fn import_parses_the_wire_date() {
        let installment = InstallmentPayload::import(&serde_json::json!({
            "nParcela": 2, "dDtVenc": "15/02/2023", "nValor": 125.5, "nPercentual": 50,
        }))
        .unwrap();
        assert_eq!(installment.due_date(), date(2023, 2, 15));
        assert!(installment.assert().is_ok());
    }

    #[test]
    fn import_requires_the_full_quad() {
        let err = InstallmentPayload::import(&serde_json::json!({
            "nParcela": 1, "nValor": 10.0, "nPercentual": 100,
        }))
        .unwrap_err();
        assert_eq!(err, ImportError::missing("dDtVenc"));
    }
}
