//! Order department allocation (`Departamentos` member).

use omie_core::error::ImportError;
use omie_core::format;

use crate::any::PayloadKind;
use crate::collection::{Collection, CollectionItem};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// One department's share of an order, by percentage or fixed amount
/// (`nValorFixo` defaults to `"N"`).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDepartmentPayload {
    fields: FieldSet,
}

/// The `Departamentos` list.
pub type DepartmentCollection = Collection<OrderDepartmentPayload>;

impl OrderDepartmentPayload {
    /// Create a department allocation.
    pub fn new(code: &str, percentage: i64, amount: f64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&["cCodDepto", "nPerc", "nValor", "nValorFixo"]),
        };
        payload.fields.set("nValorFixo", "N");
        payload
            .change_code(code)
            .change_percentage(percentage)
            .change_amount(amount);
        payload
    }

    /// Change the `cCodDepto` field.
    pub fn change_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("cCodDepto", value);
        self
    }

    /// Change the `nPerc` field.
    pub fn change_percentage(&mut self, value: i64) -> &mut Self {
        self.fields.set("nPerc", value);
        self
    }

    /// Change the `nValor` field.
    pub fn change_amount(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValor", value);
        self
    }

    /// Change the `nValorFixo` flag.
    pub fn change_fixed_amount(&mut self, value: bool) -> &mut Self {
        self.fields.set("nValorFixo", if value { "S" } else { "N" });
        self
    }

    /// Get the `cCodDepto` field.
    pub fn code(&self) -> &str {
        self.fields.str_field("cCodDepto").unwrap_or("")
    }

    /// Get the `nPerc` field.
    pub fn percentage(&self) -> i64 {
        self.fields.int_field("nPerc").unwrap_or(0)
    }

    /// Get the `nValor` field.
    pub fn amount(&self) -> f64 {
        self.fields.float_field("nValor").unwrap_or(0.0)
    }

    /// Get the `nValorFixo` flag.
    pub fn fixed_amount(&self) -> &str {
        self.fields.str_field("nValorFixo").unwrap_or("N")
    }
}

impl Payload for OrderDepartmentPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "cCodDepto",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(40)]),
            )
            .field(
                "nPerc",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nValor",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Float)]),
            )
            .field(
                "nValorFixo",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::allowed(&["S", "N"])]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cCodDepto", "nPerc", "nValor"])?;
        Ok(Self::new(
            &format::string_of(&obj["cCodDepto"]),
            format::int_of(&obj["nPerc"]),
            format::float_of(&obj["nValor"]),
        ))
    }
}

impl CollectionItem for OrderDepartmentPayload {
    const WIRE_KEY: &'static str = "Departamentos";
    const COLLECTION_KIND: PayloadKind = PayloadKind::Departments;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_amount_defaults_off_and_toggles_on_wire_flags() {
        let mut dept = OrderDepartmentPayload::new("D-01", 100, 250.0);
        assert_eq!(dept.fixed_amount(), "N");
        assert!(dept.assert().is_ok());

        dept.change_fixed_amount(true);
        assert_eq!(dept.to_object()["nValorFixo"], "S");
    }

    #[test]
    fn import_requires_code_percentage_and_amount() {
        let err = OrderDepartmentPayload::import(&serde_json::json!({
            "cCodDepto": "D-01", "nValor": 250.0,
        }))
        .unwrap_err();
        assert_eq!(err, ImportError::missing("nPerc"));
    }
}
