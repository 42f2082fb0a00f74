//! Provided service line (`ServicosPrestados` member).

use omie_core::error::ImportError;
use omie_core::format;

use crate::any::PayloadKind;
use crate::collection::{Collection, CollectionItem};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// One service line of an order: service code, quantity, unit price and
/// an optional discount (`cTpDesconto` is `"V"` for value, `"P"` for
/// percentage).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderServicePayload {
    fields: FieldSet,
}

/// The `ServicosPrestados` list.
pub type ServiceCollection = Collection<OrderServicePayload>;

impl OrderServicePayload {
    /// Create a service line.
    pub fn new(code: i64, quantity: i64, amount: f64) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "nCodServico",
                "nQtde",
                "nValUnit",
                "cTpDesconto",
                "nValorDesconto",
            ]),
        };
        payload
            .change_code(code)
            .change_quantity(quantity)
            .change_amount(amount);
        payload
    }

    /// Change the `nCodServico` field.
    pub fn change_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("nCodServico", value);
        self
    }

    /// Change the `nQtde` field.
    pub fn change_quantity(&mut self, value: i64) -> &mut Self {
        self.fields.set("nQtde", value);
        self
    }

    /// Change the `nValUnit` field.
    pub fn change_amount(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValUnit", value);
        self
    }

    /// Change the `cTpDesconto` field.
    pub fn change_discount_type(&mut self, value: &str) -> &mut Self {
        self.fields.set("cTpDesconto", value);
        self
    }

    /// Change the `nValorDesconto` field.
    pub fn change_discount_amount(&mut self, value: f64) -> &mut Self {
        self.fields.set("nValorDesconto", value);
        self
    }

    /// Get the `nCodServico` field.
    pub fn code(&self) -> i64 {
        self.fields.int_field("nCodServico").unwrap_or(0)
    }

    /// Get the `nQtde` field.
    pub fn quantity(&self) -> i64 {
        self.fields.int_field("nQtde").unwrap_or(0)
    }

    /// Get the `nValUnit` field.
    pub fn amount(&self) -> f64 {
        self.fields.float_field("nValUnit").unwrap_or(0.0)
    }

    /// Get the `cTpDesconto` field.
    pub fn discount_type(&self) -> Option<&str> {
        self.fields.str_field("cTpDesconto")
    }

    /// Get the `nValorDesconto` field.
    pub fn discount_amount(&self) -> Option<f64> {
        self.fields.float_field("nValorDesconto")
    }
}

impl Payload for OrderServicePayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "nCodServico",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nQtde",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Int)]),
            )
            .field(
                "nValUnit",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Float)]),
            )
            .field(
                "cTpDesconto",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::allowed(&["V", "P"])]),
            )
            .field(
                "nValorDesconto",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Float)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["nCodServico", "nQtde", "nValUnit"])?;
        Ok(Self::new(
            format::int_of(&obj["nCodServico"]),
            format::int_of(&obj["nQtde"]),
            format::float_of(&obj["nValUnit"]),
        ))
    }
}

impl CollectionItem for OrderServicePayload {
    const WIRE_KEY: &'static str = "ServicosPrestados";
    const COLLECTION_KIND: PayloadKind = PayloadKind::Services;
}
