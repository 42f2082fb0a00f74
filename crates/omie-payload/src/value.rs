//! # Field values and the ordered field set
//!
//! [`Value`] is the tagged union a payload field can hold: a scalar, a
//! date, a nested payload, or a homogeneous payload list. Exhaustive
//! matching over it drives both validation and export — there is no
//! reflection anywhere in the engine.
//!
//! [`FieldSet`] is the insertion-ordered map from wire field name to
//! current value. Insertion order is significant: the wire contract
//! expects fields in declaration order, and export preserves it.

use chrono::NaiveDate;
use indexmap::IndexMap;

use omie_core::error::ValidationError;
use omie_core::format;

use crate::any::{AnyCollection, AnyPayload};

/// The runtime kind of a scalar value, used by type rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// UTF-8 string.
    Str,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
}

impl ValueKind {
    /// Human-readable kind name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Bool => "boolean",
        }
    }
}

/// A single field value.
///
/// Payload and list variants exist so composed payloads (a service order
/// holding its header, email and service sections) can live in the same
/// ordered field set as scalars, and so validation can recurse through
/// them generically.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent. Required rules reject it; export omits it.
    Null,
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Date value, exported in the `dd/mm/YYYY` wire format.
    Date(NaiveDate),
    /// A nested payload, exported as an object under its field key.
    Payload(Box<AnyPayload>),
    /// A homogeneous payload list, exported as an array under its key.
    List(AnyCollection),
}

impl Value {
    /// Scalar kind of this value, when it has one.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Str(_) => Some(ValueKind::Str),
            Self::Int(_) => Some(ValueKind::Int),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Null | Self::Date(_) | Self::Payload(_) | Self::List(_) => None,
        }
    }

    /// Human-readable kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Date(_) => "date",
            Self::Payload(_) => "payload",
            Self::List(_) => "list",
        }
    }

    /// True for [`Value::Null`] — the "absent" marker Required/Optional
    /// policies branch on.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Render this value as a JSON value for export.
    ///
    /// `Null` never reaches here (export skips it); it maps to JSON null
    /// for completeness.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::Int(i) => serde_json::Value::Number((*i).into()),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Date(d) => serde_json::Value::String(format::wire_date(*d)),
            Self::Payload(p) => serde_json::Value::Object(p.to_object()),
            Self::List(c) => serde_json::Value::Array(c.to_list()),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

/// Insertion-ordered mapping from wire field name to current value.
///
/// Every key present here must appear in the owning payload's schema;
/// payload constructors declare their full field list up front (possibly
/// as `Null`) so export order matches the wire contract regardless of
/// the order setters run in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSet {
    fields: IndexMap<String, Value>,
}

impl FieldSet {
    /// Empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the full ordered field list, all `Null`.
    pub fn with_keys(keys: &[&str]) -> Self {
        let mut fields = IndexMap::with_capacity(keys.len());
        for key in keys {
            fields.insert((*key).to_string(), Value::Null);
        }
        Self { fields }
    }

    /// Store a value. Preserves the key's original position when it was
    /// declared up front; appends otherwise.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Current value, if the key exists and is non-null.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// String field accessor.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer field accessor.
    pub fn int_field(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Float field accessor.
    pub fn float_field(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Date field accessor.
    pub fn date_field(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name) {
            Some(Value::Date(d)) => Some(*d),
            _ => None,
        }
    }

    /// Nested payload accessor.
    pub fn payload_field(&self, name: &str) -> Option<&AnyPayload> {
        match self.get(name) {
            Some(Value::Payload(p)) => Some(p),
            _ => None,
        }
    }

    /// Nested collection accessor.
    pub fn list_field(&self, name: &str) -> Option<&AnyCollection> {
        match self.get(name) {
            Some(Value::List(c)) => Some(c),
            _ => None,
        }
    }

    /// Iterate `(name, value)` pairs in insertion order, nulls included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Export every non-null field in insertion order.
    ///
    /// Nested payloads become objects under their field key; lists become
    /// arrays (an empty list still exports as `[]` — payloads that want
    /// empty-means-omitted handle that in their own `to_object`).
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut out = serde_json::Map::new();
        for (name, value) in &self.fields {
            if value.is_null() {
                continue;
            }
            out.insert(name.clone(), value.to_json());
        }
        out
    }

    /// Run `assert` on every nested payload/list value, prefixing nested
    /// failures with this field's key so errors carry a dotted path.
    pub fn assert_children(&self) -> Result<(), ValidationError> {
        for (name, value) in &self.fields {
            match value {
                Value::Payload(p) => p.assert().map_err(|e| e.prefixed(name))?,
                Value::List(c) => c.assert()?,
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_keys_keep_insertion_order_on_export() {
        let mut fs = FieldSet::with_keys(&["b", "a", "c"]);
        // Setters run out of order; export must not reorder.
        fs.set("c", 3i64);
        fs.set("a", 1i64);
        fs.set("b", 2i64);

        let obj = fs.to_object();
        let keys: Vec<&String> = obj.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn null_fields_are_omitted_from_export() {
        let mut fs = FieldSet::with_keys(&["kept", "dropped"]);
        fs.set("kept", "x");

        let obj = fs.to_object();
        assert!(obj.contains_key("kept"));
        assert!(!obj.contains_key("dropped"));
    }

    #[test]
    fn get_treats_null_as_absent() {
        let fs = FieldSet::with_keys(&["cep"]);
        assert!(fs.get("cep").is_none());
        assert!(fs.get("unknown").is_none());
    }

    #[test]
    fn date_exports_in_wire_format() {
        let mut fs = FieldSet::with_keys(&["dDtVenc"]);
        fs.set("dDtVenc", NaiveDate::from_ymd_opt(2022, 3, 7).unwrap());
        assert_eq!(
            fs.to_object()["dDtVenc"],
            serde_json::Value::String("07/03/2022".into())
        );
    }

    #[test]
    fn kind_names_cover_every_variant() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::from("x").kind_name(), "string");
        assert_eq!(Value::from(1i64).kind_name(), "integer");
        assert_eq!(Value::from(1.5f64).kind_name(), "float");
        assert_eq!(Value::from(true).kind_name(), "boolean");
    }
}
