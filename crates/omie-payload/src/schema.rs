//! # Field policies and the payload schema
//!
//! Presence and content validation are orthogonal: [`FieldPolicy`] decides
//! whether absence is an error, and delegates present values to an
//! ordered rule chain either way. The same rule list can therefore serve
//! under both policies.
//!
//! [`Schema`] is the fixed field → policy contract a payload type
//! enforces at assert time. It is declared once per payload *type*, not
//! per instance, and iterated in declaration order with fail-fast
//! semantics: the first violated rule produces the error.

use omie_core::error::ValidationError;

use crate::rule::Rule;
use crate::value::{FieldSet, Value};

/// Presence policy wrapping an ordered rule chain.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPolicy {
    /// Absence (null) is an error; present values run the rule chain.
    Required(Vec<Rule>),
    /// Absence passes trivially; present values run the rule chain.
    Optional(Vec<Rule>),
}

impl FieldPolicy {
    /// Shorthand for [`FieldPolicy::Required`].
    pub fn required(rules: Vec<Rule>) -> Self {
        Self::Required(rules)
    }

    /// Shorthand for [`FieldPolicy::Optional`].
    pub fn optional(rules: Vec<Rule>) -> Self {
        Self::Optional(rules)
    }

    /// Assert the policy against the field's live value.
    ///
    /// Each rule's `fix` runs against a transient copy before its
    /// `assert`; the stored value is never modified here. Rules run in
    /// declared order, short-circuiting on the first failure.
    pub fn assert(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let rules = match (self, value.is_null()) {
            (Self::Required(_), true) => {
                return Err(ValidationError::MissingRequiredField {
                    field: field.to_string(),
                })
            }
            (Self::Optional(_), true) => return Ok(()),
            (Self::Required(rules), false) | (Self::Optional(rules), false) => rules,
        };

        for rule in rules {
            let fixed = rule.fix(value.clone());
            rule.assert(field, &fixed)?;
        }
        Ok(())
    }
}

/// Ordered field → policy contract for one payload type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: Vec<(&'static str, FieldPolicy)>,
}

impl Schema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field contract, builder-style.
    pub fn field(mut self, name: &'static str, policy: FieldPolicy) -> Self {
        self.fields.push((name, policy));
        self
    }

    /// Declared `(field, policy)` pairs in order.
    pub fn fields(&self) -> &[(&'static str, FieldPolicy)] {
        &self.fields
    }

    /// Assert every declared field against the live field set.
    ///
    /// Fields are visited in declaration order; a missing key counts as
    /// null. Fail-fast: the first violation propagates immediately.
    pub fn assert(&self, field_set: &FieldSet) -> Result<(), ValidationError> {
        for (name, policy) in &self.fields {
            let value = field_set.get(name).cloned().unwrap_or(Value::Null);
            policy.assert(name, &value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    fn schema() -> Schema {
        Schema::new()
            .field(
                "cep",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(10)]),
            )
            .field(
                "complemento",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
    }

    #[test]
    fn required_null_fails_optional_null_passes() {
        let fs = FieldSet::with_keys(&["cep", "complemento"]);
        let err = schema().assert(&fs).unwrap_err();
        assert_eq!(err.field(), "cep");

        let mut fs = FieldSet::with_keys(&["cep", "complemento"]);
        fs.set("cep", "01310-100");
        // complemento still null — Optional passes trivially.
        assert!(schema().assert(&fs).is_ok());
    }

    #[test]
    fn rules_run_identically_under_either_policy() {
        let rules = vec![Rule::Type(ValueKind::Str), Rule::MaxLength(2)];
        let long = Value::from("SPX");

        let required = FieldPolicy::required(rules.clone()).assert("estado", &long);
        let optional = FieldPolicy::optional(rules).assert("estado", &long);
        assert_eq!(required, optional);
        assert!(required.is_err());
    }

    #[test]
    fn first_violation_wins() {
        // Type fails before MaxLength gets a chance.
        let policy = FieldPolicy::required(vec![
            Rule::Type(ValueKind::Str),
            Rule::MaxLength(1),
        ]);
        let err = policy.assert("f", &Value::Int(12)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));
    }

    #[test]
    fn missing_key_counts_as_null() {
        // Schema declares "cep" but the field set never did.
        let fs = FieldSet::new();
        let err = schema().assert(&fs).unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequiredField { .. }));
    }

    #[test]
    fn fix_applies_before_assert_without_mutating() {
        use crate::rule::DocumentRoute;

        let policy = FieldPolicy::required(vec![Rule::Document(DocumentRoute::Either)]);
        let formatted = Value::from("111.444.777-35");
        assert!(policy.assert("cnpj_cpf", &formatted).is_ok());
        // The caller's value is untouched; fix only saw a copy.
        assert_eq!(formatted, Value::from("111.444.777-35"));
    }
}
