//! # Validation rules
//!
//! [`Rule`] is the single-responsibility validation unit bound to one
//! field: a closed enum, matched exhaustively, with two operations:
//!
//! - [`Rule::fix`] — an idempotent normalization applied to a transient
//!   copy of the value before asserting. Only document rules are fixable
//!   (they strip punctuation); the fixed value is never stored back.
//! - [`Rule::assert`] — the pure predicate. No coercion happens here:
//!   a numeric string does not satisfy an integer rule. Coercion belongs
//!   to setters and import casts, validation only observes.

use omie_core::document::{self, DocumentKind};
use omie_core::email;
use omie_core::error::ValidationError;

use crate::any::PayloadKind;
use crate::value::{Value, ValueKind};

/// Which document family a document rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentRoute {
    /// CPF only.
    Cpf,
    /// CNPJ only.
    Cnpj,
    /// Either, routed by digit count (≤11 CPF, 12–14 CNPJ, else
    /// unroutable).
    Either,
}

/// A single validation rule for one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The value's runtime kind must exactly match.
    Type(ValueKind),
    /// The value must be a calendar date.
    Date,
    /// String character count must not exceed the limit. A negative
    /// limit is a sentinel disabling the check. Non-string values pass
    /// (pair with [`Rule::Type`] to also pin the kind).
    MaxLength(i64),
    /// The value must be an element of the fixed, case-sensitive set.
    AllowedValues(Vec<String>),
    /// The field must hold the named payload/collection variant.
    InstanceOf(PayloadKind),
    /// The value must be a valid taxpayer document.
    Document(DocumentRoute),
    /// The value must have the structural shape of an email address.
    Email,
}

impl Rule {
    /// Convenience constructor for [`Rule::AllowedValues`].
    pub fn allowed(values: &[&str]) -> Self {
        Self::AllowedValues(values.iter().map(|v| (*v).to_string()).collect())
    }

    /// Normalize a transient copy of the value before asserting.
    ///
    /// Idempotent and infallible. Only document rules transform: they
    /// strip non-digit punctuation from strings (no padding — padding is
    /// validation-time only, inside the checksum functions).
    pub fn fix(&self, value: Value) -> Value {
        match (self, value) {
            (Self::Document(_), Value::Str(s)) => Value::Str(document::strip_digits(&s)),
            (_, value) => value,
        }
    }

    /// Assert the rule against a (non-null) field value.
    ///
    /// Pure and stateless; the first failing rule in a chain wins.
    pub fn assert(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Type(expected) => {
                if value.kind() == Some(*expected) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidType {
                        field: field.to_string(),
                        expected: expected.name(),
                        found: value.kind_name(),
                    })
                }
            }

            Self::Date => match value {
                Value::Date(_) => Ok(()),
                _ => Err(ValidationError::InvalidType {
                    field: field.to_string(),
                    expected: "date",
                    found: value.kind_name(),
                }),
            },

            Self::MaxLength(max) => {
                if *max < 0 {
                    return Ok(());
                }
                match value {
                    Value::Str(s) => {
                        let len = s.chars().count();
                        if len as i64 <= *max {
                            Ok(())
                        } else {
                            Err(ValidationError::TooLong {
                                field: field.to_string(),
                                max: *max,
                                len,
                            })
                        }
                    }
                    _ => Ok(()),
                }
            }

            Self::AllowedValues(allowed) => {
                let matched = match value {
                    Value::Str(s) => allowed.iter().any(|a| a == s),
                    _ => false,
                };
                if matched {
                    Ok(())
                } else {
                    Err(ValidationError::NotAllowed {
                        field: field.to_string(),
                        value: match value {
                            Value::Str(s) => s.clone(),
                            other => other.kind_name().to_string(),
                        },
                        allowed: allowed.join(", "),
                    })
                }
            }

            Self::InstanceOf(expected) => {
                let found = match value {
                    Value::Payload(p) => Some(p.kind()),
                    Value::List(c) => Some(c.kind()),
                    _ => None,
                };
                if found == Some(*expected) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidInstance {
                        field: field.to_string(),
                        expected: expected.name(),
                        found: found.map(PayloadKind::name).unwrap_or(value.kind_name()),
                    })
                }
            }

            Self::Document(route) => {
                let raw = match value {
                    Value::Str(s) => s.as_str(),
                    _ => {
                        return Err(ValidationError::InvalidType {
                            field: field.to_string(),
                            expected: "string",
                            found: value.kind_name(),
                        })
                    }
                };
                let kind = match route {
                    DocumentRoute::Cpf => DocumentKind::Cpf,
                    DocumentRoute::Cnpj => DocumentKind::Cnpj,
                    DocumentRoute::Either => document::route(raw).map_err(|e| {
                        ValidationError::UnroutableDocumentLength {
                            field: field.to_string(),
                            digits: e.digits,
                        }
                    })?,
                };
                let valid = match kind {
                    DocumentKind::Cpf => document::is_valid_cpf(raw),
                    DocumentKind::Cnpj => document::is_valid_cnpj(raw),
                };
                if valid {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidDocument {
                        field: field.to_string(),
                        kind,
                    })
                }
            }

            Self::Email => match value {
                Value::Str(s) if email::is_valid_email(s) => Ok(()),
                _ => Err(ValidationError::InvalidEmail {
                    field: field.to_string(),
                }),
            },
        }
    }
}
