//! # Error taxonomy
//!
//! Two distinct failure kinds, kept as separate types on purpose:
//!
//! - [`ValidationError`] — a schema rule rejected a value that is present
//!   in a payload. Raised by `assert` paths only.
//! - [`ImportError`] — a raw response dictionary lacks a key that a
//!   payload constructor requires. Raised by `import` factories only,
//!   before any validation runs.
//!
//! Setters never fail; `assert` and `import` are the only two
//! failure-producing entry points of the engine, and errors propagate to
//! the caller uncaught. The engine does not log or swallow its own errors.

use thiserror::Error;

use crate::document::DocumentKind;

/// A schema rule rejected a field value.
///
/// Every variant names the offending field. For composed payloads the
/// field is a dotted path (`"Cabecalho.nValorTotal"`) built with
/// [`ValidationError::prefixed`] so an error identifies which nested
/// section failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field declared `Required` is null or absent.
    #[error("`{field}` is required")]
    MissingRequiredField {
        /// Field wire name.
        field: String,
    },

    /// The value's runtime kind does not match the declared kind.
    /// Numeric strings are not coerced here; coercion belongs to setters.
    #[error("`{field}` must be of type {expected}, found {found}")]
    InvalidType {
        /// Field wire name.
        field: String,
        /// Declared kind name.
        expected: &'static str,
        /// Actual kind name.
        found: &'static str,
    },

    /// A string exceeds the declared maximum character count.
    #[error("`{field}` must be at most {max} characters, found {len}")]
    TooLong {
        /// Field wire name.
        field: String,
        /// Declared maximum.
        max: i64,
        /// Actual character count.
        len: usize,
    },

    /// The value is not an element of the declared allowed set.
    #[error("`{field}` must be one of [{allowed}], found `{value}`")]
    NotAllowed {
        /// Field wire name.
        field: String,
        /// Offending value.
        value: String,
        /// Comma-joined allowed set, for the message.
        allowed: String,
    },

    /// A payload-valued field holds the wrong payload variant.
    #[error("`{field}` must be a {expected} payload, found {found}")]
    InvalidInstance {
        /// Field wire name.
        field: String,
        /// Expected variant name.
        expected: &'static str,
        /// Actual variant name.
        found: &'static str,
    },

    /// A CPF or CNPJ failed its checksum (or basic shape) validation.
    #[error("`{field}` is not a valid {kind}")]
    InvalidDocument {
        /// Field wire name.
        field: String,
        /// Which document algorithm rejected the value.
        kind: DocumentKind,
    },

    /// A document field routed by digit length fits neither the CPF nor
    /// the CNPJ range (more than 14 digits).
    #[error("`{field}` has {digits} digits, which fits neither CPF nor CNPJ")]
    UnroutableDocumentLength {
        /// Field wire name.
        field: String,
        /// Digit count after stripping non-digits.
        digits: usize,
    },

    /// The value does not have the structural shape of an email address.
    #[error("`{field}` is not a valid email address")]
    InvalidEmail {
        /// Field wire name.
        field: String,
    },
}

impl ValidationError {
    /// The wire name (or dotted path) of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field }
            | Self::InvalidType { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotAllowed { field, .. }
            | Self::InvalidInstance { field, .. }
            | Self::InvalidDocument { field, .. }
            | Self::UnroutableDocumentLength { field, .. }
            | Self::InvalidEmail { field } => field,
        }
    }

    /// Return the same error with the field rewritten to
    /// `"{section}.{field}"`.
    ///
    /// Used when a composed payload recurses into a nested section, so a
    /// failure inside `Cabecalho` surfaces as `Cabecalho.nValorTotal`
    /// rather than a bare `nValorTotal`.
    pub fn prefixed(self, section: &str) -> Self {
        fn join(section: &str, field: &str) -> String {
            format!("{section}.{field}")
        }
        match self {
            Self::MissingRequiredField { field } => Self::MissingRequiredField {
                field: join(section, &field),
            },
            Self::InvalidType {
                field,
                expected,
                found,
            } => Self::InvalidType {
                field: join(section, &field),
                expected,
                found,
            },
            Self::TooLong { field, max, len } => Self::TooLong {
                field: join(section, &field),
                max,
                len,
            },
            Self::NotAllowed {
                field,
                value,
                allowed,
            } => Self::NotAllowed {
                field: join(section, &field),
                value,
                allowed,
            },
            Self::InvalidInstance {
                field,
                expected,
                found,
            } => Self::InvalidInstance {
                field: join(section, &field),
                expected,
                found,
            },
            Self::InvalidDocument { field, kind } => Self::InvalidDocument {
                field: join(section, &field),
                kind,
            },
            Self::UnroutableDocumentLength { field, digits } => Self::UnroutableDocumentLength {
                field: join(section, &field),
                digits,
            },
            Self::InvalidEmail { field } => Self::InvalidEmail {
                field: join(section, &field),
            },
        }
    }
}

/// A raw dictionary handed to an `import` factory lacks a required key.
///
/// This is a precondition failure about input *shape*, not a content
/// validation failure — a payload built from a dictionary that passes
/// import may still fail `assert`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A key the payload constructor requires is absent from the raw body.
    #[error("`{field}` field is required to import this payload")]
    MissingField {
        /// Missing raw key.
        field: String,
    },

    /// The raw body is not a JSON object.
    #[error("payload body must be a JSON object")]
    NotAnObject,
}

impl ImportError {
    /// Shorthand used by every `import` factory.
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessor_covers_every_variant() {
        let errors = [
            ValidationError::MissingRequiredField {
                field: "cep".into(),
            },
            ValidationError::InvalidType {
                field: "nCodCC".into(),
                expected: "integer",
                found: "string",
            },
            ValidationError::InvalidEmail {
                field: "email".into(),
            },
        ];
        for err in &errors {
            assert!(!err.field().is_empty());
        }
    }

    #[test]
    fn prefixed_builds_dotted_path() {
        let err = ValidationError::MissingRequiredField {
            field: "nValorTotal".into(),
        };
        let err = err.prefixed("Cabecalho");
        assert_eq!(err.field(), "Cabecalho.nValorTotal");
    }

    #[test]
    fn prefixed_nests_for_deeper_sections() {
        let err = ValidationError::InvalidEmail {
            field: "cEnviarPara".into(),
        }
        .prefixed("Email");
        assert_eq!(err.field(), "Email.cEnviarPara");
    }

    #[test]
    fn import_error_is_distinct_from_validation_error() {
        // The two kinds are separate types; this test just pins the
        // message shape callers may surface to users.
        let err = ImportError::missing("razao_social");
        assert_eq!(
            err.to_string(),
            "`razao_social` field is required to import this payload"
        );
    }
}
