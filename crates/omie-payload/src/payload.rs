//! # The `Payload` trait
//!
//! The external contract every record type implements: a schema declared
//! once per type, an ordered live field set, fail-fast validation, and
//! canonical export/import.
//!
//! ## Failure boundaries
//!
//! Setters never fail — they normalize best-effort and store, so a
//! payload can be built incrementally from partial input. `assert` and
//! `import` are the only failure-producing entry points:
//!
//! - [`Payload::assert`] runs the type's schema over the live field set
//!   (content validation), then recurses into nested payload/list values,
//!   prefixing nested failures with the field key
//!   (`"Cabecalho.nValorTotal"`).
//! - [`Payload::import`] checks the minimal raw-key set a constructor
//!   needs (shape validation, a distinct error kind), then builds the
//!   payload through the normal constructor and setters so every
//!   normalization applies.

use omie_core::error::{ImportError, ValidationError};

use crate::schema::Schema;
use crate::value::FieldSet;

/// A schema-validated record destined for the wire.
///
/// Payloads are value types: equality and export depend only on field
/// contents, never identity. Instances are not internally synchronized;
/// each is owned by one caller at a time.
pub trait Payload: Clone + PartialEq + Sized {
    /// The fixed field → rule contract for this payload type.
    fn schema() -> Schema;

    /// The live, insertion-ordered field set.
    fn field_set(&self) -> &FieldSet;

    /// Validate the payload, fail-fast on the first violation.
    ///
    /// The default runs the schema in declaration order, then recurses
    /// into every nested payload/list field. Payloads holding children
    /// outside their field set (e.g. a client's address) override this
    /// and extend the recursion.
    fn assert(&self) -> Result<(), ValidationError> {
        Self::schema().assert(self.field_set())?;
        self.field_set().assert_children()
    }

    /// Export as an ordered JSON object in wire vocabulary.
    ///
    /// Null fields are omitted; nested payloads export as objects under
    /// their field key; lists as arrays. Payloads with flattening or
    /// empty-means-omitted semantics override this.
    fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.field_set().to_object()
    }

    /// Build a payload from an untyped raw dictionary.
    ///
    /// Fails with [`ImportError`] (never [`ValidationError`]) when the
    /// body is not an object or lacks a required raw key. The returned
    /// payload has been normalized by the ordinary setters but has *not*
    /// been validated — callers run [`Payload::assert`] separately.
    fn import(body: &serde_json::Value) -> Result<Self, ImportError>;
}

/// Fetch the object form of a raw body, or fail with
/// [`ImportError::NotAnObject`].
pub(crate) fn body_object(
    body: &serde_json::Value,
) -> Result<&serde_json::Map<String, serde_json::Value>, ImportError> {
    body.as_object().ok_or(ImportError::NotAnObject)
}

/// Require the presence of every listed raw key.
///
/// Presence only — a key holding JSON null still counts as present, the
/// same way the wire contract treats explicit nulls. Content problems
/// surface later, at assert time.
pub(crate) fn require_keys(
    body: &serde_json::Map<String, serde_json::Value>,
    keys: &[&str],
) -> Result<(), ImportError> {
    for key in keys {
        if !body.contains_key(*key) {
            return Err(ImportError::missing(key));
        }
    }
    Ok(())
}
