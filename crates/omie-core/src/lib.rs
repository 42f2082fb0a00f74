//! # omie-core
//!
//! Foundational crate for the Omie contract layer. Holds everything the
//! payload engine needs but that carries no payload semantics of its own:
//!
//! - [`error`] — the two failure kinds of the engine: [`ValidationError`]
//!   (a business rule rejected a present value) and [`ImportError`]
//!   (a raw dictionary is missing a required key). Callers can always tell
//!   "malformed input shape" from "rule violation" by the error type alone.
//! - [`document`] — CPF/CNPJ checksum validation with digit-weighted
//!   modulo arithmetic, plus length-based routing for fields that accept
//!   either document.
//! - [`email`] — structural email shape check.
//! - [`format`] — best-effort casts and canonical wire formatters
//!   (zipcode, phone, document punctuation, `dd/mm/YYYY` dates).
//!
//! Nothing in this crate performs I/O.

pub mod document;
pub mod email;
pub mod error;
pub mod format;

pub use document::{is_valid_cnpj, is_valid_cpf, is_valid_document, DocumentKind};
pub use email::is_valid_email;
pub use error::{ImportError, ValidationError};
