//! # omie-payload — Schema-Validated API Payloads
//!
//! This crate provides the typed, schema-validated payload layer of the
//! Omie ERP contract: every record the API exchanges (clients, service
//! orders, registers) is a [`Payload`] holding an insertion-ordered
//! field set, validated against a per-type [`Schema`] of composable
//! [`Rule`]s.
//!
//! ## Responsibilities
//!
//! - **Field storage:** [`FieldSet`] keeps fields in wire declaration
//!   order; setters normalize (uppercase, document masks, date types)
//!   and never fail, so payloads build incrementally from partial input.
//!
//! - **Validation:** `assert` runs the schema fail-fast, then recurses
//!   through nested payloads and collections. Failures carry dotted,
//!   indexed field paths (`Cabecalho.nValorTotal`,
//!   `ServicosPrestados[1].nQtde`).
//!
//! - **Import/export:** `import` builds a payload from an untyped JSON
//!   body, failing with [`ImportError`] on shape problems; `to_object`
//!   exports the ordered wire object, omitting null fields.
//!
//! ## Design
//!
//! Nested sections are closed enums ([`AnyPayload`], [`AnyCollection`])
//! rather than trait objects: instance-of rules reduce to a tag
//! comparison and recursion needs no downcasting. Validation never
//! coerces; all coercion happens in setters and import casts
//! (`omie_core::format`), which warn via `tracing` when they fall back.

pub mod address;
pub mod any;
pub mod bank_account;
pub mod category;
pub mod characteristic;
pub mod city;
pub mod client;
pub mod collection;
pub mod department;
pub mod list;
pub mod payload;
pub mod rule;
pub mod schema;
pub mod service_listing;
pub mod service_order;
pub mod tag;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use any::{AnyCollection, AnyPayload, PayloadKind};
pub use collection::{Collection, CollectionItem};
pub use list::ListPage;
pub use payload::Payload;
pub use rule::{DocumentRoute, Rule};
pub use schema::{FieldPolicy, Schema};
pub use value::{FieldSet, Value, ValueKind};

pub use address::AddressPayload;
pub use bank_account::BankAccountPayload;
pub use category::CategoryPayload;
pub use characteristic::{CharacteristicCollection, CharacteristicPayload};
pub use city::CityPayload;
pub use client::ClientPayload;
pub use department::DepartmentPayload;
pub use service_listing::ServiceListingPayload;
pub use service_order::{
    AdditionalDataPayload, DepartmentCollection, HeaderPayload, InstallmentCollection,
    InstallmentPayload, OrderDepartmentPayload, OrderEmailPayload, OrderServicePayload,
    ServiceCollection, ServiceOrderPayload,
};
pub use tag::{TagCollection, TagPayload};

pub use omie_core::error::{ImportError, ValidationError};
