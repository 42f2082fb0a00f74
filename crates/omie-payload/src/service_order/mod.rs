//! # Service order sections
//!
//! The service order is the one composed payload of the contract: an
//! ordered set of sections (`Cabecalho`, `Email`,
//! `InformacoesAdicionais`, `ServicosPrestados`, `Departamentos`,
//! `Parcelas`), each a payload or payload collection in its own right.
//! Validation recurses through every section; export nests each one
//! under its wire key.

mod additional_data;
mod department;
mod email;
mod header;
mod installment;
mod order;
mod service;

pub use additional_data::AdditionalDataPayload;
pub use department::{DepartmentCollection, OrderDepartmentPayload};
pub use email::OrderEmailPayload;
pub use header::HeaderPayload;
pub use installment::{InstallmentCollection, InstallmentPayload};
pub use order::ServiceOrderPayload;
pub use service::{OrderServicePayload, ServiceCollection};
