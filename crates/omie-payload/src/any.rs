//! # Closed enums over nestable payloads
//!
//! The wire contract nests payloads inside payloads (a service order
//! holds its header, email and service sections). Instead of trait
//! objects and downcasting, the set of payload types that can appear as
//! a field value is a closed enum — adding a nestable payload is a
//! compile error until every dispatch site handles it, and instance-of
//! rules reduce to a tag comparison.

use omie_core::error::ValidationError;

use crate::characteristic::CharacteristicPayload;
use crate::collection::Collection;
use crate::payload::Payload;
use crate::service_order::{
    AdditionalDataPayload, HeaderPayload, InstallmentPayload, OrderDepartmentPayload,
    OrderEmailPayload, OrderServicePayload,
};
use crate::tag::TagPayload;

/// Tag naming every payload/collection variant a field can hold.
///
/// This is what instance-of rules compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Service order header section (`Cabecalho`).
    Header,
    /// Service order email section (`Email`).
    OrderEmail,
    /// Service order additional data section (`InformacoesAdicionais`).
    AdditionalData,
    /// Tag list (`tags`).
    Tags,
    /// Characteristic list (`caracteristicas`).
    Characteristics,
    /// Provided services list (`ServicosPrestados`).
    Services,
    /// Installment list (`Parcelas`).
    Installments,
    /// Department allocation list (`Departamentos`).
    Departments,
}

impl PayloadKind {
    /// Human-readable variant name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "Cabecalho",
            Self::OrderEmail => "Email",
            Self::AdditionalData => "InformacoesAdicionais",
            Self::Tags => "tags",
            Self::Characteristics => "caracteristicas",
            Self::Services => "ServicosPrestados",
            Self::Installments => "Parcelas",
            Self::Departments => "Departamentos",
        }
    }
}

/// A payload value stored inside another payload's field set.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyPayload {
    /// Service order header.
    Header(HeaderPayload),
    /// Service order email settings.
    OrderEmail(OrderEmailPayload),
    /// Service order additional data.
    AdditionalData(AdditionalDataPayload),
}

impl AnyPayload {
    /// The variant tag, for instance-of checks.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Header(_) => PayloadKind::Header,
            Self::OrderEmail(_) => PayloadKind::OrderEmail,
            Self::AdditionalData(_) => PayloadKind::AdditionalData,
        }
    }

    /// Validate the wrapped payload against its own schema.
    pub fn assert(&self) -> Result<(), ValidationError> {
        match self {
            Self::Header(p) => p.assert(),
            Self::OrderEmail(p) => p.assert(),
            Self::AdditionalData(p) => p.assert(),
        }
    }

    /// Export the wrapped payload as a JSON object.
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        match self {
            Self::Header(p) => p.to_object(),
            Self::OrderEmail(p) => p.to_object(),
            Self::AdditionalData(p) => p.to_object(),
        }
    }
}

impl From<HeaderPayload> for AnyPayload {
    fn from(p: HeaderPayload) -> Self {
        Self::Header(p)
    }
}

impl From<OrderEmailPayload> for AnyPayload {
    fn from(p: OrderEmailPayload) -> Self {
        Self::OrderEmail(p)
    }
}

impl From<AdditionalDataPayload> for AnyPayload {
    fn from(p: AdditionalDataPayload) -> Self {
        Self::AdditionalData(p)
    }
}

impl From<AnyPayload> for crate::value::Value {
    fn from(p: AnyPayload) -> Self {
        Self::Payload(Box::new(p))
    }
}

/// A homogeneous payload list stored inside a payload's field set.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCollection {
    /// Client tags.
    Tags(Collection<TagPayload>),
    /// Client characteristics.
    Characteristics(Collection<CharacteristicPayload>),
    /// Services provided on an order.
    Services(Collection<OrderServicePayload>),
    /// Order installments.
    Installments(Collection<InstallmentPayload>),
    /// Order department allocations.
    Departments(Collection<OrderDepartmentPayload>),
}

impl AnyCollection {
    /// The variant tag, for instance-of checks.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Tags(_) => PayloadKind::Tags,
            Self::Characteristics(_) => PayloadKind::Characteristics,
            Self::Services(_) => PayloadKind::Services,
            Self::Installments(_) => PayloadKind::Installments,
            Self::Departments(_) => PayloadKind::Departments,
        }
    }

    /// Validate every member; failures carry an indexed field path such
    /// as `ServicosPrestados[1].nQtde`.
    pub fn assert(&self) -> Result<(), ValidationError> {
        match self {
            Self::Tags(c) => c.assert(),
            Self::Characteristics(c) => c.assert(),
            Self::Services(c) => c.assert(),
            Self::Installments(c) => c.assert(),
            Self::Departments(c) => c.assert(),
        }
    }

    /// Export members in order as JSON objects.
    pub fn to_list(&self) -> Vec<serde_json::Value> {
        match self {
            Self::Tags(c) => c.to_list(),
            Self::Characteristics(c) => c.to_list(),
            Self::Services(c) => c.to_list(),
            Self::Installments(c) => c.to_list(),
            Self::Departments(c) => c.to_list(),
        }
    }

    /// Member count.
    pub fn len(&self) -> usize {
        match self {
            Self::Tags(c) => c.len(),
            Self::Characteristics(c) => c.len(),
            Self::Services(c) => c.len(),
            Self::Installments(c) => c.len(),
            Self::Departments(c) => c.len(),
        }
    }

    /// True when the list has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Collection<TagPayload>> for AnyCollection {
    fn from(c: Collection<TagPayload>) -> Self {
        Self::Tags(c)
    }
}

impl From<Collection<CharacteristicPayload>> for AnyCollection {
    fn from(c: Collection<CharacteristicPayload>) -> Self {
        Self::Characteristics(c)
    }
}

impl From<Collection<OrderServicePayload>> for AnyCollection {
    fn from(c: Collection<OrderServicePayload>) -> Self {
        Self::Services(c)
    }
}

impl From<Collection<InstallmentPayload>> for AnyCollection {
    fn from(c: Collection<InstallmentPayload>) -> Self {
        Self::Installments(c)
    }
}

impl From<Collection<OrderDepartmentPayload>> for AnyCollection {
    fn from(c: Collection<OrderDepartmentPayload>) -> Self {
        Self::Departments(c)
    }
}

impl From<AnyCollection> for crate::value::Value {
    fn from(c: AnyCollection) -> Self {
        Self::List(c)
    }
}
