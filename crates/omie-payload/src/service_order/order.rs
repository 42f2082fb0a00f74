//! The composed service order payload.

use omie_core::error::ImportError;

use crate::any::{AnyCollection, AnyPayload, PayloadKind};
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::FieldSet;

use super::{
    AdditionalDataPayload, DepartmentCollection, HeaderPayload, InstallmentCollection,
    OrderEmailPayload, ServiceCollection,
};

/// A complete service order: header, email, additional data and service
/// lines are required sections; department and installment lists are
/// optional.
///
/// Every section lives in the ordered field set, so validation recurses
/// through all of them with dotted paths (`Cabecalho.nValorTotal`,
/// `ServicosPrestados[0].nQtde`) and export nests each one under its
/// wire key. The required `ServicosPrestados` list exports as `[]` even
/// when empty; absent optional sections are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOrderPayload {
    fields: FieldSet,
}

impl ServiceOrderPayload {
    /// Create a service order from its required sections.
    pub fn new(
        header: HeaderPayload,
        email: OrderEmailPayload,
        additional_data: AdditionalDataPayload,
        services: ServiceCollection,
    ) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "Cabecalho",
                "Departamentos",
                "Email",
                "InformacoesAdicionais",
                "Parcelas",
                "ServicosPrestados",
            ]),
        };
        payload
            .associate_header(header)
            .associate_email(email)
            .associate_additional_data(additional_data)
            .associate_services(services);
        payload
    }

    /// Store the `Cabecalho` section.
    pub fn associate_header(&mut self, payload: HeaderPayload) -> &mut Self {
        self.fields.set("Cabecalho", AnyPayload::from(payload));
        self
    }

    /// Store the `Departamentos` section.
    pub fn associate_departments(&mut self, payload: DepartmentCollection) -> &mut Self {
        self.fields.set("Departamentos", AnyCollection::from(payload));
        self
    }

    /// Store the `Email` section.
    pub fn associate_email(&mut self, payload: OrderEmailPayload) -> &mut Self {
        self.fields.set("Email", AnyPayload::from(payload));
        self
    }

    /// Store the `InformacoesAdicionais` section.
    pub fn associate_additional_data(&mut self, payload: AdditionalDataPayload) -> &mut Self {
        self.fields
            .set("InformacoesAdicionais", AnyPayload::from(payload));
        self
    }

    /// Store the `Parcelas` section.
    pub fn associate_installments(&mut self, payload: InstallmentCollection) -> &mut Self {
        self.fields.set("Parcelas", AnyCollection::from(payload));
        self
    }

    /// Store the `ServicosPrestados` section.
    pub fn associate_services(&mut self, payload: ServiceCollection) -> &mut Self {
        self.fields
            .set("ServicosPrestados", AnyCollection::from(payload));
        self
    }

    /// Get the `Cabecalho` section.
    pub fn header(&self) -> Option<&HeaderPayload> {
        match self.fields.payload_field("Cabecalho") {
            Some(AnyPayload::Header(p)) => Some(p),
            _ => None,
        }
    }

    /// Get the `Email` section.
    pub fn email(&self) -> Option<&OrderEmailPayload> {
        match self.fields.payload_field("Email") {
            Some(AnyPayload::OrderEmail(p)) => Some(p),
            _ => None,
        }
    }

    /// Get the `InformacoesAdicionais` section.
    pub fn additional_data(&self) -> Option<&AdditionalDataPayload> {
        match self.fields.payload_field("InformacoesAdicionais") {
            Some(AnyPayload::AdditionalData(p)) => Some(p),
            _ => None,
        }
    }

    /// Get the `ServicosPrestados` section.
    pub fn services(&self) -> Option<&ServiceCollection> {
        match self.fields.list_field("ServicosPrestados") {
            Some(AnyCollection::Services(c)) => Some(c),
            _ => None,
        }
    }

    /// Get the `Parcelas` section.
    pub fn installments(&self) -> Option<&InstallmentCollection> {
        match self.fields.list_field("Parcelas") {
            Some(AnyCollection::Installments(c)) => Some(c),
            _ => None,
        }
    }

    /// Get the `Departamentos` section.
    pub fn departments(&self) -> Option<&DepartmentCollection> {
        match self.fields.list_field("Departamentos") {
            Some(AnyCollection::Departments(c)) => Some(c),
            _ => None,
        }
    }
}

impl Payload for ServiceOrderPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "Cabecalho",
                FieldPolicy::required(vec![Rule::InstanceOf(PayloadKind::Header)]),
            )
            .field(
                "Departamentos",
                FieldPolicy::optional(vec![Rule::InstanceOf(PayloadKind::Departments)]),
            )
            .field(
                "Email",
                FieldPolicy::required(vec![Rule::InstanceOf(PayloadKind::OrderEmail)]),
            )
            .field(
                "InformacoesAdicionais",
                FieldPolicy::required(vec![Rule::InstanceOf(PayloadKind::AdditionalData)]),
            )
            .field(
                "Parcelas",
                FieldPolicy::optional(vec![Rule::InstanceOf(PayloadKind::Installments)]),
            )
            .field(
                "ServicosPrestados",
                FieldPolicy::required(vec![Rule::InstanceOf(PayloadKind::Services)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    /// Imports the four required sections and, when present, the
    /// optional department and installment lists. `ServicosPrestados`
    /// arrives as a bare array of lines.
    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(
            obj,
            &["Cabecalho", "Email", "InformacoesAdicionais", "ServicosPrestados"],
        )?;

        let mut order = Self::new(
            HeaderPayload::import(&obj["Cabecalho"])?,
            OrderEmailPayload::import(&obj["Email"])?,
            AdditionalDataPayload::import(&obj["InformacoesAdicionais"])?,
            ServiceCollection::from_entries(&obj["ServicosPrestados"])?,
        );

        if let Some(entries) = obj.get("Departamentos") {
            order.associate_departments(DepartmentCollection::from_entries(entries)?);
        }
        if let Some(entries) = obj.get("Parcelas") {
            order.associate_installments(InstallmentCollection::from_entries(entries)?);
        }

        Ok(order)
    }
}
