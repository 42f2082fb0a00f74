//! Client payload, with its nested address, tags and characteristics.
//!
//! ## Export shape
//!
//! The export is flat: the address fields are merged into the client's
//! own object rather than nested under a key, and the `tags` /
//! `caracteristicas` arrays only appear when non-empty.

use omie_core::error::{ImportError, ValidationError};
use omie_core::format;

use crate::address::AddressPayload;
use crate::characteristic::CharacteristicCollection;
use crate::payload::{body_object, require_keys, Payload};
use crate::rule::{DocumentRoute, Rule};
use crate::schema::{FieldPolicy, Schema};
use crate::tag::TagCollection;
use crate::value::{FieldSet, ValueKind};

/// A client (individual or company) record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientPayload {
    fields: FieldSet,
    address: Option<AddressPayload>,
    tags: TagCollection,
    characteristics: CharacteristicCollection,
}

impl ClientPayload {
    /// Create a client from its identifying fields.
    ///
    /// `razao_social` is the full name (individual) or company name,
    /// `nome_fantasia` the nickname or trade name.
    pub fn new(razao_social: &str, nome_fantasia: &str, cnpj_cpf: &str, email: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "codigo_cliente_omie",
                "codigo_cliente_integracao",
                "razao_social",
                "nome_fantasia",
                "contato",
                "email",
                "cnpj_cpf",
            ]),
            address: None,
            tags: TagCollection::new(),
            characteristics: CharacteristicCollection::new(),
        };
        payload
            .change_name(razao_social)
            .change_nickname(nome_fantasia)
            .change_document(cnpj_cpf)
            .change_email(email);
        payload
    }

    /// Attach the address.
    pub fn change_address(&mut self, endereco: AddressPayload) -> &mut Self {
        self.address = Some(endereco);
        self
    }

    /// Change the `codigo_cliente_integracao` field.
    pub fn change_integration_code(&mut self, value: &str) -> &mut Self {
        self.fields.set("codigo_cliente_integracao", value);
        self
    }

    /// Change the `codigo_cliente_omie` field.
    pub fn change_omie_code(&mut self, value: i64) -> &mut Self {
        self.fields.set("codigo_cliente_omie", value);
        self
    }

    /// Change the `razao_social` field, uppercased.
    pub fn change_name(&mut self, value: &str) -> &mut Self {
        self.fields.set("razao_social", format::upper(value));
        self
    }

    /// Change the `nome_fantasia` field, uppercased.
    pub fn change_nickname(&mut self, value: &str) -> &mut Self {
        self.fields.set("nome_fantasia", format::upper(value));
        self
    }

    /// Change the `contato` field, uppercased.
    pub fn change_contact_name(&mut self, value: &str) -> &mut Self {
        self.fields.set("contato", format::upper(value));
        self
    }

    /// Change the `email` field.
    pub fn change_email(&mut self, value: &str) -> &mut Self {
        self.fields.set("email", value);
        self
    }

    /// Change the `cnpj_cpf` field through the CPF/CNPJ mask.
    pub fn change_document(&mut self, value: &str) -> &mut Self {
        self.fields.set("cnpj_cpf", format::cpf_or_cnpj(value));
        self
    }

    /// Get the `razao_social` field.
    pub fn name(&self) -> &str {
        self.fields.str_field("razao_social").unwrap_or("")
    }

    /// Get the `nome_fantasia` field.
    pub fn nickname(&self) -> &str {
        self.fields.str_field("nome_fantasia").unwrap_or("")
    }

    /// Get the `contato` field.
    pub fn contact_name(&self) -> &str {
        self.fields.str_field("contato").unwrap_or("")
    }

    /// Get the `email` field.
    pub fn email(&self) -> &str {
        self.fields.str_field("email").unwrap_or("")
    }

    /// Get the `cnpj_cpf` field.
    pub fn document(&self) -> &str {
        self.fields.str_field("cnpj_cpf").unwrap_or("")
    }

    /// Get the `codigo_cliente_integracao` field.
    pub fn integration_code(&self) -> Option<&str> {
        self.fields.str_field("codigo_cliente_integracao")
    }

    /// Get the `codigo_cliente_omie` field.
    pub fn omie_code(&self) -> Option<i64> {
        self.fields.int_field("codigo_cliente_omie")
    }

    /// Get the address, if any.
    pub fn address(&self) -> Option<&AddressPayload> {
        self.address.as_ref()
    }

    /// Get the tags.
    pub fn tags(&self) -> &TagCollection {
        &self.tags
    }

    /// Get the tags, mutably.
    pub fn tags_mut(&mut self) -> &mut TagCollection {
        &mut self.tags
    }

    /// Get the characteristics.
    pub fn characteristics(&self) -> &CharacteristicCollection {
        &self.characteristics
    }

    /// Get the characteristics, mutably.
    pub fn characteristics_mut(&mut self) -> &mut CharacteristicCollection {
        &mut self.characteristics
    }
}

impl Payload for ClientPayload {
    fn schema() -> Schema {
        Schema::new()
            .field(
                "razao_social",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(60)]),
            )
            .field(
                "cnpj_cpf",
                FieldPolicy::required(vec![
                    Rule::Type(ValueKind::Str),
                    Rule::MaxLength(20),
                    Rule::Document(DocumentRoute::Either),
                ]),
            )
            .field(
                "nome_fantasia",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(100)]),
            )
            .field(
                "contato",
                FieldPolicy::optional(vec![Rule::Type(ValueKind::Str), Rule::MaxLength(100)]),
            )
            .field(
                "email",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str)]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn assert(&self) -> Result<(), ValidationError> {
        Self::schema().assert(&self.fields)?;
        if let Some(address) = &self.address {
            address.assert().map_err(|e| e.prefixed("endereco"))?;
        }
        self.tags.assert()?;
        self.characteristics.assert()?;
        Ok(())
    }

    fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut out = self.fields.to_object();
        if !self.tags.is_empty() {
            out.insert("tags".into(), serde_json::Value::Array(self.tags.to_list()));
        }
        if !self.characteristics.is_empty() {
            out.insert(
                "caracteristicas".into(),
                serde_json::Value::Array(self.characteristics.to_list()),
            );
        }
        if let Some(address) = &self.address {
            // Address fields are flattened into the client object.
            out.extend(address.to_object());
        }
        out
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["razao_social", "nome_fantasia", "cnpj_cpf", "email"])?;

        let mut client = Self::new(
            &format::string_of(&obj["razao_social"]),
            &format::string_of(&obj["nome_fantasia"]),
            &format::string_of(&obj["cnpj_cpf"]),
            &format::string_of(&obj["email"]),
        );

        if let Some(v) = obj.get("contato") {
            client.change_contact_name(&format::string_of(v));
        }
        if let Some(v) = obj.get("codigo_cliente_integracao") {
            client.change_integration_code(&format::string_of(v));
        }
        if let Some(v) = obj.get("codigo_cliente_omie") {
            client.change_omie_code(format::int_of(v));
        }

        // The address fields live flat inside the same object.
        if obj.contains_key("endereco") {
            client.address = Some(AddressPayload::import(body)?);
        }
        if obj.contains_key("caracteristicas") {
            client.characteristics = CharacteristicCollection::import(body)?;
        }
        if obj.contains_key("tags") {
            client.tags = TagCollection::import(body)?;
        }

        Ok(client)
    }
}
