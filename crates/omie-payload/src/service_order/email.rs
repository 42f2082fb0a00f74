//! Service order email section (`Email`).

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, require_keys, Payload};
use crate::rule::Rule;
use crate::schema::{FieldPolicy, Schema};
use crate::value::{FieldSet, ValueKind};

/// The `Email` section of a service order: where to send the invoice
/// and which attachments go along.
///
/// The boolean setters store the wire's `"S"`/`"N"` flags; defaults are
/// link on, everything else off.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEmailPayload {
    fields: FieldSet,
}

impl OrderEmailPayload {
    /// Create an email section addressed to `send_to`.
    pub fn new(send_to: &str) -> Self {
        let mut payload = Self {
            fields: FieldSet::with_keys(&[
                "cEnvBoleto",
                "cEnvRecibo",
                "cEnvLink",
                "cEnvViaUnica",
                "cEnviarPara",
            ]),
        };
        payload.fields.set("cEnvBoleto", "N");
        payload.fields.set("cEnvRecibo", "N");
        payload.fields.set("cEnvLink", "S");
        payload.fields.set("cEnvViaUnica", "N");
        payload.change_send_to(send_to);
        payload
    }

    /// Change the `cEnvBoleto` flag.
    pub fn change_send_billet(&mut self, value: bool) -> &mut Self {
        self.fields.set("cEnvBoleto", if value { "S" } else { "N" });
        self
    }

    /// Change the `cEnvRecibo` flag.
    pub fn change_send_receipt(&mut self, value: bool) -> &mut Self {
        self.fields.set("cEnvRecibo", if value { "S" } else { "N" });
        self
    }

    /// Change the `cEnvLink` flag.
    pub fn change_send_link(&mut self, value: bool) -> &mut Self {
        self.fields.set("cEnvLink", if value { "S" } else { "N" });
        self
    }

    /// Change the `cEnvViaUnica` flag.
    pub fn change_send_only_one(&mut self, value: bool) -> &mut Self {
        self.fields.set("cEnvViaUnica", if value { "S" } else { "N" });
        self
    }

    /// Change the `cEnviarPara` field.
    pub fn change_send_to(&mut self, value: &str) -> &mut Self {
        self.fields.set("cEnviarPara", value);
        self
    }

    /// Get the `cEnvBoleto` flag.
    pub fn send_billet(&self) -> &str {
        self.fields.str_field("cEnvBoleto").unwrap_or("N")
    }

    /// Get the `cEnvRecibo` flag.
    pub fn send_receipt(&self) -> &str {
        self.fields.str_field("cEnvRecibo").unwrap_or("N")
    }

    /// Get the `cEnvLink` flag.
    pub fn send_link(&self) -> &str {
        self.fields.str_field("cEnvLink").unwrap_or("N")
    }

    /// Get the `cEnvViaUnica` flag.
    pub fn send_only_one(&self) -> &str {
        self.fields.str_field("cEnvViaUnica").unwrap_or("N")
    }

    /// Get the `cEnviarPara` field.
    pub fn send_to(&self) -> &str {
        self.fields.str_field("cEnviarPara").unwrap_or("")
    }
}

impl Payload for OrderEmailPayload {
    fn schema() -> Schema {
        let flag = || {
            FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::allowed(&["S", "N"])])
        };
        Schema::new()
            .field("cEnvBoleto", flag())
            .field("cEnvRecibo", flag())
            .field("cEnvLink", flag())
            .field("cEnvViaUnica", flag())
            .field(
                "cEnviarPara",
                FieldPolicy::required(vec![Rule::Type(ValueKind::Str), Rule::Email]),
            )
    }

    fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    fn import(body: &serde_json::Value) -> Result<Self, ImportError> {
        let obj = body_object(body)?;
        require_keys(obj, &["cEnviarPara"])?;
        Ok(Self::new(&format::string_of(&obj["cEnviarPara"])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omie_core::error::ValidationError;

    #[test]
    fn defaults_send_only_the_link() {
        let email = OrderEmailPayload::new("financeiro@exemplo.com.br");
        assert_eq!(email.send_link(), "S");
        assert_eq!(email.send_billet(), "N");
        assert_eq!(email.send_receipt(), "N");
        assert_eq!(email.send_only_one(), "N");
        assert!(email.assert().is_ok());
    }

    #[test]
    fn boolean_setters_store_wire_flags() {
        let mut email = OrderEmailPayload::new("a@b.co");
        email.change_send_billet(true).change_send_link(false);
        let out = email.to_object();
        assert_eq!(out["cEnvBoleto"], "S");
        assert_eq!(out["cEnvLink"], "N");
    }

    #[test]
    fn recipient_must_look_like_an_email() {
        let email = OrderEmailPayload::new("not-an-address");
        assert_eq!(
            email.assert(),
            Err(ValidationError::InvalidEmail {
                field: "cEnviarPara".into(),
            })
        );
    }

    #[test]
    fn import_requires_the_recipient() {
        let err = OrderEmailPayload::import(&serde_json::json!({})).unwrap_err();
        assert_eq!(err, ImportError::missing("cEnviarPara"));
    }
}
