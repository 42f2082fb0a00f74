//! End-to-end flow: build a client and a service order the way an
//! integration would, export to the wire shape, and re-import.

use chrono::NaiveDate;

use omie_payload::{
    AdditionalDataPayload, AddressPayload, ClientPayload, HeaderPayload, ImportError,
    InstallmentCollection, InstallmentPayload, OrderEmailPayload, OrderServicePayload, Payload,
    ServiceCollection, ServiceOrderPayload, TagPayload,
};

fn build_client() -> ClientPayload {
    let mut client = ClientPayload::new(
        "Empresa Exemplo Ltda",
        "Exemplo",
        "11.222.333/0001-81",
        "contato@exemplo.com.br",
    );
    client.change_integration_code("cli-001").change_omie_code(5500);

    let mut address = AddressPayload::new("01310100");
    address
        .change_street("avenida paulista")
        .change_number("1000")
        .change_district("bela vista")
        .change_state("sp")
        .change_city("SAO PAULO (SP)");
    client.change_address(address);
    client.tags_mut().add(TagPayload::new("vip"));
    client
}

fn build_order(client: &ClientPayload) -> ServiceOrderPayload {
    let mut header = HeaderPayload::new("os-2023-0001", "0001", 300.0);
    header.associate_client(client);
    header.change_date(NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());

    let email = OrderEmailPayload::new("financeiro@exemplo.com.br");
    let data = AdditionalDataPayload::new("SAO PAULO (SP)", "1.01.02", "Ref. contrato 44", 554);

    let mut services = ServiceCollection::new();
    services
        .add(OrderServicePayload::new(101, 2, 100.0))
        .add(OrderServicePayload::new(102, 1, 100.0));

    ServiceOrderPayload::new(header, email, data, services)
}

#[test]
fn client_and_order_validate_and_export_the_wire_shape() {
    let client = build_client();
    assert!(client.assert().is_ok());

    let exported = client.to_object();
    // Flat export: address fields merged, tags present, masks applied.
    assert_eq!(exported["cnpj_cpf"], "11.222.333/0001-81");
    assert_eq!(exported["razao_social"], "EMPRESA EXEMPLO LTDA");
    assert_eq!(exported["cep"], "01310-100");
    assert_eq!(exported["endereco"], "AVENIDA PAULISTA");
    assert_eq!(exported["tags"][0]["tag"], "vip");

    let order = build_order(&client);
    assert!(order.assert().is_ok());

    let exported = order.to_object();
    assert_eq!(exported["Cabecalho"]["nCodCli"], 5500);
    assert_eq!(exported["Cabecalho"]["cCodIntCli"], "cli-001");
    assert_eq!(exported["Cabecalho"]["dDtPrevisao"], "10/01/2023");
    assert_eq!(exported["Email"]["cEnvLink"], "S");
    assert_eq!(exported["ServicosPrestados"].as_array().map(Vec::len), Some(2));
}

#[test]
fn exported_order_reimports_with_equal_required_sections() {
    let client = build_client();
    let order = build_order(&client);

    let body = serde_json::Value::Object(order.to_object());
    let reimported = ServiceOrderPayload::import(&body).unwrap();

    // Import rebuilds headers from their constructor triple; section
    // contents that travel through it must survive.
    let header = reimported.header().unwrap();
    assert_eq!(header.integration_code(), "os-2023-0001");
    assert_eq!(header.os_number(), "0001");
    assert_eq!(header.total_amount(), 300.0);
    assert_eq!(
        reimported.email().map(OrderEmailPayload::send_to),
        Some("financeiro@exemplo.com.br")
    );
    assert_eq!(
        reimported.services().map(ServiceCollection::len),
        Some(2)
    );
}

#[test]
fn validation_failure_deep_in_a_section_names_the_full_path() {
    let client = build_client();
    let mut order = build_order(&client);

    let mut installments = InstallmentCollection::new();
    installments.add(InstallmentPayload::new(
        1,
        NaiveDate::from_ymd_opt(2023, 2, 15).unwrap(),
        150.0,
        50,
    ));
    let mut bad = InstallmentPayload::new(
        2,
        NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
        150.0,
        50,
    );
    bad.change_not_generate_billet(true); // still valid
    installments.add(bad);
    order.associate_installments(installments);
    assert!(order.assert().is_ok());

    // Now a genuinely bad line: discount type outside the allowed set.
    let mut services = ServiceCollection::new();
    let mut line = OrderServicePayload::new(101, 1, 100.0);
    line.change_discount_type("K");
    services.add(line);
    order.associate_services(services);

    let err = order.assert().unwrap_err();
    assert_eq!(err.field(), "ServicosPrestados[0].cTpDesconto");
}

#[test]
fn import_shape_errors_are_distinct_from_validation_errors() {
    let err = ServiceOrderPayload::import(&serde_json::json!("not an object")).unwrap_err();
    assert_eq!(err, ImportError::NotAnObject);

    let err = ServiceOrderPayload::import(&serde_json::json!({
        "Cabecalho": { "cCodIntOS": "os-1", "cNumOS": "0001", "nValorTotal": 1.0 },
        "Email": { "cEnviarPara": "a@b.co" },
        "InformacoesAdicionais": { "cCidPrestServ": "X", "cCodCateg": "Y" },
        "ServicosPrestados": [],
    }))
    .unwrap_err();
    assert_eq!(err, ImportError::missing("cDadosAdicNF"));
}
