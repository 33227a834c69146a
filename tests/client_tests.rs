#![cfg(feature = "client")]

mod common;

use common::*;
use evatr::client::{ClientConfig, EvatrClient};
use evatr::core::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> EvatrClient {
    EvatrClient::with_config(ClientConfig::with_base_url(format!(
        "{}/evatrRPC",
        server.uri()
    )))
    .unwrap()
}

#[tokio::test]
async fn simple_check_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/evatrRPC"))
        .and(query_param("UstId_1", "DE115235681"))
        .and(query_param("UstId_2", "CZ00177041"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SIMPLE_VALID))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = CheckRequest::simple("DE115235681", "CZ00177041");
    let result = client.check(&request).await.unwrap();

    assert!(result.valid);
    assert_eq!(result.error_code, 200);
    assert!(result.raw_xml.is_none());
}

#[tokio::test]
async fn qualified_check_sends_company_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/evatrRPC"))
        .and(query_param("Firmenname", "ŠKODA AUTO a.s."))
        .and(query_param("Ort", "Mlada Boleslav"))
        .and(query_param("PLZ", "293 01"))
        .and(query_param("Strasse", "tř. Václava Klementa 869"))
        .respond_with(ResponseTemplate::new(200).set_body_string(QUALIFIED_MATCH))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = CheckRequestBuilder::new("DE115235681", "CZ00177041")
        .company_name("ŠKODA AUTO a.s.")
        .city("Mlada Boleslav")
        .zip("293 01")
        .street("tř. Václava Klementa 869")
        .include_raw_xml(true)
        .build()
        .unwrap();
    let result = client.check_qualified(&request).await.unwrap();

    let q = result.qualified.as_ref().unwrap();
    assert_eq!(q.result_street, Some(ResultType::Match));
    assert_eq!(result.raw_xml.as_deref(), Some(QUALIFIED_MATCH));
}

#[tokio::test]
async fn simple_check_of_qualified_request_reads_no_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/evatrRPC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(QUALIFIED_MATCH))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = CheckRequestBuilder::new("DE115235681", "CZ00177041")
        .company_name("ŠKODA AUTO a.s.")
        .city("Mlada Boleslav")
        .build()
        .unwrap();
    let result = client.check_simple(&request).await.unwrap();
    assert!(result.qualified.is_none());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("UstId_1=DE115235681&UstId_2=CZ00177041")
    );
}

#[tokio::test]
async fn invalid_request_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SIMPLE_VALID))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .check(&CheckRequest::simple("DE115235681", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, EvatrError::InvalidArgument(_)));

    let err = client
        .check_qualified(&CheckRequest::simple("DE115235681", "CZ00177041"))
        .await
        .unwrap_err();
    assert!(matches!(err, EvatrError::InvalidArgument(_)));
}

#[tokio::test]
async fn http_error_status_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Wartungsarbeiten"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .check(&CheckRequest::simple("DE115235681", "CZ00177041"))
        .await
        .unwrap_err();
    match err {
        EvatrError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(503)),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(payload(&[("ErrorCode", "200")])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .check(&CheckRequest::simple("DE115235681", "CZ00177041"))
        .await
        .unwrap_err();
    assert_eq!(err.missing_field(), Some("Datum"));
}

#[test]
fn invalid_base_url() {
    let err = EvatrClient::with_config(ClientConfig::with_base_url("not a url")).unwrap_err();
    assert!(matches!(err, EvatrError::InvalidUrl(_)));
}

#[test]
fn default_client_targets_production() {
    let client = EvatrClient::new().unwrap();
    assert_eq!(client.base_url().as_str(), evatr::client::EVATR_URL);
}
