//! Translation client against a mocked `translate_a/single` endpoint.

use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{any, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use transcript_translator::{TranslationClient, TranslationError};

const TIMEOUT: Duration = Duration::from_millis(500);

fn client_for(server: &MockServer) -> TranslationClient {
    TranslationClient::new(format!("{}/translate_a/single", server.uri()), TIMEOUT)
        .expect("client builds")
}

#[tokio::test]
async fn sends_expected_query_and_joins_fragments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("client", "gtx"))
        .and(query_param("sl", "en"))
        .and(query_param("tl", "fr"))
        .and(query_param("dt", "t"))
        .and(query_param("q", "Hello."))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([[["Bonjour", "Hello", null, null, 0]]])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let translated = client_for(&server).translate("Hello.", "en", "fr").await;
    assert_eq!(translated, "Bonjour");
}

#[tokio::test]
async fn same_language_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.translate("Hello world.", "en", "en").await, "Hello world.");
    assert_eq!(client.try_translate("", "si", "si").await.unwrap(), "");

    server.verify().await;
}

#[tokio::test]
async fn timeout_yields_timeout_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([[["Bonjour", "Hello", null, null, 0]]]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.translate("Hello.", "en", "fr").await,
        "[Translation timeout] Hello."
    );
    assert!(matches!(
        client.try_translate("Hello.", "en", "fr").await,
        Err(TranslationError::TimeoutError)
    ));
}

#[tokio::test]
async fn server_error_yields_failed_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.translate("Hello.", "en", "fr").await,
        "[Translation failed] Hello."
    );
    assert!(matches!(
        client.try_translate("Hello.", "en", "fr").await,
        Err(TranslationError::ApiError { status: 503, .. })
    ));
}

#[tokio::test]
async fn connection_refused_yields_failed_sentinel() {
    // Reserve a free port, then release it so nothing is listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("ephemeral port")
        .port();
    let client =
        TranslationClient::new(format!("http://127.0.0.1:{port}/translate_a/single"), TIMEOUT)
            .expect("client builds");

    assert_eq!(
        client.translate("Hello.", "en", "fr").await,
        "[Translation failed] Hello."
    );
}

#[tokio::test]
async fn malformed_body_yields_error_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .mount(&server)
        .await;

    assert_eq!(
        client_for(&server).translate("Hello.", "en", "fr").await,
        "[Translation error] Hello."
    );
}

#[tokio::test]
async fn unexpected_shape_yields_error_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sentences": []})))
        .mount(&server)
        .await;

    assert_eq!(
        client_for(&server).translate("Hello.", "en", "fr").await,
        "[Translation error] Hello."
    );
}

#[tokio::test]
async fn empty_translation_falls_back_to_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([null, null, "en"])))
        .mount(&server)
        .await;

    assert_eq!(
        client_for(&server).translate("Hello.", "en", "fr").await,
        "Hello."
    );
}

#[tokio::test]
async fn empty_object_body_falls_back_to_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(
        client_for(&server).translate("Hello.", "en", "fr").await,
        "Hello."
    );
}

#[tokio::test]
async fn placeholder_segments_are_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([["", ["Bonjour"], 0, [" à tous"]]])),
        )
        .mount(&server)
        .await;

    assert_eq!(
        client_for(&server).translate("Hello everyone.", "en", "fr").await,
        "Bonjour à tous"
    );
}
