mod common;

use actix_web::test;
use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_chat_greeting() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "prompt": "  Hello there" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["response"].as_str().unwrap().starts_with("Hello!"));
}

#[actix_rt::test]
#[serial]
async fn test_chat_topic_reply_mentions_prompt() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let prompt = "Tell me about the history of Rome";
    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "prompt": prompt }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["response"].as_str().unwrap().contains(prompt));
}

#[actix_rt::test]
#[serial]
async fn test_chat_without_prompt() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for payload in [json!({}), json!({ "prompt": "" })] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "No prompt provided" }));
    }
}

#[actix_rt::test]
#[serial]
async fn test_chat_malformed_body() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].as_str().is_some());
}

#[actix_rt::test]
#[serial]
async fn test_chat_hosted_backend() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/chat"))
        .and(header("authorization", "Bearer test-chat-token"))
        .and(body_partial_json(json!({
            "inputs": "What should I pack for Iceland?",
            "parameters": { "max_new_tokens": 250, "return_full_text": false }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": " Layers and a rain jacket. " }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let test_app = TestApp::with_hosted_chat(&format!("{}/models/chat", mock_server.uri()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "prompt": "What should I pack for Iceland?" }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["response"], "Layers and a rain jacket.");
}

#[actix_rt::test]
#[serial]
async fn test_chat_hosted_backend_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&mock_server)
        .await;

    let test_app = TestApp::with_hosted_chat(&mock_server.uri());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "prompt": "Hello" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].as_str().unwrap().contains("503"));
}
