use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use suggestion_engine::{
    ClientSettings, CompletionService, FailureKind, Suggestion, SuggestionClient, SuggestionError,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        model: "test-model".to_string(),
        ..ClientSettings::default()
    }
}

fn client_for(server: &MockServer) -> SuggestionClient {
    SuggestionClient::from_settings(settings_for(server)).expect("client")
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "cmpl-1",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn item(name: &str, url: &str) -> Suggestion {
    Suggestion {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[tokio::test]
async fn fetch_returns_both_lists_in_service_order() {
    let server = MockServer::start().await;
    let content = json!({
        "youtube": [
            { "name": "Zeta", "url": "https://youtube.com/@zeta" },
            { "name": "Alpha", "url": "https://youtube.com/@alpha" },
            { "name": "Zeta", "url": "https://youtube.com/@zeta" }
        ],
        "reddit": [
            { "name": "r/space", "url": "https://reddit.com/r/space" }
        ]
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(completion(&content))
        .expect(1)
        .mount(&server)
        .await;

    let suggestions = client_for(&server)
        .fetch_suggestions(&tags(&["Space", "Hiking"]))
        .await
        .expect("fetch ok");

    assert_eq!(
        suggestions.video_channels,
        vec![
            item("Zeta", "https://youtube.com/@zeta"),
            item("Alpha", "https://youtube.com/@alpha"),
            item("Zeta", "https://youtube.com/@zeta"),
        ]
    );
    assert_eq!(
        suggestions.forums,
        vec![item("r/space", "https://reddit.com/r/space")]
    );
}

#[tokio::test]
async fn request_is_a_single_user_message_listing_tags_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(r#"{"youtube":[],"reddit":[]}"#))
        .mount(&server)
        .await;

    client_for(&server)
        .fetch_suggestions(&tags(&["Space", "Hiking"]))
        .await
        .expect("fetch ok");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    let messages = body["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let content = messages[0]["content"].as_str().expect("content");
    assert!(content.contains("Space, Hiking"));
    assert!(content.contains("\"youtube\"") && content.contains("\"reddit\""));
    assert!(content.contains("\"name\"") && content.contains("\"url\""));
}

#[tokio::test]
async fn accepts_descriptive_category_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(
            r#"{"videoChannels":[{"name":"A","url":"http://a"}],"forums":[{"name":"B","url":"http://b"}]}"#,
        ))
        .mount(&server)
        .await;

    let suggestions = client_for(&server)
        .fetch_suggestions(&tags(&["Art"]))
        .await
        .expect("fetch ok");

    assert_eq!(suggestions.video_channels, vec![item("A", "http://a")]);
    assert_eq!(suggestions.forums, vec![item("B", "http://b")]);
}

#[tokio::test]
async fn base_url_with_path_and_trailing_slash_is_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(r#"{"youtube":[],"reddit":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: format!("{}/v1/", server.uri()),
        ..settings_for(&server)
    };
    let client = SuggestionClient::from_settings(settings).expect("client");

    let suggestions = client.fetch_suggestions(&tags(&["Food"])).await.expect("fetch ok");
    assert!(suggestions.video_channels.is_empty());
}

#[tokio::test]
async fn unparseable_content_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("Sure! Here are some channels you might like..."))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_suggestions(&tags(&["Music"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedResponse);
    assert!(err.is_retrieval_failure());
    assert!(err.message.contains("Sure! Here are"));
}

#[tokio::test]
async fn missing_array_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(r#"{"youtube":[{"name":"A","url":"http://a"}]}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_suggestions(&tags(&["Music"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn envelope_without_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_suggestions(&tags(&["Music"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn unauthorized_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid api key" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_suggestions(&tags(&["Music"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(401));
    assert!(err.message.contains("invalid api key"));
    assert!(!err.message.contains("test-key"));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            completion(r#"{"youtube":[],"reddit":[]}"#).set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = SuggestionClient::from_settings(settings).expect("client");

    let err = client.fetch_suggestions(&tags(&["Music"])).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn empty_selection_makes_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion(r#"{"youtube":[],"reddit":[]}"#))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_suggestions(&[]).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::NoSelection);
    assert!(!err.is_retrieval_failure());
}

#[tokio::test]
async fn missing_credential_fails_at_first_use_without_calling_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion(r#"{"youtube":[],"reddit":[]}"#))
        .expect(0)
        .mount(&server)
        .await;

    let settings = ClientSettings {
        api_key: None,
        ..settings_for(&server)
    };
    let client =
        SuggestionClient::from_settings(settings).expect("construction does not need a key");

    let err = client.fetch_suggestions(&tags(&["Music"])).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingCredential);
    assert!(err.is_retrieval_failure());
}

#[derive(Default)]
struct RecordingService {
    instructions: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl CompletionService for RecordingService {
    async fn complete(&self, instruction: &str) -> Result<String, SuggestionError> {
        self.instructions.lock().unwrap().push(instruction.to_string());
        Ok(r#"{"youtube":[{"name":"A","url":"http://a"}],"reddit":[]}"#.to_string())
    }
}

#[tokio::test]
async fn client_calls_service_once_per_fetch() {
    let service = Arc::new(RecordingService::default());
    let client = SuggestionClient::new(service.clone());

    let _ = client.fetch_suggestions(&[]).await;
    assert!(service.instructions.lock().unwrap().is_empty());

    let suggestions = client
        .fetch_suggestions(&tags(&["Yoga", "Meditation"]))
        .await
        .expect("fetch ok");
    assert_eq!(suggestions.video_channels, vec![item("A", "http://a")]);

    let instructions = service.instructions.lock().unwrap();
    assert_eq!(instructions.len(), 1);
    assert!(instructions[0].contains("Yoga, Meditation"));
}
