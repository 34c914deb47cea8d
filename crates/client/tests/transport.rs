//! Transport tests against a wiremock stand-in for the model server.

use client::{ClientError, ModelServer, OllamaClient};
use contracts::shared::ollama::{ChatMessage, EmbedInput, GenerationOptions};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OllamaClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    OllamaClient::with_http_client(http, format!("{}/api", server.uri()))
}

fn closed_port_client() -> OllamaClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    OllamaClient::with_http_client(http, format!("http://127.0.0.1:{port}/api"))
}

// ── generate ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_sends_single_non_streaming_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "llama2:latest",
            "prompt": "Why is the sky blue?",
            "stream": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama2:latest",
                "response": "Rayleigh scattering...",
                "done": true
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate("llama2:latest", "Why is the sky blue?", None)
        .await
        .unwrap();
    assert_eq!(text, "Rayleigh scattering...");
}

#[tokio::test]
async fn test_generate_passes_options_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "options": {"temperature": 0.1, "seed": 42}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut options = GenerationOptions::new();
    options.insert("temperature".into(), json!(0.1));
    options.insert("seed".into(), json!(42));

    let text = client_for(&server)
        .generate("llama2", "hi", Some(&options))
        .await
        .unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn test_generate_falls_back_to_text_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "hi"})))
        .mount(&server)
        .await;

    let text = client_for(&server).generate("llama2", "", None).await.unwrap();
    assert_eq!(text, "hi");
}

#[tokio::test]
async fn test_generate_unknown_shape_returns_serialized_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .mount(&server)
        .await;

    let text = client_for(&server).generate("llama2", "hi", None).await.unwrap();
    assert_eq!(text, r#"{"foo":"bar"}"#);
}

#[tokio::test]
async fn test_generate_unknown_model_is_status_404() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "model 'llama9' not found, try pulling it first"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("llama9", "hi", None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("llama9"), "got: {err}");
}

#[tokio::test]
async fn test_generate_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("llama2", "hi", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_generate_connection_refused() {
    let err = closed_port_client()
        .generate("llama2", "hi", None)
        .await
        .unwrap_err();
    assert!(err.is_connection_refused(), "got: {err:?}");
}

// ── secondary endpoints ──────────────────────────────────────────

#[tokio::test]
async fn test_chat_returns_assistant_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "model": "llama2",
            "messages": [
                {"role": "system", "content": "Answer briefly."},
                {"role": "user", "content": "Hello"}
            ],
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama2",
            "message": {"role": "assistant", "content": "Hi there."},
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let messages = vec![ChatMessage::system("Answer briefly."), ChatMessage::user("Hello")];
    let reply = client_for(&server)
        .chat("llama2", &messages, None, &[])
        .await
        .unwrap();
    assert_eq!(reply, "Hi there.");
}

#[tokio::test]
async fn test_chat_sends_tools_when_present() {
    let server = MockServer::start().await;
    let tool = json!({
        "type": "function",
        "function": {"name": "get_weather", "parameters": {"type": "object"}}
    });
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"tools": [tool.clone()]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .chat("llama2", &[ChatMessage::user("weather?")], None, &[tool])
        .await
        .unwrap();
    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_list_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "llama2:latest", "size": 3826793677u64},
                {"name": "nomic-embed-text:latest"}
            ]
        })))
        .mount(&server)
        .await;

    let models = client_for(&server).list_models().await.unwrap();
    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["llama2:latest", "nomic-embed-text:latest"]);
}

#[tokio::test]
async fn test_show_model_returns_body_as_is() {
    let server = MockServer::start().await;
    let details = json!({
        "modelfile": "FROM llama2",
        "details": {"family": "llama", "parameter_size": "7B"}
    });
    Mock::given(method("POST"))
        .and(path("/api/show"))
        .and(body_json(json!({"model": "llama2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(details.clone()))
        .mount(&server)
        .await;

    let body = client_for(&server).show_model("llama2").await.unwrap();
    assert_eq!(body, details);
}

#[tokio::test]
async fn test_embed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .and(body_json(json!({"model": "nomic-embed-text", "input": ["a", "b"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "nomic-embed-text",
            "embeddings": [[0.5, -0.25], [1.0, 0.0]]
        })))
        .mount(&server)
        .await;

    let input = EmbedInput::from(vec!["a".to_string(), "b".to_string()]);
    let vectors = client_for(&server)
        .embed("nomic-embed-text", input, None)
        .await
        .unwrap();
    assert_eq!(vectors, vec![vec![0.5, -0.25], vec![1.0, 0.0]]);
}

#[tokio::test]
async fn test_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "0.1.0"})))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).version().await.unwrap(), "0.1.0");
}

#[tokio::test]
async fn test_version_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/version"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server).version().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}
