//! HTTP surface integration tests.
//!
//! Covers the plaintext operator banner and the health/rooms observability
//! endpoints.

mod fixtures;
use fixtures::TestServer;

#[tokio::test]
async fn test_banner_on_unmatched_paths() {
    // given:
    let server = TestServer::start(19080);
    let client = reqwest::Client::new();

    // when: plain GET on the root and on an arbitrary path
    let root = client
        .get(server.base_url())
        .send()
        .await
        .expect("Failed to send request");
    let other = client
        .get(format!("{}/anything/else", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then: both answer with the static plaintext acknowledgment
    assert_eq!(root.status(), 200);
    let root_body = root.text().await.expect("Failed to read body");
    assert_eq!(root_body, "MAX miniapp signaling server\n");

    assert_eq!(other.status(), 200);
    let other_body = other.text().await.expect("Failed to read body");
    assert_eq!(other_body, "MAX miniapp signaling server\n");
}

#[tokio::test]
async fn test_health_endpoint() {
    // given:
    let server = TestServer::start(19081);
    let client = reqwest::Client::new();

    // when:
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then:
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["connections"], 0);
    assert_eq!(body["rooms"], 0);
}

#[tokio::test]
async fn test_rooms_endpoint_starts_empty() {
    // given:
    let server = TestServer::start(19082);
    let client = reqwest::Client::new();

    // when:
    let response = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then: no rooms exist until a client joins one
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));
}
