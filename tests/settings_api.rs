//! End-to-end tests for the settings API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use header_settings::editor::FormSpec;
use header_settings::headers::{HeaderName, SettingsDocument, SETTINGS_KEY};
use header_settings::store::{MemoryStore, SettingsStore};

mod common;

#[tokio::test]
async fn test_admin_routes_require_bearer_auth() {
    let addr: SocketAddr = "127.0.0.1:28311".parse().unwrap();
    let (_flush, _shutdown) = common::start_service(addr, Arc::new(MemoryStore::new())).await;
    let client = common::client();

    // Health is open.
    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    // Admin routes are not.
    let res = client
        .get(format!("http://{}/admin/headers", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    let res = client
        .get(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer("wrong-key"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    let res = client
        .get(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn test_fresh_document_loads_all_fields_empty() {
    let addr: SocketAddr = "127.0.0.1:28312".parse().unwrap();
    let (_flush, _shutdown) = common::start_service(addr, Arc::new(MemoryStore::new())).await;

    let spec: FormSpec = common::client()
        .get(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(spec.sections.len(), 2);
    assert_eq!(spec.sections[0].title, "Security");
    assert_eq!(spec.sections[0].fields.len(), 6);
    assert_eq!(spec.sections[1].title, "Performance");
    assert_eq!(spec.sections[1].fields.len(), 1);
    for name in HeaderName::ALL {
        let field = spec.field(name).unwrap();
        assert_eq!(field.value, "");
        assert_eq!(field.label, name.as_str());
    }
}

#[tokio::test]
async fn test_submit_round_trips_and_fully_overwrites() {
    let addr: SocketAddr = "127.0.0.1:28313".parse().unwrap();
    let store = Arc::new(MemoryStore::new());
    let (flush, _shutdown) = common::start_service(addr, store.clone()).await;
    let client = common::client();

    let tricky = "  default-src 'self'; img-src \"https://cdn.example\" ";
    let mut values = HashMap::new();
    values.insert(HeaderName::ContentSecurityPolicy, tricky.to_string());
    values.insert(HeaderName::XFrameOptions, "DENY".to_string());

    let saved: SettingsDocument = client
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&values)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // All six security keys written, unsubmitted ones as empty strings.
    assert_eq!(saved.security.len(), 6);
    assert_eq!(saved.value_of(HeaderName::ContentSecurityPolicy), tricky);
    assert_eq!(saved.value_of(HeaderName::XFrameOptions), "DENY");
    assert_eq!(saved.security.get("Strict-Transport-Security").unwrap(), "");

    // Stored values come back byte-for-byte in the form view.
    let spec: FormSpec = client
        .get(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(spec.field(HeaderName::ContentSecurityPolicy).unwrap().value, tricky);

    // Persisted state matches the response document.
    assert_eq!(store.load(SETTINGS_KEY).unwrap().unwrap(), saved);
    assert_eq!(flush.count(), 1);
}

#[tokio::test]
async fn test_empty_submit_clears_stored_values() {
    let addr: SocketAddr = "127.0.0.1:28314".parse().unwrap();
    let store = Arc::new(MemoryStore::new());
    let (flush, _shutdown) = common::start_service(addr, store.clone()).await;
    let client = common::client();

    let mut values = HashMap::new();
    values.insert(HeaderName::CacheControl, "max-age=900, public".to_string());
    client
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&values)
        .send()
        .await
        .unwrap();

    let cleared: SettingsDocument = client
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&HashMap::<HeaderName, String>::new())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cleared.value_of(HeaderName::CacheControl), "");

    // Idempotent: a second identical submit persists the same state.
    let again: SettingsDocument = client
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&HashMap::<HeaderName, String>::new())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again, cleared);
    assert_eq!(store.load(SETTINGS_KEY).unwrap().unwrap(), cleared);
    assert_eq!(flush.count(), 3);
}

#[tokio::test]
async fn test_failed_save_returns_error_and_flushes_nothing() {
    let addr: SocketAddr = "127.0.0.1:28315".parse().unwrap();
    let store = Arc::new(common::BrokenSaveStore(MemoryStore::new()));
    let (flush, _shutdown) = common::start_service(addr, store).await;

    let mut values = HashMap::new();
    values.insert(HeaderName::XFrameOptions, "DENY".to_string());
    let res = common::client()
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&values)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 503);
    let body = res.text().await.unwrap();
    assert!(body.contains("not saved"), "body: {}", body);
    assert_eq!(flush.count(), 0);
}

#[tokio::test]
async fn test_configured_headers_appear_on_responses() {
    let addr: SocketAddr = "127.0.0.1:28316".parse().unwrap();
    let (_flush, _shutdown) = common::start_service(addr, Arc::new(MemoryStore::new())).await;
    let client = common::client();

    // Nothing configured yet: no X-Frame-Options on responses.
    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert!(res.headers().get("x-frame-options").is_none());

    let mut values = HashMap::new();
    values.insert(HeaderName::XFrameOptions, "DENY".to_string());
    values.insert(HeaderName::XContentTypeOptions, "nosniff".to_string());
    // Explicitly cleared header must not be sent.
    values.insert(HeaderName::XXssProtection, String::new());
    client
        .put(format!("http://{}/admin/headers", addr))
        .header("Authorization", common::bearer(common::API_KEY))
        .json(&values)
        .send()
        .await
        .unwrap();

    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert_eq!(res.headers().get("x-frame-options").unwrap(), "DENY");
    assert_eq!(res.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert!(res.headers().get("x-xss-protection").is_none());
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let addr: SocketAddr = "127.0.0.1:28317".parse().unwrap();
    let (_flush, _shutdown) = common::start_service(addr, Arc::new(MemoryStore::new())).await;
    let client = common::client();

    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert!(res.headers().get("x-request-id").is_some());

    // Inbound IDs are echoed back.
    let res = client
        .get(format!("http://{}/health", addr))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "test-correlation-id");
}
