//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use header_settings::cache::CacheFlush;
use header_settings::config::AppConfig;
use header_settings::headers::SettingsDocument;
use header_settings::lifecycle::Shutdown;
use header_settings::store::{SettingsStore, StoreError};
use header_settings::HttpServer;

pub const API_KEY: &str = "test-admin-key";

/// Cache-flush stub that counts invocations.
#[derive(Default)]
pub struct CountingFlush(pub AtomicUsize);

impl CountingFlush {
    #[allow(dead_code)]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl CacheFlush for CountingFlush {
    fn flush_all(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Store that loads fine but fails every save.
#[allow(dead_code)]
pub struct BrokenSaveStore<S>(pub S);

impl<S: SettingsStore> SettingsStore for BrokenSaveStore<S> {
    fn load(&self, key: &str) -> Result<Option<SettingsDocument>, StoreError> {
        self.0.load(key)
    }

    fn save(&self, _key: &str, _document: &SettingsDocument) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("injected save failure".to_string()))
    }
}

/// Boot the real service on `addr` over the given store.
///
/// Returns the flush counter and the shutdown handle; the server stops when
/// the handle is dropped or triggered.
pub async fn start_service(
    addr: SocketAddr,
    store: Arc<dyn SettingsStore>,
) -> (Arc<CountingFlush>, Shutdown) {
    let mut config = AppConfig::default();
    config.listener.bind_address = addr.to_string();
    config.admin.api_key = API_KEY.to_string();
    config.observability.metrics_enabled = false;

    let flush = Arc::new(CountingFlush::default());
    let server = HttpServer::new(config, store, flush.clone());

    let listener = TcpListener::bind(addr).await.unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    (flush, shutdown)
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer(key: &str) -> String {
    format!("Bearer {}", key)
}
