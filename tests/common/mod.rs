//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_server;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use billfold::api::ApiClient;
use billfold::config::Config;
use billfold::session::SessionStore;
use tempfile::TempDir;

use mock_server::MockServer;

/// A client pointed at the mock server, with a counter on the
/// unauthorized hook and a session file in a temp dir.
pub struct TestClient {
    pub client: ApiClient,
    pub session: SessionStore,
    pub unauthorized_hits: Arc<AtomicUsize>,
    _dir: TempDir,
}

pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.server.base_url = server.base_url();
    config.server.connect_timeout_secs = 2;
    config.server.request_timeout_secs = 2;
    config
}

pub fn build_client(server: &MockServer) -> TestClient {
    let dir = TempDir::new().expect("create temp dir");
    let session = SessionStore::load_or_default(&dir.path().join("session.toml"));
    let unauthorized_hits = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&unauthorized_hits);
    let client = ApiClient::new(&test_config(server), session.clone(), move || {
        hits.fetch_add(1, Ordering::SeqCst);
    })
    .expect("build client");
    TestClient {
        client,
        session,
        unauthorized_hits,
        _dir: dir,
    }
}

pub fn unauthorized_count(test_client: &TestClient) -> usize {
    test_client.unauthorized_hits.load(Ordering::SeqCst)
}
