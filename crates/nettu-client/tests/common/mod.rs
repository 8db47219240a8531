// Shared helpers for integration tests

use std::sync::Arc;

use nettu_client::ClientConfig;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

/// Route client logs to the test output, filtered by RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn config_for(server: &MockServer) -> Arc<ClientConfig> {
    Arc::new(ClientConfig::new(&format!("{}/api/v1", server.uri())))
}
