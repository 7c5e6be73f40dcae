//! Shared fixtures for the HTTP integration tests.
#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum_test::TestServer;
use verdex_config::{Config, PaymentSettings, ServerSettings};
use verdex_server::{AppState, create_app};

pub const TEST_PAYMENT_SECRET: &str = "test-gateway-secret";

pub struct TestContext {
    pub server: TestServer,
    pub state: AppState,
    // Keeps the data directory alive for the test's duration.
    _dir: tempfile::TempDir,
}

pub fn test_config(data_dir: &std::path::Path) -> Config {
    Config {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        data_dir: data_dir.to_path_buf(),
        seed_file: None,
        cors_allowed_origins: Vec::new(),
        payment: PaymentSettings {
            key_id: "rzp_test_key".to_string(),
            secret: TEST_PAYMENT_SECRET.to_string(),
        },
        checkout_window: Duration::from_secs(300),
        dev_mode: false,
    }
}

pub async fn spawn() -> TestContext {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());
    let state = AppState::initialize(Arc::new(config))
        .await
        .expect("state initializes");
    let server = TestServer::new(create_app(state.clone())).expect("test server");
    TestContext {
        server,
        state,
        _dir: dir,
    }
}
