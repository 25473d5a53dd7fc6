//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a test configuration
//! - Fixture text and request bodies in `fixtures`

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use studygen_backend::config::Config;
use studygen_backend::{router, AppState};

/// Seed used by the default test context so responses are repeatable.
pub const TEST_SEED: u64 = 1234;

/// Test context wrapping the application router.
pub struct TestContext {
    pub config: Config,
    app: Router,
}

impl TestContext {
    /// Create a context with default limits and a fixed seed.
    pub fn new() -> Self {
        Self::with_config(Config {
            seed: Some(TEST_SEED),
            ..Config::default()
        })
    }

    /// Create a context from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let app = router(AppState::new(&config));
        Self { config, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
