//! coursepath-server - HTTP boundary for the recommendation engine
//!
//! Exposes the engine to authenticated learners and validates every
//! outgoing recommendation payload before it is sent.

mod error;
pub mod http;
pub mod middleware;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use middleware::{LEARNER_ID_HEADER, LearnerIdentity, identity_middleware};
pub use state::AppState;

/// The main coursepath server
pub struct CoursepathServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl CoursepathServer {
    /// Create a new server around shared state
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!(
            "coursepath server listening on {} ({} rules)",
            addr,
            self.state.engine.rules().len()
        );

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7480,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "127.0.0.1:7480")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursepath_core::{EngineConfig, MemoryStore, RecommendationEngine};

    fn state() -> Arc<AppState> {
        let engine = RecommendationEngine::from_store(
            Arc::new(MemoryStore::default()),
            &EngineConfig::default(),
        );
        Arc::new(AppState::new(Arc::new(engine)))
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7480);
    }

    #[test]
    fn test_server_config_addr() {
        let config = ServerConfig::new("0.0.0.0", 8080);
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_new() {
        let config = ServerConfig::new("127.0.0.1", 9000);
        let server = CoursepathServer::new(config, state());
        assert_eq!(server.config().port, 9000);
        assert_eq!(server.state().engine.rules().len(), 3);
    }

    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let server = CoursepathServer::new(ServerConfig::new("127.0.0.1", port), state());
        let err = server.run().await.unwrap_err();

        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
