//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
}

impl ApiConfig {
    /// Builds a config from a host and port.
    pub fn new(host: &str, port: &str) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
        }
    }
}
