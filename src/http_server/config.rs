//! HTTP Server Configuration
//!
//! Host, port, CORS, backing document and static asset settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured port
pub const PORT_ENV: &str = "PORT";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Backing document (default: "./data/animals.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Directory of static assets served for unmatched GET paths
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/animals.json")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_path: default_data_path(),
            public_dir: None,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply the `PORT` environment variable, if set to a valid port.
    ///
    /// Returns the raw value when it is set but unusable.
    pub fn apply_env(&mut self) -> Result<(), String> {
        match std::env::var(PORT_ENV) {
            Ok(raw) => self.apply_port_override(&raw),
            Err(_) => Ok(()),
        }
    }

    /// Apply a textual port override.
    pub fn apply_port_override(&mut self, raw: &str) -> Result<(), String> {
        let port = raw.trim().parse::<u16>().map_err(|_| raw.to_string())?;
        self.port = port;
        Ok(())
    }
}
