//! Server harness configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the TLS server harness.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the TLS listener to.
    pub bind_addr: SocketAddr,
    /// Path to the PEM certificate artifact.
    pub cert_path: PathBuf,
    /// Path to the PEM private key artifact.
    pub key_path: PathBuf,
    /// Directory uploaded files are saved into.
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8443)),
            cert_path: PathBuf::from("cert.pem"),
            key_path: PathBuf::from("key.pem"),
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

impl ServerConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the certificate path.
    #[must_use]
    pub fn with_cert_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cert_path = path.into();
        self
    }

    /// Set the private key path.
    #[must_use]
    pub fn with_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_path = path.into();
        self
    }

    /// Set the upload directory.
    #[must_use]
    pub fn with_upload_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.upload_dir = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr.port(), 8443);
        assert_eq!(config.cert_path, PathBuf::from("cert.pem"));
        assert_eq!(config.key_path, PathBuf::from("key.pem"));
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn config_builder() {
        let addr: SocketAddr = "127.0.0.1:9443".parse().unwrap();
        let config = ServerConfig::new(addr)
            .with_cert_path("/tls/cert.pem")
            .with_key_path("/tls/key.pem")
            .with_upload_dir("/data/uploads");

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.cert_path, PathBuf::from("/tls/cert.pem"));
        assert_eq!(config.key_path, PathBuf::from("/tls/key.pem"));
        assert_eq!(config.upload_dir, PathBuf::from("/data/uploads"));
    }
}
