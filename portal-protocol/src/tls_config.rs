use std::fs;

use native_tls::Identity;
use tokio_native_tls::TlsAcceptor;

#[derive(Debug, thiserror::Error)]
pub enum TlsConfigError {
    #[error("Failed to read certificate file '{path}': {source}")]
    CertificateReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read key file '{path}': {source}")]
    KeyReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse certificate/key: {0}")]
    IdentityParseError(String),

    #[error("Failed to build TLS acceptor: {0}")]
    AcceptorBuildError(String),
}

type Result<T> = std::result::Result<T, TlsConfigError>;

/// PEM certificate and PKCS#8 key the server presents to clients.
#[derive(Clone, Debug)]
pub struct ServerTlsConfig {
    pub cert_path: String,
    pub key_path: String,
}

impl ServerTlsConfig {
    pub fn new(cert_path: impl Into<String>, key_path: impl Into<String>) -> Self {
        ServerTlsConfig {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    pub fn build_acceptor(&self) -> Result<TlsAcceptor> {
        let cert_pem = fs::read(&self.cert_path).map_err(|source| {
            TlsConfigError::CertificateReadError {
                path: self.cert_path.clone(),
                source,
            }
        })?;

        let key_pem = fs::read(&self.key_path).map_err(|source| TlsConfigError::KeyReadError {
            path: self.key_path.clone(),
            source,
        })?;

        let identity = Identity::from_pkcs8(&cert_pem, &key_pem)
            .map_err(|e| TlsConfigError::IdentityParseError(e.to_string()))?;

        let acceptor = native_tls::TlsAcceptor::builder(identity)
            .build()
            .map_err(|e| TlsConfigError::AcceptorBuildError(e.to_string()))?;

        Ok(TlsAcceptor::from(acceptor))
    }
}
