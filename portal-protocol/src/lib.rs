pub mod action;
pub mod document;
pub mod messages;
pub mod network;
pub mod node;
pub mod storage;
pub mod stylesheet;
pub mod tls_config;

pub use tls_config::{ServerTlsConfig, TlsConfigError};
