use mis_login::{config::Config, MisApplication};

#[tokio::main]
async fn main() -> portal::Result<()> {
    let config = Config::from_env()?;
    femme::with_level(config.log_level);

    // For development, generate a self-signed cert.pem/key.pem pair and point
    // MIS_TLS_CERT / MIS_TLS_KEY at them.
    portal::run(MisApplication, config.bind_address.clone(), config.tls_config()).await
}
