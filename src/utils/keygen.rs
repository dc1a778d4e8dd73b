use ec_jwk_keygen::{generate_all, KeygenConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_line_number(false)
        .init();

    // Generate the P-384 and P-521 private keys, overwriting earlier runs
    let config = KeygenConfig::default();
    let written = generate_all(&config)?;
    tracing::info!("Generated {} private keys", written.len());

    Ok(())
}
