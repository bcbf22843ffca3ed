use eyre::Result;
use rsk_network_config::{LoaderConfig, SecretAndGasLoader};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// Runs the loader exactly once:
/// 1. Sets up logging on stderr
/// 2. Loads loader settings
/// 3. Builds the toolchain configuration from the secret files
/// 4. Prints it as JSON on stdout
///
/// Any hard failure is returned from `main`, which exits non-zero.
fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("rsk_network_config=info".parse()?);

    // stdout is reserved for the configuration record
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = LoaderConfig::from_env()?;

    let toolchain = match SecretAndGasLoader::new(config).build_toolchain_config() {
        Ok(toolchain) => toolchain,
        Err(e) => {
            error!(code = e.code(), "{}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&toolchain)?);
    Ok(())
}
