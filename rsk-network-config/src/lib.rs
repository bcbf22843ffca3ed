// Export modules for the binary and the integration tests
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod source;

pub use crate::config::LoaderConfig;
pub use crate::error::ConfigError;
pub use crate::loader::SecretAndGasLoader;
pub use crate::models::profile::{NetworkProfile, ToolchainConfig};
