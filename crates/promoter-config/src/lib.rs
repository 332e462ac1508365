mod config;
mod env;
mod error;
mod settings;

pub use config::{PromotionConfig, load_config, parse_config};
pub use env::DEBUG_RESOLVER_ENV;
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
