//! Layered configuration for the gallery server.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (`mirage.toml` at the workspace root)
//! 2. `~/.config/mirage/mirage.toml`
//! 3. `./mirage.toml`
//! 4. `MIRAGE__SECTION__FIELD` environment variables
//! 5. `B2_ENDPOINT`, `B2_KEY_ID`, `B2_APP_KEY`, `B2_BUCKET`

use crate::LoggingConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use mirage_core::FeedConfig;
use mirage_error::{ConfigError, MirageResult};
use mirage_storage::BucketConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../mirage.toml");

/// Legacy environment variables mapped onto the bucket section.
const BUCKET_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("B2_ENDPOINT", "bucket.endpoint"),
    ("B2_KEY_ID", "bucket.key_id"),
    ("B2_APP_KEY", "bucket.app_key"),
    ("B2_BUCKET", "bucket.name"),
];

/// Listener settings.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind")]
    bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Complete gallery configuration.
///
/// # Example
///
/// ```no_run
/// use mirage_server::MirageConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MirageConfig::load()?;
/// println!("listening on {}", config.server().bind());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct MirageConfig {
    /// Listener settings
    #[serde(default)]
    server: ServerConfig,
    /// Bucket connection
    #[serde(default)]
    bucket: BucketConfig,
    /// Feed paging
    #[serde(default)]
    feed: FeedConfig,
    /// Log output
    #[serde(default)]
    logging: LoggingConfig,
}

impl MirageConfig {
    /// Only the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> MirageResult<Self> {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Load a single configuration file on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed or invalid.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MirageResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load every source in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source is malformed or the merged result
    /// is invalid.
    #[instrument]
    pub fn load() -> MirageResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mirage/mirage.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("mirage").required(false))
            .add_source(
                Environment::with_prefix("MIRAGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in BUCKET_ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value).map_err(|e| {
                ConfigError::new(*key, format!("Failed to apply {}: {}", var, e))
            })?;
        }

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> MirageResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new("mirage.toml", format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new("mirage.toml", format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::new("server.bind", "must not be empty"));
        }
        self.bucket.validate()?;
        self.feed.validate()?;
        Ok(())
    }
}
