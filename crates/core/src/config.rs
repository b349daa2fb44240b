use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::VikingNumber;

/// An environment variable was set but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Read `var` and parse it, falling back to `default` when unset.
pub fn env_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Like [`env_or`] but `None` when the variable is unset or empty.
pub fn env_opt<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
                var,
                reason: e.to_string(),
                value,
            })
        }
        _ => Ok(None),
    }
}

/// Default collection description attached to every stored Viking.
pub const DEFAULT_DESCRIPTION: &str =
    "A Viking warrior forged on-chain. Every trait is derived from its minting record.";

/// Locations and URIs used by the derivation and compositing pipeline.
///
/// Built once at startup and passed by reference; nothing in the pipeline
/// reads the environment on its own.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Root of the read-only part tree (`beards/`, `bodies/`, `boots/<style>/` ...).
    pub assets_dir: PathBuf,
    /// Directory composited images are written to.
    pub output_dir: PathBuf,
    /// Public base URI the output directory is served under.
    pub image_base_uri: String,
    /// Description stored with every record.
    pub description: String,
}

impl AssetConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                          |
    /// |----------------------|----------------------------------|
    /// | `ASSETS_DIR`         | `./assets`                       |
    /// | `OUTPUT_DIR`         | `./output`                       |
    /// | `IMAGE_BASE_URI`     | `http://localhost:3000/images`   |
    /// | `VIKING_DESCRIPTION` | [`DEFAULT_DESCRIPTION`]          |
    pub fn from_env() -> Self {
        let assets_dir = std::env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".into());
        let output_dir = std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "./output".into());
        let image_base_uri = std::env::var("IMAGE_BASE_URI")
            .unwrap_or_else(|_| "http://localhost:3000/images".into());
        let description =
            std::env::var("VIKING_DESCRIPTION").unwrap_or_else(|_| DEFAULT_DESCRIPTION.into());

        Self {
            assets_dir: assets_dir.into(),
            output_dir: output_dir.into(),
            image_base_uri,
            description,
        }
    }

    /// File name of the composited image for `number`.
    pub fn image_file_name(number: VikingNumber) -> String {
        format!("viking_{number}.png")
    }

    /// Public URL of the composited image for `number`.
    pub fn image_url(&self, number: VikingNumber) -> String {
        format!(
            "{}/{}",
            self.image_base_uri.trim_end_matches('/'),
            Self::image_file_name(number)
        )
    }

    /// Canonical on-disk location of the composited image for `number`.
    pub fn output_path(&self, number: VikingNumber) -> PathBuf {
        self.output_dir.join(Self::image_file_name(number))
    }
}
