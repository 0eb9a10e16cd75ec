//! Layered configuration loading: a settings file plus `GHUB`-prefixed
//! environment overrides.

use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[ghub_derive::ghub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", fmt_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration for the process.
///
/// The file layer comes first: `path` without an extension resolves to any
/// supported format (`server` picks up `server.toml`, `server.yaml`, ...),
/// and defaults to `server` in the working directory. Environment variables
/// then override individual keys: the `GHUB` prefix is stripped and `__`
/// separates nesting, so `GHUB__SERVER__PORT=8080` lands on `server.port`.
///
/// ```rust
/// use ghub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
///
/// # Errors
///
/// Fails when the file is missing or either layer does not deserialize
/// into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, ghub_environment())
}

/// Same as [`load_config`], with the override layer supplied by the caller.
///
/// Tests and embedders use this to inject overrides without touching the
/// process environment; pass [`ghub_environment()`] combined with
/// `.source(Some(map))` for a fully hermetic load.
///
/// # Errors
///
/// Same conditions as [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    overrides: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", file.display());

    Config::builder()
        .add_source(File::from(file.as_path()).required(true))
        .add_source(overrides)
        .build()
        .context("Assembling config layers")?
        .try_deserialize::<T>()
        .context("Deserializing config")
}

/// The standard override layer: `GHUB`-prefixed process environment
/// variables with `__` as the nesting separator.
#[must_use]
pub fn ghub_environment() -> Environment {
    Environment::with_prefix("GHUB").separator("__").convert_case(Case::Snake)
}
