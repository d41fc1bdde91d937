use config::{Config, Environment, File};
use resconf_domain::config::Profile;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The profile parsed but cannot be used as-is.
    #[error("Invalid profile{}: {message}", format_context(.context))]
    InvalidProfile { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds a human-readable context to a failed config step.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original error annotated with `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ConfigError::Config { context: c, .. }
                | ConfigError::InvalidProfile { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Environment variable prefix for overrides, e.g. `RESCONF__ENVIRONMENT__ORIENTATION=land`.
pub const ENV_PREFIX: &str = "RESCONF";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file; the format follows the extension
///    (`.toml`, `.json`, `.yaml`). If no path is provided, it defaults to `"resconf"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `RESCONF__`.
///    Nested structures are accessed using double underscores
///    (e.g., `RESCONF__ENVIRONMENT__DENSITY` maps to `environment.density`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use resconf_kernel::config::load_config;
/// use resconf_domain::config::Profile;
///
/// let profile: Profile = load_config(Some("profiles/phone.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("resconf"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads a resolution profile and checks that it can be resolved.
///
/// # Errors
/// Returns [`ConfigError::Config`] when loading fails and [`ConfigError::InvalidProfile`]
/// when the profile has no variants or repeats a variant name.
pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, ConfigError> {
    let path = path.as_ref();
    let profile: Profile = load_config(Some(path))?;

    if profile.variants.is_empty() {
        return Err(ConfigError::InvalidProfile {
            message: "profile declares no variants".into(),
            context: Some(path.display().to_string().into()),
        });
    }

    for (i, variant) in profile.variants.iter().enumerate() {
        if profile.variants[..i].iter().any(|v| v.name == variant.name) {
            return Err(ConfigError::InvalidProfile {
                message: format!("duplicate variant name '{}'", variant.name).into(),
                context: Some(path.display().to_string().into()),
            });
        }
    }

    info!(variants = profile.variants.len(), environment = %profile.environment, "Profile loaded");
    Ok(profile)
}
