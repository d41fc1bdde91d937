use crate::configuration::Configuration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A resolution profile: the live environment plus the variants competing for it.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// The requested configuration candidates are matched and ranked against.
    pub environment: Configuration,
    pub variants: Vec<Variant>,
    pub logging: LoggingConfig,
}

impl Profile {
    /// Looks a variant up by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }
}

/// One named resource variant and its qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub qualifiers: Configuration,
}

impl Variant {
    pub fn new(name: impl Into<String>, qualifiers: Configuration) -> Self {
        Self { name: name.into(), qualifiers }
    }
}

impl AsRef<Configuration> for Variant {
    fn as_ref(&self) -> &Configuration {
        &self.qualifiers
    }
}

/// Logging section of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra filter directives, e.g. `resconf_kernel=trace`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None, json: false }
    }
}
