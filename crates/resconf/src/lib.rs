//! Facade crate for the resource configuration resolver.
//! Re-exports the domain types, the kernel operations and (with the `logger` feature)
//! the logging setup.
//! Keep this crate thin: it should compose other crates, not implement resolution logic.
//!
//! ## Usage
//! - Depend on `resconf` and import [`prelude`].
//! - Binaries enable `logger` and call [`init_logging`] once at startup.

pub use resconf_domain as domain;
pub use resconf_kernel as kernel;
#[cfg(feature = "logger")]
pub use resconf_logger as logger;

/// Everything needed to describe, compare and select configurations.
pub mod prelude {
    pub use resconf_domain::config::{LoggingConfig, Profile, Variant};
    pub use resconf_kernel::config::{ConfigError, load_profile};
    pub use resconf_kernel::prelude::*;
    pub use resconf_kernel::{Winner, deciding_axis, first_conflict, requires_reload};
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initializes logging for a binary from a profile's `[logging]` section.
///
/// `verbose` raises the level to at least `debug`.
///
/// # Errors
/// Returns an error if the section is invalid or a global subscriber is already set.
#[cfg(feature = "logger")]
pub fn init_logging(
    name: &str,
    config: &domain::config::LoggingConfig,
    verbose: bool,
) -> Result<logger::Logger, logger::LoggerError> {
    let mut config = config.clone();
    if verbose {
        let level = logger::parse_level(&config.level)?;
        if level < logger::LevelFilter::DEBUG {
            "debug".clone_into(&mut config.level);
        }
    }
    logger::Logger::from_config(name, &config)
}
