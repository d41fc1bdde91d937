//! # Domain Models
//!
//! This crate contains the configuration descriptor and its axis types with minimal
//! dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O and no selection logic, just data and simple helpers.
//! Diff, match and ranking live in `resconf-kernel`.
//!
//! ```rust
//! use resconf_domain::{Configuration, Density, Orientation};
//!
//! let cfg = Configuration::new()
//!     .with_language("en")
//!     .with_country("US")
//!     .with_orientation(Orientation::Landscape)
//!     .with_density(Density::HIGH);
//!
//! assert_eq!(cfg.to_string(), "en-rUS-land-hdpi");
//! ```

pub mod axes;
pub mod axis;
pub mod config;
pub mod configuration;
pub mod density;
pub mod locale;
pub mod mask;

pub use axes::{
    Keyboard, KeysHidden, LayoutDirection, NavHidden, Navigation, Orientation, ScreenLong,
    ScreenSize, Touchscreen, UiModeNight, UiModeType,
};
pub use axis::Axis;
pub use configuration::{Configuration, MNC_ZERO};
pub use density::Density;
pub use locale::LocaleCode;
pub use mask::AxisMask;
