//! Kernel of the resolver: the pairwise operations over [`Configuration`] values.
//! Keep this crate free of I/O apart from the profile loader in [`config`].
//!
//! * [`diff`] reports which axis groups differ between two configurations.
//! * [`matches`] decides whether a candidate is legal for a requested environment.
//! * [`is_better_than`] ranks two legal candidates through a fixed priority cascade
//!   (see [`rules::RANKING_ORDER`]).
//! * [`select_best`] and [`rank`] fold a candidate pool with the two above.
//!
//! ```rust
//! use resconf_kernel::prelude::*;
//!
//! let requested = Configuration::new()
//!     .with_language("en")
//!     .with_orientation(Orientation::Portrait)
//!     .with_density(Density::XHIGH);
//!
//! let candidates = [
//!     Configuration::new(),
//!     Configuration::new().with_density(Density::HIGH),
//!     Configuration::new().with_language("en").with_density(Density::MEDIUM),
//!     Configuration::new().with_orientation(Orientation::Landscape),
//! ];
//!
//! let best = select_best(&candidates, &requested).unwrap();
//! assert_eq!(best.to_string(), "en-mdpi");
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod diff;
mod environment;
mod matcher;
pub mod prelude;
mod ranker;
pub mod rules;
mod select;

pub use diff::{diff, requires_reload};
pub use environment::{EnvironmentSource, from_environment, populate_from};
pub use matcher::{first_conflict, matches};
pub use ranker::{Winner, deciding_axis, is_better_than};
pub use resconf_domain as domain;
pub use resconf_domain::Configuration;
pub use select::{rank, select_best};
