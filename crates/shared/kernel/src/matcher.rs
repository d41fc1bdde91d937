use crate::rules::RANKING_ORDER;
use resconf_domain::{Axis, Configuration};
use tracing::trace;

/// Whether `base` is a legal configuration for the environment `requested`.
///
/// An axis passes when either side is unset or the values are compatible under the
/// axis relation (equality, "not larger than" for ordered axes, always for density).
#[must_use]
pub fn matches(base: &Configuration, requested: &Configuration) -> bool {
    first_conflict(base, requested).is_none()
}

/// The highest-priority axis on which `base` conflicts with `requested`, if any.
#[must_use]
pub fn first_conflict(base: &Configuration, requested: &Configuration) -> Option<Axis> {
    let conflict = RANKING_ORDER
        .iter()
        .find(|rule| !rule.compatible(base, requested))
        .map(|rule| rule.axis);
    if let Some(axis) = conflict {
        trace!(%base, %requested, %axis, "candidate rejected");
    }
    conflict
}
