use crate::rules::{RANKING_ORDER, Verdict};
use resconf_domain::{Axis, Configuration};
use tracing::trace;

/// Whether `test` should replace `base` as the best candidate.
///
/// Both configurations are expected to have passed [`crate::matches`] against
/// `requested`. Without a request the more specific configuration wins. Ties keep the
/// incumbent, so `is_better_than(a, a, r)` is always `false`.
#[must_use]
pub fn is_better_than(
    base: &Configuration,
    test: &Configuration,
    requested: Option<&Configuration>,
) -> bool {
    deciding_axis(base, test, requested).is_some_and(|(_, winner)| winner == Winner::Test)
}

/// Side chosen by the ranking cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Base,
    Test,
}

/// The first axis that separates `base` from `test`, and which side it favours.
///
/// `None` when every axis is inconclusive.
#[must_use]
pub fn deciding_axis(
    base: &Configuration,
    test: &Configuration,
    requested: Option<&Configuration>,
) -> Option<(Axis, Winner)> {
    RANKING_ORDER.iter().find_map(|rule| {
        let winner = match rule.decide(base, test, requested) {
            Verdict::Base => Winner::Base,
            Verdict::Test => Winner::Test,
            Verdict::Inconclusive => return None,
        };
        trace!(%base, %test, axis = %rule.axis, ?winner, "cascade decided");
        Some((rule.axis, winner))
    })
}
