use crate::matcher::matches;
use crate::ranker::is_better_than;
use resconf_domain::Configuration;
use tracing::debug;

/// Picks the best legal candidate for `requested`.
///
/// Candidates that do not [`matches`] are dropped, the rest are folded pairwise with
/// [`is_better_than`]. On a tie the earlier candidate is kept. Returns `None` when no
/// candidate is legal.
pub fn select_best<'a, T>(candidates: &'a [T], requested: &Configuration) -> Option<&'a T>
where
    T: AsRef<Configuration>,
{
    let best = candidates.iter().filter(|c| matches(c.as_ref(), requested)).reduce(|best, c| {
        if is_better_than(best.as_ref(), c.as_ref(), Some(requested)) { c } else { best }
    });

    match best.map(AsRef::<Configuration>::as_ref) {
        Some(winner) => debug!(%requested, %winner, "selected best candidate"),
        None => debug!(%requested, pool = candidates.len(), "no legal candidate"),
    }
    best
}

/// Legal candidates for `requested`, best first.
///
/// Built by repeated selection rather than sorting: the cascade is not a total order,
/// so only "best of the remaining pool" is well defined.
pub fn rank<'a, T>(candidates: &'a [T], requested: &Configuration) -> Vec<&'a T>
where
    T: AsRef<Configuration>,
{
    let mut pool: Vec<&T> = candidates.iter().filter(|c| matches(c.as_ref(), requested)).collect();
    let mut ranked = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let winner = (1..pool.len()).fold(0, |best, i| {
            if is_better_than(pool[best].as_ref(), pool[i].as_ref(), Some(requested)) {
                i
            } else {
                best
            }
        });
        ranked.push(pool.remove(winner));
    }

    debug!(%requested, legal = ranked.len(), pool = candidates.len(), "ranked candidates");
    ranked
}
