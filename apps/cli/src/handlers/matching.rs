use super::render_all;
use crate::models::MatchView;
use anyhow::Result;
use resconf::kernel::from_environment;
use resconf::prelude::*;

/// Reports, for every variant in declaration order, whether it is legal for the environment.
///
/// # Errors
/// Returns an error if JSON output cannot be serialized.
pub fn match_variants(profile: &Profile, json: bool) -> Result<String> {
    let requested = from_environment(profile);
    let verdicts: Vec<MatchView<'_>> = profile
        .variants
        .iter()
        .map(|variant| {
            let conflict = first_conflict(&variant.qualifiers, &requested);
            MatchView { name: &variant.name, matches: conflict.is_none(), conflict }
        })
        .collect();

    render_all(&verdicts, json)
}
