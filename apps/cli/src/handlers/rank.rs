use super::render_all;
use crate::models::VariantView;
use anyhow::Result;
use resconf::kernel::from_environment;
use resconf::prelude::*;

/// Lists the legal variants, best first. Illegal variants are left out.
///
/// # Errors
/// Returns an error if JSON output cannot be serialized.
pub fn rank_variants(profile: &Profile, json: bool) -> Result<String> {
    let requested = from_environment(profile);
    let ranked: Vec<VariantView<'_>> =
        rank(&profile.variants, &requested).into_iter().map(VariantView::from).collect();

    render_all(&ranked, json)
}
