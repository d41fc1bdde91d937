use super::render;
use crate::models::VariantView;
use anyhow::{Context, Result};
use resconf::kernel::from_environment;
use resconf::prelude::*;
use tracing::info;

/// Picks the variant that best fits the profile's environment.
///
/// # Errors
/// Returns an error when no variant is legal for the environment.
pub fn select(profile: &Profile, json: bool) -> Result<String> {
    let requested = from_environment(profile);
    let best = select_best(&profile.variants, &requested)
        .with_context(|| format!("No variant matches environment '{requested}'"))?;

    info!(variant = %best.name, environment = %requested, "Selected variant");
    render(&VariantView::from(best), json)
}
