use super::render;
use crate::models::DiffView;
use anyhow::{Result, bail};
use resconf::prelude::*;

/// Name that refers to the profile's environment rather than a variant.
pub const ENVIRONMENT: &str = "environment";

/// Reports the axis groups on which two named configurations differ.
///
/// # Errors
/// Returns an error when either name is neither a variant nor `environment`.
pub fn diff_variants(profile: &Profile, a: &str, b: &str, json: bool) -> Result<String> {
    let mask = diff(&lookup(profile, a)?, &lookup(profile, b)?);
    render(&DiffView { a, b, mask, groups: mask.to_string() }, json)
}

fn lookup(profile: &Profile, name: &str) -> Result<Configuration> {
    if name == ENVIRONMENT {
        return Ok(profile.environment);
    }
    match profile.variant(name) {
        Some(variant) => Ok(variant.qualifiers),
        None => bail!("Unknown variant '{name}'"),
    }
}
