pub mod diff;
pub mod matching;
pub mod rank;
pub mod select;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;

/// Renders one value as text or pretty JSON.
fn render<T: Serialize + Display>(value: &T, json: bool) -> Result<String> {
    if json { to_json(value) } else { Ok(value.to_string()) }
}

/// Renders a list one item per line, or as a JSON array.
fn render_all<T: Serialize + Display>(values: &[T], json: bool) -> Result<String> {
    if json {
        return to_json(&values);
    }
    Ok(values.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
