use resconf::prelude::{Axis, AxisMask, Variant};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct VariantView<'a> {
    pub name: &'a str,
    pub qualifiers: String,
}

impl<'a> From<&'a Variant> for VariantView<'a> {
    fn from(variant: &'a Variant) -> Self {
        Self { name: &variant.name, qualifiers: variant.qualifiers.to_string() }
    }
}

impl fmt::Display for VariantView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.qualifiers)
    }
}

#[derive(Debug, Serialize)]
pub struct MatchView<'a> {
    pub name: &'a str,
    pub matches: bool,
    /// Highest-priority conflicting axis.
    pub conflict: Option<Axis>,
}

impl fmt::Display for MatchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conflict {
            Some(axis) => write!(f, "{}\tconflict: {axis}", self.name),
            None => write!(f, "{}\tmatch", self.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiffView<'a> {
    pub a: &'a str,
    pub b: &'a str,
    /// Raw bits, as exchanged with other processes.
    pub mask: AxisMask,
    pub groups: String,
}

impl fmt::Display for DiffView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:#06x}", self.groups, self.mask.bits())
    }
}
