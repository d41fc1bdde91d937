use resconf_domain::{Axis, AxisMask, Configuration};

/// Axis groups on which `a` and `b` disagree.
///
/// Symmetric, and empty for equal configurations. Axes sharing a group (language and
/// country, for instance) set the same bit.
#[must_use]
pub fn diff(a: &Configuration, b: &Configuration) -> AxisMask {
    Axis::ALL
        .into_iter()
        .filter(|axis| a.axis_value(*axis) != b.axis_value(*axis))
        .fold(AxisMask::empty(), |mask, axis| mask | axis.group())
}

/// `true` when moving from `previous` to `current` touches a group outside `handled`,
/// i.e. resources picked for `previous` can no longer be trusted.
#[must_use]
pub fn requires_reload(
    previous: &Configuration,
    current: &Configuration,
    handled: AxisMask,
) -> bool {
    !diff(previous, current).difference(handled).is_empty()
}
