//! Per-axis compatibility and tie-break rules.
//!
//! Rules work on [`Configuration::axis_value`], where `0` is always the wildcard.
//! Both the match filter and the ranking cascade read from [`RANKING_ORDER`], so the
//! priority of each axis lives in exactly one place.

use resconf_domain::{Axis, Configuration, Density, KeysHidden, ScreenSize};

/// How a candidate value must relate to a concrete requested value to be legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Values must be equal.
    Equal,
    /// Candidate must not exceed the request (dp metrics, SDK version).
    AtMost,
    /// Ordered buckets; unknown buckets only match themselves.
    BucketAtMost,
    /// Equal, except exposed keys also serve a soft keyboard.
    KeysHidden,
    /// Always legal: any density can be scaled.
    Scalable,
}

impl Compatibility {
    /// `base` and `requested` are both concrete here.
    #[must_use]
    pub fn allows(self, base: u32, requested: u32) -> bool {
        match self {
            Self::Equal => base == requested,
            Self::AtMost => base <= requested,
            Self::BucketAtMost => {
                if is_known_bucket(base) && is_known_bucket(requested) {
                    base <= requested
                } else {
                    base == requested
                }
            },
            Self::KeysHidden => {
                base == requested
                    || (base == u32::from(KeysHidden::No.raw())
                        && requested == u32::from(KeysHidden::Soft.raw()))
            },
            Self::Scalable => true,
        }
    }
}

/// Which of two differing candidates a concrete request prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The one equal to the request.
    Exact,
    /// The largest value that does not exceed the request.
    LargestFitting,
    /// Like [`Preference::LargestFitting`] over the documented buckets; unknown buckets
    /// only agree exactly.
    ScreenBucket,
    /// Nearest dpi, see [`density_preference`].
    NearestDensity,
}

/// Outcome of comparing one axis of two candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Base,
    Test,
    Inconclusive,
}

/// One row of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRule {
    pub axis: Axis,
    pub compatibility: Compatibility,
    pub preference: Preference,
}

const fn rule(axis: Axis, compatibility: Compatibility, preference: Preference) -> AxisRule {
    AxisRule { axis, compatibility, preference }
}

/// Axes in ranking priority, highest first.
pub const RANKING_ORDER: [AxisRule; 20] = [
    rule(Axis::Mcc, Compatibility::Equal, Preference::Exact),
    rule(Axis::Mnc, Compatibility::Equal, Preference::Exact),
    rule(Axis::Language, Compatibility::Equal, Preference::Exact),
    rule(Axis::Country, Compatibility::Equal, Preference::Exact),
    rule(Axis::ScreenSize, Compatibility::BucketAtMost, Preference::ScreenBucket),
    rule(Axis::ScreenLong, Compatibility::Equal, Preference::Exact),
    rule(Axis::Orientation, Compatibility::Equal, Preference::Exact),
    rule(Axis::UiModeType, Compatibility::Equal, Preference::Exact),
    rule(Axis::UiModeNight, Compatibility::Equal, Preference::Exact),
    rule(Axis::Density, Compatibility::Scalable, Preference::NearestDensity),
    rule(Axis::Touchscreen, Compatibility::Equal, Preference::Exact),
    rule(Axis::Keyboard, Compatibility::Equal, Preference::Exact),
    rule(Axis::KeysHidden, Compatibility::KeysHidden, Preference::Exact),
    rule(Axis::Navigation, Compatibility::Equal, Preference::Exact),
    rule(Axis::NavHidden, Compatibility::Equal, Preference::Exact),
    rule(Axis::SdkVersion, Compatibility::AtMost, Preference::LargestFitting),
    rule(Axis::LayoutDirection, Compatibility::Equal, Preference::Exact),
    rule(Axis::SmallestScreenWidthDp, Compatibility::AtMost, Preference::LargestFitting),
    rule(Axis::ScreenWidthDp, Compatibility::AtMost, Preference::LargestFitting),
    rule(Axis::ScreenHeightDp, Compatibility::AtMost, Preference::LargestFitting),
];

impl AxisRule {
    /// Whether `base` is legal for `requested` on this axis.
    #[must_use]
    pub fn compatible(&self, base: &Configuration, requested: &Configuration) -> bool {
        let (b, r) = (base.axis_value(self.axis), requested.axis_value(self.axis));
        b == 0 || r == 0 || self.compatibility.allows(b, r)
    }

    /// Compares one axis of two candidates that both passed the match filter.
    #[must_use]
    pub fn decide(
        &self,
        base: &Configuration,
        test: &Configuration,
        requested: Option<&Configuration>,
    ) -> Verdict {
        let (b, t) = (base.axis_value(self.axis), test.axis_value(self.axis));
        if b == t {
            return Verdict::Inconclusive;
        }

        let requested = requested.map(|r| r.axis_value(self.axis)).filter(|r| *r != 0);
        if let Some(r) = requested {
            let verdict = match self.preference {
                Preference::Exact => exact_preference(b, t, r),
                Preference::LargestFitting => largest_fitting(b, t, r),
                Preference::ScreenBucket => screen_bucket_preference(b, t, r),
                Preference::NearestDensity => density_preference(b, t, r),
            };
            if verdict != Verdict::Inconclusive {
                return verdict;
            }
        }

        specificity(b, t)
    }
}

/// A concrete value beats the wildcard; two concrete values are inconclusive.
const fn specificity(base: u32, test: u32) -> Verdict {
    match (base, test) {
        (0, 0) => Verdict::Inconclusive,
        (0, _) => Verdict::Test,
        (_, 0) => Verdict::Base,
        _ => Verdict::Inconclusive,
    }
}

const fn exact_preference(base: u32, test: u32, requested: u32) -> Verdict {
    match (base == requested, test == requested) {
        (true, false) => Verdict::Base,
        (false, true) => Verdict::Test,
        _ => Verdict::Inconclusive,
    }
}

fn largest_fitting(base: u32, test: u32, requested: u32) -> Verdict {
    let fits = |v: u32| v != 0 && v <= requested;
    match (fits(base), fits(test)) {
        (true, true) if base > test => Verdict::Base,
        (true, true) => Verdict::Test,
        (true, false) => Verdict::Base,
        (false, true) => Verdict::Test,
        (false, false) => Verdict::Inconclusive,
    }
}

fn is_known_bucket(raw: u32) -> bool {
    u8::try_from(raw).is_ok_and(|raw| ScreenSize::from_raw(raw).is_known())
}

fn screen_bucket_preference(base: u32, test: u32, requested: u32) -> Verdict {
    if !is_known_bucket(requested) || [base, test].iter().any(|v| *v != 0 && !is_known_bucket(*v))
    {
        return exact_preference(base, test, requested);
    }

    largest_fitting(base, test, requested)
}

/// Density tie-break against a concrete request.
///
/// A density equal to the request needs no scaling and wins outright. Past that, `anydpi`
/// beats anything that needs scaling, `nodpi` loses to anything scalable and an unset
/// density reads as medium (160). Otherwise the smaller absolute dpi distance wins, and
/// equal distances go to the higher dpi, since scaling down keeps detail. Equal effective
/// dpi is left to specificity.
#[must_use]
pub fn density_preference(base: u32, test: u32, requested: u32) -> Verdict {
    let exact = exact_preference(base, test, requested);
    if exact != Verdict::Inconclusive {
        return exact;
    }

    let any = u32::from(Density::ANY.raw());
    let none = u32::from(Density::NONE.raw());
    if requested == any || requested == none {
        return Verdict::Inconclusive;
    }

    match (base, test) {
        (b, _) if b == any => return Verdict::Base,
        (_, t) if t == any => return Verdict::Test,
        (b, _) if b == none => return Verdict::Test,
        (_, t) if t == none => return Verdict::Base,
        _ => {},
    }

    let medium = u32::from(Density::MEDIUM.raw());
    let effective = |v: u32| if v == 0 { medium } else { v };
    let (eb, et) = (effective(base), effective(test));
    if eb == et {
        return Verdict::Inconclusive;
    }

    let (db, dt) = (eb.abs_diff(requested), et.abs_diff(requested));
    match db.cmp(&dt) {
        std::cmp::Ordering::Less => Verdict::Base,
        std::cmp::Ordering::Greater => Verdict::Test,
        std::cmp::Ordering::Equal if eb > et => Verdict::Base,
        std::cmp::Ordering::Equal => Verdict::Test,
    }
}
