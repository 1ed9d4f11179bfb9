//! # Aflatoxin Risk Classification
//!
//! Pure classification of an aflatoxin contamination reading into one of
//! four safety tiers. The thresholds follow the regulatory guidance the
//! backend applies when grading maize batches:
//!
//! | Range (ppb)   | Category          | Color  |
//! |---------------|-------------------|--------|
//! | 0 <= x <= 5   | Safe for Children | green  |
//! | 5 < x <= 10   | Adults Only       | yellow |
//! | 10 < x <= 20  | Animal Feed Only  | orange |
//! | x > 20        | Unsafe            | red    |
//!
//! Classification is total: every representable reading maps to exactly one
//! category and no error paths exist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Upper bound of the "Safe for Children" tier (ppb, inclusive).
pub const CHILD_SAFE_MAX_PPB: f64 = 5.0;
/// Upper bound of the "Adults Only" tier (ppb, inclusive).
pub const ADULT_SAFE_MAX_PPB: f64 = 10.0;
/// Upper bound of the "Animal Feed Only" tier (ppb, inclusive).
pub const FEED_SAFE_MAX_PPB: f64 = 20.0;

/// An aflatoxin contamination level in parts per billion.
///
/// Backend records are inconsistently typed: the `aflatoxin` field may be a
/// JSON number, a numeric string, or missing entirely. [`Reading::from_raw`]
/// applies the coercion contract the mobile clients have always shipped
/// with: anything that fails to parse becomes `0.0`. That fail-open default
/// means a corrupt reading displays as "Safe for Children"; it is kept for
/// compatibility with the deployed backend and flagged to stakeholders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(f64);

impl Reading {
    /// Create a reading from a known-numeric level. Negative and NaN
    /// values are clamped to zero; readings are non-negative by
    /// definition. Positive infinity is kept and classifies as Unsafe,
    /// matching how the deployed clients treat an "Infinity" record.
    pub fn new(ppb: f64) -> Self {
        if ppb.is_nan() || ppb < 0.0 {
            Reading(0.0)
        } else {
            Reading(ppb)
        }
    }

    /// Coerce a raw JSON value into a reading.
    ///
    /// Accepts numbers and numeric strings; everything else (null, absent,
    /// garbage text) falls back to `0.0`.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let ppb = match raw {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        Reading::new(ppb)
    }

    /// The level in parts per billion.
    pub fn ppb(&self) -> f64 {
        self.0
    }

    /// Classify this reading into its safety tier.
    pub fn classify(&self) -> RiskCategory {
        RiskCategory::classify(*self)
    }
}

impl Default for Reading {
    fn default() -> Self {
        Reading(0.0)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ppb", self.0)
    }
}

/// Display color associated with a risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Yellow,
    Orange,
    Red,
}

/// The four mutually exclusive safety tiers, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    SafeForChildren,
    AdultsOnly,
    AnimalFeedOnly,
    Unsafe,
}

impl RiskCategory {
    /// Map a reading to its tier. First match wins, ascending.
    pub fn classify(reading: Reading) -> RiskCategory {
        let level = reading.ppb();
        if level <= CHILD_SAFE_MAX_PPB {
            RiskCategory::SafeForChildren
        } else if level <= ADULT_SAFE_MAX_PPB {
            RiskCategory::AdultsOnly
        } else if level <= FEED_SAFE_MAX_PPB {
            RiskCategory::AnimalFeedOnly
        } else {
            RiskCategory::Unsafe
        }
    }

    /// Human-readable label, matching the backend's display strings.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::SafeForChildren => "Safe for Children",
            RiskCategory::AdultsOnly => "Adults Only",
            RiskCategory::AnimalFeedOnly => "Animal Feed Only",
            RiskCategory::Unsafe => "Unsafe",
        }
    }

    /// Display color tag for badges and stat cards.
    pub fn color(&self) -> ColorTag {
        match self {
            RiskCategory::SafeForChildren => ColorTag::Green,
            RiskCategory::AdultsOnly => ColorTag::Yellow,
            RiskCategory::AnimalFeedOnly => ColorTag::Orange,
            RiskCategory::Unsafe => ColorTag::Red,
        }
    }

    /// True for any tier above the child-safe threshold but still fit for
    /// some use (the dashboard counts these as warnings).
    pub fn is_warning(&self) -> bool {
        matches!(self, RiskCategory::AdultsOnly | RiskCategory::AnimalFeedOnly)
    }

    /// True only for the top tier.
    pub fn is_alert(&self) -> bool {
        matches!(self, RiskCategory::Unsafe)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boundaries_map_to_expected_tiers() {
        let cases = [
            (5.0, ColorTag::Green),
            (5.0001, ColorTag::Yellow),
            (10.0, ColorTag::Yellow),
            (10.0001, ColorTag::Orange),
            (20.0, ColorTag::Orange),
            (20.0001, ColorTag::Red),
        ];
        for (level, color) in cases {
            assert_eq!(
                Reading::new(level).classify().color(),
                color,
                "level {level}"
            );
        }
    }

    #[test]
    fn zero_is_safe_for_children() {
        assert_eq!(
            Reading::new(0.0).classify(),
            RiskCategory::SafeForChildren
        );
    }

    #[test]
    fn unparseable_raw_values_fall_back_to_safe() {
        for raw in [None, Some(json!(null)), Some(json!("abc")), Some(json!({}))] {
            let reading = Reading::from_raw(raw.as_ref());
            assert_eq!(reading.ppb(), 0.0);
            assert_eq!(reading.classify(), RiskCategory::SafeForChildren);
        }
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(Reading::from_raw(Some(&json!("7.5"))).ppb(), 7.5);
        assert_eq!(Reading::from_raw(Some(&json!(" 12 "))).ppb(), 12.0);
    }

    #[test]
    fn negative_readings_clamp_to_zero() {
        assert_eq!(Reading::new(-3.0).ppb(), 0.0);
        assert_eq!(Reading::from_raw(Some(&json!(-3.0))).classify(), RiskCategory::SafeForChildren);
    }

    #[test]
    fn infinite_readings_classify_as_unsafe() {
        assert_eq!(Reading::new(f64::INFINITY).classify(), RiskCategory::Unsafe);
        assert_eq!(
            Reading::from_raw(Some(&json!("Infinity"))).classify(),
            RiskCategory::Unsafe
        );
        // NaN has no magnitude to act on and stays at the harmless default.
        assert_eq!(Reading::new(f64::NAN).ppb(), 0.0);
    }

    #[test]
    fn warning_and_alert_flags_track_the_tiers() {
        assert!(!RiskCategory::SafeForChildren.is_warning());
        assert!(RiskCategory::AdultsOnly.is_warning());
        assert!(RiskCategory::AnimalFeedOnly.is_warning());
        assert!(!RiskCategory::Unsafe.is_warning());
        assert!(RiskCategory::Unsafe.is_alert());
        assert!(!RiskCategory::AdultsOnly.is_alert());
    }

    #[test]
    fn classification_is_total_and_exclusive() {
        for level in [0.0, 2.5, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0, 1e9] {
            // Exactly one category: classify returns a single variant and
            // labels are distinct across tiers.
            let category = Reading::new(level).classify();
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn labels_match_backend_strings() {
        assert_eq!(RiskCategory::SafeForChildren.label(), "Safe for Children");
        assert_eq!(RiskCategory::AdultsOnly.label(), "Adults Only");
        assert_eq!(RiskCategory::AnimalFeedOnly.label(), "Animal Feed Only");
        assert_eq!(RiskCategory::Unsafe.label(), "Unsafe");
    }
}
