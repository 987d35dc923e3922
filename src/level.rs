use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The system-wide text size chosen by user, ordered from smallest to largest.
/// Levels reported by host but not known by this crate (future platform versions) are `Unknown`.
///
/// see details: https://developer.apple.com/documentation/swiftui/dynamictypesize
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSizeLevel {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    Accessibility1,
    Accessibility2,
    Accessibility3,
    Accessibility4,
    Accessibility5,
    #[serde(other)]
    Unknown,
}

impl TextSizeLevel {
    pub const ALL: [TextSizeLevel; 12] = [
        TextSizeLevel::XSmall,
        TextSizeLevel::Small,
        TextSizeLevel::Medium,
        TextSizeLevel::Large,
        TextSizeLevel::XLarge,
        TextSizeLevel::XxLarge,
        TextSizeLevel::XxxLarge,
        TextSizeLevel::Accessibility1,
        TextSizeLevel::Accessibility2,
        TextSizeLevel::Accessibility3,
        TextSizeLevel::Accessibility4,
        TextSizeLevel::Accessibility5,
    ];

    pub fn scale(&self) -> ScaleFactor {
        let value = match self {
            TextSizeLevel::XSmall => 0.8,
            TextSizeLevel::Small => 0.9,
            TextSizeLevel::Medium => 1.0,
            TextSizeLevel::Large => 1.1,
            TextSizeLevel::XLarge => 1.2,
            TextSizeLevel::XxLarge => 1.3,
            TextSizeLevel::XxxLarge => 1.4,
            TextSizeLevel::Accessibility1 => 1.5,
            TextSizeLevel::Accessibility2 => 1.6,
            TextSizeLevel::Accessibility3 => 1.7,
            TextSizeLevel::Accessibility4 => 1.8,
            TextSizeLevel::Accessibility5 => 2.0,
            TextSizeLevel::Unknown => 1.0,
        };
        ScaleFactor(value)
    }

    pub fn is_accessibility(&self) -> bool {
        *self >= TextSizeLevel::Accessibility1 && *self <= TextSizeLevel::Accessibility5
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextSizeLevel::XSmall => "xSmall",
            TextSizeLevel::Small => "small",
            TextSizeLevel::Medium => "medium",
            TextSizeLevel::Large => "large",
            TextSizeLevel::XLarge => "xLarge",
            TextSizeLevel::XxLarge => "xxLarge",
            TextSizeLevel::XxxLarge => "xxxLarge",
            TextSizeLevel::Accessibility1 => "accessibility1",
            TextSizeLevel::Accessibility2 => "accessibility2",
            TextSizeLevel::Accessibility3 => "accessibility3",
            TextSizeLevel::Accessibility4 => "accessibility4",
            TextSizeLevel::Accessibility5 => "accessibility5",
            TextSizeLevel::Unknown => "unknown",
        }
    }
}

impl Default for TextSizeLevel {
    fn default() -> Self {
        TextSizeLevel::Medium
    }
}

impl fmt::Display for TextSizeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextSizeLevel {
    type Err = std::convert::Infallible;

    /// Never fails, unrecognized names read as `Unknown`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = Self::ALL
            .iter()
            .find(|level| level.name() == value)
            .copied()
            .unwrap_or(TextSizeLevel::Unknown);
        Ok(level)
    }
}

/// Multiplier applied to page font sizes, always within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    pub const MIN: f32 = 0.8;
    pub const MAX: f32 = 2.0;
    pub const NEUTRAL: ScaleFactor = ScaleFactor(1.0);

    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline(always)]
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps accessibility text size level to page scale factor.
pub fn scale(level: TextSizeLevel) -> ScaleFactor {
    level.scale()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_scale_table() {
        let expected = [0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 2.0];
        for (level, expected) in TextSizeLevel::ALL.iter().zip(expected) {
            assert_eq!(scale(*level).value(), expected, "{level}");
        }
    }

    #[test]
    pub fn test_unknown_level_is_neutral() {
        assert_eq!(scale(TextSizeLevel::Unknown), ScaleFactor::NEUTRAL);
    }

    #[test]
    pub fn test_levels_ordered_by_scale() {
        for pair in TextSizeLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].scale() < pair[1].scale());
        }
    }

    #[test]
    pub fn test_level_from_name() {
        assert_eq!(level("xxxLarge"), TextSizeLevel::XxxLarge);
        assert_eq!(level("accessibility3"), TextSizeLevel::Accessibility3);
        assert_eq!(level("accessibility9"), TextSizeLevel::Unknown);
    }

    #[test]
    pub fn test_level_deserialize_unknown() {
        let value: Vec<TextSizeLevel> =
            serde_json::from_str(r#"["xSmall", "xxLarge", "huge"]"#).expect("levels");
        assert_eq!(
            value,
            [
                TextSizeLevel::XSmall,
                TextSizeLevel::XxLarge,
                TextSizeLevel::Unknown
            ]
        );
    }

    #[test]
    pub fn test_accessibility_levels() {
        assert!(!TextSizeLevel::XxxLarge.is_accessibility());
        assert!(TextSizeLevel::Accessibility1.is_accessibility());
        assert!(!TextSizeLevel::Unknown.is_accessibility());
    }

    #[test]
    pub fn test_scale_factor_bounded() {
        assert_eq!(ScaleFactor::new(5.0).value(), 2.0);
        assert_eq!(ScaleFactor::new(0.1).value(), 0.8);
        assert_eq!(ScaleFactor::new(f32::NAN), ScaleFactor::NEUTRAL);
    }

    fn level(name: &str) -> TextSizeLevel {
        name.parse().expect("infallible")
    }
}
