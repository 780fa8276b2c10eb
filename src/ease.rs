use crate::core::fmt_num;
use crate::error::{RondoError, RondoResult};

/// Cubic-bezier pacing curve in the form SMIL `keySplines` expects: two
/// control points, each coordinate in `[0, 1]` on the x axis.
///
/// Serialized as the four space-separated numbers ("0.42 0 0.58 1") so
/// storyboard JSON carries the same text that ends up in the markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ease {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Ease {
    /// CSS `ease`.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`. The pacing used when a segment names none.
    pub const IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// Identity pacing. Used on hold segments so they contribute no motion
    /// shape of their own.
    pub const HOLD: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Steep mid-section pop, the default for click-triggered reveals.
    pub const SHARP: Self = Self::new(0.8, 0.0, 0.2, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Parse "x1 y1 x2 y2". Exactly four finite numbers, any whitespace
    /// between them.
    pub fn parse(s: &str) -> RondoResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(RondoError::configuration(format!(
                "easing must be four numbers, got '{s}'"
            )));
        }
        let mut vals = [0.0_f64; 4];
        for (slot, part) in vals.iter_mut().zip(&parts) {
            let v: f64 = part.parse().map_err(|_| {
                RondoError::configuration(format!("easing component '{part}' is not a number"))
            })?;
            if !v.is_finite() {
                return Err(RondoError::configuration(format!(
                    "easing component '{part}' must be finite"
                )));
            }
            *slot = v;
        }
        Ok(Self::new(vals[0], vals[1], vals[2], vals[3]))
    }

    pub fn is_hold(self) -> bool {
        self == Self::HOLD
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::IN_OUT
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.x1),
            fmt_num(self.y1),
            fmt_num(self.x2),
            fmt_num(self.y2)
        )
    }
}

impl serde::Serialize for Ease {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ease::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_print_smil_text() {
        assert_eq!(Ease::IN_OUT.to_string(), "0.42 0 0.58 1");
        assert_eq!(Ease::EASE.to_string(), "0.25 0.1 0.25 1");
        assert_eq!(Ease::HOLD.to_string(), "0 0 1 1");
        assert_eq!(Ease::SHARP.to_string(), "0.8 0 0.2 1");
    }

    #[test]
    fn parse_roundtrips_presets() {
        for preset in [Ease::EASE, Ease::IN, Ease::OUT, Ease::IN_OUT, Ease::SHARP] {
            assert_eq!(Ease::parse(&preset.to_string()).unwrap(), preset);
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Ease::parse("0.42 0 0.58").is_err());
        assert!(Ease::parse("0.42 0 0.58 1 0").is_err());
        assert!(Ease::parse("a b c d").is_err());
        assert!(Ease::parse("0 0 inf 1").is_err());
        assert!(Ease::parse("").is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Ease::OUT).unwrap();
        assert_eq!(json, "\"0 0 0.58 1\"");
        let back: Ease = serde_json::from_str("\"0.42 0 1 1\"").unwrap();
        assert_eq!(back, Ease::IN);
        let bad: Result<Ease, _> = serde_json::from_str("\"fast\"");
        assert!(bad.is_err());
    }
}
