use crate::error::{RondoError, RondoResult};

pub use kurbo::Vec2;

/// Target drawing surface, in user units. Matches the `viewBox` of the
/// produced document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> RondoResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(RondoError::configuration("Viewport must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(RondoError::configuration("Viewport must be >= 0"));
        }
        Ok(Self { width, height })
    }

    /// True before any source has reported its intrinsic size.
    pub fn is_unsized(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Motion direction of an actor, named after where the actor is heading.
///
/// Serialized as the single letters `L`, `R`, `T`, `B` (left, right, top,
/// bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "T")]
    Up,
    #[serde(rename = "B")]
    Down,
}

impl Direction {
    /// Displacement that carries an actor from rest to fully offscreen,
    /// one unit past the viewport edge.
    ///
    /// An actor entering from this direction starts at `-travel` and moves
    /// by `+travel` back to rest; an actor exiting moves by `+travel` away
    /// from rest.
    pub fn travel(self, viewport: Viewport) -> Vec2 {
        let dx = viewport.width + 1.0;
        let dy = viewport.height + 1.0;
        match self {
            Direction::Left => Vec2::new(-dx, 0.0),
            Direction::Right => Vec2::new(dx, 0.0),
            Direction::Up => Vec2::new(0.0, -dy),
            Direction::Down => Vec2::new(0.0, dy),
        }
    }
}

/// Shortest decimal form of a finite number, as attribute text.
///
/// `756.0` prints as `756`, `0.5` as `0.5`. Negative zero normalizes to `0`
/// so equal values always produce equal markup.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Round to six decimal places, the precision carried by key times.
pub fn round6(t: f64) -> f64 {
    (t * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_mirror_travel() {
        let vp = Viewport::new(640.0, 360.0).unwrap();
        let left = Direction::Left.travel(vp);
        let right = Direction::Right.travel(vp);
        assert_eq!(left.x, -641.0);
        assert_eq!(right.x, 641.0);
        assert_eq!(left.x, -right.x);
        assert_eq!(left.y, 0.0);
        assert_eq!(right.y, 0.0);
    }

    #[test]
    fn vertical_travel_spans_height() {
        let vp = Viewport::new(100.0, 50.0).unwrap();
        assert_eq!(Direction::Up.travel(vp), Vec2::new(0.0, -51.0));
        assert_eq!(Direction::Down.travel(vp), Vec2::new(0.0, 51.0));
    }

    #[test]
    fn fmt_num_prints_shortest_form() {
        assert_eq!(fmt_num(756.0), "756");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-641.0), "-641");
    }

    #[test]
    fn round6_truncates_binary_noise() {
        assert_eq!(round6(0.1 + 0.2), 0.3);
        assert_eq!(round6(1.0 / 3.0), 0.333333);
    }

    #[test]
    fn viewport_rejects_bad_dimensions() {
        assert!(Viewport::new(f64::NAN, 1.0).is_err());
        assert!(Viewport::new(-1.0, 1.0).is_err());
        assert!(Viewport::new(0.0, 0.0).unwrap().is_unsized());
    }

    #[test]
    fn direction_serializes_as_letters() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"T\"");
        let back: Direction = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(back, Direction::Left);
    }
}
