use crate::core::{Direction, Viewport};
use crate::ease::Ease;
use crate::error::{RondoError, RondoResult};

/// Top-level input: which pattern plays and the images it plays over.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    /// Drawing surface in user units. Omitted means "use the first image's
    /// intrinsic size", resolved through the size probe at compile time.
    #[serde(default)]
    pub viewport: Option<Viewport>,
    pub pattern: PatternSpec,
    pub slides: Vec<Slide>,
}

/// The choreography to compile. Carousel carries its shared options here
/// because all of its slides move in lockstep; every other pattern is
/// configured per slide.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternSpec {
    CoverIn,
    CoverOut,
    FadeSwitch,
    HardCut,
    Carousel {
        #[serde(default)]
        duration_seconds: Option<f64>,
        #[serde(default)]
        direction: Option<Direction>,
        #[serde(default)]
        easing: Option<Ease>,
    },
    Push,
    ClickReveal,
}

/// One image plus its per-slide overrides. Every optional field falls back
/// to the active pattern's documented default.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    pub url: String,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub enter_seconds: Option<f64>,
    #[serde(default)]
    pub stay_seconds: Option<f64>,
    #[serde(default)]
    pub exit_seconds: Option<f64>,
    #[serde(default)]
    pub easing: Option<Ease>,
    #[serde(default)]
    pub hot_area: Option<HotArea>,
}

impl Slide {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            direction: None,
            enter_seconds: None,
            stay_seconds: None,
            exit_seconds: None,
            easing: None,
            hot_area: None,
        }
    }
}

/// Click target for reveal patterns, in viewport units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HotArea {
    fn validate(&self) -> RondoResult<()> {
        for v in [self.x, self.y, self.width, self.height] {
            if !v.is_finite() {
                return Err(RondoError::configuration("hot area must be finite"));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(RondoError::configuration("hot area size must be >= 0"));
        }
        Ok(())
    }
}

impl Storyboard {
    pub fn validate(&self) -> RondoResult<()> {
        if self.slides.is_empty() {
            return Err(RondoError::configuration("storyboard has no slides"));
        }
        if let Some(vp) = self.viewport {
            // Derived deserialization bypasses the checked constructor.
            Viewport::new(vp.width, vp.height)?;
        }
        if let PatternSpec::Carousel {
            duration_seconds: Some(d),
            ..
        } = self.pattern
        {
            if !d.is_finite() || d < 0.0 {
                return Err(RondoError::configuration(format!(
                    "carousel duration must be finite and >= 0, got {d}"
                )));
            }
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.url.is_empty() {
                return Err(RondoError::configuration(format!("slide {i} has no url")));
            }
            for (name, v) in [
                ("enter", slide.enter_seconds),
                ("stay", slide.stay_seconds),
                ("exit", slide.exit_seconds),
            ] {
                if let Some(v) = v {
                    if !v.is_finite() || v < 0.0 {
                        return Err(RondoError::configuration(format!(
                            "slide {i} {name} duration must be finite and >= 0, got {v}"
                        )));
                    }
                }
            }
            if let Some(area) = &slide.hot_area {
                area.validate()?;
            }
        }
        Ok(())
    }
}
