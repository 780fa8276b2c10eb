use crate::core::{Direction, Viewport};
use crate::ease::Ease;
use crate::error::{RondoError, RondoResult};
use crate::model::{HotArea, PatternSpec, Slide, Storyboard};

/// Programmatic front door for storyboards that are not loaded from JSON.
pub struct StoryboardBuilder {
    pattern: PatternSpec,
    viewport: Option<Viewport>,
    slides: Vec<Slide>,
}

impl StoryboardBuilder {
    pub fn new(pattern: PatternSpec) -> Self {
        Self {
            pattern,
            viewport: None,
            slides: Vec::new(),
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn build(self) -> RondoResult<Storyboard> {
        let storyboard = Storyboard {
            viewport: self.viewport,
            pattern: self.pattern,
            slides: self.slides,
        };
        storyboard.validate()?;
        Ok(storyboard)
    }
}

pub struct SlideBuilder {
    url: String,
    direction: Option<Direction>,
    enter_seconds: Option<f64>,
    stay_seconds: Option<f64>,
    exit_seconds: Option<f64>,
    easing: Option<Ease>,
    hot_area: Option<HotArea>,
}

impl SlideBuilder {
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

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn enter_seconds(mut self, seconds: f64) -> Self {
        self.enter_seconds = Some(seconds);
        self
    }

    pub fn stay_seconds(mut self, seconds: f64) -> Self {
        self.stay_seconds = Some(seconds);
        self
    }

    pub fn exit_seconds(mut self, seconds: f64) -> Self {
        self.exit_seconds = Some(seconds);
        self
    }

    pub fn easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn hot_area(mut self, area: HotArea) -> Self {
        self.hot_area = Some(area);
        self
    }

    pub fn build(self) -> RondoResult<Slide> {
        if self.url.trim().is_empty() {
            return Err(RondoError::configuration("slide url must be non-empty"));
        }
        Ok(Slide {
            url: self.url,
            direction: self.direction,
            enter_seconds: self.enter_seconds,
            stay_seconds: self.stay_seconds,
            exit_seconds: self.exit_seconds,
            easing: self.easing,
            hot_area: self.hot_area,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_create_expected_structure() {
        let slide = SlideBuilder::new("a.png")
            .direction(Direction::Left)
            .stay_seconds(1.5)
            .easing(Ease::OUT)
            .build()
            .unwrap();
        assert_eq!(slide.direction, Some(Direction::Left));
        assert_eq!(slide.stay_seconds, Some(1.5));

        let storyboard = StoryboardBuilder::new(PatternSpec::CoverOut)
            .viewport(Viewport {
                width: 320.0,
                height: 180.0,
            })
            .slide(slide)
            .slide(SlideBuilder::new("b.png").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(storyboard.slides.len(), 2);
        assert!(storyboard.viewport.is_some());
    }

    #[test]
    fn slideless_storyboard_is_rejected() {
        assert!(StoryboardBuilder::new(PatternSpec::HardCut).build().is_err());
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(SlideBuilder::new("   ").build().is_err());
    }

    #[test]
    fn negative_durations_are_rejected_at_build() {
        let storyboard = StoryboardBuilder::new(PatternSpec::FadeSwitch)
            .slide(
                SlideBuilder::new("a.png")
                    .exit_seconds(-1.0)
                    .build()
                    .unwrap(),
            )
            .build();
        assert!(storyboard.is_err());
    }
}
