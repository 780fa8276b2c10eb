use crate::core::{Vec2, Viewport};
use crate::directive::AnimationDirective;
use crate::error::{RondoError, RondoResult};
use crate::model::{HotArea, PatternSpec, Slide, Storyboard};

pub mod carousel;
pub mod click_reveal;
pub mod cover_in;
pub mod push;
pub mod relay;

/// A fully-planned scene: an ordered stack of image layers and the
/// directives that drive them, ready for markup emission.
///
/// Layers are in paint order, first at the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Choreography {
    pub viewport: Viewport,
    pub layers: Vec<Layer>,
}

/// One image group in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub label: String,
    pub url: String,
    /// Static placement of the image; entry actors park offscreen here.
    pub base_offset: Vec2,
    /// Base opacity on the group, for layers hidden until a directive
    /// takes over.
    pub base_opacity: Option<f64>,
    pub directives: Vec<AnimationDirective>,
    pub hot_area: Option<HotArea>,
}

impl Layer {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            base_offset: Vec2::ZERO,
            base_opacity: None,
            directives: Vec::new(),
            hot_area: None,
        }
    }
}

impl Choreography {
    pub fn validate(&self) -> RondoResult<()> {
        if self.layers.is_empty() {
            return Err(RondoError::configuration("choreography has no layers"));
        }
        for layer in &self.layers {
            if layer.label.is_empty() {
                return Err(RondoError::configuration("layer has no label"));
            }
            if layer.url.is_empty() {
                return Err(RondoError::configuration(format!(
                    "layer '{}' has no url",
                    layer.label
                )));
            }
            for directive in &layer.directives {
                directive.validate()?;
            }
        }
        Ok(())
    }
}

/// Plan the scene for a storyboard over a resolved viewport.
#[tracing::instrument(skip(storyboard))]
pub fn plan(storyboard: &Storyboard, viewport: Viewport) -> RondoResult<Choreography> {
    storyboard.validate()?;
    let slides = &storyboard.slides;
    let plan = match &storyboard.pattern {
        PatternSpec::CoverIn => cover_in::choreograph(slides, viewport)?,
        PatternSpec::CoverOut => relay::choreograph(slides, viewport, relay::RelayStyle::Slide)?,
        PatternSpec::FadeSwitch => relay::choreograph(slides, viewport, relay::RelayStyle::Fade)?,
        PatternSpec::HardCut => relay::choreograph(slides, viewport, relay::RelayStyle::Cut)?,
        PatternSpec::Carousel {
            duration_seconds,
            direction,
            easing,
        } => carousel::choreograph(slides, viewport, *duration_seconds, *direction, *easing)?,
        PatternSpec::Push => push::choreograph(slides, viewport)?,
        PatternSpec::ClickReveal => click_reveal::choreograph(slides, viewport)?,
    };
    plan.validate()?;
    Ok(plan)
}

/// Slide lists behave like ensembles: a single slide plays the relay
/// against a copy of itself.
pub(crate) fn normalized_slides(slides: &[Slide]) -> RondoResult<Vec<Slide>> {
    if slides.is_empty() {
        return Err(RondoError::configuration("pattern needs at least one slide"));
    }
    let mut out = slides.to_vec();
    if out.len() == 1 {
        out.push(out[0].clone());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Slide;

    #[test]
    fn single_slide_is_duplicated() {
        let out = normalized_slides(&[Slide::new("a.png")]).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].url, out[1].url);
    }

    #[test]
    fn empty_slide_list_is_rejected() {
        assert!(normalized_slides(&[]).is_err());
    }

    #[test]
    fn plan_dispatches_every_pattern_kind() {
        let viewport = Viewport {
            width: 300.0,
            height: 500.0,
        };
        let slides = vec![Slide::new("a.png"), Slide::new("b.png")];
        for pattern in [
            PatternSpec::CoverIn,
            PatternSpec::CoverOut,
            PatternSpec::FadeSwitch,
            PatternSpec::HardCut,
            PatternSpec::Carousel {
                duration_seconds: None,
                direction: None,
                easing: None,
            },
            PatternSpec::Push,
            PatternSpec::ClickReveal,
        ] {
            let storyboard = Storyboard {
                viewport: Some(viewport),
                pattern,
                slides: slides.clone(),
            };
            let plan = plan(&storyboard, viewport).unwrap();
            assert!(!plan.layers.is_empty());
            plan.validate().unwrap();
        }
    }
}
