use crate::core::{Direction, Vec2, Viewport};
use crate::directive::{
    AnimatedAttribute, AnimationDirective, CalcMode, DirectiveBuilder, Fill, Repeat,
};
use crate::ease::Ease;
use crate::error::RondoResult;
use crate::ghost;
use crate::model::Slide;
use crate::patterns::{Choreography, Layer, normalized_slides};
use crate::schedule::{Actor, ActorWindow, Ensemble};
use crate::timeline::{Timeline, TimelineSegment};

/// Shortest fade the cross-dissolve allows; anything lower would read as a
/// hard cut.
const MIN_FADE_SECONDS: f64 = 0.01;

/// How a relay actor leaves the stage. The three styles share all phase
/// arithmetic and differ only in the attribute they drive and its
/// rest/active values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayStyle {
    /// Cover-out: the top actor slides offscreen, revealing the next.
    Slide,
    /// Fade-switch: the top actor dissolves to transparent.
    Fade,
    /// Hard-cut: the top actor blinks off with no transition phase.
    Cut,
}

impl RelayStyle {
    fn default_stay(self) -> f64 {
        match self {
            RelayStyle::Slide => 0.5,
            RelayStyle::Fade | RelayStyle::Cut => 2.0,
        }
    }

    fn actor(self, index: usize, slide: &Slide) -> Actor {
        let exit = match self {
            RelayStyle::Slide => slide.exit_seconds.unwrap_or(0.5),
            RelayStyle::Fade => slide.exit_seconds.unwrap_or(0.5).max(MIN_FADE_SECONDS),
            RelayStyle::Cut => 0.0,
        };
        Actor {
            index,
            enter_seconds: 0.0,
            stay_seconds: slide.stay_seconds.unwrap_or(self.default_stay()),
            exit_seconds: exit,
            direction: slide.direction.unwrap_or(Direction::Down),
            easing: slide.easing.unwrap_or(Ease::IN_OUT),
        }
    }
}

pub fn choreograph(
    slides: &[Slide],
    viewport: Viewport,
    style: RelayStyle,
) -> RondoResult<Choreography> {
    let slides = normalized_slides(slides)?;
    let actors = slides
        .iter()
        .enumerate()
        .map(|(i, s)| style.actor(i, s))
        .collect();
    let ensemble = Ensemble::new(actors)?;
    let schedule = ensemble.schedule()?;

    let mut layers = Vec::with_capacity(slides.len() + 1);
    if let Some(mask) = ghost::synthesize(&schedule, 0)? {
        let mut layer = Layer::new("ghost", &slides[mask.source_index].url);
        layer.base_opacity = Some(0.0);
        layer.directives.push(mask.directive);
        layers.push(layer);
    }
    // Reverse emission puts actor 0 on top, where it leaves first.
    for (i, slide) in slides.iter().enumerate().rev() {
        let actor = ensemble.actors()[i];
        let mut layer = Layer::new(format!("slide-{i}"), &slide.url);
        if style == RelayStyle::Fade {
            layer.base_opacity = Some(0.0);
        }
        layer
            .directives
            .push(exit_directive(style, &actor, schedule.windows[i], schedule.cycle_seconds, viewport)?);
        layers.push(layer);
    }
    Ok(Choreography { viewport, layers })
}

/// One actor's full-cycle directive: rest until its exit window, leave, and
/// hold the departed state until the cycle restarts everyone at once.
fn exit_directive(
    style: RelayStyle,
    actor: &Actor,
    window: ActorWindow,
    cycle_seconds: f64,
    viewport: Viewport,
) -> RondoResult<AnimationDirective> {
    let before = window.exit_start_seconds();
    let after = cycle_seconds - window.end_seconds();
    match style {
        RelayStyle::Slide => {
            let keyframes = Timeline::new(Vec2::ZERO)
                .then(TimelineSegment::hold(before))
                .then(TimelineSegment::eased(
                    window.exit_seconds,
                    actor.direction.travel(viewport),
                    actor.easing,
                ))
                .then(TimelineSegment::hold(after))
                .compile()?;
            DirectiveBuilder::new(AnimatedAttribute::Translate, keyframes, cycle_seconds)
                .calc_mode(CalcMode::Spline)
                .repeat(Repeat::Indefinite)
                .fill(Fill::Freeze)
                .additive(true)
                .build()
        }
        RelayStyle::Fade => {
            let keyframes = Timeline::new(1.0)
                .then(TimelineSegment::hold(before))
                .then(TimelineSegment::eased(window.exit_seconds, 0.0, actor.easing))
                .then(TimelineSegment::hold(after))
                .compile()?;
            DirectiveBuilder::new(AnimatedAttribute::Opacity, keyframes, cycle_seconds)
                .calc_mode(CalcMode::Spline)
                .repeat(Repeat::Indefinite)
                .fill(Fill::Freeze)
                .build()
        }
        RelayStyle::Cut => {
            let keyframes = Timeline::new(1.0)
                .then(TimelineSegment::hold(before))
                .then(TimelineSegment::to(0.0, 0.0))
                .then(TimelineSegment::hold(after))
                .compile()?;
            DirectiveBuilder::new(AnimatedAttribute::Opacity, keyframes, cycle_seconds)
                .calc_mode(CalcMode::Discrete)
                .repeat(Repeat::Indefinite)
                .fill(Fill::Freeze)
                .build()
        }
    }
}
