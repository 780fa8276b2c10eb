use crate::core::{Direction, Vec2, Viewport};
use crate::directive::{AnimatedAttribute, CalcMode, DirectiveBuilder, Fill, Repeat};
use crate::ease::Ease;
use crate::error::RondoResult;
use crate::model::Slide;
use crate::patterns::{Choreography, Layer, normalized_slides};
use crate::schedule::{Actor, Ensemble};
use crate::timeline::{Timeline, TimelineSegment};

/// Endless belt of images sharing one direction and turn duration.
///
/// Every actor plays the same shape (slide in, slide out, hold offscreen)
/// against its own negative begin offset, so the belt is already mid-flight
/// and correctly phased at load. No prologue and no ghost: at any instant
/// exactly one actor is entering and one leaving, with no overlap to mask.
pub fn choreograph(
    slides: &[Slide],
    viewport: Viewport,
    duration_seconds: Option<f64>,
    direction: Option<Direction>,
    easing: Option<Ease>,
) -> RondoResult<Choreography> {
    let slides = normalized_slides(slides)?;
    let duration = duration_seconds.unwrap_or(3.0);
    let direction = direction.unwrap_or(Direction::Left);
    let easing = easing.unwrap_or(Ease::IN_OUT);
    let n = slides.len();

    let actors = (0..n)
        .map(|i| Actor {
            index: i,
            enter_seconds: duration,
            stay_seconds: 0.0,
            exit_seconds: 0.0,
            direction,
            easing,
        })
        .collect();
    let schedule = Ensemble::new(actors)?.schedule()?;
    let travel = direction.travel(viewport);

    let mut layers = Vec::with_capacity(n);
    for (i, slide) in slides.iter().enumerate().rev() {
        let mut timeline = Timeline::new(-travel)
            .then(TimelineSegment::eased(duration, Vec2::ZERO, easing))
            .then(TimelineSegment::eased(duration, travel, easing));
        for _ in 2..n {
            timeline = timeline.then(TimelineSegment::hold(duration));
        }
        let keyframes = timeline.compile()?;

        // The belt phase: this actor's turn ends `cycle - end` before the
        // shared restart, so rewind its clock by that much.
        let begin = schedule.windows[i].end_seconds() - schedule.cycle_seconds;
        let directive = DirectiveBuilder::new(
            AnimatedAttribute::Translate,
            keyframes,
            schedule.cycle_seconds,
        )
        .calc_mode(CalcMode::Spline)
        .repeat(Repeat::Indefinite)
        .delay(begin)
        .fill(Fill::Freeze)
        .additive(true)
        .build()?;

        let mut layer = Layer::new(format!("slide-{i}"), &slide.url);
        layer.directives.push(directive);
        layers.push(layer);
    }
    Ok(Choreography { viewport, layers })
}
