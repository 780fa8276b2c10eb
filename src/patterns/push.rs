use crate::core::{Direction, Vec2, Viewport};
use crate::directive::{
    AnimatedAttribute, AnimationDirective, CalcMode, DirectiveBuilder, Fill, Repeat,
};
use crate::ease::Ease;
use crate::error::RondoResult;
use crate::model::Slide;
use crate::patterns::{Choreography, Layer, normalized_slides};
use crate::schedule::{Actor, Ensemble};
use crate::timeline::{Timeline, TimelineSegment};

/// Each arrival pushes the resident image out ahead of it.
///
/// An actor's cycle has four beats: slide in, rest, get pushed out by the
/// next actor, wait offstage. The push-out segment borrows the pusher's
/// duration and easing so the two move in lockstep with no gap or overlap
/// between them. Begins are staggered so the first image sits at rest when
/// the document loads, which puts actor 0 at a negative begin.
pub fn choreograph(slides: &[Slide], viewport: Viewport) -> RondoResult<Choreography> {
    let slides = normalized_slides(slides)?;
    let actors = slides
        .iter()
        .enumerate()
        .map(|(i, s)| Actor {
            index: i,
            enter_seconds: s.enter_seconds.unwrap_or(0.5),
            stay_seconds: s.stay_seconds.unwrap_or(0.5),
            exit_seconds: 0.0,
            direction: s.direction.unwrap_or(Direction::Right),
            easing: s.easing.unwrap_or(Ease::IN_OUT),
        })
        .collect();
    let ensemble = Ensemble::new(actors)?;
    let schedule = ensemble.schedule()?;

    let mut layers = Vec::with_capacity(slides.len());
    // Reverse emission puts actor 0 on top, matching the other patterns.
    for (i, slide) in slides.iter().enumerate().rev() {
        let actor = ensemble.actors()[i];
        let pusher = ensemble.actors()[(i + 1) % ensemble.len()];
        let mut layer = Layer::new(format!("slide-{i}"), &slide.url);
        layer.base_offset = -actor.direction.travel(viewport);
        layer.directives.push(push_directive(
            &actor,
            &pusher,
            viewport,
            schedule.cycle_seconds,
            schedule.staggered_begin_seconds(i),
        )?);
        layers.push(layer);
    }
    Ok(Choreography { viewport, layers })
}

fn push_directive(
    actor: &Actor,
    pusher: &Actor,
    viewport: Viewport,
    cycle_seconds: f64,
    begin_seconds: f64,
) -> RondoResult<AnimationDirective> {
    let travel = actor.direction.travel(viewport);
    let shove = travel + pusher.direction.travel(viewport);
    let offstage =
        cycle_seconds - actor.enter_seconds - actor.stay_seconds - pusher.enter_seconds;
    let keyframes = Timeline::new(Vec2::ZERO)
        .then(TimelineSegment::eased(actor.enter_seconds, travel, actor.easing))
        .then(TimelineSegment::hold(actor.stay_seconds))
        .then(TimelineSegment::eased(pusher.enter_seconds, shove, pusher.easing))
        .then(TimelineSegment::hold(offstage))
        .compile()?;
    DirectiveBuilder::new(AnimatedAttribute::Translate, keyframes, cycle_seconds)
        .calc_mode(CalcMode::Spline)
        .repeat(Repeat::Indefinite)
        .delay(begin_seconds)
        .fill(Fill::Freeze)
        .additive(true)
        .build()
}
