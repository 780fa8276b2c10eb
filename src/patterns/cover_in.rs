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

/// Fraction of the first pass spent fading the static intro frame out,
/// once the first stay has elapsed.
const INTRO_FADE_FRACTION: f64 = 0.01;

/// Each image slides in over everything already on screen.
///
/// Two phases share the markup. A one-shot first pass plays over a static
/// copy of the first image: slides 1..N enter in turn while the intro frame
/// fades away beneath them. An indefinite loop set then begins exactly at
/// the first pass's end and replays all N entries forever. One-shot layers
/// freeze at rest, so the topmost frozen image doubles as the backdrop the
/// loop's first entry covers on every wrap.
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
            direction: s.direction.unwrap_or(Direction::Down),
            easing: s.easing.unwrap_or(Ease::IN_OUT),
        })
        .collect();
    let ensemble = Ensemble::new(actors)?;
    let schedule = ensemble.schedule()?;
    let prologue = schedule.prologue_seconds();

    let mut layers = Vec::with_capacity(2 * slides.len());
    layers.push(intro_layer(&slides[0], ensemble.actors()[0], prologue)?);
    for (i, slide) in slides.iter().enumerate().skip(1) {
        let actor = ensemble.actors()[i];
        let mut layer = Layer::new(format!("once-{i}"), &slide.url);
        layer.base_offset = -actor.direction.travel(viewport);
        layer.directives.push(entry_directive(
            &actor,
            viewport,
            schedule.staggered_begin_seconds(i),
            prologue,
            Repeat::Once,
            0.0,
        )?);
        layers.push(layer);
    }
    for (i, slide) in slides.iter().enumerate() {
        let actor = ensemble.actors()[i];
        let mut layer = Layer::new(format!("loop-{i}"), &slide.url);
        layer.base_offset = -actor.direction.travel(viewport);
        layer.directives.push(entry_directive(
            &actor,
            viewport,
            schedule.windows[i].start_seconds,
            schedule.cycle_seconds,
            Repeat::Indefinite,
            prologue,
        )?);
        layers.push(layer);
    }
    Ok(Choreography { viewport, layers })
}

/// Slide in at `entry_at`, then rest for whatever remains of the pass.
fn entry_directive(
    actor: &Actor,
    viewport: Viewport,
    entry_at: f64,
    pass_seconds: f64,
    repeat: Repeat,
    delay: f64,
) -> RondoResult<AnimationDirective> {
    let travel = actor.direction.travel(viewport);
    let keyframes = Timeline::new(Vec2::ZERO)
        .then(TimelineSegment::hold(entry_at))
        .then(TimelineSegment::eased(actor.enter_seconds, travel, actor.easing))
        .then(TimelineSegment::hold(
            pass_seconds - entry_at - actor.enter_seconds,
        ))
        .compile()?;
    DirectiveBuilder::new(AnimatedAttribute::Translate, keyframes, pass_seconds)
        .calc_mode(CalcMode::Spline)
        .repeat(repeat)
        .delay(delay)
        .fill(Fill::Freeze)
        .additive(true)
        .build()
}

/// The static first frame: fully visible through the first stay, then a
/// quick fade out of the way of the arriving slides.
fn intro_layer(slide: &Slide, first: Actor, prologue: f64) -> RondoResult<Layer> {
    let fade = (INTRO_FADE_FRACTION * prologue).min(prologue - first.stay_seconds).max(0.0);
    let keyframes = Timeline::new(1.0)
        .then(TimelineSegment::hold(first.stay_seconds))
        .then(TimelineSegment::to(fade, 0.0))
        .then(TimelineSegment::hold(prologue - first.stay_seconds - fade))
        .compile()?;
    let directive = DirectiveBuilder::new(AnimatedAttribute::Opacity, keyframes, prologue)
        .calc_mode(CalcMode::Linear)
        .repeat(Repeat::Once)
        .fill(Fill::Freeze)
        .build()?;

    let mut layer = Layer::new("intro", &slide.url);
    layer.directives.push(directive);
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Slide;

    fn viewport() -> Viewport {
        Viewport {
            width: 300.0,
            height: 500.0,
        }
    }

    fn slides(n: usize) -> Vec<Slide> {
        (0..n).map(|i| Slide::new(format!("pic{i}.png"))).collect()
    }

    fn layer<'a>(plan: &'a Choreography, label: &str) -> &'a Layer {
        plan.layers.iter().find(|l| l.label == label).unwrap()
    }

    #[test]
    fn layers_stack_intro_once_loop() {
        let plan = choreograph(&slides(3), viewport()).unwrap();
        let labels: Vec<&str> = plan.layers.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["intro", "once-1", "once-2", "loop-0", "loop-1", "loop-2"]
        );
    }

    #[test]
    fn intro_fades_after_the_first_stay() {
        let plan = choreograph(&slides(3), viewport()).unwrap();
        let d = &layer(&plan, "intro").directives[0];
        // Defaults: cycle 3, prologue 2.5, stay 0.5, fade 0.025.
        assert_eq!(d.total_duration_seconds, 2.5);
        assert_eq!(d.repeat, Repeat::Once);
        assert_eq!(d.calc_mode, CalcMode::Linear);
        assert!(!d.emits_key_splines());
        assert_eq!(d.keyframes.values, vec!["1", "1", "0", "0"]);
        assert_eq!(d.keyframes.key_times, vec![0.0, 0.2, 0.21, 1.0]);
    }

    #[test]
    fn once_layers_enter_on_the_staggered_offsets() {
        let plan = choreograph(&slides(3), viewport()).unwrap();
        let d = &layer(&plan, "once-1").directives[0];
        assert_eq!(d.total_duration_seconds, 2.5);
        assert_eq!(d.begin_attr(), None);
        assert_eq!(d.repeat, Repeat::Once);
        assert_eq!(d.keyframes.key_times, vec![0.0, 0.2, 0.4, 1.0]);
        assert_eq!(
            d.keyframes.values,
            vec!["0 0", "0 0", "0 501", "0 501"]
        );

        let d2 = &layer(&plan, "once-2").directives[0];
        assert_eq!(d2.keyframes.key_times, vec![0.0, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn loop_layers_begin_exactly_at_the_prologue_end() {
        let plan = choreograph(&slides(3), viewport()).unwrap();
        for label in ["loop-0", "loop-1", "loop-2"] {
            let d = &layer(&plan, label).directives[0];
            assert_eq!(d.start_delay_seconds, 2.5);
            assert_eq!(d.begin_attr().as_deref(), Some("2.5s"));
            assert_eq!(d.repeat, Repeat::Indefinite);
            assert_eq!(d.total_duration_seconds, 3.0);
        }
    }

    #[test]
    fn first_loop_entry_starts_with_an_epsilon_hold() {
        let plan = choreograph(&slides(3), viewport()).unwrap();
        let d = &layer(&plan, "loop-0").directives[0];
        assert_eq!(d.keyframes.key_times[0], 0.0);
        assert_eq!(d.keyframes.key_times[1], 1e-6);
        assert_eq!(d.keyframes.key_times[2], 0.166667);
    }

    #[test]
    fn entry_layers_park_offscreen_against_the_travel() {
        let plan = choreograph(&slides(2), viewport()).unwrap();
        let parked = layer(&plan, "loop-0");
        assert_eq!(parked.base_offset, Vec2::new(0.0, -501.0));
    }

    #[test]
    fn single_slide_covers_itself() {
        let plan = choreograph(&slides(1), viewport()).unwrap();
        let labels: Vec<&str> = plan.layers.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["intro", "once-1", "loop-0", "loop-1"]);
    }

    #[test]
    fn per_slide_directions_shape_each_entry() {
        let mut input = slides(2);
        input[0].direction = Some(Direction::Right);
        input[1].direction = Some(Direction::Up);
        let plan = choreograph(&input, viewport()).unwrap();
        assert_eq!(layer(&plan, "loop-0").base_offset, Vec2::new(-301.0, 0.0));
        assert_eq!(layer(&plan, "loop-1").base_offset, Vec2::new(0.0, 501.0));
    }
}
