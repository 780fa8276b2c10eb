use crate::directive::{
    AnimatedAttribute, AnimationDirective, CalcMode, DirectiveBuilder, Fill, Repeat,
};
use crate::error::{RondoError, RondoResult};
use crate::schedule::EnsembleSchedule;
use crate::timeline::{Timeline, TimelineSegment};

/// A derived, non-owning stand-in for one actor, flashed on while the last
/// actor exits.
///
/// Each element's `repeatCount="indefinite"` restarts on its own clock, so
/// at the instant the last actor finishes leaving, the wrap-boundary
/// actor's own loop has not visually arrived yet. The ghost sits at rest
/// beneath the relay and covers exactly that gap.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostLayer {
    /// Which actor's appearance the ghost copies.
    pub source_index: usize,
    pub appear_seconds: f64,
    pub disappear_seconds: f64,
    pub directive: AnimationDirective,
}

/// Derive the seam mask for a relay cycle, or `None` when the last actor
/// has no exit phase (a hard cut leaves no gap to cover).
pub fn synthesize(
    schedule: &EnsembleSchedule,
    wrap_boundary_index: usize,
) -> RondoResult<Option<GhostLayer>> {
    if wrap_boundary_index >= schedule.windows.len() {
        return Err(RondoError::configuration(format!(
            "wrap boundary {wrap_boundary_index} is outside the ensemble"
        )));
    }
    let last = match schedule.windows.last() {
        Some(w) => *w,
        None => return Ok(None),
    };
    if last.exit_seconds <= 0.0 {
        return Ok(None);
    }

    let appear = last.exit_start_seconds();
    let disappear = last.end_seconds();

    // Hidden until the last exit starts, then a zero-duration jump to
    // visible, held to the end of the cycle. Discrete playback turns the
    // epsilon jump into a clean flash-on.
    let keyframes = Timeline::new(0.0)
        .then(TimelineSegment::hold(appear))
        .then(TimelineSegment::to(0.0, 1.0))
        .then(TimelineSegment::hold(last.exit_seconds))
        .compile()?;

    let directive = DirectiveBuilder::new(AnimatedAttribute::Opacity, keyframes, schedule.cycle_seconds)
        .calc_mode(CalcMode::Discrete)
        .repeat(Repeat::Indefinite)
        .fill(Fill::Freeze)
        .build()?;

    Ok(Some(GhostLayer {
        source_index: wrap_boundary_index,
        appear_seconds: appear,
        disappear_seconds: disappear,
        directive,
    }))
}
