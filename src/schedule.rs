use crate::core::Direction;
use crate::ease::Ease;
use crate::error::{RondoError, RondoResult};

/// One visual layer's part in an ensemble: how long it takes to come in,
/// stand, and leave, plus how it moves while doing so.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub index: usize,
    pub enter_seconds: f64,
    pub stay_seconds: f64,
    pub exit_seconds: f64,
    pub direction: Direction,
    pub easing: Ease,
}

impl Actor {
    fn validate(&self) -> RondoResult<()> {
        for (name, v) in [
            ("enter", self.enter_seconds),
            ("stay", self.stay_seconds),
            ("exit", self.exit_seconds),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RondoError::configuration(format!(
                    "actor {} {name} duration must be finite and >= 0, got {v}",
                    self.index
                )));
            }
        }
        Ok(())
    }
}

/// The ordered cast sharing one animation cycle. Order fixes both stacking
/// and turn order. A single-actor input is duplicated on construction so
/// every relay window has a partner to hand off to.
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble {
    actors: Vec<Actor>,
}

impl Ensemble {
    pub fn new(mut actors: Vec<Actor>) -> RondoResult<Self> {
        if actors.is_empty() {
            return Err(RondoError::configuration("ensemble has no actors"));
        }
        if actors.len() == 1 {
            actors.push(actors[0]);
        }
        for (i, actor) in actors.iter_mut().enumerate() {
            actor.index = i;
            actor.validate()?;
        }
        Ok(Self { actors })
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Lay every actor's window head to tail across one shared cycle.
    pub fn schedule(&self) -> RondoResult<EnsembleSchedule> {
        let mut windows = Vec::with_capacity(self.actors.len());
        let mut elapsed = 0.0;
        for actor in &self.actors {
            let window = ActorWindow {
                start_seconds: elapsed,
                enter_seconds: actor.enter_seconds,
                stay_seconds: actor.stay_seconds,
                exit_seconds: actor.exit_seconds,
            };
            elapsed += window.duration_seconds();
            windows.push(window);
        }
        if elapsed <= 0.0 {
            return Err(RondoError::zero_duration("ensemble cycle sums to 0"));
        }
        Ok(EnsembleSchedule {
            cycle_seconds: elapsed,
            windows,
        })
    }
}

/// One actor's slice of the cycle, in absolute seconds from cycle start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorWindow {
    pub start_seconds: f64,
    pub enter_seconds: f64,
    pub stay_seconds: f64,
    pub exit_seconds: f64,
}

impl ActorWindow {
    pub fn duration_seconds(self) -> f64 {
        self.enter_seconds + self.stay_seconds + self.exit_seconds
    }

    pub fn exit_start_seconds(self) -> f64 {
        self.start_seconds + self.enter_seconds + self.stay_seconds
    }

    pub fn end_seconds(self) -> f64 {
        self.start_seconds + self.duration_seconds()
    }
}

/// The shared cycle and each actor's window inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleSchedule {
    pub cycle_seconds: f64,
    pub windows: Vec<ActorWindow>,
}

impl EnsembleSchedule {
    /// Duration of the one-shot first pass under the staggered regime: a
    /// full cycle minus the first entry, which the static initial frame
    /// covers instead.
    pub fn prologue_seconds(&self) -> f64 {
        self.cycle_seconds - self.windows[0].enter_seconds
    }

    /// Begin offset for actor `index` under the staggered regime: its
    /// window start shifted left by the first actor's entry. Negative for
    /// the first actor, meaning its loop is already mid-flight at load.
    pub fn staggered_begin_seconds(&self, index: usize) -> f64 {
        self.windows[index].start_seconds - self.windows[0].enter_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(enter: f64, stay: f64, exit: f64) -> Actor {
        Actor {
            index: 0,
            enter_seconds: enter,
            stay_seconds: stay,
            exit_seconds: exit,
            direction: Direction::Left,
            easing: Ease::IN_OUT,
        }
    }

    #[test]
    fn relay_windows_partition_the_cycle() {
        let ensemble =
            Ensemble::new(vec![actor(0.5, 0.5, 0.0); 3]).unwrap();
        let schedule = ensemble.schedule().unwrap();
        assert_eq!(schedule.cycle_seconds, 3.0);
        let starts: Vec<f64> = schedule.windows.iter().map(|w| w.start_seconds).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0]);

        let total: f64 = schedule
            .windows
            .iter()
            .map(|w| w.duration_seconds())
            .sum();
        assert!((total - schedule.cycle_seconds).abs() < 1e-6);
    }

    #[test]
    fn single_actor_is_duplicated() {
        let ensemble = Ensemble::new(vec![actor(0.0, 2.0, 0.5)]).unwrap();
        assert_eq!(ensemble.len(), 2);
        assert_eq!(ensemble.actors()[1].index, 1);

        let schedule = ensemble.schedule().unwrap();
        assert_eq!(schedule.cycle_seconds, 5.0);
        assert!(schedule.windows.iter().all(|w| w.duration_seconds() > 0.0));
    }

    #[test]
    fn indices_follow_ensemble_order() {
        let mut first = actor(1.0, 1.0, 0.0);
        first.index = 7;
        let ensemble = Ensemble::new(vec![first, actor(2.0, 2.0, 0.0)]).unwrap();
        let indices: Vec<usize> = ensemble.actors().iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn empty_ensemble_is_rejected() {
        let err = Ensemble::new(Vec::new()).unwrap_err();
        assert!(matches!(err, RondoError::Configuration(_)));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = Ensemble::new(vec![actor(1.0, -0.5, 0.0)]).unwrap_err();
        assert!(matches!(err, RondoError::Configuration(_)));
    }

    #[test]
    fn zero_cycle_is_a_zero_duration_error() {
        let ensemble = Ensemble::new(vec![actor(0.0, 0.0, 0.0); 2]).unwrap();
        let err = ensemble.schedule().unwrap_err();
        assert!(matches!(err, RondoError::ZeroDuration(_)));
    }

    #[test]
    fn window_geometry_is_consistent() {
        let ensemble = Ensemble::new(vec![actor(1.0, 2.0, 0.5), actor(0.5, 1.0, 0.25)]).unwrap();
        let schedule = ensemble.schedule().unwrap();
        let w = schedule.windows[1];
        assert_eq!(w.start_seconds, 3.5);
        assert_eq!(w.exit_start_seconds(), 5.0);
        assert_eq!(w.end_seconds(), 5.25);
        assert_eq!(schedule.cycle_seconds, 5.25);
    }

    #[test]
    fn staggered_begins_shift_left_by_the_first_entry() {
        let ensemble = Ensemble::new(vec![actor(1.0, 2.0, 0.0); 3]).unwrap();
        let schedule = ensemble.schedule().unwrap();
        assert_eq!(schedule.cycle_seconds, 9.0);
        assert_eq!(schedule.prologue_seconds(), 8.0);
        assert_eq!(schedule.staggered_begin_seconds(0), -1.0);
        assert_eq!(schedule.staggered_begin_seconds(1), 2.0);
        assert_eq!(schedule.staggered_begin_seconds(2), 5.0);
    }
}
