use crate::core::{Vec2, fmt_num, round6};
use crate::ease::Ease;
use crate::error::{RondoError, RondoResult};

/// Spacing inserted between colliding key times so the list stays strictly
/// increasing. Several SMIL renderers reject duplicate `keyTimes` under
/// `calcMode="spline"`, so a zero-duration segment becomes a jump of this
/// width instead.
pub(crate) const KEY_TIME_EPS: f64 = 1e-6;

/// A value that can appear in a SMIL `values` list.
pub trait AttrValue: Copy {
    fn fmt_attr(&self) -> String;
}

impl AttrValue for f64 {
    fn fmt_attr(&self) -> String {
        fmt_num(*self)
    }
}

impl AttrValue for Vec2 {
    fn fmt_attr(&self) -> String {
        format!("{} {}", fmt_num(self.x), fmt_num(self.y))
    }
}

/// One step of a timeline: run for `duration_seconds`, arriving at
/// `to_value`. A `None` target holds whatever value the previous step
/// reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSegment<T> {
    pub duration_seconds: f64,
    pub to_value: Option<T>,
    pub easing: Option<Ease>,
}

impl<T> TimelineSegment<T> {
    pub fn to(duration_seconds: f64, value: T) -> Self {
        Self {
            duration_seconds,
            to_value: Some(value),
            easing: None,
        }
    }

    pub fn eased(duration_seconds: f64, value: T, easing: Ease) -> Self {
        Self {
            duration_seconds,
            to_value: Some(value),
            easing: Some(easing),
        }
    }

    /// Hold the current value. Pacing is pinned to identity so the hold
    /// contributes no motion shape of its own.
    pub fn hold(duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            to_value: None,
            easing: Some(Ease::HOLD),
        }
    }
}

/// An attribute's journey over time: a starting value plus segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    pub init_value: T,
    pub segments: Vec<TimelineSegment<T>>,
}

impl<T: AttrValue> Timeline<T> {
    pub fn new(init_value: T) -> Self {
        Self {
            init_value,
            segments: Vec::new(),
        }
    }

    pub fn then(mut self, segment: TimelineSegment<T>) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn total_seconds(&self) -> f64 {
        self.segments.iter().map(|s| s.duration_seconds).sum()
    }

    /// Compile into the normalized keyframe triple.
    ///
    /// Key times are cumulative duration fractions rounded to six decimals,
    /// the final one forced to exactly 1. Collisions (zero-duration
    /// segments, or neighbors that rounded together) are re-spaced by
    /// [`KEY_TIME_EPS`], walking backwards from the pinned endpoint when a
    /// collision lands at the tail.
    pub fn compile(&self) -> RondoResult<KeyframeSet> {
        if self.segments.is_empty() {
            return Err(RondoError::configuration("timeline has no segments"));
        }
        let mut total = 0.0;
        for seg in &self.segments {
            if !seg.duration_seconds.is_finite() || seg.duration_seconds < 0.0 {
                return Err(RondoError::configuration(format!(
                    "segment duration must be finite and >= 0, got {}",
                    seg.duration_seconds
                )));
            }
            total += seg.duration_seconds;
        }
        if total <= 0.0 {
            return Err(RondoError::zero_duration("timeline segments sum to 0"));
        }

        let mut values = Vec::with_capacity(self.segments.len() + 1);
        values.push(self.init_value.fmt_attr());
        let mut current = self.init_value;
        for seg in &self.segments {
            if let Some(v) = seg.to_value {
                current = v;
            }
            values.push(current.fmt_attr());
        }

        let mut key_times = Vec::with_capacity(self.segments.len() + 1);
        key_times.push(0.0);
        let mut elapsed = 0.0;
        for seg in &self.segments {
            elapsed += seg.duration_seconds;
            key_times.push(round6(elapsed / total));
        }
        *key_times.last_mut().unwrap() = 1.0;
        strictify(&mut key_times)?;

        let key_splines = self
            .segments
            .iter()
            .map(|seg| seg.easing.unwrap_or_default().to_string())
            .collect();

        let set = KeyframeSet {
            values,
            key_times,
            key_splines,
        };
        set.validate()?;
        Ok(set)
    }
}

fn strictify(key_times: &mut [f64]) -> RondoResult<()> {
    let last = key_times.len() - 1;
    for i in 1..=last {
        if key_times[i] <= key_times[i - 1] {
            key_times[i] = key_times[i - 1] + KEY_TIME_EPS;
        }
    }
    key_times[last] = 1.0;
    for i in (1..last).rev() {
        if key_times[i] >= key_times[i + 1] {
            key_times[i] = key_times[i + 1] - KEY_TIME_EPS;
        }
    }
    if last >= 1 && key_times[1] <= 0.0 {
        return Err(RondoError::configuration(
            "too many zero-duration segments to keep key times strictly increasing",
        ));
    }
    Ok(())
}

/// The compiled form of one attribute's animation: parallel `values`,
/// `keyTimes` and `keySplines` lists ready for attribute text.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSet {
    pub values: Vec<String>,
    pub key_times: Vec<f64>,
    pub key_splines: Vec<String>,
}

impl KeyframeSet {
    pub fn validate(&self) -> RondoResult<()> {
        if self.values.len() != self.key_times.len()
            || self.values.len() != self.key_splines.len() + 1
        {
            return Err(RondoError::configuration(format!(
                "keyframe arity mismatch: {} values, {} key times, {} key splines",
                self.values.len(),
                self.key_times.len(),
                self.key_splines.len()
            )));
        }
        if self.key_times.first() != Some(&0.0) {
            return Err(RondoError::configuration("key times must start at 0"));
        }
        if self.key_times.last() != Some(&1.0) {
            return Err(RondoError::configuration("key times must end at 1"));
        }
        if self.key_times.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RondoError::configuration(
                "key times must be strictly increasing",
            ));
        }
        Ok(())
    }

    pub fn values_attr(&self) -> String {
        self.values.join(";")
    }

    pub fn key_times_attr(&self) -> String {
        self.key_times
            .iter()
            .map(|t| fmt_num(*t))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn key_splines_attr(&self) -> String {
        self.key_splines.join(";")
    }

    /// True when any segment's pacing differs from the ease-in-out default.
    pub fn has_non_default_pacing(&self) -> bool {
        let default = Ease::IN_OUT.to_string();
        self.key_splines.iter().any(|s| *s != default)
    }
}
