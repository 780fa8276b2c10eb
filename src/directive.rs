use crate::core::fmt_num;
use crate::error::{RondoError, RondoResult};
use crate::timeline::KeyframeSet;

/// Which attribute of the host element a directive drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedAttribute {
    Opacity,
    /// `transform` via `<animateTransform type="translate">`.
    Translate,
    X,
    Y,
    Width,
    Height,
}

impl AnimatedAttribute {
    pub fn attribute_name(self) -> &'static str {
        match self {
            AnimatedAttribute::Opacity => "opacity",
            AnimatedAttribute::Translate => "transform",
            AnimatedAttribute::X => "x",
            AnimatedAttribute::Y => "y",
            AnimatedAttribute::Width => "width",
            AnimatedAttribute::Height => "height",
        }
    }

    /// Transform attributes animate through `<animateTransform>`, everything
    /// else through `<animate>`.
    pub fn is_transform(self) -> bool {
        matches!(self, AnimatedAttribute::Translate)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcMode {
    Linear,
    Spline,
    Discrete,
    Paced,
}

impl CalcMode {
    pub fn attr(self) -> &'static str {
        match self {
            CalcMode::Linear => "linear",
            CalcMode::Spline => "spline",
            CalcMode::Discrete => "discrete",
            CalcMode::Paced => "paced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Count(u32),
    Indefinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Auto,
    OnClick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Freeze,
    Remove,
}

impl Fill {
    pub fn attr(self) -> &'static str {
        match self {
            Fill::Freeze => "freeze",
            Fill::Remove => "remove",
        }
    }
}

/// One fully-specified animation of one attribute: a compiled keyframe set
/// plus everything the markup layer needs to emit the element.
///
/// A negative `start_delay_seconds` under [`Trigger::Auto`] is meaningful:
/// the playback engine treats the animation as already mid-flight at load
/// time, which is how staggered loops come up in the correct phase without
/// any script.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDirective {
    pub attribute: AnimatedAttribute,
    pub keyframes: KeyframeSet,
    pub total_duration_seconds: f64,
    pub calc_mode: CalcMode,
    pub repeat: Repeat,
    pub trigger: Trigger,
    pub start_delay_seconds: f64,
    pub fill: Fill,
    /// Emit `additive="sum"` so the motion stacks on the element's static
    /// placement instead of replacing it.
    pub additive: bool,
}

impl AnimationDirective {
    pub fn validate(&self) -> RondoResult<()> {
        self.keyframes.validate()?;
        if !self.total_duration_seconds.is_finite() || self.total_duration_seconds <= 0.0 {
            return Err(RondoError::zero_duration(
                "directive total duration must be > 0",
            ));
        }
        if !self.start_delay_seconds.is_finite() {
            return Err(RondoError::configuration("start delay must be finite"));
        }
        if self.trigger == Trigger::OnClick && self.start_delay_seconds < 0.0 {
            return Err(RondoError::configuration(
                "click-triggered directives cannot start before the click",
            ));
        }
        if matches!(self.repeat, Repeat::Count(0)) {
            return Err(RondoError::configuration("repeat count must be >= 1"));
        }
        Ok(())
    }

    /// The `begin` attribute, or `None` for an immediate auto start.
    pub fn begin_attr(&self) -> Option<String> {
        match self.trigger {
            Trigger::OnClick => {
                if self.start_delay_seconds == 0.0 {
                    Some("click".to_string())
                } else {
                    Some(format!("click+{}s", fmt_num(self.start_delay_seconds)))
                }
            }
            Trigger::Auto => {
                if self.start_delay_seconds == 0.0 {
                    None
                } else {
                    Some(format!("{}s", fmt_num(self.start_delay_seconds)))
                }
            }
        }
    }

    pub fn dur_attr(&self) -> String {
        format!("{}s", fmt_num(self.total_duration_seconds))
    }

    pub fn repeat_attr(&self) -> String {
        match self.repeat {
            Repeat::Once => "1".to_string(),
            Repeat::Count(n) => n.to_string(),
            Repeat::Indefinite => "indefinite".to_string(),
        }
    }

    /// `keySplines` only makes sense under spline pacing.
    pub fn emits_key_splines(&self) -> bool {
        self.calc_mode == CalcMode::Spline
    }
}

/// Builds an [`AnimationDirective`] with the usual defaults: one-shot,
/// auto-started, frozen at the end, non-additive.
#[derive(Clone, Debug)]
pub struct DirectiveBuilder {
    attribute: AnimatedAttribute,
    keyframes: KeyframeSet,
    total_duration_seconds: f64,
    calc_mode: Option<CalcMode>,
    repeat: Repeat,
    trigger: Trigger,
    start_delay_seconds: f64,
    fill: Fill,
    additive: bool,
}

impl DirectiveBuilder {
    pub fn new(
        attribute: AnimatedAttribute,
        keyframes: KeyframeSet,
        total_duration_seconds: f64,
    ) -> Self {
        Self {
            attribute,
            keyframes,
            total_duration_seconds,
            calc_mode: None,
            repeat: Repeat::Once,
            trigger: Trigger::Auto,
            start_delay_seconds: 0.0,
            fill: Fill::Freeze,
            additive: false,
        }
    }

    pub fn calc_mode(mut self, mode: CalcMode) -> Self {
        self.calc_mode = Some(mode);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.start_delay_seconds = seconds;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn additive(mut self, additive: bool) -> Self {
        self.additive = additive;
        self
    }

    pub fn build(self) -> RondoResult<AnimationDirective> {
        // Unless overridden, pacing decides the mode: any non-default
        // spline promotes the whole directive to spline interpolation.
        let calc_mode = self.calc_mode.unwrap_or(if self.keyframes.has_non_default_pacing() {
            CalcMode::Spline
        } else {
            CalcMode::Linear
        });
        let directive = AnimationDirective {
            attribute: self.attribute,
            keyframes: self.keyframes,
            total_duration_seconds: self.total_duration_seconds,
            calc_mode,
            repeat: self.repeat,
            trigger: self.trigger,
            start_delay_seconds: self.start_delay_seconds,
            fill: self.fill,
            additive: self.additive,
        };
        directive.validate()?;
        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Ease;
    use crate::timeline::{Timeline, TimelineSegment};

    fn fade_keyframes(easing: Option<Ease>) -> KeyframeSet {
        let seg = match easing {
            Some(e) => TimelineSegment::eased(1.0, 0.0, e),
            None => TimelineSegment::to(1.0, 0.0),
        };
        Timeline::new(1.0).then(seg).compile().unwrap()
    }

    #[test]
    fn default_pacing_resolves_to_linear() {
        let d = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0)
            .build()
            .unwrap();
        assert_eq!(d.calc_mode, CalcMode::Linear);
        assert!(!d.emits_key_splines());
    }

    #[test]
    fn shaped_pacing_resolves_to_spline() {
        let d = DirectiveBuilder::new(
            AnimatedAttribute::Opacity,
            fade_keyframes(Some(Ease::OUT)),
            1.0,
        )
        .build()
        .unwrap();
        assert_eq!(d.calc_mode, CalcMode::Spline);
        assert!(d.emits_key_splines());
    }

    #[test]
    fn caller_override_wins_over_detection() {
        let d = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0)
            .calc_mode(CalcMode::Discrete)
            .build()
            .unwrap();
        assert_eq!(d.calc_mode, CalcMode::Discrete);
    }

    #[test]
    fn begin_attr_covers_all_trigger_forms() {
        let base = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0);

        let immediate = base.clone().build().unwrap();
        assert_eq!(immediate.begin_attr(), None);

        let delayed = base.clone().delay(2.5).build().unwrap();
        assert_eq!(delayed.begin_attr().as_deref(), Some("2.5s"));

        let rewound = base.clone().delay(-6.0).build().unwrap();
        assert_eq!(rewound.begin_attr().as_deref(), Some("-6s"));

        let clicked = base
            .clone()
            .trigger(Trigger::OnClick)
            .build()
            .unwrap();
        assert_eq!(clicked.begin_attr().as_deref(), Some("click"));

        let clicked_late = base
            .trigger(Trigger::OnClick)
            .delay(1.0)
            .build()
            .unwrap();
        assert_eq!(clicked_late.begin_attr().as_deref(), Some("click+1s"));
    }

    #[test]
    fn click_before_the_click_is_rejected() {
        let err = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0)
            .trigger(Trigger::OnClick)
            .delay(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, RondoError::Configuration(_)));
    }

    #[test]
    fn zero_repeat_count_is_rejected() {
        let err = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0)
            .repeat(Repeat::Count(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, RondoError::Configuration(_)));
    }

    #[test]
    fn zero_total_duration_is_rejected() {
        let err = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, RondoError::ZeroDuration(_)));
    }

    #[test]
    fn attribute_text_forms_are_stable() {
        let d = DirectiveBuilder::new(AnimatedAttribute::Translate, fade_keyframes(None), 3.0)
            .repeat(Repeat::Indefinite)
            .fill(Fill::Freeze)
            .additive(true)
            .build()
            .unwrap();
        assert_eq!(d.attribute.attribute_name(), "transform");
        assert!(d.attribute.is_transform());
        assert_eq!(d.dur_attr(), "3s");
        assert_eq!(d.repeat_attr(), "indefinite");
        assert_eq!(d.fill.attr(), "freeze");

        let counted = DirectiveBuilder::new(AnimatedAttribute::Opacity, fade_keyframes(None), 1.0)
            .repeat(Repeat::Count(4))
            .build()
            .unwrap();
        assert_eq!(counted.repeat_attr(), "4");
    }
}
