use crate::directive::{AnimatedAttribute, CalcMode, Fill, Repeat, Trigger};
use crate::patterns::Choreography;

/// Identity of a compiled plan. Two plans with the same fingerprint render
/// byte-identical documents, so this doubles as an output cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_plan(plan: &Choreography) -> PlanFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, plan.viewport.width.to_bits());
    write_u64_pair(&mut a, &mut b, plan.viewport.height.to_bits());

    write_u64_pair(&mut a, &mut b, plan.layers.len() as u64);
    for layer in &plan.layers {
        write_str_pair(&mut a, &mut b, &layer.label);
        write_str_pair(&mut a, &mut b, &layer.url);
        write_u64_pair(&mut a, &mut b, layer.base_offset.x.to_bits());
        write_u64_pair(&mut a, &mut b, layer.base_offset.y.to_bits());
        match layer.base_opacity {
            Some(opacity) => {
                write_u8_pair(&mut a, &mut b, 1);
                write_u64_pair(&mut a, &mut b, opacity.to_bits());
            }
            None => write_u8_pair(&mut a, &mut b, 0),
        }
        match layer.hot_area {
            Some(area) => {
                write_u8_pair(&mut a, &mut b, 1);
                for v in [area.x, area.y, area.width, area.height] {
                    write_u64_pair(&mut a, &mut b, v.to_bits());
                }
            }
            None => write_u8_pair(&mut a, &mut b, 0),
        }

        write_u64_pair(&mut a, &mut b, layer.directives.len() as u64);
        for d in &layer.directives {
            write_u8_pair(
                &mut a,
                &mut b,
                match d.attribute {
                    AnimatedAttribute::Opacity => 0,
                    AnimatedAttribute::Translate => 1,
                    AnimatedAttribute::X => 2,
                    AnimatedAttribute::Y => 3,
                    AnimatedAttribute::Width => 4,
                    AnimatedAttribute::Height => 5,
                },
            );
            write_str_pair(&mut a, &mut b, &d.keyframes.values_attr());
            write_str_pair(&mut a, &mut b, &d.keyframes.key_times_attr());
            write_str_pair(&mut a, &mut b, &d.keyframes.key_splines_attr());
            write_u64_pair(&mut a, &mut b, d.total_duration_seconds.to_bits());
            write_u8_pair(
                &mut a,
                &mut b,
                match d.calc_mode {
                    CalcMode::Linear => 0,
                    CalcMode::Spline => 1,
                    CalcMode::Discrete => 2,
                    CalcMode::Paced => 3,
                },
            );
            match d.repeat {
                Repeat::Once => write_u8_pair(&mut a, &mut b, 0),
                Repeat::Count(n) => {
                    write_u8_pair(&mut a, &mut b, 1);
                    write_u64_pair(&mut a, &mut b, u64::from(n));
                }
                Repeat::Indefinite => write_u8_pair(&mut a, &mut b, 2),
            }
            write_u8_pair(
                &mut a,
                &mut b,
                match d.trigger {
                    Trigger::Auto => 0,
                    Trigger::OnClick => 1,
                },
            );
            write_u64_pair(&mut a, &mut b, d.start_delay_seconds.to_bits());
            write_u8_pair(
                &mut a,
                &mut b,
                match d.fill {
                    Fill::Freeze => 0,
                    Fill::Remove => 1,
                },
            );
            write_u8_pair(&mut a, &mut b, u8::from(d.additive));
        }
    }

    PlanFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[derive(Clone, Copy)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::directive::DirectiveBuilder;
    use crate::patterns::Layer;
    use crate::timeline::{Timeline, TimelineSegment};

    fn fade_plan(label: &str, fade_seconds: f64) -> Choreography {
        let keyframes = Timeline::new(1.0)
            .then(TimelineSegment::to(fade_seconds, 0.0))
            .compile()
            .unwrap();
        let directive =
            DirectiveBuilder::new(AnimatedAttribute::Opacity, keyframes, fade_seconds)
                .build()
                .unwrap();
        let mut layer = Layer::new(label, "a.png");
        layer.directives.push(directive);
        Choreography {
            viewport: Viewport {
                width: 64.0,
                height: 64.0,
            },
            layers: vec![layer],
        }
    }

    #[test]
    fn fingerprint_is_deterministic_for_same_plan() {
        let plan = fade_plan("only", 2.0);
        assert_eq!(fingerprint_plan(&plan), fingerprint_plan(&plan));
    }

    #[test]
    fn fingerprint_changes_when_the_plan_changes() {
        assert_ne!(
            fingerprint_plan(&fade_plan("only", 2.0)),
            fingerprint_plan(&fade_plan("only", 3.0))
        );
        assert_ne!(
            fingerprint_plan(&fade_plan("top", 2.0)),
            fingerprint_plan(&fade_plan("bottom", 2.0))
        );
    }

    #[test]
    fn fingerprint_sees_layer_order() {
        let mut forward = fade_plan("one", 2.0);
        forward.layers.push(Layer::new("two", "b.png"));
        let mut reversed = forward.clone();
        reversed.layers.reverse();
        assert_ne!(fingerprint_plan(&forward), fingerprint_plan(&reversed));
    }
}
