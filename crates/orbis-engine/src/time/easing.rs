use std::f32::consts::PI;

/// Shapes a linear time fraction into an animation progress value.
///
/// Curves follow the classic view-animation interpolators: `factor` tunes how
/// strongly `Accelerate`/`Decelerate` bend (1.0 is a quadratic).
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `t^(2·factor)`: starts slow, ends fast.
    Accelerate(f32),
    /// `1 - (1 - t)^(2·factor)`: starts fast, ends slow.
    Decelerate(f32),
    /// Cosine ease in and out.
    AccelerateDecelerate,
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Maps `t` in [0, 1] to eased progress. Input is clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate(factor) => {
                if factor == 1.0 { t * t } else { t.powf(2.0 * factor) }
            }
            Easing::Decelerate(factor) => {
                let inv = 1.0 - t;
                if factor == 1.0 { 1.0 - inv * inv } else { 1.0 - inv.powf(2.0 * factor) }
            }
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() * 0.5 + 0.5,
            Easing::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 1e-5 }

    #[test]
    fn every_curve_pins_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::Accelerate(1.0),
            Easing::Accelerate(2.5),
            Easing::Decelerate(1.0),
            Easing::Decelerate(0.5),
            Easing::AccelerateDecelerate,
        ];
        for e in curves {
            assert!(close(e.apply(0.0), 0.0), "{e:?} at 0");
            assert!(close(e.apply(1.0), 1.0), "{e:?} at 1");
        }
    }

    #[test]
    fn decelerate_leads_linear() {
        assert!(close(Easing::Decelerate(1.0).apply(0.5), 0.75));
        assert!(close(Easing::Accelerate(1.0).apply(0.5), 0.25));
        assert!(close(Easing::AccelerateDecelerate.apply(0.5), 0.5));
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    }

    #[test]
    fn custom_curve_is_called() {
        fn step(t: f32) -> f32 { if t < 0.5 { 0.0 } else { 1.0 } }
        assert_eq!(Easing::Custom(step).apply(0.4), 0.0);
        assert_eq!(Easing::Custom(step).apply(0.6), 1.0);
    }
}
