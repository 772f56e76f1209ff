#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    Accelerate,
    Decelerate,
    /// Fast-out-slow-in, cubic-bezier(0.4, 0.0, 0.2, 1.0).
    Material,
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Material => cubic_bezier_ease(t, 0.4, 0.0, 0.2, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// CSS-style cubic bezier easing: solves x(p) = t for the curve parameter,
/// then evaluates y(p). Computed in f64 internally to keep per-frame angle
/// deltas stable.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact.
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = f64::from(t);
    let x1 = f64::from(x1);
    let y1 = f64::from(y1);
    let x2 = f64::from(x2);
    let y2 = f64::from(y2);

    // x(p) is monotonic for control points inside [0,1], so bisection
    // always converges.
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut p = x;
    for _ in 0..32 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// One-dimensional cubic bezier with endpoints pinned at 0 and 1, in
/// Horner form.
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Accelerate,
        Ease::Decelerate,
        Ease::Material,
        Ease::CubicBezier {
            x1: 0.43,
            y1: 0.37,
            x2: 0.57,
            y2: 0.63,
        },
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-4);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), ease.apply(0.0));
            assert_eq!(ease.apply(1.5), ease.apply(1.0));
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn accelerate_and_decelerate_are_quadratic() {
        assert!((Ease::Accelerate.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Ease::Decelerate.apply(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn material_is_fast_out_slow_in() {
        // Known value for cubic-bezier(0.4, 0, 0.2, 1) at the midpoint.
        let mid = Ease::Material.apply(0.5);
        assert!((mid - 0.7756).abs() < 1e-3, "got {mid}");
        // The curve front-loads its motion.
        assert!(Ease::Material.apply(0.25) > 0.25);
    }

    #[test]
    fn swing_curve_is_nearly_symmetric() {
        let ease = Ease::CubicBezier {
            x1: 0.43,
            y1: 0.37,
            x2: 0.57,
            y2: 0.63,
        };
        let mid = ease.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "got {mid}");
    }
}
