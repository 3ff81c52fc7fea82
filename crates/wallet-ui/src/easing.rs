//! Cubic-bezier easing evaluated in closed form.

/// Control points of a CSS `cubic-bezier()` timing function. The end points
/// are fixed at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// `cubic-bezier(0.175, 0.885, 0.32, 1.275)`, which overshoots before settling.
pub const SPRING: CubicBezier = CubicBezier::new(0.175, 0.885, 0.32, 1.275);

const EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;
const MIN_SLOPE: f64 = 1e-6;
const BISECTION_ITERATIONS: usize = 64;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(p1: f64, p2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    pub fn sample_x(&self, t: f64) -> f64 {
        Self::sample(self.x1, self.x2, t)
    }

    pub fn sample_y(&self, t: f64) -> f64 {
        Self::sample(self.y1, self.y2, t)
    }

    /// Finds the curve parameter whose X coordinate is `x`.
    ///
    /// Newton's method first; if it does not converge the parameter is
    /// bracketed by bisection, which always terminates.
    pub fn solve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(t) - x;
            if error.abs() < EPSILON && (0.0..=1.0).contains(&t) {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < MIN_SLOPE {
                break;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let sampled = self.sample_x(t);
            if (sampled - x).abs() < EPSILON {
                break;
            }
            if x > sampled {
                lo = t;
            } else {
                hi = t;
            }
            t = lo + (hi - lo) * 0.5;
        }
        t
    }

    /// Eased value at normalized time `time`, clamped to [0, 1].
    pub fn ease(&self, time: f64) -> f64 {
        let time = time.clamp(0.0, 1.0);
        self.sample_y(self.solve_x(time))
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

pub fn cubic_bezier_spring(time: f64) -> f64 {
    SPRING.ease(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_end_points() {
        assert!(cubic_bezier_spring(0.0).abs() < TOLERANCE);
        assert!((cubic_bezier_spring(1.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_converges_across_range() {
        for step in 0..=1000 {
            let x = step as f64 / 1000.0;
            let t = SPRING.solve_x(x);
            assert!((0.0..=1.0).contains(&t), "parameter {t} out of range for {x}");
            assert!((SPRING.sample_x(t) - x).abs() < 1e-5, "no convergence at {x}");
            assert!(cubic_bezier_spring(x).is_finite());
        }
    }

    #[test]
    fn test_spring_overshoots() {
        let peak = (0..=100)
            .map(|step| cubic_bezier_spring(step as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for x in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.ease(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert!(cubic_bezier_spring(-0.5).abs() < TOLERANCE);
        assert!((cubic_bezier_spring(1.5) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_css() {
        assert_eq!(SPRING.to_css(), "cubic-bezier(0.175, 0.885, 0.32, 1.275)");
    }
}
