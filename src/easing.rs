/// Timing curve for a tween. `sample` maps normalized time in `[0, 1]` to
/// progress, which starts at 0 and ends at exactly 1 (springs may overshoot
/// in between).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// cubic-bezier(x1, y1, x2, y2), the CSS timing-function form.
    CubicBezier(f64, f64, f64, f64),
    /// Damped spring released from rest, mass 1.
    Spring { stiffness: f64, damping: f64 },
}

impl Easing {
    /// Material "standard" curve used by both flip phases.
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Underdamped spring for the reshuffle spin.
    pub const BOUNCY: Easing = Easing::Spring {
        stiffness: 200.0,
        damping: 12.0,
    };

    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let u = solve_bezier_x(t, x1, x2);
                bezier(u, y1, y2)
            }
            Easing::Spring { stiffness, damping } => spring(t, stiffness, damping),
        }
    }
}

fn bezier(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn bezier_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

// Newton first, bisection when the slope flattens out.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut u = x;
    for _ in 0..8 {
        let err = bezier(u, x1, x2) - x;
        if err.abs() < 1e-7 {
            return u;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..40 {
        let value = bezier(u, x1, x2);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

/// The spring's own clock is stretched so it has settled at `t = 1`,
/// whatever the tween duration.
fn spring(t: f64, stiffness: f64, damping: f64) -> f64 {
    let omega = stiffness.max(f64::EPSILON).sqrt();
    let zeta = damping / (2.0 * omega);

    if zeta < 1.0 {
        let decay = (zeta * omega).max(f64::EPSILON);
        let time = t * 6.0 / decay;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-decay * time).exp();
        1.0 - envelope * ((omega_d * time).cos() + decay / omega_d * (omega_d * time).sin())
    } else {
        // treated as critically damped
        let time = t * 8.0 / omega;
        let envelope = (-omega * time).exp();
        1.0 - envelope * (1.0 + omega * time)
    }
}
