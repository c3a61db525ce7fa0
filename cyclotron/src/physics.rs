//! Relativistic circular-motion physics
//!
//! Models a single particle on a fixed circular track whose speed grows with
//! diminishing returns as it approaches the speed of light:
//! - acceleration scales with `1 - v/c`, so `v` approaches `c` asymptotically
//! - a hard clamp guarantees `v` never exceeds `c` after a discrete step
//! - angular position advances by `v / r` per second (circular motion)
//!
//! All quantities are SI: meters, seconds, kilograms, joules, newtons.

use glam::DVec2;

/// Speed of light in m/s
pub const C: f64 = 299_792_458.0;

/// Controls how quickly the particle approaches the speed of light
pub const ACCELERATION_FACTOR: f64 = 10_000_000.0;

/// A particle circling the origin at a fixed radius
#[derive(Debug, Clone)]
pub struct Particle {
    /// Scalar speed along the track in m/s, kept within `[0, C]`
    pub velocity: f64,
    /// Accumulated angle in radians, unbounded (trig functions wrap)
    pub angle: f64,
    /// Orbit radius in meters, positive, fixed at construction
    pub distance: f64,
    /// Mass in kilograms
    pub mass: f64,
    /// Visual radius in meters
    pub radius: f64,
    /// Display color (RGBA)
    pub color: [f32; 4],
}

impl Particle {
    pub fn new(mass: f64, radius: f64, distance: f64, color: [f32; 4]) -> Self {
        Self {
            velocity: 0.0,
            angle: 0.0,
            distance,
            mass,
            radius,
            color,
        }
    }

    /// Advance the particle by `dt` seconds.
    ///
    /// Speed grows with diminishing returns as it nears `C`; the clamp below
    /// is the sole mechanism keeping a discrete step from overshooting the
    /// limit, so `velocity == C` exactly once saturated.
    pub fn update(&mut self, dt: f64) {
        if self.velocity < C {
            let increment = ACCELERATION_FACTOR * (1.0 - self.velocity / C);
            self.velocity += increment * dt;
        }

        if self.velocity > C {
            self.velocity = C;
        }

        self.angle += self.velocity / self.distance * dt;
    }

    /// Position on the circular track, in meters
    pub fn position(&self) -> DVec2 {
        DVec2::new(
            self.distance * self.angle.cos(),
            self.distance * self.angle.sin(),
        )
    }

    /// Newtonian kinetic energy in joules: `½mv²`
    ///
    /// Deliberately not Lorentz-corrected even as `v` nears `C`; this is a
    /// stylized visualization, not a relativistic energy model.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    /// Centripetal force in newtons: `mv²/r`
    pub fn centripetal_force(&self) -> f64 {
        self.mass * self.velocity * self.velocity / self.distance
    }

    /// Rest-mass energy in joules: `mc²`
    pub fn rest_energy(&self) -> f64 {
        self.mass * C * C
    }

    /// Fraction of the speed of light reached, in `[0, 1]`
    pub fn light_speed_fraction(&self) -> f64 {
        self.velocity / C
    }

    /// Distance covered, approximated as `elapsed * velocity`.
    ///
    /// Uses the current speed over the whole elapsed time rather than the
    /// integral of speed, matching the displayed statistic of the original
    /// visualization.
    pub fn meters_travelled(&self, elapsed: f64) -> f64 {
        elapsed * self.velocity
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(1.0, 0.1, 6.0, [1.0, 1.0, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_step() {
        // From rest: increment = 1e7 * (1 - 0) = 1e7, so after one second
        // v = 1e7 m/s and the angle has advanced by v/r = 1e7/6 rad.
        let mut p = Particle::new(1.0, 0.1, 6.0, [1.0, 1.0, 1.0, 1.0]);
        p.update(1.0);

        assert_eq!(p.velocity, 10_000_000.0);
        assert!((p.angle - 10_000_000.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_stays_below_c() {
        let mut p = Particle::default();
        for _ in 0..10_000 {
            p.update(0.016);
            assert!(p.velocity >= 0.0);
            assert!(p.velocity <= C);
        }
    }

    #[test]
    fn test_velocity_monotonic() {
        let mut p = Particle::default();
        let mut previous = p.velocity;
        for i in 0..1_000 {
            let dt = (i % 7) as f64 * 0.01;
            p.update(dt);
            assert!(p.velocity >= previous);
            previous = p.velocity;
        }
    }

    #[test]
    fn test_overshoot_clamps_to_c_exactly() {
        let mut p = Particle::default();
        p.velocity = C - 1.0;
        // increment = 1e7 * (1/C) per second; a long step pushes past C.
        p.update(1_000.0);
        assert_eq!(p.velocity, C);
    }

    #[test]
    fn test_c_is_a_fixed_point() {
        let mut p = Particle::default();
        p.velocity = C;
        let angle_before = p.angle;
        p.update(0.5);
        assert_eq!(p.velocity, C);
        // The angle still advances at full speed.
        assert!(p.angle > angle_before);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut p = Particle::default();
        p.velocity = 12_345.0;
        p.angle = 1.5;
        p.update(0.0);
        assert_eq!(p.velocity, 12_345.0);
        assert_eq!(p.angle, 1.5);
    }

    #[test]
    fn test_position_stays_on_circle() {
        let mut p = Particle::default();
        for _ in 0..500 {
            p.update(0.02);
            let r = p.position().length();
            assert!((r - p.distance).abs() < 1e-9);
        }
    }

    #[test]
    fn test_position_matches_angle() {
        let mut p = Particle::default();
        p.angle = std::f64::consts::FRAC_PI_2;
        let pos = p.position();
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.y - p.distance).abs() < 1e-9);
    }

    #[test]
    fn test_derived_quantities() {
        let mut p = Particle::new(2.0, 0.1, 4.0, [1.0, 1.0, 1.0, 1.0]);
        p.velocity = 3.0;
        assert_eq!(p.kinetic_energy(), 0.5 * 2.0 * 9.0);
        assert_eq!(p.centripetal_force(), 2.0 * 9.0 / 4.0);
        assert_eq!(p.rest_energy(), 2.0 * C * C);
        assert_eq!(p.light_speed_fraction(), 3.0 / C);
    }

    #[test]
    fn test_meters_travelled_at_light_speed() {
        let mut p = Particle::default();
        p.velocity = C;
        assert_eq!(p.meters_travelled(10.0), 2_997_924_580.0);
    }
}
