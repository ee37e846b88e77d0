//! Spring physics animation
//!
//! RK4-integrated spring physics for settling a dragged offset onto an anchor.
//! A spring picks up the velocity the gesture was released with, so a fling
//! carries through into the settle.

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// A critically damped spring with the given stiffness and unit mass
    pub fn critically_damped(stiffness: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
            mass: 1.0,
        }
    }

    /// Medium stiffness, no overshoot. The default for anchored drags.
    pub fn medium() -> Self {
        Self::critically_damped(1500.0)
    }

    /// A stiff, snappy spring (good for short travel)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// A gentle, slow spring (good for full-height sheets)
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::medium()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Start a spring at `initial` moving with `velocity` (units per second)
    pub fn with_velocity(config: SpringConfig, initial: f32, velocity: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        // Within 0.5px and under 5px/s is imperceptible, and 0.5px is also the
        // tolerance anchored drags use to decide they have landed on an anchor.
        const EPSILON: f32 = 0.5;
        const VELOCITY_EPSILON: f32 = 5.0;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::medium(), 0.0);
        spring.set_target(100.0);

        // Simulate for 2 seconds at 120fps
        for _ in 0..240 {
            spring.step(1.0 / 120.0);
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_spring_keeps_release_velocity() {
        let spring = Spring::with_velocity(SpringConfig::medium(), 10.0, -800.0);
        assert_eq!(spring.velocity(), -800.0);
        assert_eq!(spring.value(), 10.0);
    }

    #[test]
    fn test_fling_overshoots_start_direction() {
        // Flinging away from the target first moves the value further away
        let mut spring = Spring::with_velocity(SpringConfig::medium(), 50.0, -2000.0);
        spring.set_target(100.0);
        spring.step(1.0 / 120.0);
        assert!(spring.value() < 50.0);
    }

    #[test]
    fn test_medium_is_critically_damped() {
        let config = SpringConfig::medium();
        assert!((config.damping - config.critical_damping()).abs() < 0.01);
        assert!(SpringConfig::gentle().is_underdamped());
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);

        // Large time step that might cause instability with Euler integration
        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
