//! Animation specifications
//!
//! An [`AnimationSpec`] describes *how* a value travels from one position to
//! another. [`ValueAnimation`] is the running instance that gets stepped once
//! per frame.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};

/// Tween fractions this close to 1 count as complete, absorbing f32 drift
/// from accumulating frame deltas.
const FRACTION_EPSILON: f32 = 1e-4;

/// How a value animates towards its target
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationSpec {
    /// Physics based, inherits the initial velocity
    Spring(SpringConfig),
    /// Fixed duration, shaped by an easing curve
    Tween { duration_ms: u64, easing: Easing },
    /// Jump to the target immediately
    Snap,
}

impl AnimationSpec {
    pub fn spring(config: SpringConfig) -> Self {
        AnimationSpec::Spring(config)
    }

    pub fn tween(duration_ms: u64, easing: Easing) -> Self {
        AnimationSpec::Tween {
            duration_ms,
            easing,
        }
    }

    /// Start a running animation of this spec
    pub fn start(&self, from: f32, to: f32, velocity: f32) -> ValueAnimation {
        ValueAnimation::new(*self, from, to, velocity)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Spring(SpringConfig::default())
    }
}

/// One sampled frame of a running animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub value: f32,
    pub velocity: f32,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug)]
enum Driver {
    Spring(Spring),
    Tween {
        duration: f32,
        easing: Easing,
        elapsed: f32,
    },
    Snap,
}

/// A running animation between two values
#[derive(Clone, Copy, Debug)]
pub struct ValueAnimation {
    driver: Driver,
    from: f32,
    to: f32,
    value: f32,
}

impl ValueAnimation {
    pub fn new(spec: AnimationSpec, from: f32, to: f32, velocity: f32) -> Self {
        let driver = match spec {
            AnimationSpec::Spring(config) => {
                let mut spring = Spring::with_velocity(config, from, velocity);
                spring.set_target(to);
                Driver::Spring(spring)
            }
            AnimationSpec::Tween {
                duration_ms,
                easing,
            } if duration_ms > 0 => Driver::Tween {
                duration: duration_ms as f32 / 1000.0,
                easing,
                elapsed: 0.0,
            },
            AnimationSpec::Tween { .. } | AnimationSpec::Snap => Driver::Snap,
        };
        Self {
            driver,
            from,
            to,
            value: from,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by `dt` seconds and sample the new value
    pub fn step(&mut self, dt: f32) -> AnimationFrame {
        let previous = self.value;
        let frame = match &mut self.driver {
            Driver::Spring(spring) => {
                spring.step(dt);
                AnimationFrame {
                    value: spring.value(),
                    velocity: spring.velocity(),
                    finished: spring.is_settled() && spring.value() == self.to,
                }
            }
            Driver::Tween {
                duration,
                easing,
                elapsed,
            } => {
                *elapsed += dt;
                let mut fraction = (*elapsed / *duration).min(1.0);
                if fraction >= 1.0 - FRACTION_EPSILON {
                    fraction = 1.0;
                }
                let value = if fraction >= 1.0 {
                    self.to
                } else {
                    self.from + (self.to - self.from) * easing.transform(fraction)
                };
                let velocity = if dt > 0.0 { (value - previous) / dt } else { 0.0 };
                AnimationFrame {
                    value,
                    velocity,
                    finished: fraction >= 1.0,
                }
            }
            Driver::Snap => AnimationFrame {
                value: self.to,
                velocity: 0.0,
                finished: true,
            },
        };
        self.value = frame.value;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spec: AnimationSpec, from: f32, to: f32) -> Vec<AnimationFrame> {
        let mut animation = spec.start(from, to, 0.0);
        let mut frames = Vec::new();
        for _ in 0..1000 {
            let frame = animation.step(1.0 / 120.0);
            frames.push(frame);
            if frame.finished {
                break;
            }
        }
        frames
    }

    #[test]
    fn test_snap_finishes_on_first_frame() {
        let frames = run(AnimationSpec::Snap, 0.0, 300.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 300.0);
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let frames = run(AnimationSpec::tween(300, Easing::FastOutSlowIn), 800.0, 200.0);
        let last = frames.last().unwrap();
        assert!(last.finished);
        assert_eq!(last.value, 200.0);
        // 300ms at 120fps
        assert!((35..=37).contains(&frames.len()));
    }

    #[test]
    fn test_zero_duration_tween_is_a_snap() {
        let frames = run(AnimationSpec::tween(0, Easing::Linear), 0.0, 10.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 10.0);
    }

    #[test]
    fn test_spring_lands_exactly_on_target() {
        let frames = run(AnimationSpec::default(), 0.0, 500.0);
        let last = frames.last().unwrap();
        assert!(last.finished);
        assert_eq!(last.value, 500.0);
        assert_eq!(last.velocity, 0.0);
    }
}
