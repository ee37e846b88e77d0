//! Frame-driven animation
//!
//! [`animate`] runs a [`ValueAnimation`] against a [`FrameClock`], yielding to
//! the runtime once per frame. Dropping the returned future stops the
//! animation after the last value it reported, which is how a superseded
//! campaign is cancelled.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::spec::{AnimationSpec, ValueAnimation};

/// Upper bound on a single animation, after which the target is forced
const MAX_ANIMATION_TIME: Duration = Duration::from_secs(10);

/// Frame pacing for animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    frame: Duration,
}

impl FrameClock {
    /// A clock ticking at `fps` frames per second
    pub fn with_fps(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::with_fps(120)
    }
}

/// Animate from `from` to `to`, calling `on_frame(value, velocity)` every frame
///
/// The final call always reports exactly `to`. A [`AnimationSpec::Snap`] reports
/// the target once without waiting for a frame.
pub async fn animate<F>(
    from: f32,
    to: f32,
    velocity: f32,
    spec: &AnimationSpec,
    clock: FrameClock,
    mut on_frame: F,
) where
    F: FnMut(f32, f32),
{
    if matches!(spec, AnimationSpec::Snap) || (from == to && velocity == 0.0) {
        on_frame(to, 0.0);
        return;
    }

    let mut animation = spec.start(from, to, velocity);
    let started = Instant::now();
    let mut ticker = time::interval_at(started + clock.frame, clock.frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = started;

    loop {
        let now = ticker.tick().await;
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if now.duration_since(started) >= MAX_ANIMATION_TIME {
            tracing::debug!(to, "animation ran past its time limit, snapping to target");
            on_frame(to, 0.0);
            return;
        }

        let frame = animation.step(dt);
        on_frame(frame.value, frame.velocity);
        if frame.finished {
            return;
        }
    }
}
