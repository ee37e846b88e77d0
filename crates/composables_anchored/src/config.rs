//! Drag configuration
//!
//! Everything the state machine reads but never computes: the commit
//! thresholds, the settle animation and the confirmation predicate.

use std::fmt;
use std::sync::Arc;

use composables_animation::{AnimationSpec, FrameClock};

use crate::threshold::{
    fixed_positional_threshold, fixed_velocity_threshold, PositionalThreshold, VelocityThreshold,
    DEFAULT_POSITIONAL_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD,
};

/// Predicate that may veto a change of the settled value
pub type ConfirmValueChange<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Configuration for an [`AnchoredDraggableState`](crate::AnchoredDraggableState)
pub struct DragConfig<T> {
    positional_threshold: PositionalThreshold,
    velocity_threshold: VelocityThreshold,
    animation_spec: AnimationSpec,
    confirm_value_change: ConfirmValueChange<T>,
    frame_clock: FrameClock,
}

impl<T> DragConfig<T> {
    /// Default thresholds, a medium spring and a predicate accepting everything
    pub fn new() -> Self {
        Self {
            positional_threshold: fixed_positional_threshold(DEFAULT_POSITIONAL_THRESHOLD),
            velocity_threshold: fixed_velocity_threshold(DEFAULT_VELOCITY_THRESHOLD),
            animation_spec: AnimationSpec::default(),
            confirm_value_change: Arc::new(|_| true),
            frame_clock: FrameClock::default(),
        }
    }

    /// Set the positional threshold from the distance between two anchors
    pub fn positional_threshold<F>(mut self, threshold: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.positional_threshold = Arc::new(threshold);
        self
    }

    pub fn velocity_threshold<F>(mut self, threshold: F) -> Self
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.velocity_threshold = Arc::new(threshold);
        self
    }

    pub fn animation_spec(mut self, spec: AnimationSpec) -> Self {
        self.animation_spec = spec;
        self
    }

    /// Set the predicate consulted before the settled value changes
    pub fn confirm_value_change<F>(mut self, confirm: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.confirm_value_change = Arc::new(confirm);
        self
    }

    pub fn frame_clock(mut self, clock: FrameClock) -> Self {
        self.frame_clock = clock;
        self
    }

    pub fn positional_threshold_for(&self, distance: f32) -> f32 {
        (self.positional_threshold)(distance)
    }

    pub fn velocity_threshold_value(&self) -> f32 {
        (self.velocity_threshold)()
    }

    pub fn animation(&self) -> AnimationSpec {
        self.animation_spec
    }

    pub fn clock(&self) -> FrameClock {
        self.frame_clock
    }

    pub fn confirms(&self, value: &T) -> bool {
        (self.confirm_value_change)(value)
    }
}

impl<T> Default for DragConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DragConfig<T> {
    fn clone(&self) -> Self {
        Self {
            positional_threshold: Arc::clone(&self.positional_threshold),
            velocity_threshold: Arc::clone(&self.velocity_threshold),
            animation_spec: self.animation_spec,
            confirm_value_change: Arc::clone(&self.confirm_value_change),
            frame_clock: self.frame_clock,
        }
    }
}

impl<T> fmt::Debug for DragConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("velocity_threshold", &self.velocity_threshold_value())
            .field("animation_spec", &self.animation_spec)
            .field("frame_clock", &self.frame_clock)
            .finish_non_exhaustive()
    }
}
