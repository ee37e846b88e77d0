//! Threshold & settle policy
//!
//! Decides where a drag commits when it ends: a fast enough fling commits to
//! the next anchor in the direction of travel, otherwise the offset has to
//! travel past a positional threshold.

use std::sync::Arc;

use crate::anchors::AnchorSet;

/// Maps the distance between two anchors to the distance that must be
/// travelled before committing to the farther one
pub type PositionalThreshold = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Velocity (units per second) above which a release commits regardless of
/// distance travelled
pub type VelocityThreshold = Arc<dyn Fn() -> f32 + Send + Sync>;

/// Default positional threshold in pixels
pub const DEFAULT_POSITIONAL_THRESHOLD: f32 = 56.0;

/// Default velocity threshold in pixels per second
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 125.0;

/// A threshold of `pixels`, regardless of the distance between anchors
pub fn fixed_positional_threshold(pixels: f32) -> PositionalThreshold {
    Arc::new(move |_distance| pixels)
}

/// A threshold of `fraction` of the distance between anchors
pub fn fractional_positional_threshold(fraction: f32) -> PositionalThreshold {
    Arc::new(move |distance| distance * fraction)
}

pub fn fixed_velocity_threshold(pixels_per_second: f32) -> VelocityThreshold {
    Arc::new(move || pixels_per_second)
}

/// The value a drag at `offset`, released with `velocity`, commits to
///
/// Anchors missing in the direction of travel keep `current`.
pub fn compute_target<T: Clone + PartialEq>(
    anchors: &AnchorSet<T>,
    offset: f32,
    current: &T,
    velocity: f32,
    positional_threshold: &dyn Fn(f32) -> f32,
    velocity_threshold: &dyn Fn() -> f32,
) -> T {
    let current_position = anchors.position_of(current);
    if current_position == offset || current_position.is_nan() {
        return current.clone();
    }

    let upward = current_position < offset;
    let Some(next) = anchors.closest_anchor_in_direction(offset, upward) else {
        return current.clone();
    };

    let velocity_threshold = velocity_threshold();
    let flung = if upward {
        velocity >= velocity_threshold
    } else {
        velocity <= -velocity_threshold
    };
    if flung {
        return next;
    }

    let distance = (anchors.position_of(&next) - current_position).abs();
    let threshold = positional_threshold(distance).abs();
    let crossed = if upward {
        offset >= current_position + threshold
    } else {
        offset <= current_position - threshold
    };
    if crossed {
        next
    } else {
        current.clone()
    }
}

/// The closest anchor in the direction of travel, ignoring thresholds
pub fn compute_target_without_thresholds<T: Clone + PartialEq>(
    anchors: &AnchorSet<T>,
    offset: f32,
    current: &T,
) -> T {
    let current_position = anchors.position_of(current);
    if current_position == offset || current_position.is_nan() {
        return current.clone();
    }
    anchors
        .closest_anchor_in_direction(offset, current_position < offset)
        .unwrap_or_else(|| current.clone())
}
