//! Anchored drag state machine
//!
//! [`AnchoredDraggableState`] tracks where a draggable rests (its current
//! value), where it is right now (its offset) and the anchors it may settle
//! on. Every write of the offset goes through a drag campaign owned by the
//! [`DragMutex`], except [`dispatch_raw_delta`] which nested scrolling uses
//! for direct pass-through.
//!
//! Campaigns started with [`anchored_drag`] or [`anchored_drag_to`] are
//! restarted against the latest anchors whenever layout replaces them, so a
//! resize in the middle of a settle animation redirects the animation instead
//! of landing on a stale position.
//!
//! [`dispatch_raw_delta`]: AnchoredDraggableState::dispatch_raw_delta
//! [`anchored_drag`]: AnchoredDraggableState::anchored_drag
//! [`anchored_drag_to`]: AnchoredDraggableState::anchored_drag_to

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use composables_animation::{animate, AnimationSpec};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::anchors::AnchorSet;
use crate::config::DragConfig;
use crate::error::{DragError, Result};
use crate::mutex::{DragMutex, MutatePriority};
use crate::restart::restartable;
use crate::threshold::{compute_target, compute_target_without_thresholds};

/// Offsets within this distance of an anchor count as resting on it
const SNAP_TOLERANCE: f32 = 0.5;

/// Progress values this close to 0 or 1 are reported as exactly 0 or 1
const PROGRESS_EPSILON: f32 = 1e-6;

/// Bounds for values a draggable can rest at
pub trait AnchorValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> AnchorValue for T where T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

/// Saved form of a drag state, restored with
/// [`AnchoredDraggableState::from_snapshot`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSnapshot<T> {
    pub current_value: T,
}

struct Fields<T> {
    current_value: T,
    /// NaN until the first anchors are applied
    offset: f32,
    last_velocity: f32,
    /// Explicit target of a running targeted campaign, or of a pending retarget
    drag_target: Option<T>,
    anchors: AnchorSet<T>,
}

impl<T: AnchorValue> Fields<T> {
    fn release_position(&self) -> ReleasePosition<T> {
        ReleasePosition {
            anchors: self.anchors.clone(),
            offset: self.offset,
            current_value: self.current_value.clone(),
        }
    }

    fn closest_value(&self) -> T {
        if let Some(target) = &self.drag_target {
            return target.clone();
        }
        if self.offset.is_nan() {
            return self.current_value.clone();
        }
        compute_target_without_thresholds(&self.anchors, self.offset, &self.current_value)
    }

    /// A NaN delta moves nothing
    fn new_offset_for_delta(&self, delta: f32) -> f32 {
        let delta = if delta.is_nan() { 0.0 } else { delta };
        let base = if self.offset.is_nan() { 0.0 } else { self.offset };
        coerce_in(
            base + delta,
            self.anchors.min_position(),
            self.anchors.max_position(),
        )
    }
}

/// What a release decision reads, copied out of [`Fields`] so the threshold
/// closures run with the fields unlocked
struct ReleasePosition<T> {
    anchors: AnchorSet<T>,
    offset: f32,
    current_value: T,
}

impl<T: AnchorValue> ReleasePosition<T> {
    fn commit_target(&self, config: &DragConfig<T>, velocity: f32) -> T {
        compute_target(
            &self.anchors,
            self.offset,
            &self.current_value,
            velocity,
            &|distance| config.positional_threshold_for(distance),
            &|| config.velocity_threshold_value(),
        )
    }
}

/// Clamp that leaves `value` untouched when a bound is NaN
fn coerce_in(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

struct Shared<T> {
    fields: Mutex<Fields<T>>,
    config: DragConfig<T>,
    mutex: DragMutex,
    /// Bumped whenever anchors or the drag target change
    revision: watch::Sender<u64>,
}

impl<T> Shared<T> {
    fn fields(&self) -> MutexGuard<'_, Fields<T>> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: AnchorValue> Shared<T> {
    fn target_value(&self) -> T {
        let position = {
            let fields = self.fields();
            if let Some(target) = &fields.drag_target {
                return target.clone();
            }
            if fields.offset.is_nan() {
                return fields.current_value.clone();
            }
            fields.release_position()
        };
        position.commit_target(&self.config, 0.0)
    }

    fn drag_to(&self, offset: f32, velocity: f32) {
        let mut fields = self.fields();
        fields.offset = offset;
        fields.last_velocity = velocity;
    }

    /// Settle bookkeeping run at the end of every campaign, completed or not
    fn finish_campaign(&self) {
        let candidate = {
            let mut fields = self.fields();
            fields.drag_target = None;
            fields.anchors.closest_anchor(fields.offset).filter(|closest| {
                (fields.offset - fields.anchors.position_of(closest)).abs() <= SNAP_TOLERANCE
            })
        };

        // The predicate is user code and may read the state, so it runs unlocked
        if let Some(closest) = candidate {
            if self.config.confirms(&closest) {
                tracing::trace!(value = ?closest, "campaign finished on anchor");
                self.fields().current_value = closest;
            }
        }
    }
}

/// Runs the end-of-campaign bookkeeping when the campaign's future completes
/// or is dropped
struct CampaignGuard<T: AnchorValue> {
    shared: Arc<Shared<T>>,
}

impl<T: AnchorValue> Drop for CampaignGuard<T> {
    fn drop(&mut self) {
        self.shared.finish_campaign();
    }
}

/// Handle given to campaign blocks for moving the offset
pub struct AnchoredDragScope<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for AnchoredDragScope<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: AnchorValue> AnchoredDragScope<T> {
    /// Move to `offset` as is, recording `velocity`
    pub fn drag_to(&self, offset: f32, velocity: f32) {
        self.shared.drag_to(offset, velocity);
    }

    /// Move by `delta`, clamped to the anchor bounds
    pub fn drag_by(&self, delta: f32) {
        let offset = self.shared.fields().new_offset_for_delta(delta);
        self.shared.drag_to(offset, 0.0);
    }

    pub fn offset(&self) -> f32 {
        self.shared.fields().offset
    }
}

/// State of a component that can be dragged between anchors
///
/// Cloning gives another handle to the same state.
pub struct AnchoredDraggableState<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for AnchoredDraggableState<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: AnchorValue> AnchoredDraggableState<T> {
    /// A state resting at `initial_value` with no anchors yet
    pub fn new(initial_value: T, config: DragConfig<T>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                fields: Mutex::new(Fields {
                    current_value: initial_value,
                    offset: f32::NAN,
                    last_velocity: 0.0,
                    drag_target: None,
                    anchors: AnchorSet::new(),
                }),
                config,
                mutex: DragMutex::new(),
                revision,
            }),
        }
    }

    /// A state with anchors already known, placed on `initial_value`
    pub fn with_anchors(initial_value: T, anchors: AnchorSet<T>, config: DragConfig<T>) -> Self {
        let state = Self::new(initial_value.clone(), config);
        state.shared.fields().anchors = anchors;
        state.try_snap_to(initial_value);
        state
    }

    pub fn from_snapshot(snapshot: DragSnapshot<T>, config: DragConfig<T>) -> Self {
        Self::new(snapshot.current_value, config)
    }

    pub fn snapshot(&self) -> DragSnapshot<T> {
        DragSnapshot {
            current_value: self.current_value(),
        }
    }

    pub fn config(&self) -> &DragConfig<T> {
        &self.shared.config
    }

    /// The value the component last settled on
    pub fn current_value(&self) -> T {
        self.shared.fields().current_value.clone()
    }

    /// Where a release at the current offset would settle, or the explicit
    /// target of a running animation
    pub fn target_value(&self) -> T {
        self.shared.target_value()
    }

    /// The next anchor in the direction of travel, ignoring thresholds
    pub fn closest_value(&self) -> T {
        self.shared.fields().closest_value()
    }

    /// Raw offset, NaN until anchors have been applied
    pub fn offset(&self) -> f32 {
        self.shared.fields().offset
    }

    pub fn require_offset(&self) -> Result<f32> {
        let offset = self.offset();
        if offset.is_nan() {
            return Err(DragError::OffsetUninitialized);
        }
        Ok(offset)
    }

    /// Fraction of the way from the current value's anchor to the closest
    /// value's anchor
    ///
    /// Reports 1.0 when both anchors coincide or either is missing.
    pub fn progress(&self) -> Result<f32> {
        let fields = self.shared.fields();
        let a = fields.anchors.position_of(&fields.current_value);
        let b = fields.anchors.position_of(&fields.closest_value());
        let distance = (b - a).abs();
        if distance.is_nan() || distance <= PROGRESS_EPSILON {
            return Ok(1.0);
        }
        if fields.offset.is_nan() {
            return Err(DragError::OffsetUninitialized);
        }

        let progress = (fields.offset - a) / (b - a);
        Ok(if progress < PROGRESS_EPSILON {
            0.0
        } else if progress > 1.0 - PROGRESS_EPSILON {
            1.0
        } else {
            progress
        })
    }

    pub fn last_velocity(&self) -> f32 {
        self.shared.fields().last_velocity
    }

    /// Whether a targeted campaign is running or a retarget is pending
    pub fn is_animation_running(&self) -> bool {
        self.shared.fields().drag_target.is_some()
    }

    pub fn anchors(&self) -> AnchorSet<T> {
        self.shared.fields().anchors.clone()
    }

    /// Replace the anchors if they changed, then move onto `new_target`
    ///
    /// Without an explicit target the anchor closest to the offset is used, or
    /// the current target when the offset is not initialized yet. When a
    /// campaign is running it is restarted towards the new target instead.
    /// Returns whether the anchors changed.
    pub fn update_anchors(&self, new_anchors: AnchorSet<T>, new_target: Option<T>) -> bool {
        if self.shared.fields().anchors == new_anchors {
            return false;
        }
        let target = match new_target.or_else(|| new_anchors.closest_anchor(self.offset())) {
            Some(target) => target,
            None => self.shared.target_value(),
        };
        self.shared.fields().anchors = new_anchors;

        tracing::debug!(?target, "anchors updated");
        if !self.try_snap_to(target.clone()) {
            tracing::debug!(?target, "drag in progress, retargeting running campaign");
            self.shared.fields().drag_target = Some(target);
        }
        self.shared.revision.send_modify(|revision| *revision += 1);
        true
    }

    /// The offset `delta` would lead to, clamped to the anchor bounds
    pub fn new_offset_for_delta(&self, delta: f32) -> f32 {
        self.shared.fields().new_offset_for_delta(delta)
    }

    /// Move the offset by `delta` outside of any campaign
    ///
    /// Returns the part of `delta` that was consumed after clamping.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        if delta.is_nan() {
            return 0.0;
        }
        let mut fields = self.shared.fields();
        let old_offset = if fields.offset.is_nan() { 0.0 } else { fields.offset };
        let new_offset = fields.new_offset_for_delta(delta);
        fields.offset = new_offset;
        new_offset - old_offset
    }

    /// Run a gesture under the drag mutex
    ///
    /// `block` is invoked again from scratch when the anchors change while it
    /// runs, so it should pick the gesture up wherever it currently is.
    pub async fn drag<F, Fut>(&self, priority: MutatePriority, mut block: F)
    where
        F: FnMut(AnchoredDragScope<T>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.anchored_drag(priority, move |scope, _| block(scope))
            .await;
    }

    /// Run `block` with exclusive control over the offset
    ///
    /// `block` receives the current anchors and is restarted whenever they
    /// change. On completion or cancellation the current value moves to the
    /// closest anchor, provided the offset rests on it and the change is
    /// confirmed.
    pub async fn anchored_drag<F, Fut>(&self, priority: MutatePriority, mut block: F)
    where
        F: FnMut(AnchoredDragScope<T>, AnchorSet<T>) -> Fut,
        Fut: Future<Output = ()>,
    {
        let shared = Arc::clone(&self.shared);
        let outcome = self
            .shared
            .mutex
            .mutate(priority, move || async move {
                tracing::debug!(?priority, "anchored drag started");
                let _finish = CampaignGuard {
                    shared: Arc::clone(&shared),
                };
                let scope = AnchoredDragScope {
                    shared: Arc::clone(&shared),
                };
                let inputs = {
                    let shared = Arc::clone(&shared);
                    move || shared.fields().anchors.clone()
                };
                restartable(shared.revision.subscribe(), inputs, move |anchors| {
                    block(scope.clone(), anchors)
                })
                .await;
            })
            .await;

        if outcome.is_err() {
            tracing::debug!(?priority, "anchored drag superseded");
        }
    }

    /// Run `block` towards `target` with exclusive control over the offset
    ///
    /// Like [`anchored_drag`](Self::anchored_drag), also restarting when the
    /// target is redirected by a layout change. A target without an anchor is
    /// applied directly without running `block`.
    pub async fn anchored_drag_to<F, Fut>(&self, target: T, priority: MutatePriority, mut block: F)
    where
        F: FnMut(AnchoredDragScope<T>, AnchorSet<T>, T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.shared.fields().anchors.has_anchor_for(&target) {
            tracing::debug!(?target, "no anchor for target, applying it directly");
            self.shared.fields().current_value = target;
            return;
        }

        let shared = Arc::clone(&self.shared);
        let outcome = self
            .shared
            .mutex
            .mutate(priority, move || async move {
                tracing::debug!(?target, ?priority, "anchored drag to target started");
                let _finish = CampaignGuard {
                    shared: Arc::clone(&shared),
                };
                shared.fields().drag_target = Some(target);
                let scope = AnchoredDragScope {
                    shared: Arc::clone(&shared),
                };
                let inputs = {
                    let shared = Arc::clone(&shared);
                    move || (shared.fields().anchors.clone(), shared.target_value())
                };
                restartable(
                    shared.revision.subscribe(),
                    inputs,
                    move |(anchors, latest)| block(scope.clone(), anchors, latest),
                )
                .await;
            })
            .await;

        if outcome.is_err() {
            tracing::debug!(?priority, "anchored drag to target superseded");
        }
    }

    /// Settle after a release with `velocity`
    ///
    /// Animates to the committed target if the change is confirmed, back to
    /// the current value otherwise.
    pub async fn settle(&self, velocity: f32) -> Result<()> {
        let position = {
            let fields = self.shared.fields();
            if fields.offset.is_nan() {
                return Err(DragError::OffsetUninitialized);
            }
            fields.release_position()
        };
        let target = position.commit_target(&self.shared.config, velocity);
        let previous = position.current_value;

        let destination = if self.shared.config.confirms(&target) {
            target
        } else {
            tracing::debug!(?target, ?previous, "value change vetoed, settling back");
            previous
        };
        self.animate_to_with(destination, self.shared.config.animation(), velocity)
            .await;
        Ok(())
    }

    /// Jump to `target` without animating
    pub async fn snap_to(&self, target: T) {
        self.anchored_drag_to(target, MutatePriority::Default, |scope, anchors, latest| async move {
            let position = anchors.position_of(&latest);
            if !position.is_nan() {
                scope.drag_to(position, 0.0);
            }
        })
        .await;
    }

    /// Animate to `target` with the configured spec, starting from the last
    /// recorded velocity
    pub async fn animate_to(&self, target: T) {
        let velocity = self.last_velocity();
        self.animate_to_with(target, self.shared.config.animation(), velocity)
            .await;
    }

    pub async fn animate_to_with(&self, target: T, spec: AnimationSpec, velocity: f32) {
        let clock = self.shared.config.clock();
        self.anchored_drag_to(target, MutatePriority::Default, move |scope, anchors, latest| async move {
            let to = anchors.position_of(&latest);
            if to.is_nan() {
                return;
            }
            let from = scope.offset();
            let from = if from.is_nan() { 0.0 } else { from };
            animate(from, to, velocity, &spec, clock, |value, velocity| {
                scope.drag_to(value, velocity)
            })
            .await;
        })
        .await;
    }

    /// Move onto `target` immediately if no campaign is running
    fn try_snap_to(&self, target: T) -> bool {
        let shared = &self.shared;
        shared
            .mutex
            .try_mutate(|| {
                let mut fields = shared.fields();
                let position = fields.anchors.position_of(&target);
                if !position.is_nan() {
                    fields.offset = position;
                    fields.last_velocity = 0.0;
                    fields.drag_target = None;
                }
                fields.current_value = target;
            })
            .is_some()
    }
}

impl<T: AnchorValue> fmt::Debug for AnchoredDraggableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.shared.fields();
        f.debug_struct("AnchoredDraggableState")
            .field("current_value", &fields.current_value)
            .field("offset", &fields.offset)
            .field("drag_target", &fields.drag_target)
            .field("anchors", &fields.anchors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Side {
        A,
        B,
    }

    fn anchors() -> AnchorSet<Side> {
        AnchorSet::builder().at(Side::A, 0.0).at(Side::B, 100.0).build()
    }

    fn config() -> DragConfig<Side> {
        DragConfig::new()
            .positional_threshold(|_| 10.0)
            .velocity_threshold(|| 1000.0)
    }

    #[test]
    fn test_coerce_in_ignores_nan_bounds() {
        assert_eq!(coerce_in(5.0, 0.0, 1.0), 1.0);
        assert_eq!(coerce_in(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(coerce_in(5.0, f32::NAN, f32::NAN), 5.0);
    }

    #[test]
    fn test_offset_uninitialized_until_anchors() {
        let state = AnchoredDraggableState::new(Side::A, config());
        assert!(state.offset().is_nan());
        assert_eq!(state.require_offset(), Err(DragError::OffsetUninitialized));
        assert_eq!(state.target_value(), Side::A);
        assert_eq!(state.closest_value(), Side::A);
        assert_eq!(state.progress(), Ok(1.0));

        assert!(state.update_anchors(anchors(), None));
        assert_eq!(state.require_offset(), Ok(0.0));
        assert_eq!(state.current_value(), Side::A);
    }

    #[test]
    fn test_update_anchors_snaps_to_explicit_target() {
        let state = AnchoredDraggableState::new(Side::A, config());
        state.update_anchors(anchors(), Some(Side::B));
        assert_eq!(state.offset(), 100.0);
        assert_eq!(state.current_value(), Side::B);
        assert!(!state.is_animation_running());
    }

    #[test]
    fn test_update_anchors_with_equal_set_is_noop() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        state.dispatch_raw_delta(30.0);
        let reordered: AnchorSet<Side> = [(Side::B, 100.0), (Side::A, 0.0)].into_iter().collect();

        assert!(!state.update_anchors(reordered, Some(Side::B)));
        assert_eq!(state.offset(), 30.0);
        assert_eq!(state.current_value(), Side::A);
    }

    #[test]
    fn test_update_anchors_defaults_to_closest_anchor() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        state.dispatch_raw_delta(70.0);
        let resized = AnchorSet::builder().at(Side::A, 0.0).at(Side::B, 80.0).build();

        assert!(state.update_anchors(resized, None));
        assert_eq!(state.offset(), 80.0);
        assert_eq!(state.current_value(), Side::B);
    }

    #[test]
    fn test_dispatch_raw_delta_clamps_and_reports_consumed() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        assert_eq!(state.dispatch_raw_delta(40.0), 40.0);
        assert_eq!(state.dispatch_raw_delta(100.0), 60.0);
        assert_eq!(state.offset(), 100.0);
        assert_eq!(state.dispatch_raw_delta(-250.0), -100.0);
        assert_eq!(state.offset(), 0.0);
        // Raw deltas never settle the value
        assert_eq!(state.current_value(), Side::A);
    }

    #[test]
    fn test_nan_delta_is_ignored() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        state.dispatch_raw_delta(30.0);
        assert_eq!(state.dispatch_raw_delta(f32::NAN), 0.0);
        assert_eq!(state.require_offset(), Ok(30.0));
        assert_eq!(state.new_offset_for_delta(f32::NAN), 30.0);
    }

    #[test]
    fn test_target_and_closest_values_follow_offset() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        state.dispatch_raw_delta(5.0);
        assert_eq!(state.target_value(), Side::A);
        assert_eq!(state.closest_value(), Side::B);
        state.dispatch_raw_delta(10.0);
        assert_eq!(state.target_value(), Side::B);
    }

    #[test]
    fn test_progress_between_anchors() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        assert_eq!(state.progress(), Ok(1.0));
        state.dispatch_raw_delta(25.0);
        assert_eq!(state.progress(), Ok(0.25));
        state.dispatch_raw_delta(75.0);
        assert_eq!(state.progress(), Ok(1.0));
    }

    #[test]
    fn test_snapshot_restores_current_value() {
        let state = AnchoredDraggableState::with_anchors(Side::B, anchors(), config());
        let restored = AnchoredDraggableState::from_snapshot(state.snapshot(), config());
        assert_eq!(restored.current_value(), Side::B);
        assert!(restored.offset().is_nan());
    }

    /// Threshold closures that read the state they belong to
    fn reentrant_state() -> AnchoredDraggableState<Side> {
        let cell: Arc<std::sync::OnceLock<AnchoredDraggableState<Side>>> = Arc::default();
        let positional = Arc::clone(&cell);
        let velocity = Arc::clone(&cell);
        let config = DragConfig::new()
            .positional_threshold(move |_| {
                positional.get().map_or(10.0, |state| state.offset().min(10.0))
            })
            .velocity_threshold(move || {
                velocity
                    .get()
                    .map_or(1000.0, |state| if state.offset() > 50.0 { 500.0 } else { 1000.0 })
            });
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config);
        let _ = cell.set(state.clone());
        state
    }

    #[tokio::test(start_paused = true)]
    async fn test_threshold_closures_may_read_state() {
        let state = reentrant_state();
        state.dispatch_raw_delta(30.0);
        assert_eq!(state.target_value(), Side::B);

        // No closest anchor, so the target falls back to the threshold decision
        assert!(state.update_anchors(AnchorSet::new(), None));
        assert_eq!(state.current_value(), Side::B);
        assert!(state.update_anchors(anchors(), None));

        state.dispatch_raw_delta(30.0);
        state.settle(0.0).await.unwrap();
        assert_eq!(state.current_value(), Side::B);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_requires_offset() {
        let state = AnchoredDraggableState::new(Side::A, config());
        assert_eq!(state.settle(0.0).await, Err(DragError::OffsetUninitialized));
    }

    #[tokio::test(start_paused = true)]
    async fn test_snap_to_missing_anchor_sets_value() {
        let single = AnchorSet::builder().at(Side::A, 0.0).build();
        let state = AnchoredDraggableState::with_anchors(Side::A, single, config());
        state.snap_to(Side::B).await;
        assert_eq!(state.current_value(), Side::B);
        assert_eq!(state.offset(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_to_clears_target_when_done() {
        let state = AnchoredDraggableState::with_anchors(Side::A, anchors(), config());
        state.animate_to(Side::B).await;
        assert_eq!(state.offset(), 100.0);
        assert_eq!(state.current_value(), Side::B);
        assert!(!state.is_animation_running());
    }
}
