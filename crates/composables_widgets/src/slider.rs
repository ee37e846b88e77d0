//! Slider state
//!
//! Sliders map a pixel position along their track to a value in a range,
//! optionally snapping to evenly spaced ticks. Pointer drags are serialized
//! through a [`DragMutex`] so a tap-to-seek and a drag never fight over the
//! thumb.
//!
//! The track runs from half a thumb width in from the start to half a thumb
//! width in from the end, so the thumb never leaves the widget.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use composables_anchored::{DragMutex, MutatePriority};

use crate::config::SliderConfig;

/// Callback receiving a new slider value
pub type ValueCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Callback receiving a new range slider range
pub type RangeCallback = Arc<dyn Fn(SliderRange) + Send + Sync>;

/// Callback invoked once a value change gesture ends
pub type FinishedCallback = Arc<dyn Fn() + Send + Sync>;

/// Tick positions as fractions of the track, none for a continuous slider
pub fn steps_to_tick_fractions(steps: u32) -> Vec<f32> {
    if steps == 0 {
        return Vec::new();
    }
    (0..steps + 2)
        .map(|i| i as f32 / (steps + 1) as f32)
        .collect()
}

/// Snap `current` to the closest tick between `min` and `max`
pub fn snap_value_to_tick(current: f32, tick_fractions: &[f32], min: f32, max: f32) -> f32 {
    tick_fractions
        .iter()
        .map(|fraction| lerp(min, max, *fraction))
        .min_by(|a, b| (a - current).abs().total_cmp(&(b - current).abs()))
        .unwrap_or(current)
}

/// The 0..1 fraction `pos` represents between `a` and `b`
pub fn calc_fraction(a: f32, b: f32, pos: f32) -> f32 {
    let fraction = if b - a == 0.0 { 0.0 } else { (pos - a) / (b - a) };
    fraction.clamp(0.0, 1.0)
}

/// Scale `x` from the `a1..b1` range into the `a2..b2` range
pub fn scale(a1: f32, b1: f32, x: f32, a2: f32, b2: f32) -> f32 {
    lerp(a2, b2, calc_fraction(a1, b1, x))
}

fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    (1.0 - fraction) * start + fraction * stop
}

fn coerce_in(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Start and end of a range slider's active range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub start: f32,
    pub end: f32,
}

impl SliderRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

struct Callbacks<C> {
    on_value_change: Option<C>,
    on_value_change_finished: Option<FinishedCallback>,
}

impl<C> Default for Callbacks<C> {
    fn default() -> Self {
        Self {
            on_value_change: None,
            on_value_change_finished: None,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct SliderFields {
    value: f32,
    raw_offset: f32,
    press_offset: f32,
    total_width: f32,
    thumb_width: f32,
    track_height: f32,
    is_rtl: bool,
    is_dragging: bool,
    /// Id of the most recently started drag
    latest_drag: u64,
}

struct SliderShared {
    fields: Mutex<SliderFields>,
    callbacks: Mutex<Callbacks<ValueCallback>>,
    steps: u32,
    range_start: f32,
    range_end: f32,
    tick_fractions: Vec<f32>,
    mutex: DragMutex,
}

/// State of a single-thumb slider
///
/// Cloning gives another handle to the same slider.
#[derive(Clone)]
pub struct SliderState {
    shared: Arc<SliderShared>,
}

impl SliderState {
    pub fn new(value: f32, config: &SliderConfig) -> Self {
        let tick_fractions = steps_to_tick_fractions(config.steps);
        let value = snap_value_to_tick(
            coerce_in(value, config.range_start, config.range_end),
            &tick_fractions,
            config.range_start,
            config.range_end,
        );
        Self {
            shared: Arc::new(SliderShared {
                fields: Mutex::new(SliderFields {
                    value,
                    raw_offset: 0.0,
                    press_offset: 0.0,
                    total_width: 0.0,
                    thumb_width: 0.0,
                    track_height: 0.0,
                    is_rtl: false,
                    is_dragging: false,
                    latest_drag: 0,
                }),
                callbacks: Mutex::new(Callbacks::default()),
                steps: config.steps,
                range_start: config.range_start,
                range_end: config.range_end,
                tick_fractions,
                mutex: DragMutex::new(),
            }),
        }
    }

    /// Report values produced by gestures to `callback` instead of storing them
    pub fn on_value_change<F: Fn(f32) + Send + Sync + 'static>(self, callback: F) -> Self {
        lock(&self.shared.callbacks).on_value_change = Some(Arc::new(callback));
        self
    }

    pub fn on_value_change_finished<F: Fn() + Send + Sync + 'static>(self, callback: F) -> Self {
        lock(&self.shared.callbacks).on_value_change_finished = Some(Arc::new(callback));
        self
    }

    pub fn value(&self) -> f32 {
        self.fields().value
    }

    /// Store `value`, coerced into the range and snapped to the nearest tick
    pub fn set_value(&self, value: f32) {
        let shared = &self.shared;
        let snapped = snap_value_to_tick(
            coerce_in(value, shared.range_start, shared.range_end),
            &shared.tick_fractions,
            shared.range_start,
            shared.range_end,
        );
        self.fields().value = snapped;
    }

    pub fn steps(&self) -> u32 {
        self.shared.steps
    }

    pub fn value_range(&self) -> (f32, f32) {
        (self.shared.range_start, self.shared.range_end)
    }

    pub fn tick_fractions(&self) -> &[f32] {
        &self.shared.tick_fractions
    }

    pub fn is_dragging(&self) -> bool {
        self.fields().is_dragging
    }

    pub fn track_height(&self) -> f32 {
        self.fields().track_height
    }

    pub fn set_rtl(&self, is_rtl: bool) {
        self.fields().is_rtl = is_rtl;
    }

    pub fn set_thumb_width(&self, thumb_width: f32) {
        self.fields().thumb_width = thumb_width;
    }

    /// Apply the measured track height and total widget width
    pub fn update_dimensions(&self, track_height: f32, total_width: f32) {
        let mut fields = self.fields();
        fields.track_height = track_height;
        fields.total_width = total_width;
    }

    /// The value as a 0..1 fraction of the range
    pub fn coerced_value_as_fraction(&self) -> f32 {
        let (start, end) = self.value_range();
        calc_fraction(start, end, coerce_in(self.value(), start, end))
    }

    /// Record a press at `x`, which the next delta jumps the thumb to
    pub fn on_press(&self, x: f32) {
        let mut fields = self.fields();
        let to = if fields.is_rtl {
            fields.total_width - x
        } else {
            x
        };
        fields.press_offset = to - fields.raw_offset;
    }

    /// Move the thumb by `delta` pixels
    pub fn dispatch_raw_delta(&self, delta: f32) {
        let shared = &self.shared;
        let (value, current) = {
            let mut fields = self.fields();
            let max_px = (fields.total_width - fields.thumb_width / 2.0).max(0.0);
            let min_px = (fields.thumb_width / 2.0).min(max_px);
            fields.raw_offset += delta + fields.press_offset;
            fields.press_offset = 0.0;
            let offset = snap_value_to_tick(fields.raw_offset, &shared.tick_fractions, min_px, max_px);
            let value = scale(min_px, max_px, offset, shared.range_start, shared.range_end);
            (value, fields.value)
        };
        if value == current {
            return;
        }

        let callback = lock(&shared.callbacks).on_value_change.clone();
        match callback {
            Some(on_value_change) => on_value_change(value),
            None => self.set_value(value),
        }
    }

    /// Run a drag of the thumb with exclusive access
    ///
    /// Returns `false` if a newer drag took over before `block` finished.
    pub async fn drag<F, Fut>(&self, priority: MutatePriority, block: F) -> bool
    where
        F: FnOnce(SliderDragScope) -> Fut,
        Fut: Future<Output = ()>,
    {
        let _dragging = DraggingGuard::new(self);
        let scope = SliderDragScope {
            state: self.clone(),
        };
        let outcome = self.shared.mutex.mutate(priority, || block(scope)).await;
        if outcome.is_err() {
            tracing::debug!(?priority, "slider drag superseded");
        }
        outcome.is_ok()
    }

    /// End of a tap or drag gesture
    pub fn gesture_end(&self) {
        // A drag still in flight reports when it ends
        if self.is_dragging() {
            return;
        }
        let finished = lock(&self.shared.callbacks).on_value_change_finished.clone();
        if let Some(finished) = finished {
            finished();
        }
    }

    fn fields(&self) -> MutexGuard<'_, SliderFields> {
        lock(&self.shared.fields)
    }
}

impl fmt::Debug for SliderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderState")
            .field("value", &self.value())
            .field("steps", &self.shared.steps)
            .field("value_range", &self.value_range())
            .finish_non_exhaustive()
    }
}

/// Marks a slider as dragging until the drag it belongs to ends
///
/// A drag superseded by a newer one leaves the flag to the newer drag.
struct DraggingGuard<'a> {
    state: &'a SliderState,
    id: u64,
}

impl<'a> DraggingGuard<'a> {
    fn new(state: &'a SliderState) -> Self {
        let mut fields = state.fields();
        fields.latest_drag += 1;
        fields.is_dragging = true;
        let id = fields.latest_drag;
        drop(fields);
        Self { state, id }
    }
}

impl Drop for DraggingGuard<'_> {
    fn drop(&mut self) {
        let mut fields = self.state.fields();
        if fields.latest_drag == self.id {
            fields.is_dragging = false;
        }
    }
}

/// Handle given to slider drag blocks
#[derive(Clone, Debug)]
pub struct SliderDragScope {
    state: SliderState,
}

impl SliderDragScope {
    pub fn drag_by(&self, pixels: f32) {
        self.state.dispatch_raw_delta(pixels);
    }
}

struct RangeFields {
    start: f32,
    end: f32,
    raw_offset_start: f32,
    raw_offset_end: f32,
    total_width: f32,
    start_thumb_width: f32,
    end_thumb_width: f32,
    track_height: f32,
    is_rtl: bool,
    min_px: f32,
    max_px: f32,
}

/// State of a two-thumb range slider
pub struct RangeSliderState {
    fields: Mutex<RangeFields>,
    callbacks: Mutex<Callbacks<RangeCallback>>,
    steps: u32,
    range_start: f32,
    range_end: f32,
    tick_fractions: Vec<f32>,
}

impl RangeSliderState {
    pub fn new(active_range_start: f32, active_range_end: f32, config: &SliderConfig) -> Self {
        let state = Self {
            fields: Mutex::new(RangeFields {
                start: config.range_start,
                end: config.range_end,
                raw_offset_start: 0.0,
                raw_offset_end: 0.0,
                total_width: 0.0,
                start_thumb_width: 0.0,
                end_thumb_width: 0.0,
                track_height: 0.0,
                is_rtl: false,
                min_px: 0.0,
                max_px: 0.0,
            }),
            callbacks: Mutex::new(Callbacks::default()),
            steps: config.steps,
            range_start: config.range_start,
            range_end: config.range_end,
            tick_fractions: steps_to_tick_fractions(config.steps),
        };
        state.set_active_range_end(active_range_end);
        state.set_active_range_start(active_range_start);
        state
    }

    pub fn on_value_change<F: Fn(SliderRange) + Send + Sync + 'static>(self, callback: F) -> Self {
        lock(&self.callbacks).on_value_change = Some(Arc::new(callback));
        self
    }

    pub fn on_value_change_finished<F: Fn() + Send + Sync + 'static>(self, callback: F) -> Self {
        lock(&self.callbacks).on_value_change_finished = Some(Arc::new(callback));
        self
    }

    pub fn active_range_start(&self) -> f32 {
        self.fields().start
    }

    pub fn active_range_end(&self) -> f32 {
        self.fields().end
    }

    pub fn active_range(&self) -> SliderRange {
        let fields = self.fields();
        SliderRange::new(fields.start, fields.end)
    }

    /// Store a new start, kept at or below the end and snapped to a tick
    pub fn set_active_range_start(&self, value: f32) {
        let mut fields = self.fields();
        let coerced = coerce_in(value, self.range_start, fields.end);
        fields.start =
            snap_value_to_tick(coerced, &self.tick_fractions, self.range_start, self.range_end);
    }

    /// Store a new end, kept at or above the start and snapped to a tick
    pub fn set_active_range_end(&self, value: f32) {
        let mut fields = self.fields();
        let coerced = coerce_in(value, fields.start, self.range_end);
        fields.end =
            snap_value_to_tick(coerced, &self.tick_fractions, self.range_start, self.range_end);
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn track_height(&self) -> f32 {
        self.fields().track_height
    }

    pub fn is_rtl(&self) -> bool {
        self.fields().is_rtl
    }

    pub fn set_rtl(&self, is_rtl: bool) {
        self.fields().is_rtl = is_rtl;
    }

    /// Pixel offsets of both thumbs along the track
    pub fn raw_offsets(&self) -> (f32, f32) {
        let fields = self.fields();
        (fields.raw_offset_start, fields.raw_offset_end)
    }

    /// Apply measured sizes and recompute the track bounds
    pub fn update_dimensions(
        &self,
        track_height: f32,
        start_thumb_width: f32,
        end_thumb_width: f32,
        total_width: f32,
    ) {
        {
            let mut fields = self.fields();
            fields.track_height = track_height;
            fields.start_thumb_width = start_thumb_width;
            fields.end_thumb_width = end_thumb_width;
            fields.total_width = total_width;
        }
        self.update_min_max_px();
    }

    /// Recompute the track bounds, moving both thumbs onto their values
    pub fn update_min_max_px(&self) {
        let mut fields = self.fields();
        let max_px = (fields.total_width - fields.end_thumb_width / 2.0).max(0.0);
        let min_px = (fields.start_thumb_width / 2.0).min(max_px);
        if fields.min_px != min_px || fields.max_px != max_px {
            fields.min_px = min_px;
            fields.max_px = max_px;
            fields.raw_offset_start = self.scale_to_offset(min_px, max_px, fields.start);
            fields.raw_offset_end = self.scale_to_offset(min_px, max_px, fields.end);
        }
    }

    /// Move one thumb by `delta` pixels, never past the other one
    pub fn on_drag(&self, is_start: bool, delta: f32) {
        let (range, current) = {
            let mut fields = self.fields();
            let (min_px, max_px) = (fields.min_px, fields.max_px);
            let offsets = if is_start {
                fields.raw_offset_start += delta;
                fields.raw_offset_end = self.scale_to_offset(min_px, max_px, fields.end);
                let end = fields.raw_offset_end;
                let start = coerce_in(fields.raw_offset_start, min_px, end);
                let start = snap_value_to_tick(start, &self.tick_fractions, min_px, max_px);
                SliderRange::new(start, end)
            } else {
                fields.raw_offset_end += delta;
                fields.raw_offset_start = self.scale_to_offset(min_px, max_px, fields.start);
                let start = fields.raw_offset_start;
                let end = coerce_in(fields.raw_offset_end, start, max_px);
                let end = snap_value_to_tick(end, &self.tick_fractions, min_px, max_px);
                SliderRange::new(start, end)
            };
            let range = SliderRange::new(
                scale(min_px, max_px, offsets.start, self.range_start, self.range_end),
                scale(min_px, max_px, offsets.end, self.range_start, self.range_end),
            );
            (range, SliderRange::new(fields.start, fields.end))
        };
        if range == current {
            return;
        }

        let callback = lock(&self.callbacks).on_value_change.clone();
        match callback {
            Some(on_value_change) => on_value_change(range),
            None => {
                self.set_active_range_start(range.start);
                self.set_active_range_end(range.end);
            }
        }
    }

    /// End of a gesture on either thumb
    pub fn gesture_end(&self) {
        let finished = lock(&self.callbacks).on_value_change_finished.clone();
        if let Some(finished) = finished {
            finished();
        }
    }

    pub fn coerced_active_range_start_as_fraction(&self) -> f32 {
        calc_fraction(self.range_start, self.range_end, self.active_range_start())
    }

    pub fn coerced_active_range_end_as_fraction(&self) -> f32 {
        calc_fraction(self.range_start, self.range_end, self.active_range_end())
    }

    /// Ticks the start thumb can reach, bounded by the end thumb
    pub fn start_steps(&self) -> u32 {
        (self.steps as f32 * self.coerced_active_range_end_as_fraction()).floor() as u32
    }

    /// Ticks the end thumb can reach, bounded by the start thumb
    pub fn end_steps(&self) -> u32 {
        (self.steps as f32 * (1.0 - self.coerced_active_range_start_as_fraction())).floor() as u32
    }

    fn scale_to_offset(&self, min_px: f32, max_px: f32, value: f32) -> f32 {
        scale(self.range_start, self.range_end, value, min_px, max_px)
    }

    fn fields(&self) -> MutexGuard<'_, RangeFields> {
        lock(&self.fields)
    }
}

impl fmt::Debug for RangeSliderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSliderState")
            .field("active_range", &self.active_range())
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tick_fractions() {
        assert!(steps_to_tick_fractions(0).is_empty());
        assert_eq!(steps_to_tick_fractions(3), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_snap_value_to_tick() {
        let ticks = steps_to_tick_fractions(3);
        assert_eq!(snap_value_to_tick(0.3, &ticks, 0.0, 1.0), 0.25);
        assert_eq!(snap_value_to_tick(90.0, &ticks, 0.0, 100.0), 100.0);
        // Continuous sliders pass values through
        assert_eq!(snap_value_to_tick(0.3, &[], 0.0, 1.0), 0.3);
    }

    #[test]
    fn test_calc_fraction_and_scale() {
        assert_eq!(calc_fraction(0.0, 200.0, 50.0), 0.25);
        assert_eq!(calc_fraction(10.0, 10.0, 50.0), 0.0);
        assert_eq!(calc_fraction(0.0, 1.0, 4.0), 1.0);
        assert_eq!(calc_fraction(0.0, 1.0, -4.0), 0.0);
        assert_eq!(scale(0.0, 200.0, 50.0, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_set_value_coerces_and_snaps() {
        let slider = SliderState::new(0.0, &SliderConfig::new(0.0, 100.0).with_steps(4));
        slider.set_value(130.0);
        assert_eq!(slider.value(), 100.0);
        slider.set_value(33.0);
        assert_close(slider.value(), 40.0);
        assert_close(slider.coerced_value_as_fraction(), 0.4);
    }

    #[test]
    fn test_press_then_drag_moves_value() {
        let slider = SliderState::new(0.0, &SliderConfig::default());
        slider.set_thumb_width(20.0);
        slider.update_dimensions(4.0, 200.0);

        // Track spans 10..190
        slider.on_press(100.0);
        slider.dispatch_raw_delta(0.0);
        assert_eq!(slider.value(), 0.5);

        slider.dispatch_raw_delta(45.0);
        assert_eq!(slider.value(), 0.75);

        slider.dispatch_raw_delta(1000.0);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_press_is_mirrored_for_rtl() {
        let slider = SliderState::new(0.0, &SliderConfig::default());
        slider.set_thumb_width(20.0);
        slider.update_dimensions(4.0, 200.0);
        slider.set_rtl(true);

        slider.on_press(55.0);
        slider.dispatch_raw_delta(0.0);
        assert_eq!(slider.value(), 0.75);
    }

    #[test]
    fn test_value_change_callback_replaces_store() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reported);
        let slider = SliderState::new(0.0, &SliderConfig::default())
            .on_value_change(move |value| sink.lock().unwrap().push(value));
        slider.set_thumb_width(20.0);
        slider.update_dimensions(4.0, 200.0);

        slider.on_press(100.0);
        slider.dispatch_raw_delta(0.0);
        assert_eq!(*reported.lock().unwrap(), vec![0.5]);
        assert_eq!(slider.value(), 0.0);
    }

    #[tokio::test]
    async fn test_drag_marks_dragging_and_defers_finish() {
        let finished = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&finished);
        let slider = SliderState::new(0.0, &SliderConfig::default())
            .on_value_change_finished(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        slider.set_thumb_width(20.0);
        slider.update_dimensions(4.0, 200.0);
        slider.on_press(10.0);

        let completed = slider
            .drag(MutatePriority::UserInput, |scope| async move {
                assert!(scope.state.is_dragging());
                scope.drag_by(90.0);
                scope.state.gesture_end();
            })
            .await;

        assert!(completed);
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 0.5);
        assert_eq!(finished.load(Ordering::SeqCst), 0);

        slider.gesture_end();
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_drag_keeps_newer_drag_marked() {
        let finished = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&finished);
        let slider = SliderState::new(0.0, &SliderConfig::default())
            .on_value_change_finished(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });

        let first = slider.drag(MutatePriority::UserInput, |_| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            slider
                .drag(MutatePriority::UserInput, |scope| async move {
                    // Give the first drag time to unwind
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    assert!(scope.state.is_dragging());
                    scope.state.gesture_end();
                })
                .await
        };

        let (first_completed, second_completed) = tokio::join!(first, second);
        assert!(!first_completed);
        assert!(second_completed);
        assert_eq!(finished.load(Ordering::SeqCst), 0);
        assert!(!slider.is_dragging());

        slider.gesture_end();
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    fn range_slider(start: f32, end: f32, steps: u32) -> RangeSliderState {
        let state = RangeSliderState::new(start, end, &SliderConfig::new(0.0, 100.0).with_steps(steps));
        // Track spans 10..210
        state.update_dimensions(4.0, 20.0, 20.0, 220.0);
        state
    }

    #[test]
    fn test_range_initial_offsets() {
        let state = range_slider(20.0, 80.0, 0);
        let (start, end) = state.raw_offsets();
        assert_close(start, 50.0);
        assert_close(end, 170.0);
    }

    #[test]
    fn test_range_start_never_passes_end() {
        let state = range_slider(20.0, 80.0, 0);
        state.on_drag(true, 200.0);
        assert_close(state.active_range_start(), 80.0);
        assert_close(state.active_range_end(), 80.0);

        state.on_drag(false, 1000.0);
        assert_close(state.active_range_end(), 100.0);
        assert_close(state.active_range_start(), 80.0);
    }

    #[test]
    fn test_range_drag_snaps_to_ticks() {
        let state = range_slider(0.0, 100.0, 3);
        state.on_drag(false, -60.0);
        // End at 150px is 70 on the range, the closest tick is 75
        assert_close(state.active_range_end(), 75.0);
        assert_eq!(state.active_range_start(), 0.0);
    }

    #[test]
    fn test_range_setters_clamp_against_each_other() {
        let state = range_slider(30.0, 60.0, 0);
        state.set_active_range_start(90.0);
        assert_eq!(state.active_range_start(), 60.0);
        state.set_active_range_end(10.0);
        assert_eq!(state.active_range_end(), 60.0);
    }

    #[test]
    fn test_range_steps() {
        let state = range_slider(25.0, 75.0, 3);
        assert_eq!(state.start_steps(), 2);
        assert_eq!(state.end_steps(), 2);
    }
}
