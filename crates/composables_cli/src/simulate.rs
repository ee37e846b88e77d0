//! Scripted gestures against widget state
//!
//! Runs a sheet or slider through a layout, a drag and a release, recording
//! where it ends up after every step.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use composables_anchored::MutatePriority;
use composables_widgets::{SheetConfig, SheetState, SheetValue, SliderConfig, SliderState};
use serde::Serialize;
use tracing::debug;

/// Geometry and gesture for a sheet run
#[derive(Clone, Copy, Debug)]
pub struct SheetScenario {
    pub sheet_height: f32,
    pub container_height: f32,
    /// Pixels dragged after the sheet opened, positive towards hidden
    pub drag: f32,
    /// Release velocity in pixels per second, positive towards hidden
    pub velocity: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SheetStep {
    pub action: &'static str,
    pub value: SheetValue,
    pub offset: Option<f32>,
    pub progress: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SheetReport {
    pub steps: Vec<SheetStep>,
    pub dismissed: bool,
}

pub async fn simulate_sheet(config: SheetConfig, scenario: SheetScenario) -> Result<SheetReport> {
    let initial = if config.skip_hidden_state {
        SheetValue::Expanded
    } else {
        SheetValue::Hidden
    };
    let sheet = SheetState::new(config, initial)?;
    let mut steps = Vec::new();

    sheet.on_layout(scenario.sheet_height, scenario.container_height);
    steps.push(step("layout", &sheet));

    sheet.show().await;
    steps.push(step("show", &sheet));

    let drag = scenario.drag;
    sheet
        .drag(move |scope| async move {
            scope.drag_by(drag);
        })
        .await;
    steps.push(step("drag", &sheet));

    let dismissed = sheet.settle_to_dismiss(scenario.velocity).await?;
    steps.push(step("release", &sheet));
    debug!(dismissed, value = ?sheet.current_value(), "sheet run finished");

    Ok(SheetReport { steps, dismissed })
}

fn step(action: &'static str, sheet: &SheetState) -> SheetStep {
    SheetStep {
        action,
        value: sheet.current_value(),
        offset: sheet.require_offset().ok(),
        progress: sheet.calculate_sheet_progress(),
    }
}

/// Geometry and gesture for a slider run
#[derive(Clone, Copy, Debug)]
pub struct SliderScenario {
    pub width: f32,
    pub thumb_width: f32,
    /// Where the pointer went down, from the start edge
    pub press: f32,
    /// Pixels dragged after the press
    pub drag: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderReport {
    pub pressed_value: f32,
    pub value: f32,
    pub fraction: f32,
    pub finished_callbacks: usize,
}

pub async fn simulate_slider(config: &SliderConfig, scenario: SliderScenario) -> SliderReport {
    let finished = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&finished);
    let slider = SliderState::new(config.range_start, config).on_value_change_finished(move || {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    slider.set_thumb_width(scenario.thumb_width);
    slider.update_dimensions(0.0, scenario.width);

    slider.on_press(scenario.press);
    slider.dispatch_raw_delta(0.0);
    let pressed_value = slider.value();

    let drag = scenario.drag;
    slider
        .drag(MutatePriority::UserInput, move |scope| async move {
            scope.drag_by(drag);
        })
        .await;
    slider.gesture_end();

    SliderReport {
        pressed_value,
        value: slider.value(),
        fraction: slider.coerced_value_as_fraction(),
        finished_callbacks: finished.load(Ordering::Relaxed),
    }
}
