//! Widget configuration checks
//!
//! Catches configurations that parse fine but leave a widget unusable.

use std::cmp::Ordering;

use composables_animation::AnimationSpec;
use composables_widgets::{SheetConfig, SliderConfig, WidgetsConfig};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl Issue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

pub fn validate(config: &WidgetsConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    validate_sheet(&config.sheet, &mut issues);
    validate_slider(&config.slider, &mut issues);
    issues
}

fn validate_sheet(sheet: &SheetConfig, issues: &mut Vec<Issue>) {
    if sheet.positional_threshold.is_nan() || sheet.positional_threshold < 0.0 {
        issues.push(Issue::error(
            "sheet.positional_threshold",
            format!("must be a non-negative distance, got {}", sheet.positional_threshold),
        ));
    }
    if !is_positive(sheet.velocity_threshold) {
        issues.push(Issue::error(
            "sheet.velocity_threshold",
            format!("must be a positive speed, got {}", sheet.velocity_threshold),
        ));
    }
    if sheet.skip_hidden_state && sheet.skip_partially_expanded {
        issues.push(Issue::warning(
            "sheet",
            "skipping both hidden and partially expanded leaves the sheet a single resting state",
        ));
    }

    for (field, spec) in [
        ("sheet.animation", &sheet.animation),
        ("sheet.show_animation", &sheet.show_animation),
        ("sheet.hide_animation", &sheet.hide_animation),
    ] {
        validate_animation(field, spec, issues);
    }
}

fn validate_animation(field: &'static str, spec: &AnimationSpec, issues: &mut Vec<Issue>) {
    match spec {
        AnimationSpec::Spring(spring) => {
            if !is_positive(spring.stiffness) || !is_positive(spring.mass) {
                issues.push(Issue::error(
                    field,
                    "spring stiffness and mass must be positive",
                ));
            }
            if spring.damping < 0.0 {
                issues.push(Issue::error(field, "spring damping must not be negative"));
            }
        }
        AnimationSpec::Tween { duration_ms: 0, .. } => {
            issues.push(Issue::warning(
                field,
                "a zero length tween behaves like `type = \"snap\"`",
            ));
        }
        AnimationSpec::Tween { .. } | AnimationSpec::Snap => {}
    }
}

/// False for NaN as well as for zero and below
fn is_positive(value: f32) -> bool {
    value.partial_cmp(&0.0) == Some(Ordering::Greater)
}

fn validate_slider(slider: &SliderConfig, issues: &mut Vec<Issue>) {
    if slider.range_end.partial_cmp(&slider.range_start) != Some(Ordering::Greater) {
        issues.push(Issue::error(
            "slider",
            format!(
                "range_end ({}) must be greater than range_start ({})",
                slider.range_end, slider.range_start
            ),
        ));
    }
}
