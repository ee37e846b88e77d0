use composables_widgets::{
    ScrollSource, SheetConfig, SheetError, SheetState, SheetValue, WidgetsConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            "composables_widgets=trace,composables_anchored=debug",
        ))
        .with_test_writer()
        .try_init();
}

/// Sheet laid out with expanded at 200, partially expanded at 400 and hidden at 800
fn tall_sheet(initial: SheetValue) -> SheetState {
    init_tracing();
    let sheet = SheetState::new(SheetConfig::default(), initial).unwrap();
    sheet.on_layout(600.0, 800.0);
    sheet
}

/// Sheet laid out with expanded at 500 and hidden at 800
fn short_sheet(config: SheetConfig, initial: SheetValue) -> SheetState {
    init_tracing();
    let sheet = SheetState::new(config, initial).unwrap();
    sheet.on_layout(300.0, 800.0);
    sheet
}

#[tokio::test(start_paused = true)]
async fn show_expand_then_dismiss_in_two_steps() {
    let sheet = tall_sheet(SheetValue::Hidden);
    assert_eq!(sheet.offset(), 800.0);

    sheet.show().await;
    assert_eq!(sheet.current_value(), SheetValue::PartiallyExpanded);
    assert_eq!(sheet.offset(), 400.0);

    sheet.expand().await;
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 200.0);
    assert_eq!(sheet.calculate_sheet_progress(), 1.0);

    // Back from expanded steps down to partially expanded first
    assert_eq!(sheet.handle_dismiss_request().await, Ok(false));
    assert_eq!(sheet.current_value(), SheetValue::PartiallyExpanded);

    assert_eq!(sheet.handle_dismiss_request().await, Ok(true));
    assert_eq!(sheet.current_value(), SheetValue::Hidden);
    assert!(!sheet.is_visible());
    assert!(!sheet.is_animation_running());
}

#[tokio::test(start_paused = true)]
async fn show_without_partial_state_expands() {
    let sheet = short_sheet(SheetConfig::default(), SheetValue::Hidden);

    assert_eq!(sheet.toggle().await, Ok(false));
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 500.0);

    assert_eq!(sheet.toggle().await, Ok(true));
    assert_eq!(sheet.current_value(), SheetValue::Hidden);
}

#[tokio::test(start_paused = true)]
async fn skipped_states_are_rejected() {
    let config = SheetConfig {
        skip_hidden_state: true,
        skip_partially_expanded: true,
        ..SheetConfig::default()
    };
    let sheet = short_sheet(config, SheetValue::Expanded);

    assert_eq!(sheet.hide().await, Err(SheetError::HideSkipped));
    assert_eq!(
        sheet.partial_expand().await,
        Err(SheetError::PartialExpandSkipped)
    );
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 500.0);
}

#[tokio::test(start_paused = true)]
async fn vetoed_dismissal_keeps_sheet_open() {
    init_tracing();
    let sheet = SheetState::with_confirm_value_change(
        SheetConfig::default(),
        SheetValue::Expanded,
        |value| *value != SheetValue::Hidden,
    )
    .unwrap();
    sheet.on_layout(300.0, 800.0);

    assert_eq!(sheet.animate_to_dismiss().await, Ok(false));
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 500.0);
}

#[tokio::test(start_paused = true)]
async fn drag_past_threshold_dismisses() {
    let sheet = short_sheet(SheetConfig::default(), SheetValue::Expanded);

    sheet
        .drag(|scope| async move {
            scope.drag_by(150.0);
        })
        .await;
    assert_eq!(sheet.offset(), 650.0);
    assert_eq!(sheet.current_value(), SheetValue::Expanded);

    assert_eq!(sheet.settle_to_dismiss(0.0).await, Ok(true));
    assert_eq!(sheet.offset(), 800.0);
}

#[tokio::test(start_paused = true)]
async fn short_drag_springs_back() {
    let sheet = short_sheet(SheetConfig::default(), SheetValue::Expanded);
    let scroll = sheet.nested_scroll();

    scroll.on_post_scroll(30.0, ScrollSource::UserInput);
    assert_eq!(sheet.offset(), 530.0);

    assert_eq!(sheet.settle_to_dismiss(0.0).await, Ok(false));
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 500.0);
}

#[tokio::test(start_paused = true)]
async fn sheet_restores_from_snapshot() {
    let sheet = tall_sheet(SheetValue::Hidden);
    sheet.snap_to(SheetValue::Expanded).await;

    let restored = SheetState::from_snapshot(SheetConfig::default(), sheet.snapshot()).unwrap();
    restored.on_layout(600.0, 800.0);
    // Open sheets come back partially expanded when they can
    assert_eq!(restored.current_value(), SheetValue::PartiallyExpanded);
}

#[tokio::test(start_paused = true)]
async fn sheet_from_config_file() {
    init_tracing();
    let path = std::env::temp_dir().join(format!("widgets-{}.toml", std::process::id()));

    let mut config = WidgetsConfig::default();
    config.sheet.skip_partially_expanded = true;
    config.save(&path).unwrap();
    let loaded = WidgetsConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);

    let sheet = SheetState::new(loaded.sheet, SheetValue::Hidden).unwrap();
    sheet.on_layout(600.0, 800.0);
    assert!(!sheet.has_partially_expanded_state());

    sheet.show().await;
    assert_eq!(sheet.current_value(), SheetValue::Expanded);
    assert_eq!(sheet.offset(), 200.0);
}
