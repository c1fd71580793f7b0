// Directive store behaviour tests
//
// Range laws for the four checked fields, the replace-not-merge error map,
// and the session scenarios the form relies on.

use directive_tuner::directive::{
    apply, apply_with, Action, ActionKind, ActionRecord, DirectiveBundle, DirectiveConfig,
    DirectiveStore, ErrorPolicy, FieldUpdate, FitMethod, OutputFormat, RangedField, StoreOptions,
};
use rstest::rstest;

fn ranged_action(field: RangedField, value: f64) -> Action {
    match field {
        RangedField::Rotate => Action::rotate(value),
        RangedField::Compression => Action::compression(value),
        RangedField::Sharpness => Action::sharpness(value),
        RangedField::ScaleToScreenWidth => Action::scale_to_screen_width(value),
    }
}

#[rstest]
#[case(RangedField::Rotate, -360.0)]
#[case(RangedField::Rotate, -1.0)]
#[case(RangedField::Rotate, 0.0)]
#[case(RangedField::Rotate, 180.0)]
#[case(RangedField::Rotate, 360.0)]
#[case(RangedField::ScaleToScreenWidth, -360.0)]
#[case(RangedField::ScaleToScreenWidth, 50.0)]
#[case(RangedField::ScaleToScreenWidth, 360.0)]
#[case(RangedField::Compression, 0.0)]
#[case(RangedField::Compression, 55.0)]
#[case(RangedField::Compression, 100.0)]
#[case(RangedField::Sharpness, 0.0)]
#[case(RangedField::Sharpness, 99.0)]
#[case(RangedField::Sharpness, 100.0)]
fn test_in_range_value_is_stored(#[case] field: RangedField, #[case] value: f64) {
    let state = apply(&DirectiveConfig::default(), &ranged_action(field, value));
    assert_eq!(state.ranged_value(field), value as i64);
    assert_eq!(state.error.get(field), Some(false));
}

#[rstest]
#[case(RangedField::Rotate, -361.0)]
#[case(RangedField::Rotate, 361.0)]
#[case(RangedField::Rotate, 400.0)]
#[case(RangedField::ScaleToScreenWidth, -1000.0)]
#[case(RangedField::ScaleToScreenWidth, 361.0)]
#[case(RangedField::Compression, -1.0)]
#[case(RangedField::Compression, 101.0)]
#[case(RangedField::Compression, 150.0)]
#[case(RangedField::Sharpness, -5.0)]
#[case(RangedField::Sharpness, 101.0)]
fn test_out_of_range_value_is_rejected(#[case] field: RangedField, #[case] value: f64) {
    let before = DirectiveConfig::default();
    let state = apply(&before, &ranged_action(field, value));
    assert_eq!(state.ranged_value(field), before.ranged_value(field));
    assert_eq!(state.error.get(field), Some(true));
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("   ")]
#[case("12.5")]
fn test_malformed_text_is_rejected(#[case] input: &str) {
    let state = apply(&DirectiveConfig::default(), &Action::rotate(input));
    assert_eq!(state.rotate, 0);
    assert!(state.error.is_flagged(RangedField::Rotate));
}

#[test]
fn test_numeric_text_is_coerced() {
    let state = apply(&DirectiveConfig::default(), &Action::rotate("-90"));
    assert_eq!(state.rotate, -90);
    let state = apply(&state, &Action::compression("75"));
    assert_eq!(state.compression, 75);
}

#[test]
fn test_applying_valid_action_twice_is_idempotent() {
    let actions = [
        Action::rotate(270),
        Action::compression(42),
        Action::sharpness(0),
        Action::scale_to_screen_width(-12),
        Action::no_optimization("true"),
        Action::SetField(FieldUpdate::Width(1280)),
        Action::SetField(FieldUpdate::FitMethod(FitMethod::Letterbox)),
    ];
    for action in actions {
        let once = apply(&DirectiveConfig::default(), &action);
        let twice = apply(&once, &action);
        assert_eq!(once, twice, "not idempotent: {:?}", action);
    }
}

#[test]
fn test_valid_compression_clears_rotate_error() {
    let state = apply(&DirectiveConfig::default(), &Action::rotate(400));
    assert_eq!(state.error.get(RangedField::Rotate), Some(true));

    let state = apply(&state, &Action::compression(20));
    assert_eq!(state.error.get(RangedField::Rotate), None);
    assert_eq!(state.error.get(RangedField::Compression), Some(false));
}

#[test]
fn test_rejected_action_also_replaces_other_errors() {
    let state = apply(&DirectiveConfig::default(), &Action::rotate(400));
    let state = apply(&state, &Action::sharpness(500));
    assert_eq!(state.error.get(RangedField::Rotate), None);
    assert_eq!(state.error.get(RangedField::Sharpness), Some(true));
}

#[test]
fn test_merge_policy_keeps_independent_errors() {
    let options = StoreOptions {
        error_policy: ErrorPolicy::Merge,
        allow_video_output: false,
    };
    let state = apply_with(&DirectiveConfig::default(), &Action::rotate(400), &options);
    let state = apply_with(&state, &Action::compression(20), &options);
    assert_eq!(state.error.get(RangedField::Rotate), Some(true));
    assert_eq!(state.error.get(RangedField::Compression), Some(false));
}

#[rstest]
#[case(ActionRecord::new(ActionKind::SetNoOptimization, Some("noOptimization"), "true"), true)]
#[case(ActionRecord::new(ActionKind::SetNoOptimization, Some("noOptimization"), "false"), false)]
#[case(ActionRecord::new(ActionKind::SetNoOptimization, Some("noOptimization"), "yes"), false)]
#[case(ActionRecord::new(ActionKind::SetNoOptimization, Some("noOptimization"), true), false)]
#[case(ActionRecord::new(ActionKind::SetNoOptimization, Some("noOptimization"), 1), false)]
fn test_no_optimization_only_accepts_literal_true(
    #[case] record: ActionRecord,
    #[case] expected: bool,
) {
    let mut store = DirectiveStore::default();
    store.dispatch(Action::no_optimization("true"));
    store.dispatch_record(&record);
    assert_eq!(store.snapshot().no_optimization, expected);
}

#[test]
fn test_scenario_compression_rejected_then_accepted() {
    let mut store = DirectiveStore::default();

    store.dispatch(Action::compression(150));
    assert_eq!(store.snapshot().compression, 10);
    assert_eq!(store.snapshot().error.get(RangedField::Compression), Some(true));

    store.dispatch(Action::compression(55));
    assert_eq!(store.snapshot().compression, 55);
    assert_eq!(store.snapshot().error.get(RangedField::Compression), Some(false));
}

#[test]
fn test_scenario_rotate_rejected_then_width_set() {
    let mut store = DirectiveStore::default();

    store.dispatch(Action::rotate(400));
    assert!(store.snapshot().error.is_flagged(RangedField::Rotate));
    assert_eq!(store.snapshot().rotate, 0);

    store.dispatch_record(&ActionRecord::field("width", 800u32));
    assert_eq!(store.snapshot().width, 800);
    assert!(!store.snapshot().error.is_flagged(RangedField::Rotate));
}

#[test]
fn test_no_optimization_leaves_error_map_untouched() {
    let mut store = DirectiveStore::default();
    store.dispatch(Action::rotate(400));
    store.dispatch_record(&ActionRecord::new(
        ActionKind::SetNoOptimization,
        Some("noOptimization"),
        "true",
    ));
    assert!(store.snapshot().no_optimization);
    assert_eq!(store.snapshot().error.get(RangedField::Rotate), Some(true));
}

#[test]
fn test_whole_decimal_text_sets_width() {
    let mut store = DirectiveStore::default();
    store.dispatch_record(&ActionRecord::field("width", "800.0"));
    assert_eq!(store.snapshot().width, 800);
    assert_eq!(store.generation(), 1);
}

#[test]
fn test_scenario_bundle_auto_width() {
    let mut store = DirectiveStore::default();
    assert_eq!(store.bundle().auto_width_with_fallback, None);

    store.dispatch_record(&ActionRecord::field("autoWidthWithFallback", 200u32));
    assert_eq!(store.bundle().auto_width_with_fallback, Some(200));

    store.dispatch_record(&ActionRecord::field("autoWidthWithFallback", 0u32));
    assert_eq!(store.bundle().auto_width_with_fallback, None);
}

#[test]
fn test_unknown_field_returns_unchanged_state() {
    let mut store = DirectiveStore::default();
    store.dispatch(Action::sharpness(300));
    let before = store.snapshot().clone();

    store.dispatch_record(&ActionRecord::field("saturation", 12));
    store.dispatch_record(&ActionRecord::new(ActionKind::Unknown, None, "x"));
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn test_unchecked_fields_accept_any_value_of_their_type() {
    let mut store = DirectiveStore::default();
    store.dispatch_record(&ActionRecord::field("width", 100_000u32));
    store.dispatch_record(&ActionRecord::field("height", "0"));
    store.dispatch_record(&ActionRecord::field("outputFormat", "gif"));
    store.dispatch_record(&ActionRecord::field("fitMethod", "stretch"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.width, 100_000);
    assert_eq!(snapshot.height, 0);
    assert_eq!(snapshot.output_format, OutputFormat::Gif);
    assert_eq!(snapshot.fit_method, FitMethod::Stretch);
}

#[test]
fn test_crop_fields_are_stored_but_not_forwarded() {
    let mut store = DirectiveStore::default();
    store.dispatch_record(&ActionRecord::field("crop", [10i64, 20, 30, 40]));
    store.dispatch_record(&ActionRecord::field("cropWidth", 10u32));
    assert_eq!(store.snapshot().crop, [10, 20, 30, 40]);
    assert_eq!(store.snapshot().crop_width, 10);

    let json = serde_json::to_value(store.bundle()).unwrap();
    assert!(json.get("crop").is_none());
    assert!(json.get("cropWidth").is_none());
}

#[test]
fn test_bundle_mirrors_snapshot() {
    let mut store = DirectiveStore::default();
    store.dispatch(Action::rotate(90));
    store.dispatch(Action::sharpness(70));
    store.dispatch(Action::SetField(FieldUpdate::OutputFormat(OutputFormat::WebP)));

    let expected = DirectiveBundle {
        width: 400,
        height: 500,
        rotate: 90,
        compression: 10,
        sharpness: 70,
        scale_to_screen_width: 0,
        output_format: OutputFormat::WebP,
        fit_method: FitMethod::Box,
        no_optimization: false,
        auto_width_with_fallback: None,
    };
    assert_eq!(store.bundle(), expected);
}
