use iiif::{Behavior, BehaviorScope, BehaviorSet, CodecError};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::canvas(BehaviorScope::Canvas, json!(["auto-advance", "facing-pages"]))]
#[case::collection(BehaviorScope::Collection, json!(["multi-part", "no-repeat", "individuals"]))]
#[case::manifest(BehaviorScope::Manifest, json!(["paged", "repeat", "no-auto-advance"]))]
#[case::range(BehaviorScope::Range, json!(["sequence", "continuous"]))]
#[case::resource(BehaviorScope::Resource, json!(["hidden"]))]
#[case::empty(BehaviorScope::Manifest, json!([]))]
fn test_valid_behaviors(#[case] scope: BehaviorScope, #[case] node: Value) {
    let set = BehaviorSet::from_json(&node, scope).expect("Failed to decode behaviors");
    assert_eq!(set.scope(), scope);
    assert_eq!(set.to_json(), node);
}

#[rstest]
#[case::canvas_pages(BehaviorScope::Canvas, &["facing-pages", "non-paged"])]
#[case::canvas_advance(BehaviorScope::Canvas, &["no-auto-advance", "auto-advance"])]
#[case::manifest_layout(BehaviorScope::Manifest, &["individuals", "paged"])]
#[case::collection_parts(BehaviorScope::Collection, &["together", "multi-part"])]
#[case::range_nav(BehaviorScope::Range, &["thumbnail-nav", "no-nav"])]
fn test_exclusive_behaviors(#[case] scope: BehaviorScope, #[case] labels: &[&str]) {
    match BehaviorSet::from_labels(scope, labels.iter().copied()) {
        Err(CodecError::MutualExclusionViolation { first, second }) => {
            assert_eq!(first, labels[0]);
            assert_eq!(second, labels[1]);
        }
        other => panic!("Expected mutual exclusion, got {other:?}"),
    }
}

#[test]
fn test_canvas_exclusivity_message_names_both() {
    let err = BehaviorSet::from_json(&json!(["facing-pages", "non-paged"]), BehaviorScope::Canvas)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("facing-pages"), "{message}");
    assert!(message.contains("non-paged"), "{message}");
}

#[rstest]
#[case::manifest_label_on_canvas(BehaviorScope::Canvas, json!(["repeat"]), vec!["repeat"])]
#[case::range_label_on_manifest(BehaviorScope::Manifest, json!(["sequence"]), vec!["sequence"])]
#[case::all_unknown_reported(
    BehaviorScope::Canvas,
    json!(["paged", "auto-advance", "bogus"]),
    vec!["paged", "bogus"]
)]
#[case::hidden_only_on_resources(BehaviorScope::Collection, json!(["hidden"]), vec!["hidden"])]
fn test_behavior_outside_vocabulary(
    #[case] scope: BehaviorScope,
    #[case] node: Value,
    #[case] expected: Vec<&str>,
) {
    match BehaviorSet::from_json(&node, scope) {
        Err(CodecError::InvalidEnumValue { field, scope: name, values }) => {
            assert_eq!(field, "behavior");
            assert_eq!(name, scope.name());
            assert_eq!(values, expected);
        }
        other => panic!("Expected invalid value, got {other:?}"),
    }
}

#[test]
fn test_unknown_labels_win_over_exclusivity() {
    let err = BehaviorSet::from_json(
        &json!(["facing-pages", "non-paged", "scroll"]),
        BehaviorScope::Canvas,
    )
    .unwrap_err();
    assert!(matches!(err, CodecError::InvalidEnumValue { .. }));
}

#[test]
fn test_behavior_labels_ignore_case() {
    let set = BehaviorSet::from_json(&json!(["Paged", "NO-REPEAT"]), BehaviorScope::Manifest)
        .unwrap();
    assert_eq!(set.behaviors(), &[Behavior::Paged, Behavior::NoRepeat]);
    assert_eq!(set.to_json(), json!(["paged", "no-repeat"]));
}

#[test]
fn test_behavior_must_be_array() {
    assert!(matches!(
        BehaviorSet::from_json(&json!("paged"), BehaviorScope::Manifest),
        Err(CodecError::WrongNodeShape { .. })
    ));
}

#[test]
fn test_push_applies_same_checks() {
    let mut set = BehaviorSet::new(BehaviorScope::Canvas);
    set.push(Behavior::FacingPages).unwrap();
    assert!(matches!(
        set.push(Behavior::NonPaged),
        Err(CodecError::MutualExclusionViolation { .. })
    ));
    assert!(matches!(
        set.push(Behavior::Paged),
        Err(CodecError::InvalidEnumValue { .. })
    ));
    assert_eq!(set.len(), 1);
}
