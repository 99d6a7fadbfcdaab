use crate::helpers::fixtures_dir;
use iiif::{
    Behavior, CodecError, DocumentFormat, JsonCodec, Label, PresentationJson, ResourceKind,
    read_resource_tree, scan_document,
};
use rstest::rstest;
use walkdir::WalkDir;

fn document_fixtures() -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = WalkDir::new(fixtures_dir().join("documents"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();
    paths
}

#[test]
fn test_fixture_documents_scan_like_tree() {
    let paths = document_fixtures();
    assert!(!paths.is_empty(), "No document fixtures found");

    for path in paths {
        let bytes = std::fs::read(&path).expect("Failed to read fixture");
        let scanned = scan_document(&bytes)
            .unwrap_or_else(|e| panic!("Scan failed for {}: {e}", path.display()));
        let tree = read_resource_tree(&bytes)
            .unwrap_or_else(|e| panic!("Tree read failed for {}: {e}", path.display()));
        assert_eq!(scanned, tree, "Scanner and tree differ for {}", path.display());

        let written = PresentationJson.write(&scanned).expect("Failed to write");
        let reread = PresentationJson.read(&written).expect("Failed to re-read");
        assert_eq!(reread, scanned, "Round trip changed {}", path.display());
    }
}

#[test]
fn test_legacy_service_keys_survive_document_round_trip() {
    let bytes = std::fs::read(fixtures_dir().join("documents/legacy_services_manifest.json"))
        .expect("Failed to read fixture");
    let resource = scan_document(&bytes).unwrap();
    let encoded = resource.to_json().unwrap();
    let image = &encoded["service"][0];
    assert_eq!(image["@id"], "https://example.org/iiif/map/image");
    assert_eq!(image["service"][0]["@type"], "AuthCookieService1");
    assert_eq!(encoded["service"][1]["id"], "https://example.org/iiif/map/geo");
    assert!(resource.behaviors.as_ref().is_some_and(|set| set.contains(Behavior::Individuals)));
}

const PARTS: [&str; 4] = [
    r#""type": "Manifest""#,
    r#""id": "https://example.org/manifest""#,
    r#""label": {"en": ["Example"]}"#,
    r#""items": [{"id": "https://example.org/canvas", "type": "Canvas", "label": "c"}]"#,
];

#[rstest]
#[case::type_first([0, 1, 2, 3])]
#[case::items_first([3, 0, 1, 2])]
#[case::label_first([2, 3, 1, 0])]
#[case::type_last([1, 3, 2, 0])]
fn test_identifying_keys_in_any_order(#[case] order: [usize; 4]) {
    let members: Vec<&str> = order.iter().map(|index| PARTS[*index]).collect();
    let input = format!("{{{}}}", members.join(", "));

    let scanned = scan_document(input.as_bytes()).expect("Failed to scan");
    assert_eq!(scanned.kind, ResourceKind::Manifest);
    assert_eq!(scanned.id, "https://example.org/manifest");
    assert_eq!(scanned.label, Label::new().with("en", "Example"));
    assert_eq!(scanned, read_resource_tree(input.as_bytes()).unwrap());
}

#[rstest]
#[case::missing_type(r#"{"id": "https://example.org/m", "label": "m"}"#)]
#[case::missing_id(r#"{"type": "Manifest", "label": "m"}"#)]
#[case::missing_everything(r#"{"items": []}"#)]
#[case::unknown_type(r#"{"type": "Canvas", "id": "https://example.org/c", "label": "c"}"#)]
#[case::numeric_id(r#"{"type": "Manifest", "id": 7, "label": "m"}"#)]
#[case::bad_label(r#"{"type": "Manifest", "id": "https://example.org/m", "label": 3}"#)]
#[case::canvas_behavior(
    r#"{"type": "Manifest", "id": "https://example.org/m", "label": "m", "behavior": ["facing-pages"]}"#
)]
#[case::exclusive_behaviors(
    r#"{"type": "Collection", "id": "https://example.org/c", "label": "c", "behavior": ["paged", "continuous"]}"#
)]
#[case::bad_service(
    r#"{"type": "Manifest", "id": "https://example.org/m", "label": "m", "service": [{"id": "x"}]}"#
)]
fn test_scanner_and_tree_fail_alike(#[case] input: &str) {
    let scanned = scan_document(input.as_bytes()).unwrap_err();
    let tree = read_resource_tree(input.as_bytes()).unwrap_err();
    assert_eq!(scanned, tree);
}

#[rstest]
#[case::repeated_id(
    r#"{"type": "Manifest", "id": "https://example.org/a", "label": "m", "id": "https://example.org/b"}"#,
    "https://example.org/b"
)]
#[case::repeated_type(
    r#"{"type": "Canvas", "id": "https://example.org/m", "label": "m", "type": "Manifest"}"#,
    "https://example.org/m"
)]
#[case::repeated_behavior(
    r#"{"type": "Manifest", "id": "https://example.org/m", "label": "m", "behavior": ["bogus"], "behavior": ["paged"]}"#,
    "https://example.org/m"
)]
#[case::identifying_keys_after_service(
    r#"{"service": [{"id": "https://example.org/s", "type": "SearchService2"}], "behavior": ["paged"], "label": "m", "id": "https://example.org/m", "type": "Manifest"}"#,
    "https://example.org/m"
)]
fn test_scanner_and_tree_agree_on_repeated_keys(#[case] input: &str, #[case] id: &str) {
    let scanned = scan_document(input.as_bytes()).expect("Failed to scan");
    let tree = read_resource_tree(input.as_bytes()).expect("Failed to read tree");
    assert_eq!(scanned, tree);
    assert_eq!(scanned.id, id);
    assert_eq!(scanned.kind, ResourceKind::Manifest);
}

#[rstest]
#[case::repeated_type_ends_invalid(
    r#"{"type": "Manifest", "id": "https://example.org/m", "label": "m", "type": "Canvas"}"#
)]
#[case::repeated_behavior_ends_invalid(
    r#"{"type": "Manifest", "id": "https://example.org/m", "label": "m", "behavior": ["paged"], "behavior": ["bogus"]}"#
)]
#[case::behavior_before_type(
    r#"{"behavior": ["multi-part"], "label": "m", "id": "https://example.org/m", "type": "Manifest"}"#
)]
#[case::service_before_missing_id(
    r#"{"service": [{"id": "x"}], "type": "Manifest", "label": "m"}"#
)]
fn test_scanner_and_tree_reject_repeated_keys_alike(#[case] input: &str) {
    let scanned = scan_document(input.as_bytes()).unwrap_err();
    let tree = read_resource_tree(input.as_bytes()).unwrap_err();
    assert_eq!(scanned, tree);
}

#[test]
fn test_missing_keys_reported_in_order() {
    let err = scan_document(br#"{"items": []}"#).unwrap_err();
    assert_eq!(err.field(), Some("type"));
    let err = scan_document(br#"{"type": "Manifest", "items": []}"#).unwrap_err();
    assert_eq!(err.field(), Some("id"));
}

#[rstest]
#[case::truncated(r#"{"type": "Manifest", "id": "#)]
#[case::trailing_comma(r#"{"type": "Manifest",}"#)]
#[case::bare_word(r#"{"type": Manifest}"#)]
fn test_malformed_json(#[case] input: &str) {
    assert!(matches!(scan_document(input.as_bytes()), Err(CodecError::Json(_))));
    assert!(matches!(read_resource_tree(input.as_bytes()), Err(CodecError::Json(_))));
}

#[test]
fn test_document_format_metadata() {
    let format = PresentationJson;
    assert_eq!(format.extensions(), &["json", "jsonld"]);
    assert!(format.mime_type().starts_with("application/ld+json"));
    assert!(format.capabilities().streaming);
    assert!(format.validate(br#"  {"type": "Manifest"}"#).is_ok());
    assert!(format.validate(b"[1, 2]").is_err());
}
