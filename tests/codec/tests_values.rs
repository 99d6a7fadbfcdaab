use crate::helpers::assert_round_trip;
use iiif::values::{GeometryType, LineString, Point, PointSelector};
use iiif::{CodecError, Geometry, JsonCodec, Label, MediaType, Selector, Source, Stylesheet};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_multi_line_string_keeps_nesting() {
    let node = json!({
        "type": "MultiLineString",
        "coordinates": [[[1, 2], [3, 4]], [[5, 6], [7, 8]]]
    });
    let geometry = Geometry::from_json(&node).expect("Failed to decode geometry");
    assert_eq!(
        geometry,
        Geometry::MultiLineString(vec![
            LineString(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]),
            LineString(vec![Point::new(5.0, 6.0), Point::new(7.0, 8.0)]),
        ])
    );

    let encoded = geometry.to_json().expect("Failed to encode geometry");
    assert_eq!(
        serde_json::to_string(&encoded["coordinates"]).unwrap(),
        "[[[1,2],[3,4]],[[5,6],[7,8]]]"
    );
    assert_eq!(encoded, node);
}

#[rstest]
#[case::point(json!({"type": "Point", "coordinates": [12.5, -3]}), GeometryType::Point)]
#[case::multi_point(
    json!({"type": "MultiPoint", "coordinates": [[0, 0], [10.25, 4]]}),
    GeometryType::MultiPoint
)]
#[case::line_string(
    json!({"type": "LineString", "coordinates": [[0, 0], [1, 1], [2, 0]]}),
    GeometryType::LineString
)]
#[case::multi_line_string(
    json!({"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]]]}),
    GeometryType::MultiLineString
)]
fn test_geometry_types(#[case] node: Value, #[case] kind: GeometryType) {
    let geometry = assert_round_trip::<Geometry>(&node);
    assert_eq!(geometry.geometry_type(), kind);
    assert_eq!(geometry.to_json().unwrap(), node);
}

#[rstest]
#[case::point_too_deep(json!({"type": "Point", "coordinates": [[1, 2]]}))]
#[case::line_too_shallow(json!({"type": "LineString", "coordinates": [1, 2]}))]
#[case::multi_line_too_shallow(json!({"type": "MultiLineString", "coordinates": [[1, 2]]}))]
fn test_geometry_nesting_mismatch(#[case] node: Value) {
    assert!(matches!(
        Geometry::from_json(&node),
        Err(CodecError::WrongNodeShape { .. })
    ));
}

// ============================================================================
// Source and selectors
// ============================================================================

#[rstest]
#[case::uri(json!("https://example.org/canvas/1"))]
#[case::typed(json!({"id": "https://example.org/canvas/1", "type": "Canvas"}))]
#[case::part_of(json!({
    "id": "https://example.org/canvas/1",
    "type": "Canvas",
    "partOf": [
        {"id": "https://example.org/manifest/a", "type": "Manifest", "label": {"en": ["A"]}},
        {"id": "https://example.org/manifest/b", "type": "Manifest"}
    ]
}))]
fn test_source_forms(#[case] node: Value) {
    let source = assert_round_trip::<Source>(&node);
    assert_eq!(source.id(), "https://example.org/canvas/1");
    assert_eq!(source.to_json().unwrap(), node);
}

#[rstest]
#[case::fragment(json!({
    "type": "FragmentSelector",
    "conformsTo": "http://www.w3.org/TR/media-frags/",
    "value": "t=10,20"
}))]
#[case::image_api(json!({
    "type": "ImageApiSelector",
    "region": "0,0,512,512",
    "size": "256,",
    "rotation": "90",
    "quality": "gray",
    "format": "png"
}))]
#[case::image_api_partial(json!({"type": "ImageApiSelector", "rotation": 90, "region": "full"}))]
#[case::image_api_mirrored(json!({"type": "ImageApiSelector", "rotation": "!22.5"}))]
#[case::point(json!({"type": "PointSelector", "x": 100, "y": 250, "t": 14.5}))]
#[case::svg(json!({"type": "SvgSelector", "value": "<svg><circle cx=\"5\" cy=\"5\" r=\"5\"/></svg>"}))]
#[case::audio(json!({"type": "AudioContentSelector"}))]
#[case::visual(json!({"type": "VisualContentSelector"}))]
#[case::other(json!({"type": "TextQuoteSelector", "exact": "Dieses Buch"}))]
fn test_selector_round_trip(#[case] node: Value) {
    let selector = assert_round_trip::<Selector>(&node);
    assert_eq!(selector.to_json().unwrap(), node);
}

#[test]
fn test_point_selector_fields_optional() {
    let selector = Selector::from_json(&json!({"type": "PointSelector", "t": 3})).unwrap();
    assert_eq!(
        selector,
        Selector::Point(PointSelector { x: None, y: None, t: Some(3.0) })
    );
}

// ============================================================================
// Leaf values
// ============================================================================

#[rstest]
#[case::external(json!("https://example.org/style.css"), false)]
#[case::inline(json!({"type": "CssStylesheet", "value": ".red { color: red }"}), true)]
fn test_stylesheet_forms(#[case] node: Value, #[case] inline: bool) {
    let stylesheet = assert_round_trip::<Stylesheet>(&node);
    assert_eq!(matches!(stylesheet, Stylesheet::Inline(_)), inline);
    assert_eq!(stylesheet.to_json().unwrap(), node);
}

#[rstest]
#[case::empty_uri(json!(""))]
#[case::empty_inline(json!({"type": "CssStylesheet", "value": "  "}))]
#[case::number(json!(5))]
fn test_stylesheet_rejects_empty(#[case] node: Value) {
    assert!(Stylesheet::from_json(&node).is_err());
}

#[rstest]
#[case("image/jpeg", "image", "jpeg")]
#[case("Text/HTML", "text", "html")]
#[case("application/ld+json;profile=\"http://iiif.io/api/presentation/3/context.json\"", "application", "ld+json")]
fn test_media_type_parts(#[case] text: &str, #[case] kind: &str, #[case] subtype: &str) {
    let media_type: MediaType = text.parse().expect("Failed to parse media type");
    assert_eq!(media_type.kind(), kind);
    assert_eq!(media_type.subtype(), subtype);
}

#[rstest]
#[case::no_slash("jpeg")]
#[case::empty_subtype("image/")]
#[case::bad_parameter("text/plain;charset")]
fn test_media_type_rejects(#[case] text: &str) {
    assert!(MediaType::parse(text).is_none());
}

#[test]
fn test_label_string_shorthand() {
    let label = Label::from_json(&json!("Page 1")).unwrap();
    assert_eq!(label, Label::none("Page 1"));
    assert_eq!(label.to_json().unwrap(), json!({"none": ["Page 1"]}));
}

#[test]
fn test_label_keeps_language_order() {
    let node = json!({"fr": ["Livre"], "en": ["Book", "Volume"]});
    let label = assert_round_trip::<Label>(&node);
    assert_eq!(label.languages().collect::<Vec<_>>(), vec!["fr", "en"]);
    assert_eq!(label.get("en").map(<[String]>::len), Some(2));
}
