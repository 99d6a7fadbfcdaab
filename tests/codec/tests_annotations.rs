use crate::helpers::{assert_reencodes_to, assert_round_trip, fixture, keys_of};
use iiif::values::{ImageApiSelector, PartOf};
use iiif::{
    Annotation, CodecError, ContentBody, ContentResource, JsonCodec, Label, MediaType, Motivation,
    Purpose, Selector, SkolemIriFactory, Source, SpecificResource, Target, TextualBody, TimeMode,
};
use rstest::rstest;
use serde_json::{Value, json};

fn annotation_with(motivation: &str) -> Value {
    json!({
        "id": "https://example.org/anno/1",
        "type": "Annotation",
        "motivation": motivation,
        "target": "https://example.org/canvas/1"
    })
}

fn variant(resource: &ContentResource) -> &'static str {
    match resource {
        ContentResource::Sound(_) => "Sound",
        ContentResource::Video(_) => "Video",
        ContentResource::Image(_) => "Image",
        ContentResource::Text(_) => "Text",
        ContentResource::Dataset(_) => "Dataset",
        ContentResource::Model(_) => "Model",
        ContentResource::Canvas(_) => "Canvas",
        ContentResource::TextualBody(_) => "TextualBody",
        ContentResource::SpecificResource(_) => "SpecificResource",
        ContentResource::Other(_) => "Other",
    }
}

// ============================================================================
// Motivation
// ============================================================================

#[rstest]
#[case("assessing", Purpose::Assessing)]
#[case("bookmarking", Purpose::Bookmarking)]
#[case("classifying", Purpose::Classifying)]
#[case("commenting", Purpose::Commenting)]
#[case("describing", Purpose::Describing)]
#[case("editing", Purpose::Editing)]
#[case("highlighting", Purpose::Highlighting)]
#[case("identifying", Purpose::Identifying)]
#[case("linking", Purpose::Linking)]
#[case("moderating", Purpose::Moderating)]
#[case("questioning", Purpose::Questioning)]
#[case("replying", Purpose::Replying)]
#[case("tagging", Purpose::Tagging)]
#[case("painting", Purpose::Painting)]
#[case("supplementing", Purpose::Supplementing)]
fn test_purpose_selects_variant(#[case] label: &str, #[case] purpose: Purpose) {
    let annotation = Annotation::from_json(&annotation_with(label)).expect("Failed to decode");
    assert_eq!(annotation.purpose(), Some(purpose));
    assert_eq!(annotation.motivation(), &Motivation::Purpose(purpose));

    let shouted = Annotation::from_json(&annotation_with(&label.to_uppercase()))
        .expect("Failed to decode upper-case motivation");
    assert_eq!(shouted.purpose(), Some(purpose));
    assert_eq!(shouted.to_json().unwrap()["motivation"], json!(label));
}

#[rstest]
#[case::content_state("contentState")]
#[case::unknown("sorting")]
#[case::uri("https://example.org/motivations/curating")]
fn test_unknown_motivation_is_generic(#[case] motivation: &str) {
    let node = annotation_with(motivation);
    let annotation = assert_round_trip::<Annotation>(&node);
    assert_eq!(annotation.purpose(), None);
    assert_eq!(annotation.motivation(), &Motivation::Other(motivation.to_string()));
    assert_eq!(annotation.to_json().unwrap(), node);
}

#[test]
fn test_built_variant_cannot_disagree_with_motivation() {
    assert!(matches!(
        Annotation::for_purpose(
            Purpose::Painting,
            "supplementing",
            "https://example.org/anno/1",
            "https://example.org/canvas/1"
        ),
        Err(CodecError::MotivationMismatch { .. })
    ));
    let annotation = Annotation::for_purpose(
        Purpose::Painting,
        "Painting",
        "https://example.org/anno/1",
        "https://example.org/canvas/1",
    )
    .expect("Matching motivation should be accepted");
    assert_eq!(annotation.motivation().as_str(), "painting");
}

// ============================================================================
// Required fields
// ============================================================================

#[rstest]
#[case::id(json!({"type": "Annotation", "motivation": "painting",
                  "target": "https://example.org/canvas/1"}), "id")]
#[case::motivation(json!({"id": "https://example.org/anno/1", "type": "Annotation",
                          "target": "https://example.org/canvas/1"}), "motivation")]
#[case::target(json!({"id": "https://example.org/anno/1", "type": "Annotation",
                      "motivation": "painting"}), "target")]
#[case::source(json!({"id": "https://example.org/anno/1", "motivation": "painting",
                      "target": {"type": "SpecificResource",
                                 "selector": {"type": "AudioContentSelector"}}}), "source")]
#[case::selector(json!({"id": "https://example.org/anno/1", "motivation": "painting",
                        "target": {"type": "SpecificResource",
                                   "source": "https://example.org/canvas/1"}}), "selector")]
#[case::textual_value(json!({"id": "https://example.org/anno/1", "motivation": "commenting",
                             "body": {"type": "TextualBody"},
                             "target": "https://example.org/canvas/1"}), "value")]
fn test_annotation_missing_field(#[case] node: Value, #[case] field: &str) {
    let err = Annotation::from_json(&node).unwrap_err();
    assert!(
        matches!(err, CodecError::MissingRequiredField { .. }),
        "Expected missing field, got {err:?}"
    );
    assert_eq!(err.field(), Some(field));
}

#[test]
fn test_id_must_be_a_leaf() {
    let mut node = annotation_with("painting");
    node["id"] = json!({"value": "https://example.org/anno/1"});
    let err = Annotation::from_json(&node).unwrap_err();
    assert!(matches!(err, CodecError::WrongNodeShape { .. }));
    assert_eq!(err.field(), Some("id"));
}

// ============================================================================
// Bodies
// ============================================================================

#[rstest]
#[case::absent(None, 0, false)]
#[case::single(Some(json!({"type": "TextualBody", "value": "One"})), 1, false)]
#[case::list(
    Some(json!([{"type": "TextualBody", "value": "One"}, {"type": "TextualBody", "value": "Two"}])),
    2,
    false
)]
#[case::items_without_type(
    Some(json!({"items": [{"type": "TextualBody", "value": "One"}, "rdf:nil"]})),
    2,
    false
)]
#[case::choice(
    Some(json!({"type": "Choice", "items": [{"type": "TextualBody", "value": "One"}, "rdf:nil"]})),
    2,
    true
)]
#[case::empty_choice(Some(json!({"type": "Choice", "items": []})), 0, true)]
fn test_body_cardinality(#[case] body: Option<Value>, #[case] len: usize, #[case] choice: bool) {
    let mut node = annotation_with("commenting");
    if let Some(body) = body {
        node["body"] = body;
    }
    let annotation = assert_round_trip::<Annotation>(&node);
    assert_eq!(annotation.body().len(), len);
    assert_eq!(annotation.is_choice(), choice);
}

#[test]
fn test_choice_keeps_nil_placeholder_in_position() {
    let node = fixture("annotations/choice_with_nil.json");
    let annotation = assert_round_trip::<Annotation>(&node);
    assert!(annotation.is_choice());
    let present: Vec<bool> = annotation.body().iter().map(Option::is_some).collect();
    assert_eq!(present, vec![true, false, true]);
    assert_eq!(annotation.label().and_then(Label::first), Some("Natural light or X-ray"));
    assert_reencodes_to::<Annotation>(&node);
}

#[rstest]
#[case("Sound", "Sound")]
#[case("Video", "Video")]
#[case("Image", "Image")]
#[case("Text", "Text")]
#[case("Dataset", "Dataset")]
#[case("Model", "Model")]
#[case("Canvas", "Canvas")]
#[case("Hologram", "Other")]
fn test_content_resource_dispatch(#[case] kind: &str, #[case] expected: &str) {
    let node = json!({"id": "https://example.org/resource", "type": kind});
    let resource = ContentResource::from_json(&node).expect("Failed to decode body");
    assert_eq!(variant(&resource), expected);
    assert_eq!(resource.type_name(), Some(kind));
    assert_eq!(resource.to_json().unwrap(), node);
}

#[test]
fn test_content_body_keeps_unknown_properties() {
    let node = json!({
        "id": "https://example.org/audio.mp4",
        "type": "Sound",
        "format": "audio/mp4",
        "language": ["en", "fr"],
        "duration": 1985.5,
        "provider": [{"id": "https://example.org/about", "type": "Agent"}]
    });
    let resource = assert_round_trip::<ContentResource>(&node);
    let body = resource.body().expect("Sound has a content body");
    assert_eq!(body.duration, Some(1985.5));
    assert_eq!(body.language, vec!["en", "fr"]);
    assert!(body.properties.contains_key("provider"));
    assert_eq!(resource.to_json().unwrap(), node);
}

// ============================================================================
// Targets and round trips
// ============================================================================

#[test]
fn test_specific_target_round_trip() {
    let node = fixture("annotations/specific_target.json");
    let annotation = assert_round_trip::<Annotation>(&node);
    assert_eq!(annotation.purpose(), Some(Purpose::Tagging));
    assert_eq!(annotation.time_mode(), Some(TimeMode::Loop));
    assert_eq!(
        annotation.target().uri(),
        "https://example.org/iiif/book1/canvas/p1#xywh=265,661,1260,1239"
    );
    match annotation.target() {
        Target::Specific(resource) => {
            assert_eq!(resource.source.part_of().len(), 1);
            assert_eq!(resource.source.part_of()[0].kind, "Manifest");
        }
        other => panic!("Expected specific resource target, got {other:?}"),
    }
    assert_reencodes_to::<Annotation>(&node);
}

#[test]
fn test_built_annotation_round_trip() {
    let target = SpecificResource::new(
        Source::Resource {
            id: "https://example.org/canvas/1".into(),
            kind: "Canvas".into(),
            part_of: vec![PartOf::new("https://example.org/manifest", "Manifest")
                .with_label(Label::none("Book 1"))],
        },
        Selector::ImageApi(ImageApiSelector {
            region: Some("10,10,200,200".into()),
            ..ImageApiSelector::default()
        }),
    )
    .with_id("https://example.org/target/1");
    let image = ContentBody::new("https://example.org/image.png")
        .with_format(MediaType::new("image", "png"))
        .with_size(640, 480);
    let annotation = Annotation::new(Purpose::Supplementing, "https://example.org/anno/7", target)
        .with_label(Label::new().with("en", "Detail").with("de", "Ausschnitt"))
        .with_body(vec![
            ContentResource::Image(image),
            ContentResource::TextualBody(TextualBody::new("Detail").with_language("en")),
        ])
        .with_time_mode(TimeMode::Scale);

    let encoded = annotation.to_json().expect("Failed to encode");
    assert_eq!(
        keys_of(&encoded),
        vec!["id", "type", "motivation", "label", "body", "target", "timeMode"]
    );
    assert_eq!(encoded["body"]["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(Annotation::from_json(&encoded).expect("Failed to decode"), annotation);
}

#[test]
fn test_built_empty_choice_round_trip() {
    let annotation = Annotation::new(
        Purpose::Painting,
        "https://example.org/anno/8",
        "https://example.org/canvas/1",
    )
    .with_choice(Vec::new());
    let encoded = annotation.to_json().expect("Failed to encode");
    assert_eq!(encoded["body"], json!({"type": "Choice", "items": []}));
    let decoded = Annotation::from_json(&encoded).expect("Failed to decode");
    assert!(decoded.is_choice());
    assert_eq!(decoded, annotation);
}

#[test]
fn test_minted_textual_body_ids() {
    let factory = SkolemIriFactory::with_base("https://example.org/");
    let body = TextualBody::minted(&factory, "Note");
    let id = body.id.clone().expect("Minted body has an id");
    assert!(id.starts_with("https://example.org/.well-known/genid/"));
    assert_eq!(body.serialized_id(), None);

    let encoded = ContentResource::TextualBody(body).to_json().unwrap();
    assert!(encoded.get("id").is_none());
}
