//! Unit tests for the field model, factory, reorder engine and payload codec.
mod common;
use common::*;
use formkit::prelude::*;
use std::collections::HashSet;

#[test]
fn test_field_type_tags() {
    for field_type in FieldType::ALL {
        assert_eq!(field_type.as_str().parse::<FieldType>(), Ok(field_type));
        assert_eq!(format!("{}", field_type), field_type.as_str());
    }
    assert_eq!(
        "checkbox".parse::<FieldType>(),
        Err(FieldTypeError::Unknown("checkbox".to_string()))
    );
    assert!("Text".parse::<FieldType>().is_err());
}

#[test]
fn test_create_non_select_has_no_options() {
    let mut factory = sequential_factory();
    for field_type in [FieldType::Text, FieldType::Number, FieldType::Date] {
        let field = factory.create(field_type, "Label");
        assert_eq!(field.field_type(), field_type);
        assert_eq!(field.label(), "Label");
        assert!(!field.required());
        assert_eq!(field.options(), None);
    }
}

#[test]
fn test_create_select_has_seed_options() {
    let mut factory = sequential_factory();
    let field = factory.create(FieldType::Select, "");
    assert_eq!(field.label(), "");
    assert_eq!(
        field.options(),
        Some(&["Option 1".to_string(), "Option 2".to_string()][..])
    );
}

#[test]
fn test_custom_select_options() {
    let mut factory = FieldFactory::builder()
        .with_id_generator(Box::new(SequentialIdGenerator::new()))
        .with_select_options(["Yes", "No", "Maybe"])
        .build();
    let field = factory.create(FieldType::Select, "Answer");
    assert_eq!(field.options().map(<[String]>::len), Some(3));
}

#[test]
fn test_create_ids_are_unique() {
    let mut factory = FieldFactory::default();
    let ids: HashSet<FieldId> = (0..10_000)
        .map(|_| factory.create(FieldType::Text, "x").id().clone())
        .collect();
    assert_eq!(ids.len(), 10_000);
    assert_eq!(factory.issued(), 10_000);
}

/// A generator that repeats itself twice before moving on.
struct StutteringIds {
    calls: u64,
}

impl IdGenerator for StutteringIds {
    fn next_id(&mut self) -> FieldId {
        self.calls += 1;
        FieldId::new(format!("id-{}", self.calls / 2))
    }
}

#[test]
fn test_factory_never_reissues_an_id() {
    let mut factory = FieldFactory::builder()
        .with_id_generator(Box::new(StutteringIds { calls: 0 }))
        .build();
    let ids: HashSet<FieldId> = (0..50)
        .map(|_| factory.create(FieldType::Number, "n").id().clone())
        .collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_reorder_examples() {
    assert_eq!(reorder(&["A", "B", "C"], 0, 2), vec!["B", "C", "A"]);
    assert_eq!(reorder(&["A", "B", "C"], 2, 0), vec!["C", "A", "B"]);
}

#[test]
fn test_reorder_same_index_is_an_equal_copy() {
    let original = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let copy = reorder(&original, 1, 1);
    assert_eq!(copy, original);
    assert_ne!(copy.as_ptr(), original.as_ptr());
}

#[test]
fn test_reorder_round_trip() {
    let original: Vec<u32> = (0..6).collect();
    for i in 0..original.len() {
        for j in 0..original.len() {
            if i == j {
                continue;
            }
            let moved = reorder(&original, i, j);
            assert_eq!(moved[j], original[i]);
            assert_eq!(reorder(&moved, j, i), original, "round trip {} <-> {}", i, j);
        }
    }
}

#[test]
fn test_payload_round_trip_through_transfer() {
    let mut transfer = MemoryTransfer::new();
    DragPayload::palette(FieldType::Number, "Age").encode_into(&mut transfer);
    assert_eq!(
        DragPayload::decode_from(&mut transfer),
        Some(DragPayload::palette(FieldType::Number, "Age"))
    );
    // Read once: the channel is empty afterwards.
    assert!(transfer.is_empty());
    assert_eq!(DragPayload::decode_from(&mut transfer), None);
}

#[test]
fn test_only_one_payload_per_gesture() {
    let mut transfer = MemoryTransfer::new();
    transfer.set_data("text/plain", "stray".to_string());
    DragPayload::palette(FieldType::Text, "A").encode_into(&mut transfer);
    DragPayload::reorder(4).encode_into(&mut transfer);
    assert_eq!(DragPayload::decode_from(&mut transfer), Some(DragPayload::reorder(4)));
    assert!(transfer.is_empty());
}

#[test]
fn test_payload_decode_rejects_garbage() {
    let cases = [
        "",
        "not json",
        r#"{"type":"text","label":"No kind"}"#,
        r#"{"kind":"palette","type":"checkbox","label":"Bad type"}"#,
        r#"{"kind":"reorder","fromIndex":-1}"#,
        r#"{"kind":"teleport"}"#,
    ];
    for raw in cases {
        let mut transfer = MemoryTransfer::with_data(PAYLOAD_MEDIA_TYPE, raw);
        assert_eq!(DragPayload::decode_from(&mut transfer), None, "{}", raw);
    }

    let mut empty = MemoryTransfer::new();
    assert_eq!(
        DragPayload::read_from(&mut empty),
        Err(PayloadError::Missing(PAYLOAD_MEDIA_TYPE.to_string()))
    );
}

#[test]
fn test_drag_over_always_accepts() {
    let palette = DragGesture::from_palette(DragPayload::palette(FieldType::Date, "When"));
    assert_eq!(palette.over(DropTarget::Canvas), DropEffect::Copy);
    assert_eq!(palette.over(DropTarget::Item(0)), DropEffect::Copy);

    let item = DragGesture::from_item(0);
    assert_eq!(item.over(DropTarget::Canvas), DropEffect::Move);
    assert_eq!(item.over(DropTarget::Item(3)), DropEffect::Move);
}

#[test]
fn test_patch_ignores_type_key() {
    let patch: FieldPatch = serde_json::from_str(r#"{"type":"number"}"#).unwrap();
    assert!(patch.is_empty());

    let patch: FieldPatch =
        serde_json::from_str(r#"{"label":"L","required":true,"id":"other"}"#).unwrap();
    assert_eq!(patch.label.as_deref(), Some("L"));
    assert_eq!(patch.required, Some(true));
    assert_eq!(patch.options, None);
}

#[test]
fn test_error_display() {
    let err = FieldTypeError::Unknown("checkbox".to_string());
    assert!(err.to_string().contains("checkbox"));

    let err = PayloadError::Malformed("expected value".to_string());
    assert!(err.to_string().contains("expected value"));

    let err = ScriptError::UnknownPaletteEntry {
        index: 3,
        entry: "slider".to_string(),
    };
    assert!(err.to_string().contains("#3"));
    assert!(err.to_string().contains("slider"));
}
