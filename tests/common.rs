//! Common test utilities for building factories, stores and editors.
use formkit::prelude::*;

/// A factory whose ids are `field-1`, `field-2`, ...
#[allow(dead_code)]
pub fn sequential_factory() -> FieldFactory {
    FieldFactory::builder()
        .with_id_generator(Box::new(SequentialIdGenerator::new()))
        .build()
}

/// A store holding one field per `(type, label)` pair, in order.
#[allow(dead_code)]
pub fn store_with(factory: &mut FieldFactory, specs: &[(FieldType, &str)]) -> FormStore {
    let mut store = FormStore::new();
    for (field_type, label) in specs {
        store.append(factory.create(*field_type, *label));
    }
    store
}

/// Labels of the store's fields, in canvas order.
#[allow(dead_code)]
pub fn labels(store: &FormStore) -> Vec<String> {
    store
        .fields()
        .iter()
        .map(|field| field.label().to_string())
        .collect()
}

/// An editor with deterministic ids and the default palette.
#[allow(dead_code)]
pub fn editor() -> FormEditor {
    FormEditor::with_parts(sequential_factory(), Palette::default())
}

/// A script that builds a three-field contact form and tweaks it.
#[allow(dead_code)]
pub const CONTACT_FORM_SCRIPT: &str = r#"{
    "gestures": [
        { "action": "dragPalette", "entry": "text" },
        { "action": "dropCanvas" },
        { "action": "dragPalette", "entry": "Date" },
        { "action": "dropCanvas" },
        { "action": "dragPalette", "entry": "select" },
        { "action": "dropCanvas" },
        { "action": "click", "index": 0 },
        { "action": "patch", "label": "Full name", "required": true },
        { "action": "dragItem", "index": 2 },
        { "action": "dropItem", "index": 0 },
        { "action": "click", "index": 0 },
        { "action": "patch", "options": ["Email", "Phone"] },
        { "action": "dropCanvas" }
    ]
}"#;
