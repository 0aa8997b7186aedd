//! # Formkit - Form Builder Core
//!
//! **Formkit** is the headless core of an interactive form builder: a palette of
//! field types, a canvas of fields that can be dropped and reordered, an
//! inspector that edits the selected field, and a live JSON schema preview.
//! Rendering is left to the host; this crate owns the data model and the
//! drag-and-drop semantics behind it.
//!
//! ## Core Workflow
//!
//! 1.  **Create Fields**: A [`FieldFactory`](field::FieldFactory) turns a palette
//!     selection into a [`Field`](field::Field) with a fresh id and type defaults.
//! 2.  **Carry Drags**: A drag start encodes a [`DragPayload`](payload::DragPayload)
//!     into a [`DataTransfer`](payload::DataTransfer) channel. The drop site decodes
//!     it once; missing or unknown payloads are silently ignored.
//! 3.  **Mutate State**: The [`FormStore`](store::FormStore) applies appends,
//!     reorders, selection changes, patches and removals as total operations.
//! 4.  **Render**: Surfaces read the field sequence and the selection;
//!     [`SchemaPreview`](schema::SchemaPreview) renders the fields as JSON.
//!
//! [`FormEditor`](editor::FormEditor) wires all of the above together for hosts
//! that do not need to compose the parts themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit::prelude::*;
//!
//! let mut factory = FieldFactory::default();
//! let mut store = FormStore::new();
//!
//! // Palette -> canvas drop
//! let drag = DragGesture::from_palette(DragPayload::palette(FieldType::Text, "Name"));
//! assert_eq!(drag.over(DropTarget::Canvas), DropEffect::Copy);
//! let outcome = drag.drop_on(DropTarget::Canvas, &mut store, &mut factory);
//! assert!(matches!(outcome, DropOutcome::Appended(_)));
//!
//! let select = factory.create(FieldType::Select, "Colour");
//! store.append(select);
//!
//! // Canvas-internal drag: move row 1 onto row 0
//! DragGesture::from_item(1).drop_on(DropTarget::Item(0), &mut store, &mut factory);
//! assert_eq!(store.fields()[0].label(), "Colour");
//!
//! println!("{}", SchemaPreview::render(store.fields()));
//! ```

pub mod editor;
pub mod error;
pub mod field;
pub mod palette;
pub mod payload;
pub mod prelude;
pub mod reorder;
pub mod schema;
pub mod script;
pub mod store;
