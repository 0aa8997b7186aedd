//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the formkit crate.
//!
//! # Example
//!
//! ```rust
//! use formkit::prelude::*;
//!
//! let mut editor = FormEditor::new();
//! editor.begin_palette_drag(3);
//! editor.drop_on(DropTarget::Canvas);
//!
//! let field = &editor.store().fields()[0];
//! assert_eq!(field.field_type(), FieldType::Select);
//! assert_eq!(field.options().map(<[String]>::len), Some(2));
//! ```

// Field model and creation
pub use crate::field::{
    Field, FieldFactory, FieldId, FieldPatch, FieldType, IdGenerator, RandomIdGenerator,
    SequentialIdGenerator,
};

// Reordering
pub use crate::reorder::reorder;

// Drag and drop
pub use crate::payload::{
    DataTransfer, DragGesture, DragPayload, DropEffect, DropOutcome, DropTarget, MemoryTransfer,
    PAYLOAD_MEDIA_TYPE,
};

// State and composition
pub use crate::editor::FormEditor;
pub use crate::palette::{Palette, PaletteEntry};
pub use crate::schema::SchemaPreview;
pub use crate::store::FormStore;

// Replay
pub use crate::script::{Gesture, ReplayReport, Script, ScriptRunner};

// Error types
pub use crate::error::{FieldTypeError, PayloadError, ScriptError};
