//! Drag payloads, the transfer channel that carries them, and drag gestures.

pub mod gesture;
pub mod transfer;

pub use gesture::*;
pub use transfer::*;

use crate::error::PayloadError;
use crate::field::FieldType;
use serde::{Deserialize, Serialize};

/// Media type both ends of a drag agree on.
pub const PAYLOAD_MEDIA_TYPE: &str = "application/json";

/// What an in-flight drag intends to do.
///
/// Lives only between drag start and the single drop (or cancel) that ends the
/// gesture. Encoded as JSON with a `kind` tag:
///
/// ```json
/// { "kind": "palette", "type": "text", "label": "Name" }
/// { "kind": "reorder", "fromIndex": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragPayload {
    /// A field type being introduced from the palette.
    Palette {
        #[serde(rename = "type")]
        field_type: FieldType,
        label: String,
    },
    /// An existing canvas item being relocated, by its index at drag start.
    Reorder {
        #[serde(rename = "fromIndex")]
        from_index: usize,
    },
}

impl DragPayload {
    pub fn palette(field_type: FieldType, label: impl Into<String>) -> Self {
        DragPayload::Palette {
            field_type,
            label: label.into(),
        }
    }

    pub fn reorder(from_index: usize) -> Self {
        DragPayload::Reorder { from_index }
    }

    pub fn to_json(&self) -> String {
        // A two-variant enum of strings and integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses a payload, rejecting unknown `kind` tags and malformed shapes.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Attaches this payload to `transfer`, replacing anything already there.
    pub fn encode_into<T: DataTransfer + ?Sized>(&self, transfer: &mut T) {
        transfer.clear();
        transfer.set_data(PAYLOAD_MEDIA_TYPE, self.to_json());
    }

    /// Reads the payload out of `transfer`, consuming it.
    pub fn read_from<T: DataTransfer + ?Sized>(transfer: &mut T) -> Result<Self, PayloadError> {
        let raw = transfer
            .take_data(PAYLOAD_MEDIA_TYPE)
            .ok_or_else(|| PayloadError::Missing(PAYLOAD_MEDIA_TYPE.to_string()))?;
        Self::from_json(&raw)
    }

    /// Like [`DragPayload::read_from`], but absent or unreadable data is just `None`.
    pub fn decode_from<T: DataTransfer + ?Sized>(transfer: &mut T) -> Option<Self> {
        Self::read_from(transfer).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_tags() {
        let json = DragPayload::palette(FieldType::Select, "Pick").to_json();
        assert_eq!(json, r#"{"kind":"palette","type":"select","label":"Pick"}"#);
        let json = DragPayload::reorder(3).to_json();
        assert_eq!(json, r#"{"kind":"reorder","fromIndex":3}"#);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = DragPayload::from_json(r#"{"kind":"resize","fromIndex":1}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
    }

    #[test]
    fn legacy_to_index_is_ignored() {
        let payload =
            DragPayload::from_json(r#"{"kind":"reorder","fromIndex":1,"toIndex":1}"#).unwrap();
        assert_eq!(payload, DragPayload::reorder(1));
    }
}
