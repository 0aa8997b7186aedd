use crate::field::FieldType;
use crate::payload::DragPayload;

/// One draggable entry in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub field_type: FieldType,
    pub label: String,
}

impl PaletteEntry {
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            label: label.into(),
        }
    }

    /// The payload attached when this entry starts a drag.
    pub fn payload(&self) -> DragPayload {
        DragPayload::palette(self.field_type, self.label.clone())
    }
}

/// The field types offered for dragging onto the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Index of the entry with this type tag (`"select"`) or, failing that, label.
    pub fn position(&self, key: &str) -> Option<usize> {
        let by_type = key.parse::<FieldType>().ok();
        self.entries
            .iter()
            .position(|entry| Some(entry.field_type) == by_type)
            .or_else(|| self.entries.iter().position(|entry| entry.label == key))
    }

    pub fn payload_for(&self, index: usize) -> Option<DragPayload> {
        self.get(index).map(PaletteEntry::payload)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            PaletteEntry::new(FieldType::Text, "Text"),
            PaletteEntry::new(FieldType::Number, "Number"),
            PaletteEntry::new(FieldType::Date, "Date"),
            PaletteEntry::new(FieldType::Select, "Select"),
        ])
    }
}
