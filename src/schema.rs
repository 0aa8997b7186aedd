use crate::field::Field;
use serde_json::Value;

/// Renders the field sequence for the live schema preview.
pub struct SchemaPreview;

impl SchemaPreview {
    /// Pretty JSON with 2-space indentation and keys in the order
    /// `id, type, label, required, options`. Undefined options are omitted.
    pub fn render(fields: &[Field]) -> String {
        serde_json::to_string_pretty(fields).unwrap_or_else(|_| "[]".to_string())
    }

    /// Single-line rendering, handy for logs and compact CLI output.
    pub fn render_compact(fields: &[Field]) -> String {
        serde_json::to_string(fields).unwrap_or_else(|_| "[]".to_string())
    }

    /// Structured form of the preview. Object keys come back sorted.
    pub fn to_value(fields: &[Field]) -> Value {
        serde_json::to_value(fields).unwrap_or(Value::Array(Vec::new()))
    }
}
