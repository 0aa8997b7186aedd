use thiserror::Error;

/// Errors raised when a field type tag cannot be understood.
///
/// The factory itself only accepts [`crate::field::FieldType`] values, so this is
/// the caller-side rejection of anything a surface hands over as a raw string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldTypeError {
    #[error("Unknown field type tag '{0}', expected one of: text, number, date, select")]
    Unknown(String),
}

/// Errors that can occur while decoding a drag payload.
///
/// Drop sites never surface these; they collapse to a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Drag transfer carries no '{0}' data")]
    Missing(String),

    #[error("Malformed drag payload: {0}")]
    Malformed(String),
}

/// Errors that can occur while loading a gesture script.
#[derive(Error, Debug, Clone)]
pub enum ScriptError {
    #[error("Failed to parse gesture script JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read gesture script '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Gesture #{index} references palette entry '{entry}', which does not exist")]
    UnknownPaletteEntry { index: usize, entry: String },
}
