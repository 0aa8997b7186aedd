use crate::error::FieldTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of input kinds a form field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
}

impl FieldType {
    /// All field types, in the order a palette offers them.
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Date,
        FieldType::Select,
    ];

    /// The wire tag of this type (`"text"`, `"number"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
        }
    }

    /// Whether fields of this type carry an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FieldTypeError::Unknown(s.to_string()))
    }
}

/// Opaque identity of a field. Generated once, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(raw: impl Into<String>) -> Self {
        FieldId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(raw: &str) -> Self {
        FieldId::new(raw)
    }
}

/// One configured form input.
///
/// `id` and `field_type` are fixed at construction. `options` is `Some` exactly
/// when the type is [`FieldType::Select`]; every mutation path keeps it that way.
/// Serialization emits keys in the order `id, type, label, required, options`
/// and omits `options` when it is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    id: FieldId,
    #[serde(rename = "type")]
    field_type: FieldType,
    label: String,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Field {
    /// Assembles a field, normalizing `options` against the type.
    ///
    /// A select field without options gets an empty list; any other type drops
    /// whatever options were passed in.
    pub(crate) fn new(
        id: FieldId,
        field_type: FieldType,
        label: String,
        required: bool,
        options: Option<Vec<String>>,
    ) -> Self {
        let options = if field_type.has_options() {
            Some(options.unwrap_or_default())
        } else {
            None
        };
        Self {
            id,
            field_type,
            label,
            required,
            options,
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    /// Merges a patch into this field. Returns `true` if anything changed.
    pub(crate) fn apply(&mut self, patch: &FieldPatch) -> bool {
        let mut changed = false;
        if let Some(label) = &patch.label {
            if *label != self.label {
                self.label = label.clone();
                changed = true;
            }
        }
        if let Some(required) = patch.required {
            if required != self.required {
                self.required = required;
                changed = true;
            }
        }
        // Options only exist on select fields.
        if let (Some(options), Some(current)) = (&patch.options, self.options.as_mut()) {
            if options != current {
                *current = options.clone();
                changed = true;
            }
        }
        changed
    }
}

/// A partial update of a field's mutable attributes.
///
/// Has no `type` or `id` member, so deserializing `{"type": "number"}`
/// yields an empty patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: Some(options.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Builds an options patch from the inspector's comma separated text input.
    pub fn options_from_csv(input: &str) -> Self {
        Self::options(
            input
                .split(',')
                .map(str::trim)
                .filter(|option| !option.is_empty()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.required.is_none() && self.options.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_select_fields_drop_options() {
        let field = Field::new(
            FieldId::from("a"),
            FieldType::Date,
            "When".to_string(),
            false,
            Some(vec!["x".to_string()]),
        );
        assert_eq!(field.options(), None);
    }

    #[test]
    fn options_patch_is_ignored_on_text_field() {
        let mut field = Field::new(
            FieldId::from("a"),
            FieldType::Text,
            String::new(),
            false,
            None,
        );
        assert!(!field.apply(&FieldPatch::options(["one"])));
        assert_eq!(field.options(), None);
    }

    #[test]
    fn csv_options_are_trimmed() {
        let patch = FieldPatch::options_from_csv(" Red, Green ,,Blue ");
        assert_eq!(
            patch.options,
            Some(vec![
                "Red".to_string(),
                "Green".to_string(),
                "Blue".to_string()
            ])
        );
    }
}
