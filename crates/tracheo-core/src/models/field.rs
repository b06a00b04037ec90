use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionId;

/// Primitive type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldType {
    /// Free text, including numeric strings.
    Text,
    /// Calendar date entered as `DD/MM/YYYY`.
    Date,
    /// Exactly one tag out of the field's options.
    Enum,
    /// One or more tags out of the field's options.
    MultiEnum,
}

impl FieldType {
    /// The value a field of this type is reset to when cleared.
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldType::Text | FieldType::Date | FieldType::Enum => FieldValue::Text(String::new()),
            FieldType::MultiEnum => FieldValue::Tags(Vec::new()),
        }
    }
}

/// Static description of one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    pub id: &'static str,
    pub section: SectionId,
    pub label: &'static str,
    pub field_type: FieldType,
    pub statically_required: bool,
    /// Allowed tags for `Enum` and `MultiEnum` fields. Empty otherwise.
    pub options: &'static [&'static str],
}

impl FieldDefinition {
    pub fn allows(&self, tag: &str) -> bool {
        self.options.contains(&tag)
    }
}

/// A value held by a field.
///
/// A field that was never touched has no entry at all in a [`FieldValues`]
/// map; a visited-but-empty field holds an empty string or empty array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// True for blank text and empty tag lists.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.trim()),
            FieldValue::Tags(_) => None,
        }
    }

    /// Equality for scalars, membership for tag lists.
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.trim() == tag,
            FieldValue::Tags(tags) => tags.iter().any(|t| t == tag),
        }
    }
}

/// Field id → value, the shape of every field buffer.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// Present and non-empty.
pub fn is_filled(values: &FieldValues, field_id: &str) -> bool {
    values.get(field_id).is_some_and(|v| !v.is_empty())
}
