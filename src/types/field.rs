//! Field schema definitions.

use serde::Serialize;

/// Primitive type of a collection field, serialized as PocketBase's type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// `email`
    Email,
    /// `bool`
    Bool,
    /// `password`, only meaningful on auth collections.
    Password,
    /// `text`
    Text,
    /// `number`
    Number,
    /// `select`, constrained by [`SelectOptions`].
    Select,
    /// `json`
    Json,
}

impl FieldType {
    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Bool => "bool",
            FieldType::Password => "password",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Json => "json",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field's default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Number(i64),
    /// Text default.
    Text(&'static str),
}

/// Allowed values of a `select` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptions {
    /// Maximum number of values a record may select.
    pub max_select: u32,
    /// The allowed values, in display order.
    pub values: &'static [&'static str],
}

/// One field of a collection schema.
///
/// Flags that are `false` and unset defaults are left out of the serialized
/// form, matching what the admin API expects in a creation body.
///
/// ```rust
/// use pocketbase_bootstrap::types::{FieldSpec, FieldType};
///
/// const EMAIL: FieldSpec = FieldSpec::new("email", FieldType::Email).required().unique();
///
/// let json = serde_json::to_value(EMAIL).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({"name": "email", "type": "email", "required": true, "unique": true})
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name, unique within its collection.
    pub name: &'static str,
    /// Field type.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Whether a value must be present.
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    /// Whether values must be unique across records.
    #[serde(skip_serializing_if = "is_false")]
    pub unique: bool,
    /// Whether the field is never exposed to API clients.
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Select constraints, present only for `select` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SelectOptions>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FieldSpec {
    /// Creates an optional, visible, non-unique field.
    pub const fn new(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: false,
            unique: false,
            hidden: false,
            default: None,
            options: None,
        }
    }

    /// Creates a `select` field allowing up to `max_select` of `values`.
    pub const fn select(name: &'static str, max_select: u32, values: &'static [&'static str]) -> Self {
        let mut field = Self::new(name, FieldType::Select);
        field.options = Some(SelectOptions { max_select, values });
        field
    }

    /// Marks the field required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field hidden from API clients.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub const fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }
}
