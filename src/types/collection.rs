//! Collection schema definitions.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::field::{FieldSpec, FieldType};
use crate::{Error, Result};

/// Collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Auth-capable collection (`users`-style records that can log in).
    Auth,
    /// Plain data collection.
    Base,
}

/// One access rule of a collection.
///
/// | Variant   | Wire form              | Meaning                          |
/// |-----------|------------------------|----------------------------------|
/// | `Unset`   | key omitted            | service default (admin only)     |
/// | `Open`    | `null`                 | unrestricted                     |
/// | `Expr(s)` | `"s"`                  | PocketBase filter expression     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Not sent at all.
    #[default]
    Unset,
    /// Sent as `null`.
    Open,
    /// Sent as a filter expression.
    Expr(&'static str),
}

impl Rule {
    /// Returns `true` if the rule is left out of the serialized body.
    pub fn is_unset(&self) -> bool {
        matches!(self, Rule::Unset)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Rule::Unset | Rule::Open => serializer.serialize_none(),
            Rule::Expr(expr) => serializer.serialize_str(expr),
        }
    }
}

/// The five access rules of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRules {
    /// Who may create records.
    #[serde(skip_serializing_if = "Rule::is_unset")]
    pub create_rule: Rule,
    /// Who may update records.
    #[serde(skip_serializing_if = "Rule::is_unset")]
    pub update_rule: Rule,
    /// Who may delete records.
    #[serde(skip_serializing_if = "Rule::is_unset")]
    pub delete_rule: Rule,
    /// Who may list records.
    #[serde(skip_serializing_if = "Rule::is_unset")]
    pub list_rule: Rule,
    /// Who may view a single record.
    #[serde(skip_serializing_if = "Rule::is_unset")]
    pub view_rule: Rule,
}

impl AccessRules {
    /// All five rules unrestricted.
    pub const OPEN: Self = Self {
        create_rule: Rule::Open,
        update_rule: Rule::Open,
        delete_rule: Rule::Open,
        list_rule: Rule::Open,
        view_rule: Rule::Open,
    };

    /// All five rules unset.
    pub const UNSET: Self = Self {
        create_rule: Rule::Unset,
        update_rule: Rule::Unset,
        delete_rule: Rule::Unset,
        list_rule: Rule::Unset,
        view_rule: Rule::Unset,
    };
}

/// Authentication options of an auth collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
    /// Email/password login.
    pub allow_email_auth: bool,
    /// OAuth2 login.
    #[serde(rename = "allowOAuth2Auth")]
    pub allow_oauth2_auth: bool,
    /// Username/password login.
    pub allow_username_auth: bool,
    /// Minimum password length.
    pub min_password_length: u32,
    /// Whether an email address is mandatory.
    pub require_email: bool,
}

/// A complete, immutable collection definition.
///
/// Serializes to the body of `POST /collections`:
///
/// ```rust
/// use pocketbase_bootstrap::types::{AccessRules, CollectionKind, CollectionSpec, FieldSpec, FieldType};
///
/// static NOTES: CollectionSpec = CollectionSpec {
///     name: "notes",
///     kind: CollectionKind::Base,
///     rules: AccessRules::OPEN,
///     options: None,
///     fields: &[FieldSpec::new("body", FieldType::Text).required()],
/// };
///
/// let body = NOTES.to_json().unwrap();
/// assert_eq!(body["type"], "base");
/// assert!(body["listRule"].is_null());
/// assert!(body.get("options").is_none());
/// NOTES.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollectionSpec {
    /// Collection name.
    pub name: &'static str,
    /// Collection kind.
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    /// Access rules.
    #[serde(flatten)]
    pub rules: AccessRules,
    /// Auth options, only for auth collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AuthOptions>,
    /// Ordered field list.
    pub fields: &'static [FieldSpec],
}

impl CollectionSpec {
    /// Serializes the spec to the JSON creation body.
    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| {
            Error::invalid_argument(format!("Failed to serialize collection {}: {}", self.name, e))
                .with_source(e)
        })
    }

    /// Checks the invariants the type system does not enforce.
    ///
    /// Fails with `InvalidArgument` naming the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("collection name must not be empty"));
        }

        if self.options.is_some() && self.kind != CollectionKind::Auth {
            return Err(self.violation("auth options on a non-auth collection"));
        }

        let mut seen = BTreeSet::new();
        for field in self.fields {
            if field.name.trim().is_empty() {
                return Err(self.violation("field with an empty name"));
            }
            if !seen.insert(field.name) {
                return Err(self.violation(format!("duplicate field {:?}", field.name)));
            }

            match (field.kind, field.options) {
                (FieldType::Select, None) => {
                    return Err(
                        self.violation(format!("select field {:?} has no options", field.name))
                    );
                }
                (FieldType::Select, Some(options)) => {
                    let values: BTreeSet<_> = options.values.iter().collect();
                    if values.len() != options.values.len() {
                        return Err(self.violation(format!(
                            "select field {:?} repeats a value",
                            field.name
                        )));
                    }
                    if options.max_select == 0 || options.max_select as usize > values.len() {
                        return Err(self.violation(format!(
                            "select field {:?} has maxSelect {} for {} values",
                            field.name,
                            options.max_select,
                            values.len()
                        )));
                    }
                }
                (_, Some(_)) => {
                    return Err(self.violation(format!(
                        "{} field {:?} carries select options",
                        field.kind, field.name
                    )));
                }
                (_, None) => {}
            }
        }

        Ok(())
    }

    fn violation(&self, detail: impl std::fmt::Display) -> Error {
        Error::invalid_argument(format!("collection {:?}: {}", self.name, detail))
    }
}
