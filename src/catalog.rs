//! The collections this tool provisions.
//!
//! Order matters: collections are provisioned in the order listed here.

use crate::types::{
    AccessRules, AuthOptions, CollectionKind, CollectionSpec, DefaultValue, FieldSpec, FieldType,
    Rule,
};

/// Self-registration only for callers that are not already signed in.
const USERS_CREATE_RULE: &str = "!@externalAuthToken && !@collection.users.id && (@request.auth.id = null || (@request.auth.id ?= @collection.users.id))";

/// The record owner only.
const OWNER_RULE: &str = "@request.auth.id = id";

/// Auth-capable user accounts.
pub const USERS: CollectionSpec = CollectionSpec {
    name: "users",
    kind: CollectionKind::Auth,
    rules: AccessRules {
        create_rule: Rule::Expr(USERS_CREATE_RULE),
        update_rule: Rule::Expr(OWNER_RULE),
        delete_rule: Rule::Expr(OWNER_RULE),
        ..AccessRules::UNSET
    },
    options: Some(AuthOptions {
        allow_email_auth: true,
        allow_oauth2_auth: false,
        allow_username_auth: false,
        min_password_length: 8,
        require_email: true,
    }),
    fields: &[
        FieldSpec::new("email", FieldType::Email).required().unique(),
        FieldSpec::new("emailVisibility", FieldType::Bool)
            .hidden()
            .default_value(DefaultValue::Bool(false)),
        FieldSpec::new("password", FieldType::Password).hidden(),
        FieldSpec::new("tokenKey", FieldType::Text).hidden(),
        FieldSpec::new("verified", FieldType::Bool).default_value(DefaultValue::Bool(false)),
        FieldSpec::new("name", FieldType::Text),
    ],
};

/// Point-scoring behaviors.
pub const BEHAVIORS: CollectionSpec = CollectionSpec {
    name: "behaviors",
    kind: CollectionKind::Base,
    rules: AccessRules::OPEN,
    options: None,
    fields: &[
        FieldSpec::new("label", FieldType::Text).required(),
        FieldSpec::new("pts", FieldType::Number).required(),
        FieldSpec::select("type", 1, &["wow", "nono"]).required(),
        FieldSpec::new("icon", FieldType::Text),
    ],
};

/// Classes with their rosters.
pub const CLASSES: CollectionSpec = CollectionSpec {
    name: "classes",
    kind: CollectionKind::Base,
    rules: AccessRules::OPEN,
    options: None,
    fields: &[
        FieldSpec::new("name", FieldType::Text).required(),
        FieldSpec::new("teacher", FieldType::Text).required(),
        FieldSpec::new("students", FieldType::Json),
        FieldSpec::new("tasks", FieldType::Json),
    ],
};

/// Every provisioned collection, in provisioning order.
pub static CATALOG: [CollectionSpec; 3] = [USERS, BEHAVIORS, CLASSES];
