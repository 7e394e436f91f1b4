//! Diagram entities as they appear in a shared document.
//!
//! Every entity keeps keys it does not know about in `extra`, and the
//! relationship enums keep values they do not know about in `Other`, so
//! documents written by older or newer editors survive being loaded and
//! shared again. The database engine tag is the exception: an unknown
//! engine has no known capabilities and the document is rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a diagram entity. Older documents use numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Number(0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

/// A table on the canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    pub id: EntityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub fields: Vec<Field>,
    pub comment: String,
    pub indices: Vec<Index>,
    pub color: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A column of a table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub default: String,
    pub check: String,
    pub primary: bool,
    pub unique: bool,
    pub not_null: bool,
    pub increment: bool,
    pub comment: String,
    /// Length or precision, e.g. `255` or `"10,2"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    /// Allowed values for inline ENUM/SET columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Index over one or more fields, by field name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Index {
    pub id: EntityId,
    pub name: String,
    pub unique: bool,
    pub fields: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    #[serde(alias = "One to one")]
    OneToOne,
    #[serde(alias = "One to many")]
    OneToMany,
    #[serde(alias = "Many to one")]
    ManyToOne,
    /// Value written by an editor this crate does not know about.
    #[serde(untagged)]
    Other(String),
}

/// Referential action on update/delete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Constraint {
    #[default]
    #[serde(rename = "No action")]
    NoAction,
    Restrict,
    Cascade,
    #[serde(rename = "Set null")]
    SetNull,
    #[serde(rename = "Set default")]
    SetDefault,
    #[serde(untagged)]
    Other(String),
}

/// Foreign key between two table fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationship {
    pub id: EntityId,
    pub name: String,
    pub start_table_id: EntityId,
    pub start_field_id: EntityId,
    pub end_table_id: EntityId,
    pub end_field_id: EntityId,
    pub cardinality: Cardinality,
    pub update_constraint: Constraint,
    pub delete_constraint: Constraint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Free-form sticky note.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub content: String,
    pub color: String,
    pub height: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Subject area grouping tables visually.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Area {
    pub id: EntityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member of a user-defined composite type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User-defined composite type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<TypeField>,
    pub comment: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Named enum type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumDefinition {
    pub name: String,
    pub values: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}
