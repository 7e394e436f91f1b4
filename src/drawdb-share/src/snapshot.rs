//! Building the portable snapshot of a diagram.

use crate::database::{DatabaseEngine, EngineCapabilities};
use crate::model::{Area, EnumDefinition, Note, Relationship, Table, TypeDefinition};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Editing-session state a snapshot is built from.
#[derive(Debug, Clone, Default)]
pub struct DiagramSession {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
    pub notes: Vec<Note>,
    pub areas: Vec<Area>,
    pub database: DatabaseEngine,
    pub types: Vec<TypeDefinition>,
    pub enums: Vec<EnumDefinition>,
}

/// Serializable state of one diagram at a point in time.
///
/// `types` and `enums` are `None` exactly when the engine lacks the
/// capability, and are then absent from the JSON rather than `null` or `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSnapshot {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub subject_areas: Vec<Area>,
    #[serde(default)]
    pub database: DatabaseEngine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TypeDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enums: Option<Vec<EnumDefinition>>,
    #[serde(default)]
    pub title: String,
}

impl DiagramSnapshot {
    /// Assemble a snapshot from the session.
    pub fn build(session: &DiagramSession, title: &str) -> Self {
        let EngineCapabilities {
            has_types,
            has_enums,
        } = session.database.capabilities();

        Self {
            tables: session.tables.clone(),
            relationships: session.relationships.clone(),
            notes: session.notes.clone(),
            subject_areas: session.areas.clone(),
            database: session.database,
            types: has_types.then(|| session.types.clone()),
            enums: has_enums.then(|| session.enums.clone()),
            title: title.to_string(),
        }
    }

    /// Content blob stored in the remote record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a content blob fetched from the remote store.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Turn a loaded snapshot back into session state and its title.
    pub fn into_session(self) -> (DiagramSession, String) {
        let session = DiagramSession {
            tables: self.tables,
            relationships: self.relationships,
            notes: self.notes,
            areas: self.subject_areas,
            database: self.database,
            types: self.types.unwrap_or_default(),
            enums: self.enums.unwrap_or_default(),
        };
        (session, self.title)
    }
}
