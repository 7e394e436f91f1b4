//! Database engines a diagram can target, and what each one supports.

use serde::{Deserialize, Serialize};

/// Database engine selected for a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    /// Engine-agnostic diagram.
    #[default]
    Generic,
    MySql,
    PostgreSql,
    Sqlite,
    MariaDb,
    /// Microsoft SQL Server.
    TransactSql,
    OracleSql,
}

/// Optional schema features an engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineCapabilities {
    /// User-defined composite types.
    pub has_types: bool,
    /// Enum types.
    pub has_enums: bool,
}

impl DatabaseEngine {
    /// All known engines.
    pub const ALL: [DatabaseEngine; 7] = [
        DatabaseEngine::Generic,
        DatabaseEngine::MySql,
        DatabaseEngine::PostgreSql,
        DatabaseEngine::Sqlite,
        DatabaseEngine::MariaDb,
        DatabaseEngine::TransactSql,
        DatabaseEngine::OracleSql,
    ];

    /// Capability descriptor for this engine.
    pub fn capabilities(self) -> EngineCapabilities {
        match self {
            DatabaseEngine::Generic | DatabaseEngine::PostgreSql => EngineCapabilities {
                has_types: true,
                has_enums: true,
            },
            DatabaseEngine::MySql
            | DatabaseEngine::Sqlite
            | DatabaseEngine::MariaDb
            | DatabaseEngine::TransactSql
            | DatabaseEngine::OracleSql => EngineCapabilities::default(),
        }
    }
}
