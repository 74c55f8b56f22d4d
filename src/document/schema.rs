use crate::error::DocumentError;
use crate::graph::{DEFAULT_ALGORITHM_NAME, Position, SymbolKind, VariableKind};
use serde::{Deserialize, Serialize};

/// A saved flowchart document, matching the editor's JSON export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<DocumentNode>,
    pub connections: Vec<DocumentConnection>,
    #[serde(rename = "algorithmName", default = "default_algorithm_name")]
    pub algorithm_name: String,
}

fn default_algorithm_name() -> String {
    DEFAULT_ALGORITHM_NAME.to_string()
}

/// One block as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub text: String,
    #[serde(rename = "variableType", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableKind>,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

/// One directed connection as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConnection {
    pub id: String,
    pub from: String,
    pub to: String,
}

impl Document {
    /// Parses a saved document.
    ///
    /// Only the presence of the `nodes` and `connections` sections is
    /// validated up front; deeper shape problems surface as a plain parse
    /// error. Callers swap the resulting chart in atomically, leaving their
    /// current state untouched when this fails.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        for key in ["nodes", "connections"] {
            if value.get(key).is_none() {
                log::debug!("rejected document without '{}' section", key);
                return Err(DocumentError::MissingSection(key));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Loads a saved document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the document as pretty-printed JSON, the format the
    /// editor writes to disk.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
