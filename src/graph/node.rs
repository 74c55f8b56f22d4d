use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The closed set of block shapes a flowchart can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Start,
    End,
    Input,
    Process,
    Display,
    Write,
}

impl SymbolKind {
    /// Placeholder label shown on a freshly created block.
    pub fn default_label(self) -> &'static str {
        match self {
            SymbolKind::Start => "Início",
            SymbolKind::End => "Fim",
            SymbolKind::Input => "Entrada (leia)",
            SymbolKind::Process => "Processo (<-)",
            SymbolKind::Display => "Saída (escreval)",
            SymbolKind::Write => "Saída (escreva)",
        }
    }

    /// Variable kind assumed when a block of this shape declares none.
    pub fn default_variable_kind(self) -> VariableKind {
        match self {
            SymbolKind::Input => VariableKind::Caractere,
            _ => VariableKind::Real,
        }
    }

    /// Start and end blocks delimit the path but emit no statement.
    pub fn is_terminal(self) -> bool {
        matches!(self, SymbolKind::Start | SymbolKind::End)
    }
}

/// VisuAlg variable types a block can declare for its variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Real,
    Inteiro,
    Caractere,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            VariableKind::Real => "real",
            VariableKind::Inteiro => "inteiro",
            VariableKind::Caractere => "caractere",
        };
        write!(f, "{}", tag)
    }
}

/// On-canvas placement of a block. Irrelevant to synthesis; preserved for the
/// host UI and for document round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single flowchart block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub id: String,
    pub kind: SymbolKind,
    pub text: String,
    pub variable_kind: Option<VariableKind>,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

impl BlockNode {
    /// Creates a block with a fresh id and the kind's placeholder label.
    pub fn new(kind: SymbolKind) -> Self {
        Self::with_id(fresh_id(), kind)
    }

    /// Creates a block with a caller-supplied id (import path and tests).
    pub fn with_id(id: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: kind.default_label().to_string(),
            variable_kind: Some(kind.default_variable_kind()),
            position: Position { x: 100.0, y: 100.0 },
            width: 180.0,
            height: 80.0,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_variable_kind(mut self, kind: VariableKind) -> Self {
        self.variable_kind = Some(kind);
        self
    }

    /// The variable kind inference uses when none was declared.
    pub fn variable_kind_or_default(&self) -> VariableKind {
        self.variable_kind
            .unwrap_or_else(|| self.kind.default_variable_kind())
    }
}

/// Collision-resistant short identifier for blocks, connections and notices.
pub(crate) fn fresh_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..8].to_string()
}
