use crate::graph::{Flowchart, SymbolKind, VariableKind};
use once_cell::sync::Lazy;
use regex::Regex;

// Matches the target of an assignment-shaped process block: "   name <-".
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z0-9_]+)\s*<-").expect("assignment pattern is valid"));

/// A discovered variable and its inferred VisuAlg type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
}

/// Inferred variables in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<Variable>,
}

impl VariableTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|v| v.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.iter().find(|v| v.name == name)
    }

    /// Inserts the name, or updates the kind of an existing entry in place.
    /// The entry keeps its first-discovery position.
    fn declare(&mut self, name: &str, kind: VariableKind) {
        match self.entries.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.kind = kind,
            None => self.entries.push(Variable {
                name: name.to_string(),
                kind,
            }),
        }
    }

    /// Inserts the name only if it is not already present, so an earlier
    /// declaration keeps its kind.
    fn declare_weak(&mut self, name: &str, kind: VariableKind) {
        if self.get(name).is_none() {
            self.entries.push(Variable {
                name: name.to_string(),
                kind,
            });
        }
    }
}

/// Scans every block of the chart and builds the variable table.
///
/// Input blocks declare each comma-separated name with the block's variable
/// kind (defaulting to `caractere`). Process blocks contribute their
/// assignment target with the block's kind (defaulting to `real`) only when
/// the name is not already present: an input declaration always wins over a
/// process-inferred type for the same name.
pub fn infer_variables(chart: &Flowchart) -> VariableTable {
    let mut table = VariableTable::default();
    for node in chart.nodes() {
        match node.kind {
            SymbolKind::Input => {
                for name in split_declarations(&node.text) {
                    table.declare(name, node.variable_kind_or_default());
                }
            }
            SymbolKind::Process => {
                if let Some(target) = assignment_target(&node.text) {
                    table.declare_weak(target, node.variable_kind_or_default());
                }
            }
            _ => {}
        }
    }
    table
}

/// The comma-separated names of an input block, trimmed, empties dropped.
pub fn split_declarations(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// The left-hand identifier of an assignment-shaped text, or `None` when the
/// text does not match. A non-matching process block simply contributes no
/// variable; that is not an error.
pub fn assignment_target(text: &str) -> Option<&str> {
    ASSIGNMENT
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The raw text after the first assignment token, trimmed. Purely textual;
/// the engine never evaluates it.
pub fn assignment_value(text: &str) -> Option<&str> {
    text.split_once("<-").map(|(_, rhs)| rhs.trim())
}
