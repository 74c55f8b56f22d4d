use super::vars::VariableTable;
use crate::graph::{BlockNode, SymbolKind};
use itertools::Itertools;

/// Name used when the chart's algorithm name is blank.
pub const UNNAMED_ALGORITHM: &str = "SemNome";

/// Renders the VisuAlg statement for a body block, or `None` for the
/// terminal kinds which have no statement form.
fn statement(node: &BlockNode) -> Option<String> {
    match node.kind {
        SymbolKind::Input => Some(format!("   leia({})", node.text)),
        SymbolKind::Process => Some(format!("   {}", node.text)),
        SymbolKind::Display => Some(format!("   escreval({})", node.text)),
        SymbolKind::Write => Some(format!("   escreva({})", node.text)),
        SymbolKind::Start | SymbolKind::End => None,
    }
}

/// Renders the full VisuAlg program for an ordered block sequence.
///
/// The output shape is fixed: `algoritmo "<name>"`, the `var` block (one
/// line per variable, or a placeholder comment when the table is empty),
/// `inicio`, one line per body block, `fimalgoritmo`.
pub fn emit_program(name: &str, ordered: &[&BlockNode], variables: &VariableTable) -> String {
    let name = if name.is_empty() { UNNAMED_ALGORITHM } else { name };

    let mut declarations = String::new();
    if variables.is_empty() {
        declarations.push_str("   // Nenhuma variável declarada\n");
    } else {
        for variable in variables.iter() {
            declarations.push_str(&format!("   {}: {}\n", variable.name, variable.kind));
        }
    }

    let body = ordered.iter().filter_map(|node| statement(node)).join("\n") + "\n";

    format!(
        "algoritmo \"{}\"\nvar\n{}inicio\n{}fimalgoritmo\n",
        name, declarations, body
    )
}
