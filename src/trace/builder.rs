use super::TraceTable;
use crate::error::SynthesisError;
use crate::graph::{Flowchart, SymbolKind};
use crate::synth::{assignment_target, assignment_value, infer_variables, linearize, split_declarations};

/// Builds the trace table for a chart.
///
/// The same ordered sequence that feeds code synthesis is re-walked with a
/// mutable symbolic state per variable. Values are text, never evaluated:
/// an input step sets each declared name to the placeholder `[name]`, and a
/// process step sets its target to the raw right-hand side of the
/// assignment. Process text that does not match the assignment shape
/// changes no state but still occupies a step row.
pub fn build_trace(chart: &Flowchart) -> Result<TraceTable, SynthesisError> {
    let ordered = linearize(chart)?;
    let variables = infer_variables(chart);
    let names: Vec<&str> = variables.names().collect();

    let mut headers = Vec::with_capacity(names.len() + 4);
    headers.push("Passo".to_string());
    headers.push("Linha".to_string());
    headers.extend(names.iter().map(|name| name.to_string()));
    headers.push("Saída".to_string());
    headers.push("Explicação".to_string());

    let output_col = headers.len() - 2;
    let explain_col = headers.len() - 1;

    let mut state: Vec<Option<String>> = vec![None; names.len()];
    let mut rows = Vec::with_capacity(ordered.len());

    // The body starts after the three fixed program lines plus one
    // declaration line per variable.
    let mut line = 3 + names.len();

    for (index, node) in ordered.iter().enumerate() {
        let mut row: Vec<Option<String>> = vec![None; headers.len()];
        row[0] = Some((index + 1).to_string());
        row[1] = Some(line.to_string());
        for (slot, value) in state.iter().enumerate() {
            row[slot + 2] = value.clone();
        }

        match node.kind {
            SymbolKind::Input => {
                for name in split_declarations(&node.text) {
                    if let Some(slot) = names.iter().position(|n| *n == name) {
                        let value = format!("[{}]", name);
                        state[slot] = Some(value.clone());
                        row[slot + 2] = Some(value);
                    }
                }
                row[explain_col] =
                    Some(format!("Lê entrada do utilizador para {}.", node.text));
            }
            SymbolKind::Process => {
                if let (Some(target), Some(value)) =
                    (assignment_target(&node.text), assignment_value(&node.text))
                {
                    if let Some(slot) = names.iter().position(|n| *n == target) {
                        state[slot] = Some(value.to_string());
                        row[slot + 2] = Some(value.to_string());
                    }
                }
                row[explain_col] = Some(format!("Executa o processamento: {}.", node.text));
            }
            SymbolKind::Display | SymbolKind::Write => {
                let command = if node.kind == SymbolKind::Display {
                    "escreval"
                } else {
                    "escreva"
                };
                row[output_col] = Some(format!("{{{}}}", node.text));
                row[explain_col] = Some(format!(
                    "Exibe o conteúdo de {} ({}).",
                    node.text, command
                ));
            }
            SymbolKind::Start | SymbolKind::End => {}
        }

        rows.push(row);
        line += 1;
    }

    Ok(TraceTable { headers, rows })
}
