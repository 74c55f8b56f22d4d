mod builder;

pub use builder::build_trace;

use itertools::Itertools;
use std::fmt;

/// Placeholder rendered for a blank cell.
const BLANK_CELL: &str = "—";

/// A symbolic step-by-step execution record ("teste de mesa") of a
/// linearized chart.
///
/// The header row is `Passo, Linha, <one column per variable>, Saída,
/// Explicação`; each data row records one executed block. `None` cells are
/// blanks: a variable column stays blank until the row that sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TraceTable {
    /// Number of executed steps (data rows).
    pub fn step_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, headers included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

impl fmt::Display for TraceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headers.iter().join(" | "))?;
        for row in &self.rows {
            let line = row
                .iter()
                .map(|cell| match cell.as_deref() {
                    // Empty symbolic values render as blanks as well.
                    None | Some("") => BLANK_CELL,
                    Some(value) => value,
                })
                .join(" | ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
