pub mod code;
pub mod path;
pub mod vars;

pub use code::*;
pub use path::*;
pub use vars::*;

use crate::error::SynthesisError;
use crate::graph::Flowchart;

/// Derives the complete VisuAlg program for a chart.
///
/// Fails with [`SynthesisError::MissingStart`] before producing any output;
/// there is no partial program on error.
pub fn synthesize(chart: &Flowchart) -> Result<String, SynthesisError> {
    let ordered = path::linearize(chart)?;
    let variables = vars::infer_variables(chart);
    Ok(code::emit_program(chart.name(), &ordered, &variables))
}
