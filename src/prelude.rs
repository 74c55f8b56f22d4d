//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the fluxo
//! crate, so a host application can pull in the whole derivation surface
//! with a single `use fluxo::prelude::*;`.

// Graph model
pub use crate::graph::{
    BlockNode, ConnectOutcome, Connection, DEFAULT_ALGORITHM_NAME, Flowchart, Position,
    SymbolKind, VariableKind,
};

// Derivations
pub use crate::synth::{Variable, VariableTable, infer_variables, linearize, synthesize};
pub use crate::trace::{TraceTable, build_trace};

// Persistence
pub use crate::document::{Document, IntoChart};

// Assist capability
pub use crate::assist::{TextGenerator, explain_code, propose_problem};

// Notices
pub use crate::notify::{Notice, NoticeQueue, Severity};

// Error types
pub use crate::error::{AssistError, DocumentError, SynthesisError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
