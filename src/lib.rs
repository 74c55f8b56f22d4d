//! # Fluxo - Flowchart Compilation and Trace Engine
//!
//! **Fluxo** is the derivation core of a block-diagram editor for the VisuAlg
//! pseudocode dialect. It takes a flowchart (a set of typed blocks connected
//! by directed edges) and derives three artifacts from it:
//!
//! 1. an ordered instruction sequence (linearization),
//! 2. a VisuAlg program with an inferred variable declaration block,
//! 3. a symbolic trace table ("teste de mesa") with one row per step.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical [`Flowchart`](graph::Flowchart) model.
//! The primary workflow is:
//!
//! 1. **Build or Load a Chart**: mutate a `Flowchart` through its methods, or
//!    import a saved [`Document`](document::Document) (the editor's JSON
//!    format). Hosts with their own persistence shape implement the
//!    [`IntoChart`](document::IntoChart) trait instead.
//! 2. **Synthesize**: [`synth::synthesize`] walks the chart from its start
//!    block and renders the VisuAlg program.
//! 3. **Trace**: [`trace::build_trace`] re-walks the same path and simulates
//!    variable state symbolically, producing a tabular record.
//! 4. **Assist** (optional): hand the generated program to a
//!    [`TextGenerator`](assist::TextGenerator) implementation to obtain
//!    natural-language explanations or practice problems.
//!
//! All derivations are pure functions of the chart snapshot: they take
//! `&Flowchart` and never mutate it, so a host may keep editing while a slow
//! external call is in flight as long as it hands the engine its own copy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fluxo::prelude::*;
//!
//! fn main() -> fluxo::prelude::Result<()> {
//!     let mut chart = Flowchart::new();
//!     chart.set_name("Soma");
//!
//!     let start = chart.add_node(SymbolKind::Start).id.clone();
//!     let input = chart.add_node(SymbolKind::Input).id.clone();
//!     let process = chart.add_node(SymbolKind::Process).id.clone();
//!     let display = chart.add_node(SymbolKind::Display).id.clone();
//!     let end = chart.add_node(SymbolKind::End).id.clone();
//!
//!     chart.set_text(&input, "a, b");
//!     chart.set_text(&process, "soma <- a + b");
//!     chart.set_text(&display, "soma");
//!
//!     chart.connect(&start, &input);
//!     chart.connect(&input, &process);
//!     chart.connect(&process, &display);
//!     chart.connect(&display, &end);
//!
//!     let code = synthesize(&chart)?;
//!     println!("{}", code);
//!
//!     let trace = build_trace(&chart)?;
//!     println!("{}", trace);
//!
//!     Ok(())
//! }
//! ```

pub mod assist;
pub mod document;
pub mod error;
pub mod graph;
pub mod notify;
pub mod prelude;
pub mod synth;
pub mod trace;
