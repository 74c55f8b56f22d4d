//! Tests for the symbolic trace table builder.
mod common;
use common::*;
use fluxo::prelude::*;
use pretty_assertions::assert_eq;

fn cell<'a>(table: &'a TraceTable, row: usize, col: usize) -> Option<&'a str> {
    table.rows[row][col].as_deref()
}

#[test]
fn test_sum_chart_trace_shape() {
    let chart = sum_chart();
    let trace = build_trace(&chart).expect("trace should build");

    assert_eq!(
        trace.headers,
        vec!["Passo", "Linha", "a", "b", "soma", "Saída", "Explicação"]
    );
    assert_eq!(trace.step_count(), 3);
}

#[test]
fn test_sum_chart_trace_rows() {
    let chart = sum_chart();
    let trace = build_trace(&chart).unwrap();

    // Step 1: the input row sets a and b; soma stays blank.
    assert_eq!(cell(&trace, 0, 0), Some("1"));
    assert_eq!(cell(&trace, 0, 1), Some("6")); // 3 header lines + 3 variables
    assert_eq!(cell(&trace, 0, 2), Some("[a]"));
    assert_eq!(cell(&trace, 0, 3), Some("[b]"));
    assert_eq!(cell(&trace, 0, 4), None);
    assert_eq!(cell(&trace, 0, 5), None);
    assert_eq!(cell(&trace, 0, 6), Some("Lê entrada do utilizador para a, b."));

    // Step 2: the process row assigns soma the raw right-hand text.
    assert_eq!(cell(&trace, 1, 0), Some("2"));
    assert_eq!(cell(&trace, 1, 1), Some("7"));
    assert_eq!(cell(&trace, 1, 2), Some("[a]"));
    assert_eq!(cell(&trace, 1, 3), Some("[b]"));
    assert_eq!(cell(&trace, 1, 4), Some("a + b"));
    assert_eq!(
        cell(&trace, 1, 6),
        Some("Executa o processamento: soma <- a + b.")
    );

    // Step 3: the display row touches no variable and fills the output.
    assert_eq!(cell(&trace, 2, 0), Some("3"));
    assert_eq!(cell(&trace, 2, 1), Some("8"));
    assert_eq!(cell(&trace, 2, 4), Some("a + b"));
    assert_eq!(cell(&trace, 2, 5), Some("{soma}"));
    assert_eq!(
        cell(&trace, 2, 6),
        Some("Exibe o conteúdo de soma (escreval).")
    );
}

#[test]
fn test_missing_start_produces_no_trace() {
    let chart = startless_chart();
    assert!(matches!(
        build_trace(&chart),
        Err(SynthesisError::MissingStart)
    ));
}

#[test]
fn test_write_block_output_and_explanation() {
    let mut chart = Flowchart::new();
    chart.insert_node(BlockNode::with_id("start", SymbolKind::Start));
    chart.insert_node(BlockNode::with_id("w", SymbolKind::Write).with_text("\"ok\""));
    chart.insert_node(BlockNode::with_id("end", SymbolKind::End));
    connect_path(&mut chart, &["start", "w", "end"]);

    let trace = build_trace(&chart).unwrap();
    assert_eq!(trace.step_count(), 1);
    // No variables: line counter starts right at 3.
    assert_eq!(cell(&trace, 0, 1), Some("3"));
    assert_eq!(cell(&trace, 0, 2), Some("{\"ok\"}"));
    assert_eq!(
        cell(&trace, 0, 3),
        Some("Exibe o conteúdo de \"ok\" (escreva).")
    );
}

#[test]
fn test_non_assignment_process_changes_no_state() {
    let mut chart = Flowchart::new();
    chart.insert_node(BlockNode::with_id("start", SymbolKind::Start));
    chart.insert_node(BlockNode::with_id("read", SymbolKind::Input).with_text("x"));
    chart.insert_node(BlockNode::with_id("p", SymbolKind::Process).with_text("sem atribuicao"));
    chart.insert_node(BlockNode::with_id("end", SymbolKind::End));
    connect_path(&mut chart, &["start", "read", "p", "end"]);

    let trace = build_trace(&chart).unwrap();
    assert_eq!(trace.step_count(), 2);
    // The malformed process step still occupies a row with an explanation,
    // but x keeps the value the input step gave it.
    assert_eq!(cell(&trace, 1, 2), Some("[x]"));
    assert_eq!(
        cell(&trace, 1, 4),
        Some("Executa o processamento: sem atribuicao.")
    );
}

#[test]
fn test_variable_columns_blank_until_their_setting_row() {
    let mut chart = Flowchart::new();
    chart.insert_node(BlockNode::with_id("start", SymbolKind::Start));
    chart.insert_node(BlockNode::with_id("r1", SymbolKind::Input).with_text("a"));
    chart.insert_node(BlockNode::with_id("r2", SymbolKind::Input).with_text("b"));
    chart.insert_node(BlockNode::with_id("end", SymbolKind::End));
    connect_path(&mut chart, &["start", "r1", "r2", "end"]);

    let trace = build_trace(&chart).unwrap();
    // Row 0 sets a; b is still blank there and appears in row 1.
    assert_eq!(cell(&trace, 0, 2), Some("[a]"));
    assert_eq!(cell(&trace, 0, 3), None);
    assert_eq!(cell(&trace, 1, 2), Some("[a]"));
    assert_eq!(cell(&trace, 1, 3), Some("[b]"));
}

#[test]
fn test_display_renders_blank_cells_as_dash() {
    let chart = sum_chart();
    let trace = build_trace(&chart).unwrap();
    let rendered = trace.to_string();

    assert!(rendered.starts_with("Passo | Linha | a | b | soma | Saída | Explicação\n"));
    assert!(rendered.contains("1 | 6 | [a] | [b] | — | — | Lê entrada do utilizador para a, b.\n"));
}
