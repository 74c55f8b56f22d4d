//! Common test utilities for building flowcharts.
use fluxo::prelude::*;

/// Builds the canonical sum example:
/// start → input("a, b") → process("soma <- a + b") → display("soma") → end.
#[allow(dead_code)]
pub fn sum_chart() -> Flowchart {
    let mut chart = Flowchart::new();
    chart.set_name("X");
    chart.insert_node(BlockNode::with_id("start", SymbolKind::Start));
    chart.insert_node(BlockNode::with_id("read", SymbolKind::Input).with_text("a, b"));
    chart.insert_node(BlockNode::with_id("calc", SymbolKind::Process).with_text("soma <- a + b"));
    chart.insert_node(BlockNode::with_id("show", SymbolKind::Display).with_text("soma"));
    chart.insert_node(BlockNode::with_id("end", SymbolKind::End));
    connect_path(&mut chart, &["start", "read", "calc", "show", "end"]);
    chart
}

/// Connects consecutive ids with directed edges, asserting each succeeds.
#[allow(dead_code)]
pub fn connect_path(chart: &mut Flowchart, ids: &[&str]) {
    for pair in ids.windows(2) {
        assert!(
            chart.connect(pair[0], pair[1]).is_connected(),
            "failed to connect {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

/// A chart with no start block at all.
#[allow(dead_code)]
pub fn startless_chart() -> Flowchart {
    let mut chart = Flowchart::new();
    chart.insert_node(BlockNode::with_id("calc", SymbolKind::Process).with_text("x <- 1"));
    chart.insert_node(BlockNode::with_id("end", SymbolKind::End));
    chart.connect("calc", "end");
    chart
}
