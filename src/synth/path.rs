use crate::error::SynthesisError;
use crate::graph::{BlockNode, Flowchart};
use ahash::{AHashMap, AHashSet};

/// Walks the chart from its start block and returns the executable body
/// blocks in path order.
///
/// Start and end blocks delimit the walk but never appear in the result.
/// Revisiting any block ends the walk silently, so a cycle reachable from
/// the start yields a finite prefix instead of looping. Blocks not on the
/// path are excluded: a diagram may carry disconnected decoration.
pub fn linearize(chart: &Flowchart) -> Result<Vec<&BlockNode>, SynthesisError> {
    let start = chart.start_node().ok_or(SynthesisError::MissingStart)?;

    let by_id: AHashMap<&str, &BlockNode> = chart
        .nodes()
        .iter()
        .map(|n| (n.id.as_str(), n))
        .collect();

    // The last connection registered for a source wins. `Flowchart::connect`
    // refuses a second outgoing edge, but imported documents may still carry
    // one per the permissive import contract.
    let mut successor: AHashMap<&str, &str> = AHashMap::new();
    for conn in chart.connections() {
        successor.insert(conn.from.as_str(), conn.to.as_str());
    }

    let mut ordered = Vec::new();
    let mut visited = AHashSet::new();
    let mut current = Some(start);

    while let Some(node) = current {
        if !visited.insert(node.id.as_str()) {
            log::debug!("linearization truncated at revisited block '{}'", node.id);
            break;
        }
        if !node.kind.is_terminal() {
            ordered.push(node);
        }
        current = successor
            .get(node.id.as_str())
            .and_then(|next| by_id.get(next).copied());
    }

    Ok(ordered)
}
