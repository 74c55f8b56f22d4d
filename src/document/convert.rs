use super::schema::{Document, DocumentConnection, DocumentNode};
use crate::error::DocumentError;
use crate::graph::{BlockNode, Connection, Flowchart};

/// Conversion seam for host applications with their own persistence shape.
///
/// The engine only ever consumes a [`Flowchart`]; implement this trait on
/// your own deserialized structs to feed it without going through the
/// editor's JSON format.
pub trait IntoChart {
    /// Consumes the value and builds the canonical chart model.
    fn into_chart(self) -> Result<Flowchart, DocumentError>;
}

impl IntoChart for Document {
    fn into_chart(self) -> Result<Flowchart, DocumentError> {
        let mut chart = Flowchart::new();
        chart.set_name(self.algorithm_name);
        for node in self.nodes {
            chart.insert_node(BlockNode {
                id: node.id,
                kind: node.kind,
                text: node.text,
                variable_kind: node.variable_type,
                position: node.position,
                width: node.width,
                height: node.height,
            });
        }
        // Connections are restored verbatim, ids included.
        for connection in self.connections {
            chart.insert_connection(Connection::with_id(
                connection.id,
                connection.from,
                connection.to,
            ));
        }
        Ok(chart)
    }
}

impl From<&Flowchart> for Document {
    fn from(chart: &Flowchart) -> Self {
        Document {
            nodes: chart
                .nodes()
                .iter()
                .map(|node| DocumentNode {
                    id: node.id.clone(),
                    kind: node.kind,
                    text: node.text.clone(),
                    variable_type: node.variable_kind,
                    position: node.position,
                    width: node.width,
                    height: node.height,
                })
                .collect(),
            connections: chart
                .connections()
                .iter()
                .map(|connection| DocumentConnection {
                    id: connection.id.clone(),
                    from: connection.from.clone(),
                    to: connection.to.clone(),
                })
                .collect(),
            algorithm_name: chart.name().to_string(),
        }
    }
}
