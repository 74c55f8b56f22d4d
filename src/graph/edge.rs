use super::node::fresh_id;

/// A directed link between two blocks.
///
/// Connections hold endpoints by id only; they are pruned when either
/// endpoint is removed from the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
}

impl Connection {
    /// Creates a connection with a fresh id.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::with_id(fresh_id(), from, to)
    }

    /// Creates a connection with a caller-supplied id (import path).
    pub fn with_id(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether the connection references the given block on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }
}
