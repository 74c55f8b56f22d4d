use super::edge::Connection;
use super::node::{BlockNode, SymbolKind, VariableKind};

/// Algorithm name a new chart starts with.
pub const DEFAULT_ALGORITHM_NAME: &str = "MeuAlgoritmo";

/// Result of a [`Flowchart::connect`] request.
///
/// Rejections never mutate the chart; the variant names which rule fired so
/// the host can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    /// Source and destination are the same block.
    SelfLoop,
    /// An identical ordered (from, to) pair already exists.
    Duplicate,
    /// The source block already has an outgoing connection.
    SourceOccupied,
    /// One of the endpoints does not exist in the chart.
    UnknownEndpoint,
}

impl ConnectOutcome {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectOutcome::Connected)
    }
}

/// The editor model: algorithm name, blocks, and their directed connections.
///
/// All mutation goes through the methods below. Synthesis and tracing take
/// the chart by shared reference and never modify it, so the chart value
/// itself is the immutable snapshot those derivations operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct Flowchart {
    name: String,
    nodes: Vec<BlockNode>,
    connections: Vec<Connection>,
}

impl Default for Flowchart {
    fn default() -> Self {
        Self::new()
    }
}

impl Flowchart {
    /// Creates an empty chart with the default algorithm name.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_ALGORITHM_NAME.to_string(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn nodes(&self) -> &[BlockNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Creates a block of the given kind with placeholder content and
    /// appends it to the chart.
    pub fn add_node(&mut self, kind: SymbolKind) -> &BlockNode {
        self.nodes.push(BlockNode::new(kind));
        self.nodes.last().expect("node was just pushed")
    }

    /// Appends an already-built block, preserving its id. Used by the
    /// import path and by tests that need deterministic ids.
    pub fn insert_node(&mut self, node: BlockNode) {
        self.nodes.push(node);
    }

    pub fn node(&self, id: &str) -> Option<&BlockNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut BlockNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Replaces a block's free text. Returns false for an unknown id.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Sets a block's declared variable kind. Returns false for an unknown id.
    pub fn set_variable_kind(&mut self, id: &str, kind: VariableKind) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.variable_kind = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Removes a block and every connection touching it.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
        self.connections.retain(|c| !c.touches(id));
    }

    /// Connects two blocks with a directed edge.
    ///
    /// Self-loops, duplicate ordered pairs, and a second outgoing edge from
    /// the same source are rejected, which keeps the successor of every
    /// block unambiguous for linearization.
    pub fn connect(&mut self, from: &str, to: &str) -> ConnectOutcome {
        if from == to {
            return ConnectOutcome::SelfLoop;
        }
        if self.node(from).is_none() || self.node(to).is_none() {
            return ConnectOutcome::UnknownEndpoint;
        }
        if self.connections.iter().any(|c| c.from == from && c.to == to) {
            return ConnectOutcome::Duplicate;
        }
        if self.connections.iter().any(|c| c.from == from) {
            return ConnectOutcome::SourceOccupied;
        }
        self.connections.push(Connection::new(from, to));
        ConnectOutcome::Connected
    }

    /// Appends an already-built connection verbatim, without the `connect`
    /// rules. Saved documents are restored exactly as exported, so imported
    /// charts may carry shapes the editor itself would refuse to create.
    pub fn insert_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Removes a connection by id. Returns false for an unknown id.
    pub fn remove_connection(&mut self, id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != id);
        self.connections.len() < before
    }

    /// Resets the chart to an empty diagram with the default name.
    pub fn clear(&mut self) {
        self.name = DEFAULT_ALGORITHM_NAME.to_string();
        self.nodes.clear();
        self.connections.clear();
    }

    /// The first start block in insertion order, if any.
    pub fn start_node(&self) -> Option<&BlockNode> {
        self.nodes.iter().find(|n| n.kind == SymbolKind::Start)
    }
}
