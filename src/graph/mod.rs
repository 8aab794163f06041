/// Query operations for analyzing the accumulated graph.
pub mod queries;

pub use queries::GraphQueries;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::syntax::NodeId;

/// Kinds of edges in the feature graph.
///
/// The graph is shared between several contributors; this crate emits only
/// `FormalArgName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    AstChild,
    LastWrite,
    LastUse,
    ComputedFrom,
    FormalArgName,
}

#[allow(clippy::should_implement_trait)]
impl EdgeKind {
    /// Returns the string representation of this edge kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::AstChild => "ast_child",
            EdgeKind::LastWrite => "last_write",
            EdgeKind::LastUse => "last_use",
            EdgeKind::ComputedFrom => "computed_from",
            EdgeKind::FormalArgName => "formal_arg_name",
        }
    }

    /// Parses a string into an `EdgeKind`, returning `None` for
    /// unrecognized values.
    pub fn from_str(s: &str) -> Option<EdgeKind> {
        match s {
            "ast_child" => Some(EdgeKind::AstChild),
            "last_write" => Some(EdgeKind::LastWrite),
            "last_use" => Some(EdgeKind::LastUse),
            "computed_from" => Some(EdgeKind::ComputedFrom),
            "formal_arg_name" => Some(EdgeKind::FormalArgName),
            _ => None,
        }
    }
}

/// A node registered in the feature graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureNode {
    pub id: NodeId,
    pub name: String,
}

/// A directed, labeled edge between two node identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

/// Statistics about the feature graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: u64,
    pub edge_count: u64,
    pub edges_by_kind: HashMap<String, u64>,
}

/// Accumulator of nodes and typed edges for one compilation.
///
/// `add_edge` has idempotent union semantics: repeated identical requests
/// leave the edge set unchanged, so contributors may re-request edges
/// freely. Edges may reference ids that were never registered as nodes;
/// the graph does not police endpoints.
#[derive(Debug, Clone, Default)]
pub struct FeatureGraph {
    nodes: HashMap<NodeId, FeatureNode>,
    edges: HashSet<FeatureEdge>,
}

impl FeatureGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. The first registration for an id wins; repeats
    /// are ignored.
    pub fn add_node(&mut self, node: FeatureNode) {
        self.nodes.entry(node.id).or_insert(node);
    }

    /// Adds a directed labeled edge. Returns `true` if the edge was not
    /// already present.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, kind: EdgeKind) -> bool {
        self.edges.insert(FeatureEdge {
            source,
            target,
            kind,
        })
    }

    /// Returns `true` if the exact edge is present.
    pub fn contains_edge(&self, source: NodeId, target: NodeId, kind: EdgeKind) -> bool {
        self.edges.contains(&FeatureEdge {
            source,
            target,
            kind,
        })
    }

    /// Looks up a registered node by id.
    pub fn node(&self, id: NodeId) -> Option<&FeatureNode> {
        self.nodes.get(&id)
    }

    /// Iterates over all registered nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &FeatureNode> {
        self.nodes.values()
    }

    /// Iterates over all edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &FeatureEdge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Computes summary statistics over the accumulated graph.
    pub fn stats(&self) -> GraphStats {
        let mut edges_by_kind: HashMap<String, u64> = HashMap::new();
        for edge in &self.edges {
            *edges_by_kind
                .entry(edge.kind.as_str().to_string())
                .or_insert(0) += 1;
        }

        GraphStats {
            node_count: self.nodes.len() as u64,
            edge_count: self.edges.len() as u64,
            edges_by_kind,
        }
    }
}
