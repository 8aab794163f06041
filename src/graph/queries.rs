use crate::graph::{EdgeKind, FeatureEdge, FeatureGraph};
use crate::syntax::NodeId;

/// Provides read-side lookups over an accumulated feature graph.
pub struct GraphQueries<'a> {
    graph: &'a FeatureGraph,
}

impl<'a> GraphQueries<'a> {
    /// Creates a new `GraphQueries` over the given graph.
    pub fn new(graph: &'a FeatureGraph) -> Self {
        Self { graph }
    }

    /// All edges carrying the given label.
    pub fn edges_with_kind(&self, kind: EdgeKind) -> Vec<&'a FeatureEdge> {
        self.graph.edges().filter(|e| e.kind == kind).collect()
    }

    /// Edges leaving the given node.
    pub fn outgoing(&self, id: NodeId) -> Vec<&'a FeatureEdge> {
        self.graph.edges().filter(|e| e.source == id).collect()
    }

    /// Edges arriving at the given node.
    pub fn incoming(&self, id: NodeId) -> Vec<&'a FeatureEdge> {
        self.graph.edges().filter(|e| e.target == id).collect()
    }

    /// Targets reachable from `id` over edges of the given kind.
    pub fn targets_of(&self, id: NodeId, kind: EdgeKind) -> Vec<NodeId> {
        self.graph
            .edges()
            .filter(|e| e.source == id && e.kind == kind)
            .map(|e| e.target)
            .collect()
    }
}
