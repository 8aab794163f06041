/// Formal-argument linking module.
///
/// Indexes the callables declared in a translation unit, then links every
/// identifier used inside a call argument to the formal parameter the
/// argument binds to.
mod index;
mod linker;

pub use index::CallableIndex;
pub use linker::FormalArgLinker;

use crate::graph::FeatureGraph;
use crate::syntax::TranslationUnit;

/// Adds `formal_arg_name` edges for one translation unit to the graph.
///
/// Two sequential passes share the immutable index: the index over every
/// locally declared callable is completed first, then every call site is
/// matched against it. A call preceding its callee's declaration in source
/// order therefore still links.
///
/// Returns the number of edges requested from the graph. The graph
/// deduplicates, so the count may exceed the number of edges added.
pub fn add_formal_arg_edges(unit: &TranslationUnit, graph: &mut FeatureGraph) -> usize {
    let index = CallableIndex::build(unit);
    let mut linker = FormalArgLinker::new(&index, graph);
    linker.link_unit(unit)
}
