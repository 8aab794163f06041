use tracing::{debug, trace};

use crate::graph::{EdgeKind, FeatureGraph};
use crate::identifiers::collect_identifiers;
use crate::linking::CallableIndex;
use crate::syntax::{CallExpr, Expr, ParamDecl, Stmt, TranslationUnit};

/// Second-pass walker that links identifiers inside call arguments to the
/// formal parameters they bind to.
///
/// Every call site is evaluated independently: the callee's identity is
/// looked up in the index and, when the callee is declared in the same
/// unit, arguments and parameters are paired positionally. Invocations and
/// instantiations are handled identically. Calls whose callee is
/// unresolved or declared elsewhere are skipped without error; most call
/// sites in real code target other units, so the skip path is the common
/// one.
pub struct FormalArgLinker<'a, 'g> {
    index: &'a CallableIndex<'a>,
    graph: &'g mut FeatureGraph,
    edges_requested: usize,
}

impl<'a, 'g> FormalArgLinker<'a, 'g> {
    /// Creates a linker over a completed index and an edge sink.
    pub fn new(index: &'a CallableIndex<'a>, graph: &'g mut FeatureGraph) -> Self {
        Self {
            index,
            graph,
            edges_requested: 0,
        }
    }

    /// Walks every call site in the unit and emits edges for the ones that
    /// resolve to a locally declared callable. Returns the number of edges
    /// requested from the graph.
    pub fn link_unit(&mut self, unit: &TranslationUnit) -> usize {
        for decl in &unit.callables {
            for stmt in &decl.body {
                self.visit_stmt(stmt);
            }
        }

        debug!(
            unit = %unit.path,
            edges = self.edges_requested,
            "formal-arg linking finished"
        );
        self.edges_requested
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => self.visit_expr(expr),
            Stmt::Local { init, .. } => {
                if let Some(init) = init {
                    self.visit_expr(init);
                }
            }
            Stmt::Return(value) => {
                if let Some(value) = value {
                    self.visit_expr(value);
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(_) | Expr::Literal(_) => {}
            Expr::Unary { operand, .. } => self.visit_expr(operand),
            Expr::Binary { lhs, rhs, .. } => {
                self.visit_expr(lhs);
                self.visit_expr(rhs);
            }
            Expr::FieldAccess { base, .. } => self.visit_expr(base),
            Expr::Index { base, index } => {
                self.visit_expr(base);
                self.visit_expr(index);
            }
            Expr::Call(call) => self.visit_call(call),
        }
    }

    /// Handles one call site, then recurses into its arguments so nested
    /// calls are matched independently.
    fn visit_call(&mut self, call: &CallExpr) {
        match call.callee.as_ref().and_then(|id| self.index.get(id)) {
            Some(decl) => self.process(&call.args, &decl.params),
            None => {
                trace!(
                    callee = %call.callee_name,
                    "call site skipped: callee unresolved or not declared locally"
                );
            }
        }

        for arg in &call.args {
            self.visit_expr(arg);
        }
    }

    /// Pairs arguments with parameters in lock-step by position, stopping
    /// at whichever list runs out first, and links every identifier inside
    /// each argument to the parameter at that position.
    ///
    /// Arity mismatches never occur in a type-correct unit; the truncation
    /// tolerates them rather than treating them as a fault.
    fn process(&mut self, args: &[Expr], params: &[ParamDecl]) {
        for (arg, param) in args.iter().zip(params) {
            for occurrence in collect_identifiers(arg) {
                self.graph
                    .add_edge(occurrence.node, param.node, EdgeKind::FormalArgName);
                self.edges_requested += 1;
                trace!(
                    identifier = %occurrence.name,
                    parameter = %param.name,
                    "formal-arg edge"
                );
            }
        }
    }
}
