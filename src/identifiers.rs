use crate::syntax::{Expr, IdentifierOccurrence};

/// Collects every identifier leaf contained in an expression subtree.
///
/// The walk is structural: it descends through operators, field accesses
/// (base only, since member names are not references), index expressions,
/// and the arguments of nested calls. Callee names are call-site metadata
/// and are never collected. Literals contribute nothing. Order follows the
/// walk but carries no meaning.
pub fn collect_identifiers(expr: &Expr) -> Vec<&IdentifierOccurrence> {
    let mut found = Vec::new();
    collect_into(expr, &mut found);
    found
}

fn collect_into<'a>(expr: &'a Expr, found: &mut Vec<&'a IdentifierOccurrence>) {
    match expr {
        Expr::Identifier(occurrence) => found.push(occurrence),
        Expr::Literal(_) => {}
        Expr::Unary { operand, .. } => collect_into(operand, found),
        Expr::Binary { lhs, rhs, .. } => {
            collect_into(lhs, found);
            collect_into(rhs, found);
        }
        Expr::FieldAccess { base, .. } => collect_into(base, found),
        Expr::Index { base, index } => {
            collect_into(base, found);
            collect_into(index, found);
        }
        Expr::Call(call) => {
            for arg in &call.args {
                collect_into(arg, found);
            }
        }
    }
}
