use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a syntactic node, assigned by the front end.
///
/// Unique within one translation unit. Two occurrences of the same name are
/// distinct nodes; identity is position in source, never spelling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Resolver-assigned key uniquely identifying a declared callable within one
/// compilation's symbol space.
///
/// Opaque to this crate: it is only ever compared and hashed, never parsed
/// or re-derived. Two references to the same declared callable always carry
/// equal ids within one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallableId(String);

impl CallableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kinds of callable declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallableKind {
    Method,
    Constructor,
}

#[allow(clippy::should_implement_trait)]
impl CallableKind {
    /// Returns the string representation of this callable kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallableKind::Method => "method",
            CallableKind::Constructor => "constructor",
        }
    }

    /// Parses a string into a `CallableKind`, returning `None` for
    /// unrecognized values.
    pub fn from_str(s: &str) -> Option<CallableKind> {
        match s {
            "method" => Some(CallableKind::Method),
            "constructor" => Some(CallableKind::Constructor),
            _ => None,
        }
    }
}

/// Whether a call site names a callable or instantiates a type.
///
/// The linker treats both identically; the distinction is carried only
/// because the front end reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallKind {
    Invocation,
    Instantiation,
}

#[allow(clippy::should_implement_trait)]
impl CallKind {
    /// Returns the string representation of this call kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Invocation => "invocation",
            CallKind::Instantiation => "instantiation",
        }
    }

    /// Parses a string into a `CallKind`, returning `None` for unrecognized
    /// values.
    pub fn from_str(s: &str) -> Option<CallKind> {
        match s {
            "invocation" => Some(CallKind::Invocation),
            "instantiation" => Some(CallKind::Instantiation),
            _ => None,
        }
    }
}

/// A formal parameter of a callable declaration.
///
/// Position within the owning declaration's parameter list is significant.
/// Duplicate names across different declarations are legal; parameters are
/// told apart by node identity, not name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub node: NodeId,
    pub name: String,
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallableDecl {
    pub node: NodeId,
    pub kind: CallableKind,
    pub name: String,
    /// Resolved identity of this declaration, or `None` when the front end
    /// could not produce one.
    pub identity: Option<CallableId>,
    pub params: Vec<ParamDecl>,
    pub body: Vec<Stmt>,
}

/// A statement in a callable body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// An expression evaluated for its effects.
    Expr(Expr),
    /// A local variable declaration with an optional initializer.
    Local {
        node: NodeId,
        name: String,
        init: Option<Expr>,
    },
    /// A return statement with an optional value.
    Return(Option<Expr>),
}

/// A literal constant. Contains no identifier occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
    Null,
}

/// One identifier leaf reference inside an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierOccurrence {
    pub node: NodeId,
    pub name: String,
}

/// An invocation or instantiation expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub node: NodeId,
    pub kind: CallKind,
    /// Source spelling of the callee. Metadata only: the callee name is not
    /// an identifier occurrence and never links to a parameter.
    pub callee_name: String,
    /// Resolved identity of the callee, or `None` for references the front
    /// end could not resolve (library calls, synthetic code).
    pub callee: Option<CallableId>,
    pub args: Vec<Expr>,
}

/// An expression subtree.
///
/// Node ids appear on the nodes the feature graph addresses (identifiers,
/// calls); interior operator structure is anonymous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier(IdentifierOccurrence),
    Literal(Literal),
    Unary {
        op: String,
        operand: Box<Expr>,
    },
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Member access; the member name is not an identifier occurrence.
    FieldAccess {
        base: Box<Expr>,
        field: String,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    Call(CallExpr),
}

/// One self-contained source file after parsing and resolution.
///
/// Owns every syntactic node. This crate only reads it; the unit outlives
/// all processing, and nothing here mutates syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub path: String,
    pub callables: Vec<CallableDecl>,
}
