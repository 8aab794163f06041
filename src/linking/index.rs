use std::collections::HashMap;

use tracing::debug;

use crate::syntax::{CallableDecl, CallableId, TranslationUnit};

/// Maps each locally declared callable's resolved identity to its
/// declaration.
///
/// Built in a single forward pass over one translation unit and immutable
/// afterwards; discarded with the unit. Contains entries only for callables
/// *declared* in the unit, never for ones merely referenced from it.
pub struct CallableIndex<'a> {
    by_identity: HashMap<CallableId, &'a CallableDecl>,
}

impl<'a> CallableIndex<'a> {
    /// Builds the index for a translation unit.
    ///
    /// Declarations without a resolved identity are skipped silently. If
    /// two declarations carry equal identities (a correct front end never
    /// produces this), the later-visited one wins; accepted, not validated.
    pub fn build(unit: &'a TranslationUnit) -> Self {
        let mut by_identity: HashMap<CallableId, &'a CallableDecl> = HashMap::new();

        for decl in &unit.callables {
            match &decl.identity {
                Some(id) => {
                    by_identity.insert(id.clone(), decl);
                }
                None => {
                    debug!(
                        unit = %unit.path,
                        callable = %decl.name,
                        "skipping declaration without resolved identity"
                    );
                }
            }
        }

        Self { by_identity }
    }

    /// Looks up the declaration for a callable identity.
    pub fn get(&self, id: &CallableId) -> Option<&'a CallableDecl> {
        self.by_identity.get(id).copied()
    }

    /// Number of indexed declarations.
    pub fn len(&self) -> usize {
        self.by_identity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identity.is_empty()
    }
}
