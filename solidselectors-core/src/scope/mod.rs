//! Bindings and the scope-resolution half of the host service contract.
//!
//! The transform core never walks scopes itself; it asks a
//! [`ScopeResolver`] to resolve names and enumerate references. Any host
//! that satisfies the contract can drive the core. [`TreeScopes`] is the
//! tree-backed reference implementation shipped with this crate.
//!
//! Reference sets are never cached on a binding: after any tree mutation a
//! cached set would be stale, so [`ScopeResolver::references_of`] always
//! re-enumerates from the current tree. A reference count is simply the
//! size of the freshly computed set, and can therefore never go negative.

mod binder;

pub use binder::TreeScopes;

use crate::ast::{NodeId, ProgramTree};

/// Declaration form that introduced a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `import Name from '...'`
    ImportDefault,
    /// `import { name } from '...'`
    ImportNamed,
    /// `const name = ...`
    VarDeclarator,
    /// `const { name } = ...`
    PatternProperty,
}

/// One declared name: its identity is the declaring node.
///
/// The reference set is deliberately not stored here; ask the resolver,
/// which recomputes it from the current tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub kind: BindingKind,
    /// The declaring node: a specifier, a variable declarator, or a
    /// pattern property, owned by the program tree.
    pub declaration: NodeId,
}

/// Scope-resolution contract consumed by the transform core.
pub trait ScopeResolver {
    /// Resolve `name` as seen from the node `from`, walking enclosing
    /// scopes outward. Returns `None` for unbound names.
    fn resolve_binding(&self, tree: &ProgramTree, name: &str, from: NodeId) -> Option<Binding>;

    /// Enumerate every surviving reference to `binding` in the current
    /// tree. Recomputed fresh on every call; never cached.
    fn references_of(&self, tree: &ProgramTree, binding: &Binding) -> Vec<NodeId>;
}
