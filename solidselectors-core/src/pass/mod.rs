//! The transform pass, component by component.
//!
//! Processing order per compile unit:
//!
//! - `locate`: characterize each import/require statement pulling from the
//!   target module (document order).
//! - `matcher`: per located statement, find and validate every call site of
//!   its aliases across the whole tree.
//! - `eval`: compute the concrete replacement string for a validated site.
//! - `rewrite`: swap the call for a string literal, drop intermediate
//!   options declarators.
//! - `eliminate`: recompute reference counts and drop the statement's dead
//!   specifiers, patterns, and declarations.

pub mod eliminate;
pub mod eval;
pub mod locate;
pub mod matcher;
pub mod rewrite;

pub use eliminate::eliminate_dead_imports;
pub use eval::LiteralEvaluator;
pub use locate::{locate_imports, AliasBinding, ImportStyle, LocatedImport, Role, RoleBinding};
pub use matcher::{find_call_sites, CallSite};
pub use rewrite::rewrite_call;

/// Ephemeral state scoped to the processing of one import/require
/// statement; merged into the unit report and discarded once that
/// statement's cleanup completes. Counts are reporting data only - the
/// eliminator works from freshly enumerated reference sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassState {
    pub rewritten_calls: usize,
    pub rewritten_member_calls: usize,
    pub removed_declarators: usize,
}
