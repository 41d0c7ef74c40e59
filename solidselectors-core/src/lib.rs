//! solidselectors-core: compile-time selector inlining with dead-import
//! elimination.
//!
//! This library finds call sites of the selector generation functions
//! with statically-known arguments, evaluates them ahead of time,
//! rewrites them to literal string constants, and removes the
//! import/require statements and intermediate variables that became
//! dead - so shipped code carries no runtime dependency on the
//! generation library.
//!
//! # Features
//!
//! - **Four acquisition forms**: default-style aliases, named aliases,
//!   destructured requires, whole-module requires
//! - **Member-access matching**: `POM.createSelector()` through a
//!   whole-module alias
//! - **Indirect options**: one intermediate variable holding the options
//!   object is resolved and removed
//! - **Strict validation**: ambiguous call sites fail the compile unit,
//!   never get skipped silently
//! - **Reference-counted cleanup**: specifiers, patterns, and statements
//!   are dropped only at zero freshly-recomputed references
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use solidselectors_core::prelude::*;
//!
//! let mut transform = SelectorTransform::new();
//! let report = transform.transform(&mut tree)?;
//! ```
//!
//! # Module Organization
//!
//! - [`ast`]: arena program tree over a closed node-kind enumeration
//! - [`scope`]: binding model and the scope-resolution service contract
//! - [`pass`]: locate → match/validate → evaluate → rewrite → eliminate
//! - [`transform`]: the entry point invoked per compile unit
//! - [`config`]: module identity and function names
//! - [`report`]: per-unit result counters and renderers
//! - [`error`]: typed error handling
//! - [`logging`]: structured tracing setup

pub mod ast;
pub mod config;
pub mod error;
pub mod logging;
pub mod pass;
pub mod prelude;
pub mod report;
pub mod scope;
pub mod transform;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{TransformError, TransformResult};

// Transform surface
pub use transform::SelectorTransform;

// Program tree
pub use ast::emit::emit_program;
pub use ast::{DeclKind, Node, NodeId, NodeKind, ProgramTree, Span};

// Scope contract
pub use scope::{Binding, BindingKind, ScopeResolver, TreeScopes};

// Pass components
pub use pass::{
    eliminate_dead_imports, find_call_sites, locate_imports, rewrite_call, AliasBinding,
    CallSite, ImportStyle, LiteralEvaluator, LocatedImport, PassState, Role, RoleBinding,
};

// Configuration
pub use config::{load_config, TransformConfig};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain, TransformReport};
