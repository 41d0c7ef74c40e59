//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use solidselectors_core::prelude::*;
//! ```

// Transform surface
pub use crate::transform::SelectorTransform;

// Program tree
pub use crate::ast::{DeclKind, NodeId, NodeKind, ProgramTree, Span};
pub use crate::ast::emit::emit_program;

// Scope contract
pub use crate::scope::{Binding, BindingKind, ScopeResolver, TreeScopes};

// Errors
pub use crate::error::{TransformError, TransformResult};

// Configuration
pub use crate::config::{load_config, TransformConfig};

// Reporting
pub use crate::report::TransformReport;
