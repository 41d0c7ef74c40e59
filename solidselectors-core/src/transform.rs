//! The transform entry point.
//!
//! [`SelectorTransform`] is the single surface the hosting pipeline
//! invokes, once per compiled source file's root node. One instance can
//! transform many units; its evaluator's id reservoir is shared across
//! them, so selectors stay unique for the whole process.
//!
//! # Example
//!
//! ```rust,ignore
//! use solidselectors_core::prelude::*;
//!
//! let mut transform = SelectorTransform::new();
//! let report = transform.transform(&mut tree)?;
//! println!("rewrote {} calls", report.calls_rewritten);
//! ```

use tracing::debug;

use crate::ast::ProgramTree;
use crate::config::TransformConfig;
use crate::error::TransformResult;
use crate::pass::{
    eliminate_dead_imports, find_call_sites, locate_imports, rewrite_call, LiteralEvaluator,
    PassState,
};
use crate::report::TransformReport;
use crate::scope::{ScopeResolver, TreeScopes};

/// Compile-time selector inlining over one or more program trees.
#[derive(Debug)]
pub struct SelectorTransform {
    config: TransformConfig,
    evaluator: LiteralEvaluator,
}

impl SelectorTransform {
    /// Transform with the default solidselectors identity.
    pub fn new() -> Self {
        Self::with_config(TransformConfig::default())
    }

    /// Transform with an explicit configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        Self {
            config,
            evaluator: LiteralEvaluator::new(),
        }
    }

    /// Override the source-module name to match.
    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.config.module_name = module_name.into();
        self
    }

    /// Override the singular selector function name.
    pub fn with_selector_fn(mut self, selector_fn: impl Into<String>) -> Self {
        self.config.selector_fn = selector_fn.into();
        self
    }

    /// Override the live selector factory function name.
    pub fn with_live_selector_fn(mut self, live_selector_fn: impl Into<String>) -> Self {
        self.config.live_selector_fn = live_selector_fn.into();
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform one compile unit using the bundled tree-backed scope
    /// resolver.
    pub fn transform(&mut self, tree: &mut ProgramTree) -> TransformResult<TransformReport> {
        self.transform_with(tree, &TreeScopes)
    }

    /// Transform one compile unit against any host satisfying the
    /// scope-resolution contract.
    ///
    /// Statements are processed in document order; each statement's call
    /// sites are all validated before any of them mutates the tree. On
    /// error the unit's tree must be treated as undefined and its output
    /// discarded.
    pub fn transform_with(
        &mut self,
        tree: &mut ProgramTree,
        scopes: &impl ScopeResolver,
    ) -> TransformResult<TransformReport> {
        let mut report = TransformReport::default();
        if tree.root().is_none() {
            return Ok(report);
        }

        let imports = locate_imports(tree, &self.config);
        for import in &imports {
            if !tree.is_attached(import.statement) {
                continue;
            }

            let sites = find_call_sites(tree, import, scopes, &self.config)?;
            debug!(sites = sites.len(), "processing located import");

            let mut state = PassState::default();
            for site in &sites {
                let value = self.evaluator.evaluate(site);
                rewrite_call(tree, site, value, &mut state);
            }
            report.calls_rewritten += state.rewritten_calls;
            report.member_calls_rewritten += state.rewritten_member_calls;
            report.declarators_removed += state.removed_declarators;

            eliminate_dead_imports(tree, import, scopes, &mut report);
        }

        Ok(report)
    }
}

impl Default for SelectorTransform {
    fn default() -> Self {
        Self::new()
    }
}
