//! Dead-reference elimination.
//!
//! Runs once per located import statement, after all of its call sites
//! were rewritten. Every decision here is made from a freshly enumerated
//! reference set over the now-mutated tree - never from counters carried
//! through the pass, which would compound errors across nested mutations.
//!
//! Rules, per surface form:
//! - named import specifiers are filtered independently: kept only with
//!   at least one surviving reference; an import statement with zero
//!   surviving specifiers is removed.
//! - a destructured role property is dropped at zero references; an
//!   emptied pattern takes its whole declaration with it.
//! - a whole-module alias declarator is dropped at zero references,
//!   which under fresh enumeration is exactly "every use was eliminated
//!   as a matched member-access call".

use tracing::{debug, info};

use crate::ast::{NodeKind, ProgramTree};
use crate::report::TransformReport;
use crate::scope::{Binding, BindingKind, ScopeResolver};

use super::locate::{ImportStyle, LocatedImport};
use super::rewrite::remove_declarator;

/// Drop whatever this statement no longer needs: specifiers, pattern
/// properties, declarators, or the statement itself.
pub fn eliminate_dead_imports(
    tree: &mut ProgramTree,
    import: &LocatedImport,
    scopes: &impl ScopeResolver,
    report: &mut TransformReport,
) {
    match import.style {
        ImportStyle::EsModule => eliminate_import_decl(tree, import, scopes, report),
        ImportStyle::Require => eliminate_require(tree, import, scopes, report),
    }
}

fn eliminate_import_decl(
    tree: &mut ProgramTree,
    import: &LocatedImport,
    scopes: &impl ScopeResolver,
    report: &mut TransformReport,
) {
    let statement = import.statement;
    let specifiers = match tree.kind(statement) {
        NodeKind::ImportDecl { specifiers, .. } => specifiers.clone(),
        _ => return,
    };

    for spec in specifiers {
        let binding = match tree.kind(spec) {
            NodeKind::ImportDefaultSpecifier { local } => Binding {
                name: local.clone(),
                kind: BindingKind::ImportDefault,
                declaration: spec,
            },
            NodeKind::ImportNamedSpecifier { local, .. } => Binding {
                name: local.clone(),
                kind: BindingKind::ImportNamed,
                declaration: spec,
            },
            _ => continue,
        };
        if scopes.references_of(tree, &binding).is_empty() {
            tree.remove_node(spec);
            report.specifiers_removed += 1;
            debug!(name = %binding.name, "dropped unreferenced import specifier");
        }
    }

    if matches!(tree.kind(statement), NodeKind::ImportDecl { specifiers, .. } if specifiers.is_empty())
    {
        tree.remove_node(statement);
        report.statements_removed += 1;
        info!("removed import statement with no surviving specifiers");
    }
}

fn eliminate_require(
    tree: &mut ProgramTree,
    import: &LocatedImport,
    scopes: &impl ScopeResolver,
    report: &mut TransformReport,
) {
    let Some(declarator) = import.declarator else {
        return;
    };
    if !tree.is_attached(declarator) {
        return;
    }
    let pattern = match tree.kind(declarator) {
        NodeKind::VarDeclarator { pattern, .. } => *pattern,
        _ => return,
    };

    match tree.kind(pattern).clone() {
        NodeKind::ObjectPattern { .. } => {
            for role in &import.roles {
                let local = match tree.kind(role.introducer) {
                    NodeKind::PatternProperty { local, .. } => local.clone(),
                    _ => continue,
                };
                let binding = Binding {
                    name: local,
                    kind: BindingKind::PatternProperty,
                    declaration: role.introducer,
                };
                if scopes.references_of(tree, &binding).is_empty() {
                    tree.remove_node(role.introducer);
                    report.specifiers_removed += 1;
                    debug!(name = %binding.name, "dropped destructured role property");
                }
            }

            let emptied = matches!(
                tree.kind(pattern),
                NodeKind::ObjectPattern { properties } if properties.is_empty()
            );
            if emptied {
                let statement = import.statement;
                if remove_declarator(tree, declarator) && !tree.is_attached(statement) {
                    report.statements_removed += 1;
                    info!("removed require statement with emptied pattern");
                }
            }
        }
        NodeKind::Ident { name } => {
            let binding = Binding {
                name,
                kind: BindingKind::VarDeclarator,
                declaration: declarator,
            };
            if scopes.references_of(tree, &binding).is_empty() {
                let statement = import.statement;
                if remove_declarator(tree, declarator) && !tree.is_attached(statement) {
                    report.statements_removed += 1;
                    info!(alias = %binding.name, "removed whole-module require");
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::emit::emit_program;
    use crate::ast::DeclKind;
    use crate::config::TransformConfig;
    use crate::pass::locate::locate_imports;
    use crate::scope::TreeScopes;

    fn run(tree: &mut ProgramTree) -> TransformReport {
        let config = TransformConfig::default();
        let located = locate_imports(tree, &config);
        let mut report = TransformReport::default();
        for import in &located {
            eliminate_dead_imports(tree, import, &TreeScopes, &mut report);
        }
        report
    }

    #[test]
    fn test_unreferenced_import_is_removed_entirely() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("createSelector", "createSelector");
        let import = tree.import_decl(vec![named], "solidselectors");
        tree.program(vec![import]);

        let report = run(&mut tree);
        assert_eq!(emit_program(&tree), "");
        assert_eq!(report.specifiers_removed, 1);
        assert_eq!(report.statements_removed, 1);
    }

    #[test]
    fn test_referenced_specifiers_survive() {
        let mut tree = ProgramTree::new();
        let default = tree.default_specifier("POM");
        let selector = tree.named_specifier("createSelector", "createSelector");
        let other = tree.named_specifier("other", "other");
        let import = tree.import_decl(vec![default, selector, other], "solidselectors");
        let object = tree.ident("POM");
        let member = tree.member(object, "keepsThis");
        let keeps = tree.call(member, vec![]);
        let keeps_stmt = tree.expr_stmt(keeps);
        let other_callee = tree.ident("other");
        let other_call = tree.call(other_callee, vec![]);
        let other_stmt = tree.expr_stmt(other_call);
        tree.program(vec![import, keeps_stmt, other_stmt]);

        let report = run(&mut tree);
        assert_eq!(
            emit_program(&tree),
            "import POM, { other } from \"solidselectors\";\nPOM.keepsThis();\nother();"
        );
        assert_eq!(report.specifiers_removed, 1, "only createSelector dropped");
        assert_eq!(report.statements_removed, 0);
    }

    #[test]
    fn test_emptied_pattern_removes_require_statement() {
        let mut tree = ProgramTree::new();
        let prop = tree.pattern_property("createSelector", "createSelector");
        let pattern = tree.object_pattern(vec![prop]);
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![decl]);

        let report = run(&mut tree);
        assert_eq!(emit_program(&tree), "");
        assert_eq!(report.statements_removed, 1);
    }

    #[test]
    fn test_non_role_pattern_property_survives() {
        let mut tree = ProgramTree::new();
        let selector = tree.pattern_property("createSelector", "createSelector");
        let something = tree.pattern_property("somethingElse", "somethingElse");
        let pattern = tree.object_pattern(vec![selector, something]);
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        let callee = tree.ident("somethingElse");
        let arg = tree.str_lit("stays put");
        let call = tree.call(callee, vec![arg]);
        let stmt = tree.expr_stmt(call);
        tree.program(vec![decl, stmt]);

        run(&mut tree);
        assert_eq!(
            emit_program(&tree),
            "const { somethingElse } = require(\"solidselectors\");\nsomethingElse(\"stays put\");"
        );
    }

    #[test]
    fn test_unused_whole_module_require_is_removed() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("POM");
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![decl]);

        let report = run(&mut tree);
        assert_eq!(emit_program(&tree), "");
        assert_eq!(report.statements_removed, 1);
    }

    #[test]
    fn test_whole_module_require_with_surviving_reference_is_kept() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("POM");
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        let object = tree.ident("POM");
        let member = tree.member(object, "other");
        let call = tree.call(member, vec![]);
        let stmt = tree.expr_stmt(call);
        tree.program(vec![decl, stmt]);

        let report = run(&mut tree);
        assert_eq!(
            emit_program(&tree),
            "const POM = require(\"solidselectors\");\nPOM.other();"
        );
        assert_eq!(report.statements_removed, 0);
    }
}
