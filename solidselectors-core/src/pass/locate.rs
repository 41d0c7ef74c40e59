//! Import/require location.
//!
//! Characterizes every top-level statement that pulls the generation
//! function(s) from the target module, in any of four surface forms:
//!
//! - `import POM from 'solidselectors'` - whole-module alias
//! - `import { createSelector as cs } from 'solidselectors'` - named alias
//! - `const { createSelector } = require('solidselectors')` - destructured
//! - `const POM = require('solidselectors')` - whole-module require
//!
//! A statement that references the module but binds none of the
//! recognized roles is left untouched. This component only characterizes;
//! it performs no mutation.

use tracing::debug;

use crate::ast::{NodeId, NodeKind, ProgramTree};
use crate::config::TransformConfig;

/// Which generation function a local name stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Selector,
    LiveSelector,
}

impl Role {
    /// The configured function name for this role.
    pub fn function_name(self, config: &TransformConfig) -> &str {
        match self {
            Role::Selector => &config.selector_fn,
            Role::LiveSelector => &config.live_selector_fn,
        }
    }
}

/// A local name bound to one generation function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBinding {
    pub role: Role,
    pub local: String,
    /// The node introducing the name: a named import specifier or a
    /// destructuring pattern property.
    pub introducer: NodeId,
}

/// A local name aliasing the whole module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasBinding {
    pub local: String,
    /// A default import specifier, or the require declarator itself.
    pub introducer: NodeId,
}

/// Surface form of the located statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStyle {
    EsModule,
    Require,
}

/// One characterized import/require statement: its role→local mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedImport {
    /// The import declaration or variable statement.
    pub statement: NodeId,
    pub style: ImportStyle,
    /// The declarator holding the require call (require forms only).
    pub declarator: Option<NodeId>,
    /// Whole-module alias, if the statement binds one.
    pub alias: Option<AliasBinding>,
    /// Named/destructured generation-function bindings.
    pub roles: Vec<RoleBinding>,
}

/// Scan the program's top-level statements, in document order, for
/// acquisitions of the target module.
pub fn locate_imports(tree: &ProgramTree, config: &TransformConfig) -> Vec<LocatedImport> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let NodeKind::Program { body } = tree.kind(root) else {
        return Vec::new();
    };

    let mut located = Vec::new();
    for &stmt in body {
        match tree.kind(stmt) {
            NodeKind::ImportDecl { specifiers, source } if source == &config.module_name => {
                if let Some(import) = characterize_import(tree, stmt, specifiers, config) {
                    located.push(import);
                }
            }
            NodeKind::VarDecl { declarators, .. } => {
                for &declarator in declarators {
                    if let Some(import) = characterize_require(tree, stmt, declarator, config) {
                        located.push(import);
                    }
                }
            }
            _ => {}
        }
    }

    debug!(count = located.len(), module = %config.module_name, "located imports");
    located
}

fn characterize_import(
    tree: &ProgramTree,
    statement: NodeId,
    specifiers: &[NodeId],
    config: &TransformConfig,
) -> Option<LocatedImport> {
    let mut alias = None;
    let mut roles = Vec::new();

    for &spec in specifiers {
        match tree.kind(spec) {
            NodeKind::ImportDefaultSpecifier { local } => {
                alias = Some(AliasBinding {
                    local: local.clone(),
                    introducer: spec,
                });
            }
            NodeKind::ImportNamedSpecifier { imported, local } => {
                if let Some(role) = role_for(imported, config) {
                    roles.push(RoleBinding {
                        role,
                        local: local.clone(),
                        introducer: spec,
                    });
                }
            }
            _ => {}
        }
    }

    // references the module, binds none of the recognized roles
    if alias.is_none() && roles.is_empty() {
        return None;
    }

    Some(LocatedImport {
        statement,
        style: ImportStyle::EsModule,
        declarator: None,
        alias,
        roles,
    })
}

fn characterize_require(
    tree: &ProgramTree,
    statement: NodeId,
    declarator: NodeId,
    config: &TransformConfig,
) -> Option<LocatedImport> {
    let NodeKind::VarDeclarator { pattern, init } = tree.kind(declarator) else {
        return None;
    };
    let init = (*init)?;
    let NodeKind::CallExpr { callee, arguments } = tree.kind(init) else {
        return None;
    };
    if tree.ident_name(*callee) != Some("require") || arguments.len() != 1 {
        return None;
    }
    if tree.str_value(arguments[0]) != Some(config.module_name.as_str()) {
        return None;
    }

    match tree.kind(*pattern) {
        NodeKind::Ident { name } => Some(LocatedImport {
            statement,
            style: ImportStyle::Require,
            declarator: Some(declarator),
            alias: Some(AliasBinding {
                local: name.clone(),
                introducer: declarator,
            }),
            roles: Vec::new(),
        }),
        NodeKind::ObjectPattern { properties } => {
            let mut roles = Vec::new();
            for &property in properties {
                let NodeKind::PatternProperty { key, local } = tree.kind(property) else {
                    continue;
                };
                if let Some(role) = role_for(key, config) {
                    roles.push(RoleBinding {
                        role,
                        local: local.clone(),
                        introducer: property,
                    });
                }
            }
            if roles.is_empty() {
                return None;
            }
            Some(LocatedImport {
                statement,
                style: ImportStyle::Require,
                declarator: Some(declarator),
                alias: None,
                roles,
            })
        }
        _ => None,
    }
}

fn role_for(function: &str, config: &TransformConfig) -> Option<Role> {
    if function == config.selector_fn {
        Some(Role::Selector)
    } else if function == config.live_selector_fn {
        Some(Role::LiveSelector)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DeclKind;

    fn config() -> TransformConfig {
        TransformConfig::default()
    }

    #[test]
    fn test_locates_named_import() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("createSelector", "cs");
        let import = tree.import_decl(vec![named], "solidselectors");
        tree.program(vec![import]);

        let located = locate_imports(&tree, &config());
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].style, ImportStyle::EsModule);
        assert!(located[0].alias.is_none());
        assert_eq!(located[0].roles.len(), 1);
        assert_eq!(located[0].roles[0].role, Role::Selector);
        assert_eq!(located[0].roles[0].local, "cs");
    }

    #[test]
    fn test_locates_default_alias_with_named_roles() {
        let mut tree = ProgramTree::new();
        let default = tree.default_specifier("POM");
        let selector = tree.named_specifier("createSelector", "createSelector");
        let live = tree.named_specifier("createLiveSelector", "live");
        let import = tree.import_decl(vec![default, selector, live], "solidselectors");
        tree.program(vec![import]);

        let located = locate_imports(&tree, &config());
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].alias.as_ref().unwrap().local, "POM");
        assert_eq!(located[0].roles.len(), 2);
        assert_eq!(located[0].roles[1].role, Role::LiveSelector);
    }

    #[test]
    fn test_locates_destructured_require() {
        let mut tree = ProgramTree::new();
        let selector = tree.pattern_property("createSelector", "createSelector");
        let unrelated = tree.pattern_property("somethingElse", "somethingElse");
        let pattern = tree.object_pattern(vec![selector, unrelated]);
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![decl]);

        let located = locate_imports(&tree, &config());
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].style, ImportStyle::Require);
        assert_eq!(located[0].declarator, Some(declarator));
        assert_eq!(located[0].roles.len(), 1, "unrelated key is not a role");
    }

    #[test]
    fn test_locates_whole_module_require() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("POM");
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![decl]);

        let located = locate_imports(&tree, &config());
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].alias.as_ref().unwrap().local, "POM");
        assert!(located[0].roles.is_empty());
    }

    #[test]
    fn test_other_module_is_skipped() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("createSelector", "createSelector");
        let import = tree.import_decl(vec![named], "another-module");
        let pattern = tree.ident("X");
        let init = tree.require_call("another-module");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![import, decl]);

        assert!(locate_imports(&tree, &config()).is_empty());
    }

    #[test]
    fn test_module_without_roles_is_left_untouched() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("unrelated", "unrelated");
        let import = tree.import_decl(vec![named], "solidselectors");
        let prop = tree.pattern_property("unrelated", "unrelated");
        let pattern = tree.object_pattern(vec![prop]);
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![import, decl]);

        assert!(locate_imports(&tree, &config()).is_empty());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("createSelector", "createSelector");
        let import = tree.import_decl(vec![named], "solidselectors");
        let pattern = tree.ident("POM");
        let init = tree.require_call("solidselectors");
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![import, decl]);

        let located = locate_imports(&tree, &config());
        assert_eq!(located.len(), 2);
        assert_eq!(located[0].statement, import);
        assert_eq!(located[1].statement, decl);
    }
}
