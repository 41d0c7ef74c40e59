//! Tree-backed scope resolution.
//!
//! One scope per lexical block: the program root and every block
//! statement. Scopes chain outward through parent links on the tree
//! itself, so resolution holds no owning state and survives arbitrary
//! tree mutation between queries.

use crate::ast::{NodeId, NodeKind, ProgramTree};

use super::{Binding, BindingKind, ScopeResolver};

/// Stateless resolver over the program tree.
///
/// Holding no state is what makes fresh re-enumeration cheap to trust:
/// every query reads the tree as it is now, not as it was when some cache
/// was built.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeScopes;

impl ScopeResolver for TreeScopes {
    fn resolve_binding(&self, tree: &ProgramTree, name: &str, from: NodeId) -> Option<Binding> {
        let mut at = from;
        while let Some(parent) = tree.parent(at) {
            if matches!(
                tree.kind(parent),
                NodeKind::Program { .. } | NodeKind::BlockStmt { .. }
            ) {
                if let Some(binding) = declaration_in(tree, parent, name) {
                    return Some(binding);
                }
            }
            at = parent;
        }
        None
    }

    fn references_of(&self, tree: &ProgramTree, binding: &Binding) -> Vec<NodeId> {
        let Some(root) = tree.root() else {
            return Vec::new();
        };
        let mut references = Vec::new();
        tree.walk(root, &mut |id| {
            let NodeKind::Ident { name } = tree.kind(id) else {
                return;
            };
            if name != &binding.name || !is_reference_position(tree, id) {
                return;
            }
            if let Some(resolved) = self.resolve_binding(tree, name, id) {
                if resolved.declaration == binding.declaration {
                    references.push(id);
                }
            }
        });
        references
    }
}

/// An identifier counts as a reference unless it sits in binding
/// position (the pattern slot of a variable declarator). Member
/// properties, object keys, and pattern keys are plain strings on their
/// nodes, so they never reach here.
fn is_reference_position(tree: &ProgramTree, id: NodeId) -> bool {
    match tree.parent(id) {
        Some(parent) => !matches!(
            tree.kind(parent),
            NodeKind::VarDeclarator { pattern, .. } if *pattern == id
        ),
        None => false,
    }
}

/// Scan one scope node's statements for a declaration of `name`.
fn declaration_in(tree: &ProgramTree, scope: NodeId, name: &str) -> Option<Binding> {
    let body = match tree.kind(scope) {
        NodeKind::Program { body } | NodeKind::BlockStmt { body } => body.clone(),
        _ => return None,
    };

    for stmt in body {
        match tree.kind(stmt) {
            NodeKind::ImportDecl { specifiers, .. } => {
                for &spec in specifiers {
                    match tree.kind(spec) {
                        NodeKind::ImportDefaultSpecifier { local } if local == name => {
                            return Some(Binding {
                                name: name.to_string(),
                                kind: BindingKind::ImportDefault,
                                declaration: spec,
                            });
                        }
                        NodeKind::ImportNamedSpecifier { local, .. } if local == name => {
                            return Some(Binding {
                                name: name.to_string(),
                                kind: BindingKind::ImportNamed,
                                declaration: spec,
                            });
                        }
                        _ => {}
                    }
                }
            }
            NodeKind::VarDecl { declarators, .. } => {
                for &declarator in declarators {
                    let NodeKind::VarDeclarator { pattern, .. } = tree.kind(declarator) else {
                        continue;
                    };
                    match tree.kind(*pattern) {
                        NodeKind::Ident { name: bound } if bound == name => {
                            return Some(Binding {
                                name: name.to_string(),
                                kind: BindingKind::VarDeclarator,
                                declaration: declarator,
                            });
                        }
                        NodeKind::ObjectPattern { properties } => {
                            for &property in properties {
                                if let NodeKind::PatternProperty { local, .. } =
                                    tree.kind(property)
                                {
                                    if local == name {
                                        return Some(Binding {
                                            name: name.to_string(),
                                            kind: BindingKind::PatternProperty,
                                            declaration: property,
                                        });
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DeclKind;

    fn resolver() -> TreeScopes {
        TreeScopes
    }

    #[test]
    fn test_resolves_var_declarator() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("opts");
        let init = tree.object_lit(vec![]);
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        let reference = tree.ident("opts");
        let stmt = tree.expr_stmt(reference);
        tree.program(vec![decl, stmt]);

        let binding = resolver()
            .resolve_binding(&tree, "opts", reference)
            .expect("binding");
        assert_eq!(binding.kind, BindingKind::VarDeclarator);
        assert_eq!(binding.declaration, declarator);
    }

    #[test]
    fn test_resolves_import_specifiers() {
        let mut tree = ProgramTree::new();
        let default = tree.default_specifier("POM");
        let named = tree.named_specifier("createSelector", "cs");
        let import = tree.import_decl(vec![default, named], "solidselectors");
        let reference = tree.ident("cs");
        let stmt = tree.expr_stmt(reference);
        tree.program(vec![import, stmt]);

        let binding = resolver()
            .resolve_binding(&tree, "cs", reference)
            .expect("binding");
        assert_eq!(binding.kind, BindingKind::ImportNamed);
        assert_eq!(binding.declaration, named);

        let alias = resolver()
            .resolve_binding(&tree, "POM", reference)
            .expect("alias binding");
        assert_eq!(alias.kind, BindingKind::ImportDefault);
    }

    #[test]
    fn test_inner_block_shadows_outer() {
        let mut tree = ProgramTree::new();
        let outer_pattern = tree.ident("opts");
        let outer_init = tree.object_lit(vec![]);
        let outer_declarator = tree.declarator(outer_pattern, Some(outer_init));
        let outer_decl = tree.var_decl(DeclKind::Const, vec![outer_declarator]);

        let inner_pattern = tree.ident("opts");
        let inner_init = tree.num_lit(1.0);
        let inner_declarator = tree.declarator(inner_pattern, Some(inner_init));
        let inner_decl = tree.var_decl(DeclKind::Const, vec![inner_declarator]);
        let reference = tree.ident("opts");
        let inner_stmt = tree.expr_stmt(reference);
        let block = tree.block_stmt(vec![inner_decl, inner_stmt]);
        tree.program(vec![outer_decl, block]);

        let binding = resolver()
            .resolve_binding(&tree, "opts", reference)
            .expect("binding");
        assert_eq!(binding.declaration, inner_declarator, "inner wins");
    }

    #[test]
    fn test_block_falls_back_to_enclosing_scope() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("opts");
        let init = tree.object_lit(vec![]);
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        let reference = tree.ident("opts");
        let stmt = tree.expr_stmt(reference);
        let block = tree.block_stmt(vec![stmt]);
        tree.program(vec![decl, block]);

        let binding = resolver()
            .resolve_binding(&tree, "opts", reference)
            .expect("binding");
        assert_eq!(binding.declaration, declarator);
    }

    #[test]
    fn test_unbound_name_resolves_to_none() {
        let mut tree = ProgramTree::new();
        let reference = tree.ident("missing");
        let stmt = tree.expr_stmt(reference);
        tree.program(vec![stmt]);

        assert!(resolver().resolve_binding(&tree, "missing", reference).is_none());
    }

    #[test]
    fn test_references_exclude_binding_position() {
        let mut tree = ProgramTree::new();
        let pattern = tree.ident("s");
        let init = tree.num_lit(1.0);
        let declarator = tree.declarator(pattern, Some(init));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        let reference = tree.ident("s");
        let stmt = tree.expr_stmt(reference);
        tree.program(vec![decl, stmt]);

        let binding = Binding {
            name: "s".to_string(),
            kind: BindingKind::VarDeclarator,
            declaration: declarator,
        };
        let references = resolver().references_of(&tree, &binding);
        assert_eq!(references, vec![reference]);
    }

    #[test]
    fn test_references_recomputed_after_mutation() {
        let mut tree = ProgramTree::new();
        let named = tree.named_specifier("createSelector", "createSelector");
        let import = tree.import_decl(vec![named], "solidselectors");
        let callee = tree.ident("createSelector");
        let call = tree.call(callee, vec![]);
        let pattern = tree.ident("s");
        let declarator = tree.declarator(pattern, Some(call));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![import, decl]);

        let binding = Binding {
            name: "createSelector".to_string(),
            kind: BindingKind::ImportNamed,
            declaration: named,
        };
        assert_eq!(resolver().references_of(&tree, &binding).len(), 1);

        tree.replace_node(
            call,
            NodeKind::StrLit {
                value: "cool:0".to_string(),
            },
        );
        assert!(resolver().references_of(&tree, &binding).is_empty());
    }

    #[test]
    fn test_member_object_counts_as_reference() {
        let mut tree = ProgramTree::new();
        let default = tree.default_specifier("POM");
        let import = tree.import_decl(vec![default], "solidselectors");
        let object = tree.ident("POM");
        let member = tree.member(object, "keepsThis");
        let call = tree.call(member, vec![]);
        let stmt = tree.expr_stmt(call);
        tree.program(vec![import, stmt]);

        let binding = Binding {
            name: "POM".to_string(),
            kind: BindingKind::ImportDefault,
            declaration: default,
        };
        assert_eq!(resolver().references_of(&tree, &binding), vec![object]);
    }
}
