//! Node rewriting: call sites become string literals.

use tracing::debug;

use crate::ast::{NodeId, NodeKind, ProgramTree};

use super::matcher::CallSite;
use super::PassState;

/// Replace a validated call with its evaluated string literal and drop
/// the intermediate options declarator, if the site had one.
///
/// The intermediate declarator is removed regardless of other references:
/// the options object is assumed single-purpose. The inserted literal is
/// no longer a call expression, so later traversals cannot re-match it.
pub fn rewrite_call(tree: &mut ProgramTree, site: &CallSite, value: String, state: &mut PassState) {
    debug!(function = %site.function, value = %value, "inlining generation call");
    tree.replace_node(site.call, NodeKind::StrLit { value });
    state.rewritten_calls += 1;
    if site.via_member {
        state.rewritten_member_calls += 1;
    }

    if let Some(declarator) = site.intermediate {
        if remove_declarator(tree, declarator) {
            state.removed_declarators += 1;
        }
    }
}

/// Detach a variable declarator; when that empties the enclosing
/// declaration, the whole statement goes with it.
///
/// Returns `false` when the declarator was already detached (two call
/// sites sharing one options variable remove it once).
pub(crate) fn remove_declarator(tree: &mut ProgramTree, declarator: NodeId) -> bool {
    let parent = tree.parent(declarator);
    if !tree.remove_node(declarator) {
        return false;
    }
    if let Some(decl) = parent {
        if matches!(tree.kind(decl), NodeKind::VarDecl { declarators, .. } if declarators.is_empty())
        {
            tree.remove_node(decl);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::emit::emit_program;
    use crate::ast::DeclKind;
    use crate::pass::locate::Role;

    fn site_for(call: NodeId, intermediate: Option<NodeId>) -> CallSite {
        CallSite {
            call,
            role: Role::Selector,
            function: "createSelector".to_string(),
            via_member: false,
            options: None,
            intermediate,
            prefix: None,
        }
    }

    #[test]
    fn test_call_becomes_string_literal() {
        let mut tree = ProgramTree::new();
        let callee = tree.ident("createSelector");
        let call = tree.call(callee, vec![]);
        let pattern = tree.ident("s");
        let declarator = tree.declarator(pattern, Some(call));
        let decl = tree.var_decl(DeclKind::Const, vec![declarator]);
        tree.program(vec![decl]);

        let mut state = PassState::default();
        rewrite_call(&mut tree, &site_for(call, None), "cool:0".to_string(), &mut state);

        assert_eq!(emit_program(&tree), "const s = \"cool:0\";");
        assert_eq!(state.rewritten_calls, 1);
        assert_eq!(state.rewritten_member_calls, 0);
    }

    #[test]
    fn test_intermediate_declarator_is_removed_with_statement() {
        let mut tree = ProgramTree::new();
        let opts_pattern = tree.ident("opts");
        let object = tree.object_lit(vec![]);
        let opts_declarator = tree.declarator(opts_pattern, Some(object));
        let opts_decl = tree.var_decl(DeclKind::Const, vec![opts_declarator]);
        let callee = tree.ident("createSelector");
        let argument = tree.ident("opts");
        let call = tree.call(callee, vec![argument]);
        let stmt = tree.expr_stmt(call);
        tree.program(vec![opts_decl, stmt]);

        let mut state = PassState::default();
        rewrite_call(
            &mut tree,
            &site_for(call, Some(opts_declarator)),
            "cool:0".to_string(),
            &mut state,
        );

        assert_eq!(emit_program(&tree), "\"cool:0\";");
        assert_eq!(state.removed_declarators, 1);
        assert!(!tree.is_attached(opts_decl));
    }

    #[test]
    fn test_shared_intermediate_removed_once() {
        let mut tree = ProgramTree::new();
        let opts_pattern = tree.ident("opts");
        let object = tree.object_lit(vec![]);
        let opts_declarator = tree.declarator(opts_pattern, Some(object));
        let opts_decl = tree.var_decl(DeclKind::Const, vec![opts_declarator]);
        let first_callee = tree.ident("createSelector");
        let first_argument = tree.ident("opts");
        let first_call = tree.call(first_callee, vec![first_argument]);
        let first_stmt = tree.expr_stmt(first_call);
        let second_callee = tree.ident("createSelector");
        let second_argument = tree.ident("opts");
        let second_call = tree.call(second_callee, vec![second_argument]);
        let second_stmt = tree.expr_stmt(second_call);
        tree.program(vec![opts_decl, first_stmt, second_stmt]);

        let mut state = PassState::default();
        rewrite_call(
            &mut tree,
            &site_for(first_call, Some(opts_declarator)),
            "a:0".to_string(),
            &mut state,
        );
        rewrite_call(
            &mut tree,
            &site_for(second_call, Some(opts_declarator)),
            "a:1".to_string(),
            &mut state,
        );

        assert_eq!(state.rewritten_calls, 2);
        assert_eq!(state.removed_declarators, 1);
        assert_eq!(emit_program(&tree), "\"a:0\";\n\"a:1\";");
    }

    #[test]
    fn test_sibling_declarator_keeps_statement() {
        let mut tree = ProgramTree::new();
        let opts_pattern = tree.ident("opts");
        let object = tree.object_lit(vec![]);
        let opts_declarator = tree.declarator(opts_pattern, Some(object));
        let other_pattern = tree.ident("other");
        let other_init = tree.num_lit(1.0);
        let other_declarator = tree.declarator(other_pattern, Some(other_init));
        let decl = tree.var_decl(DeclKind::Const, vec![opts_declarator, other_declarator]);
        tree.program(vec![decl]);

        assert!(remove_declarator(&mut tree, opts_declarator));
        assert!(tree.is_attached(decl), "statement keeps its sibling");
        assert_eq!(emit_program(&tree), "const other = 1;");
    }
}
