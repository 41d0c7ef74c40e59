//! Call-site matching and validation.
//!
//! For one located import, traverses every call expression in the tree
//! and matches those invoking its aliases: a callee identifier equal to a
//! role's local name, or a member access whose object is the whole-module
//! alias and whose property is a role's function name.
//!
//! A matched call is validated before anything mutates:
//! - at most one positional argument;
//! - the argument, if present, is an inline object literal or an
//!   identifier whose binding is a variable declarator initialized with
//!   one;
//! - every property of the resolved object holds a literal value;
//! - a `prefix` property, if present, holds a string literal.
//!
//! Any violation is a hard error for the whole compile unit.

use crate::ast::{NodeId, NodeKind, ProgramTree};
use crate::config::TransformConfig;
use crate::error::{TransformError, TransformResult};
use crate::scope::{BindingKind, ScopeResolver};

use super::locate::{LocatedImport, Role};

/// One validated call of a generation function, ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSite {
    /// The matched call expression node.
    pub call: NodeId,
    pub role: Role,
    /// Display name of the invoked function, for diagnostics.
    pub function: String,
    /// Whether the call went through a whole-module alias member access.
    pub via_member: bool,
    /// The resolved options object literal, if the call carried one.
    pub options: Option<NodeId>,
    /// The intermediate variable declarator the options were resolved
    /// through, if any; scheduled for removal by the rewriter.
    pub intermediate: Option<NodeId>,
    /// The validated literal prefix, if the options carried one.
    pub prefix: Option<String>,
}

/// Find and validate every call site of this import's aliases.
///
/// Traverses the tree as it currently is: calls already rewritten to
/// string literals by earlier statements are no longer call expressions
/// and cannot re-match, and detached nodes are unreachable from the root.
pub fn find_call_sites(
    tree: &ProgramTree,
    import: &LocatedImport,
    scopes: &impl ScopeResolver,
    config: &TransformConfig,
) -> TransformResult<Vec<CallSite>> {
    let Some(root) = tree.root() else {
        return Ok(Vec::new());
    };

    let mut sites = Vec::new();
    for id in tree.descendants(root) {
        if !matches!(tree.kind(id), NodeKind::CallExpr { .. }) {
            continue;
        }
        if let Some((role, function, via_member)) = match_call(tree, import, config, id) {
            sites.push(validate(tree, scopes, id, role, function, via_member)?);
        }
    }
    Ok(sites)
}

fn match_call(
    tree: &ProgramTree,
    import: &LocatedImport,
    config: &TransformConfig,
    call: NodeId,
) -> Option<(Role, String, bool)> {
    let NodeKind::CallExpr { callee, .. } = tree.kind(call) else {
        return None;
    };
    match tree.kind(*callee) {
        NodeKind::Ident { name } => import
            .roles
            .iter()
            .find(|role| &role.local == name)
            .map(|role| (role.role, name.clone(), false)),
        NodeKind::MemberExpr { object, property } => {
            let alias = import.alias.as_ref()?;
            if tree.ident_name(*object) != Some(alias.local.as_str()) {
                return None;
            }
            role_of_member(property, config).map(|role| (role, property.clone(), true))
        }
        _ => None,
    }
}

fn role_of_member(property: &str, config: &TransformConfig) -> Option<Role> {
    if property == config.selector_fn {
        Some(Role::Selector)
    } else if property == config.live_selector_fn {
        Some(Role::LiveSelector)
    } else {
        None
    }
}

fn validate(
    tree: &ProgramTree,
    scopes: &impl ScopeResolver,
    call: NodeId,
    role: Role,
    function: String,
    via_member: bool,
) -> TransformResult<CallSite> {
    let span = tree.span(call);
    let NodeKind::CallExpr { arguments, .. } = tree.kind(call) else {
        return Err(TransformError::argument_shape(
            function,
            tree.kind(call).describe(),
            span,
        ));
    };

    if arguments.len() > 1 {
        return Err(TransformError::argument_count(function, span));
    }

    let mut options = None;
    let mut intermediate = None;

    if let Some(&argument) = arguments.first() {
        match tree.kind(argument) {
            NodeKind::ObjectLit { .. } => options = Some(argument),
            NodeKind::Ident { name } => {
                let binding = scopes
                    .resolve_binding(tree, name, argument)
                    .ok_or_else(|| {
                        TransformError::unsupported_binding(function.clone(), name.clone(), span)
                    })?;
                if binding.kind != BindingKind::VarDeclarator {
                    return Err(TransformError::unsupported_binding(
                        function,
                        name.clone(),
                        span,
                    ));
                }
                let NodeKind::VarDeclarator { init, .. } = tree.kind(binding.declaration) else {
                    return Err(TransformError::unsupported_binding(
                        function,
                        name.clone(),
                        span,
                    ));
                };
                match init {
                    Some(init) if matches!(tree.kind(*init), NodeKind::ObjectLit { .. }) => {
                        options = Some(*init);
                        intermediate = Some(binding.declaration);
                    }
                    Some(init) => {
                        return Err(TransformError::argument_shape(
                            function,
                            format!("reference `{}` to {}", name, tree.kind(*init).describe()),
                            span,
                        ));
                    }
                    None => {
                        return Err(TransformError::argument_shape(
                            function,
                            format!("reference `{}` with no initializer", name),
                            span,
                        ));
                    }
                }
            }
            other => {
                return Err(TransformError::argument_shape(
                    function,
                    other.describe(),
                    span,
                ));
            }
        }
    }

    // properties must all be literal before any of them is read
    if let Some(object) = options {
        if let NodeKind::ObjectLit { properties } = tree.kind(object) {
            for &property in properties {
                let NodeKind::ObjectProperty { key, value } = tree.kind(property) else {
                    continue;
                };
                if !tree.kind(*value).is_literal_value() {
                    return Err(TransformError::non_literal_property(
                        function,
                        key.clone(),
                        span,
                    ));
                }
            }
        }
    }

    let prefix = match options.and_then(|object| property_value(tree, object, "prefix")) {
        Some(value) => match tree.kind(value) {
            NodeKind::StrLit { value } => Some(value.clone()),
            _ => return Err(TransformError::prefix_type(function, span)),
        },
        None => None,
    };

    Ok(CallSite {
        call,
        role,
        function,
        via_member,
        options,
        intermediate,
        prefix,
    })
}

fn property_value(tree: &ProgramTree, object: NodeId, key: &str) -> Option<NodeId> {
    let NodeKind::ObjectLit { properties } = tree.kind(object) else {
        return None;
    };
    for &property in properties {
        if let NodeKind::ObjectProperty { key: found, value } = tree.kind(property) {
            if found == key {
                return Some(*value);
            }
        }
    }
    None
}
