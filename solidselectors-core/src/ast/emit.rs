//! Source emission - renders a program tree back to JavaScript-like text.
//!
//! The hosting pipeline owns real serialization; this emitter exists for
//! diagnostics and for asserting transform output in tests.

use super::{NodeKind, NodeId, ProgramTree};

/// Render the whole program, one statement per line.
pub fn emit_program(tree: &ProgramTree) -> String {
    match tree.root() {
        Some(root) => match tree.kind(root) {
            NodeKind::Program { body } => emit_statements(tree, body, 0),
            _ => emit_node(tree, root, 0),
        },
        None => String::new(),
    }
}

fn emit_statements(tree: &ProgramTree, body: &[NodeId], indent: usize) -> String {
    body.iter()
        .map(|&stmt| format!("{}{}", "  ".repeat(indent), emit_node(tree, stmt, indent)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit_node(tree: &ProgramTree, id: NodeId, indent: usize) -> String {
    match tree.kind(id) {
        NodeKind::Program { body } => emit_statements(tree, body, indent),
        NodeKind::ImportDecl { specifiers, source } => {
            let mut parts = Vec::new();
            let mut named = Vec::new();
            for &spec in specifiers {
                match tree.kind(spec) {
                    NodeKind::ImportDefaultSpecifier { local } => parts.push(local.clone()),
                    NodeKind::ImportNamedSpecifier { imported, local } => {
                        if imported == local {
                            named.push(imported.clone());
                        } else {
                            named.push(format!("{} as {}", imported, local));
                        }
                    }
                    _ => {}
                }
            }
            if !named.is_empty() {
                parts.push(format!("{{ {} }}", named.join(", ")));
            }
            if parts.is_empty() {
                format!("import \"{}\";", escape(source))
            } else {
                format!("import {} from \"{}\";", parts.join(", "), escape(source))
            }
        }
        NodeKind::ImportDefaultSpecifier { local } => local.clone(),
        NodeKind::ImportNamedSpecifier { imported, local } => {
            if imported == local {
                imported.clone()
            } else {
                format!("{} as {}", imported, local)
            }
        }
        NodeKind::VarDecl {
            decl_kind,
            declarators,
        } => {
            let rendered: Vec<String> = declarators
                .iter()
                .map(|&d| emit_node(tree, d, indent))
                .collect();
            format!("{} {};", decl_kind.as_str(), rendered.join(", "))
        }
        NodeKind::VarDeclarator { pattern, init } => match init {
            Some(init) => format!(
                "{} = {}",
                emit_node(tree, *pattern, indent),
                emit_node(tree, *init, indent)
            ),
            None => emit_node(tree, *pattern, indent),
        },
        NodeKind::ObjectPattern { properties } => {
            if properties.is_empty() {
                "{}".to_string()
            } else {
                let rendered: Vec<String> = properties
                    .iter()
                    .map(|&p| emit_node(tree, p, indent))
                    .collect();
                format!("{{ {} }}", rendered.join(", "))
            }
        }
        NodeKind::PatternProperty { key, local } => {
            if key == local {
                key.clone()
            } else {
                format!("{}: {}", key, local)
            }
        }
        NodeKind::Ident { name } => name.clone(),
        NodeKind::CallExpr { callee, arguments } => {
            let args: Vec<String> = arguments
                .iter()
                .map(|&a| emit_node(tree, a, indent))
                .collect();
            format!("{}({})", emit_node(tree, *callee, indent), args.join(", "))
        }
        NodeKind::MemberExpr { object, property } => {
            format!("{}.{}", emit_node(tree, *object, indent), property)
        }
        NodeKind::ObjectLit { properties } => {
            if properties.is_empty() {
                "{}".to_string()
            } else {
                let rendered: Vec<String> = properties
                    .iter()
                    .map(|&p| emit_node(tree, p, indent))
                    .collect();
                format!("{{ {} }}", rendered.join(", "))
            }
        }
        NodeKind::ObjectProperty { key, value } => {
            format!("{}: {}", key, emit_node(tree, *value, indent))
        }
        NodeKind::StrLit { value } => format!("\"{}\"", escape(value)),
        NodeKind::NumLit { value } => {
            if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
                format!("{}", *value as i64)
            } else {
                format!("{}", value)
            }
        }
        NodeKind::BoolLit { value } => value.to_string(),
        NodeKind::NullLit => "null".to_string(),
        NodeKind::ExprStmt { expr } => format!("{};", emit_node(tree, *expr, indent)),
        NodeKind::BlockStmt { body } => {
            if body.is_empty() {
                "{}".to_string()
            } else {
                format!(
                    "{{\n{}\n{}}}",
                    emit_statements(tree, body, indent + 1),
                    "  ".repeat(indent)
                )
            }
        }
    }
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
