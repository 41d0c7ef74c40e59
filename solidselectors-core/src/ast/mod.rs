//! The program tree: an arena of kind-tagged nodes.
//!
//! One [`ProgramTree`] represents one compile unit. It is the ownership
//! root of all nodes and is mutated in place by the transform pass. The
//! node kinds form a closed enumeration covering exactly the constructs
//! the matcher recognizes; there are no duck-typed kind strings.
//!
//! Mutation surface (the tree half of the host service contract):
//! - [`ProgramTree::replace_node`]: swap a node's kind in place, detaching
//!   the old kind's children.
//! - [`ProgramTree::remove_node`]: detach a node from its parent's child
//!   list. Mandatory single-child slots (a callee, a declarator pattern)
//!   refuse removal, so the tree stays well-formed after every step.
//!
//! Detached nodes keep their arena slot but are unreachable from the root;
//! traversals start at the root and therefore never revisit them.

pub mod emit;

/// Index of a node in its [`ProgramTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source location of a node, when the producing parser supplied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// Declaration keyword of a variable statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Const,
    Let,
    Var,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Const => "const",
            DeclKind::Let => "let",
            DeclKind::Var => "var",
        }
    }
}

/// Closed enumeration of node kinds recognized by the transform.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of a compile unit.
    Program { body: Vec<NodeId> },
    /// `import <specifiers> from '<source>';`
    ImportDecl { specifiers: Vec<NodeId>, source: String },
    /// `import Alias from '...'` - a whole-module alias.
    ImportDefaultSpecifier { local: String },
    /// `import { imported as local } from '...'`
    ImportNamedSpecifier { imported: String, local: String },
    /// A `const`/`let`/`var` statement.
    VarDecl { decl_kind: DeclKind, declarators: Vec<NodeId> },
    /// One `<pattern> = <init>` inside a variable statement.
    VarDeclarator { pattern: NodeId, init: Option<NodeId> },
    /// Destructuring pattern `{ key: local, ... }`.
    ObjectPattern { properties: Vec<NodeId> },
    /// One `key: local` (or shorthand `key`) inside an object pattern.
    PatternProperty { key: String, local: String },
    /// A name in binding or reference position.
    Ident { name: String },
    /// `callee(arguments...)`
    CallExpr { callee: NodeId, arguments: Vec<NodeId> },
    /// `object.property` - static member access.
    MemberExpr { object: NodeId, property: String },
    /// `{ key: value, ... }`
    ObjectLit { properties: Vec<NodeId> },
    /// One `key: value` inside an object literal.
    ObjectProperty { key: String, value: NodeId },
    StrLit { value: String },
    NumLit { value: f64 },
    BoolLit { value: bool },
    NullLit,
    /// An expression used as a statement.
    ExprStmt { expr: NodeId },
    /// `{ ... }` - a block statement opening its own lexical scope.
    BlockStmt { body: Vec<NodeId> },
}

impl NodeKind {
    /// Ids of all child nodes, in document order.
    pub fn child_ids(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Program { body } | NodeKind::BlockStmt { body } => body.clone(),
            NodeKind::ImportDecl { specifiers, .. } => specifiers.clone(),
            NodeKind::VarDecl { declarators, .. } => declarators.clone(),
            NodeKind::VarDeclarator { pattern, init } => {
                let mut out = vec![*pattern];
                out.extend(init.iter().copied());
                out
            }
            NodeKind::ObjectPattern { properties } | NodeKind::ObjectLit { properties } => {
                properties.clone()
            }
            NodeKind::CallExpr { callee, arguments } => {
                let mut out = vec![*callee];
                out.extend_from_slice(arguments);
                out
            }
            NodeKind::MemberExpr { object, .. } => vec![*object],
            NodeKind::ObjectProperty { value, .. } => vec![*value],
            NodeKind::ExprStmt { expr } => vec![*expr],
            NodeKind::ImportDefaultSpecifier { .. }
            | NodeKind::ImportNamedSpecifier { .. }
            | NodeKind::PatternProperty { .. }
            | NodeKind::Ident { .. }
            | NodeKind::StrLit { .. }
            | NodeKind::NumLit { .. }
            | NodeKind::BoolLit { .. }
            | NodeKind::NullLit => Vec::new(),
        }
    }

    /// Whether this kind is a value-carrying literal accepted as an
    /// options property value (string, number, or boolean; `null` is not
    /// value-carrying and does not qualify).
    pub fn is_literal_value(&self) -> bool {
        matches!(
            self,
            NodeKind::StrLit { .. } | NodeKind::NumLit { .. } | NodeKind::BoolLit { .. }
        )
    }

    /// Human-readable kind name for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "a program",
            NodeKind::ImportDecl { .. } => "an import declaration",
            NodeKind::ImportDefaultSpecifier { .. } => "a default import specifier",
            NodeKind::ImportNamedSpecifier { .. } => "a named import specifier",
            NodeKind::VarDecl { .. } => "a variable declaration",
            NodeKind::VarDeclarator { .. } => "a variable declarator",
            NodeKind::ObjectPattern { .. } => "an object pattern",
            NodeKind::PatternProperty { .. } => "a pattern property",
            NodeKind::Ident { .. } => "an identifier",
            NodeKind::CallExpr { .. } => "a call expression",
            NodeKind::MemberExpr { .. } => "a member expression",
            NodeKind::ObjectLit { .. } => "an object literal",
            NodeKind::ObjectProperty { .. } => "an object property",
            NodeKind::StrLit { .. } => "a string literal",
            NodeKind::NumLit { .. } => "a number literal",
            NodeKind::BoolLit { .. } => "a boolean literal",
            NodeKind::NullLit => "null",
            NodeKind::ExprStmt { .. } => "an expression statement",
            NodeKind::BlockStmt { .. } => "a block statement",
        }
    }
}

/// One node of the program tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Option<Span>,
    parent: Option<NodeId>,
}

/// Arena-backed program tree for one compile unit.
#[derive(Debug, Clone, Default)]
pub struct ProgramTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl ProgramTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root program node, if one was built.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.nodes[id.index()].span
    }

    pub fn set_span(&mut self, id: NodeId, line: u32, column: u32) {
        self.nodes[id.index()].span = Some(Span { line, column });
    }

    /// Child ids of a node, snapshotted in document order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.index()].kind.child_ids()
    }

    /// Whether the node is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let mut at = id;
        loop {
            if at == root {
                return true;
            }
            match self.nodes[at.index()].parent {
                Some(parent) => at = parent,
                None => return false,
            }
        }
    }

    /// Depth-first preorder walk over the currently attached subtree.
    pub fn walk(&self, from: NodeId, visit: &mut impl FnMut(NodeId)) {
        visit(from);
        for child in self.children(from) {
            self.walk(child, visit);
        }
    }

    /// All nodes reachable from `from`, preorder.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(from, &mut |id| out.push(id));
        out
    }

    /// Name of an identifier node, if it is one.
    pub fn ident_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Ident { name } => Some(name),
            _ => None,
        }
    }

    /// Value of a string literal node, if it is one.
    pub fn str_value(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::StrLit { value } => Some(value),
            _ => None,
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let children = kind.child_ids();
        self.nodes.push(Node {
            kind,
            span: None,
            parent: None,
        });
        for child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        id
    }

    /// Replace a node's kind in place, keeping its identity and position.
    ///
    /// Children of the old kind are detached; children of the new kind are
    /// adopted. The span is kept so diagnostics still point at the
    /// original source location.
    pub fn replace_node(&mut self, target: NodeId, kind: NodeKind) {
        for child in self.nodes[target.index()].kind.child_ids() {
            self.nodes[child.index()].parent = None;
        }
        let adopted = kind.child_ids();
        self.nodes[target.index()].kind = kind;
        for child in adopted {
            self.nodes[child.index()].parent = Some(target);
        }
    }

    /// Detach a node from its parent's child list.
    ///
    /// Returns `false` when the node has no parent or occupies a mandatory
    /// slot that cannot be removed without leaving a hole (a callee, a
    /// declarator pattern, a property value).
    pub fn remove_node(&mut self, target: NodeId) -> bool {
        let Some(parent) = self.nodes[target.index()].parent else {
            return false;
        };
        let removed = match &mut self.nodes[parent.index()].kind {
            NodeKind::Program { body } | NodeKind::BlockStmt { body } => {
                remove_from(body, target)
            }
            NodeKind::ImportDecl { specifiers, .. } => remove_from(specifiers, target),
            NodeKind::VarDecl { declarators, .. } => remove_from(declarators, target),
            NodeKind::ObjectPattern { properties } | NodeKind::ObjectLit { properties } => {
                remove_from(properties, target)
            }
            NodeKind::CallExpr { arguments, .. } => remove_from(arguments, target),
            _ => false,
        };
        if removed {
            self.nodes[target.index()].parent = None;
        }
        removed
    }

    // ------------------------------------------------------------------
    // Construction helpers (used by hosts and tests to hand trees in)
    // ------------------------------------------------------------------

    /// Build the root program node from its statements.
    pub fn program(&mut self, body: Vec<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Program { body });
        self.root = Some(id);
        id
    }

    pub fn import_decl(&mut self, specifiers: Vec<NodeId>, source: &str) -> NodeId {
        self.push(NodeKind::ImportDecl {
            specifiers,
            source: source.to_string(),
        })
    }

    pub fn default_specifier(&mut self, local: &str) -> NodeId {
        self.push(NodeKind::ImportDefaultSpecifier {
            local: local.to_string(),
        })
    }

    pub fn named_specifier(&mut self, imported: &str, local: &str) -> NodeId {
        self.push(NodeKind::ImportNamedSpecifier {
            imported: imported.to_string(),
            local: local.to_string(),
        })
    }

    pub fn var_decl(&mut self, decl_kind: DeclKind, declarators: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::VarDecl {
            decl_kind,
            declarators,
        })
    }

    pub fn declarator(&mut self, pattern: NodeId, init: Option<NodeId>) -> NodeId {
        self.push(NodeKind::VarDeclarator { pattern, init })
    }

    pub fn object_pattern(&mut self, properties: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::ObjectPattern { properties })
    }

    pub fn pattern_property(&mut self, key: &str, local: &str) -> NodeId {
        self.push(NodeKind::PatternProperty {
            key: key.to_string(),
            local: local.to_string(),
        })
    }

    pub fn ident(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Ident {
            name: name.to_string(),
        })
    }

    pub fn call(&mut self, callee: NodeId, arguments: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::CallExpr { callee, arguments })
    }

    pub fn member(&mut self, object: NodeId, property: &str) -> NodeId {
        self.push(NodeKind::MemberExpr {
            object,
            property: property.to_string(),
        })
    }

    pub fn object_lit(&mut self, properties: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::ObjectLit { properties })
    }

    pub fn object_property(&mut self, key: &str, value: NodeId) -> NodeId {
        self.push(NodeKind::ObjectProperty {
            key: key.to_string(),
            value,
        })
    }

    pub fn str_lit(&mut self, value: &str) -> NodeId {
        self.push(NodeKind::StrLit {
            value: value.to_string(),
        })
    }

    pub fn num_lit(&mut self, value: f64) -> NodeId {
        self.push(NodeKind::NumLit { value })
    }

    pub fn bool_lit(&mut self, value: bool) -> NodeId {
        self.push(NodeKind::BoolLit { value })
    }

    pub fn null_lit(&mut self) -> NodeId {
        self.push(NodeKind::NullLit)
    }

    pub fn expr_stmt(&mut self, expr: NodeId) -> NodeId {
        self.push(NodeKind::ExprStmt { expr })
    }

    pub fn block_stmt(&mut self, body: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::BlockStmt { body })
    }

    /// A `require('<source>')` call expression.
    pub fn require_call(&mut self, source: &str) -> NodeId {
        let callee = self.ident("require");
        let arg = self.str_lit(source);
        self.call(callee, vec![arg])
    }
}

fn remove_from(list: &mut Vec<NodeId>, id: NodeId) -> bool {
    match list.iter().position(|&child| child == id) {
        Some(at) => {
            list.remove(at);
            true
        }
        None => false,
    }
}
