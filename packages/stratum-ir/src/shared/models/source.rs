//! Source-side method representation
//!
//! The open-ended statement/expression grammar a frontend hands to the
//! translator. The grammar deliberately carries more kinds than the IR
//! models: constant kinds like method handles, condition operators, and
//! statement shapes like invokes and allocations all appear here, and
//! the translator decides per kind whether to lower, skip, or fail.

use serde::{Deserialize, Serialize};

use super::ty::TypeRef;

/// Index of a local slot within one method body
pub type LocalId = u32;

/// A declared local slot (receiver, parameter, or body local)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDecl {
    pub name: String,
    pub ty: TypeRef,
}

impl LocalDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A categorized constant node from the source grammar
///
/// The first seven kinds convert to IR literals. The remaining kinds
/// exist in the grammar but have no literal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantNode {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Null,
    /// A class object constant, by canonical class name
    Class(String),
    /// Method-handle constant, unsupported by the IR
    MethodHandle(String),
    /// Method-type constant, unsupported by the IR
    MethodType(String),
}

impl ConstantNode {
    /// Grammar-level kind name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstantNode::Int(_) => "int",
            ConstantNode::Long(_) => "long",
            ConstantNode::Float(_) => "float",
            ConstantNode::Double(_) => "double",
            ConstantNode::Str(_) => "string",
            ConstantNode::Null => "null",
            ConstantNode::Class(_) => "class",
            ConstantNode::MethodHandle(_) => "method-handle",
            ConstantNode::MethodType(_) => "method-type",
        }
    }
}

/// A binary operator node from the source grammar
///
/// Carries both the operators the IR models and the condition operators
/// it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Cmp,
    Cmpl,
    Cmpg,
    Shl,
    Shr,
    Ushr,
    // Condition operators appear in branch statements only and have no
    // three-address binary form.
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOpKind {
    /// Grammar-level operator name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            BinaryOpKind::Add => "add",
            BinaryOpKind::Sub => "sub",
            BinaryOpKind::Mul => "mul",
            BinaryOpKind::Div => "div",
            BinaryOpKind::Rem => "rem",
            BinaryOpKind::And => "and",
            BinaryOpKind::Or => "or",
            BinaryOpKind::Xor => "xor",
            BinaryOpKind::Cmp => "cmp",
            BinaryOpKind::Cmpl => "cmpl",
            BinaryOpKind::Cmpg => "cmpg",
            BinaryOpKind::Shl => "shl",
            BinaryOpKind::Shr => "shr",
            BinaryOpKind::Ushr => "ushr",
            BinaryOpKind::Eq => "eq",
            BinaryOpKind::Ne => "ne",
            BinaryOpKind::Lt => "lt",
            BinaryOpKind::Le => "le",
            BinaryOpKind::Gt => "gt",
            BinaryOpKind::Ge => "ge",
        }
    }
}

/// An operand of a binary expression: a local read or an inline constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Local(LocalId),
    Constant(ConstantNode),
}

/// Right-hand side of a source assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rvalue {
    /// Read of another local
    Local(LocalId),

    /// Inline constant
    Constant(ConstantNode),

    /// Binary expression over two operands
    Binary {
        op: BinaryOpKind,
        lhs: Operand,
        rhs: Operand,
    },

    /// Call expression, not modeled by the IR
    Invoke { target: String },

    /// Object allocation, not modeled by the IR
    New { class: String },
}

/// A source statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceStmt {
    /// Assignment into a local slot
    Assign { lhs: LocalId, rhs: Rvalue },

    /// Return, not modeled by the IR
    Return { value: Option<LocalId> },

    /// Call for effect, not modeled by the IR
    Invoke { target: String },

    /// Unconditional jump, not modeled by the IR
    Goto { target: usize },

    Nop,
}

impl SourceStmt {
    /// Grammar-level statement kind name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            SourceStmt::Assign { rhs, .. } => match rhs {
                Rvalue::Local(_) => "assign-local",
                Rvalue::Constant(_) => "assign-constant",
                Rvalue::Binary { .. } => "assign-binary",
                Rvalue::Invoke { .. } => "assign-invoke",
                Rvalue::New { .. } => "assign-new",
            },
            SourceStmt::Return { .. } => "return",
            SourceStmt::Invoke { .. } => "invoke",
            SourceStmt::Goto { .. } => "goto",
            SourceStmt::Nop => "nop",
        }
    }
}

/// One method body as handed over by a frontend
///
/// Locals are a dense slot table; the receiver slot, parameter slots,
/// and statement operands all index into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMethod {
    pub name: String,
    pub is_static: bool,

    /// Receiver slot, present iff the method is an instance method
    pub this_local: Option<LocalId>,

    /// Parameter slots in declaration order
    pub param_locals: Vec<LocalId>,

    /// Slot table, indexed by `LocalId`
    pub locals: Vec<LocalDecl>,

    /// Statements in source order
    pub stmts: Vec<SourceStmt>,
}

impl SourceMethod {
    /// Create an empty static method
    pub fn new_static(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: true,
            this_local: None,
            param_locals: Vec::new(),
            locals: Vec::new(),
            stmts: Vec::new(),
        }
    }

    /// Create an empty instance method with a receiver slot of the
    /// given declaring class type
    pub fn new_instance(name: impl Into<String>, class: impl Into<TypeRef>) -> Self {
        let mut method = Self {
            name: name.into(),
            is_static: false,
            this_local: None,
            param_locals: Vec::new(),
            locals: Vec::new(),
            stmts: Vec::new(),
        };
        let this = method.add_local("this", class);
        method.this_local = Some(this);
        method
    }

    /// Append a local slot and return its id
    pub fn add_local(&mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> LocalId {
        let id = self.locals.len() as LocalId;
        self.locals.push(LocalDecl::new(name, ty));
        id
    }

    /// Append a parameter slot and return its id
    pub fn add_param(&mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> LocalId {
        let id = self.add_local(name, ty);
        self.param_locals.push(id);
        id
    }

    /// Append a statement
    pub fn push_stmt(&mut self, stmt: SourceStmt) {
        self.stmts.push(stmt);
    }

    /// Look up a local declaration
    pub fn local(&self, id: LocalId) -> Option<&LocalDecl> {
        self.locals.get(id as usize)
    }
}
