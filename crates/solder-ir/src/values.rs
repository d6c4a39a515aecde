use crate::adt::{ApFloat, ApInt};
use crate::context::{AttrRef, ModuleRef, TypeRef, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Linkage {
    External,
    Internal,
    Private,
    Weak,
    Common,
    Appending,
}

/// Opcodes a constant expression node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprOp {
    Add,
    Sub,
    Mul,
    Shl,
    LShr,
    AShr,
    And,
    Or,
    Xor,
    UMin,
    Neg,
    FNeg,
    Not,
    Trunc,
    SExt,
    ZExt,
    FpTrunc,
    FpExt,
    UiToFp,
    SiToFp,
    FpToUi,
    FpToSi,
    BitCast,
    AlignOf,
    SizeOf,
    OffsetOf,
}

impl ExprOp {
    pub fn is_cast(&self) -> bool {
        matches!(
            self,
            ExprOp::Trunc
                | ExprOp::SExt
                | ExprOp::ZExt
                | ExprOp::FpTrunc
                | ExprOp::FpExt
                | ExprOp::UiToFp
                | ExprOp::SiToFp
                | ExprOp::FpToUi
                | ExprOp::FpToSi
                | ExprOp::BitCast
        )
    }
}

/// Wrap/exactness markers attached to expression nodes. Part of the node's
/// canonical identity: `add nuw` and plain `add` intern separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprFlags {
    pub nuw: bool,
    pub nsw: bool,
    pub exact: bool,
}

impl ExprFlags {
    pub fn wrap(nuw: bool, nsw: bool) -> Self {
        Self {
            nuw,
            nsw,
            exact: false,
        }
    }

    pub fn exact(exact: bool) -> Self {
        Self {
            nuw: false,
            nsw: false,
            exact,
        }
    }
}

/// Closed variant set for every object living in a context's value arena.
/// The native hierarchy (value / user / constant / global-value / function)
/// exists only as classification over these variants, not as nested types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueData {
    Argument {
        func: ValueRef,
        index: u32,
        ty: TypeRef,
    },
    BasicBlock {
        name: String,
        parent: Option<ValueRef>,
    },
    Function {
        name: String,
        ty: TypeRef,
        linkage: Linkage,
        module: Option<ModuleRef>,
        args: Vec<ValueRef>,
        fn_attrs: Vec<AttrRef>,
        ret_attrs: Vec<AttrRef>,
        param_attrs: Vec<Vec<AttrRef>>,
        personality: Option<ValueRef>,
        erased: bool,
    },
    GlobalVariable {
        name: String,
        ty: TypeRef,
        linkage: Linkage,
        module: Option<ModuleRef>,
        init: Option<ValueRef>,
    },
    ConstantInt {
        ty: TypeRef,
        value: ApInt,
    },
    ConstantFp {
        ty: TypeRef,
        value: ApFloat,
    },
    ConstantArray {
        ty: TypeRef,
        elems: Vec<ValueRef>,
    },
    ConstantStruct {
        ty: TypeRef,
        elems: Vec<ValueRef>,
    },
    ConstantPointerNull {
        ty: TypeRef,
    },
    ConstantDataArray {
        ty: TypeRef,
        data: Vec<i64>,
    },
    ConstantExpr {
        ty: TypeRef,
        op: ExprOp,
        operands: Vec<ValueRef>,
        flags: ExprFlags,
        /// Queried type for align-of / size-of / offset-of nodes.
        ty_operand: Option<TypeRef>,
    },
    Undef {
        ty: TypeRef,
    },
}

/// The library's own type-discrimination facility: one stable kind per
/// arena variant, in place of a chain of `isa<>`-style probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Argument,
    BasicBlock,
    Function,
    GlobalVariable,
    ConstantInt,
    ConstantFp,
    ConstantArray,
    ConstantStruct,
    ConstantPointerNull,
    ConstantDataArray,
    ConstantExpr,
    Undef,
}

impl ValueKind {
    pub fn is_constant(&self) -> bool {
        !matches!(self, ValueKind::Argument | ValueKind::BasicBlock)
    }

    pub fn is_global(&self) -> bool {
        matches!(self, ValueKind::Function | ValueKind::GlobalVariable)
    }
}

impl ValueData {
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueData::Argument { .. } => ValueKind::Argument,
            ValueData::BasicBlock { .. } => ValueKind::BasicBlock,
            ValueData::Function { .. } => ValueKind::Function,
            ValueData::GlobalVariable { .. } => ValueKind::GlobalVariable,
            ValueData::ConstantInt { .. } => ValueKind::ConstantInt,
            ValueData::ConstantFp { .. } => ValueKind::ConstantFp,
            ValueData::ConstantArray { .. } => ValueKind::ConstantArray,
            ValueData::ConstantStruct { .. } => ValueKind::ConstantStruct,
            ValueData::ConstantPointerNull { .. } => ValueKind::ConstantPointerNull,
            ValueData::ConstantDataArray { .. } => ValueKind::ConstantDataArray,
            ValueData::ConstantExpr { .. } => ValueKind::ConstantExpr,
            ValueData::Undef { .. } => ValueKind::Undef,
        }
    }

    pub fn ty(&self) -> TypeRef {
        match self {
            ValueData::Argument { ty, .. }
            | ValueData::Function { ty, .. }
            | ValueData::GlobalVariable { ty, .. }
            | ValueData::ConstantInt { ty, .. }
            | ValueData::ConstantFp { ty, .. }
            | ValueData::ConstantArray { ty, .. }
            | ValueData::ConstantStruct { ty, .. }
            | ValueData::ConstantPointerNull { ty }
            | ValueData::ConstantDataArray { ty, .. }
            | ValueData::ConstantExpr { ty, .. }
            | ValueData::Undef { ty } => *ty,
            // Blocks are labels; they type as void at the boundary.
            ValueData::BasicBlock { .. } => TypeRef::VOID,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Argument => "argument",
            ValueKind::BasicBlock => "basic-block",
            ValueKind::Function => "function",
            ValueKind::GlobalVariable => "global-variable",
            ValueKind::ConstantInt => "constant-int",
            ValueKind::ConstantFp => "constant-fp",
            ValueKind::ConstantArray => "constant-array",
            ValueKind::ConstantStruct => "constant-struct",
            ValueKind::ConstantPointerNull => "constant-pointer-null",
            ValueKind::ConstantDataArray => "constant-data-array",
            ValueKind::ConstantExpr => "constant-expr",
            ValueKind::Undef => "undef",
        };
        write!(f, "{}", name)
    }
}
