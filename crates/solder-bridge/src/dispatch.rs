use crate::class::ClassTag;
use solder_ir::{Context, Type, TypeRef, ValueKind, ValueRef};

/// Most-derived wrapper class for a reference whose static type is the
/// constant category. The priority order is a compatibility contract:
/// global-value, integer, floating-point, array, struct, null-pointer,
/// data-array, expression, undefined, else the generic constant tag.
pub fn classify_constant(ctx: &Context, value: ValueRef) -> ClassTag {
    match ctx.value_kind(value) {
        ValueKind::Function | ValueKind::GlobalVariable => classify_global(ctx, value),
        ValueKind::ConstantInt => ClassTag::ConstantInt,
        ValueKind::ConstantFp => ClassTag::ConstantFp,
        ValueKind::ConstantArray => ClassTag::ConstantArray,
        ValueKind::ConstantStruct => ClassTag::ConstantStruct,
        ValueKind::ConstantPointerNull => ClassTag::ConstantPointerNull,
        ValueKind::ConstantDataArray => ClassTag::ConstantDataArray,
        ValueKind::ConstantExpr => ClassTag::ConstantExpr,
        ValueKind::Undef => ClassTag::UndefValue,
        // Not constants at all; the base tag is the contractual fallback.
        ValueKind::Argument | ValueKind::BasicBlock => ClassTag::Constant,
    }
}

/// Refinement for the global-value category.
pub fn classify_global(ctx: &Context, value: ValueRef) -> ClassTag {
    match ctx.value_kind(value) {
        ValueKind::Function => ClassTag::Function,
        ValueKind::GlobalVariable => ClassTag::GlobalVariable,
        _ => ClassTag::GlobalValue,
    }
}

/// Most-derived wrapper class for a reference whose static type is the value
/// root. Constants delegate to `classify_constant`.
pub fn classify_value(ctx: &Context, value: ValueRef) -> ClassTag {
    match ctx.value_kind(value) {
        ValueKind::Argument => ClassTag::Argument,
        ValueKind::BasicBlock => ClassTag::BasicBlock,
        kind if kind.is_constant() => classify_constant(ctx, value),
        _ => ClassTag::Value,
    }
}

/// Most-derived wrapper class for a type reference.
pub fn classify_type(ctx: &Context, ty: TypeRef) -> ClassTag {
    match ctx.ty(ty) {
        Type::Integer(_) => ClassTag::IntegerType,
        Type::Pointer(_) => ClassTag::PointerType,
        Type::Array { .. } => ClassTag::ArrayType,
        Type::Struct { .. } => ClassTag::StructType,
        Type::Function { .. } => ClassTag::FunctionType,
        _ => ClassTag::Type,
    }
}
