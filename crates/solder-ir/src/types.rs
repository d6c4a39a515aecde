use crate::context::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatKind {
    Half,
    Float,
    Double,
    Fp128,
}

impl FloatKind {
    pub fn bits(&self) -> u32 {
        match self {
            FloatKind::Half => 16,
            FloatKind::Float => 32,
            FloatKind::Double => 64,
            FloatKind::Fp128 => 128,
        }
    }
}

/// Closed set of IR types. Aggregate and pointer forms reference other interned
/// types by `TypeRef`, so structurally equal types share one slot per context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    Integer(u32),
    Float(FloatKind),
    Pointer(TypeRef),
    Array { elem: TypeRef, len: u64 },
    Struct { fields: Vec<TypeRef> },
    Function {
        ret: TypeRef,
        params: Vec<TypeRef>,
        varargs: bool,
    },
}

impl Type {
    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer(_))
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Type::Float(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Type::Array { .. } | Type::Struct { .. })
    }

    pub fn int_bits(&self) -> Option<u32> {
        match self {
            Type::Integer(bits) => Some(*bits),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Integer(bits) => write!(f, "i{}", bits),
            Type::Float(FloatKind::Half) => write!(f, "half"),
            Type::Float(FloatKind::Float) => write!(f, "float"),
            Type::Float(FloatKind::Double) => write!(f, "double"),
            Type::Float(FloatKind::Fp128) => write!(f, "fp128"),
            Type::Pointer(_) => write!(f, "ptr"),
            Type::Array { len, .. } => write!(f, "[{} x ...]", len),
            Type::Struct { fields } => write!(f, "{{ {} fields }}", fields.len()),
            Type::Function { params, .. } => write!(f, "fn({} params)", params.len()),
        }
    }
}
