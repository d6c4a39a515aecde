use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of wrapper classes. The native library's single-rooted
/// hierarchy is mirrored as per-tag ancestry slices instead of nested types;
/// "instance of ancestor" is membership in that slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassTag {
    Context,
    Module,
    ApInt,
    ApFloat,
    Attribute,
    Type,
    IntegerType,
    PointerType,
    ArrayType,
    StructType,
    FunctionType,
    Value,
    Argument,
    BasicBlock,
    User,
    Constant,
    GlobalValue,
    GlobalObject,
    GlobalVariable,
    Function,
    ConstantInt,
    ConstantFp,
    ConstantArray,
    ConstantStruct,
    ConstantPointerNull,
    ConstantDataArray,
    ConstantExpr,
    UndefValue,
}

impl ClassTag {
    pub fn name(&self) -> &'static str {
        match self {
            ClassTag::Context => "Context",
            ClassTag::Module => "Module",
            ClassTag::ApInt => "ApInt",
            ClassTag::ApFloat => "ApFloat",
            ClassTag::Attribute => "Attribute",
            ClassTag::Type => "Type",
            ClassTag::IntegerType => "IntegerType",
            ClassTag::PointerType => "PointerType",
            ClassTag::ArrayType => "ArrayType",
            ClassTag::StructType => "StructType",
            ClassTag::FunctionType => "FunctionType",
            ClassTag::Value => "Value",
            ClassTag::Argument => "Argument",
            ClassTag::BasicBlock => "BasicBlock",
            ClassTag::User => "User",
            ClassTag::Constant => "Constant",
            ClassTag::GlobalValue => "GlobalValue",
            ClassTag::GlobalObject => "GlobalObject",
            ClassTag::GlobalVariable => "GlobalVariable",
            ClassTag::Function => "Function",
            ClassTag::ConstantInt => "ConstantInt",
            ClassTag::ConstantFp => "ConstantFp",
            ClassTag::ConstantArray => "ConstantArray",
            ClassTag::ConstantStruct => "ConstantStruct",
            ClassTag::ConstantPointerNull => "ConstantPointerNull",
            ClassTag::ConstantDataArray => "ConstantDataArray",
            ClassTag::ConstantExpr => "ConstantExpr",
            ClassTag::UndefValue => "UndefValue",
        }
    }

    pub fn parent(&self) -> Option<ClassTag> {
        use ClassTag::*;
        match self {
            Context | Module | ApInt | ApFloat | Attribute | Type | Value => None,
            IntegerType | PointerType | ArrayType | StructType | FunctionType => Some(Type),
            Argument | BasicBlock | User => Some(Value),
            Constant => Some(User),
            GlobalValue => Some(Constant),
            GlobalObject => Some(GlobalValue),
            GlobalVariable | Function => Some(GlobalObject),
            ConstantInt | ConstantFp | ConstantArray | ConstantStruct | ConstantPointerNull
            | ConstantDataArray | ConstantExpr | UndefValue => Some(Constant),
        }
    }

    /// Self plus every ancestor, most-derived first.
    pub fn ancestry(&self) -> &'static [ClassTag] {
        use ClassTag::*;
        match self {
            Context => &[Context],
            Module => &[Module],
            ApInt => &[ApInt],
            ApFloat => &[ApFloat],
            Attribute => &[Attribute],
            Type => &[Type],
            IntegerType => &[IntegerType, Type],
            PointerType => &[PointerType, Type],
            ArrayType => &[ArrayType, Type],
            StructType => &[StructType, Type],
            FunctionType => &[FunctionType, Type],
            Value => &[Value],
            Argument => &[Argument, Value],
            BasicBlock => &[BasicBlock, Value],
            User => &[User, Value],
            Constant => &[Constant, User, Value],
            GlobalValue => &[GlobalValue, Constant, User, Value],
            GlobalObject => &[GlobalObject, GlobalValue, Constant, User, Value],
            GlobalVariable => &[GlobalVariable, GlobalObject, GlobalValue, Constant, User, Value],
            Function => &[Function, GlobalObject, GlobalValue, Constant, User, Value],
            ConstantInt => &[ConstantInt, Constant, User, Value],
            ConstantFp => &[ConstantFp, Constant, User, Value],
            ConstantArray => &[ConstantArray, Constant, User, Value],
            ConstantStruct => &[ConstantStruct, Constant, User, Value],
            ConstantPointerNull => &[ConstantPointerNull, Constant, User, Value],
            ConstantDataArray => &[ConstantDataArray, Constant, User, Value],
            ConstantExpr => &[ConstantExpr, Constant, User, Value],
            UndefValue => &[UndefValue, Constant, User, Value],
        }
    }

    pub fn is_a(&self, other: ClassTag) -> bool {
        self.ancestry().contains(&other)
    }

    /// Whether a host null type-checks as this class. Every class standing for
    /// an optional native object accepts null; only the classes the native
    /// side always consumes by reference do not.
    pub fn permits_null(&self) -> bool {
        !matches!(self, ClassTag::Context | ClassTag::ApInt | ClassTag::ApFloat)
    }

    pub fn all() -> &'static [ClassTag] {
        use ClassTag::*;
        &[
            Context,
            Module,
            ApInt,
            ApFloat,
            Attribute,
            Type,
            IntegerType,
            PointerType,
            ArrayType,
            StructType,
            FunctionType,
            Value,
            Argument,
            BasicBlock,
            User,
            Constant,
            GlobalValue,
            GlobalObject,
            GlobalVariable,
            Function,
            ConstantInt,
            ConstantFp,
            ConstantArray,
            ConstantStruct,
            ConstantPointerNull,
            ConstantDataArray,
            ConstantExpr,
            UndefValue,
        ]
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static metadata the registry holds per wrapper class.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub tag: ClassTag,
    pub name: &'static str,
    pub parent: Option<ClassTag>,
    pub permits_null: bool,
}

impl ClassDescriptor {
    pub fn of(tag: ClassTag) -> Self {
        Self {
            tag,
            name: tag.name(),
            parent: tag.parent(),
            permits_null: tag.permits_null(),
        }
    }
}
