use crate::context::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed attribute-kind table. The numeric codes are a persistence contract:
/// host code stores them, so they must never be renumbered.
///
/// Codes 1..=65 are flag attributes, 66..=70 take a type payload, 71..=76 take
/// an integer payload. String attributes carry their own kind string and live
/// outside this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum AttrKind {
    AlwaysInline = 1,
    ArgMemOnly = 2,
    Builtin = 3,
    Cold = 4,
    Convergent = 5,
    DisableSanitizerInstrumentation = 6,
    Hot = 7,
    ImmArg = 8,
    InReg = 9,
    InaccessibleMemOnly = 10,
    InaccessibleMemOrArgMemOnly = 11,
    InlineHint = 12,
    JumpTable = 13,
    MinSize = 14,
    MustProgress = 15,
    Naked = 16,
    Nest = 17,
    NoAlias = 18,
    NoBuiltin = 19,
    NoCallback = 20,
    NoCapture = 21,
    NoCfCheck = 22,
    NoDuplicate = 23,
    NoFree = 24,
    NoImplicitFloat = 25,
    NoInline = 26,
    NoMerge = 27,
    NoProfile = 28,
    NoRecurse = 29,
    NoRedZone = 30,
    NoReturn = 31,
    NoSanitizeCoverage = 32,
    NoSync = 33,
    NoUndef = 34,
    NoUnwind = 35,
    NonLazyBind = 36,
    NonNull = 37,
    NullPointerIsValid = 38,
    OptForFuzzing = 39,
    OptimizeForSize = 40,
    OptimizeNone = 41,
    ReadNone = 42,
    ReadOnly = 43,
    Returned = 44,
    ReturnsTwice = 45,
    SExt = 46,
    SafeStack = 47,
    SanitizeAddress = 48,
    SanitizeHWAddress = 49,
    SanitizeMemTag = 50,
    SanitizeMemory = 51,
    SanitizeThread = 52,
    ShadowCallStack = 53,
    Speculatable = 54,
    SpeculativeLoadHardening = 55,
    StackProtect = 56,
    StackProtectReq = 57,
    StackProtectStrong = 58,
    StrictFP = 59,
    SwiftAsync = 60,
    SwiftError = 61,
    SwiftSelf = 62,
    UWTable = 63,
    WillReturn = 64,
    WriteOnly = 65,
    ByRef = 66,
    ByVal = 67,
    ElementType = 68,
    InAlloca = 69,
    Preallocated = 70,
    Alignment = 71,
    AllocSize = 72,
    Dereferenceable = 73,
    DereferenceableOrNull = 74,
    StackAlignment = 75,
    VScaleRange = 76,
}

pub const FIRST_ENUM_ATTR: u32 = AttrKind::AlwaysInline as u32;
pub const LAST_ENUM_ATTR: u32 = AttrKind::WriteOnly as u32;
pub const FIRST_TYPE_ATTR: u32 = AttrKind::ByRef as u32;
pub const LAST_TYPE_ATTR: u32 = AttrKind::Preallocated as u32;
pub const FIRST_INT_ATTR: u32 = AttrKind::Alignment as u32;
pub const LAST_INT_ATTR: u32 = AttrKind::VScaleRange as u32;

impl AttrKind {
    pub fn code(&self) -> u32 {
        *self as u32
    }

    pub fn from_code(code: u32) -> Option<AttrKind> {
        use AttrKind::*;
        let kind = match code {
            1 => AlwaysInline,
            2 => ArgMemOnly,
            3 => Builtin,
            4 => Cold,
            5 => Convergent,
            6 => DisableSanitizerInstrumentation,
            7 => Hot,
            8 => ImmArg,
            9 => InReg,
            10 => InaccessibleMemOnly,
            11 => InaccessibleMemOrArgMemOnly,
            12 => InlineHint,
            13 => JumpTable,
            14 => MinSize,
            15 => MustProgress,
            16 => Naked,
            17 => Nest,
            18 => NoAlias,
            19 => NoBuiltin,
            20 => NoCallback,
            21 => NoCapture,
            22 => NoCfCheck,
            23 => NoDuplicate,
            24 => NoFree,
            25 => NoImplicitFloat,
            26 => NoInline,
            27 => NoMerge,
            28 => NoProfile,
            29 => NoRecurse,
            30 => NoRedZone,
            31 => NoReturn,
            32 => NoSanitizeCoverage,
            33 => NoSync,
            34 => NoUndef,
            35 => NoUnwind,
            36 => NonLazyBind,
            37 => NonNull,
            38 => NullPointerIsValid,
            39 => OptForFuzzing,
            40 => OptimizeForSize,
            41 => OptimizeNone,
            42 => ReadNone,
            43 => ReadOnly,
            44 => Returned,
            45 => ReturnsTwice,
            46 => SExt,
            47 => SafeStack,
            48 => SanitizeAddress,
            49 => SanitizeHWAddress,
            50 => SanitizeMemTag,
            51 => SanitizeMemory,
            52 => SanitizeThread,
            53 => ShadowCallStack,
            54 => Speculatable,
            55 => SpeculativeLoadHardening,
            56 => StackProtect,
            57 => StackProtectReq,
            58 => StackProtectStrong,
            59 => StrictFP,
            60 => SwiftAsync,
            61 => SwiftError,
            62 => SwiftSelf,
            63 => UWTable,
            64 => WillReturn,
            65 => WriteOnly,
            66 => ByRef,
            67 => ByVal,
            68 => ElementType,
            69 => InAlloca,
            70 => Preallocated,
            71 => Alignment,
            72 => AllocSize,
            73 => Dereferenceable,
            74 => DereferenceableOrNull,
            75 => StackAlignment,
            76 => VScaleRange,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_enum_kind(&self) -> bool {
        (FIRST_ENUM_ATTR..=LAST_ENUM_ATTR).contains(&self.code())
    }

    pub fn is_type_kind(&self) -> bool {
        (FIRST_TYPE_ATTR..=LAST_TYPE_ATTR).contains(&self.code())
    }

    pub fn is_int_kind(&self) -> bool {
        (FIRST_INT_ATTR..=LAST_INT_ATTR).contains(&self.code())
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One canonical attribute value. Interned per context: equal payloads map to
/// the same `AttrRef`, which is the identity guarantee the bridge relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Enum(AttrKind),
    Int(AttrKind, u64),
    Type(AttrKind, TypeRef),
    Str { kind: String, value: Option<String> },
}

impl Attribute {
    /// Numeric kind code, if this is a table attribute rather than a string one.
    pub fn kind_code(&self) -> Option<u32> {
        match self {
            Attribute::Enum(kind) | Attribute::Int(kind, _) | Attribute::Type(kind, _) => {
                Some(kind.code())
            }
            Attribute::Str { .. } => None,
        }
    }

    pub fn kind_name(&self) -> String {
        match self {
            Attribute::Enum(kind) | Attribute::Int(kind, _) | Attribute::Type(kind, _) => {
                kind.to_string()
            }
            Attribute::Str { kind, .. } => kind.clone(),
        }
    }
}
