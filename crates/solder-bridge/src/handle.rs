use crate::class::ClassTag;
use solder_ir::{ApFloatRef, ApIntRef, AttrRef, ModuleRef, TypeRef, ValueRef};
use std::fmt;

/// Untyped native reference. `Null` is the rendition of a host null passed
/// where the native side accepts an absent object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawRef {
    Null,
    Context,
    Value(ValueRef),
    Type(TypeRef),
    Attr(AttrRef),
    Module(ModuleRef),
    ApInt(ApIntRef),
    ApFloat(ApFloatRef),
}

impl RawRef {
    pub fn is_null(&self) -> bool {
        matches!(self, RawRef::Null)
    }
}

/// Host-visible wrapper: a non-owning native reference plus the wrapper-class
/// tag the registry stamped on it. Two handles over the same native object
/// are distinct host values; equality of handles is not native identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    raw: RawRef,
    tag: ClassTag,
}

impl Handle {
    pub(crate) fn new(raw: RawRef, tag: ClassTag) -> Self {
        Self { raw, tag }
    }

    pub fn raw(&self) -> RawRef {
        self.raw
    }

    pub fn tag(&self) -> ClassTag {
        self.tag
    }

    /// Ancestry membership check, the bridge's `instanceof`.
    pub fn is_a(&self, tag: ClassTag) -> bool {
        self.tag.is_a(tag)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.tag.name(), self.raw)
    }
}
