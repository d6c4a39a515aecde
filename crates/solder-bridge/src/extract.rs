use crate::class::ClassTag;
use crate::handle::RawRef;
use crate::host::HostValue;
use crate::registry::Registry;
use crate::{BridgeError, Result};
use solder_ir::{ApFloatRef, ApIntRef, AttrRef, ModuleRef, TypeRef, ValueRef};

/// Null-permissive instance check. Both branches are explicit: a null is an
/// instance exactly when the class permits absence, and a non-null is an
/// instance only when its tag's ancestry contains the expected class.
pub fn is_instance(registry: &Registry, tag: ClassTag, value: &HostValue) -> bool {
    match value {
        HostValue::Null => registry.descriptor(tag).permits_null,
        HostValue::Handle(handle) => handle.is_a(tag),
        _ => false,
    }
}

/// Handle-to-native extraction. Host null maps to the native null reference
/// for classes that permit absence; a class-incompatible handle is a
/// `TypeMismatch` carrying the operation name.
pub fn unwrap(
    registry: &Registry,
    tag: ClassTag,
    value: &HostValue,
    op: &'static str,
) -> Result<RawRef> {
    match value {
        HostValue::Null if registry.descriptor(tag).permits_null => Ok(RawRef::Null),
        HostValue::Handle(handle) if handle.is_a(tag) => Ok(handle.raw()),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

// Typed extraction helpers for operations that need a live reference of one
// particular raw category. Null reaching one of these is a shape-level bug
// in the caller or a genuinely absent operand where the native call cannot
// take one; either way it is a TypeMismatch.

pub fn expect_value(
    registry: &Registry,
    tag: ClassTag,
    value: &HostValue,
    op: &'static str,
) -> Result<ValueRef> {
    match unwrap(registry, tag, value, op)? {
        RawRef::Value(v) => Ok(v),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

pub fn expect_type(
    registry: &Registry,
    tag: ClassTag,
    value: &HostValue,
    op: &'static str,
) -> Result<TypeRef> {
    match unwrap(registry, tag, value, op)? {
        RawRef::Type(t) => Ok(t),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

pub fn expect_attr(registry: &Registry, value: &HostValue, op: &'static str) -> Result<AttrRef> {
    match unwrap(registry, ClassTag::Attribute, value, op)? {
        RawRef::Attr(a) => Ok(a),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

pub fn expect_ap_int(registry: &Registry, value: &HostValue, op: &'static str) -> Result<ApIntRef> {
    match unwrap(registry, ClassTag::ApInt, value, op)? {
        RawRef::ApInt(r) => Ok(r),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

pub fn expect_ap_float(
    registry: &Registry,
    value: &HostValue,
    op: &'static str,
) -> Result<ApFloatRef> {
    match unwrap(registry, ClassTag::ApFloat, value, op)? {
        RawRef::ApFloat(r) => Ok(r),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}

/// Module positions are optional everywhere they appear, so absence is a
/// legitimate answer here rather than an error.
pub fn opt_module(
    registry: &Registry,
    value: &HostValue,
    op: &'static str,
) -> Result<Option<ModuleRef>> {
    match unwrap(registry, ClassTag::Module, value, op)? {
        RawRef::Module(m) => Ok(Some(m)),
        RawRef::Null => Ok(None),
        _ => Err(BridgeError::TypeMismatch { op }),
    }
}
