use crate::class::ClassTag;
use crate::dispatch::{classify_constant, classify_type, classify_value};
use crate::handle::{Handle, RawRef};
use crate::host::HostValue;
use crate::registry::Registry;
use solder_ir::{ApFloatRef, ApIntRef, AttrRef, Context, ModuleRef, TypeRef, ValueRef};

/// One bridge session: the native context plus the wrapper-class registry.
/// Strictly single-threaded; every operation borrows the session mutably and
/// runs to completion before the next one starts.
#[derive(Debug)]
pub struct Bridge {
    pub ctx: Context,
    pub registry: Registry,
}

impl Bridge {
    pub fn new() -> Self {
        Self {
            ctx: Context::new(),
            registry: Registry::new(),
        }
    }

    /// The context's own handle, passed by host code as the first argument of
    /// context-scoped operations.
    pub fn context_handle(&self) -> HostValue {
        HostValue::Handle(self.registry.wrap(RawRef::Context, ClassTag::Context))
    }

    /// Wraps a constant-category reference, downcast-dispatched to the most
    /// derived wrapper class.
    pub fn wrap_constant(&self, value: ValueRef) -> Handle {
        let tag = classify_constant(&self.ctx, value);
        self.registry.wrap(RawRef::Value(value), tag)
    }

    /// Wraps a value-category reference.
    pub fn wrap_value(&self, value: ValueRef) -> Handle {
        let tag = classify_value(&self.ctx, value);
        self.registry.wrap(RawRef::Value(value), tag)
    }

    pub fn wrap_type(&self, ty: TypeRef) -> Handle {
        let tag = classify_type(&self.ctx, ty);
        self.registry.wrap(RawRef::Type(ty), tag)
    }

    pub fn wrap_attr(&self, attr: AttrRef) -> Handle {
        self.registry.wrap(RawRef::Attr(attr), ClassTag::Attribute)
    }

    pub fn wrap_module(&self, module: ModuleRef) -> Handle {
        self.registry.wrap(RawRef::Module(module), ClassTag::Module)
    }

    pub fn wrap_ap_int(&self, r: ApIntRef) -> Handle {
        self.registry.wrap(RawRef::ApInt(r), ClassTag::ApInt)
    }

    pub fn wrap_ap_float(&self, r: ApFloatRef) -> Handle {
        self.registry.wrap(RawRef::ApFloat(r), ClassTag::ApFloat)
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}
