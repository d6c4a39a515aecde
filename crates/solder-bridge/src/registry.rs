use crate::class::{ClassDescriptor, ClassTag};
use crate::handle::{Handle, RawRef};
use crate::host::{External, HostValue};
use crate::{BridgeError, Result};
use indexmap::IndexMap;

/// Explicit wrapper-class table, built once and passed by reference — the
/// replacement for per-class process-lifetime constructor globals.
#[derive(Debug)]
pub struct Registry {
    classes: IndexMap<ClassTag, ClassDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        let mut registry = Self {
            classes: IndexMap::new(),
        };
        for tag in ClassTag::all() {
            registry.register(ClassDescriptor::of(*tag));
        }
        registry
    }

    /// Installs a descriptor. Each class registers exactly once, at
    /// construction; a second registration for the same tag is a bug in the
    /// class table itself.
    fn register(&mut self, descriptor: ClassDescriptor) {
        let previous = self.classes.insert(descriptor.tag, descriptor);
        debug_assert!(previous.is_none(), "class registered twice");
    }

    pub fn descriptor(&self, tag: ClassTag) -> &ClassDescriptor {
        &self.classes[&tag]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Internal wrap path: stamps `tag` onto a raw reference. Callers that
    /// hold a base-typed reference go through the dispatcher first so the
    /// stamped tag is the most derived one.
    pub fn wrap(&self, raw: RawRef, tag: ClassTag) -> Handle {
        debug_assert!(self.classes.contains_key(&tag));
        Handle::new(raw, tag)
    }

    /// Carrier for handing a raw reference through host-visible construction.
    pub fn carrier(&self, raw: RawRef) -> HostValue {
        HostValue::External(External::new(raw))
    }

    /// Host-reachable constructor. Only the registry's own carrier is
    /// accepted as the first argument; anything else is a forgery attempt.
    pub fn construct(&self, tag: ClassTag, args: &[HostValue]) -> Result<Handle> {
        let carrier = args
            .first()
            .and_then(HostValue::as_external)
            .ok_or(BridgeError::Construction {
                class: self.descriptor(tag).name,
            })?;
        Ok(self.wrap(carrier.raw(), tag))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
