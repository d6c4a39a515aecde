/*! Unified interface for the IR library and its dynamic-host bridge.
 *
 * Single import for everything you need: building IR objects through a `Context`, and exposing
 * them to dynamically-typed host code through a `Bridge` session.
 */

pub use solder_bridge as bridge;
pub use solder_ir as ir;

pub use solder_ir::{
    ApFloat, ApInt, AttrKind, Attribute, Context, FloatKind, IrError, Linkage, Type, ValueKind,
};

pub use solder_bridge::{Bridge, BridgeError, ClassTag, Handle, HostValue, Registry};
