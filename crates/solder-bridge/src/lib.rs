/*! Dynamic-host bridge over the solder-ir object graph.
 *
 * The IR library is statically typed and deeply polymorphic; the host side is dynamically typed.
 * Everything here exists to cross that gap safely: handles that preserve subtype identity, a
 * downcast dispatcher that picks the most-derived wrapper class for a raw reference, and an
 * overload resolver that matches host argument shapes against declared native signatures.
 *
 * Handles never own the native object's lifetime. A handle outliving its referent (say, after
 * `erase_function`) is a documented hazard the host must avoid, not something the bridge detects.
 */

pub mod bridge;
pub mod class;
pub mod dispatch;
pub mod extract;
pub mod handle;
pub mod host;
pub mod ops;
pub mod registry;
pub mod resolve;

pub use bridge::Bridge;
pub use class::{ClassDescriptor, ClassTag};
pub use dispatch::{classify_constant, classify_global, classify_type, classify_value};
pub use extract::{is_instance, unwrap};
pub use handle::{Handle, RawRef};
pub use host::{External, HostValue};
pub use registry::Registry;
pub use resolve::{Candidate, Shape};

use solder_ir::IrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{class} may only be constructed through the registry's native-reference carrier")]
    Construction { class: &'static str },
    #[error("{op} called with arguments matching no accepted signature")]
    TypeMismatch { op: &'static str },
    #[error("Invalid attribute kind code: {kind}")]
    InvalidEnumValue { kind: u32 },
    #[error("{op}: {message}")]
    TypeConstraint {
        op: &'static str,
        message: &'static str,
    },
    #[error(transparent)]
    Ir(#[from] IrError),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests;
