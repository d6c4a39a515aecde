/*! Context-owned IR object graph: types, constants, functions, attributes.
 *
 * This crate is the library being bridged, not the bridge. It owns every IR object's lifetime
 * inside a `Context` and hands out plain index references (`TypeRef`, `ValueRef`, `AttrRef`).
 * Equal constant and attribute requests are canonicalized per context, so reference equality
 * of the underlying objects is meaningful where the bridge promises it.
 */

pub mod adt;
pub mod attrs;
pub mod context;
pub mod types;
pub mod values;

pub use adt::{ApFloat, ApInt};
pub use attrs::{AttrKind, Attribute, FIRST_ENUM_ATTR, FIRST_INT_ATTR, FIRST_TYPE_ATTR,
                LAST_ENUM_ATTR, LAST_INT_ATTR, LAST_TYPE_ATTR};
pub use context::{ApFloatRef, ApIntRef, AttrRef, Context, Module, ModuleRef, TypeRef, ValueRef};
pub use types::{FloatKind, Type};
pub use values::{ExprFlags, ExprOp, Linkage, ValueData, ValueKind};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrError {
    #[error("Type error: {0}")]
    Type(String),
    #[error("Invalid cast: {0}")]
    Cast(String),
    #[error("Index out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, IrError>;

#[cfg(test)]
mod tests;
