use crate::handle::{Handle, RawRef};
use std::fmt;

/// The registry's internal native-reference carrier. Host code cannot build
/// one: the payload constructor is crate-private, which is what makes
/// registry-external handle forgery fail with `Construction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct External {
    raw: RawRef,
}

impl External {
    pub(crate) fn new(raw: RawRef) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> RawRef {
        self.raw
    }
}

/// Dynamically-typed host value. This is what operations receive as
/// arguments; shape inspection over these variants drives overload
/// resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<HostValue>),
    Handle(Handle),
    External(External),
}

impl HostValue {
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            HostValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            HostValue::Handle(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_external(&self) -> Option<&External> {
        match self {
            HostValue::External(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Handle> for HostValue {
    fn from(h: Handle) -> Self {
        HostValue::Handle(h)
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Null => write!(f, "null"),
            HostValue::Bool(b) => write!(f, "{}", b),
            HostValue::Number(n) => write!(f, "{}", n),
            HostValue::Str(s) => write!(f, "{:?}", s),
            HostValue::Array(items) => write!(f, "[{} items]", items.len()),
            HostValue::Handle(h) => write!(f, "{}", h),
            HostValue::External(_) => write!(f, "<native carrier>"),
        }
    }
}
