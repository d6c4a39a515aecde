use crate::class::ClassTag;
use crate::extract::is_instance;
use crate::host::HostValue;
use crate::registry::Registry;
use crate::{BridgeError, Result};

/// Per-argument shape predicate. `Class` uses the null-permissive instance
/// check, so a host null satisfies any class position whose wrapper permits
/// absence — deliberately, since optional operands are pervasive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Class(ClassTag),
    Number,
    Str,
    Bool,
    Array,
}

impl Shape {
    pub fn matches(&self, registry: &Registry, value: &HostValue) -> bool {
        match self {
            Shape::Class(tag) => is_instance(registry, *tag, value),
            Shape::Number => matches!(value, HostValue::Number(_)),
            Shape::Str => matches!(value, HostValue::Str(_)),
            Shape::Bool => matches!(value, HostValue::Bool(_)),
            Shape::Array => matches!(value, HostValue::Array(_)),
        }
    }
}

/// One native signature an operation can resolve to. `required` is the
/// minimum arity; parameters past it are optional but still shape-checked
/// when supplied.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub params: &'static [Shape],
    pub required: usize,
}

impl Candidate {
    pub const fn new(params: &'static [Shape], required: usize) -> Self {
        Self { params, required }
    }

    pub const fn exact(params: &'static [Shape]) -> Self {
        Self {
            params,
            required: params.len(),
        }
    }

    pub fn matches(&self, registry: &Registry, args: &[HostValue]) -> bool {
        if args.len() < self.required || args.len() > self.params.len() {
            return false;
        }
        self.params
            .iter()
            .zip(args)
            .all(|(shape, arg)| shape.matches(registry, arg))
    }
}

/// Declaration-order resolution: the first fully matching candidate wins,
/// even when a later one would also match. Returns the candidate index the
/// caller dispatches on.
pub fn resolve(
    op: &'static str,
    candidates: &[Candidate],
    registry: &Registry,
    args: &[HostValue],
) -> Result<usize> {
    candidates
        .iter()
        .position(|c| c.matches(registry, args))
        .ok_or(BridgeError::TypeMismatch { op })
}
