/*! Host-callable operations.
 *
 * Every operation follows the same control flow: resolve the argument list against the
 * declaration-ordered candidate table, extract native references from the matched shapes,
 * perform the native call, and wrap any returned reference through the downcast dispatcher.
 * Validation always completes before the first native call touches the context.
 */

pub mod adt;
pub mod attrs;
pub mod constants;
pub mod exprs;
pub mod funcs;

use crate::host::HostValue;

/// Optional boolean flag at `index`, absent or non-boolean reading as false.
pub(crate) fn flag_at(args: &[HostValue], index: usize) -> bool {
    args.get(index).and_then(HostValue::as_bool).unwrap_or(false)
}

/// Number argument narrowed the way the host narrows to a 64-bit integer.
pub(crate) fn int_at(args: &[HostValue], index: usize) -> i64 {
    args.get(index)
        .and_then(HostValue::as_number)
        .map(|n| n as i64)
        .unwrap_or(0)
}

/// Number argument read as a double, zero when absent. Resolution has already
/// shape-checked required positions, so the fallback only covers optionals.
pub(crate) fn num_at(args: &[HostValue], index: usize) -> f64 {
    args.get(index).and_then(HostValue::as_number).unwrap_or(0.0)
}
