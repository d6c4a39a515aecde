//! Arbitrary-precision scratch values the host builds before feeding them to
//! constant factories.

use crate::bridge::Bridge;
use crate::host::HostValue;
use crate::ops::{flag_at, int_at, num_at};
use crate::resolve::{resolve, Candidate, Shape};
use crate::Result;
use solder_ir::{ApFloat, ApInt};

/// `ApInt.get(bits, value, signed?)`
pub fn ap_int_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ApInt.get";
    static CANDIDATES: &[Candidate] =
        &[Candidate::new(&[Shape::Number, Shape::Number, Shape::Bool], 2)];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let bits = int_at(args, 0) as u32;
    let value = int_at(args, 1) as u64;
    let signed = flag_at(args, 2);
    let r = bridge.ctx.alloc_ap_int(ApInt::new(bits, value, signed));
    Ok(bridge.wrap_ap_int(r).into())
}

/// `ApFloat.get(value)`
pub fn ap_float_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ApFloat.get";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Number])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let r = bridge.ctx.alloc_ap_float(ApFloat::from_f64(num_at(args, 0)));
    Ok(bridge.wrap_ap_float(r).into())
}
