mod constant_op_tests;
mod dispatch_tests;
mod function_op_tests;

use crate::bridge::Bridge;
use crate::handle::RawRef;
use crate::host::HostValue;
use solder_ir::{AttrRef, FloatKind, ValueRef};

fn int_ty(bridge: &mut Bridge, bits: u32) -> HostValue {
    let ty = bridge.ctx.int_type(bits);
    bridge.wrap_type(ty).into()
}

fn double_ty(bridge: &mut Bridge) -> HostValue {
    let ty = bridge.ctx.float_type(FloatKind::Double);
    bridge.wrap_type(ty).into()
}

fn const_i32(bridge: &mut Bridge, value: u64) -> HostValue {
    let ty = bridge.ctx.int_type(32);
    let v = bridge.ctx.const_int_u64(ty, value, false).unwrap();
    bridge.wrap_constant(v).into()
}

fn const_f64(bridge: &mut Bridge, value: f64) -> HostValue {
    let ty = bridge.ctx.float_type(FloatKind::Double);
    let v = bridge.ctx.const_fp_f64(ty, value).unwrap();
    bridge.wrap_constant(v).into()
}

fn raw_value(host: &HostValue) -> ValueRef {
    match host {
        HostValue::Handle(h) => match h.raw() {
            RawRef::Value(v) => v,
            other => panic!("expected a value reference, got {:?}", other),
        },
        other => panic!("expected a handle, got {}", other),
    }
}

fn raw_attr(host: &HostValue) -> AttrRef {
    match host {
        HostValue::Handle(h) => match h.raw() {
            RawRef::Attr(a) => a,
            other => panic!("expected an attribute reference, got {:?}", other),
        },
        other => panic!("expected a handle, got {}", other),
    }
}
