//! Constant factory operations. Each follows its native overload set in
//! declaration order; the returned handle is downcast-dispatched, so a caller
//! asking for "a constant" still receives the most derived wrapper class.

use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::extract::{expect_ap_float, expect_ap_int, expect_type, expect_value};
use crate::host::HostValue;
use crate::ops::{flag_at, int_at, num_at};
use crate::resolve::{resolve, Candidate, Shape};
use crate::{BridgeError, Result};

/// `ConstantInt.get` across its four accepted signatures. The big-integer
/// paths derive or check the width against the payload; the number paths
/// narrow through a 64-bit integer first.
pub fn integer_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantInt.get";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Class(ClassTag::ApInt)]),
        Candidate::new(
            &[
                Shape::Class(ClassTag::IntegerType),
                Shape::Number,
                Shape::Bool,
            ],
            2,
        ),
        Candidate::exact(&[Shape::Class(ClassTag::Type), Shape::Class(ClassTag::ApInt)]),
        Candidate::new(
            &[Shape::Class(ClassTag::Type), Shape::Number, Shape::Bool],
            2,
        ),
    ];
    let value = match resolve(OP, CANDIDATES, &bridge.registry, args)? {
        0 => {
            let r = expect_ap_int(&bridge.registry, &args[1], OP)?;
            let payload = bridge.ctx.ap_int(r).clone();
            bridge.ctx.const_int_of_width(payload)
        }
        1 => {
            let ty = expect_type(&bridge.registry, ClassTag::IntegerType, &args[0], OP)?;
            bridge
                .ctx
                .const_int_u64(ty, int_at(args, 1) as u64, flag_at(args, 2))?
        }
        2 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            let r = expect_ap_int(&bridge.registry, &args[1], OP)?;
            let payload = bridge.ctx.ap_int(r).clone();
            bridge.ctx.const_int(ty, payload)?
        }
        3 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            bridge
                .ctx
                .const_int_u64(ty, int_at(args, 1) as u64, flag_at(args, 2))?
        }
        _ => return Err(BridgeError::TypeMismatch { op: OP }),
    };
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantInt.getTrue(context)`
pub fn integer_constant_true(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantInt.getTrue";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Context)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let value = bridge.ctx.const_true();
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantInt.getFalse(context)`
pub fn integer_constant_false(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantInt.getFalse";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Context)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let value = bridge.ctx.const_false();
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantFp.get` across its four accepted signatures. The context-scoped
/// form implies the double kind.
pub fn float_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantFp.get";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::Type), Shape::Number]),
        Candidate::exact(&[Shape::Class(ClassTag::Type), Shape::Class(ClassTag::ApFloat)]),
        Candidate::exact(&[Shape::Class(ClassTag::Type), Shape::Str]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Context),
            Shape::Class(ClassTag::ApFloat),
        ]),
    ];
    let value = match resolve(OP, CANDIDATES, &bridge.registry, args)? {
        0 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            bridge.ctx.const_fp_f64(ty, num_at(args, 1))?
        }
        1 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            let r = expect_ap_float(&bridge.registry, &args[1], OP)?;
            let payload = *bridge.ctx.ap_float(r);
            bridge.ctx.const_fp(ty, payload)?
        }
        2 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            let text = args[1].as_str().unwrap_or_default().to_string();
            bridge.ctx.const_fp_from_str(ty, &text)?
        }
        3 => {
            let r = expect_ap_float(&bridge.registry, &args[1], OP)?;
            let payload = *bridge.ctx.ap_float(r);
            bridge.ctx.const_fp_of_context(payload)
        }
        _ => return Err(BridgeError::TypeMismatch { op: OP }),
    };
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantFp.getNaN(type)`
pub fn float_constant_nan(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantFp.getNaN";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.const_nan(ty)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `Constant.getNullValue(type)`, recursing through aggregates.
pub fn constant_null_value(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Constant.getNullValue";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.null_value(ty)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `Constant.getAllOnesValue(type)`
pub fn constant_all_ones(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Constant.getAllOnesValue";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.all_ones_value(ty)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantArray.get(arrayType, elements)`
pub fn array_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantArray.get";
    static CANDIDATES: &[Candidate] =
        &[Candidate::exact(&[Shape::Class(ClassTag::ArrayType), Shape::Array])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::ArrayType, &args[0], OP)?;
    let elems = constant_elements(bridge, &args[1], OP)?;
    let value = bridge.ctx.const_array(ty, elems)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantStruct.get(structType, elements)`
pub fn struct_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantStruct.get";
    static CANDIDATES: &[Candidate] =
        &[Candidate::exact(&[Shape::Class(ClassTag::StructType), Shape::Array])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::StructType, &args[0], OP)?;
    let elems = constant_elements(bridge, &args[1], OP)?;
    let value = bridge.ctx.const_struct(ty, elems)?;
    Ok(bridge.wrap_constant(value).into())
}

fn constant_elements(
    bridge: &Bridge,
    arg: &HostValue,
    op: &'static str,
) -> Result<Vec<solder_ir::ValueRef>> {
    let items = arg
        .as_array()
        .ok_or(BridgeError::TypeMismatch { op })?;
    items
        .iter()
        .map(|item| expect_value(&bridge.registry, ClassTag::Constant, item, op))
        .collect()
}

/// `ConstantPointerNull.get(pointerType)`
pub fn pointer_null_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantPointerNull.get";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::PointerType)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::PointerType, &args[0], OP)?;
    let value = bridge.ctx.const_pointer_null(ty)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantDataArray.get(context, numbers)`, packing the host numbers into
/// a 64-bit element array.
pub fn data_array_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantDataArray.get";
    static CANDIDATES: &[Candidate] =
        &[Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Array])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let items = args[1]
        .as_array()
        .ok_or(BridgeError::TypeMismatch { op: OP })?;
    let data = items
        .iter()
        .map(|item| {
            item.as_number()
                .map(|n| n as i64)
                .ok_or(BridgeError::TypeMismatch { op: OP })
        })
        .collect::<Result<Vec<i64>>>()?;
    let value = bridge.ctx.const_data_array(data);
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantDataArray.getString(context, text, addNull?)`. The terminator is
/// appended unless the caller opts out.
pub fn data_array_constant_string(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantDataArray.getString";
    static CANDIDATES: &[Candidate] = &[Candidate::new(
        &[Shape::Class(ClassTag::Context), Shape::Str, Shape::Bool],
        2,
    )];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let text = args[1].as_str().unwrap_or_default().to_string();
    let add_null = args.get(2).and_then(HostValue::as_bool).unwrap_or(true);
    let value = bridge.ctx.const_string(&text, add_null);
    Ok(bridge.wrap_constant(value).into())
}

/// `UndefValue.get(type)`
pub fn undef_constant_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "UndefValue.get";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.undef(ty);
    Ok(bridge.wrap_constant(value).into())
}
