//! Constant-expression operations. Flag-bearing forms read their booleans
//! from fixed argument positions; the positions are part of the host
//! contract, so each op spells them out rather than sharing a scheme.

use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::extract::{expect_type, expect_value};
use crate::host::HostValue;
use crate::ops::{flag_at, int_at};
use crate::resolve::{resolve, Candidate, Shape};
use crate::{BridgeError, Result};
use solder_ir::{ExprFlags, ExprOp};

static WRAP_BINARY: &[Candidate] = &[Candidate::new(
    &[
        Shape::Class(ClassTag::Constant),
        Shape::Class(ClassTag::Constant),
        Shape::Bool,
        Shape::Bool,
    ],
    2,
)];

static EXACT_BINARY: &[Candidate] = &[Candidate::new(
    &[
        Shape::Class(ClassTag::Constant),
        Shape::Class(ClassTag::Constant),
        Shape::Bool,
    ],
    2,
)];

static PLAIN_BINARY: &[Candidate] = &[Candidate::exact(&[
    Shape::Class(ClassTag::Constant),
    Shape::Class(ClassTag::Constant),
])];

static CAST: &[Candidate] = &[Candidate::new(
    &[
        Shape::Class(ClassTag::Constant),
        Shape::Class(ClassTag::Type),
        Shape::Bool,
    ],
    2,
)];

fn binary(
    bridge: &mut Bridge,
    args: &[HostValue],
    op: ExprOp,
    name: &'static str,
    candidates: &'static [Candidate],
    flags: ExprFlags,
) -> Result<HostValue> {
    resolve(name, candidates, &bridge.registry, args)?;
    let lhs = expect_value(&bridge.registry, ClassTag::Constant, &args[0], name)?;
    let rhs = expect_value(&bridge.registry, ClassTag::Constant, &args[1], name)?;
    let value = bridge.ctx.const_expr_binary(op, lhs, rhs, flags)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getAdd(lhs, rhs, nuw?, nsw?)`
pub fn add_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::wrap(flag_at(args, 2), flag_at(args, 3));
    binary(bridge, args, ExprOp::Add, "ConstantExpr.getAdd", WRAP_BINARY, flags)
}

/// `ConstantExpr.getSub(lhs, rhs, nuw?, nsw?)`
pub fn sub_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::wrap(flag_at(args, 2), flag_at(args, 3));
    binary(bridge, args, ExprOp::Sub, "ConstantExpr.getSub", WRAP_BINARY, flags)
}

/// `ConstantExpr.getMul(lhs, rhs, nuw?, nsw?)`
pub fn mul_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::wrap(flag_at(args, 2), flag_at(args, 3));
    binary(bridge, args, ExprOp::Mul, "ConstantExpr.getMul", WRAP_BINARY, flags)
}

/// `ConstantExpr.getShl(lhs, rhs, nuw?, nsw?)`
pub fn shl_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::wrap(flag_at(args, 2), flag_at(args, 3));
    binary(bridge, args, ExprOp::Shl, "ConstantExpr.getShl", WRAP_BINARY, flags)
}

/// `ConstantExpr.getLShr(lhs, rhs, exact?)`
pub fn lshr_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::exact(flag_at(args, 2));
    binary(bridge, args, ExprOp::LShr, "ConstantExpr.getLShr", EXACT_BINARY, flags)
}

/// `ConstantExpr.getAShr(lhs, rhs, exact?)`
pub fn ashr_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    let flags = ExprFlags::exact(flag_at(args, 2));
    binary(bridge, args, ExprOp::AShr, "ConstantExpr.getAShr", EXACT_BINARY, flags)
}

/// `ConstantExpr.getAnd(lhs, rhs)`
pub fn and_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    binary(
        bridge,
        args,
        ExprOp::And,
        "ConstantExpr.getAnd",
        PLAIN_BINARY,
        ExprFlags::default(),
    )
}

/// `ConstantExpr.getOr(lhs, rhs)`
pub fn or_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    binary(
        bridge,
        args,
        ExprOp::Or,
        "ConstantExpr.getOr",
        PLAIN_BINARY,
        ExprFlags::default(),
    )
}

/// `ConstantExpr.getXor(lhs, rhs)`
pub fn xor_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    binary(
        bridge,
        args,
        ExprOp::Xor,
        "ConstantExpr.getXor",
        PLAIN_BINARY,
        ExprFlags::default(),
    )
}

/// `ConstantExpr.getUMin(lhs, rhs)`
pub fn umin_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    binary(
        bridge,
        args,
        ExprOp::UMin,
        "ConstantExpr.getUMin",
        PLAIN_BINARY,
        ExprFlags::default(),
    )
}

/// `ConstantExpr.getNeg(value, nuw?, nsw?)`. The wrap flags sit at positions
/// 1 and 2, directly after the operand.
pub fn neg_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantExpr.getNeg";
    static CANDIDATES: &[Candidate] = &[Candidate::new(
        &[Shape::Class(ClassTag::Constant), Shape::Bool, Shape::Bool],
        1,
    )];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let value = expect_value(&bridge.registry, ClassTag::Constant, &args[0], OP)?;
    let flags = ExprFlags::wrap(flag_at(args, 1), flag_at(args, 2));
    let value = bridge.ctx.const_expr_unary(ExprOp::Neg, value, flags)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getFNeg(value)`
pub fn fneg_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    unary(bridge, args, ExprOp::FNeg, "ConstantExpr.getFNeg")
}

/// `ConstantExpr.getNot(value)`
pub fn not_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    unary(bridge, args, ExprOp::Not, "ConstantExpr.getNot")
}

fn unary(
    bridge: &mut Bridge,
    args: &[HostValue],
    op: ExprOp,
    name: &'static str,
) -> Result<HostValue> {
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Constant)])];
    resolve(name, CANDIDATES, &bridge.registry, args)?;
    let value = expect_value(&bridge.registry, ClassTag::Constant, &args[0], name)?;
    let value = bridge.ctx.const_expr_unary(op, value, ExprFlags::default())?;
    Ok(bridge.wrap_constant(value).into())
}

fn cast(
    bridge: &mut Bridge,
    args: &[HostValue],
    op: ExprOp,
    name: &'static str,
) -> Result<HostValue> {
    resolve(name, CAST, &bridge.registry, args)?;
    let value = expect_value(&bridge.registry, ClassTag::Constant, &args[0], name)?;
    let target = expect_type(&bridge.registry, ClassTag::Type, &args[1], name)?;
    // Integer-to-float and float-to-integer conversions report a constraint
    // failure up front instead of surfacing the library's cast error.
    match op {
        ExprOp::UiToFp | ExprOp::SiToFp => {
            if !bridge.ctx.ty(target).is_floating_point() {
                return Err(BridgeError::TypeConstraint {
                    op: name,
                    message: "target type must be a floating-point type",
                });
            }
        }
        ExprOp::FpToUi | ExprOp::FpToSi => {
            let src = bridge.ctx.value_type(value);
            if !bridge.ctx.ty(src).is_floating_point() {
                return Err(BridgeError::TypeConstraint {
                    op: name,
                    message: "operand must have a floating-point type",
                });
            }
        }
        _ => {}
    }
    let value = bridge.ctx.const_expr_cast(op, value, target)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getTrunc(value, type)`
pub fn trunc_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::Trunc, "ConstantExpr.getTrunc")
}

/// `ConstantExpr.getSExt(value, type)`
pub fn sext_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::SExt, "ConstantExpr.getSExt")
}

/// `ConstantExpr.getZExt(value, type)`
pub fn zext_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::ZExt, "ConstantExpr.getZExt")
}

/// `ConstantExpr.getFPTrunc(value, type)`
pub fn fp_trunc_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::FpTrunc, "ConstantExpr.getFPTrunc")
}

/// `ConstantExpr.getFPExtend(value, type)`
pub fn fp_extend_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::FpExt, "ConstantExpr.getFPExtend")
}

/// `ConstantExpr.getUIToFP(value, type)`
pub fn ui_to_fp_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::UiToFp, "ConstantExpr.getUIToFP")
}

/// `ConstantExpr.getSIToFP(value, type)`
pub fn si_to_fp_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::SiToFp, "ConstantExpr.getSIToFP")
}

/// `ConstantExpr.getFPToUI(value, type)`
pub fn fp_to_ui_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::FpToUi, "ConstantExpr.getFPToUI")
}

/// `ConstantExpr.getFPToSI(value, type)`
pub fn fp_to_si_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    cast(bridge, args, ExprOp::FpToSi, "ConstantExpr.getFPToSI")
}

/// `ConstantExpr.getBitCast(value, type)`
pub fn bit_cast_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantExpr.getBitCast";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[
        Shape::Class(ClassTag::Constant),
        Shape::Class(ClassTag::Type),
    ])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let value = expect_value(&bridge.registry, ClassTag::Constant, &args[0], OP)?;
    let target = expect_type(&bridge.registry, ClassTag::Type, &args[1], OP)?;
    let value = bridge.ctx.const_expr_cast(ExprOp::BitCast, value, target)?;
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getAlignOf(type)`
pub fn align_of_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantExpr.getAlignOf";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.align_of(ty);
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getSizeOf(type)`
pub fn size_of_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantExpr.getSizeOf";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Type)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let value = bridge.ctx.size_of(ty);
    Ok(bridge.wrap_constant(value).into())
}

/// `ConstantExpr.getOffsetOf`: a struct type with a field number, or any type
/// with a constant field value.
pub fn offset_of_expression_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "ConstantExpr.getOffsetOf";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::StructType), Shape::Number]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Type),
            Shape::Class(ClassTag::Constant),
        ]),
    ];
    let value = match resolve(OP, CANDIDATES, &bridge.registry, args)? {
        0 => {
            let ty = expect_type(&bridge.registry, ClassTag::StructType, &args[0], OP)?;
            bridge.ctx.offset_of_field(ty, int_at(args, 1) as u32)?
        }
        1 => {
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
            let field = expect_value(&bridge.registry, ClassTag::Constant, &args[1], OP)?;
            bridge.ctx.offset_of_const(ty, field)?
        }
        _ => return Err(BridgeError::TypeMismatch { op: OP }),
    };
    Ok(bridge.wrap_constant(value).into())
}
