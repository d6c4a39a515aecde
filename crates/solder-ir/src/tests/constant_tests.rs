use crate::adt::{ApFloat, ApInt};
use crate::context::Context;
use crate::values::{ExprFlags, ExprOp, ValueData, ValueKind};
use pretty_assertions::assert_eq;

#[test]
fn equal_integer_constants_are_canonical() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let a = ctx.const_int(i32_ty, ApInt::new(32, 7, false)).unwrap();
    let b = ctx.const_int(i32_ty, ApInt::new(32, 7, false)).unwrap();
    let c = ctx.const_int(i32_ty, ApInt::new(32, 8, false)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn const_int_of_width_derives_its_type() {
    let mut ctx = Context::new();
    let v = ctx.const_int_of_width(ApInt::new(32, 7, false));
    let i32_ty = ctx.int_type(32);
    assert_eq!(ctx.value_type(v), i32_ty);
    match ctx.value(v) {
        ValueData::ConstantInt { value, .. } => assert_eq!(value.to_u64(), Some(7)),
        other => panic!("expected integer constant, got {:?}", other),
    }
}

#[test]
fn const_int_rejects_width_mismatch() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    assert!(ctx.const_int(i32_ty, ApInt::new(64, 1, false)).is_err());
}

#[test]
fn signed_values_wrap_to_twos_complement() {
    let mut ctx = Context::new();
    let i8_ty = ctx.int_type(8);
    let v = ctx.const_int_u64(i8_ty, u64::MAX, true).unwrap();
    match ctx.value(v) {
        ValueData::ConstantInt { value, .. } => {
            assert_eq!(value.to_u64(), Some(0xFF));
            assert_eq!(value.to_bigint(), num_bigint::BigInt::from(-1));
        }
        other => panic!("expected integer constant, got {:?}", other),
    }
}

#[test]
fn true_and_false_are_i1() {
    let mut ctx = Context::new();
    let t = ctx.const_true();
    let f = ctx.const_false();
    let i1 = ctx.int_type(1);
    assert_eq!(ctx.value_type(t), i1);
    assert_eq!(ctx.value_type(f), i1);
    assert_ne!(t, f);
}

#[test]
fn fp_constants_intern_by_bit_pattern() {
    let mut ctx = Context::new();
    let dbl = ctx.float_type(crate::types::FloatKind::Double);
    let a = ctx.const_fp_f64(dbl, 1.5).unwrap();
    let b = ctx.const_fp(dbl, ApFloat::from_f64(1.5)).unwrap();
    let c = ctx.const_fp_from_str(dbl, "1.5").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);

    let i32_ty = ctx.int_type(32);
    assert!(ctx.const_fp_f64(i32_ty, 1.5).is_err());
}

#[test]
fn null_value_recurses_through_aggregates() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let arr_ty = ctx.array_type(i32_ty, 3);
    let st_ty = ctx.struct_type(vec![i32_ty, arr_ty]);

    let null = ctx.null_value(st_ty).unwrap();
    assert_eq!(ctx.value_kind(null), ValueKind::ConstantStruct);

    let again = ctx.null_value(st_ty).unwrap();
    assert_eq!(null, again);
}

#[test]
fn aggregate_constants_validate_shape() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let i64_ty = ctx.int_type(64);
    let arr_ty = ctx.array_type(i32_ty, 2);

    let ok = ctx.const_int(i32_ty, ApInt::new(32, 1, false)).unwrap();
    let bad = ctx.const_int(i64_ty, ApInt::new(64, 1, false)).unwrap();

    assert!(ctx.const_array(arr_ty, vec![ok, ok]).is_ok());
    assert!(ctx.const_array(arr_ty, vec![ok]).is_err());
    assert!(ctx.const_array(arr_ty, vec![ok, bad]).is_err());
    assert!(ctx.const_array(i32_ty, vec![ok]).is_err());
}

#[test]
fn expr_nodes_are_canonical_and_flag_sensitive() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let a = ctx.const_int(i32_ty, ApInt::new(32, 1, false)).unwrap();
    let b = ctx.const_int(i32_ty, ApInt::new(32, 2, false)).unwrap();

    let plain = ctx
        .const_expr_binary(ExprOp::Add, a, b, ExprFlags::default())
        .unwrap();
    let same = ctx
        .const_expr_binary(ExprOp::Add, a, b, ExprFlags::default())
        .unwrap();
    let nuw = ctx
        .const_expr_binary(ExprOp::Add, a, b, ExprFlags::wrap(true, false))
        .unwrap();

    assert_eq!(plain, same);
    assert_ne!(plain, nuw);
    assert_eq!(ctx.value_kind(plain), ValueKind::ConstantExpr);
    assert_eq!(ctx.value_type(plain), i32_ty);
}

#[test]
fn cast_category_checks() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let i64_ty = ctx.int_type(64);
    let dbl = ctx.float_type(crate::types::FloatKind::Double);
    let int_const = ctx.const_int(i32_ty, ApInt::new(32, 5, false)).unwrap();
    let fp_const = ctx.const_fp_f64(dbl, 5.0).unwrap();

    assert!(ctx.const_expr_cast(ExprOp::ZExt, int_const, i64_ty).is_ok());
    assert!(ctx.const_expr_cast(ExprOp::ZExt, fp_const, i64_ty).is_err());
    assert!(ctx.const_expr_cast(ExprOp::SiToFp, int_const, dbl).is_ok());
    assert!(ctx.const_expr_cast(ExprOp::SiToFp, int_const, i64_ty).is_err());
    assert!(ctx.const_expr_cast(ExprOp::FpToSi, fp_const, i32_ty).is_ok());
    assert!(ctx.const_expr_cast(ExprOp::FpToSi, int_const, i32_ty).is_err());
}

#[test]
fn size_and_offset_queries_carry_the_queried_type() {
    let mut ctx = Context::new();
    let i32_ty = ctx.int_type(32);
    let st_ty = ctx.struct_type(vec![i32_ty, i32_ty]);

    let a = ctx.size_of(i32_ty);
    let b = ctx.size_of(i32_ty);
    let c = ctx.align_of(i32_ty);
    assert_eq!(a, b);
    assert_ne!(a, c);

    assert!(ctx.offset_of_field(st_ty, 1).is_ok());
    assert!(ctx.offset_of_field(st_ty, 2).is_err());
    assert!(ctx.offset_of_field(i32_ty, 0).is_err());
}

#[test]
fn data_arrays_and_strings() {
    let mut ctx = Context::new();
    let arr = ctx.const_data_array(vec![1, 2, 3]);
    assert_eq!(ctx.value_kind(arr), ValueKind::ConstantDataArray);

    let s = ctx.const_string("hi", true);
    match ctx.value(s) {
        ValueData::ConstantDataArray { data, .. } => {
            assert_eq!(data, &vec![i64::from(b'h'), i64::from(b'i'), 0]);
        }
        other => panic!("expected data array, got {:?}", other),
    }
}
