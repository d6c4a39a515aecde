use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::dispatch::{classify_constant, classify_type, classify_value};
use pretty_assertions::assert_eq;
use solder_ir::{ApInt, FloatKind, Linkage};

#[test]
fn constants_downcast_to_their_leaf_classes() {
    let mut bridge = Bridge::new();
    let i32_ty = bridge.ctx.int_type(32);
    let double = bridge.ctx.float_type(FloatKind::Double);
    let ptr = bridge.ctx.pointer_type(i32_ty);

    let cases = [
        (
            bridge.ctx.const_int(i32_ty, ApInt::new(32, 5, false)).unwrap(),
            ClassTag::ConstantInt,
        ),
        (
            bridge.ctx.const_fp_f64(double, 1.5).unwrap(),
            ClassTag::ConstantFp,
        ),
        (
            bridge.ctx.const_pointer_null(ptr).unwrap(),
            ClassTag::ConstantPointerNull,
        ),
        (bridge.ctx.const_data_array(vec![1, 2]), ClassTag::ConstantDataArray),
        (bridge.ctx.undef(i32_ty), ClassTag::UndefValue),
    ];
    for (value, expected) in cases {
        assert_eq!(classify_constant(&bridge.ctx, value), expected);
        assert_eq!(bridge.wrap_constant(value).tag(), expected);
    }
}

#[test]
fn globals_refine_past_the_constant_fallback() {
    let mut bridge = Bridge::new();
    let void = bridge.ctx.void_type();
    let fn_ty = bridge.ctx.function_type(void, vec![], false);
    let func = bridge
        .ctx
        .create_function(fn_ty, Linkage::External, "f", None)
        .unwrap();
    let i32_ty = bridge.ctx.int_type(32);
    let global = bridge
        .ctx
        .create_global_variable(i32_ty, Linkage::Internal, "g", None, None)
        .unwrap();

    assert_eq!(classify_constant(&bridge.ctx, func), ClassTag::Function);
    assert_eq!(classify_constant(&bridge.ctx, global), ClassTag::GlobalVariable);
    assert_eq!(classify_value(&bridge.ctx, func), ClassTag::Function);
}

#[test]
fn non_constants_classify_through_the_value_path() {
    let mut bridge = Bridge::new();
    let void = bridge.ctx.void_type();
    let i32_ty = bridge.ctx.int_type(32);
    let fn_ty = bridge.ctx.function_type(void, vec![i32_ty], false);
    let func = bridge
        .ctx
        .create_function(fn_ty, Linkage::External, "f", None)
        .unwrap();
    let arg = bridge.ctx.function_arg(func, 0).unwrap();
    let block = bridge.ctx.create_basic_block("entry", Some(func)).unwrap();

    assert_eq!(classify_value(&bridge.ctx, arg), ClassTag::Argument);
    assert_eq!(classify_value(&bridge.ctx, block), ClassTag::BasicBlock);
    // The constant dispatcher never sees these in practice; its contractual
    // fallback is the base constant tag.
    assert_eq!(classify_constant(&bridge.ctx, arg), ClassTag::Constant);
    assert_eq!(classify_constant(&bridge.ctx, block), ClassTag::Constant);
}

#[test]
fn types_downcast_to_their_leaf_classes() {
    let mut bridge = Bridge::new();
    let void = bridge.ctx.void_type();
    let i8_ty = bridge.ctx.int_type(8);
    let ptr = bridge.ctx.pointer_type(i8_ty);
    let arr = bridge.ctx.array_type(i8_ty, 4);
    let st = bridge.ctx.struct_type(vec![i8_ty]);
    let fn_ty = bridge.ctx.function_type(void, vec![], false);
    let double = bridge.ctx.float_type(FloatKind::Double);

    assert_eq!(classify_type(&bridge.ctx, i8_ty), ClassTag::IntegerType);
    assert_eq!(classify_type(&bridge.ctx, ptr), ClassTag::PointerType);
    assert_eq!(classify_type(&bridge.ctx, arr), ClassTag::ArrayType);
    assert_eq!(classify_type(&bridge.ctx, st), ClassTag::StructType);
    assert_eq!(classify_type(&bridge.ctx, fn_ty), ClassTag::FunctionType);
    assert_eq!(classify_type(&bridge.ctx, void), ClassTag::Type);
    assert_eq!(classify_type(&bridge.ctx, double), ClassTag::Type);
}
