use super::{const_f64, const_i32, double_ty, int_ty, raw_attr, raw_value};
use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::host::HostValue;
use crate::ops::{adt, attrs, constants};
use crate::BridgeError;
use pretty_assertions::assert_eq;
use solder_ir::{AttrKind, Attribute, ValueData};

fn tag_of(host: &HostValue) -> ClassTag {
    host.as_handle().expect("handle expected").tag()
}

#[test]
fn integer_constant_from_context_and_big_integer() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    let payload = adt::ap_int_get(
        &mut bridge,
        &[HostValue::Number(32.0), HostValue::Number(7.0)],
    )
    .unwrap();

    let first =
        constants::integer_constant_get(&mut bridge, &[ctx.clone(), payload.clone()]).unwrap();
    let second = constants::integer_constant_get(&mut bridge, &[ctx, payload]).unwrap();

    assert_eq!(tag_of(&first), ClassTag::ConstantInt);
    assert_eq!(raw_value(&first), raw_value(&second));
    match bridge.ctx.value(raw_value(&first)) {
        ValueData::ConstantInt { value, .. } => {
            assert_eq!(value.bits(), 32);
            assert_eq!(value.to_u64(), Some(7));
        }
        other => panic!("expected an integer constant, got {:?}", other),
    }
}

#[test]
fn integer_constant_sign_extends_when_asked() {
    let mut bridge = Bridge::new();
    let ty = int_ty(&mut bridge, 8);
    let value = constants::integer_constant_get(
        &mut bridge,
        &[ty, HostValue::Number(-1.0), HostValue::Bool(true)],
    )
    .unwrap();
    match bridge.ctx.value(raw_value(&value)) {
        ValueData::ConstantInt { value, .. } => assert_eq!(value.to_u64(), Some(0xff)),
        other => panic!("expected an integer constant, got {:?}", other),
    }
}

#[test]
fn integer_constant_rejects_a_width_mismatch() {
    let mut bridge = Bridge::new();
    let ty = int_ty(&mut bridge, 16);
    let payload = adt::ap_int_get(
        &mut bridge,
        &[HostValue::Number(32.0), HostValue::Number(1.0)],
    )
    .unwrap();
    let err = constants::integer_constant_get(&mut bridge, &[ty, payload]).unwrap_err();
    assert!(matches!(err, BridgeError::Ir(_)));
}

#[test]
fn true_and_false_are_one_bit_constants() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    let t = constants::integer_constant_true(&mut bridge, &[ctx.clone()]).unwrap();
    let f = constants::integer_constant_false(&mut bridge, &[ctx]).unwrap();
    assert_eq!(tag_of(&t), ClassTag::ConstantInt);
    assert_ne!(raw_value(&t), raw_value(&f));
    match bridge.ctx.value(raw_value(&t)) {
        ValueData::ConstantInt { value, .. } => {
            assert_eq!(value.bits(), 1);
            assert_eq!(value.to_u64(), Some(1));
        }
        other => panic!("expected an integer constant, got {:?}", other),
    }
}

#[test]
fn float_constant_paths_canonicalize_together() {
    let mut bridge = Bridge::new();
    let ty = double_ty(&mut bridge);
    let from_number =
        constants::float_constant_get(&mut bridge, &[ty.clone(), HostValue::Number(2.5)]).unwrap();
    let from_text =
        constants::float_constant_get(&mut bridge, &[ty, HostValue::Str("2.5".into())]).unwrap();
    assert_eq!(tag_of(&from_number), ClassTag::ConstantFp);
    assert_eq!(raw_value(&from_number), raw_value(&from_text));

    let ctx = bridge.context_handle();
    let payload = adt::ap_float_get(&mut bridge, &[HostValue::Number(2.5)]).unwrap();
    let implied = constants::float_constant_get(&mut bridge, &[ctx, payload]).unwrap();
    assert_eq!(raw_value(&implied), raw_value(&from_number));
}

#[test]
fn float_constant_nan_needs_a_float_type() {
    let mut bridge = Bridge::new();
    let ty = double_ty(&mut bridge);
    let nan = constants::float_constant_nan(&mut bridge, &[ty]).unwrap();
    assert_eq!(tag_of(&nan), ClassTag::ConstantFp);

    let int = int_ty(&mut bridge, 32);
    let err = constants::float_constant_nan(&mut bridge, &[int]).unwrap_err();
    assert!(matches!(err, BridgeError::Ir(_)));
}

#[test]
fn null_value_recurses_through_aggregates() {
    let mut bridge = Bridge::new();
    let i32_ty = bridge.ctx.int_type(32);
    let double = bridge.ctx.float_type(solder_ir::FloatKind::Double);
    let st = bridge.ctx.struct_type(vec![i32_ty, double]);
    let st_handle: HostValue = bridge.wrap_type(st).into();

    let null = constants::constant_null_value(&mut bridge, &[st_handle]).unwrap();
    assert_eq!(tag_of(&null), ClassTag::ConstantStruct);
    match bridge.ctx.value(raw_value(&null)) {
        ValueData::ConstantStruct { elems, .. } => assert_eq!(elems.len(), 2),
        other => panic!("expected a struct constant, got {:?}", other),
    }
}

#[test]
fn all_ones_is_integer_only() {
    let mut bridge = Bridge::new();
    let i8_handle = int_ty(&mut bridge, 8);
    let ones = constants::constant_all_ones(&mut bridge, &[i8_handle]).unwrap();
    match bridge.ctx.value(raw_value(&ones)) {
        ValueData::ConstantInt { value, .. } => assert_eq!(value.to_u64(), Some(0xff)),
        other => panic!("expected an integer constant, got {:?}", other),
    }

    let fp = double_ty(&mut bridge);
    assert!(matches!(
        constants::constant_all_ones(&mut bridge, &[fp]).unwrap_err(),
        BridgeError::Ir(_)
    ));
}

#[test]
fn array_constant_checks_shape_before_interning() {
    let mut bridge = Bridge::new();
    let i32_ty = bridge.ctx.int_type(32);
    let arr = bridge.ctx.array_type(i32_ty, 2);
    let arr_handle: HostValue = bridge.wrap_type(arr).into();
    let a = const_i32(&mut bridge, 1);
    let b = const_i32(&mut bridge, 2);

    let ok = constants::array_constant_get(
        &mut bridge,
        &[arr_handle.clone(), HostValue::Array(vec![a.clone(), b])],
    )
    .unwrap();
    assert_eq!(tag_of(&ok), ClassTag::ConstantArray);

    let err = constants::array_constant_get(&mut bridge, &[arr_handle, HostValue::Array(vec![a])])
        .unwrap_err();
    assert!(matches!(err, BridgeError::Ir(_)));
}

#[test]
fn struct_constant_rejects_a_field_type_mismatch() {
    let mut bridge = Bridge::new();
    let i32_ty = bridge.ctx.int_type(32);
    let st = bridge.ctx.struct_type(vec![i32_ty]);
    let st_handle: HostValue = bridge.wrap_type(st).into();
    let fp = const_f64(&mut bridge, 1.0);
    let err =
        constants::struct_constant_get(&mut bridge, &[st_handle, HostValue::Array(vec![fp])])
            .unwrap_err();
    assert!(matches!(err, BridgeError::Ir(_)));
}

#[test]
fn data_array_string_appends_the_terminator_by_default() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    let with_null = constants::data_array_constant_string(
        &mut bridge,
        &[ctx.clone(), HostValue::Str("hi".into())],
    )
    .unwrap();
    match bridge.ctx.value(raw_value(&with_null)) {
        ValueData::ConstantDataArray { data, .. } => assert_eq!(data, &vec![104, 105, 0]),
        other => panic!("expected a data array, got {:?}", other),
    }

    let bare = constants::data_array_constant_string(
        &mut bridge,
        &[ctx, HostValue::Str("hi".into()), HostValue::Bool(false)],
    )
    .unwrap();
    match bridge.ctx.value(raw_value(&bare)) {
        ValueData::ConstantDataArray { data, .. } => assert_eq!(data, &vec![104, 105]),
        other => panic!("expected a data array, got {:?}", other),
    }
}

#[test]
fn data_array_from_numbers_packs_into_words() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    let elems = HostValue::Array(vec![HostValue::Number(1.0), HostValue::Number(2.0)]);
    let value = constants::data_array_constant_get(&mut bridge, &[ctx, elems]).unwrap();
    assert_eq!(tag_of(&value), ClassTag::ConstantDataArray);
}

#[test]
fn pointer_null_needs_a_live_pointer_type() {
    let mut bridge = Bridge::new();
    let i8_ty = bridge.ctx.int_type(8);
    let ptr = bridge.ctx.pointer_type(i8_ty);
    let ptr_handle: HostValue = bridge.wrap_type(ptr).into();
    let null = constants::pointer_null_constant_get(&mut bridge, &[ptr_handle]).unwrap();
    assert_eq!(tag_of(&null), ClassTag::ConstantPointerNull);

    // A host null passes the shape check but cannot be dereferenced into a
    // pointer type.
    let err =
        constants::pointer_null_constant_get(&mut bridge, &[HostValue::Null]).unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { .. }));
}

#[test]
fn undef_is_canonical_per_type() {
    let mut bridge = Bridge::new();
    let ty = int_ty(&mut bridge, 32);
    let first = constants::undef_constant_get(&mut bridge, &[ty.clone()]).unwrap();
    let second = constants::undef_constant_get(&mut bridge, &[ty]).unwrap();
    assert_eq!(tag_of(&first), ClassTag::UndefValue);
    assert_eq!(raw_value(&first), raw_value(&second));
}

#[test]
fn attribute_get_canonicalizes_equal_requests() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    let code = HostValue::Number(f64::from(AttrKind::NoInline.code()));
    let first = attrs::attribute_get(&mut bridge, &[ctx.clone(), code.clone()]).unwrap();
    let second = attrs::attribute_get(&mut bridge, &[ctx, code]).unwrap();
    assert_eq!(raw_attr(&first), raw_attr(&second));
    assert_eq!(
        bridge.ctx.attribute(raw_attr(&first)),
        &Attribute::Enum(AttrKind::NoInline)
    );
}

#[test]
fn every_table_code_round_trips_through_attribute_get() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    for code in solder_ir::FIRST_ENUM_ATTR..=solder_ir::LAST_ENUM_ATTR {
        let attr = attrs::attribute_get(
            &mut bridge,
            &[ctx.clone(), HostValue::Number(f64::from(code))],
        )
        .unwrap();
        assert_eq!(
            bridge.ctx.attribute(raw_attr(&attr)).kind_code(),
            Some(code)
        );
    }
}

#[test]
fn attribute_get_rejects_out_of_table_codes() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();
    for code in [0.0, 77.0, 200.0, -3.0] {
        let err = attrs::attribute_get(&mut bridge, &[ctx.clone(), HostValue::Number(code)])
            .unwrap_err();
        assert!(
            matches!(err, BridgeError::InvalidEnumValue { .. }),
            "code {}",
            code
        );
    }
}

#[test]
fn attribute_payload_forms() {
    let mut bridge = Bridge::new();
    let ctx = bridge.context_handle();

    let align = attrs::attribute_get(
        &mut bridge,
        &[
            ctx.clone(),
            HostValue::Number(f64::from(AttrKind::Alignment.code())),
            HostValue::Number(16.0),
        ],
    )
    .unwrap();
    assert_eq!(
        bridge.ctx.attribute(raw_attr(&align)),
        &Attribute::Int(AttrKind::Alignment, 16)
    );

    let i32_handle = int_ty(&mut bridge, 32);
    let byval = attrs::attribute_get(
        &mut bridge,
        &[
            ctx.clone(),
            HostValue::Number(f64::from(AttrKind::ByVal.code())),
            i32_handle,
        ],
    )
    .unwrap();
    assert!(matches!(
        bridge.ctx.attribute(raw_attr(&byval)),
        Attribute::Type(AttrKind::ByVal, _)
    ));

    let tagged = attrs::attribute_get(
        &mut bridge,
        &[
            ctx,
            HostValue::Str("frame-pointer".into()),
            HostValue::Str("all".into()),
        ],
    )
    .unwrap();
    assert_eq!(
        bridge.ctx.attribute(raw_attr(&tagged)),
        &Attribute::Str {
            kind: "frame-pointer".into(),
            value: Some("all".into()),
        }
    );
}
