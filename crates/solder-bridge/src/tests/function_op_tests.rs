use super::{const_i32, int_ty, raw_value};
use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::handle::RawRef;
use crate::host::HostValue;
use crate::ops::funcs;
use crate::BridgeError;
use pretty_assertions::assert_eq;
use solder_ir::{AttrKind, Attribute, ModuleRef, ValueData};

fn module_handle(bridge: &mut Bridge, name: &str) -> HostValue {
    let ctx = bridge.context_handle();
    funcs::module_create(&mut *bridge, &[HostValue::Str(name.into()), ctx]).unwrap()
}

fn fn_ty_handle(bridge: &mut Bridge, param_bits: &[u32]) -> HostValue {
    let void = bridge.ctx.void_type();
    let params = param_bits.iter().map(|b| bridge.ctx.int_type(*b)).collect();
    let fn_ty = bridge.ctx.function_type(void, params, false);
    bridge.wrap_type(fn_ty).into()
}

fn make_function(bridge: &mut Bridge, name: &str, module: Option<HostValue>) -> HostValue {
    let fn_ty = fn_ty_handle(bridge, &[32]);
    let mut args = vec![fn_ty, HostValue::Number(0.0), HostValue::Str(name.into())];
    if let Some(m) = module {
        args.push(m);
    }
    funcs::function_create(bridge, &args).unwrap()
}

fn raw_module(host: &HostValue) -> ModuleRef {
    match host.as_handle().map(|h| h.raw()) {
        Some(RawRef::Module(m)) => m,
        other => panic!("expected a module handle, got {:?}", other),
    }
}

#[test]
fn function_lands_in_its_module() {
    let mut bridge = Bridge::new();
    let module = module_handle(&mut bridge, "main");
    let func = make_function(&mut bridge, "f", Some(module.clone()));

    assert_eq!(func.as_handle().map(|h| h.tag()), Some(ClassTag::Function));
    let m = raw_module(&module);
    assert_eq!(bridge.ctx.module(m).functions, vec![raw_value(&func)]);
}

#[test]
fn function_accepts_an_absent_module() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "detached", Some(HostValue::Null));
    assert_eq!(func.as_handle().map(|h| h.tag()), Some(ClassTag::Function));
}

#[test]
fn unknown_linkage_codes_are_rejected() {
    let mut bridge = Bridge::new();
    let fn_ty = fn_ty_handle(&mut bridge, &[]);
    let err =
        funcs::function_create(&mut bridge, &[fn_ty, HostValue::Number(9.0)]).unwrap_err();
    assert!(matches!(err, BridgeError::TypeConstraint { .. }));
}

#[test]
fn get_arg_returns_argument_handles_in_order() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let arg = funcs::function_get_arg(&mut bridge, &[func.clone(), HostValue::Number(0.0)])
        .unwrap();
    assert_eq!(arg.as_handle().map(|h| h.tag()), Some(ClassTag::Argument));

    let err = funcs::function_get_arg(&mut bridge, &[func, HostValue::Number(1.0)]).unwrap_err();
    assert!(matches!(err, BridgeError::Ir(_)));
}

#[test]
fn fn_attrs_deduplicate_across_forms() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let code = HostValue::Number(f64::from(AttrKind::NoInline.code()));

    funcs::function_add_fn_attr(&mut bridge, &[func.clone(), code.clone()]).unwrap();
    funcs::function_add_fn_attr(&mut bridge, &[func.clone(), code]).unwrap();
    let attrs = bridge.ctx.fn_attrs(raw_value(&func)).unwrap().to_vec();
    assert_eq!(attrs.len(), 1);
    assert_eq!(
        bridge.ctx.attribute(attrs[0]),
        &Attribute::Enum(AttrKind::NoInline)
    );
}

#[test]
fn fn_attr_string_form_carries_the_value() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    funcs::function_add_fn_attr(
        &mut bridge,
        &[
            func.clone(),
            HostValue::Str("frame-pointer".into()),
            HostValue::Str("all".into()),
        ],
    )
    .unwrap();
    let attrs = bridge.ctx.fn_attrs(raw_value(&func)).unwrap().to_vec();
    assert_eq!(
        bridge.ctx.attribute(attrs[0]),
        &Attribute::Str {
            kind: "frame-pointer".into(),
            value: Some("all".into()),
        }
    );
}

#[test]
fn fn_attr_rejects_an_out_of_table_code() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let err = funcs::function_add_fn_attr(&mut bridge, &[func, HostValue::Number(99.0)])
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidEnumValue { kind: 99 }));
}

#[test]
fn param_and_ret_attrs_attach_to_their_slots() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let code = HostValue::Number(f64::from(AttrKind::NoUndef.code()));

    funcs::function_add_param_attr(
        &mut bridge,
        &[func.clone(), HostValue::Number(0.0), code.clone()],
    )
    .unwrap();
    funcs::function_add_ret_attr(&mut bridge, &[func.clone(), code]).unwrap();

    match bridge.ctx.value(raw_value(&func)) {
        ValueData::Function {
            param_attrs,
            ret_attrs,
            ..
        } => {
            assert_eq!(param_attrs[0].len(), 1);
            assert_eq!(ret_attrs.len(), 1);
        }
        other => panic!("expected a function, got {:?}", other),
    }

    let out_of_range = funcs::function_add_param_attr(
        &mut bridge,
        &[
            func,
            HostValue::Number(5.0),
            HostValue::Number(f64::from(AttrKind::NoUndef.code())),
        ],
    )
    .unwrap_err();
    assert!(matches!(out_of_range, BridgeError::Ir(_)));
}

#[test]
fn personality_takes_any_constant_but_not_an_argument() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let personality = const_i32(&mut bridge, 0);
    funcs::function_set_personality(&mut bridge, &[func.clone(), personality]).unwrap();
    match bridge.ctx.value(raw_value(&func)) {
        ValueData::Function { personality, .. } => assert!(personality.is_some()),
        other => panic!("expected a function, got {:?}", other),
    }

    let arg = funcs::function_get_arg(&mut bridge, &[func.clone(), HostValue::Number(0.0)])
        .unwrap();
    let err = funcs::function_set_personality(&mut bridge, &[func, arg]).unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { .. }));
}

#[test]
fn erase_detaches_but_leaves_the_slot_readable() {
    let mut bridge = Bridge::new();
    let module = module_handle(&mut bridge, "main");
    let func = make_function(&mut bridge, "gone", Some(module.clone()));

    funcs::function_erase(&mut bridge, &[func.clone()]).unwrap();
    let m = raw_module(&module);
    assert!(bridge.ctx.module(m).functions.is_empty());
    match bridge.ctx.value(raw_value(&func)) {
        ValueData::Function { erased, module, .. } => {
            assert!(*erased);
            assert!(module.is_none());
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn global_variable_takes_an_optional_initializer() {
    let mut bridge = Bridge::new();
    let module = module_handle(&mut bridge, "main");
    let ty = int_ty(&mut bridge, 32);
    let init = const_i32(&mut bridge, 42);

    let global = funcs::global_variable_create(
        &mut bridge,
        &[
            ty,
            HostValue::Number(1.0),
            HostValue::Str("g".into()),
            init,
            module.clone(),
        ],
    )
    .unwrap();
    assert_eq!(
        global.as_handle().map(|h| h.tag()),
        Some(ClassTag::GlobalVariable)
    );
    let m = raw_module(&module);
    assert_eq!(bridge.ctx.module(m).globals, vec![raw_value(&global)]);
}

#[test]
fn basic_block_attaches_to_its_parent() {
    let mut bridge = Bridge::new();
    let func = make_function(&mut bridge, "f", None);
    let ctx = bridge.context_handle();
    let block = funcs::basic_block_create(
        &mut bridge,
        &[ctx, HostValue::Str("entry".into()), func],
    )
    .unwrap();
    assert_eq!(block.as_handle().map(|h| h.tag()), Some(ClassTag::BasicBlock));
    match bridge.ctx.value(raw_value(&block)) {
        ValueData::BasicBlock { name, parent } => {
            assert_eq!(name, "entry");
            assert!(parent.is_some());
        }
        other => panic!("expected a basic block, got {:?}", other),
    }
}
