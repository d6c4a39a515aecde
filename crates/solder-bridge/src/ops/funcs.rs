//! Module, function, global-variable and basic-block operations.

use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::extract::{expect_attr, expect_type, expect_value, opt_module};
use crate::host::HostValue;
use crate::ops::attrs::kind_from_code;
use crate::ops::int_at;
use crate::resolve::{resolve, Candidate, Shape};
use crate::{BridgeError, Result};
use solder_ir::{AttrRef, Linkage, ValueRef};

/// Host-side linkage codes, matched to the declaration order of the native
/// enum. Stable once published.
fn linkage_from_code(op: &'static str, code: i64) -> Result<Linkage> {
    match code {
        0 => Ok(Linkage::External),
        1 => Ok(Linkage::Internal),
        2 => Ok(Linkage::Private),
        3 => Ok(Linkage::Weak),
        4 => Ok(Linkage::Common),
        5 => Ok(Linkage::Appending),
        _ => Err(BridgeError::TypeConstraint {
            op,
            message: "unknown linkage code",
        }),
    }
}

/// `Module.create(name, context)`
pub fn module_create(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Module.create";
    static CANDIDATES: &[Candidate] =
        &[Candidate::exact(&[Shape::Str, Shape::Class(ClassTag::Context)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let name = args[0].as_str().unwrap_or_default().to_string();
    let module = bridge.ctx.add_module(&name);
    Ok(bridge.wrap_module(module).into())
}

/// `Function.create(functionType, linkage, name?, module?)`. Arguments are
/// materialized eagerly, so `getArg` is a table lookup afterwards.
pub fn function_create(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.create";
    static CANDIDATES: &[Candidate] = &[Candidate::new(
        &[
            Shape::Class(ClassTag::FunctionType),
            Shape::Number,
            Shape::Str,
            Shape::Class(ClassTag::Module),
        ],
        2,
    )];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let fn_ty = expect_type(&bridge.registry, ClassTag::FunctionType, &args[0], OP)?;
    let linkage = linkage_from_code(OP, int_at(args, 1))?;
    let name = args
        .get(2)
        .and_then(HostValue::as_str)
        .unwrap_or_default()
        .to_string();
    let module = match args.get(3) {
        Some(value) => opt_module(&bridge.registry, value, OP)?,
        None => None,
    };
    let func = bridge.ctx.create_function(fn_ty, linkage, &name, module)?;
    Ok(bridge.wrap_value(func).into())
}

/// `GlobalVariable.create(type, linkage, name?, initializer?, module?)`
pub fn global_variable_create(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "GlobalVariable.create";
    static CANDIDATES: &[Candidate] = &[Candidate::new(
        &[
            Shape::Class(ClassTag::Type),
            Shape::Number,
            Shape::Str,
            Shape::Class(ClassTag::Constant),
            Shape::Class(ClassTag::Module),
        ],
        2,
    )];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let ty = expect_type(&bridge.registry, ClassTag::Type, &args[0], OP)?;
    let linkage = linkage_from_code(OP, int_at(args, 1))?;
    let name = args
        .get(2)
        .and_then(HostValue::as_str)
        .unwrap_or_default()
        .to_string();
    let init = opt_constant(bridge, args.get(3), OP)?;
    let module = match args.get(4) {
        Some(value) => opt_module(&bridge.registry, value, OP)?,
        None => None,
    };
    let global = bridge
        .ctx
        .create_global_variable(ty, linkage, &name, init, module)?;
    Ok(bridge.wrap_value(global).into())
}

fn opt_constant(
    bridge: &Bridge,
    arg: Option<&HostValue>,
    op: &'static str,
) -> Result<Option<ValueRef>> {
    match arg {
        None | Some(HostValue::Null) => Ok(None),
        Some(value) => Ok(Some(expect_value(
            &bridge.registry,
            ClassTag::Constant,
            value,
            op,
        )?)),
    }
}

/// `BasicBlock.create(context, name?, parent?)`
pub fn basic_block_create(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "BasicBlock.create";
    static CANDIDATES: &[Candidate] = &[Candidate::new(
        &[
            Shape::Class(ClassTag::Context),
            Shape::Str,
            Shape::Class(ClassTag::Function),
        ],
        1,
    )];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let name = args
        .get(1)
        .and_then(HostValue::as_str)
        .unwrap_or_default()
        .to_string();
    let parent = match args.get(2) {
        None | Some(HostValue::Null) => None,
        Some(value) => Some(expect_value(
            &bridge.registry,
            ClassTag::Function,
            value,
            OP,
        )?),
    };
    let block = bridge.ctx.create_basic_block(&name, parent)?;
    Ok(bridge.wrap_value(block).into())
}

/// `Function.getArg(function, index)`
pub fn function_get_arg(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.getArg";
    static CANDIDATES: &[Candidate] =
        &[Candidate::exact(&[Shape::Class(ClassTag::Function), Shape::Number])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    let arg = bridge.ctx.function_arg(func, int_at(args, 1) as u32)?;
    Ok(bridge.wrap_value(arg).into())
}

/// `Function.addFnAttr`: a numeric kind code, a prebuilt attribute, or a
/// string kind with an optional string value.
pub fn function_add_fn_attr(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.addFnAttr";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::Function), Shape::Number]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Function),
            Shape::Class(ClassTag::Attribute),
        ]),
        Candidate::new(&[Shape::Class(ClassTag::Function), Shape::Str, Shape::Str], 2),
    ];
    let selected = resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    let attr = match selected {
        0 => {
            let kind = kind_from_code(int_at(args, 1))?;
            bridge.ctx.attr_enum(kind)
        }
        1 => expect_attr(&bridge.registry, &args[1], OP)?,
        2 => {
            let kind = args[1].as_str().unwrap_or_default().to_string();
            let value = args.get(2).and_then(HostValue::as_str).map(str::to_string);
            bridge.ctx.attr_string(&kind, value.as_deref())
        }
        _ => return Err(BridgeError::TypeMismatch { op: OP }),
    };
    bridge.ctx.add_fn_attr(func, attr)?;
    Ok(HostValue::Null)
}

/// `Function.addParamAttr(function, index, kindOrAttribute)`
pub fn function_add_param_attr(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.addParamAttr";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[
            Shape::Class(ClassTag::Function),
            Shape::Number,
            Shape::Number,
        ]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Function),
            Shape::Number,
            Shape::Class(ClassTag::Attribute),
        ]),
    ];
    let attr = attr_at(bridge, args, 2, OP, CANDIDATES)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    bridge.ctx.add_param_attr(func, int_at(args, 1) as u32, attr)?;
    Ok(HostValue::Null)
}

/// `Function.addRetAttr(function, kindOrAttribute)`
pub fn function_add_ret_attr(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.addRetAttr";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::Function), Shape::Number]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Function),
            Shape::Class(ClassTag::Attribute),
        ]),
    ];
    let attr = attr_at(bridge, args, 1, OP, CANDIDATES)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    bridge.ctx.add_ret_attr(func, attr)?;
    Ok(HostValue::Null)
}

/// Kind-code or prebuilt-attribute alternative at `index`, shared by the
/// parameter and return attachment paths.
fn attr_at(
    bridge: &mut Bridge,
    args: &[HostValue],
    index: usize,
    op: &'static str,
    candidates: &'static [Candidate],
) -> Result<AttrRef> {
    match resolve(op, candidates, &bridge.registry, args)? {
        0 => {
            let kind = kind_from_code(int_at(args, index))?;
            Ok(bridge.ctx.attr_enum(kind))
        }
        _ => expect_attr(&bridge.registry, &args[index], op),
    }
}

/// `Function.setPersonalityFn(function, personality)`
pub fn function_set_personality(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.setPersonalityFn";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[
        Shape::Class(ClassTag::Function),
        Shape::Class(ClassTag::Constant),
    ])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    let personality = expect_value(&bridge.registry, ClassTag::Constant, &args[1], OP)?;
    bridge.ctx.set_personality(func, personality)?;
    Ok(HostValue::Null)
}

/// `Function.eraseFromParent(function)`. The handle the caller still holds
/// goes stale; reading through it afterwards is on them.
pub fn function_erase(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Function.eraseFromParent";
    static CANDIDATES: &[Candidate] = &[Candidate::exact(&[Shape::Class(ClassTag::Function)])];
    resolve(OP, CANDIDATES, &bridge.registry, args)?;
    let func = expect_value(&bridge.registry, ClassTag::Function, &args[0], OP)?;
    bridge.ctx.erase_function(func)?;
    Ok(HostValue::Null)
}
