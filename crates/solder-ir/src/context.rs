use crate::adt::{ApFloat, ApInt};
use crate::attrs::{AttrKind, Attribute};
use crate::types::{FloatKind, Type};
use crate::values::{ExprFlags, ExprOp, Linkage, ValueData, ValueKind};
use crate::{IrError, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef(pub u32);

impl TypeRef {
    /// The void type is interned at slot 0 by `Context::new`.
    pub const VOID: TypeRef = TypeRef(0);
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ty{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRef(pub u32);

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttrRef(pub u32);

impl fmt::Display for AttrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attr{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef(pub u32);

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApIntRef(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApFloatRef(pub u32);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub functions: Vec<ValueRef>,
    pub globals: Vec<ValueRef>,
}

/// Canonical identity of an interned constant. Two requests with equal keys
/// resolve to the same `ValueRef` within one context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ConstKey {
    Int(TypeRef, ApInt),
    Fp(TypeRef, u64),
    PointerNull(TypeRef),
    Undef(TypeRef),
    Array(TypeRef, Vec<ValueRef>),
    Struct(TypeRef, Vec<ValueRef>),
    DataArray(TypeRef, Vec<i64>),
    Expr {
        ty: TypeRef,
        op: ExprOp,
        operands: Vec<ValueRef>,
        flags: ExprFlags,
        ty_operand: Option<TypeRef>,
    },
}

/// Owns every IR object. All mutation goes through `&mut self`, so the
/// single-threaded access contract is enforced by the borrow checker rather
/// than a lock.
#[derive(Debug, Default)]
pub struct Context {
    types: IndexSet<Type>,
    values: Vec<ValueData>,
    attributes: IndexSet<Attribute>,
    modules: Vec<Module>,
    constants: IndexMap<ConstKey, ValueRef>,
    ap_ints: Vec<ApInt>,
    ap_floats: Vec<ApFloat>,
}

impl Context {
    pub fn new() -> Self {
        let mut ctx = Self::default();
        ctx.types.insert(Type::Void);
        ctx
    }

    // ---- types ----

    fn intern_type(&mut self, ty: Type) -> TypeRef {
        let (index, _) = self.types.insert_full(ty);
        TypeRef(index as u32)
    }

    pub fn void_type(&mut self) -> TypeRef {
        TypeRef::VOID
    }

    pub fn int_type(&mut self, bits: u32) -> TypeRef {
        self.intern_type(Type::Integer(bits))
    }

    pub fn float_type(&mut self, kind: FloatKind) -> TypeRef {
        self.intern_type(Type::Float(kind))
    }

    pub fn pointer_type(&mut self, pointee: TypeRef) -> TypeRef {
        self.intern_type(Type::Pointer(pointee))
    }

    pub fn array_type(&mut self, elem: TypeRef, len: u64) -> TypeRef {
        self.intern_type(Type::Array { elem, len })
    }

    pub fn struct_type(&mut self, fields: Vec<TypeRef>) -> TypeRef {
        self.intern_type(Type::Struct { fields })
    }

    pub fn function_type(&mut self, ret: TypeRef, params: Vec<TypeRef>, varargs: bool) -> TypeRef {
        self.intern_type(Type::Function {
            ret,
            params,
            varargs,
        })
    }

    pub fn ty(&self, r: TypeRef) -> &Type {
        &self.types[r.0 as usize]
    }

    // ---- values ----

    pub fn value(&self, r: ValueRef) -> &ValueData {
        &self.values[r.0 as usize]
    }

    pub fn value_kind(&self, r: ValueRef) -> ValueKind {
        self.value(r).kind()
    }

    pub fn value_type(&self, r: ValueRef) -> TypeRef {
        self.value(r).ty()
    }

    fn push_value(&mut self, data: ValueData) -> ValueRef {
        let r = ValueRef(self.values.len() as u32);
        self.values.push(data);
        r
    }

    fn intern_const(&mut self, key: ConstKey, data: ValueData) -> ValueRef {
        if let Some(existing) = self.constants.get(&key) {
            return *existing;
        }
        let r = self.push_value(data);
        self.constants.insert(key, r);
        r
    }

    // ---- integer constants ----

    pub fn const_int(&mut self, ty: TypeRef, value: ApInt) -> Result<ValueRef> {
        let bits = self
            .ty(ty)
            .int_bits()
            .ok_or_else(|| IrError::Type(format!("{} is not an integer type", self.ty(ty))))?;
        if bits != value.bits() {
            return Err(IrError::Type(format!(
                "width mismatch: i{} type, {}-bit value",
                bits,
                value.bits()
            )));
        }
        Ok(self.intern_const(
            ConstKey::Int(ty, value.clone()),
            ValueData::ConstantInt { ty, value },
        ))
    }

    /// Integer constant whose type is derived from the payload width.
    pub fn const_int_of_width(&mut self, value: ApInt) -> ValueRef {
        let ty = self.int_type(value.bits());
        self.intern_const(
            ConstKey::Int(ty, value.clone()),
            ValueData::ConstantInt { ty, value },
        )
    }

    pub fn const_int_u64(&mut self, ty: TypeRef, value: u64, signed: bool) -> Result<ValueRef> {
        let bits = self
            .ty(ty)
            .int_bits()
            .ok_or_else(|| IrError::Type(format!("{} is not an integer type", self.ty(ty))))?;
        self.const_int(ty, ApInt::new(bits, value, signed))
    }

    pub fn const_true(&mut self) -> ValueRef {
        self.const_int_of_width(ApInt::new(1, 1, false))
    }

    pub fn const_false(&mut self) -> ValueRef {
        self.const_int_of_width(ApInt::new(1, 0, false))
    }

    // ---- floating-point constants ----

    pub fn const_fp(&mut self, ty: TypeRef, value: ApFloat) -> Result<ValueRef> {
        if !self.ty(ty).is_floating_point() {
            return Err(IrError::Type(format!(
                "{} is not a floating-point type",
                self.ty(ty)
            )));
        }
        Ok(self.intern_const(
            ConstKey::Fp(ty, value.to_bits()),
            ValueData::ConstantFp { ty, value },
        ))
    }

    pub fn const_fp_f64(&mut self, ty: TypeRef, value: f64) -> Result<ValueRef> {
        self.const_fp(ty, ApFloat::from_f64(value))
    }

    pub fn const_fp_from_str(&mut self, ty: TypeRef, text: &str) -> Result<ValueRef> {
        let value = ApFloat::parse(text)
            .ok_or_else(|| IrError::Type(format!("cannot parse {:?} as a float literal", text)))?;
        self.const_fp(ty, value)
    }

    /// Float constant from the double-kind interning table, type implied.
    pub fn const_fp_of_context(&mut self, value: ApFloat) -> ValueRef {
        let ty = self.float_type(FloatKind::Double);
        self.intern_const(
            ConstKey::Fp(ty, value.to_bits()),
            ValueData::ConstantFp { ty, value },
        )
    }

    pub fn const_nan(&mut self, ty: TypeRef) -> Result<ValueRef> {
        self.const_fp(ty, ApFloat::nan())
    }

    // ---- null / all-ones / aggregates ----

    pub fn null_value(&mut self, ty: TypeRef) -> Result<ValueRef> {
        match self.ty(ty).clone() {
            Type::Integer(bits) => self.const_int(ty, ApInt::zero(bits)),
            Type::Float(_) => self.const_fp(ty, ApFloat::from_f64(0.0)),
            Type::Pointer(_) => self.const_pointer_null(ty),
            Type::Array { elem, len } => {
                let fill = self.null_value(elem)?;
                self.const_array(ty, vec![fill; len as usize])
            }
            Type::Struct { fields } => {
                let elems = fields
                    .iter()
                    .map(|f| self.null_value(*f))
                    .collect::<Result<Vec<_>>>()?;
                self.const_struct(ty, elems)
            }
            other => Err(IrError::Type(format!("{} has no null value", other))),
        }
    }

    pub fn all_ones_value(&mut self, ty: TypeRef) -> Result<ValueRef> {
        let bits = self
            .ty(ty)
            .int_bits()
            .ok_or_else(|| IrError::Type(format!("{} has no all-ones value", self.ty(ty))))?;
        self.const_int(ty, ApInt::all_ones(bits))
    }

    pub fn const_array(&mut self, ty: TypeRef, elems: Vec<ValueRef>) -> Result<ValueRef> {
        let (elem_ty, len) = match self.ty(ty) {
            Type::Array { elem, len } => (*elem, *len),
            other => return Err(IrError::Type(format!("{} is not an array type", other))),
        };
        if len as usize != elems.len() {
            return Err(IrError::Type(format!(
                "array type holds {} elements, {} given",
                len,
                elems.len()
            )));
        }
        for e in &elems {
            if self.value_type(*e) != elem_ty {
                return Err(IrError::Type("array element type mismatch".into()));
            }
        }
        Ok(self.intern_const(
            ConstKey::Array(ty, elems.clone()),
            ValueData::ConstantArray { ty, elems },
        ))
    }

    pub fn const_struct(&mut self, ty: TypeRef, elems: Vec<ValueRef>) -> Result<ValueRef> {
        let fields = match self.ty(ty) {
            Type::Struct { fields } => fields.clone(),
            other => return Err(IrError::Type(format!("{} is not a struct type", other))),
        };
        if fields.len() != elems.len() {
            return Err(IrError::Type(format!(
                "struct type has {} fields, {} given",
                fields.len(),
                elems.len()
            )));
        }
        for (field, elem) in fields.iter().zip(&elems) {
            if self.value_type(*elem) != *field {
                return Err(IrError::Type("struct field type mismatch".into()));
            }
        }
        Ok(self.intern_const(
            ConstKey::Struct(ty, elems.clone()),
            ValueData::ConstantStruct { ty, elems },
        ))
    }

    pub fn const_pointer_null(&mut self, ty: TypeRef) -> Result<ValueRef> {
        if !self.ty(ty).is_pointer() {
            return Err(IrError::Type(format!(
                "{} is not a pointer type",
                self.ty(ty)
            )));
        }
        Ok(self.intern_const(
            ConstKey::PointerNull(ty),
            ValueData::ConstantPointerNull { ty },
        ))
    }

    pub fn const_data_array(&mut self, data: Vec<i64>) -> ValueRef {
        let elem = self.int_type(64);
        let ty = self.array_type(elem, data.len() as u64);
        self.intern_const(
            ConstKey::DataArray(ty, data.clone()),
            ValueData::ConstantDataArray { ty, data },
        )
    }

    pub fn const_string(&mut self, text: &str, add_null: bool) -> ValueRef {
        let mut data: Vec<i64> = text.bytes().map(i64::from).collect();
        if add_null {
            data.push(0);
        }
        let elem = self.int_type(8);
        let ty = self.array_type(elem, data.len() as u64);
        self.intern_const(
            ConstKey::DataArray(ty, data.clone()),
            ValueData::ConstantDataArray { ty, data },
        )
    }

    pub fn undef(&mut self, ty: TypeRef) -> ValueRef {
        self.intern_const(ConstKey::Undef(ty), ValueData::Undef { ty })
    }

    // ---- constant expressions ----
    //
    // No folding happens here: nodes are canonicalized structurally, which
    // keeps equal requests referentially identical without reproducing
    // optimizer semantics.

    fn expect_constant(&self, r: ValueRef) -> Result<()> {
        if self.value_kind(r).is_constant() {
            Ok(())
        } else {
            Err(IrError::Type(format!(
                "{} operand is not a constant",
                self.value_kind(r)
            )))
        }
    }

    fn make_expr(
        &mut self,
        ty: TypeRef,
        op: ExprOp,
        operands: Vec<ValueRef>,
        flags: ExprFlags,
        ty_operand: Option<TypeRef>,
    ) -> ValueRef {
        self.intern_const(
            ConstKey::Expr {
                ty,
                op,
                operands: operands.clone(),
                flags,
                ty_operand,
            },
            ValueData::ConstantExpr {
                ty,
                op,
                operands,
                flags,
                ty_operand,
            },
        )
    }

    pub fn const_expr_binary(
        &mut self,
        op: ExprOp,
        lhs: ValueRef,
        rhs: ValueRef,
        flags: ExprFlags,
    ) -> Result<ValueRef> {
        self.expect_constant(lhs)?;
        self.expect_constant(rhs)?;
        let ty = self.value_type(lhs);
        Ok(self.make_expr(ty, op, vec![lhs, rhs], flags, None))
    }

    pub fn const_expr_unary(
        &mut self,
        op: ExprOp,
        value: ValueRef,
        flags: ExprFlags,
    ) -> Result<ValueRef> {
        self.expect_constant(value)?;
        let ty = self.value_type(value);
        let operand_ty = self.ty(ty);
        match op {
            ExprOp::Neg | ExprOp::Not if !operand_ty.is_integer() => {
                return Err(IrError::Type(format!(
                    "{} requires an integer operand, got {}",
                    if op == ExprOp::Neg { "neg" } else { "not" },
                    operand_ty
                )));
            }
            ExprOp::FNeg if !operand_ty.is_floating_point() => {
                return Err(IrError::Type(format!(
                    "fneg requires a floating-point operand, got {}",
                    operand_ty
                )));
            }
            _ => {}
        }
        Ok(self.make_expr(ty, op, vec![value], flags, None))
    }

    pub fn const_expr_cast(
        &mut self,
        op: ExprOp,
        value: ValueRef,
        target: TypeRef,
    ) -> Result<ValueRef> {
        self.expect_constant(value)?;
        let src = self.value_type(value);
        let src_ty = self.ty(src).clone();
        let dst_ty = self.ty(target).clone();
        let ok = match op {
            ExprOp::Trunc | ExprOp::SExt | ExprOp::ZExt => {
                src_ty.is_integer() && dst_ty.is_integer()
            }
            ExprOp::FpTrunc | ExprOp::FpExt => {
                src_ty.is_floating_point() && dst_ty.is_floating_point()
            }
            ExprOp::UiToFp | ExprOp::SiToFp => src_ty.is_integer() && dst_ty.is_floating_point(),
            ExprOp::FpToUi | ExprOp::FpToSi => src_ty.is_floating_point() && dst_ty.is_integer(),
            ExprOp::BitCast => true,
            _ => {
                return Err(IrError::Cast(format!("{:?} is not a cast opcode", op)));
            }
        };
        if !ok {
            return Err(IrError::Cast(format!(
                "{:?} cannot cast {} to {}",
                op, src_ty, dst_ty
            )));
        }
        Ok(self.make_expr(target, op, vec![value], ExprFlags::default(), None))
    }

    pub fn align_of(&mut self, ty: TypeRef) -> ValueRef {
        let i64_ty = self.int_type(64);
        self.make_expr(i64_ty, ExprOp::AlignOf, Vec::new(), ExprFlags::default(), Some(ty))
    }

    pub fn size_of(&mut self, ty: TypeRef) -> ValueRef {
        let i64_ty = self.int_type(64);
        self.make_expr(i64_ty, ExprOp::SizeOf, Vec::new(), ExprFlags::default(), Some(ty))
    }

    pub fn offset_of_field(&mut self, ty: TypeRef, field: u32) -> Result<ValueRef> {
        let field_count = match self.ty(ty) {
            Type::Struct { fields } => fields.len() as u32,
            other => return Err(IrError::Type(format!("{} is not a struct type", other))),
        };
        if field >= field_count {
            return Err(IrError::OutOfRange(format!(
                "field {} of a {}-field struct",
                field, field_count
            )));
        }
        let i32_ty = self.int_type(32);
        let field_no = self.const_int(i32_ty, ApInt::new(32, u64::from(field), false))?;
        self.offset_of_const(ty, field_no)
    }

    pub fn offset_of_const(&mut self, ty: TypeRef, field: ValueRef) -> Result<ValueRef> {
        self.expect_constant(field)?;
        let i64_ty = self.int_type(64);
        Ok(self.make_expr(
            i64_ty,
            ExprOp::OffsetOf,
            vec![field],
            ExprFlags::default(),
            Some(ty),
        ))
    }

    // ---- attributes ----

    fn intern_attr(&mut self, attr: Attribute) -> AttrRef {
        let (index, _) = self.attributes.insert_full(attr);
        AttrRef(index as u32)
    }

    pub fn attr_enum(&mut self, kind: AttrKind) -> AttrRef {
        self.intern_attr(Attribute::Enum(kind))
    }

    pub fn attr_int(&mut self, kind: AttrKind, value: u64) -> AttrRef {
        self.intern_attr(Attribute::Int(kind, value))
    }

    pub fn attr_type(&mut self, kind: AttrKind, ty: TypeRef) -> AttrRef {
        self.intern_attr(Attribute::Type(kind, ty))
    }

    pub fn attr_string(&mut self, kind: &str, value: Option<&str>) -> AttrRef {
        self.intern_attr(Attribute::Str {
            kind: kind.to_string(),
            value: value.map(str::to_string),
        })
    }

    pub fn attribute(&self, r: AttrRef) -> &Attribute {
        &self.attributes[r.0 as usize]
    }

    // ---- modules & functions ----

    pub fn add_module(&mut self, name: &str) -> ModuleRef {
        let r = ModuleRef(self.modules.len() as u32);
        self.modules.push(Module {
            name: name.to_string(),
            functions: Vec::new(),
            globals: Vec::new(),
        });
        r
    }

    pub fn module(&self, r: ModuleRef) -> &Module {
        &self.modules[r.0 as usize]
    }

    pub fn create_function(
        &mut self,
        fn_ty: TypeRef,
        linkage: Linkage,
        name: &str,
        module: Option<ModuleRef>,
    ) -> Result<ValueRef> {
        let params = match self.ty(fn_ty) {
            Type::Function { params, .. } => params.clone(),
            other => return Err(IrError::Type(format!("{} is not a function type", other))),
        };
        let func = self.push_value(ValueData::Function {
            name: name.to_string(),
            ty: fn_ty,
            linkage,
            module,
            args: Vec::new(),
            fn_attrs: Vec::new(),
            ret_attrs: Vec::new(),
            param_attrs: vec![Vec::new(); params.len()],
            personality: None,
            erased: false,
        });
        let args: Vec<ValueRef> = params
            .iter()
            .enumerate()
            .map(|(index, ty)| {
                self.push_value(ValueData::Argument {
                    func,
                    index: index as u32,
                    ty: *ty,
                })
            })
            .collect();
        if let ValueData::Function { args: slots, .. } = &mut self.values[func.0 as usize] {
            *slots = args;
        }
        if let Some(m) = module {
            self.modules[m.0 as usize].functions.push(func);
        }
        Ok(func)
    }

    pub fn create_global_variable(
        &mut self,
        ty: TypeRef,
        linkage: Linkage,
        name: &str,
        init: Option<ValueRef>,
        module: Option<ModuleRef>,
    ) -> Result<ValueRef> {
        if let Some(v) = init {
            self.expect_constant(v)?;
        }
        let global = self.push_value(ValueData::GlobalVariable {
            name: name.to_string(),
            ty,
            linkage,
            module,
            init,
        });
        if let Some(m) = module {
            self.modules[m.0 as usize].globals.push(global);
        }
        Ok(global)
    }

    pub fn create_basic_block(&mut self, name: &str, parent: Option<ValueRef>) -> Result<ValueRef> {
        if let Some(p) = parent {
            self.expect_function(p)?;
        }
        Ok(self.push_value(ValueData::BasicBlock {
            name: name.to_string(),
            parent,
        }))
    }

    fn expect_function(&self, r: ValueRef) -> Result<()> {
        match self.value(r) {
            ValueData::Function { .. } => Ok(()),
            other => Err(IrError::Type(format!(
                "{} is not a function",
                other.kind()
            ))),
        }
    }

    pub fn function_arg(&self, func: ValueRef, index: u32) -> Result<ValueRef> {
        match self.value(func) {
            ValueData::Function { args, .. } => {
                args.get(index as usize).copied().ok_or_else(|| {
                    IrError::OutOfRange(format!("argument {} of a {}-arg function", index, args.len()))
                })
            }
            other => Err(IrError::Type(format!("{} is not a function", other.kind()))),
        }
    }

    pub fn function_arg_count(&self, func: ValueRef) -> Result<usize> {
        match self.value(func) {
            ValueData::Function { args, .. } => Ok(args.len()),
            other => Err(IrError::Type(format!("{} is not a function", other.kind()))),
        }
    }

    pub fn add_fn_attr(&mut self, func: ValueRef, attr: AttrRef) -> Result<()> {
        self.expect_function(func)?;
        if let ValueData::Function { fn_attrs, .. } = &mut self.values[func.0 as usize] {
            if !fn_attrs.contains(&attr) {
                fn_attrs.push(attr);
            }
        }
        Ok(())
    }

    pub fn add_ret_attr(&mut self, func: ValueRef, attr: AttrRef) -> Result<()> {
        self.expect_function(func)?;
        if let ValueData::Function { ret_attrs, .. } = &mut self.values[func.0 as usize] {
            if !ret_attrs.contains(&attr) {
                ret_attrs.push(attr);
            }
        }
        Ok(())
    }

    pub fn add_param_attr(&mut self, func: ValueRef, index: u32, attr: AttrRef) -> Result<()> {
        self.expect_function(func)?;
        if let ValueData::Function { param_attrs, .. } = &mut self.values[func.0 as usize] {
            let slot = param_attrs.get_mut(index as usize).ok_or_else(|| {
                IrError::OutOfRange(format!("parameter index {}", index))
            })?;
            if !slot.contains(&attr) {
                slot.push(attr);
            }
        }
        Ok(())
    }

    pub fn fn_attrs(&self, func: ValueRef) -> Result<&[AttrRef]> {
        match self.value(func) {
            ValueData::Function { fn_attrs, .. } => Ok(fn_attrs),
            other => Err(IrError::Type(format!("{} is not a function", other.kind()))),
        }
    }

    pub fn set_personality(&mut self, func: ValueRef, personality: ValueRef) -> Result<()> {
        self.expect_function(func)?;
        self.expect_constant(personality)?;
        if let ValueData::Function { personality: slot, .. } = &mut self.values[func.0 as usize] {
            *slot = Some(personality);
        }
        Ok(())
    }

    /// Detaches the function from its module. The arena slot survives, so a
    /// stale reference reads a tombstoned function rather than freed memory;
    /// callers holding handles past this point are on their own.
    pub fn erase_function(&mut self, func: ValueRef) -> Result<()> {
        self.expect_function(func)?;
        let module = match self.value(func) {
            ValueData::Function { module, .. } => *module,
            _ => None,
        };
        if let Some(m) = module {
            self.modules[m.0 as usize].functions.retain(|f| *f != func);
        }
        if let ValueData::Function { erased, module, .. } = &mut self.values[func.0 as usize] {
            *erased = true;
            *module = None;
        }
        Ok(())
    }

    // ---- scratch big-number values ----

    pub fn alloc_ap_int(&mut self, value: ApInt) -> ApIntRef {
        let r = ApIntRef(self.ap_ints.len() as u32);
        self.ap_ints.push(value);
        r
    }

    pub fn ap_int(&self, r: ApIntRef) -> &ApInt {
        &self.ap_ints[r.0 as usize]
    }

    pub fn alloc_ap_float(&mut self, value: ApFloat) -> ApFloatRef {
        let r = ApFloatRef(self.ap_floats.len() as u32);
        self.ap_floats.push(value);
        r
    }

    pub fn ap_float(&self, r: ApFloatRef) -> &ApFloat {
        &self.ap_floats[r.0 as usize]
    }
}
