//! Attribute construction. Numeric kind codes are validated against the
//! closed table before any interning happens, so an out-of-table code fails
//! as `InvalidEnumValue` rather than producing a nonsense attribute.

use crate::bridge::Bridge;
use crate::class::ClassTag;
use crate::extract::expect_type;
use crate::host::HostValue;
use crate::ops::int_at;
use crate::resolve::{resolve, Candidate, Shape};
use crate::{BridgeError, Result};
use solder_ir::AttrKind;

/// Checked code-to-kind conversion shared by every numeric attribute path.
pub(crate) fn kind_from_code(code: i64) -> Result<AttrKind> {
    u32::try_from(code)
        .ok()
        .and_then(AttrKind::from_code)
        .ok_or(BridgeError::InvalidEnumValue {
            kind: code.clamp(0, i64::from(u32::MAX)) as u32,
        })
}

/// `Attribute.get` across its five accepted signatures: bare kind, kind with
/// an integer payload, kind with a type payload, and the two string forms.
pub fn attribute_get(bridge: &mut Bridge, args: &[HostValue]) -> Result<HostValue> {
    const OP: &str = "Attribute.get";
    static CANDIDATES: &[Candidate] = &[
        Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Number]),
        Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Number, Shape::Number]),
        Candidate::exact(&[
            Shape::Class(ClassTag::Context),
            Shape::Number,
            Shape::Class(ClassTag::Type),
        ]),
        Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Str]),
        Candidate::exact(&[Shape::Class(ClassTag::Context), Shape::Str, Shape::Str]),
    ];
    let attr = match resolve(OP, CANDIDATES, &bridge.registry, args)? {
        0 => {
            let kind = kind_from_code(int_at(args, 1))?;
            bridge.ctx.attr_enum(kind)
        }
        1 => {
            let kind = kind_from_code(int_at(args, 1))?;
            bridge.ctx.attr_int(kind, int_at(args, 2) as u64)
        }
        2 => {
            let kind = kind_from_code(int_at(args, 1))?;
            let ty = expect_type(&bridge.registry, ClassTag::Type, &args[2], OP)?;
            bridge.ctx.attr_type(kind, ty)
        }
        3 => {
            let kind = args[1].as_str().unwrap_or_default().to_string();
            bridge.ctx.attr_string(&kind, None)
        }
        4 => {
            let kind = args[1].as_str().unwrap_or_default().to_string();
            let value = args[2].as_str().unwrap_or_default().to_string();
            bridge.ctx.attr_string(&kind, Some(&value))
        }
        _ => return Err(BridgeError::TypeMismatch { op: OP }),
    };
    Ok(bridge.wrap_attr(attr).into())
}
