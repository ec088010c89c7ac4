use super::{Primitive, Type};

use Primitive::*;

/// Primitive widening conversions. A value of the left-hand primitive is
/// accepted where any of the right-hand primitives is expected.
const WIDENING: &[(Primitive, &[Primitive])] = &[
    (I8, &[I16, I32, I64, F32, F64]),
    (I16, &[I32, I64, F32, F64]),
    (Char, &[I32, I64, F32, F64]),
    (I32, &[I64, F32, F64]),
    (I64, &[F32, F64]),
    (F32, &[F64]),
];

impl Primitive {
    /// Returns `true` if a value of `self` widens to `to`.
    ///
    /// Identity is not a widening.
    pub fn widens_to(self, to: Primitive) -> bool {
        WIDENING
            .iter()
            .find(|(from, _)| *from == self)
            .is_some_and(|(_, targets)| targets.contains(&to))
    }
}

/// Returns `true` if a parameter of type `param` accepts an argument of type
/// `arg`. `None` stands for a null argument.
///
/// A parameter accepts:
/// - null, unless the parameter is a primitive
/// - any argument assignable to it
/// - a primitive (or nullable primitive) argument whose primitive is the
///   parameter's primitive or widens to it
pub fn compatible(param: &Type, arg: Option<&Type>) -> bool {
    let Some(arg) = arg else {
        return !param.is_primitive();
    };

    if param.is_assignable_from(arg) {
        return true;
    }

    match (param.primitive(), arg.primitive()) {
        (Some(param), Some(arg)) => param == arg || arg.widens_to(param),
        _ => false,
    }
}
