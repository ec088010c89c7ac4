use crate::{Error, Primitive, Result, Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Cross-type conversions follow the cast rules: integers narrow
            // by wrapping, floating point truncates toward zero.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(value) => Ok(value),
                        Value::Null => Err(Error::type_conversion(
                            value,
                            Type::Primitive(Primitive::$variant),
                        )),
                        value => match value.cast(&Type::Primitive(Primitive::$variant))? {
                            Value::$variant(value) => Ok(value),
                            value => Err(Error::type_conversion(
                                value,
                                Type::Primitive(Primitive::$variant),
                            )),
                        },
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    F32(f32)
    F64(f64)
}
