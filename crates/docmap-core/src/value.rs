mod date;
pub use date::DateRange;

mod list;
mod num;

use crate::{coerce, Error, Primitive, Result, Type};

/// A document item value or an attribute value.
///
/// Document items are loosely typed: each item holds a scalar or a list of
/// scalars. Lists read from a document may hold [`Value::Null`] entries when
/// the stored item has fewer populated values than expected.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// A single character
    Char(char),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// Text value
    String(String),

    /// A date and time without time zone
    DateTime(chrono::NaiveDateTime),

    /// An inclusive date/time range
    DateRange(DateRange),

    /// A multi-value item
    List(Vec<Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the numeric kinds. Booleans and characters are not
    /// numeric.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) | Self::F32(_) | Self::F64(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the primitive kind of a scalar value.
    pub fn primitive(&self) -> Option<Primitive> {
        Some(match self {
            Self::Bool(_) => Primitive::Bool,
            Self::I8(_) => Primitive::I8,
            Self::I16(_) => Primitive::I16,
            Self::Char(_) => Primitive::Char,
            Self::I32(_) => Primitive::I32,
            Self::I64(_) => Primitive::I64,
            Self::F32(_) => Primitive::F32,
            Self::F64(_) => Primitive::F64,
            _ => return None,
        })
    }

    /// Infers the type of the value. Null has no type.
    ///
    /// The type of a list is taken from its first non-null entry.
    pub fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Self::Null => return None,
            Self::String(_) => Type::String,
            Self::DateTime(_) => Type::DateTime,
            Self::DateRange(_) => Type::DateRange,
            Self::List(items) => Type::list(
                items
                    .iter()
                    .find_map(Value::infer_ty)
                    .unwrap_or(Type::Any),
            ),
            _ => Type::Primitive(self.primitive()?),
        })
    }

    /// A short human readable name of the value's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "text",
            Self::DateTime(_) => "date-time",
            Self::DateRange(_) => "date-range",
            Self::List(_) => "list",
            _ => match self.primitive() {
                Some(primitive) => primitive.name(),
                None => "unknown",
            },
        }
    }

    /// Converts the value to `ty`.
    ///
    /// See [`coerce::cast`].
    pub fn cast(self, ty: &Type) -> Result<Self> {
        coerce::cast(self, ty)
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, Type::String)),
        }
    }

    /// Converts a nullable value, mapping null to `None`.
    pub fn to_option<T>(self) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self {
            Self::Null => Ok(None),
            value => T::try_from(value).map(Some),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::DateRange(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<char> for Value {
    fn from(src: char) -> Self {
        Self::Char(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Err(Error::type_conversion(value, Type::String)),
            value => value.cast(&Type::String)?.into_string(),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::Null => Err(Error::type_conversion(value, Type::BOOL)),
            value => match value.cast(&Type::BOOL)? {
                Value::Bool(v) => Ok(v),
                value => Err(Error::type_conversion(value, Type::BOOL)),
            },
        }
    }
}

impl TryFrom<Value> for char {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Char(v) => Ok(v),
            Value::Null => Err(Error::type_conversion(value, Type::CHAR)),
            value => match value.cast(&Type::CHAR)? {
                Value::Char(v) => Ok(v),
                value => Err(Error::type_conversion(value, Type::CHAR)),
            },
        }
    }
}
