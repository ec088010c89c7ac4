mod widen;
pub use widen::compatible;

/// A primitive attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    I16,
    Char,
    I32,
    I64,
    F32,
    F64,
}

/// The type of an attribute, an accessor parameter, or a document item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A primitive that can never be null.
    Primitive(Primitive),

    /// A nullable primitive (`Option<i32>` in Rust).
    ///
    /// Reduces to its primitive for widening checks.
    Optional(Primitive),

    /// Text
    String,

    /// A date and time without time zone
    DateTime,

    /// An inclusive date/time range
    DateRange,

    /// A list of a single type
    List(Box<Type>),

    /// Any non-primitive value
    Any,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Bool,
        Primitive::I8,
        Primitive::I16,
        Primitive::Char,
        Primitive::I32,
        Primitive::I64,
        Primitive::F32,
        Primitive::F64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::Char => "char",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Primitive::Bool | Primitive::Char)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::I16 | Primitive::I32 | Primitive::I64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Primitive::F32 | Primitive::F64)
    }

    /// The value a primitive attribute holds when nothing was stored.
    pub fn zero(self) -> crate::Value {
        use crate::Value;

        match self {
            Primitive::Bool => Value::Bool(false),
            Primitive::I8 => Value::I8(0),
            Primitive::I16 => Value::I16(0),
            Primitive::Char => Value::Char('\0'),
            Primitive::I32 => Value::I32(0),
            Primitive::I64 => Value::I64(0),
            Primitive::F32 => Value::F32(0.0),
            Primitive::F64 => Value::F64(0.0),
        }
    }
}

impl core::fmt::Display for Primitive {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Type {
    pub const BOOL: Type = Type::Primitive(Primitive::Bool);
    pub const I8: Type = Type::Primitive(Primitive::I8);
    pub const I16: Type = Type::Primitive(Primitive::I16);
    pub const CHAR: Type = Type::Primitive(Primitive::Char);
    pub const I32: Type = Type::Primitive(Primitive::I32);
    pub const I64: Type = Type::Primitive(Primitive::I64);
    pub const F32: Type = Type::Primitive(Primitive::F32);
    pub const F64: Type = Type::Primitive(Primitive::F64);
    pub const STRING: Type = Type::String;
    pub const DATE_TIME: Type = Type::DateTime;
    pub const DATE_RANGE: Type = Type::DateRange;

    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn optional(primitive: Primitive) -> Self {
        Self::Optional(primitive)
    }

    /// Returns `true` for types whose values can never be null.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_bool(&self) -> bool {
        self.primitive() == Some(Primitive::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Reduces a primitive or nullable primitive to its primitive.
    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(primitive) | Self::Optional(primitive) => Some(*primitive),
            _ => None,
        }
    }

    /// The element type of a list type.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Self::List(ty) => Some(ty),
            _ => None,
        }
    }

    /// Returns `true` if a value of type `other` can be used where `self` is
    /// expected without any conversion.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self, other) {
            (Self::Any, other) => !other.is_primitive(),
            (Self::List(ty), Self::List(other)) => {
                ty == other || **ty == Type::Any || ty.is_assignable_from(other)
            }
            (ty, other) => ty == other,
        }
    }
}

impl From<Primitive> for Type {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::Optional(primitive) => write!(f, "Option<{primitive}>"),
            Self::String => f.write_str("String"),
            Self::DateTime => f.write_str("DateTime"),
            Self::DateRange => f.write_str("DateRange"),
            Self::List(ty) => write!(f, "List<{ty}>"),
            Self::Any => f.write_str("Any"),
        }
    }
}
