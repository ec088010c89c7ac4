//! Conversions between document values and attribute types.
//!
//! Document items are weakly typed. Before a value reaches a setter it is
//! [`cast`] to the declared attribute type, then [`widen`]ed to the setter's
//! parameter type. Lists additionally go through the [`RepairPolicy`].

mod repair;
pub use repair::RepairPolicy;

use crate::{compatible, Error, Primitive, Result, Type, Value};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a value read from a document into `ty`.
///
/// - Null becomes the type's default: zero for primitives, empty text, an
///   empty list; nullable types stay null.
/// - A list read into a scalar type yields its first non-null entry.
/// - A scalar read into a list type yields a single-entry list.
/// - Floating point into an integer truncates toward zero. Integer narrowing
///   wraps.
/// - Text parses into numbers, booleans, characters and date/times.
pub fn cast(value: Value, ty: &Type) -> Result<Value> {
    match (value, ty) {
        (value, Type::Any) => Ok(value),
        (Value::Null, ty) => Ok(default_for(ty)),
        (Value::List(items), Type::List(elem)) => items
            .into_iter()
            .map(|item| match item {
                Value::Null => Ok(Value::Null),
                item => cast(item, elem),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (Value::List(items), ty) => match items.into_iter().find(|item| !item.is_null()) {
            Some(first) => cast(first, ty),
            None => Ok(default_for(ty)),
        },
        (value, Type::List(elem)) => Ok(Value::List(vec![cast(value, elem)?])),
        (value, Type::Primitive(primitive) | Type::Optional(primitive)) => {
            to_primitive(value, *primitive)
        }
        (value, Type::String) => to_text(value),
        (value @ Value::DateTime(_), Type::DateTime) => Ok(value),
        (Value::String(text), Type::DateTime) => parse_date_time(&text)
            .map(Value::DateTime)
            .ok_or_else(|| Error::type_conversion(Value::String(text), Type::DateTime)),
        (value @ Value::DateRange(_), Type::DateRange) => Ok(value),
        (value, ty) => Err(Error::type_conversion(value, ty)),
    }
}

/// Converts a value of an attribute type into a setter's parameter type.
///
/// Only widening conversions are performed; anything else is rejected. Null
/// is rejected for primitive parameters.
pub fn widen(value: Value, param: &Type) -> Result<Value> {
    if *param == Type::Any {
        return Ok(value);
    }

    if value.is_null() {
        return if param.is_primitive() {
            Err(Error::type_conversion(value, param))
        } else {
            Ok(value)
        };
    }

    if let (Some(from), Some(to)) = (value.primitive(), param.primitive()) {
        return if from == to {
            Ok(value)
        } else if from.widens_to(to) {
            to_primitive(value, to)
        } else {
            Err(Error::type_conversion(value, param))
        };
    }

    match (value, param) {
        (Value::List(items), Type::List(elem)) => items
            .into_iter()
            .map(|item| widen(item, elem))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (value, param) if compatible(param, value.infer_ty().as_ref()) => Ok(value),
        (value, param) => Err(Error::type_conversion(value, param)),
    }
}

/// The value an attribute of type `ty` receives when the item is missing.
pub fn default_for(ty: &Type) -> Value {
    match ty {
        Type::Primitive(primitive) => primitive.zero(),
        Type::String => Value::String(String::new()),
        Type::List(_) => Value::List(vec![]),
        _ => Value::Null,
    }
}

enum Num {
    Int(i64),
    Float(f64),
}

fn to_primitive(value: Value, to: Primitive) -> Result<Value> {
    let num = match &value {
        Value::Bool(v) => Num::Int(i64::from(*v)),
        Value::I8(v) => Num::Int(i64::from(*v)),
        Value::I16(v) => Num::Int(i64::from(*v)),
        Value::Char(v) => Num::Int(i64::from(u32::from(*v))),
        Value::I32(v) => Num::Int(i64::from(*v)),
        Value::I64(v) => Num::Int(*v),
        Value::F32(v) => Num::Float(f64::from(*v)),
        Value::F64(v) => Num::Float(*v),
        Value::String(text) => match parse_text(text, to) {
            Some(Ok(value)) => return Ok(value),
            Some(Err(())) => return Err(Error::type_conversion(value, to)),
            None => match parse_num(text) {
                Some(num) => num,
                None => return Err(Error::type_conversion(value, to)),
            },
        },
        _ => return Err(Error::type_conversion(value, to)),
    };

    Ok(match (num, to) {
        (Num::Int(v), Primitive::Bool) => Value::Bool(v != 0),
        (Num::Int(v), Primitive::I8) => Value::I8(v as i8),
        (Num::Int(v), Primitive::I16) => Value::I16(v as i16),
        (Num::Int(v), Primitive::I32) => Value::I32(v as i32),
        (Num::Int(v), Primitive::I64) => Value::I64(v),
        (Num::Int(v), Primitive::F32) => Value::F32(v as f32),
        (Num::Int(v), Primitive::F64) => Value::F64(v as f64),
        (Num::Int(v), Primitive::Char) => match u32::try_from(v).ok().and_then(char::from_u32) {
            Some(c) => Value::Char(c),
            None => return Err(Error::type_conversion(value, to)),
        },
        (Num::Float(v), Primitive::Bool) => Value::Bool(v != 0.0),
        (Num::Float(v), Primitive::I8) => Value::I8(v as i8),
        (Num::Float(v), Primitive::I16) => Value::I16(v as i16),
        (Num::Float(v), Primitive::I32) => Value::I32(v as i32),
        (Num::Float(v), Primitive::I64) => Value::I64(v as i64),
        (Num::Float(v), Primitive::F32) => Value::F32(v as f32),
        (Num::Float(v), Primitive::F64) => Value::F64(v),
        (Num::Float(_), Primitive::Char) => return Err(Error::type_conversion(value, to)),
    })
}

/// Text conversions that are not numeric parses. Returns `None` to fall back
/// to parsing a number.
fn parse_text(text: &str, to: Primitive) -> Option<core::result::Result<Value, ()>> {
    match to {
        Primitive::Bool => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                Some(Ok(Value::Bool(true)))
            } else if text.eq_ignore_ascii_case("false") {
                Some(Ok(Value::Bool(false)))
            } else {
                None
            }
        }
        Primitive::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Some(Ok(Value::Char('\0'))),
                (Some(c), None) => Some(Ok(Value::Char(c))),
                _ => Some(Err(())),
            }
        }
        _ => None,
    }
}

fn parse_num(text: &str) -> Option<Num> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Num::Int(0));
    }
    if let Ok(v) = text.parse::<i64>() {
        return Some(Num::Int(v));
    }
    text.parse::<f64>().ok().map(Num::Float)
}

fn to_text(value: Value) -> Result<Value> {
    let text = match &value {
        Value::String(_) => return Ok(value),
        Value::Bool(v) => v.to_string(),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::Char(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::DateTime(v) => v.format(DATE_TIME_FORMATS[0]).to_string(),
        Value::DateRange(v) => v.to_string(),
        _ => return Err(Error::type_conversion(value, Type::String)),
    };
    Ok(Value::String(text))
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(chrono::NaiveTime::default()))
        })
}
