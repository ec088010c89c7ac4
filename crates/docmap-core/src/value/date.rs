use chrono::{NaiveDate, NaiveDateTime};

use crate::{Error, Type, Value};

/// An inclusive range between two date/time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        self.start <= *at && *at <= self.end
    }
}

impl core::fmt::Display for DateRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::DateTime(value.and_time(chrono::NaiveTime::default()))
    }
}

impl From<DateRange> for Value {
    fn from(value: DateRange) -> Self {
        Self::DateRange(value)
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(value) => Ok(value),
            Value::Null => Err(Error::type_conversion(value, Type::DateTime)),
            value => match value.cast(&Type::DateTime)? {
                Value::DateTime(value) => Ok(value),
                value => Err(Error::type_conversion(value, Type::DateTime)),
            },
        }
    }
}

impl TryFrom<Value> for DateRange {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateRange(value) => Ok(value),
            _ => Err(Error::type_conversion(value, Type::DateRange)),
        }
    }
}
