use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::Error;

/// Wire format for the timestamp kind: 24-hour clock, millisecond
/// precision, no timezone suffix.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S:%3f";

/// A native field value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Single character
    Char(char),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Single-precision float
    F32(f32),

    /// Double-precision float
    F64(f64),

    /// Fixed-point decimal
    Decimal(Decimal),

    /// String value
    String(String),

    /// Timestamp with millisecond precision
    DateTime(NaiveDateTime),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Renders the value as the exact literal text that is embedded in a
    /// synthesized statement.
    ///
    /// Strings and timestamps are wrapped in double quotes. Embedded quotes
    /// are **not** escaped: a string value containing `"` corrupts the
    /// emitted statement. This mirrors the wire text the rest of the system
    /// is pinned to; callers owning untrusted input must reject such values
    /// before they get here.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Char(v) => (*v as u32).to_string(),
            Self::I8(v) => v.to_string(),
            Self::I16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U8(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Decimal(v) => v.to_string(),
            Self::String(v) => format!("\"{v}\""),
            Self::DateTime(v) => format!("\"{}\"", v.format(DATETIME_FORMAT)),
            Self::Null => "null".to_string(),
        }
    }

    /// The timestamp an empty or non-text raw value decodes to.
    pub fn min_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .expect("valid calendar date")
            .and_hms_opt(0, 0, 0)
            .expect("valid wall-clock time")
    }
}

macro_rules! impl_value_conversions {
    ($native:ty, $variant:ident, $lit:literal) => {
        impl From<$native> for Value {
            fn from(value: $native) -> Self {
                Self::$variant(value)
            }
        }

        impl TryFrom<Value> for $native {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(value) => Ok(value),
                    _ => Err(Error::TypeMismatch { expected: $lit }),
                }
            }
        }
    };
}

impl_value_conversions!(bool, Bool, "bool");
impl_value_conversions!(char, Char, "char");
impl_value_conversions!(i8, I8, "i8");
impl_value_conversions!(i16, I16, "i16");
impl_value_conversions!(i32, I32, "i32");
impl_value_conversions!(i64, I64, "i64");
impl_value_conversions!(u8, U8, "u8");
impl_value_conversions!(u16, U16, "u16");
impl_value_conversions!(u32, U32, "u32");
impl_value_conversions!(u64, U64, "u64");
impl_value_conversions!(f32, F32, "f32");
impl_value_conversions!(f64, F64, "f64");
impl_value_conversions!(Decimal, Decimal, "Decimal");
impl_value_conversions!(String, String, "String");
impl_value_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
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
