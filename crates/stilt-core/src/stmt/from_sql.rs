use chrono::NaiveDateTime;
use rust_decimal::prelude::{Decimal, FromPrimitive};

use super::value::DATETIME_FORMAT;
use super::{SqlValue, Type, Value};
use crate::{Error, Result};

impl Value {
    /// Decodes a raw driver scalar into a native value of the declared
    /// kind.
    ///
    /// A null raw value decodes to [`Value::Null`] for every kind. Numeric
    /// kinds accept both numeric and numeric-string input; narrowing that
    /// does not fit the declared width fails with [`Error::OutOfRange`].
    pub fn from_sql(raw: &SqlValue, ty: Type) -> Result<Self> {
        if raw.is_null() {
            return Ok(Self::Null);
        }

        match ty {
            Type::Bool => {
                let v = int64(raw, ty)?;
                let v = u8::try_from(v).map_err(|_| out_of_range(raw, ty))?;
                Ok(Self::Bool(v != 0))
            }
            Type::Char => match raw {
                SqlValue::Text(s) => {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(Self::Char(c)),
                        _ => Err(unsupported(raw, ty)),
                    }
                }
                SqlValue::Integer(v) => {
                    let code = u32::try_from(*v).map_err(|_| out_of_range(raw, ty))?;
                    char::from_u32(code)
                        .map(Self::Char)
                        .ok_or_else(|| out_of_range(raw, ty))
                }
                _ => Err(unsupported(raw, ty)),
            },
            Type::I8 => {
                let v = int64(raw, ty)?;
                i8::try_from(v)
                    .map(Self::I8)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::I16 => {
                let v = int64(raw, ty)?;
                i16::try_from(v)
                    .map(Self::I16)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::I32 => {
                let v = int64(raw, ty)?;
                i32::try_from(v)
                    .map(Self::I32)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::I64 => Ok(Self::I64(int64(raw, ty)?)),
            Type::U8 => {
                let v = uint64(raw, ty)?;
                u8::try_from(v)
                    .map(Self::U8)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::U16 => {
                let v = uint64(raw, ty)?;
                u16::try_from(v)
                    .map(Self::U16)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::U32 => {
                let v = uint64(raw, ty)?;
                u32::try_from(v)
                    .map(Self::U32)
                    .map_err(|_| out_of_range(raw, ty))
            }
            Type::U64 => Ok(Self::U64(uint64(raw, ty)?)),
            Type::F32 => Ok(Self::F32(float64(raw, ty)? as f32)),
            Type::F64 => Ok(Self::F64(float64(raw, ty)?)),
            Type::Decimal => match raw {
                SqlValue::Integer(v) => Ok(Self::Decimal(Decimal::from(*v))),
                SqlValue::Real(v) => Decimal::from_f64(*v)
                    .map(Self::Decimal)
                    .ok_or_else(|| out_of_range(raw, ty)),
                SqlValue::Text(s) => s
                    .trim()
                    .parse::<Decimal>()
                    .map(Self::Decimal)
                    .map_err(|_| unsupported(raw, ty)),
                SqlValue::Null => Ok(Self::Null),
            },
            Type::String => Ok(match raw {
                SqlValue::Integer(v) => Self::String(v.to_string()),
                SqlValue::Real(v) => Self::String(v.to_string()),
                SqlValue::Text(s) => Self::String(s.clone()),
                SqlValue::Null => Self::Null,
            }),
            Type::DateTime => match raw {
                SqlValue::Text(s) if s.is_empty() => Ok(Self::DateTime(Self::min_datetime())),
                SqlValue::Text(s) => NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
                    .map(Self::DateTime)
                    .map_err(|_| Error::MalformedTimestamp { input: s.clone() }),
                // A non-text raw carries no parsable timestamp and decodes
                // like absent input.
                _ => Ok(Self::DateTime(Self::min_datetime())),
            },
        }
    }
}

/// Coerces a raw scalar to a signed 64-bit intermediate.
fn int64(raw: &SqlValue, ty: Type) -> Result<i64> {
    match raw {
        SqlValue::Integer(v) => Ok(*v),
        SqlValue::Real(v) => Ok(v.round() as i64),
        SqlValue::Text(s) => s.trim().parse().map_err(|_| unsupported(raw, ty)),
        SqlValue::Null => Err(unsupported(raw, ty)),
    }
}

/// Coerces a raw scalar to an unsigned 64-bit intermediate.
fn uint64(raw: &SqlValue, ty: Type) -> Result<u64> {
    match raw {
        SqlValue::Integer(v) => u64::try_from(*v).map_err(|_| out_of_range(raw, ty)),
        SqlValue::Real(v) => {
            let v = v.round();
            if v < 0.0 {
                Err(out_of_range(raw, ty))
            } else {
                Ok(v as u64)
            }
        }
        SqlValue::Text(s) => s.trim().parse().map_err(|_| unsupported(raw, ty)),
        SqlValue::Null => Err(unsupported(raw, ty)),
    }
}

/// Coerces a raw scalar to the wide float intermediate.
fn float64(raw: &SqlValue, ty: Type) -> Result<f64> {
    match raw {
        SqlValue::Integer(v) => Ok(*v as f64),
        SqlValue::Real(v) => Ok(*v),
        SqlValue::Text(s) => s.trim().parse().map_err(|_| unsupported(raw, ty)),
        SqlValue::Null => Err(unsupported(raw, ty)),
    }
}

fn unsupported(raw: &SqlValue, ty: Type) -> Error {
    Error::UnsupportedConversion {
        value: raw.clone(),
        ty,
    }
}

fn out_of_range(raw: &SqlValue, ty: Type) -> Error {
    Error::OutOfRange {
        value: raw.clone(),
        ty,
    }
}
