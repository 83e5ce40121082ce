use crate::stmt;

/// SQLite storage class for a column.
///
/// Derived deterministically from the field's native kind; the kind union
/// is closed, so every kind has a storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Real,
    Text,
}

impl SqlType {
    /// Maps a native kind to its storage class.
    pub const fn from_ty(ty: stmt::Type) -> Self {
        match ty {
            stmt::Type::Bool
            | stmt::Type::Char
            | stmt::Type::I8
            | stmt::Type::I16
            | stmt::Type::I32
            | stmt::Type::I64
            | stmt::Type::U8
            | stmt::Type::U16
            | stmt::Type::U32
            | stmt::Type::U64 => Self::Integer,
            stmt::Type::F32 | stmt::Type::F64 | stmt::Type::Decimal => Self::Real,
            stmt::Type::String | stmt::Type::DateTime => Self::Text,
        }
    }
}
