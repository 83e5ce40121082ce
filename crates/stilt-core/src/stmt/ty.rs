/// The native kind of a record field.
///
/// This is a closed union: every kind the mapper supports appears here, and
/// every kind has a storage class. Anything a record wants to persist must
/// be expressed as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean value, stored as `1` / `0`
    Bool,

    /// Single character, stored as its numeric code point
    Char,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// Single-precision float
    F32,

    /// Double-precision float
    F64,

    /// Fixed-point decimal
    Decimal,

    /// String type
    String,

    /// Timestamp with millisecond precision, no timezone
    DateTime,
}
