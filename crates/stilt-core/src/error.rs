use crate::stmt;

/// An error that can occur while resolving descriptors, synthesizing
/// statement text, or converting values.
///
/// Every variant is a deterministic function-of-input failure; nothing here
/// is transient or retryable.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The record type carries no table declaration.
    #[error("no table declaration found for record type")]
    MissingTable,

    /// More than one field was declared as the primary key.
    #[error("multiple primary key declarations found for table `{table}`")]
    MultiplePrimaryKeys { table: String },

    /// An operation that is keyed on the primary key was invoked on a type
    /// that declares none.
    #[error("no primary key declared for table `{table}`")]
    MissingPrimaryKey { table: String },

    /// The named field exists but carries no foreign-key declaration.
    #[error("no foreign key declaration found on field `{field}`")]
    MissingForeignKey { field: String },

    /// The named field does not exist on the record type.
    #[error("unknown field `{field}` on table `{table}`")]
    UnknownField { table: String, field: String },

    /// A result row is missing a column the descriptor expects.
    #[error("column `{column}` missing from result row")]
    MissingColumn { column: String },

    /// A timestamp string did not match the `yyyy-MM-dd HH:mm:ss:fff`
    /// wire format.
    #[error("malformed timestamp `{input}`, expected `yyyy-MM-dd HH:mm:ss:fff`")]
    MalformedTimestamp { input: String },

    /// A raw SQL value has no conversion rule for the declared kind.
    #[error("cannot convert SQL value {value:?} to {ty:?}")]
    UnsupportedConversion { value: stmt::SqlValue, ty: stmt::Type },

    /// A numeric raw value does not fit the declared kind's width.
    #[error("SQL value {value:?} is out of range for {ty:?}")]
    OutOfRange { value: stmt::SqlValue, ty: stmt::Type },

    /// A value was extracted as the wrong native type.
    #[error("cannot convert value to {expected}")]
    TypeMismatch { expected: &'static str },

    /// The number of supplied field values does not match the descriptor's
    /// value-column count.
    #[error("expected {expected} column values, got {got}")]
    ValueCount { expected: usize, got: usize },
}
