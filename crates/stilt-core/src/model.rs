use crate::schema::Table;
use crate::stmt::{Row, Value};
use crate::Result;

/// A record type that maps to a single table.
///
/// The descriptor is resolved fresh on each [`table`](Model::table) call;
/// nothing is cached. Implementations own the field-to-column wiring:
/// `values` and `from_row` must follow the declaration order and column
/// names of the descriptor.
pub trait Model: Sized {
    /// Resolves the table descriptor for this record type.
    fn table() -> Result<Table>;

    /// The current field values for every value column (ordinary columns
    /// first, then foreign keys), in declaration order. The primary key is
    /// not included.
    fn values(&self) -> Vec<Value>;

    /// The current primary-key value, if the type declares a primary key.
    fn primary_key(&self) -> Option<Value>;

    /// Stores a database-assigned row id into the primary-key field.
    ///
    /// Called after a single-row insert; the default is a no-op for types
    /// without a primary key.
    fn set_primary_key(&mut self, id: i64) {
        let _ = id;
    }

    /// Materializes a record from a result row.
    ///
    /// Implementations decode each declared column by name via
    /// [`Row::decode`]; a row missing a declared column is an error, never
    /// a silently defaulted field.
    fn from_row(row: &Row) -> Result<Self>;
}
