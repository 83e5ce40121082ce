mod from_sql;

mod row;
pub use row::Row;

mod sql_value;
pub use sql_value::SqlValue;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
