mod column;
pub use column::Column;

mod constraint;
pub use constraint::ConflictAction;

mod fk;
pub use fk::{ForeignKey, RefAction};

mod pk;
pub use pk::PrimaryKey;

mod table;
pub use table::{Table, TableBuilder};

mod ty;
pub use ty::SqlType;
