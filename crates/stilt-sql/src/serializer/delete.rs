use super::{Formatter, ToSql};

use stilt_core::stmt::Value;

pub(super) struct Delete<'a> {
    pub(super) table: &'a str,
    pub(super) column: &'a str,
    pub(super) key: &'a Value,
}

impl ToSql for Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f, "DELETE FROM " self.table " WHERE " self.column " = " self.key
        );
    }
}
