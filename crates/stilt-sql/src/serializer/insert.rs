use super::{CommaLine, Formatter, ToSql};

use stilt_core::schema::Table;
use stilt_core::stmt::Value;

pub(super) struct Insert<'a> {
    pub(super) table: &'a Table,
    pub(super) values: &'a [Value],
}

impl ToSql for Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = CommaLine(self.table.value_columns().map(|column| column.name.as_str()));
        let values = CommaLine(self.values);

        fmt!(
            f, "INSERT INTO " self.table.name.as_str()
            " (\n\t" columns "\n) VALUES (\n\t" values "\n)"
        );
    }
}
