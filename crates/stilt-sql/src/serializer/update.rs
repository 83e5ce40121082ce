use super::{CommaLine, Formatter, ToSql};

use stilt_core::schema::Table;
use stilt_core::stmt::Value;

pub(super) struct Update<'a> {
    pub(super) table: &'a Table,
    pub(super) values: &'a [Value],
    pub(super) key_column: &'a str,
    pub(super) key: &'a Value,
}

struct Assignment<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = CommaLine(self.table.value_columns().zip(self.values).map(
            |(column, value)| Assignment {
                column: &column.name,
                value,
            },
        ));

        fmt!(
            f, "UPDATE " self.table.name.as_str()
            "\nSET\n\t" assignments
            "\nWHERE\n\t" self.key_column " = " self.key
        );
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.column " = " self.value);
    }
}
