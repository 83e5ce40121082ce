use super::{Formatter, ToSql};

pub(super) struct Select<'a> {
    pub(super) table: &'a str,
    pub(super) condition: Option<&'a str>,
}

impl ToSql for Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT * FROM " self.table);

        if let Some(condition) = self.condition {
            fmt!(f, " WHERE " condition);
        }
    }
}
