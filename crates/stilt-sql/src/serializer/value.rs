use super::{Formatter, ToSql};

use stilt_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_sql_literal());
    }
}
