use super::{Formatter, ToSql};

use stilt_core::schema::{Column, ConflictAction, PrimaryKey, SqlType};

impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name.as_str() " " self.sql_type());

        if let Some(action) = self.not_null {
            fmt!(f, " NOT NULL ON CONFLICT " action);
        }
        if let Some(action) = self.unique {
            fmt!(f, " UNIQUE ON CONFLICT " action);
        }
        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT (" default.as_str() ")");
        }
    }
}

impl ToSql for &PrimaryKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name.as_str() " " self.sql_type() " PRIMARY KEY");

        if self.auto_increment {
            fmt!(f, " AUTOINCREMENT");
        }
    }
}

impl ToSql for SqlType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            match self {
                SqlType::Integer => "INTEGER",
                SqlType::Real => "REAL",
                SqlType::Text => "TEXT",
            }
        );
    }
}

impl ToSql for ConflictAction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            match self {
                ConflictAction::Abort => "ABORT",
                ConflictAction::Rollback => "ROLLBACK",
                ConflictAction::Fail => "FAIL",
                ConflictAction::Ignore => "IGNORE",
                ConflictAction::Replace => "REPLACE",
            }
        );
    }
}
