use super::{Formatter, ToSql};

use stilt_core::schema::{ForeignKey, RefAction, Table};

pub(super) struct CreateTable<'a> {
    pub(super) table: &'a Table,
    pub(super) if_not_exists: bool,
}

struct ColumnDefs<'a>(&'a Table);

struct ReferencesClause<'a>(&'a ForeignKey);

impl ToSql for CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let defs = ColumnDefs(self.table);

        fmt!(
            f, "CREATE TABLE " exists self.table.name.as_str() " (\n\t" defs "\n)"
        );
    }
}

impl ToSql for ColumnDefs<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // Definition order is what statement text is pinned to: primary key
        // first, then value columns, then the reference clauses.
        let mut s = "";

        if let Some(pk) = &self.0.primary_key {
            fmt!(f, pk);
            s = ",\n\t";
        }

        for column in self.0.value_columns() {
            fmt!(f, s column);
            s = ",\n\t";
        }

        for fk in &self.0.foreign_keys {
            fmt!(f, s ReferencesClause(fk));
            s = ",\n\t";
        }
    }
}

impl ToSql for ReferencesClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let fk = self.0;
        let column = fk.column.name.as_str();
        let parent = fk.parent_table.as_str();

        fmt!(
            f, "FOREIGN KEY (" column ") REFERENCES " parent " (" column
            ") ON DELETE " fk.on_delete " ON UPDATE " fk.on_update
        );
    }
}

impl ToSql for RefAction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            match self {
                RefAction::NoAction => "NO ACTION",
                RefAction::Cascade => "CASCADE",
                RefAction::SetNull => "SET NULL",
                RefAction::SetDefault => "SET DEFAULT",
                RefAction::Restrict => "RESTRICT",
            }
        );
    }
}
