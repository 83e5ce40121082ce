#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::CommaLine;

// Fragment serializers
mod column_def;
mod create_table;
mod delete;
mod insert;
mod select;
mod update;
mod value;

use stilt_core::schema::Table;
use stilt_core::stmt::Value;
use stilt_core::{Error, Result};

/// Serializes statements for one table descriptor to SQL strings.
///
/// Every operation is a pure function of the descriptor and the supplied
/// values; the output text is whitespace-exact and ends with `;`.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Descriptor against which statements are serialized
    table: &'a Table,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    pub fn create_table(&self, if_not_exists: bool) -> String {
        self.serialize(create_table::CreateTable {
            table: self.table,
            if_not_exists,
        })
    }

    /// `values` covers the value columns in declaration order; the primary
    /// key is never part of an INSERT.
    pub fn insert(&self, values: &[Value]) -> Result<String> {
        self.check_values(values)?;
        Ok(self.serialize(insert::Insert {
            table: self.table,
            values,
        }))
    }

    /// Reassigns every value column unconditionally, keyed on the primary
    /// key.
    pub fn update(&self, values: &[Value], key: &Value) -> Result<String> {
        self.check_values(values)?;
        let pk = self.table.primary_key()?;
        Ok(self.serialize(update::Update {
            table: self.table,
            values,
            key_column: &pk.name,
            key,
        }))
    }

    pub fn delete(&self, key: &Value) -> Result<String> {
        let pk = self.table.primary_key()?;
        Ok(self.serialize(delete::Delete {
            table: &self.table.name,
            column: &pk.name,
            key,
        }))
    }

    pub fn delete_by_foreign_key(&self, field: &str, value: &Value) -> Result<String> {
        let fk = self.table.foreign_key(field)?;
        Ok(self.serialize(delete::Delete {
            table: &self.table.name,
            column: &fk.column.name,
            key: value,
        }))
    }

    pub fn select(&self, condition: Option<&str>) -> String {
        self.serialize(select::Select {
            table: &self.table.name,
            condition,
        })
    }

    pub fn select_by_foreign_key(&self, field: &str, value: &Value) -> Result<String> {
        let fk = self.table.foreign_key(field)?;
        let condition = format!("{} = {}", fk.column.name, value.to_sql_literal());
        Ok(self.select(Some(&condition)))
    }

    fn serialize(&self, stmt: impl ToSql) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    fn check_values(&self, values: &[Value]) -> Result<()> {
        let expected = self.table.value_columns().count();
        if values.len() != expected {
            return Err(Error::ValueCount {
                expected,
                got: values.len(),
            });
        }
        Ok(())
    }
}
