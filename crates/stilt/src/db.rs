use crate::{Error, Result};

use stilt_core::stmt::{Row, SqlValue, Value};
use stilt_core::Model;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use std::path::Path;

/// A SQLite database handle with record-level operations layered on top.
///
/// Every operation synthesizes its statement from the model's table
/// descriptor, hands it to the driver, and materializes any result rows
/// back into records.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Opens (creating if absent) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    /// Opens a fresh in-memory database.
    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }

    /// The version string of the linked SQLite library.
    pub fn sqlite_version(&self) -> Result<String> {
        let version = self
            .conn
            .query_row("SELECT sqlite_version();", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Turns on foreign-key enforcement for this connection. SQLite leaves
    /// it off by default, so cascading deletes do nothing until this runs.
    pub fn enable_foreign_keys(&self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// Creates the table for `M`. Fails if it already exists.
    pub fn create_table<M: Model>(&self) -> Result<()> {
        self.conn.execute_batch(&stilt_sql::create_table::<M>(false)?)?;
        Ok(())
    }

    /// Creates the table for `M` if it does not already exist.
    pub fn create_table_if_not_exists<M: Model>(&self) -> Result<()> {
        self.conn.execute_batch(&stilt_sql::create_table::<M>(true)?)?;
        Ok(())
    }

    /// Inserts `record` and, when the table declares a primary key, writes
    /// the database-assigned row id back into the record.
    pub fn insert<M: Model>(&self, record: &mut M) -> Result<usize> {
        let table = M::table()?;
        let statement = stilt_sql::insert::<M>(record)?;

        let rows = self.conn.execute(&statement, [])?;

        if rows == 1 && table.primary_key.is_some() {
            record.set_primary_key(self.conn.last_insert_rowid());
        }

        Ok(rows)
    }

    /// Inserts every record in one transaction. Assigned row ids are not
    /// written back; re-query if they are needed.
    pub fn insert_all<M: Model>(&self, records: &[M]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        self.conn.execute_batch(&stilt_sql::insert_all(records)?)?;
        Ok(())
    }

    /// Rewrites every value column of the stored row keyed by `record`'s
    /// primary key. Returns the number of rows changed.
    pub fn update<M: Model>(&self, record: &M) -> Result<usize> {
        let rows = self.conn.execute(&stilt_sql::update(record)?, [])?;
        Ok(rows)
    }

    /// Deletes the stored row keyed by `record`'s primary key.
    pub fn delete<M: Model>(&self, record: &M) -> Result<usize> {
        let rows = self.conn.execute(&stilt_sql::delete(record)?, [])?;
        Ok(rows)
    }

    /// Deletes every row of `M`'s table whose foreign-key column (declared
    /// by the named record field) equals `value`.
    pub fn delete_by_foreign_key<M: Model>(&self, field: &str, value: &Value) -> Result<usize> {
        let statement = stilt_sql::delete_by_foreign_key::<M>(field, value)?;
        let rows = self.conn.execute(&statement, [])?;
        Ok(rows)
    }

    /// Loads the record keyed by `key`, if one exists.
    pub fn get<M: Model, K: Into<Value>>(&self, key: K) -> Result<Option<M>> {
        let table = M::table()?;
        let pk = table.primary_key().map_err(Error::Mapper)?;

        let condition = format!("{} = {}", pk.name, key.into().to_sql_literal());
        let mut records = self.get_all_where::<M>(&condition)?;

        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// Loads every record of `M`'s table.
    pub fn get_all<M: Model>(&self) -> Result<Vec<M>> {
        self.query(&stilt_sql::select_all::<M>(None)?)
    }

    /// Loads every record matching `condition` (the raw `WHERE` body).
    pub fn get_all_where<M: Model>(&self, condition: &str) -> Result<Vec<M>> {
        self.query(&stilt_sql::select_all::<M>(Some(condition))?)
    }

    /// Loads every record whose foreign-key column (declared by the named
    /// record field) equals `value`.
    pub fn get_by_foreign_key<M: Model>(&self, field: &str, value: &Value) -> Result<Vec<M>> {
        self.query(&stilt_sql::select_by_foreign_key::<M>(field, value)?)
    }

    fn query<M: Model>(&self, statement: &str) -> Result<Vec<M>> {
        let mut stmt = self.conn.prepare(statement)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut records = vec![];
        let mut rows = stmt.query([])?;

        while let Some(raw) = rows.next()? {
            let mut row = Row::new();

            for (index, column) in columns.iter().enumerate() {
                row.insert(column.clone(), sql_value(raw.get_ref(index)?)?);
            }

            records.push(M::from_row(&row)?);
        }

        Ok(records)
    }
}

fn sql_value(raw: ValueRef<'_>) -> Result<SqlValue> {
    match raw {
        ValueRef::Null => Ok(SqlValue::Null),
        ValueRef::Integer(value) => Ok(SqlValue::Integer(value)),
        ValueRef::Real(value) => Ok(SqlValue::Real(value)),
        ValueRef::Text(value) => {
            let text = std::str::from_utf8(value)
                .map_err(|_| Error::UnsupportedValueType("non-UTF-8 text"))?;
            Ok(SqlValue::Text(text.to_string()))
        }
        ValueRef::Blob(_) => Err(Error::UnsupportedValueType("BLOB")),
    }
}
