use crate::Serializer;

use stilt_core::stmt::Value;
use stilt_core::{Error, Model, Result};

/// Synthesizes the CREATE TABLE statement for `M`.
pub fn create_table<M: Model>(if_not_exists: bool) -> Result<String> {
    let table = M::table()?;
    Ok(Serializer::new(&table).create_table(if_not_exists))
}

/// Synthesizes the INSERT statement for one record. The primary key is
/// never emitted; the database assigns it.
pub fn insert<M: Model>(record: &M) -> Result<String> {
    let table = M::table()?;
    Serializer::new(&table).insert(&record.values())
}

/// Synthesizes a batch-insert script: one INSERT per record, joined by
/// newlines and wrapped in `BEGIN TRANSACTION;` / `COMMIT;`.
///
/// Atomicity is whatever the executor makes of the transaction wrapper;
/// the script itself does not detect partial failure.
pub fn insert_all<M: Model>(records: &[M]) -> Result<String> {
    let table = M::table()?;
    let serializer = Serializer::new(&table);

    let mut script = String::from("BEGIN TRANSACTION;\n");
    for record in records {
        script.push_str(&serializer.insert(&record.values())?);
        script.push('\n');
    }
    script.push_str("COMMIT;");

    Ok(script)
}

/// Synthesizes the UPDATE statement for one record, keyed on its primary
/// key. Every value column is reassigned, changed or not.
pub fn update<M: Model>(record: &M) -> Result<String> {
    let table = M::table()?;
    let Some(key) = record.primary_key() else {
        return Err(Error::MissingPrimaryKey { table: table.name });
    };
    Serializer::new(&table).update(&record.values(), &key)
}

/// Synthesizes the DELETE statement for one record, keyed on its primary
/// key.
pub fn delete<M: Model>(record: &M) -> Result<String> {
    let table = M::table()?;
    let Some(key) = record.primary_key() else {
        return Err(Error::MissingPrimaryKey { table: table.name });
    };
    Serializer::new(&table).delete(&key)
}

/// Synthesizes a DELETE keyed on the foreign-key column declared by the
/// named record field.
pub fn delete_by_foreign_key<M: Model>(field: &str, value: &Value) -> Result<String> {
    let table = M::table()?;
    Serializer::new(&table).delete_by_foreign_key(field, value)
}

/// Synthesizes `SELECT * FROM <table>`, optionally filtered by a caller-
/// supplied condition (the raw `WHERE` body).
pub fn select_all<M: Model>(condition: Option<&str>) -> Result<String> {
    let table = M::table()?;
    Ok(Serializer::new(&table).select(condition))
}

/// Synthesizes a SELECT filtered on the foreign-key column declared by the
/// named record field.
pub fn select_by_foreign_key<M: Model>(field: &str, value: &Value) -> Result<String> {
    let table = M::table()?;
    Serializer::new(&table).select_by_foreign_key(field, value)
}
