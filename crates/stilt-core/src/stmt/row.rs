use indexmap::IndexMap;

use super::{SqlValue, Type, Value};
use crate::{Error, Result};

/// One result row: an ordered mapping from column name to the raw scalar
/// the driver returned for it.
///
/// Column names are matched exactly, case-sensitive, against the names the
/// descriptor declares.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, SqlValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SqlValue>) {
        self.columns.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.columns.get(name)
    }

    /// Looks up a column by name and decodes it as the declared kind.
    ///
    /// A column absent from the row is an error; a field is never silently
    /// left at its default because the executor returned a narrower row
    /// than the descriptor expects.
    pub fn decode(&self, name: &str, ty: Type) -> Result<Value> {
        let raw = self.get(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })?;
        Value::from_sql(raw, ty)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<N, V> FromIterator<(N, V)> for Row
where
    N: Into<String>,
    V: Into<SqlValue>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}
