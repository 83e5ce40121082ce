use super::{Column, ForeignKey, PrimaryKey};
use crate::{Error, Result};

/// Resolved schema metadata for one record type.
///
/// Built fresh from the type's declarations on each call and immutable once
/// built; statement text depends on the declaration order preserved here.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The primary-key column, if the type declares one
    pub primary_key: Option<PrimaryKey>,

    /// Ordinary columns, in declaration order
    pub columns: Vec<Column>,

    /// Foreign-key columns, in declaration order, kept out of `columns`
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            primary_keys: vec![],
            columns: vec![],
            foreign_keys: vec![],
        }
    }

    /// The primary-key declaration, or [`Error::MissingPrimaryKey`].
    pub fn primary_key(&self) -> Result<&PrimaryKey> {
        self.primary_key
            .as_ref()
            .ok_or_else(|| Error::MissingPrimaryKey {
                table: self.name.clone(),
            })
    }

    /// Every column that carries a field value: ordinary columns first,
    /// then foreign-key columns, in declaration order. The primary key is
    /// not a value column.
    pub fn value_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .chain(self.foreign_keys.iter().map(|fk| &fk.column))
    }

    /// Resolves a record field name to its foreign-key declaration.
    pub fn foreign_key(&self, field: &str) -> Result<&ForeignKey> {
        if let Some(fk) = self.foreign_keys.iter().find(|fk| fk.column.field == field) {
            return Ok(fk);
        }

        if self.columns.iter().any(|column| column.field == field) {
            Err(Error::MissingForeignKey {
                field: field.to_string(),
            })
        } else {
            Err(Error::UnknownField {
                table: self.name.clone(),
                field: field.to_string(),
            })
        }
    }
}

/// Builds a [`Table`] descriptor from explicit column declarations.
///
/// Declaration order is the order the builder methods are called in.
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    primary_keys: Vec<PrimaryKey>,
    columns: Vec<Column>,
    foreign_keys: Vec<ForeignKey>,
}

impl TableBuilder {
    pub fn primary_key(mut self, pk: PrimaryKey) -> Self {
        self.primary_keys.push(pk);
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Validates the declarations and produces the immutable descriptor.
    pub fn build(self) -> Result<Table> {
        if self.name.is_empty() {
            return Err(Error::MissingTable);
        }

        let mut primary_keys = self.primary_keys;
        if primary_keys.len() > 1 {
            return Err(Error::MultiplePrimaryKeys { table: self.name });
        }

        Ok(Table {
            name: self.name,
            primary_key: primary_keys.pop(),
            columns: self.columns,
            foreign_keys: self.foreign_keys,
        })
    }
}
