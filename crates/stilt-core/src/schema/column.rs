use super::{ConflictAction, SqlType};
use crate::stmt;

/// One ordinary column's declaration: name, native kind, and constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The record-side field name. Defaults to the column name.
    pub field: String,

    /// The name of the column in the database.
    pub name: String,

    /// The native kind of the backing field.
    pub ty: stmt::Type,

    /// NOT NULL constraint with its conflict policy, when set.
    pub not_null: Option<ConflictAction>,

    /// UNIQUE constraint with its conflict policy, when set.
    pub unique: Option<ConflictAction>,

    /// Default literal, emitted verbatim inside `DEFAULT (...)`.
    pub default: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Self {
        let name = name.into();
        Self {
            field: name.clone(),
            name,
            ty,
            not_null: None,
            unique: None,
            default: None,
        }
    }

    /// Sets the record-side field name when it differs from the column
    /// name.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn not_null(mut self, on_conflict: ConflictAction) -> Self {
        self.not_null = Some(on_conflict);
        self
    }

    pub fn unique(mut self, on_conflict: ConflictAction) -> Self {
        self.unique = Some(on_conflict);
        self
    }

    pub fn default_value(mut self, literal: impl ToString) -> Self {
        self.default = Some(literal.to_string());
        self
    }

    /// The storage class this column is declared with.
    pub const fn sql_type(&self) -> SqlType {
        SqlType::from_ty(self.ty)
    }
}
