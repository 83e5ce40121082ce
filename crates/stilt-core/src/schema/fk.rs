use super::{Column, ConflictAction};
use crate::stmt;

/// A foreign-key column declaration.
///
/// A foreign key is a column with a reference clause attached: it carries
/// the full column declaration shape, and the referenced parent column is
/// assumed to share the foreign-key column's own name.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// The underlying column declaration.
    pub column: Column,

    /// The referenced parent table.
    pub parent_table: String,

    /// Action taken when the parent row's key changes.
    pub on_update: RefAction,

    /// Action taken when the parent row is deleted.
    pub on_delete: RefAction,
}

impl ForeignKey {
    pub fn new(parent_table: impl Into<String>, column: impl Into<String>, ty: stmt::Type) -> Self {
        Self {
            column: Column::new(column, ty),
            parent_table: parent_table.into(),
            on_update: RefAction::default(),
            on_delete: RefAction::default(),
        }
    }

    /// Sets the record-side field name when it differs from the column
    /// name.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.column = self.column.field(field);
        self
    }

    pub fn not_null(mut self, on_conflict: ConflictAction) -> Self {
        self.column = self.column.not_null(on_conflict);
        self
    }

    pub fn unique(mut self, on_conflict: ConflictAction) -> Self {
        self.column = self.column.unique(on_conflict);
        self
    }

    pub fn default_value(mut self, literal: impl ToString) -> Self {
        self.column = self.column.default_value(literal);
        self
    }

    pub fn on_update(mut self, action: RefAction) -> Self {
        self.on_update = action;
        self
    }

    pub fn on_delete(mut self, action: RefAction) -> Self {
        self.on_delete = action;
        self
    }
}

/// Action the database takes on child rows when the referenced parent row
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefAction {
    #[default]
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
}
