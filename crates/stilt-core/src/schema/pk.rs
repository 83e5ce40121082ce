use super::SqlType;
use crate::stmt;

/// The primary-key column declaration.
///
/// The key is assigned by the database on insert, so it never appears in
/// INSERT column lists; `auto_increment` defaults to true.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    /// The name of the column in the database.
    pub name: String,

    /// The native kind of the backing field.
    pub ty: stmt::Type,

    pub auto_increment: bool,
}

impl PrimaryKey {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Self {
        Self {
            name: name.into(),
            ty,
            auto_increment: true,
        }
    }

    pub fn no_auto_increment(mut self) -> Self {
        self.auto_increment = false;
        self
    }

    pub const fn sql_type(&self) -> SqlType {
        SqlType::from_ty(self.ty)
    }
}
