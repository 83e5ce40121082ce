use pretty_assertions::assert_eq;

use stilt_core::schema::{Column, ConflictAction, ForeignKey, PrimaryKey, RefAction, SqlType, Table};
use stilt_core::stmt::Type;
use stilt_core::Error;

fn people() -> Table {
    Table::builder("People")
        .primary_key(PrimaryKey::new("PersonID", Type::I64))
        .column(Column::new("FirstName", Type::String))
        .column(Column::new("LastName", Type::String))
        .foreign_key(
            ForeignKey::new("Houses", "HouseID", Type::I64)
                .field("house_id")
                .on_delete(RefAction::Cascade),
        )
        .build()
        .unwrap()
}

#[test]
fn builder_preserves_declaration_order() {
    let table = Table::builder("Orders")
        .column(Column::new("B", Type::I32))
        .column(Column::new("A", Type::I32))
        .column(Column::new("C", Type::I32))
        .build()
        .unwrap();

    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(vec!["B", "A", "C"], names);
}

#[test]
fn builder_rejects_empty_table_name() {
    assert_eq!(Err(Error::MissingTable), Table::builder("").build());
}

#[test]
fn builder_rejects_multiple_primary_keys() {
    let result = Table::builder("People")
        .primary_key(PrimaryKey::new("A", Type::I64))
        .primary_key(PrimaryKey::new("B", Type::I64))
        .build();

    assert_eq!(
        Err(Error::MultiplePrimaryKeys {
            table: "People".to_string(),
        }),
        result
    );
}

#[test]
fn primary_key_defaults_to_auto_increment() {
    let pk = PrimaryKey::new("PersonID", Type::I64);
    assert!(pk.auto_increment);
    assert!(!pk.no_auto_increment().auto_increment);
}

#[test]
fn missing_primary_key_lookup_fails() {
    let table = Table::builder("Logs")
        .column(Column::new("Message", Type::String))
        .build()
        .unwrap();

    assert_eq!(
        Err(Error::MissingPrimaryKey {
            table: "Logs".to_string(),
        }),
        table.primary_key()
    );
}

#[test]
fn value_columns_are_plain_then_foreign_key() {
    let table = people();

    let names: Vec<&str> = table.value_columns().map(|c| c.name.as_str()).collect();
    assert_eq!(vec!["FirstName", "LastName", "HouseID"], names);
}

#[test]
fn foreign_key_resolves_by_field_name() {
    let table = people();

    let fk = table.foreign_key("house_id").unwrap();
    assert_eq!("Houses", fk.parent_table);
    assert_eq!("HouseID", fk.column.name);
    assert_eq!(RefAction::Cascade, fk.on_delete);
    assert_eq!(RefAction::NoAction, fk.on_update);
}

#[test]
fn foreign_key_lookup_on_plain_column_field_fails() {
    let table = people();

    assert_eq!(
        Err(Error::MissingForeignKey {
            field: "FirstName".to_string(),
        }),
        table.foreign_key("FirstName").map(|_| ())
    );
}

#[test]
fn foreign_key_lookup_on_unknown_field_fails() {
    let table = people();

    assert_eq!(
        Err(Error::UnknownField {
            table: "People".to_string(),
            field: "nope".to_string(),
        }),
        table.foreign_key("nope").map(|_| ())
    );
}

#[test]
fn column_field_defaults_to_column_name() {
    let column = Column::new("ZipCode", Type::I32);
    assert_eq!("ZipCode", column.field);

    let column = column.field("zip_code");
    assert_eq!("zip_code", column.field);
    assert_eq!("ZipCode", column.name);
}

#[test]
fn storage_classes() {
    assert_eq!(SqlType::Integer, Column::new("a", Type::Bool).sql_type());
    assert_eq!(SqlType::Integer, Column::new("a", Type::Char).sql_type());
    assert_eq!(SqlType::Integer, Column::new("a", Type::U64).sql_type());
    assert_eq!(SqlType::Real, Column::new("a", Type::F32).sql_type());
    assert_eq!(SqlType::Real, Column::new("a", Type::Decimal).sql_type());
    assert_eq!(SqlType::Text, Column::new("a", Type::String).sql_type());
    assert_eq!(SqlType::Text, Column::new("a", Type::DateTime).sql_type());
}

#[test]
fn conflict_action_defaults_to_abort() {
    assert_eq!(ConflictAction::Abort, ConflictAction::default());
}
