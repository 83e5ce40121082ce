#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use stilt_core::schema::{Column, ConflictAction, ForeignKey, PrimaryKey, RefAction, Table};
use stilt_core::stmt::{Row, Type, Value};
use stilt_core::{Model, Result};

/// A parent record: plain columns only, one of everything constraint-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub room_number: String,
}

impl Model for Advisor {
    fn table() -> Result<Table> {
        Table::builder("Advisors")
            .primary_key(PrimaryKey::new("AdvisorID", Type::I64))
            .column(
                Column::new("FirstName", Type::String)
                    .field("first_name")
                    .not_null(ConflictAction::Fail),
            )
            .column(Column::new("LastName", Type::String).field("last_name"))
            .column(
                Column::new("RoomNumber", Type::String)
                    .field("room_number")
                    .unique(ConflictAction::Abort)
                    .default_value(1124),
            )
            .build()
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.first_name),
            Value::from(&self.last_name),
            Value::from(&self.room_number),
        ]
    }

    fn primary_key(&self) -> Option<Value> {
        self.id.map(Value::I64)
    }

    fn set_primary_key(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self> {
        let id = match row.decode("AdvisorID", Type::I64)? {
            Value::Null => None,
            value => Some(value.try_into()?),
        };

        Ok(Self {
            id,
            first_name: row.decode("FirstName", Type::String)?.try_into()?,
            last_name: row.decode("LastName", Type::String)?.try_into()?,
            room_number: row.decode("RoomNumber", Type::String)?.try_into()?,
        })
    }
}

/// A child record: every storage class plus a cascading foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDateTime,
    pub grade_point_average: f64,
    pub zip_code: i32,
    pub advisor_id: i64,
}

impl Model for Student {
    fn table() -> Result<Table> {
        Table::builder("Students")
            .primary_key(PrimaryKey::new("StudentID", Type::I64))
            .column(Column::new("FirstName", Type::String).field("first_name"))
            .column(Column::new("LastName", Type::String).field("last_name"))
            .column(Column::new("DateOfBirth", Type::DateTime).field("date_of_birth"))
            .column(Column::new("GradePointAverage", Type::F64).field("grade_point_average"))
            .column(Column::new("ZipCode", Type::I32).field("zip_code"))
            .foreign_key(
                ForeignKey::new("Advisors", "AdvisorID", Type::I64)
                    .field("advisor_id")
                    .not_null(ConflictAction::Abort)
                    .on_delete(RefAction::Cascade),
            )
            .build()
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.first_name),
            Value::from(&self.last_name),
            Value::DateTime(self.date_of_birth),
            Value::F64(self.grade_point_average),
            Value::I32(self.zip_code),
            Value::I64(self.advisor_id),
        ]
    }

    fn primary_key(&self) -> Option<Value> {
        self.id.map(Value::I64)
    }

    fn set_primary_key(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self> {
        let id = match row.decode("StudentID", Type::I64)? {
            Value::Null => None,
            value => Some(value.try_into()?),
        };

        Ok(Self {
            id,
            first_name: row.decode("FirstName", Type::String)?.try_into()?,
            last_name: row.decode("LastName", Type::String)?.try_into()?,
            date_of_birth: row.decode("DateOfBirth", Type::DateTime)?.try_into()?,
            grade_point_average: row.decode("GradePointAverage", Type::F64)?.try_into()?,
            zip_code: row.decode("ZipCode", Type::I32)?.try_into()?,
            advisor_id: row.decode("AdvisorID", Type::I64)?.try_into()?,
        })
    }
}

pub fn advisor() -> Advisor {
    Advisor {
        id: None,
        first_name: "Ornath".to_string(),
        last_name: "Pennridge".to_string(),
        room_number: "9978".to_string(),
    }
}

pub fn student() -> Student {
    Student {
        id: None,
        first_name: "Joe".to_string(),
        last_name: "Smith".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2012, 5, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        grade_point_average: 2.9,
        zip_code: 66790,
        advisor_id: 4,
    }
}
