mod db;
pub use db::Db;

mod error;
pub use error::{Error, Result};

pub use stilt_core as core;
pub use stilt_core::{schema, stmt, Model};
pub use stilt_sql as sql;
