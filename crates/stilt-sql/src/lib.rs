pub mod serializer;
pub use serializer::Serializer;

mod statements;
pub use statements::{
    create_table, delete, delete_by_foreign_key, insert, insert_all, select_all,
    select_by_foreign_key, update,
};
