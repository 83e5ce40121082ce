/// An error surfaced by the database-facing layer.
///
/// Mapper failures keep their own taxonomy; executor failures pass through
/// untranslated from the driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Mapper(#[from] stilt_core::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The driver returned a raw value shape no native kind maps to.
    #[error("unsupported raw SQL value: {0}")]
    UnsupportedValueType(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
