/// A raw scalar as the database driver hands it back.
///
/// The driver's result shape is the boundary contract: null, 64-bit
/// integer, double, or text. Everything richer is rebuilt from these by the
/// read-direction codec.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(src: i64) -> Self {
        Self::Integer(src)
    }
}

impl From<f64> for SqlValue {
    fn from(src: f64) -> Self {
        Self::Real(src)
    }
}

impl From<String> for SqlValue {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<&str> for SqlValue {
    fn from(src: &str) -> Self {
        Self::Text(src.to_string())
    }
}
