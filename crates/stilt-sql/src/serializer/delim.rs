use super::{Formatter, ToSql};

/// Comma + newline + tab delimited, the statement-body layout.
pub(super) struct CommaLine<L>(pub(super) L);

impl<L> ToSql for CommaLine<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ",\n\t";
        }
    }
}
