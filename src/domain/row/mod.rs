use csv::StringRecord;

use super::error::{Error, Result};

/// One data row of the source ledger, extracted positionally and trimmed.
///
/// The source order is fixed: Date;Amount;Payee;Family;Category. Fields past
/// the fifth are ignored; the family field may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub amount: String,
    pub payee: String,
    pub family: String,
    pub category: String,
}

impl RawRow {
    /// Extract the 5 expected fields from a record, or fail with the skip
    /// diagnostic for `row` when fewer than 5 are present.
    pub fn from_record(row: usize, record: &StringRecord) -> Result<Self> {
        if record.len() < 5 {
            return Err(Error::ShortRow {
                row,
                got: record.len(),
                contents: record.iter().map(str::to_owned).collect(),
            });
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().trim().to_owned();

        Ok(RawRow {
            date: field(0),
            amount: field(1),
            payee: field(2),
            family: field(3),
            category: field(4),
        })
    }
}
