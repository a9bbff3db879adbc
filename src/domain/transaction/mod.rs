use chrono::NaiveDate;

use super::{
    error::{Error, Result},
    row::RawRow,
};

/// Source ledger date convention.
const INPUT_DATE: &str = "%d.%m.%Y";

/// A register entry ready to be serialized, derived from one valid [`RawRow`].
///
/// The amount stays text: it is normalized by [`normalize_amount`], never
/// parsed, so non-numeric content flows through to the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: String,
    pub payee: String,
    pub category: String,
}

impl Transaction {
    /// Build a transaction from an extracted row, numbered for diagnostics.
    ///
    /// Fails only on an unparseable date. The family tag, when present, is
    /// folded into the category as a `/`-separated suffix segment; neither
    /// field is escaped.
    pub fn from_row(row_nr: usize, row: RawRow) -> Result<Self> {
        let date =
            NaiveDate::parse_from_str(&row.date, INPUT_DATE).map_err(|source| Error::InvalidDate {
                row: row_nr,
                raw: row.date.clone(),
                source,
            })?;

        let category = if row.family.is_empty() {
            row.category
        } else {
            format!("{}/{}", row.category, row.family)
        };

        Ok(Transaction {
            date,
            amount: normalize_amount(&row.amount),
            payee: row.payee,
            category,
        })
    }
}

/// Normalize amount text for the register: drop spaces used as thousands
/// separators and end up with `.` as the decimal separator.
///
/// When both `,` and `.` appear, `,` is taken for a thousands separator and
/// removed; a lone `,` is taken for the decimal separator. The rule guesses
/// the locale and misreads `1,234` (no dot) as the decimal `1.234` — callers
/// depend on this exact behavior for real ledger exports.
pub fn normalize_amount(raw: &str) -> String {
    let amount: String = raw.chars().filter(|c| *c != ' ').collect();

    if amount.contains(',') && amount.contains('.') {
        amount.replace(',', "")
    } else if amount.contains(',') {
        amount.replace(',', ".")
    } else {
        amount
    }
}
