use std::io::Read;

use csv::{ReaderBuilder, Result, StringRecord, Trim};

/// Read every `;`-delimited row from a reader, header included.
///
/// The reader is configured to keep ragged rows (arity is validated per row
/// later, with a diagnostic naming the row) and to trim whitespace around
/// fields. A UTF-8 byte-order mark is stripped transparently by the `csv`
/// crate.
pub fn read(reader: impl Read) -> Result<Vec<StringRecord>> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .collect()
}
