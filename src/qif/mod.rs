use std::io::{self, Write};

use itertools::Itertools;

use crate::domain::transaction::Transaction;

/// Register type announced on the first output line.
pub const HEADER: &str = "!Type:Bank";

/// Register date convention: apostrophe, not dot, before the year.
const QIF_DATE: &str = "%d.%m'%Y";

/// Append the 5-line block for one accepted transaction.
///
/// Line order is fixed by the format: date, amount, payee, category, then
/// the `^` record terminator.
pub fn push_record(lines: &mut Vec<String>, tx: &Transaction) {
    lines.push(format!("D{}", tx.date.format(QIF_DATE)));
    lines.push(format!("T{}", tx.amount));
    lines.push(format!("P{}", tx.payee));
    lines.push(format!("L{}", tx.category));
    lines.push("^".to_owned());
}

/// Write the accumulated document, `\n`-joined with no trailing newline.
pub fn write(lines: &[String], mut writer: impl Write) -> io::Result<()> {
    writer.write_all(lines.iter().join("\n").as_bytes())
}
