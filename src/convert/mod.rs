use std::{
    fs::File,
    io::{ErrorKind, Write},
    path::Path,
};

use crate::{
    csv,
    domain::{row::RawRow, transaction::Transaction},
    error::{Error, Result},
    qif,
    report::Reporter,
};

/// Convert the ledger at `input` into a QIF register at `output`.
///
/// All outcomes, fatal ones included, are routed to the reporter; the run
/// always returns normally.
pub fn run<W: Write>(input: &Path, output: &Path, report: &mut Reporter<W>) {
    if let Err(err) = convert(input, output, report) {
        report.failure(&err);
    }
}

fn convert<W: Write>(input: &Path, output: &Path, report: &mut Reporter<W>) -> Result<()> {
    let file = File::open(input).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: input.to_owned(),
        },
        _ => Error::ReadInput {
            path: input.to_owned(),
            source: err,
        },
    })?;
    let rows = csv::read(file)?;

    // The header row counts here: a header-only file is not empty and
    // converts to a header-only register.
    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }

    report.row_count(rows.len() - 1);
    report.preview_header();

    let mut lines = vec![qif::HEADER.to_owned()];
    for (nr, record) in rows.iter().skip(1).enumerate() {
        let nr = nr + 1;

        let row = match RawRow::from_record(nr, record) {
            Ok(row) => row,
            Err(err) => {
                report.skipped(&err);
                continue;
            }
        };

        report.row(nr, &row);

        match Transaction::from_row(nr, row) {
            Ok(tx) => qif::push_record(&mut lines, &tx),
            Err(err) => report.skipped(&err),
        }
    }

    let destination = File::create(output).map_err(|source| Error::WriteQif {
        path: output.to_owned(),
        source,
    })?;
    qif::write(&lines, destination).map_err(|source| Error::WriteQif {
        path: output.to_owned(),
        source,
    })?;

    report.success();
    Ok(())
}
