use std::io::{self, Write};

use crate::{domain, domain::row::RawRow, error::Error};

/// Console diagnostics for one conversion run.
///
/// Generic over the output writer so tests capture the diagnostics in
/// memory instead of parsing process stdout. Write failures are ignored;
/// the report is best-effort and never interrupts the conversion.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Reporter::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn row_count(&mut self, count: usize) {
        let _ = writeln!(self.out, "Number of data rows in the csv file: {count}");
        let _ = writeln!(self.out);
    }

    pub fn preview_header(&mut self) {
        self.columns("Row", "Date", "Amount", "Payee", "Family", "Category");
        let _ = writeln!(self.out, "{}", "-".repeat(120));
    }

    /// Preview one data row with its raw field values, before any of them
    /// is parsed. Rows later skipped for a bad date still appear here.
    pub fn row(&mut self, nr: usize, row: &RawRow) {
        self.columns(
            &nr.to_string(),
            &row.date,
            &row.amount,
            &row.payee,
            &row.family,
            &row.category,
        );
    }

    fn columns(&mut self, nr: &str, date: &str, amount: &str, payee: &str, family: &str, category: &str) {
        // date column is 11 wide: DD.MM'YYYY is 10 chars, plus one of slack
        let _ = writeln!(
            self.out,
            "{nr:<3} | {date:<11} | {amount:>12} | {payee:<20} | {family:<15} | {category:<30}"
        );
    }

    pub fn skipped(&mut self, err: &domain::error::Error) {
        match err {
            domain::error::Error::ShortRow { .. } => {
                let _ = writeln!(self.out, "{err}");
            }
            domain::error::Error::InvalidDate { .. } => {
                let _ = writeln!(self.out, "  ! {err}");
            }
        }
    }

    pub fn success(&mut self) {
        let _ = writeln!(self.out, "\nQIF file created successfully");
    }

    pub fn failure(&mut self, err: &Error) {
        let _ = writeln!(self.out, "{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Reporter<Vec<u8>>)) -> String {
        let mut report = Reporter::new(Vec::new());
        f(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn preview_row_uses_the_fixed_column_widths() {
        let out = capture(|report| {
            report.row(
                1,
                &RawRow {
                    date: "05.03.2024".to_owned(),
                    amount: "-166.60".to_owned(),
                    payee: "Bank Alior".to_owned(),
                    family: "".to_owned(),
                    category: "Fees".to_owned(),
                },
            );
        });

        let line = out.lines().next().unwrap();
        let cols: Vec<&str> = line.split(" | ").collect();

        assert_eq!(cols[0], "1  ");
        assert_eq!(cols[1], "05.03.2024 ");
        assert_eq!(cols[2], "     -166.60");
        assert_eq!(cols[3], "Bank Alior          ");
        assert_eq!(cols[4], " ".repeat(15));
        assert_eq!(cols[5].trim_end(), "Fees");
        assert_eq!(cols[5].len(), 30);
    }

    #[test]
    fn header_is_followed_by_a_120_dash_separator() {
        let out = capture(Reporter::preview_header);
        let mut lines = out.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("Row | Date"));
        assert_eq!(lines.next().unwrap(), "-".repeat(120));
    }

    #[test]
    fn row_count_line_names_the_data_row_total() {
        let out = capture(|report| report.row_count(42));
        assert_eq!(out, "Number of data rows in the csv file: 42\n\n");
    }

    #[test]
    fn invalid_date_diagnostic_is_indented_and_flagged() {
        let raw = "31.13.2024";
        let source = chrono::NaiveDate::parse_from_str(raw, "%d.%m.%Y").unwrap_err();
        let out = capture(|report| {
            report.skipped(&domain::error::Error::InvalidDate {
                row: 2,
                raw: raw.to_owned(),
                source,
            });
        });

        assert!(out.starts_with("  ! Invalid date in row 2 ('31.13.2024'):"));
    }

    #[test]
    fn success_line_is_preceded_by_a_blank_line() {
        let out = capture(Reporter::success);
        assert_eq!(out, "\nQIF file created successfully\n");
    }
}
