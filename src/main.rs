use std::{env, path::Path};

use crate::report::Reporter;

mod convert;
mod csv;
mod domain;
mod error;
mod qif;
mod report;

const DEFAULT_INPUT: &str = "input.csv";
const DEFAULT_OUTPUT: &str = "output.qif";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let input = args.first().map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let mut report = Reporter::stdout();
    convert::run(Path::new(input), Path::new(output), &mut report);
}
