//! Measure one document piped to STDIN
//!
//! Prints the thirteen metrics as `NAME<TAB>value` lines, using the word lists under `<root>`
//! (see wm-analyze for the layout). A document too empty to measure is reported on STDERR and
//! exits with status 2.

// argument parsing
#[macro_use] extern crate clap;
extern crate env_logger;
// lastly, this library
extern crate wordmetrics;

use std::io::{self, Read};
use std::process;
use wordmetrics::errors::*;
use wordmetrics::lexicon::{Lexicon, LexiconPaths};
use wordmetrics::metrics::{compute_metrics, METRIC_COLUMNS};
use wordmetrics::sentiment::PatternScorer;
use wordmetrics::tokenize::tokenize;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    match inner_main() {
        Err(ref err) if err.is_per_document() => {
            eprintln!("Skipped: {}", err);
            process::exit(2);
        }
        result => result.expect("Could not recover. Exiting."),
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<root> 'directory holding MasterDictionary/ and StopWords/'")
        .get_matches();

    let lexicon = Lexicon::load(&LexiconPaths::under(args.value_of("root").unwrap()))?;
    let mut bytes = vec![];
    io::stdin().read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);

    let tokens = tokenize(&text);
    let record = compute_metrics(&tokens, &lexicon, &PatternScorer::default())?;
    for (name, value) in METRIC_COLUMNS.iter().zip(record.values()) {
        println!("{}\t{}", name, value);
    }
    Ok(())
}
