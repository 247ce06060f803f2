//! Analyse every article listed in a table
//!
//! The root directory is laid out as:
//!
//! ```text
//! root/Input.csv                              one row per article
//! root/MasterDictionary/positive-words.txt
//! root/MasterDictionary/negative-words.txt
//! root/StopWords/StopWords_<category>.txt     Auditor, Currencies, DatesandNumbers, ...
//! ```
//!
//! The article for row N (counting from 1) is read from `<articles>/URL_N.txt`, the name it was
//! saved under. With `--id-column NAME` it is read from `<articles>/<value of NAME>.txt` instead,
//! falling back to `URL_N` where that cell is blank. Articles that are missing or too empty
//! to measure are logged and left out of the output table, which keeps the input order.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// threading
extern crate rayon;
// lastly, this library
extern crate wordmetrics;

use std::path::Path;
use wordmetrics::errors::*;
use wordmetrics::lexicon::{Lexicon, LexiconPaths};
use wordmetrics::sentiment::PatternScorer;
use wordmetrics::table::{self, InputTable};
use wordmetrics::batch;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<root> 'directory holding Input.csv, MasterDictionary/ and StopWords/'")
        .arg_from_usage("--input [FILE] 'input table, if not Input.csv under the root'")
        .arg_from_usage("--articles [DIR] 'directory of URL_N.txt files (default: extracted_articles)'")
        .arg_from_usage("--id-column [NAME] 'name article files after this column instead of the row number'")
        .arg_from_usage("--output [FILE] 'where to write the results (default: output_analysis.csv)'")
        .arg_from_usage("--jobs [N] 'worker threads (default: one per core)'")
        .get_matches();

    let root = Path::new(args.value_of("root").unwrap());
    let input = args.value_of("input")
        .map(|p| Path::new(p).to_path_buf())
        .unwrap_or_else(|| root.join("Input.csv"));
    let articles = args.value_of("articles").unwrap_or("extracted_articles");
    let output = args.value_of("output").unwrap_or("output_analysis.csv");
    if args.is_present("jobs") {
        let jobs = value_t!(args, "jobs", usize).unwrap_or_else(|e| e.exit());
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .map_err(|e| Error::Other(format!("Couldn't start {} workers: {}", jobs, e)))?;
    }

    // Everything fatal happens before the first article is touched
    let lexicon = Lexicon::load(&LexiconPaths::under(root))?;
    let scorer = PatternScorer::default();
    let input_table = InputTable::read(&input)?;
    info!("{} rows in {}, articles from {}", input_table.rows.len(), input.display(), articles);

    let documents = input_table.documents(articles, args.value_of("id-column"))?;
    let outcome = batch::run(&documents, &lexicon, &scorer);

    table::save_output(output, &input_table.headers, &outcome.analysed)?;
    println!("{} of {} articles analysed, results in {}",
        outcome.analysed.len(), documents.len(), output);
    if !outcome.skipped.is_empty() {
        println!("Skipped {}: {}", outcome.skipped.len(), outcome.skipped_ids().join(", "));
    }
    Ok(())
}
