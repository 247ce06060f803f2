//! Sentiment and readability metrics for batches of articles
//!
//! The included binaries read a table of articles, look up each article's text, and write the
//! same table back with thirteen metrics per row: positive and negative word counts, polarity
//! and subjectivity, sentence and word lengths, complex word share and the fog index.


#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;
extern crate csv;
extern crate farmhash;
extern crate rayon;
extern crate regex;
extern crate unicode_segmentation;
#[cfg(test)] extern crate tempfile;
pub mod errors;
pub mod farm;
pub mod lexicon;
pub mod tokenize;
pub mod syllables;
pub mod sentiment;
pub mod metrics;
pub mod batch;
pub mod table;
