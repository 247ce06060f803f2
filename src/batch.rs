//! Run the metrics over a whole table of documents
//!
//! Each document is independent, so they are processed on the rayon pool. The indexed parallel
//! iterator hands results back in input order, so row `i` of the outcome is still row `i` of the
//! input however the work was scheduled.
use rayon::prelude::*;
use errors::*;
use lexicon::Lexicon;
use metrics::{compute_metrics, MetricsRecord};
use sentiment::SentimentScorer;
use tokenize::tokenize;

/// One input row together with its article text
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub url_id: String,
    /// The input row as read, carried through to the output
    pub fields: Vec<String>,
    /// `None` when the article could not be found
    pub text: Option<String>,
}

/// A document that made it through
#[derive(Debug, Clone, PartialEq)]
pub struct Analysed {
    pub url_id: String,
    pub fields: Vec<String>,
    pub metrics: MetricsRecord,
}

/// A document that didn't, and why
#[derive(Debug)]
pub struct Skipped {
    pub url_id: String,
    pub reason: Error,
}

/// Everything a batch produced, in input order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub analysed: Vec<Analysed>,
    pub skipped: Vec<Skipped>,
}

/// Analyse one document
pub fn analyse<S>(doc: &Document, lexicon: &Lexicon, scorer: &S) -> Result<MetricsRecord>
    where S: SentimentScorer + ?Sized {
    let text = match doc.text {
        Some(ref text) => text,
        None => return Err(Error::MissingText),
    };
    compute_metrics(&tokenize(text), lexicon, scorer)
}

/// Analyse every document, never letting one bad document stop the rest
pub fn run<S>(documents: &[Document], lexicon: &Lexicon, scorer: &S) -> BatchOutcome
    where S: SentimentScorer + ?Sized {
    let results: Vec<Result<MetricsRecord>> = documents.par_iter()
        .map(|doc| analyse(doc, lexicon, scorer))
        .collect();

    let mut outcome = BatchOutcome::default();
    for (doc, result) in documents.iter().zip(results) {
        match result {
            Ok(metrics) => {
                debug!("{}: {} words, fog index {:.2}",
                    doc.url_id, metrics.word_count, metrics.fog_index);
                outcome.analysed.push(Analysed {
                    url_id: doc.url_id.clone(),
                    fields: doc.fields.clone(),
                    metrics: metrics,
                });
            }
            Err(reason) => {
                warn!("Skipping {}: {}", doc.url_id, reason);
                outcome.skipped.push(Skipped { url_id: doc.url_id.clone(), reason: reason });
            }
        }
    }
    info!("{} documents analysed, {} skipped", outcome.analysed.len(), outcome.skipped.len());
    if !outcome.skipped.is_empty() {
        info!("Skipped: {:?}", outcome.skipped_ids());
    }
    outcome
}

impl BatchOutcome {
    pub fn skipped_ids(&self) -> Vec<&str> {
        self.skipped.iter().map(|s| s.url_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment::PatternScorer;

    fn doc(id: &str, text: Option<&str>) -> Document {
        Document {
            url_id: id.to_string(),
            fields: vec![id.to_string(), format!("https://example.com/{}", id)],
            text: text.map(|t| t.to_string()),
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words(vec!["love", "great"], vec!["bad"], vec!["this", "it", "is"])
    }

    #[test]
    fn missing_document_is_skipped_in_place() {
        let docs = vec![
            doc("URL_1", Some("I love this. It is great.")),
            doc("URL_2", None),
            doc("URL_3", Some("Bad weather ruined everything.")),
            doc("URL_4", Some("Our results were great.")),
        ];
        let outcome = run(&docs, &lexicon(), &PatternScorer::default());
        let ids: Vec<&str> = outcome.analysed.iter().map(|a| a.url_id.as_str()).collect();
        assert_eq!(ids, vec!["URL_1", "URL_3", "URL_4"]);
        assert_eq!(outcome.skipped_ids(), vec!["URL_2"]);
        match outcome.skipped[0].reason {
            Error::MissingText => {},
            ref other => panic!("expected MissingText, got {:?}", other),
        }
        assert_eq!(outcome.analysed[0].fields, docs[0].fields);
    }

    #[test]
    fn empty_and_stop_word_documents_are_skipped() {
        let docs = vec![
            doc("URL_1", Some("")),
            doc("URL_2", Some("This is it.")),
            doc("URL_3", Some("Great.")),
        ];
        let outcome = run(&docs, &lexicon(), &PatternScorer::default());
        assert_eq!(outcome.analysed.len(), 1);
        assert_eq!(outcome.skipped_ids(), vec!["URL_1", "URL_2"]);
        assert!(outcome.skipped.iter().all(|s| s.reason.is_per_document()));
    }

    #[test]
    fn order_survives_parallel_work() {
        let docs: Vec<Document> = (0..200)
            .map(|i| {
                let text = if i % 7 == 3 { None } else {
                    Some("word ".repeat(i % 13 + 1) + ".")
                };
                doc(&format!("URL_{}", i + 1), text.as_ref().map(|t| t.as_str()))
            })
            .collect();
        let outcome = run(&docs, &lexicon(), &PatternScorer::default());
        let expected: Vec<String> = (0..200)
            .filter(|i| i % 7 != 3)
            .map(|i| format!("URL_{}", i + 1))
            .collect();
        let ids: Vec<String> = outcome.analysed.iter().map(|a| a.url_id.clone()).collect();
        assert_eq!(ids, expected);
        for a in outcome.analysed.iter() {
            let i: usize = a.url_id["URL_".len()..].parse().unwrap();
            assert_eq!(a.metrics.word_count, (i - 1) % 13 + 1);
        }
    }
}
