//! Sentiment and readability metrics for one document
//!
//! `compute_metrics` is a pure function of the tokens, the lexicon and the sentiment scorer.
//! Whenever a ratio would divide by an empty collection the document is rejected with the
//! matching error instead of producing NaN.
use errors::*;
use lexicon::Lexicon;
use sentiment::SentimentScorer;
use syllables::syllable_count;
use tokenize::TokenSet;

/// First-person pronouns counted by `personal_pronouns`, lowercase
pub const PERSONAL_PRONOUNS: [&'static str; 8] = ["i", "me", "my", "mine", "we", "us", "our", "ours"];

/// Words with more syllables than this are complex
pub const COMPLEX_SYLLABLES: usize = 2;

/// Output column names, in the order of `MetricsRecord::values`
pub const METRIC_COLUMNS: [&'static str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Everything measured for one document
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// The thirteen values as table cells, matching `METRIC_COLUMNS`
    pub fn values(&self) -> Vec<String> {
        vec![
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllable_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

/// Derive every metric for one tokenized document
///
/// Positive and negative words are matched case-sensitively while stop words and pronouns are
/// matched on the lowercase form. Average sentence length and words per sentence come out of
/// the same counts, since the tokenizer guarantees the sentence lengths sum to the word count.
pub fn compute_metrics<S>(tokens: &TokenSet, lexicon: &Lexicon, scorer: &S) -> Result<MetricsRecord>
    where S: SentimentScorer + ?Sized {
    let words = tokens.words();
    let sentence_count = tokens.sentences().len();
    // Every sentence holds at least one word, so this also guards the per-word averages
    if sentence_count == 0 {
        return Err(Error::NoSentences);
    }
    debug_assert!(!words.is_empty());

    let positive_score = words.iter().filter(|w| lexicon.is_positive(w)).count();
    let negative_score = words.iter().filter(|w| lexicon.is_negative(w)).count();
    let sentiment = scorer.score(tokens.text());

    let sentence_words: usize = tokens.sentence_lengths().iter().sum();
    let avg_sentence_length = sentence_words as f64 / sentence_count as f64;

    let content_words: Vec<&str> = words.iter()
        .cloned()
        .filter(|w| !lexicon.is_stop_word(w))
        .collect();
    if content_words.is_empty() {
        return Err(Error::NoContentWords);
    }
    let complex_word_count = content_words.iter()
        .filter(|w| syllable_count(w) > COMPLEX_SYLLABLES)
        .count();
    let percentage_complex_words = complex_word_count as f64 / content_words.len() as f64 * 100.0;
    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

    let word_count = words.len();
    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let personal_pronouns = content_words.iter()
        .filter(|w| PERSONAL_PRONOUNS.contains(&w.to_lowercase().as_str()))
        .count();
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();

    Ok(MetricsRecord {
        positive_score: positive_score,
        negative_score: negative_score,
        polarity_score: sentiment.polarity,
        subjectivity_score: sentiment.subjectivity,
        avg_sentence_length: avg_sentence_length,
        percentage_complex_words: percentage_complex_words,
        fog_index: fog_index,
        avg_words_per_sentence: avg_words_per_sentence,
        complex_word_count: complex_word_count,
        word_count: word_count,
        syllable_per_word: syllables as f64 / word_count as f64,
        personal_pronouns: personal_pronouns,
        avg_word_length: letters as f64 / word_count as f64,
    })
}
