//! Sentence and word segmentation
//!
//! Both levels come from Unicode text segmentation (UAX #29). Sentences are split first, then
//! each sentence is split into words, and the document's words are those per-sentence words in
//! order. That way the sentence lengths always add up to the word count.
//!
//! A word is a `unicode_words` token: a run containing letters or digits. Punctuation is dropped,
//! case is kept, and internal apostrophes and decimal points stay inside the word (`don't`,
//! `3.14`).
//!
//! UAX #29 already keeps `e.g. the` together because of the lowercase word that follows, but it
//! ends a sentence at `Mr. Smith`. Segments ending in an abbreviation are therefore joined with
//! the segment after them, with three strengths of evidence:
//!
//! - titles and the like (`Mr.`, `Dr.`, `vs.`) always join;
//! - words that are also ordinary sentence ends (`no.`, `fig.`, `Dec.`) join only before a
//!   number, as in `No. 5` or `Jan. 5`;
//! - a capital initial (`F.`, `U.S.`) joins when another initial follows, or when it continues
//!   a capitalised name (`John F. Kennedy`) or opens the segment (`J. Smith`). After a lowercase
//!   word it is a sentence end, as in `option B. It worked.`
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations (lowercase, without the final period) that never end a sentence
const ABBREVIATIONS: &'static [&'static str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "gen", "col", "lt", "sgt", "capt",
    "rev", "hon", "vs", "e.g", "i.e", "cf", "approx", "dept",
];

/// Abbreviations that are also words or common sentence ends. Only joined before a number.
const NUMBERED_ABBREVIATIONS: &'static [&'static str] = &[
    "no", "vol", "fig", "est", "co", "al", "etc", "inc", "ltd", "corp", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

lazy_static! {
    /// Single letter initials, possibly chained: `J.` or `U.S.`
    static ref INITIALS: Regex = Regex::new(r"^(?:\p{Lu}\.)+$").unwrap();
}

/// The segmentation of one document, borrowing from its text
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet<'a> {
    text: &'a str,
    sentences: Vec<&'a str>,
    sentence_lengths: Vec<usize>,
    words: Vec<&'a str>,
}

impl<'a> TokenSet<'a> {
    /// The whole document, as given to `tokenize`
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Number of words in each sentence, parallel to `sentences()`
    pub fn sentence_lengths(&self) -> &[usize] {
        &self.sentence_lengths
    }
}

/// Split a document into sentences and words
///
/// Sentences without any word (a stray `...` or a lone dash) are left out, so every sentence
/// contributes at least one word.
pub fn tokenize(text: &str) -> TokenSet {
    let mut tokens = TokenSet {
        text: text,
        sentences: vec![],
        sentence_lengths: vec![],
        words: vec![],
    };
    let segments: Vec<(usize, &str)> = text.split_sentence_bound_indices().collect();
    let mut start = 0;
    for (i, &(offset, segment)) in segments.iter().enumerate() {
        if let Some(&(_, next)) = segments.get(i + 1) {
            if joins_next(segment, next) {
                continue;
            }
        }
        let sentence = text[start..offset + segment.len()].trim();
        start = offset + segment.len();
        let before = tokens.words.len();
        tokens.words.extend(sentence.unicode_words());
        let length = tokens.words.len() - before;
        if length > 0 {
            tokens.sentences.push(sentence);
            tokens.sentence_lengths.push(length);
        }
    }
    tokens
}

/// Whether a segment ends in an abbreviation, so the sentence carries on into `next`
fn joins_next(segment: &str, next: &str) -> bool {
    let mut tokens = segment.split_whitespace().rev();
    let last = match tokens.next() {
        Some(last) => last,
        None => return false,
    };
    if !last.ends_with('.') {
        return false;
    }
    let following = next.split_whitespace().next().unwrap_or("");
    if INITIALS.is_match(last) {
        return INITIALS.is_match(following) || tokens.next().map_or(true, is_capitalised);
    }
    let stem = last.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches('.')
        .to_lowercase();
    if ABBREVIATIONS.contains(&stem.as_str()) {
        return true;
    }
    NUMBERED_ABBREVIATIONS.contains(&stem.as_str())
        && following.chars().next().map_or(false, |c| c.is_numeric())
}

fn is_capitalised(word: &str) -> bool {
    word.chars().find(|c| c.is_alphabetic()).map_or(false, |c| c.is_uppercase())
}
