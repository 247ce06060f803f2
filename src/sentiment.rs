//! Document polarity and subjectivity
//!
//! The metrics engine only needs a polarity in [-1, 1] and a subjectivity in [0, 1] for a whole
//! document, so the scorer sits behind a trait. The bundled `PatternScorer` averages the scores
//! of known opinion words, the way pattern-style analyzers do.
use unicode_segmentation::UnicodeSegmentation;
use farm::{FarmMap, new_farm};

/// How many words a negation reaches forward
const NEGATION_WINDOW: usize = 3;
/// Polarity multiplier for a negated word: `not good` is mildly bad, not as bad as `bad`
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Anything that can score a whole document
pub trait SentimentScorer: Sync {
    fn score(&self, text: &str) -> Sentiment;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
}

impl Entry {
    fn is_modifier(&self) -> bool {
        self.intensity != 1.0
    }
}

/// Lexicon based scorer with intensifiers and negation
#[derive(Debug, Clone)]
pub struct PatternScorer {
    entries: FarmMap<String, Entry>,
}

impl Default for PatternScorer {
    fn default() -> Self {
        PatternScorer::from_table(include_str!("sentiment-lexicon.txt"))
    }
}

impl PatternScorer {
    /// Parse whitespace separated `word polarity subjectivity intensity` lines
    ///
    /// `#` starts a comment line. Malformed lines are skipped with a warning, since the table is
    /// bundled and a bad line shouldn't take the run down.
    pub fn from_table(table: &str) -> Self {
        let mut entries = new_farm();
        for (line_i, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let parsed = if fields.len() == 4 {
                match (fields[1].parse(), fields[2].parse(), fields[3].parse()) {
                    (Ok(polarity), Ok(subjectivity), Ok(intensity)) =>
                        Some(Entry { polarity, subjectivity, intensity }),
                    _ => None,
                }
            } else { None };
            match parsed {
                Some(entry) => { entries.insert(fields[0].to_lowercase(), entry); }
                None => warn!("Skipping malformed sentiment line {}: {:?}", line_i + 1, line),
            }
        }
        PatternScorer { entries: entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn lookup(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }
}

fn is_negation(word: &str) -> bool {
    match word {
        "not" | "no" | "never" | "nor" | "without" | "hardly" | "cannot" => true,
        _ => word.ends_with("n't") || word.ends_with("n\u{2019}t"),
    }
}

impl SentimentScorer for PatternScorer {
    fn score(&self, text: &str) -> Sentiment {
        let words: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();
        let mut assessments: Vec<(f64, f64)> = vec![];
        let mut modifier = 1.0;
        // Words left in which a negation still applies
        let mut negated = 0;
        for (i, word) in words.iter().enumerate() {
            if is_negation(word) {
                negated = NEGATION_WINDOW;
                continue;
            }
            match self.lookup(word) {
                Some(entry) => {
                    let modifies_next = words.get(i + 1)
                        .and_then(|next| self.lookup(next))
                        .is_some();
                    if entry.is_modifier() && modifies_next {
                        modifier *= entry.intensity;
                        continue;
                    }
                    let mut polarity = clamp(entry.polarity * modifier, -1.0, 1.0);
                    let subjectivity = clamp(entry.subjectivity * modifier, 0.0, 1.0);
                    if negated > 0 {
                        polarity *= NEGATION_FACTOR;
                    }
                    assessments.push((polarity, subjectivity));
                    modifier = 1.0;
                    negated = 0;
                }
                None => {
                    modifier = 1.0;
                    negated = negated.saturating_sub(1);
                }
            }
        }
        if assessments.is_empty() {
            return Sentiment::default();
        }
        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.0).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.1).sum::<f64>() / n;
        Sentiment {
            polarity: clamp(polarity, -1.0, 1.0),
            subjectivity: clamp(subjectivity, 0.0, 1.0),
        }
    }
}

fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bundled_table_parses() {
        let scorer = PatternScorer::default();
        assert!(scorer.len() > 100);
        assert!(scorer.lookup("good").is_some());
    }

    #[test]
    fn averages_opinion_words() {
        let scorer = PatternScorer::from_table("good 0.7 0.6 1.0\nbad -0.7 0.7 1.0\n");
        let s = scorer.score("A good day and a bad night.");
        assert!(close(s.polarity, 0.0));
        assert!(close(s.subjectivity, 0.65));
    }

    #[test]
    fn intensifier_scales_next_word() {
        let scorer = PatternScorer::from_table("good 0.7 0.6 1.0\nvery 0.2 0.3 1.3\n");
        let s = scorer.score("Very good");
        assert!(close(s.polarity, 0.91));
        assert!(close(s.subjectivity, 0.78));
        // On its own an intensifier is just another opinion word
        let s = scorer.score("very");
        assert!(close(s.polarity, 0.2));
    }

    #[test]
    fn negation_flips_and_softens() {
        let scorer = PatternScorer::from_table("good 0.7 0.6 1.0\n");
        assert!(close(scorer.score("This is not good").polarity, -0.35));
        assert!(close(scorer.score("It isn't really that good").polarity, -0.35));
        assert!(close(scorer.score("Not a single thing here was good").polarity, 0.7));
    }

    #[test]
    fn ranges_hold() {
        let scorer = PatternScorer::default();
        for text in ["", "Nothing to see.", "Awesome awesome awesome!", "Absolutely terrible."]
            .iter() {
            let s = scorer.score(text);
            assert!(s.polarity >= -1.0 && s.polarity <= 1.0);
            assert!(s.subjectivity >= 0.0 && s.subjectivity <= 1.0);
        }
        assert_eq!(scorer.score(""), Sentiment::default());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let scorer = PatternScorer::from_table("# header\ngood 0.7 0.6 1.0\nbroken line\nx a b c\n");
        assert_eq!(scorer.len(), 1);
    }
}
