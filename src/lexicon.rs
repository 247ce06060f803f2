//! Positive, negative and stop word lists
//!
//! The lists are loaded once before any document is read and never change afterwards, so a
//! `&Lexicon` can be shared between every worker without locking.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use errors::*;
use farm::{FarmSet, new_farm_set};

/// Stop word categories shipped in the `StopWords` directory
pub const STOP_WORD_CATEGORIES: [&'static str; 6] = [
    "Auditor", "Currencies", "DatesandNumbers", "GenericLong", "Geographic", "Names",
];

/// How the bytes of a word list are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8, with undecodable bytes replaced by U+FFFD
    Utf8,
    /// ISO-8859-1, where every byte is a character
    Latin1,
}

impl Encoding {
    pub fn decode(&self, bytes: &[u8]) -> String {
        match *self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Where each word list lives on disk
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub stop_words: Vec<PathBuf>,
}

impl LexiconPaths {
    /// The usual layout: `MasterDictionary/` and `StopWords/` under one root
    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        LexiconPaths {
            positive: root.join("MasterDictionary").join("positive-words.txt"),
            negative: root.join("MasterDictionary").join("negative-words.txt"),
            stop_words: STOP_WORD_CATEGORIES.iter()
                .map(|cat| root.join("StopWords").join(format!("StopWords_{}.txt", cat)))
                .collect(),
        }
    }
}

/// The three word sets used by the metrics engine
///
/// Positive and negative words are matched exactly as written. Stop words are stored lowercase
/// and callers lowercase the word before asking.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: FarmSet<String>,
    negative: FarmSet<String>,
    stop_words: FarmSet<String>,
}

impl Lexicon {
    /// Read every list. Any missing list is fatal for the whole run.
    pub fn load(paths: &LexiconPaths) -> Result<Lexicon> {
        let positive = entries(&read_list(&paths.positive, Encoding::Utf8)?);
        let negative = entries(&read_list(&paths.negative, Encoding::Latin1)?);
        let mut stop_words = vec![];
        for path in paths.stop_words.iter() {
            stop_words.extend(stop_entries(&read_list(path, Encoding::Latin1)?));
        }
        let lexicon = Lexicon::from_words(positive, negative, stop_words);
        info!("Loaded {} positive, {} negative and {} stop words from {} stop word lists",
            lexicon.positive.len(),
            lexicon.negative.len(),
            lexicon.stop_words.len(),
            paths.stop_words.len());
        Ok(lexicon)
    }

    /// Build a lexicon from words already in memory. Stop words get lowercased here.
    pub fn from_words<P, N, S>(positive: P, negative: N, stop_words: S) -> Lexicon
        where P: IntoIterator, P::Item: Into<String>,
              N: IntoIterator, N::Item: Into<String>,
              S: IntoIterator, S::Item: Into<String> {
        let mut lexicon = Lexicon {
            positive: new_farm_set(),
            negative: new_farm_set(),
            stop_words: new_farm_set(),
        };
        lexicon.positive.extend(positive.into_iter().map(Into::into));
        lexicon.negative.extend(negative.into_iter().map(Into::into));
        lexicon.stop_words.extend(stop_words.into_iter()
            .map(|w| Into::<String>::into(w).to_lowercase()));
        lexicon
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Case-insensitive, unlike the sentiment lists
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

/// Read a whole list, naming it in the error if it isn't there
fn read_list(path: &Path, encoding: Encoding) -> Result<String> {
    let mut bytes = vec![];
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|err| Error::MissingFile(format!("word list {}", path.display()), Some(err)))?;
    Ok(encoding.decode(&bytes))
}

/// One word per line. Blank lines and `;` comments are not words.
fn entries(content: &str) -> Vec<String> {
    content.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(|line| line.to_string())
        .collect()
}

/// Stop word lines may carry a note after a pipe, as in `SMITH | Surnames from 1990 census`
fn stop_entries(content: &str) -> Vec<String> {
    entries(content).into_iter()
        .filter_map(|line| line.split('|').next().map(|w| w.trim().to_string()))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, bytes: &[u8]) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(path).unwrap().write_all(bytes).unwrap();
    }

    fn standard_layout() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "MasterDictionary/positive-words.txt",
            b";;; opinion lexicon\n\nlove\ngreat\ngreat\n");
        // 0xE9 is e-acute in Latin-1 and invalid on its own in UTF-8
        write(dir.path(), "MasterDictionary/negative-words.txt", b"bad\nn\xE9gative\n");
        for cat in STOP_WORD_CATEGORIES.iter() {
            write(dir.path(), &format!("StopWords/StopWords_{}.txt", cat), b"");
        }
        write(dir.path(), "StopWords/StopWords_Names.txt",
            b"SMITH | Surnames from 1990 census\nJONES\n");
        write(dir.path(), "StopWords/StopWords_GenericLong.txt", b"this\nit\nis\n");
        dir
    }

    #[test]
    fn loads_standard_layout() {
        let dir = standard_layout();
        let lexicon = Lexicon::load(&LexiconPaths::under(dir.path())).unwrap();
        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_positive("great"));
        assert!(!lexicon.is_positive(";;; opinion lexicon"));
        assert!(lexicon.is_negative("bad"));
        assert!(lexicon.is_negative("n\u{e9}gative"));
        assert!(lexicon.is_stop_word("smith"));
        assert!(lexicon.is_stop_word("Jones"));
        assert!(lexicon.is_stop_word("IT"));
    }

    #[test]
    fn sentiment_lookup_is_case_sensitive() {
        let lexicon = Lexicon::from_words(vec!["love"], vec!["Bad"], Vec::<String>::new());
        assert!(lexicon.is_positive("love"));
        assert!(!lexicon.is_positive("Love"));
        assert!(!lexicon.is_negative("bad"));
    }

    #[test]
    fn missing_list_is_fatal() {
        let dir = standard_layout();
        fs::remove_file(dir.path().join("StopWords/StopWords_Currencies.txt")).unwrap();
        match Lexicon::load(&LexiconPaths::under(dir.path())) {
            Err(Error::MissingFile(info, Some(_))) => assert!(info.contains("Currencies")),
            other => panic!("expected a missing file, got {:?}", other),
        }
    }

    #[test]
    fn latin1_never_fails() {
        assert_eq!(Encoding::Latin1.decode(b"caf\xE9"), "caf\u{e9}");
        assert_eq!(Encoding::Utf8.decode(b"caf\xE9"), "caf\u{fffd}");
    }
}
