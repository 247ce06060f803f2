//! English syllable estimate by vowel groups
use regex::Regex;

lazy_static! {
    static ref VOWEL_GROUP: Regex = Regex::new(r"[aeiouy]+").unwrap();
}

/// Estimate the syllables in one word
///
/// Counts runs of vowels (`y` included), then takes one back for endings that are usually
/// silent: a final `e` (but not `-le` after a consonant, as in `table`), and `-es` / `-ed` unless
/// they follow a sound that needs the extra vowel (`wanted`, `faded`, `boxes`, `roses`).
/// Anything with a letter has at least one syllable. Numbers and other letterless tokens have none.
pub fn syllable_count(word: &str) -> usize {
    let letters: String = word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }
    let mut count = VOWEL_GROUP.find_iter(&letters).count();
    if count > 1 && silent_ending(&letters) {
        count -= 1;
    }
    if count == 0 { 1 } else { count }
}

fn silent_ending(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    let is_vowel = |b: u8| b"aeiouy".contains(&b);
    if word.ends_with("le") && n > 2 && !is_vowel(bytes[n - 3]) {
        return false;
    }
    if word.ends_with('e') {
        return n > 1 && !is_vowel(bytes[n - 2]);
    }
    if word.ends_with("ed") && n > 2 {
        return !b"td".contains(&bytes[n - 3]) && !is_vowel(bytes[n - 3]);
    }
    if word.ends_with("es") && n > 2 {
        let voiced = word.ends_with("ses") || word.ends_with("zes") || word.ends_with("xes")
            || word.ends_with("ches") || word.ends_with("shes") || word.ends_with("ces")
            || word.ends_with("ges");
        return !voiced && !is_vowel(bytes[n - 3]);
    }
    false
}
