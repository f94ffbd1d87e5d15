//! Spelling comparison for typed answers
//!
//! Answers are compared case-insensitively with surrounding whitespace ignored. Umlauts
//! and ß may be typed in their ASCII transliteration.

/// Replace umlauts and ß with their two-letter transliterations
#[must_use]
pub fn umlaut_normalize(word: &str) -> String {
    word.replace('ü', "ue")
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ß', "ss")
}

/// Check a typed answer against the expected spelling
///
/// # Examples
/// ```
/// use vocab_quiz::core::check_spelling_simple;
///
/// assert!(check_spelling_simple(" Käse ", "käse"));
/// assert!(check_spelling_simple("kaese", "Käse"));
/// assert!(!check_spelling_simple("kase", "käse"));
/// ```
#[must_use]
pub fn check_spelling_simple(answer: &str, expected: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();

    answer == expected || answer == umlaut_normalize(&expected)
}

/// Check a typed Perfekt form such as `ist gegangen`
///
/// `expected` is the full form, auxiliary first (`hat gemacht`, `hat/ist gefahren`).
/// The answer must name exactly one auxiliary (`hat` or `ist`) allowed by the expected
/// form, followed by the participle.
#[must_use]
pub fn check_spelling_perfect(answer: &str, expected: &str) -> bool {
    let Some((expected_aux, expected_participle)) = expected.trim().split_once(char::is_whitespace)
    else {
        return false;
    };

    let mut frags = answer.split_whitespace();
    let (Some(aux), Some(participle), None) = (frags.next(), frags.next(), frags.next()) else {
        return false;
    };

    let aux = aux.to_lowercase();
    if aux != "hat" && aux != "ist" {
        return false;
    }
    if !expected_aux.split('/').any(|allowed| allowed == aux) {
        return false;
    }

    check_spelling_simple(participle, expected_participle)
}

/// Uppercase the first letter of a noun
#[must_use]
pub fn capitalize_noun(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
