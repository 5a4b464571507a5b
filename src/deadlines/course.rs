//! Course code normalization
//!
//! Free-text course input is reduced to a canonical `LETTERS+DIGITS` code,
//! e.g. "cSc    230" -> "CSC230". Input that does not fit the
//! letters-then-digits shape is upper-cased verbatim after whitespace removal.

/// Normalize a raw course identifier into its canonical form
///
/// All whitespace is stripped (including whitespace between every character,
/// e.g. "S e N g 2 7 5" -> "SENG275"). If the collapsed input is one or more
/// letters immediately followed by one or more digits, the letters are
/// upper-cased and the digits kept as-is. Anything else is returned
/// upper-cased verbatim, so the formatter never fails.
///
/// # Arguments
/// * `raw` - The user's raw course input
///
/// # Returns
/// The canonical course code, or an empty string for all-whitespace input
pub fn format_course_code(raw: &str) -> String {
    let collapsed: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let letter_count = collapsed
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    let (letters, rest) = collapsed.split_at(letter_count);

    let matches_shape =
        !letters.is_empty() && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit());

    if matches_shape {
        format!("{}{}", letters.to_uppercase(), rest)
    } else {
        collapsed.to_uppercase()
    }
}
