//! Bib-number extraction from OCR output.
//!
//! Race bibs are short tokens, mostly digits, sometimes with a letter
//! prefix ("A123"). OCR of a crowd shot also picks up banners, shirts
//! and sponsor logos, so recognized lines are filtered hard before
//! anything is stored.

use std::sync::LazyLock;

use regex::Regex;

use crate::processor::OcrLine;

/// Lines below this confidence are noise more often than bibs.
const MIN_CONFIDENCE: f64 = 0.4;

/// Mixed alphanumeric tokens longer than this are words, not bibs.
const MAX_MIXED_LEN: usize = 5;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Reduce raw OCR lines to plausible bib numbers.
///
/// Each line is stripped to its alphanumeric characters and
/// uppercased. The cleaned token is kept when it is all digits, or
/// when it is at most [`MAX_MIXED_LEN`] characters and contains at
/// least one digit. Duplicates are dropped, first occurrence wins.
pub fn filter_bib_tokens(lines: &[OcrLine]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for line in lines {
        if line.confidence <= MIN_CONFIDENCE {
            continue;
        }
        let clean: String = line
            .text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if clean.is_empty() {
            continue;
        }
        let all_digits = DIGITS_RE.is_match(&clean);
        let short_with_digit =
            clean.len() <= MAX_MIXED_LEN && clean.chars().any(|c| c.is_ascii_digit());
        if (all_digits || short_with_digit) && !tokens.contains(&clean) {
            tokens.push(clean);
        }
    }
    tokens
}
