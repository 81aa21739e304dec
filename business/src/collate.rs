//! Locale-aware string ordering.
//!
//! Approximates the Unicode root collation with three comparison levels, each
//! consulted only when the previous one ties:
//! 1. base letters, ignoring accents and case, with whitespace and punctuation
//!    ordered before digits and digits before letters
//! 2. accents (unaccented before accented)
//! 3. case (lowercase before uppercase)
//!
//! Strings equal at every level fall back to code point order so the result is
//! a total order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

/// Compares two strings the way a user expects a sorted column to read.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> Vec<(u8, char)> {
    let mut key = Vec::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match base_letters(c) {
            Some(base) => key.extend(base.chars().map(|b| (LETTER, b))),
            None => key.push((char_class(c), c)),
        }
    }
    key
}

/// Base letters for Latin letters that have no canonical decomposition.
///
/// Only the primary level uses this; the secondary level still sees the
/// original letter, so `Soren` sorts just before `Søren`.
fn base_letters(c: char) -> Option<&'static str> {
    Some(match c {
        'ł' => "l",
        'ø' => "o",
        'đ' => "d",
        'ħ' => "h",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    })
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

const PUNCTUATION: u8 = 0;
const DIGIT: u8 = 1;
const LETTER: u8 = 2;

#[inline]
fn char_class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_control())
    {
        PUNCTUATION
    } else if c.is_numeric() {
        DIGIT
    } else {
        LETTER
    }
}
