//! Written-amount rendering for the cheque's word line.
//!
//! The words are the forgery-resistance convention on the printed leaf:
//! uppercase cardinal English, comma-separated groups, `AND` after each
//! hundred, and a trailing `***` marker to close the field.

mod split;

pub use split::{split_lines, WordLines};

use tracing::warn;

const ONES: [&str; 20] = [
    "ZERO",
    "ONE",
    "TWO",
    "THREE",
    "FOUR",
    "FIVE",
    "SIX",
    "SEVEN",
    "EIGHT",
    "NINE",
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Group words by power of one thousand, least significant first.
const GROUPS: [&str; 4] = ["", "THOUSAND", "MILLION", "BILLION"];

/// Largest value the group words above can spell, exclusive.
const SCALE_LIMIT: u64 = 1_000_000_000_000;

const TRAILING_MARKER: &str = " ***";

/// Shown in place of the words when the amount cannot be spelled.
const DIAGNOSTIC: &str = "UNABLE TO WRITE AMOUNT IN WORDS";

/// Renders the raw amount field as the cheque's word line.
///
/// An empty, zero, or non-numeric field yields an empty string rather than
/// an error; the form simply shows nothing until a usable amount arrives.
/// Digits after a decimal point are dropped, so cents never reach the
/// words.
pub fn words_for(raw: &str) -> String {
    let amount = match parse_amount(raw) {
        Some(value) if value > 0 => value,
        _ => return String::new(),
    };
    match cardinal(amount) {
        Some(words) => format!("{}{}", words, TRAILING_MARKER),
        None => {
            warn!(amount, "amount exceeds the largest supported group word");
            DIAGNOSTIC.to_string()
        }
    }
}

/// Parses the whole-number part of a raw amount field.
///
/// Only the digits before any decimal point count; anything else in the
/// field makes the amount unusable.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let integer_part = raw.trim().split('.').next().unwrap_or_default();
    if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    integer_part.parse().ok()
}

/// Uppercase cardinal spelling, or `None` past the supported scale.
fn cardinal(amount: u64) -> Option<String> {
    if amount >= SCALE_LIMIT {
        return None;
    }
    if amount == 0 {
        return Some(ONES[0].to_string());
    }
    let mut parts = [0u64; 4];
    let mut remaining = amount;
    for slot in parts.iter_mut() {
        *slot = remaining % 1000;
        remaining /= 1000;
    }
    let mut segments = Vec::new();
    for idx in (0..GROUPS.len()).rev() {
        let value = parts[idx];
        if value == 0 {
            continue;
        }
        let mut segment = triplet(value);
        if !GROUPS[idx].is_empty() {
            segment.push(' ');
            segment.push_str(GROUPS[idx]);
        }
        segments.push(segment);
    }
    // Joining on ", " puts a comma after each group word exactly when more
    // words follow it.
    Some(segments.join(", "))
}

fn triplet(value: u64) -> String {
    let hundreds = value / 100;
    let rest = value % 100;
    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" HUNDRED");
        if rest > 0 {
            out.push_str(" AND ");
        }
    }
    if rest > 0 {
        out.push_str(&below_hundred(rest));
    }
    out
}

fn below_hundred(value: u64) -> String {
    if value < 20 {
        return ONES[value as usize].to_string();
    }
    let tens = TENS[(value / 10) as usize];
    match value % 10 {
        0 => tens.to_string(),
        unit => format!("{} {}", tens, ONES[unit as usize]),
    }
}
