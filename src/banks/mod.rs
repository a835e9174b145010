//! Static registry of supported banks and their cheque leaf dimensions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Physical print area of one bank's cheque leaf, in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankProfile {
    pub identifier: String,
    pub display_name: String,
    pub print_width_mm: f64,
    pub print_height_mm: f64,
}

/// Leaf dimensions measured per bank; identifiers double as display names.
static REGISTRY: Lazy<Vec<BankProfile>> = Lazy::new(|| {
    [
        ("Family Bank", 179.0, 100.0),
        ("Equity Bank", 178.0, 99.0),
        ("KCB Bank", 178.0, 101.0),
        ("Bank of Africa", 179.0, 97.0),
        ("Co-operative Bank", 179.0, 99.0),
        ("NCBA Bank", 179.0, 100.0),
        ("Absa Bank Kenya", 179.0, 100.0),
        ("Standard Chartered", 179.0, 100.0),
        ("Diamond Trust Bank (DTB)", 179.0, 100.0),
        ("Stanbic Bank", 179.0, 100.0),
        ("I&M Bank", 179.0, 100.0),
        ("Kingdom Bank", 179.0, 100.0),
        ("SBM Bank", 179.0, 100.0),
    ]
    .into_iter()
    .map(|(name, width, height)| BankProfile {
        identifier: name.to_string(),
        display_name: name.to_string(),
        print_width_mm: width,
        print_height_mm: height,
    })
    .collect()
});

/// Looks up a bank by identifier; an unknown bank is simply absent.
pub fn bank_profile(identifier: &str) -> Option<&'static BankProfile> {
    REGISTRY
        .iter()
        .find(|profile| profile.identifier == identifier)
}

/// All supported banks, in registry order.
pub fn all_banks() -> &'static [BankProfile] {
    &REGISTRY
}

/// Minimum similarity before a misspelling earns a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Best fuzzy match for a bank name, used for "did you mean" prompts.
pub fn closest_bank(input: &str) -> Option<&'static BankProfile> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    REGISTRY
        .iter()
        .map(|profile| {
            let score = strsim::jaro_winkler(&needle, &profile.identifier.to_lowercase());
            (score, profile)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, profile)| profile)
}
