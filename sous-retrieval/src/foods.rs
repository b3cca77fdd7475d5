//! The fixed food-keyword vocabulary and protein subset.
//!
//! When a query names a concrete food, items that never mention it are
//! excluded outright, and naming a *different* protein than the one asked
//! for is also disqualifying. Matching is word-boundary based (so "rice"
//! never fires inside "price") and tolerates a plural "s" suffix.

use std::sync::LazyLock;

use regex::Regex;

/// Every food word the scanner recognizes, in canonical (singular) form.
const FOOD_WORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "salmon",
    "turkey",
    "pasta",
    "rice",
    "vegetable",
    "seafood",
    "lamb",
    "shrimp",
];

/// The subset of [`FOOD_WORDS`] that name a protein. Asking for one of
/// these excludes items that name only a different one.
const PROTEIN_WORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "salmon",
    "turkey",
    "seafood",
    "lamb",
    "shrimp",
];

static FOOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = FOOD_WORDS.join("|");
    Regex::new(&format!(r"\b({alternation})s?\b")).expect("food pattern is valid")
});

/// Scan lower-cased text for food words, returning canonical forms in
/// first-mention order without duplicates.
pub(crate) fn mentioned_foods(lower: &str) -> Vec<&'static str> {
    let mut found = Vec::new();
    for captures in FOOD_RE.captures_iter(lower) {
        let stem = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        if let Some(&word) = FOOD_WORDS.iter().find(|&&w| w == stem) {
            if !found.contains(&word) {
                found.push(word);
            }
        }
    }
    found
}

/// True if the canonical food word names a protein.
pub(crate) fn is_protein(word: &str) -> bool {
    PROTEIN_WORDS.contains(&word)
}
