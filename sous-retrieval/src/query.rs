//! Free-text query parsing.
//!
//! [`parse_query`] converts a raw user message into a [`StructuredQuery`]
//! through a handful of independent, case-insensitive sub-rules. Every
//! sub-rule is best-effort: text that matches nothing yields a query with
//! all optional fields empty and [`TimeConstraint::Any`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The meal a user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MealType {
    /// Catalog tags that satisfy this meal type.
    ///
    /// Lunch accepts dinner-tagged items as well, since lunch dishes are
    /// usually filed under dinner in the catalog.
    pub fn relevant_tags(self) -> &'static [&'static str] {
        match self {
            MealType::Breakfast => &["breakfast"],
            MealType::Lunch => &["lunch", "dinner"],
            MealType::Dinner => &["dinner"],
            MealType::Dessert => &["dessert"],
        }
    }
}

/// How much preparation time the user is willing to spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConstraint {
    /// "quick"/"fast" wording, or an explicit ceiling of 25 minutes or less.
    Quick,
    /// An explicit ceiling between 26 and 45 minutes.
    Medium,
    /// No usable time signal.
    #[default]
    Any,
}

/// Dietary requirements extracted from the query.
///
/// `true` means "required"; `false` means "don't care". There is no way to
/// express "must NOT be gluten-free", matching the source heuristics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryNeeds {
    pub gluten_free: bool,
    pub nut_free: bool,
}

/// The parsed, typed representation of a free-text user request.
///
/// Ephemeral: one is produced per user turn and consumed once by
/// [`search_items`](crate::search_items).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    /// The raw input text, unmodified.
    pub text: String,
    /// The meal the user asked about, if any keyword matched.
    pub meal_type: Option<MealType>,
    /// Dietary requirements detected in the text.
    pub dietary_needs: DietaryNeeds,
    /// Coarse time classification.
    pub time_constraint: TimeConstraint,
    /// Explicit minute ceiling ("under 20 minutes" → 20), if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_minutes: Option<u32>,
}

/// Parse a free-text message into a [`StructuredQuery`].
///
/// Pure and total: never fails, performs no I/O. Unparseable input yields
/// a query with every optional field empty and [`TimeConstraint::Any`].
pub fn parse_query(text: &str) -> StructuredQuery {
    let lower = text.to_lowercase();
    let max_minutes = extract_max_minutes(&lower);
    StructuredQuery {
        text: text.to_string(),
        meal_type: extract_meal_type(&lower),
        dietary_needs: extract_dietary_needs(&lower),
        time_constraint: classify_time_constraint(&lower, max_minutes),
        max_minutes,
    }
}

const BREAKFAST_WORDS: &[&str] = &["breakfast", "morning", "pancake"];
const LUNCH_WORDS: &[&str] = &["lunch"];
const DINNER_WORDS: &[&str] = &["dinner", "evening", "night"];
const DESSERT_WORDS: &[&str] = &["dessert", "sweet", "treat"];

/// First matching meal category wins, in priority order
/// breakfast → lunch → dinner → dessert.
fn extract_meal_type(lower: &str) -> Option<MealType> {
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    if contains_any(BREAKFAST_WORDS) {
        Some(MealType::Breakfast)
    } else if contains_any(LUNCH_WORDS) {
        Some(MealType::Lunch)
    } else if contains_any(DINNER_WORDS) {
        Some(MealType::Dinner)
    } else if contains_any(DESSERT_WORDS) {
        Some(MealType::Dessert)
    } else {
        None
    }
}

/// Conjunctive substring rule: a need is required iff its keyword and
/// "free" both appear anywhere in the text. This can false-positive on
/// phrasing like "gluten is fine but stay nut-free" — inherited heuristic
/// behavior, kept as-is.
fn extract_dietary_needs(lower: &str) -> DietaryNeeds {
    let free = lower.contains("free");
    DietaryNeeds {
        gluten_free: lower.contains("gluten") && free,
        nut_free: lower.contains("nut") && free,
    }
}

/// A number immediately followed by an optional hyphen/space and a
/// "min"/"minute(s)" unit: "20 minutes", "20-minute", "20min".
static MAX_MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[\s-]?min(?:ute)?s?\b").expect("minute pattern is valid")
});

/// Extract an explicit minute ceiling from the text. First match wins.
fn extract_max_minutes(lower: &str) -> Option<u32> {
    MAX_MINUTES_RE.captures(lower).and_then(|c| c[1].parse().ok())
}

/// Minute ceilings at or below this classify as [`TimeConstraint::Quick`].
const QUICK_MINUTES: u32 = 25;
/// Minute ceilings at or below this (and above quick) classify as
/// [`TimeConstraint::Medium`].
const MEDIUM_MINUTES: u32 = 45;

/// "quick"/"fast" wording wins outright; otherwise an explicit minute
/// ceiling is bucketed, and anything else is unconstrained. Note that
/// "fast" is substring-matched, so "breakfast" also classifies as quick —
/// inherited heuristic behavior.
fn classify_time_constraint(lower: &str, max_minutes: Option<u32>) -> TimeConstraint {
    if lower.contains("quick") || lower.contains("fast") {
        return TimeConstraint::Quick;
    }
    match max_minutes {
        Some(m) if m <= QUICK_MINUTES => TimeConstraint::Quick,
        Some(m) if m <= MEDIUM_MINUTES => TimeConstraint::Medium,
        _ => TimeConstraint::Any,
    }
}
