//! The ranking engine.
//!
//! [`search_items`] scores every catalog item against a
//! [`StructuredQuery`] in three stages:
//!
//! 1. **Hard filters** — explicit minute ceiling, dietary requirements,
//!    meal-type/product mismatch, food-keyword mismatch. Any hit excludes
//!    the item outright and short-circuits the rest.
//! 2. **Additive scoring** — independent, cumulative keyword rules over
//!    tags, name, description, and category, plus bonuses that only apply
//!    once an item has a positive text match (or the query is generic).
//! 3. **Acceptance** — a minimum-score threshold and a text-match gate,
//!    then a stable descending sort and truncation to `limit`.
//!
//! Deterministic given catalog + query: no randomness, no clock reads.
//! Ties preserve catalog insertion order.

use sous_catalog::{Catalog, CatalogItem, ItemKind};
use tracing::debug;

use crate::duration::parse_minutes;
use crate::foods;
use crate::query::{StructuredQuery, TimeConstraint};

/// Default number of items returned to callers.
pub const DEFAULT_LIMIT: usize = 5;

/// Minimum final score for an item to be included at all.
const MIN_ACCEPT_SCORE: i32 = 3;

/// Full query text found inside the item name.
const FULL_NAME_BONUS: i32 = 20;
/// Per query word found inside the item name.
const NAME_WORD_BONUS: i32 = 8;
/// Per query word found inside any item tag.
const TAG_WORD_BONUS: i32 = 10;
/// Per query word found inside the description.
const DESCRIPTION_WORD_BONUS: i32 = 3;
/// Item category found inside the query text.
const CATEGORY_BONUS: i32 = 5;
/// Item carries the "bestseller" tag.
const BESTSELLER_BONUS: i32 = 2;
/// Item's parsed time is at or under the quick ceiling.
const QUICK_TIME_BONUS: i32 = 8;
/// Item's parsed time exceeds the quick ceiling on a quick-constrained query.
const SLOW_ITEM_PENALTY: i32 = -5;
/// Recipe lacking every tag relevant to the requested meal type.
const MEAL_MISMATCH_PENALTY: i32 = -15;
/// Recipe bonus when a meal type was requested.
const RECIPE_MEAL_BONUS: i32 = 5;
/// Product penalty when a meal type was requested.
const PRODUCT_MEAL_PENALTY: i32 = -3;
/// Parsed minutes at or under this count as quick to make.
const QUICK_TIME_MINUTES: u32 = 25;

/// Query-derived state computed once per search, shared by every item
/// evaluation.
struct QueryContext {
    /// Lower-cased raw query text.
    search_text: String,
    /// Lower-cased query words longer than two characters.
    words: Vec<String>,
    /// Too short or keyword-free to support substantive text matching;
    /// bonus rules apply unconditionally.
    generic: bool,
    /// Canonical food words named in the query.
    mentioned_foods: Vec<&'static str>,
    /// The protein subset of `mentioned_foods`.
    requested_proteins: Vec<&'static str>,
}

impl QueryContext {
    fn new(query: &StructuredQuery) -> Self {
        let search_text = query.text.to_lowercase();
        let words: Vec<String> =
            search_text.split_whitespace().filter(|w| w.len() > 2).map(str::to_string).collect();
        let generic = search_text.trim().len() < 3 || words.is_empty();
        let mentioned_foods = foods::mentioned_foods(&search_text);
        let requested_proteins =
            mentioned_foods.iter().copied().filter(|f| foods::is_protein(f)).collect();
        Self { search_text, words, generic, mentioned_foods, requested_proteins }
    }
}

/// A catalog item paired with its score during ranking; discarded after
/// sorting and truncation.
struct ScoredItem<'a> {
    item: &'a CatalogItem,
    score: i32,
    text_matched: bool,
}

/// Rank catalog items against a parsed query, best first.
///
/// Deterministic and total: never fails, and an empty result is a valid
/// outcome meaning "no confident match". Ties keep catalog insertion
/// order; at most `limit` items are returned.
pub fn search_items(catalog: &Catalog, query: &StructuredQuery, limit: usize) -> Vec<CatalogItem> {
    let ctx = QueryContext::new(query);

    let mut scored: Vec<ScoredItem<'_>> =
        catalog.iter().filter_map(|item| evaluate(item, query, &ctx)).collect();

    scored.retain(|s| s.score >= MIN_ACCEPT_SCORE && (ctx.generic || s.text_matched));
    // Stable sort: equal scores keep catalog insertion order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    debug!(query = %query.text, result_count = scored.len(), "catalog search completed");

    scored.into_iter().map(|s| s.item.clone()).collect()
}

/// Run one item through the hard filters and scoring rules.
///
/// Returns `None` when a hard filter excludes the item.
fn evaluate<'a>(
    item: &'a CatalogItem,
    query: &StructuredQuery,
    ctx: &QueryContext,
) -> Option<ScoredItem<'a>> {
    let item_minutes = item.time_to_make.as_deref().and_then(parse_minutes);

    // Hard filter: explicit minute ceiling, no slack.
    if let (Some(max), Some(minutes)) = (query.max_minutes, item_minutes) {
        if minutes > max {
            return None;
        }
    }

    // Hard filter: dietary requirements.
    if query.dietary_needs.gluten_free && !item.gluten_free {
        return None;
    }
    if query.dietary_needs.nut_free && !item.nut_free {
        return None;
    }

    let mut score = 0;

    // Hard filter for products, penalty for recipes: meal-type tags.
    // Recipes stay in because they are often versatile across meals.
    if let Some(meal) = query.meal_type {
        let tag_hit = meal.relevant_tags().iter().any(|tag| item.has_tag(tag));
        if !tag_hit {
            match item.kind {
                ItemKind::Product => return None,
                ItemKind::Recipe => score += MEAL_MISMATCH_PENALTY,
            }
        }
    }

    // Hard filter: mentioned foods must appear in the item, and a
    // requested protein must not be contradicted by a different one.
    if !ctx.mentioned_foods.is_empty() {
        let combined = combined_text(item);
        let item_foods = foods::mentioned_foods(&combined);
        if !item_foods.iter().any(|f| ctx.mentioned_foods.contains(f)) {
            return None;
        }
        if !ctx.requested_proteins.is_empty() {
            let item_proteins: Vec<&str> =
                item_foods.iter().copied().filter(|f| foods::is_protein(f)).collect();
            if !item_proteins.is_empty()
                && !item_proteins.iter().any(|p| ctx.requested_proteins.contains(p))
            {
                return None;
            }
        }
    }

    let mut text_matched = false;
    let name_lower = item.name.to_lowercase();
    let description_lower = item.description.to_lowercase();

    // Tag matching (strong signal).
    for word in &ctx.words {
        if item.tags.iter().any(|tag| tag.contains(word.as_str())) {
            score += TAG_WORD_BONUS;
            text_matched = true;
        }
    }

    // Name matching (very strong signal). The full-text rule needs
    // non-empty trimmed text: the empty string is a substring of every
    // name, and generic queries must stay on the bonus-only path.
    if !ctx.search_text.trim().is_empty() && name_lower.contains(&ctx.search_text) {
        score += FULL_NAME_BONUS;
        text_matched = true;
    } else {
        for word in &ctx.words {
            if name_lower.contains(word.as_str()) {
                score += NAME_WORD_BONUS;
                text_matched = true;
            }
        }
    }

    // Description matching.
    for word in &ctx.words {
        if description_lower.contains(word.as_str()) {
            score += DESCRIPTION_WORD_BONUS;
            text_matched = true;
        }
    }

    // Category matching: the category named inside the query text.
    if let Some(category) = &item.category {
        if ctx.search_text.contains(&category.to_lowercase()) {
            score += CATEGORY_BONUS;
            text_matched = true;
        }
    }

    // Bonuses are gated: they refine items the text already surfaced, or
    // provide the only signal for generic queries.
    if text_matched || ctx.generic {
        if item.has_tag("bestseller") {
            score += BESTSELLER_BONUS;
        }
        match item_minutes {
            Some(minutes) if minutes <= QUICK_TIME_MINUTES => score += QUICK_TIME_BONUS,
            Some(_) if query.time_constraint == TimeConstraint::Quick => {
                score += SLOW_ITEM_PENALTY;
            }
            _ => {}
        }
        if query.meal_type.is_some() {
            match item.kind {
                ItemKind::Recipe => score += RECIPE_MEAL_BONUS,
                ItemKind::Product => score += PRODUCT_MEAL_PENALTY,
            }
        }
    }

    Some(ScoredItem { item, score, text_matched })
}

/// Everything the food scanner may match against for an item, lower-cased.
fn combined_text(item: &CatalogItem) -> String {
    let mut combined =
        format!("{} {} {}", item.name, item.description, item.tags.join(" "));
    if let Some(category) = &item.category {
        combined.push(' ');
        combined.push_str(category);
    }
    combined.to_lowercase()
}
