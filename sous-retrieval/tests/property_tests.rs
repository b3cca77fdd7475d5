//! Property tests for ranking invariants.

use proptest::prelude::*;
use sous_catalog::{Catalog, CatalogItem, ItemKind};
use sous_retrieval::{DietaryNeeds, StructuredQuery, TimeConstraint, parse_minutes, search_items};

const NAME_WORDS: &[&str] =
    &["chicken", "beef", "pancake", "brownie", "stir-fry", "soup", "bowl", "mix", "bake"];
const TAG_WORDS: &[&str] =
    &["breakfast", "lunch", "dinner", "dessert", "quick", "bestseller", "chicken", "holiday"];
const TIME_TEXTS: &[&str] =
    &["5 minutes", "20 minutes", "30-35 minutes", "45-50 minutes + chilling", "2-3 hours", "Ready to use"];
const QUERY_TEXTS: &[&str] = &[
    "",
    "quick gluten-free chicken dinner",
    "dessert under 30 minutes",
    "beef stir fry",
    "pancakes",
    "something warm",
];

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    (
        "[a-z]{3,8}",
        proptest::sample::subsequence(NAME_WORDS.to_vec(), 1..3),
        any::<bool>(),
        proptest::sample::subsequence(TAG_WORDS.to_vec(), 0..4),
        any::<bool>(),
        any::<bool>(),
        proptest::sample::subsequence(NAME_WORDS.to_vec(), 0..4),
        proptest::option::of(proptest::sample::select(TIME_TEXTS.to_vec())),
    )
        .prop_map(|(id, name, is_recipe, tags, gluten_free, nut_free, desc, time)| {
            let kind = if is_recipe { ItemKind::Recipe } else { ItemKind::Product };
            let mut item = CatalogItem::new(id, name.join(" "), kind, &tags)
                .with_dietary(gluten_free, nut_free)
                .with_description(desc.join(" "));
            if let Some(time) = time {
                item = item.with_time_to_make(time);
            }
            item
        })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(arb_item(), 0..12).prop_map(Catalog::new)
}

fn arb_query() -> impl Strategy<Value = StructuredQuery> {
    (
        proptest::sample::select(QUERY_TEXTS.to_vec()),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(5u32..120),
    )
        .prop_map(|(text, gluten_free, nut_free, max_minutes)| StructuredQuery {
            text: text.to_string(),
            meal_type: None,
            dietary_needs: DietaryNeeds { gluten_free, nut_free },
            time_constraint: TimeConstraint::Any,
            max_minutes,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identical catalog + query always yield an identical ordered list.
    #[test]
    fn search_is_deterministic(catalog in arb_catalog(), query in arb_query(), limit in 0usize..8) {
        let first = search_items(&catalog, &query, limit);
        let second = search_items(&catalog, &query, limit);
        prop_assert_eq!(first, second);
    }

    /// Never more results than the limit or the catalog size, and every
    /// result is a catalog member.
    #[test]
    fn results_are_bounded_catalog_members(
        catalog in arb_catalog(),
        query in arb_query(),
        limit in 0usize..8,
    ) {
        let results = search_items(&catalog, &query, limit);
        prop_assert!(results.len() <= limit);
        prop_assert!(results.len() <= catalog.len());
        for item in &results {
            prop_assert!(catalog.iter().any(|c| c == item));
        }
    }

    /// A required dietary flag is honored by every returned item.
    #[test]
    fn dietary_requirements_are_never_violated(
        catalog in arb_catalog(),
        query in arb_query(),
    ) {
        for item in search_items(&catalog, &query, 8) {
            if query.dietary_needs.gluten_free {
                prop_assert!(item.gluten_free);
            }
            if query.dietary_needs.nut_free {
                prop_assert!(item.nut_free);
            }
        }
    }

    /// No returned item's parsed time exceeds an explicit minute ceiling.
    #[test]
    fn minute_ceiling_is_never_exceeded(catalog in arb_catalog(), query in arb_query()) {
        if let Some(max) = query.max_minutes {
            for item in search_items(&catalog, &query, 8) {
                if let Some(minutes) = item.time_to_make.as_deref().and_then(parse_minutes) {
                    prop_assert!(
                        minutes <= max,
                        "item {} takes {} minutes, ceiling {}",
                        item.name,
                        minutes,
                        max,
                    );
                }
            }
        }
    }
}
