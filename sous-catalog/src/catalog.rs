//! The read-only item collection and the built-in demo set.

use crate::item::{CatalogItem, ItemKind};

/// An immutable, in-memory collection of catalog items.
///
/// Constructed once at startup and shared read-only (typically behind an
/// `Arc`) for the lifetime of the process. Iteration order is insertion
/// order, which search relies on for stable tie-breaking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create a catalog from a list of items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The built-in demo catalog: a small fixed set of recipes and pantry
    /// products used to ground the assistant's answers.
    pub fn builtin() -> Self {
        Self::new(builtin_items())
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn builtin_items() -> Vec<CatalogItem> {
    vec![
        // Breakfast recipes
        CatalogItem::new(
            "1",
            "Protein Powered Pancakes",
            ItemKind::Recipe,
            &["breakfast", "pancakes", "protein", "quick"],
        )
        .with_dietary(true, true)
        .with_description("Fluffy, protein-rich pancakes made with our gluten-free pancake mix.")
        .with_category("What's for Breakfast")
        .with_time_to_make("20 minutes")
        .with_url("https://sous.example/recipes/protein-powered-pancakes"),
        CatalogItem::new(
            "2",
            "Merry Berry Holiday Pancakes",
            ItemKind::Recipe,
            &["breakfast", "pancakes", "holiday", "berries", "sweet"],
        )
        .with_dietary(true, true)
        .with_description(
            "Festive holiday pancakes made with Pancake & Waffle Mix, topped with fresh \
             fruit and fun seasonal decorations.",
        )
        .with_category("What's for Breakfast")
        .with_time_to_make("25 minutes")
        .with_url("https://sous.example/recipes/merry-berry-holiday-pancakes"),
        CatalogItem::new(
            "3",
            "Sheet Pan Breakfast Pancakes (Chocolate Option)",
            ItemKind::Recipe,
            &["breakfast", "pancakes", "sheet pan", "easy"],
        )
        .with_dietary(true, true)
        .with_description(
            "Large-batch oven-baked pancakes made in a sheet pan for effortless mornings. \
             Add chocolate chips for a chocolate version.",
        )
        .with_category("What's for Breakfast")
        .with_time_to_make("30 minutes")
        .with_url("https://sous.example/recipes/sheet-pan-breakfast-pancakes"),
        // Dinner recipes
        CatalogItem::new(
            "4",
            "Marry Me Chicken",
            ItemKind::Recipe,
            &["dinner", "chicken", "quick", "creamy"],
        )
        .with_dietary(true, true)
        .with_description(
            "Creamy, savory chicken simmered with Marry Me Chicken Seasoning for a fast \
             and indulgent dinner.",
        )
        .with_category("What's for Dinner")
        .with_time_to_make("20 minutes")
        .with_url("https://sous.example/recipes/marry-me-chicken"),
        CatalogItem::new(
            "5",
            "Easy Teriyaki Stir-Fry",
            ItemKind::Recipe,
            &["dinner", "stir-fry", "vegetables", "quick"],
        )
        .with_dietary(true, true)
        .with_description(
            "A fast stir-fry made with Teriyaki Seasoning and your choice of protein and \
             veggies.",
        )
        .with_category("What's for Dinner")
        .with_time_to_make("~20-25 minutes")
        .with_url("https://sous.example/recipes/easy-teriyaki-stir-fry"),
        CatalogItem::new(
            "6",
            "One-Pan Taco Bake",
            ItemKind::Recipe,
            &["dinner", "quick", "family-friendly", "bake"],
        )
        .with_dietary(true, true)
        .with_description(
            "A cheesy, hearty one-pan taco casserole made using taco seasoning blends.",
        )
        .with_category("What's for Dinner")
        .with_time_to_make("~25-30 minutes")
        .with_url("https://sous.example/recipes/one-pan-taco-bake"),
        // Dessert recipes
        CatalogItem::new(
            "7",
            "Chocolate Velvet Cheesecake",
            ItemKind::Recipe,
            &["dessert", "chocolate", "cheesecake", "gluten-free", "indulgent"],
        )
        .with_dietary(true, true)
        .with_description("Silky chocolate cheesecake made using Chocolate Velvet Cheesecake Mix.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("45-50 minutes + chilling")
        .with_url("https://sous.example/recipes/chocolate-velvet-cheesecake"),
        CatalogItem::new(
            "8",
            "Fudgy Gluten-Free Brownies",
            ItemKind::Recipe,
            &["dessert", "chocolate", "brownies", "gluten-free"],
        )
        .with_dietary(true, true)
        .with_description("Dark, rich brownies made with our Fudgy Brownie Mix.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("30-35 minutes")
        .with_url("https://sous.example/recipes/fudgy-gluten-free-brownies"),
        CatalogItem::new(
            "9",
            "Gingerbread Cookies",
            ItemKind::Recipe,
            &["dessert", "cookies", "gingerbread", "holiday", "gluten-free"],
        )
        .with_dietary(true, true)
        .with_description("Classic cut-out gingerbread cookies using Gingerbread Cookie Mix.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("2-3 hours (includes chilling)")
        .with_url("https://sous.example/recipes/gingerbread-cookies"),
        // Products
        CatalogItem::new(
            "10",
            "Pancake & Waffle Mix",
            ItemKind::Product,
            &["breakfast", "pancakes", "waffles", "bestseller"],
        )
        .with_dietary(true, true)
        .with_description(
            "Our bestselling gluten-free pancake & waffle mix made for fluffy, perfect \
             texture every time.",
        )
        .with_category("Seasonings & Mixes")
        .with_time_to_make("5 minutes")
        .with_url("https://sous.example/products/pancake-waffle-mix"),
        CatalogItem::new(
            "11",
            "Marry Me Chicken Seasoning",
            ItemKind::Product,
            &["dinner", "chicken", "creamy", "bestseller"],
        )
        .with_dietary(true, true)
        .with_description("Creamy, tomato-basil style seasoning blend used for Marry Me Chicken.")
        .with_category("Seasonings")
        .with_time_to_make("Ready to use")
        .with_url("https://sous.example/products/marry-me-chicken-seasoning"),
        CatalogItem::new(
            "12",
            "SPG Seasoning (All-Purpose)",
            ItemKind::Product,
            &["seasoning", "versatile", "all-purpose"],
        )
        .with_dietary(true, true)
        .with_description("Our essential salt-pepper-garlic blend for everyday cooking.")
        .with_category("Seasonings")
        .with_time_to_make("Ready to use")
        .with_url("https://sous.example/products/spg-seasoning"),
        CatalogItem::new(
            "13",
            "Gingerbread Cookie Mix",
            ItemKind::Product,
            &["dessert", "gingerbread", "holiday", "mix"],
        )
        .with_dietary(true, true)
        .with_description("Warm, spiced gingerbread cookie mix perfect for holiday baking.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("5-10 minutes")
        .with_url("https://sous.example/products/gingerbread-cookie-mix"),
        CatalogItem::new(
            "14",
            "Chocolate Velvet Cheesecake Mix",
            ItemKind::Product,
            &["dessert", "chocolate", "cheesecake", "mix"],
        )
        .with_dietary(true, true)
        .with_description("Silky chocolate cheesecake mix—just add cream cheese and yogurt.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("10 minutes")
        .with_url("https://sous.example/products/chocolate-velvet-cheesecake-mix"),
        CatalogItem::new(
            "15",
            "Fudgy Brownie Mix",
            ItemKind::Product,
            &["dessert", "chocolate", "brownies", "quick"],
        )
        .with_dietary(true, true)
        .with_description("Our ultra-rich brownie mix for fudgy, chocolate-packed brownies.")
        .with_category("Gluten Free Desserts")
        .with_time_to_make("5-10 minutes")
        .with_url("https://sous.example/products/fudgy-brownie-mix"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn builtin_catalog_mixes_recipes_and_products() {
        let catalog = Catalog::builtin();
        assert!(catalog.iter().any(|i| i.kind == ItemKind::Recipe));
        assert!(catalog.iter().any(|i| i.kind == ItemKind::Product));
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
