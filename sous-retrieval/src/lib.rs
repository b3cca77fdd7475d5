//! # sous-retrieval
//!
//! Keyword retrieval and heuristic ranking over the Sous catalog.
//!
//! This crate is the decision-making core of the assistant: it turns a
//! free-text user message into a [`StructuredQuery`] and scores every
//! catalog item against it — hard filters first (dietary requirements,
//! explicit minute ceilings, meal-type/product mismatches, food-keyword
//! mismatches), then additive keyword scoring, then an acceptance
//! threshold. The surrounding chat service renders the ranked items and
//! feeds them to the model as grounding context.
//!
//! Both entry points are total: malformed or empty input degrades to
//! permissive defaults, and an empty result list is a valid outcome
//! meaning "no confident match", never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use sous_catalog::Catalog;
//! use sous_retrieval::{DEFAULT_LIMIT, parse_query, search_items};
//!
//! let catalog = Catalog::builtin();
//! let query = parse_query("quick gluten-free chicken dinner");
//! let items = search_items(&catalog, &query, DEFAULT_LIMIT);
//! for item in &items {
//!     println!("{}", item.name);
//! }
//! ```

pub mod duration;
mod foods;
pub mod query;
pub mod search;

pub use duration::parse_minutes;
pub use query::{DietaryNeeds, MealType, StructuredQuery, TimeConstraint, parse_query};
pub use search::{DEFAULT_LIMIT, search_items};
