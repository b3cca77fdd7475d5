//! # sous-catalog
//!
//! Catalog data model for the Sous kitchen assistant: recipe and product
//! records with descriptive and dietary metadata, plus the built-in demo
//! item set.
//!
//! The catalog is constructed once at process start and is read-only for
//! the lifetime of the process. Search and ranking live in
//! `sous-retrieval`; this crate only owns the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use sous_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(!catalog.is_empty());
//! ```

pub mod catalog;
pub mod item;

pub use catalog::Catalog;
pub use item::{CatalogItem, ItemKind};
