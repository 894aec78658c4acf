//! Arcadia Core - catalog model, filter engine, and selection state for the
//! game portal frontend

pub mod catalog;
pub mod filter;
pub mod selection;

pub use catalog::{category_index, Catalog, CatalogError, GameRecord, ALL_CATEGORY};
pub use filter::{filter_games, FilterState};
pub use selection::{SelectError, Selection};
