//! Catalog records, payload parsing, and the category index

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel category that matches every game. Never a real category value.
pub const ALL_CATEGORY: &str = "All";

/// One embeddable game from the catalog file. Read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub url: String,
}

/// Errors raised while parsing a catalog payload.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate game id `{0}` in catalog")]
    DuplicateId(String),
    #[error("game `{0}` has an empty category")]
    EmptyCategory(String),
}

/// The validated game collection for a session, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Parse and validate a catalog payload.
    ///
    /// The payload is a JSON array of game objects. Ids must be unique within
    /// the snapshot and every game must carry a non-empty category.
    pub fn from_json(payload: &str) -> Result<Catalog, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_str(payload)?;
        let mut seen = HashSet::new();
        for game in &games {
            if !seen.insert(game.id.clone()) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
            if game.category.is_empty() {
                return Err(CatalogError::EmptyCategory(game.id.clone()));
            }
        }
        Ok(Catalog { games })
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Look up a game by id.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Distinct categories in first-occurrence order, with the sentinel
/// prepended. Deterministic for a given catalog ordering.
pub fn category_index(games: &[GameRecord]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for game in games {
        if !categories.iter().any(|c| c == &game.category) {
            categories.push(game.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> &'static str {
        r#"[
            {"id":"a","title":"Space Race","category":"Arcade","thumbnail":"a.png","url":"https://games.test/a"},
            {"id":"b","title":"Chess Pro","category":"Strategy","thumbnail":"b.png","url":"https://games.test/b"},
            {"id":"c","title":"Star Miner","category":"Arcade","thumbnail":"c.png","url":"https://games.test/c"}
        ]"#
    }

    #[test]
    fn test_parse_preserves_order() {
        let catalog = Catalog::from_json(sample_payload()).unwrap();
        let titles: Vec<&str> = catalog.games().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Space Race", "Chess Pro", "Star Miner"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::from_json(sample_payload()).unwrap();
        assert_eq!(catalog.get("b").unwrap().title, "Chess Pro");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Malformed(_))
        ));
        // An object instead of an array is malformed too
        assert!(matches!(
            Catalog::from_json(r#"{"id":"a"}"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let payload = r#"[
            {"id":"a","title":"One","category":"Arcade","thumbnail":"1.png","url":"u1"},
            {"id":"a","title":"Two","category":"Arcade","thumbnail":"2.png","url":"u2"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(payload),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_empty_category_rejected() {
        let payload = r#"[{"id":"a","title":"One","category":"","thumbnail":"1.png","url":"u1"}]"#;
        assert!(matches!(
            Catalog::from_json(payload),
            Err(CatalogError::EmptyCategory(id)) if id == "a"
        ));
    }

    #[test]
    fn test_category_index_order_and_dedup() {
        let catalog = Catalog::from_json(sample_payload()).unwrap();
        assert_eq!(category_index(catalog.games()), ["All", "Arcade", "Strategy"]);
    }

    #[test]
    fn test_category_index_empty_catalog() {
        assert_eq!(category_index(&[]), ["All"]);
    }
}
