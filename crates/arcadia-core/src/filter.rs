//! Pure filter engine over the catalog

use crate::catalog::{GameRecord, ALL_CATEGORY};

/// The active search text and category selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            category: ALL_CATEGORY.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> FilterState {
        FilterState {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Replace the active category.
    pub fn set_category(&mut self, category: String) {
        self.category = category;
    }

    /// Whether a single record passes the filter. The category must match
    /// exactly unless the sentinel is active; the query is a case-insensitive
    /// substring match on the title, and an empty query matches everything.
    pub fn matches(&self, game: &GameRecord) -> bool {
        let category_ok = self.category == ALL_CATEGORY || game.category == self.category;
        let query_ok = game.title.to_lowercase().contains(&self.query.to_lowercase());
        category_ok && query_ok
    }
}

/// All games passing the filter, in catalog order.
pub fn filter_games<'a>(games: &'a [GameRecord], state: &FilterState) -> Vec<&'a GameRecord> {
    games.iter().filter(|g| state.matches(g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, category: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            thumbnail: format!("{id}.png"),
            url: format!("https://games.test/{id}"),
        }
    }

    fn sample_games() -> Vec<GameRecord> {
        vec![
            record("a", "Space Race", "Arcade"),
            record("b", "Chess Pro", "Strategy"),
            record("c", "Space Chess", "Strategy"),
        ]
    }

    #[test]
    fn test_empty_query_all_category_returns_everything() {
        let games = sample_games();
        let result = filter_games(&games, &FilterState::default());
        assert_eq!(result.len(), games.len());
        assert!(result.iter().zip(&games).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let games = sample_games();
        let result = filter_games(&games, &FilterState::new("sPaCe", "All"));
        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let games = sample_games();
        let result = filter_games(&games, &FilterState::new("", "Strategy"));
        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let games = sample_games();
        assert!(filter_games(&games, &FilterState::new("", "arcade")).is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let games = sample_games();
        let result = filter_games(&games, &FilterState::new("space", "Strategy"));
        let ids: Vec<&str> = result.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["c"]);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        // Neither title contains "cha"; the caller renders the empty state.
        let games = vec![
            record("a", "Space Race", "Arcade"),
            record("b", "Chess Pro", "Strategy"),
        ];
        assert!(filter_games(&games, &FilterState::new("cha", "All")).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_games(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_transitions_replace_fields() {
        let mut state = FilterState::default();
        state.set_query("chess".to_string());
        state.set_category("Strategy".to_string());
        assert_eq!(state, FilterState::new("chess", "Strategy"));
    }
}
