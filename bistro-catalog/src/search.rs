//! Dish search (hero banner search box)

use serde::Serialize;
use shared::Dish;

/// Outcome of a name search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchResults {
    /// Empty query, nothing to show
    Idle,
    NoMatches { query: String },
    Matches { dishes: Vec<Dish> },
}

impl SearchResults {
    /// Text shown when nothing matched
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NoMatches { query } => Some(format!("No items found for '{}'", query)),
            _ => None,
        }
    }

    pub fn dishes(&self) -> &[Dish] {
        match self {
            Self::Matches { dishes } => dishes,
            _ => &[],
        }
    }
}

/// Case-insensitive substring search on dish names
///
/// The query is matched as typed, surrounding whitespace included.
pub fn search_dishes(dishes: &[Dish], query: &str) -> SearchResults {
    if query.is_empty() {
        return SearchResults::Idle;
    }
    let needle = query.to_lowercase();

    let matches: Vec<Dish> = dishes
        .iter()
        .filter(|dish| dish.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matches.is_empty() {
        SearchResults::NoMatches {
            query: query.to_string(),
        }
    } else {
        SearchResults::Matches { dishes: matches }
    }
}
