//! Thumbnail grid filter.
//!
//! Changing the filter never touches the network: the grid is re-projected
//! from the cached list of the current board.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Thumbnail;

/// Active grid filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every cached thumbnail.
    #[default]
    All,
    /// Only thumbnails with `favorite == true`.
    Favorites,
    /// Only thumbnails whose category equals the value.
    Category(String),
}

impl Filter {
    /// Stable key for the filter buttons. Categories are namespaced so one
    /// named `all` or `favorites` never collides with the built-in filters.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Favorites => "favorites".to_owned(),
            Self::Category(category) => format!("category:{category}"),
        }
    }

    /// Filter button text. Categories are shown as stored.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Favorites => "Favorites",
            Self::Category(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, thumbnail: &Thumbnail) -> bool {
        match self {
            Self::All => true,
            Self::Favorites => thumbnail.favorite,
            Self::Category(category) => thumbnail.category == *category,
        }
    }

    /// Matching thumbnails, preserving cache order.
    #[must_use]
    pub fn apply<'a>(&self, thumbnails: &'a [Thumbnail]) -> Vec<&'a Thumbnail> {
        thumbnails.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct categories in first-seen order, for the category filter buttons.
#[must_use]
pub fn categories(thumbnails: &[Thumbnail]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for thumbnail in thumbnails {
        if !seen.contains(&thumbnail.category.as_str()) {
            seen.push(&thumbnail.category);
        }
    }
    seen
}
