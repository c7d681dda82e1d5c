//! Feature flag registry: local switches for optional UI affordances.
//!
//! DESIGN
//! ======
//! These are view configuration, not remote toggles. They live for one page
//! session, start disabled, and are never persisted or fetched.

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

/// Identifier of a registered flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlagKey {
    /// Stats bar above the grid.
    Analytics,
    /// Category tags on cards plus title/category inputs on the add form.
    Categories,
    /// Star button on cards.
    Favorites,
}

impl FlagKey {
    /// Registration order, which is also display order.
    pub const ALL: [Self; 3] = [Self::Analytics, Self::Categories, Self::Favorites];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::Categories => "categories",
            Self::Favorites => "favorites",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// One registered flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlag {
    pub enabled: bool,
    pub name: &'static str,
    pub description: &'static str,
}

/// Ordered flag registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    entries: Vec<(FlagKey, FeatureFlag)>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        let flag = |name, description| FeatureFlag { enabled: false, name, description };
        Self {
            entries: vec![
                (
                    FlagKey::Analytics,
                    flag("Analytics Dashboard", "View stats and insights about your thumbnails"),
                ),
                (FlagKey::Categories, flag("Categories & Tags", "Organize thumbnails by category")),
                (FlagKey::Favorites, flag("Favorites System", "Star your best thumbnails")),
            ],
        }
    }
}

impl FeatureFlags {
    #[must_use]
    pub fn get(&self, key: FlagKey) -> Option<&FeatureFlag> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, flag)| flag)
    }

    #[must_use]
    pub fn is_enabled(&self, key: FlagKey) -> bool {
        self.get(key).is_some_and(|flag| flag.enabled)
    }

    pub fn set(&mut self, key: FlagKey, enabled: bool) {
        if let Some((_, flag)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            flag.enabled = enabled;
        }
    }

    /// Flip a flag and return its new state.
    pub fn toggle(&mut self, key: FlagKey) -> bool {
        let next = !self.is_enabled(key);
        self.set(key, next);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (FlagKey, &FeatureFlag)> {
        self.entries.iter().map(|(key, flag)| (*key, flag))
    }
}
