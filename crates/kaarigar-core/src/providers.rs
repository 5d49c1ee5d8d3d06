//! External collaborator seams.
//!
//! The category taxonomy and provider profiles are owned by adjacent
//! components; this core only reads from them, through traits so the server
//! can wire real backends and tests can wire fixtures.

use dashmap::DashMap;
use kaarigar_commons::{AccountId, Category, CategoryId};

/// Read access to the external category catalog (id → name).
pub trait CategoryCatalog: Send + Sync {
    /// Resolve a category's display name, `None` for unknown ids.
    fn name_of(&self, id: CategoryId) -> Option<String>;

    /// All categories, for the browse/filter dropdowns.
    fn all(&self) -> Vec<Category>;
}

/// Read access to provider profiles for display enrichment
/// (verification and profile management happen elsewhere).
pub trait ProviderProfiles: Send + Sync {
    /// Display name shown next to a provider's bid, if a profile exists.
    fn display_name(&self, id: AccountId) -> Option<String>;
}

/// In-memory catalog seeded at startup (or per-test).
pub struct StaticCategoryCatalog {
    categories: DashMap<CategoryId, String>,
}

impl StaticCategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let map = DashMap::new();
        for category in categories {
            map.insert(category.id, category.name);
        }
        Self { categories: map }
    }
}

impl CategoryCatalog for StaticCategoryCatalog {
    fn name_of(&self, id: CategoryId) -> Option<String> {
        self.categories.get(&id).map(|name| name.clone())
    }

    fn all(&self) -> Vec<Category> {
        let mut all: Vec<Category> = self
            .categories
            .iter()
            .map(|entry| Category::new(*entry.key(), entry.value().clone()))
            .collect();
        all.sort_by_key(|c| c.id);
        all
    }
}

/// In-memory provider profile lookup.
pub struct InMemoryProviderProfiles {
    names: DashMap<AccountId, String>,
}

impl InMemoryProviderProfiles {
    pub fn new() -> Self {
        Self {
            names: DashMap::new(),
        }
    }

    pub fn register(&self, id: AccountId, display_name: impl Into<String>) {
        self.names.insert(id, display_name.into());
    }
}

impl Default for InMemoryProviderProfiles {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderProfiles for InMemoryProviderProfiles {
    fn display_name(&self, id: AccountId) -> Option<String> {
        self.names.get(&id).map(|name| name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_and_listing() {
        let catalog = StaticCategoryCatalog::new(vec![
            Category::new(CategoryId::new(2), "Plumbing"),
            Category::new(CategoryId::new(1), "Electrical"),
        ]);
        assert_eq!(catalog.name_of(CategoryId::new(2)), Some("Plumbing".into()));
        assert_eq!(catalog.name_of(CategoryId::new(9)), None);
        // Stable id order for listing
        let names: Vec<String> = catalog.all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Electrical".to_string(), "Plumbing".to_string()]);
    }

    #[test]
    fn test_profiles_lookup() {
        let profiles = InMemoryProviderProfiles::new();
        profiles.register(AccountId::new(5), "Bilal the Electrician");
        assert_eq!(
            profiles.display_name(AccountId::new(5)),
            Some("Bilal the Electrician".into())
        );
        assert_eq!(profiles.display_name(AccountId::new(6)), None);
    }
}
