//! Optional memoization of search results.
//!
//! Results are keyed by the normalized criteria structure (empty fields have
//! already collapsed to absent) and stored as talent ids in result order, so
//! a cached hit reproduces the exact uncached output. The cache is never
//! consulted implicitly: callers opt in per query and must invalidate after
//! reloading the catalog.

use crate::catalog::identity::TalentId;
use crate::catalog::model::Talent;
use crate::catalog::store::CatalogStore;
use crate::criteria::SearchCriteria;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
/// Criteria-keyed memo of search hits.
pub struct SearchCache {
    entries: BTreeMap<SearchCriteria, Vec<TalentId>>,
}

impl SearchCache {
    /// Cached hit ids for these criteria, in result order.
    pub fn lookup(&self, criteria: &SearchCriteria) -> Option<&[TalentId]> {
        self.entries.get(criteria).map(Vec::as_slice)
    }

    /// Remember the hits for these criteria.
    pub fn record(&mut self, criteria: SearchCriteria, hits: &[&Talent]) {
        self.entries
            .insert(criteria, hits.iter().map(|talent| talent.id).collect());
    }

    /// Drop every entry. Must be called whenever the catalog is reloaded.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Search through the cache, falling back to the store on a miss.
///
/// Cached ids that no longer resolve (the store was rebuilt underneath the
/// cache without an `invalidate`) force a fresh search, so the store result
/// stays authoritative either way.
pub fn search_cached<'a>(
    store: &'a CatalogStore,
    cache: &mut SearchCache,
    criteria: &SearchCriteria,
) -> Vec<&'a Talent> {
    if let Some(ids) = cache.lookup(criteria) {
        let resolved: Vec<&Talent> = ids.iter().filter_map(|&id| store.get(id)).collect();
        if resolved.len() == ids.len() {
            return resolved;
        }
    }

    let hits = store.search(criteria);
    cache.record(criteria.clone(), &hits);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::identity::SourceBook;

    fn store() -> CatalogStore {
        let talents = vec![
            Talent {
                id: TalentId(1),
                name: "Grit".to_string(),
                source: SourceBook::Core,
                requirements: None,
                flavor: "flavor".to_string(),
                text: "rules".to_string(),
            },
            Talent {
                id: TalentId(2),
                name: "Guile".to_string(),
                source: SourceBook::SandAndDust,
                requirements: Some("Grit".to_string()),
                flavor: "flavor".to_string(),
                text: "rules".to_string(),
            },
        ];
        CatalogStore::new("fixture", talents).expect("valid store")
    }

    #[test]
    fn record_then_lookup_preserves_result_order() {
        let store = store();
        let mut cache = SearchCache::default();
        let criteria = SearchCriteria::default();

        let hits = store.search(&criteria);
        cache.record(criteria.clone(), &hits);

        let cached = cache.lookup(&criteria).expect("entry recorded");
        let expected: Vec<TalentId> = hits.iter().map(|talent| talent.id).collect();
        assert_eq!(cached, expected.as_slice());
    }

    #[test]
    fn search_cached_matches_uncached_search() {
        let store = store();
        let mut cache = SearchCache::default();
        let criteria = SearchCriteria {
            name: Some("G".to_string()),
            ..SearchCriteria::default()
        };

        let first = search_cached(&store, &mut cache, &criteria);
        assert_eq!(cache.len(), 1);
        let second = search_cached(&store, &mut cache, &criteria);
        assert_eq!(first, second);
        assert_eq!(second, store.search(&criteria));
    }

    #[test]
    fn invalidate_empties_the_cache() {
        let store = store();
        let mut cache = SearchCache::default();
        search_cached(&store, &mut cache, &SearchCriteria::default());
        assert!(!cache.is_empty());
        cache.invalidate();
        assert!(cache.is_empty());
    }

    #[test]
    fn stale_ids_fall_back_to_a_fresh_search() {
        let store = store();
        let mut cache = SearchCache::default();
        let criteria = SearchCriteria::default();
        // Seed an id the store does not know to simulate a reload.
        cache.entries.insert(criteria.clone(), vec![TalentId(99)]);

        let hits = search_cached(&store, &mut cache, &criteria);
        assert_eq!(hits.len(), store.len());
        let refreshed = cache.lookup(&criteria).expect("entry refreshed");
        assert_eq!(refreshed.len(), store.len());
    }
}
