use crate::areas::Catalog;
use crate::domain::models::{MapSession, SearchResult};

/// Handle for an in-flight search. Carries the generation it was started
/// under so a superseded search cannot clobber a newer one.
pub struct PendingSearch {
    pub generation: u64,
    pub query: String,
}

pub fn begin_search(map: &mut MapSession, query: &str) -> PendingSearch {
    map.search_generation += 1;
    map.search_query = query.to_string();
    PendingSearch {
        generation: map.search_generation,
        query: query.to_string(),
    }
}

/// Case-insensitive substring match over the catalog, plus two fabricated
/// decoy results standing in for a geocoding backend.
pub fn run_search(catalog: &Catalog, query: &str) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    let mut results: Vec<SearchResult> = catalog
        .areas
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .map(|a| SearchResult {
            id: a.id.clone(),
            name: a.name.clone(),
            position: a.position,
        })
        .collect();

    results.push(SearchResult {
        id: "fake1".to_string(),
        name: format!("{} Park", query),
        position: (37.7610, -122.4270),
    });
    results.push(SearchResult {
        id: "fake2".to_string(),
        name: format!("{} District", query),
        position: (37.7890, -122.4150),
    });
    results
}

/// Commit results for a pending search. Returns false (and leaves the session
/// untouched) when a newer search has started since.
pub fn commit_results(
    map: &mut MapSession,
    pending: &PendingSearch,
    results: Vec<SearchResult>,
) -> bool {
    if pending.generation != map.search_generation {
        return false;
    }
    map.search_results = results;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas;

    fn fresh_session() -> MapSession {
        MapSession {
            center: (37.7749, -122.4194),
            zoom: 13,
            selected_area: None,
            safety_rating: 0,
            search_query: String::new(),
            search_results: Vec::new(),
            search_generation: 0,
        }
    }

    #[test]
    fn search_filters_case_insensitively_and_appends_two_decoys() {
        let catalog = areas::builtin();
        let results = run_search(&catalog, "RIVER");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "Riverside Park");
        assert_eq!(results[1].name, "RIVER Park");
        assert_eq!(results[2].name, "RIVER District");
    }

    #[test]
    fn search_with_no_match_still_returns_decoys() {
        let catalog = areas::builtin();
        let results = run_search(&catalog, "nowhere");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "fake1");
        assert_eq!(results[1].id, "fake2");
    }

    #[test]
    fn stale_completion_does_not_overwrite_newer_search() {
        let catalog = areas::builtin();
        let mut map = fresh_session();

        let slow = begin_search(&mut map, "down");
        let slow_results = run_search(&catalog, &slow.query);
        let fast = begin_search(&mut map, "university");
        let fast_results = run_search(&catalog, &fast.query);

        assert!(commit_results(&mut map, &fast, fast_results));
        assert!(!commit_results(&mut map, &slow, slow_results));
        assert_eq!(map.search_results[0].name, "University Area");
        assert_eq!(map.search_query, "university");
    }

    #[test]
    fn commit_checks_the_shared_session_not_a_private_copy() {
        // Models two invocations over a persisted session: each starts from
        // the stored state, and the slow one's commit must be validated
        // against the state as reloaded after its delay.
        let catalog = areas::builtin();
        let mut slow_view = fresh_session();
        let slow = begin_search(&mut slow_view, "down");

        // The fast invocation reloads the state the slow one persisted.
        let mut fast_view = slow_view.clone();
        let fast = begin_search(&mut fast_view, "university");
        let fast_results = run_search(&catalog, &fast.query);
        assert!(commit_results(&mut fast_view, &fast, fast_results));

        // The slow invocation finishes last and reloads before committing.
        let mut reloaded = fast_view.clone();
        let slow_results = run_search(&catalog, &slow.query);
        assert!(!commit_results(&mut reloaded, &slow, slow_results));
        assert_eq!(reloaded.search_query, "university");
        assert_eq!(reloaded.search_results[0].name, "University Area");
    }
}
