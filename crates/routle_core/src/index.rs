//! Bidirectional name/id lookup over the candidate route set.

use crate::Route;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Error raised while building a [`RouteIndex`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IndexError {
    /// Two routes share the same id.
    #[display("Duplicate route id {:?}", _0)]
    DuplicateId(String),

    /// A route has an empty id and could never be guessed by id.
    #[display("Route {:?} has an empty id", _0)]
    EmptyId(String),
}

impl std::error::Error for IndexError {}

/// Lookup table between canonical route names and ids.
///
/// Names are kept in registration order so that case-insensitive lookups
/// resolve collisions to the first-registered route.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    by_name: HashMap<String, String>,
    by_id: HashMap<String, String>,
    ordered: Vec<Route>,
    collisions: Vec<Vec<String>>,
}

impl RouteIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a route list.
    #[instrument(skip(routes))]
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Result<Self, IndexError> {
        let mut index = Self::new();
        index.build(routes)?;
        Ok(index)
    }

    /// Replaces the current mapping with one built from `routes`.
    ///
    /// Fails on a repeated or empty id, leaving the index empty. A repeated
    /// name keeps its first registration.
    #[instrument(skip(self, routes))]
    pub fn build(&mut self, routes: impl IntoIterator<Item = Route>) -> Result<(), IndexError> {
        self.clear();

        for route in routes {
            if let Err(e) = self.register(route) {
                self.clear();
                return Err(e);
            }
        }

        self.collisions = self.find_case_collisions();
        for group in &self.collisions {
            warn!(names = ?group, "Route names collide ignoring case; first registered wins");
        }

        debug!(routes = self.by_id.len(), "Route index built");
        Ok(())
    }

    fn register(&mut self, route: Route) -> Result<(), IndexError> {
        if route.id().is_empty() {
            return Err(IndexError::EmptyId(route.name().to_string()));
        }
        if self.by_id.contains_key(route.id()) {
            return Err(IndexError::DuplicateId(route.id().to_string()));
        }

        self.by_id
            .insert(route.id().to_string(), route.name().to_string());

        if self.by_name.contains_key(route.name()) {
            warn!(name = route.name(), id = route.id(), "Duplicate route name ignored");
            return Ok(());
        }

        self.by_name
            .insert(route.name().to_string(), route.id().to_string());
        self.ordered.push(route);
        Ok(())
    }

    fn find_case_collisions(&self) -> Vec<Vec<String>> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for route in &self.ordered {
            let folded = route.name().to_lowercase();
            match groups.iter_mut().find(|(key, _)| *key == folded) {
                Some((_, names)) => names.push(route.name().to_string()),
                None => groups.push((folded, vec![route.name().to_string()])),
            }
        }
        groups
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(_, names)| names)
            .collect()
    }

    fn clear(&mut self) {
        self.by_name.clear();
        self.by_id.clear();
        self.ordered.clear();
        self.collisions.clear();
    }

    /// Looks up an id by exact name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Looks up a name by exact id.
    pub fn lookup_by_id(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Looks up `(id, name)` by name ignoring case.
    ///
    /// Scans names in registration order and returns the first whose
    /// lower-cased form matches.
    pub fn lookup_by_name_case_insensitive(&self, name: &str) -> Option<(&str, &str)> {
        let lowered = name.to_lowercase();
        self.ordered
            .iter()
            .find(|route| route.name().to_lowercase() == lowered)
            .map(|route| (route.id(), route.name()))
    }

    /// Returns the route registered under `id`.
    pub fn get(&self, id: &str) -> Option<Route> {
        self.lookup_by_id(id).map(|name| Route::new(id, name))
    }

    /// Iterates route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(Route::name)
    }

    /// Returns up to `limit` names starting with `prefix`, ignoring case.
    ///
    /// Used for listing choices only; resolution never goes through it.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let lowered = prefix.to_lowercase();
        self.names()
            .filter(|name| name.to_lowercase().starts_with(&lowered))
            .take(limit)
            .collect()
    }

    /// Groups of names that are equal ignoring case, in registration order.
    pub fn case_collisions(&self) -> &[Vec<String>] {
        &self.collisions
    }

    /// Number of routes registered by id.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Vec<Route> {
        vec![
            Route::new("8", "Halsted"),
            Route::new("9", "Ashland"),
            Route::new("X9", "Ashland Express"),
        ]
    }

    #[test]
    fn test_lookups_both_directions() {
        let index = RouteIndex::from_routes(routes()).unwrap();
        assert_eq!(index.lookup_by_name("Halsted"), Some("8"));
        assert_eq!(index.lookup_by_id("X9"), Some("Ashland Express"));
        assert_eq!(index.lookup_by_name("halsted"), None);
        assert_eq!(index.lookup_by_id("x9"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let index = RouteIndex::from_routes(routes()).unwrap();
        assert_eq!(
            index.lookup_by_name_case_insensitive("ASHLAND express"),
            Some(("X9", "Ashland Express"))
        );
        assert_eq!(index.lookup_by_name_case_insensitive("Damen"), None);
    }

    #[test]
    fn test_duplicate_id_rejected_and_index_cleared() {
        let mut index = RouteIndex::from_routes(routes()).unwrap();
        let result = index.build(vec![Route::new("8", "Halsted"), Route::new("8", "Other")]);
        assert_eq!(result, Err(IndexError::DuplicateId("8".to_string())));
        assert!(index.is_empty());
        assert_eq!(index.lookup_by_name("Halsted"), None);
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = RouteIndex::from_routes(vec![Route::new("", "Nowhere")]);
        assert!(matches!(result, Err(IndexError::EmptyId(_))));
    }

    #[test]
    fn test_rebuild_clears_previous_mapping() {
        let mut index = RouteIndex::from_routes(routes()).unwrap();
        index.build(vec![Route::new("20", "Madison")]).unwrap();
        assert_eq!(index.lookup_by_name("Halsted"), None);
        assert_eq!(index.lookup_by_id("20"), Some("Madison"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let index =
            RouteIndex::from_routes(vec![Route::new("1", "Loop"), Route::new("2", "Loop")]).unwrap();
        assert_eq!(index.lookup_by_name("Loop"), Some("1"));
        assert_eq!(index.lookup_by_id("2"), Some("Loop"));
        assert_eq!(index.names().count(), 1);
    }

    #[test]
    fn test_case_collisions_reported_in_order() {
        let index = RouteIndex::from_routes(vec![
            Route::new("1", "King Drive"),
            Route::new("2", "Halsted"),
            Route::new("3", "KING DRIVE"),
        ])
        .unwrap();
        assert_eq!(
            index.case_collisions(),
            &[vec!["King Drive".to_string(), "KING DRIVE".to_string()]]
        );
        assert_eq!(
            index.lookup_by_name_case_insensitive("king drive"),
            Some(("1", "King Drive"))
        );
    }

    #[test]
    fn test_suggest_by_prefix() {
        let index = RouteIndex::from_routes(routes()).unwrap();
        assert_eq!(index.suggest("ash", 10), vec!["Ashland", "Ashland Express"]);
        assert_eq!(index.suggest("ash", 1), vec!["Ashland"]);
        assert!(index.suggest("zz", 10).is_empty());
    }

    #[test]
    fn test_get_returns_route() {
        let index = RouteIndex::from_routes(routes()).unwrap();
        assert_eq!(index.get("9"), Some(Route::new("9", "Ashland")));
        assert_eq!(index.get("99"), None);
    }
}
