//! Favorite set with synchronous write-through persistence.
//!
//! The set stores full [`Movie`] snapshots, not bare ids. A favorite keeps the
//! title and poster it had when it was marked, even if the catalog later
//! changes or drops that movie. This mirrors how the persisted payload has
//! always looked, and consumers rely on rendering favorites without a catalog
//! lookup; switching to id-only references would be a visible behavior change.

use crate::error::Result;
use crate::model::{Movie, MovieId};
use crate::storage::KeyValueStore;

pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Owns the favorite set and the one persistent side effect in the crate.
///
/// Generic over [`KeyValueStore`] so production uses `FileStore` and tests use
/// `InMemoryStore`. Every mutation is flushed to storage before `toggle`
/// returns; after a successful call, memory and storage never diverge.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    key: String,
    pretty: bool,
    movies: Vec<Movie>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_FAVORITES_KEY.to_string(),
            pretty: false,
            movies: Vec::new(),
        }
    }

    /// Override the storage key (see `MarqueeConfig`).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Pretty-print the persisted payload.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Load the favorite set from storage.
    ///
    /// Fails soft: a missing key, an unreadable surface, or a malformed
    /// payload all leave the set empty. Persistence problems at startup are
    /// not worth surfacing to the user; the set rebuilds as they favorite
    /// things again.
    pub fn initialize(&mut self) {
        self.movies = self
            .store
            .read(&self.key)
            .ok()
            .flatten()
            .and_then(|payload| serde_json::from_str::<Vec<Movie>>(&payload).ok())
            .unwrap_or_default();

        // Tampered payloads could carry duplicate ids; keep the first
        // occurrence so the at-most-once invariant holds from here on.
        let mut seen = std::collections::HashSet::new();
        self.movies.retain(|movie| seen.insert(movie.id));
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    /// Favorites in insertion order, oldest first. A movie that is toggled
    /// off and back on re-enters at the end.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// Flip membership for `movie` and persist the full set before returning.
    ///
    /// Returns `Ok(true)` if the movie is now a favorite, `Ok(false)` if it
    /// was just removed. On a storage write failure the in-memory mutation
    /// stands—the user's intent wins over a flaky surface—and the error is
    /// returned as a non-fatal signal. The movie does not have to exist in
    /// the current catalog; stale favorites are legal.
    pub fn toggle(&mut self, movie: &Movie) -> Result<bool> {
        let now_favorite = match self.movies.iter().position(|fav| fav.id == movie.id) {
            Some(pos) => {
                self.movies.remove(pos);
                false
            }
            None => {
                self.movies.push(movie.clone());
                true
            }
        };

        self.persist()?;
        Ok(now_favorite)
    }

    fn persist(&mut self) -> Result<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(&self.movies)?
        } else {
            serde_json::to_string(&self.movies)?
        };
        self.store.write(&self.key, &payload)
    }

    /// Consume the store and hand back the storage backend. Lets a caller
    /// (or test) rebuild a store over the same surface.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_movies;
    use crate::storage::memory::fixtures::{RejectingStore, StoreFixture};
    use crate::storage::memory::InMemoryStore;

    fn store_with_empty_surface() -> FavoritesStore<InMemoryStore> {
        let mut favorites = FavoritesStore::new(InMemoryStore::new());
        favorites.initialize();
        favorites
    }

    #[test]
    fn missing_key_initializes_empty() {
        let favorites = store_with_empty_surface();
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn malformed_payload_initializes_empty() {
        for payload in ["not json at all", "{\"id\":1}", "[{\"id\":", "42"] {
            let fixture = StoreFixture::new().with_payload(DEFAULT_FAVORITES_KEY, payload);
            let mut favorites = FavoritesStore::new(fixture.store);
            favorites.initialize();
            assert!(favorites.list().is_empty(), "payload: {}", payload);
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let movies = sample_movies();
        let mut favorites = store_with_empty_surface();

        assert!(!favorites.is_favorite(movies[0].id));
        assert!(favorites.toggle(&movies[0]).unwrap());
        assert!(favorites.is_favorite(movies[0].id));
        assert_eq!(favorites.list(), &movies[0..1]);

        assert!(!favorites.toggle(&movies[0]).unwrap());
        assert!(!favorites.is_favorite(movies[0].id));
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn toggle_parity_decides_final_membership() {
        let movies = sample_movies();
        let mut favorites = store_with_empty_surface();

        // movie 0: 3 toggles (odd), movie 1: 2 toggles (even), movie 2: 1.
        for _ in 0..3 {
            favorites.toggle(&movies[0]).unwrap();
        }
        for _ in 0..2 {
            favorites.toggle(&movies[1]).unwrap();
        }
        favorites.toggle(&movies[2]).unwrap();

        assert!(favorites.is_favorite(movies[0].id));
        assert!(!favorites.is_favorite(movies[1].id));
        assert!(favorites.is_favorite(movies[2].id));
    }

    #[test]
    fn readded_movie_goes_to_the_end() {
        let movies = sample_movies();
        let mut favorites = store_with_empty_surface();

        favorites.toggle(&movies[0]).unwrap();
        favorites.toggle(&movies[1]).unwrap();
        favorites.toggle(&movies[0]).unwrap(); // off
        favorites.toggle(&movies[0]).unwrap(); // back on, now last

        let ids: Vec<_> = favorites.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![movies[1].id, movies[0].id]);
    }

    #[test]
    fn every_toggle_writes_through() {
        let movies = sample_movies();
        let mut favorites = store_with_empty_surface();
        favorites.toggle(&movies[0]).unwrap();
        favorites.toggle(&movies[1]).unwrap();

        let store = favorites.into_inner();
        let payload = store.read(DEFAULT_FAVORITES_KEY).unwrap().unwrap();
        let persisted: Vec<Movie> = serde_json::from_str(&payload).unwrap();
        assert_eq!(persisted, movies[0..2].to_vec());
    }

    #[test]
    fn persisted_set_survives_a_new_session() {
        let movies = sample_movies();
        let mut favorites = store_with_empty_surface();
        favorites.toggle(&movies[2]).unwrap();
        favorites.toggle(&movies[0]).unwrap();

        let mut next_session = FavoritesStore::new(favorites.into_inner());
        next_session.initialize();

        let ids: Vec<_> = next_session.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![movies[2].id, movies[0].id]);
    }

    #[test]
    fn write_failure_keeps_in_memory_mutation() {
        let movies = sample_movies();
        let mut favorites = FavoritesStore::new(RejectingStore::new().reject_writes(true));
        favorites.initialize();

        let result = favorites.toggle(&movies[0]);
        assert!(result.is_err());
        // The user's intent stands even though nothing was persisted.
        assert!(favorites.is_favorite(movies[0].id));
        assert_eq!(favorites.list().len(), 1);
    }

    #[test]
    fn stale_favorites_are_tolerated() {
        let ghost = Movie::new(999, "Withdrawn Film", "1999", "");
        let fixture =
            StoreFixture::new().with_favorites(DEFAULT_FAVORITES_KEY, &[ghost.clone()]);
        let mut favorites = FavoritesStore::new(fixture.store);
        favorites.initialize();

        // Not in any catalog, still a first-class favorite.
        assert!(favorites.is_favorite(ghost.id));
        assert_eq!(favorites.list(), &[ghost.clone()]);
        assert!(!favorites.toggle(&ghost).unwrap());
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn duplicate_ids_in_payload_collapse_to_first() {
        let movie = sample_movies().remove(0);
        let mut twin = movie.clone();
        twin.title = "Inception (copy)".to_string();
        let fixture = StoreFixture::new()
            .with_favorites(DEFAULT_FAVORITES_KEY, &[movie.clone(), twin]);

        let mut favorites = FavoritesStore::new(fixture.store);
        favorites.initialize();
        assert_eq!(favorites.list(), &[movie]);
    }

    #[test]
    fn custom_key_is_honored() {
        let movies = sample_movies();
        let mut favorites = FavoritesStore::new(InMemoryStore::new()).with_key("shortlist");
        favorites.initialize();
        favorites.toggle(&movies[0]).unwrap();

        let store = favorites.into_inner();
        assert!(store.read("shortlist").unwrap().is_some());
        assert!(store.read(DEFAULT_FAVORITES_KEY).unwrap().is_none());
    }
}
