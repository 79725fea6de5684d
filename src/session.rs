//! # Session Facade
//!
//! The session is a **thin facade** over the two stores. It is the single
//! entry point a rendering layer talks to: read accessors on one side, user
//! intents on the other.
//!
//! ## What the Session Does NOT Do
//!
//! - **Filtering or membership logic**: that lives in the stores
//! - **I/O beyond the injected storage**: no stdout, no files of its own
//! - **Presentation concerns**: returns data, not strings
//!
//! ## Generic Over KeyValueStore
//!
//! `Session<S: KeyValueStore>` is generic over the persistence backend:
//! - Production: `Session<FileStore>`
//! - Testing: `Session<InMemoryStore>`

use crate::catalog::CatalogStore;
use crate::config::MarqueeConfig;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::{Movie, MovieId};
use crate::storage::KeyValueStore;

/// One browsing session: constructed once at startup, torn down at exit.
/// There is no implicit global anywhere; all state lives here.
pub struct Session<S: KeyValueStore> {
    catalog: CatalogStore,
    favorites: FavoritesStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, MarqueeConfig::default())
    }

    pub fn with_config(store: S, config: MarqueeConfig) -> Self {
        Self {
            catalog: CatalogStore::new(),
            favorites: FavoritesStore::new(store)
                .with_key(config.favorites_key)
                .with_pretty(config.pretty),
        }
    }

    /// Read the persisted favorite set. Call once at startup, before the
    /// first render. Fails soft; see [`FavoritesStore::initialize`].
    pub fn initialize(&mut self) {
        self.favorites.initialize();
    }

    // --- intents ---

    pub fn load_catalog(&mut self, movies: Vec<Movie>) {
        self.catalog.load(movies);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.catalog.set_search(text);
    }

    /// Flip favorite membership; see [`FavoritesStore::toggle`] for the
    /// write-through and failure semantics.
    pub fn toggle_favorite(&mut self, movie: &Movie) -> Result<bool> {
        self.favorites.toggle(movie)
    }

    pub fn select(&mut self, movie: Movie) {
        self.catalog.select(movie);
    }

    pub fn clear_selection(&mut self) {
        self.catalog.clear_selection();
    }

    // --- read accessors ---

    pub fn search(&self) -> &str {
        self.catalog.search()
    }

    pub fn filtered_view(&self) -> Vec<&Movie> {
        self.catalog.filtered_view()
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites(&self) -> &[Movie] {
        self.favorites.list()
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.catalog.selected()
    }
}
