use crate::model::Movie;

/// Owns the seeded movie list, the current search text, and the transient
/// selection. The filtered view is a pure function of (catalog, search),
/// recomputed on demand; with catalogs this small there is nothing to cache.
#[derive(Debug, Default)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    search: String,
    selected: Option<Movie>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog wholesale. No other state is touched: search text
    /// and selection survive a reload.
    pub fn load(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Store the search text exactly as typed. Whitespace is significant;
    /// matching is deferred to [`filtered_view`](Self::filtered_view).
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Every movie whose title contains the current search text as a
    /// case-insensitive substring, in catalog order. Empty search yields the
    /// full catalog.
    pub fn filtered_view(&self) -> Vec<&Movie> {
        let needle = self.search.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn select(&mut self, movie: Movie) {
        self.selected = Some(movie);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }
}
