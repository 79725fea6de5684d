use crate::model::Movie;
use once_cell::sync::Lazy;

static SAMPLE_MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        Movie::new(
            1,
            "Inception",
            "2010",
            "https://m.media-amazon.com/images/I/51xJb6J4J3L._AC_.jpg",
        ),
        Movie::new(
            2,
            "Interstellar",
            "2014",
            "https://m.media-amazon.com/images/I/71n58GBi9qL._AC_SY679_.jpg",
        ),
        Movie::new(
            3,
            "The Dark Knight",
            "2008",
            "https://m.media-amazon.com/images/I/51k0qa6zYbL._AC_.jpg",
        ),
    ]
});

/// The built-in seed catalog. The core does no network fetching; a client
/// either loads this or supplies its own list to `CatalogStore::load`.
pub fn sample_movies() -> Vec<Movie> {
    SAMPLE_MOVIES.clone()
}
