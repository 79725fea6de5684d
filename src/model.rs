use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a movie. Ids come with the seeded catalog and are
/// never reassigned, so a persisted favorite keeps pointing at the same movie
/// across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for MovieId {
    fn from(raw: u64) -> Self {
        MovieId(raw)
    }
}

/// A catalog entry. Immutable once created; the catalog is replaced wholesale,
/// never edited in place.
///
/// The wire name for `poster_url` is `posterUrl` so persisted favorite
/// snapshots keep the field layout the UI layer already understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    #[serde(rename = "posterUrl")]
    pub poster_url: String,
}

impl Movie {
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url: poster_url.into(),
        }
    }
}
