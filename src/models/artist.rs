use serde::{Deserialize, Serialize};

/// Lightweight (id, title) pair for a release on an artist page.
#[derive(Debug, Deserialize, Serialize)]
pub struct AlbumRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub albums: Vec<AlbumRef>,
}
