use serde::{Deserialize, Serialize};

/// One release from a MusicBrainz release search. Transient, never persisted.
#[derive(Debug, Deserialize, Serialize)]
pub struct AlbumSearchResult {
    pub score: u8,
    pub title: String,
    pub id: String,
    pub artist: String,
    pub artist_id: String,
}

/// One artist from a MusicBrainz artist search. Transient, never persisted.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArtistSearchResult {
    pub score: u8,
    pub name: String,
    pub id: String,
}
