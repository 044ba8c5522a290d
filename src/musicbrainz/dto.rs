//! Wire types for the MusicBrainz web service.
//!
//! These match the JSON the API returns; convert to the domain models in
//! `crate::models` before anything leaves this module.

use serde::Deserialize;

/// Artist lookup (`inc=releases`).
#[derive(Debug, Deserialize)]
pub struct ArtistResponse {
    pub name: String,
    pub releases: Vec<ReleaseRef>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseRef {
    pub id: String,
    pub title: String,
}

/// Release lookup (`inc=recordings`).
#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub title: String,
    pub asin: Option<String>,
    pub media: Vec<Medium>,
}

#[derive(Debug, Deserialize)]
pub struct Medium {
    #[serde(default)]
    pub tracks: Vec<MediumTrack>,
}

#[derive(Debug, Deserialize)]
pub struct MediumTrack {
    pub title: String,
    pub recording: Recording,
}

#[derive(Debug, Deserialize)]
pub struct Recording {
    pub id: String,
}

/// Recording lookup (`inc=artist-credits`).
#[derive(Debug, Deserialize)]
pub struct RecordingResponse {
    pub title: String,
    #[serde(rename = "artist-credit")]
    pub artist_credit: Vec<ArtistCredit>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistCredit {
    pub artist: CreditedArtist,
}

#[derive(Debug, Deserialize)]
pub struct CreditedArtist {
    pub id: String,
    pub name: String,
}

/// Release search.
#[derive(Debug, Deserialize)]
pub struct ReleaseSearchResponse {
    pub releases: Vec<ReleaseSearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseSearchEntry {
    pub id: String,
    pub title: String,
    pub score: u8,
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
}

/// Artist search.
#[derive(Debug, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Vec<ArtistSearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistSearchEntry {
    pub id: String,
    pub name: String,
    pub score: u8,
}
