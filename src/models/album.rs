use serde::{Deserialize, Serialize};

use crate::models::track::Track;

#[derive(Debug, Deserialize, Serialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    // single string; problematic (think: compilations)
    pub artist: String,
    pub asin: Option<String>,
    pub tracks: Vec<Track>,
}
