use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub asin: Option<String>,
}
