//! MusicBrainz web service client.
//!
//! Read-only lookups and searches against the MusicBrainz API v2. The
//! service requires a User-Agent header on every request.

mod dto;

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::LookupError;
use crate::models::album::Album;
use crate::models::artist::{AlbumRef, Artist};
use crate::models::search::{AlbumSearchResult, ArtistSearchResult};
use crate::models::track::Track;
use crate::musicbrainz_endpoint;

const USER_AGENT: &str = concat!(
    "Splicr/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/splicr/splicr)"
);

pub struct MusicBrainzClient {
    client: Client,
}

impl MusicBrainzClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    pub async fn fetch_artist(&self, id: &str) -> Result<Artist, LookupError> {
        let resp: dto::ArtistResponse = self.get_json(artist_lookup_url(id)).await?;
        let albums = resp
            .releases
            .into_iter()
            .map(|release| AlbumRef {
                id: release.id,
                title: release.title,
            })
            .collect();
        Ok(Artist {
            id: id.to_string(),
            name: resp.name,
            albums,
        })
    }

    pub async fn fetch_album(&self, id: &str) -> Result<Album, LookupError> {
        let resp: dto::ReleaseResponse = self.get_json(release_lookup_url(id)).await?;
        Ok(Album {
            id: id.to_string(),
            title: resp.title,
            artist: String::new(),
            asin: resp.asin,
            tracks: flatten_media(resp.media),
        })
    }

    pub async fn fetch_track(&self, id: &str) -> Result<Track, LookupError> {
        let resp: dto::RecordingResponse = self.get_json(recording_lookup_url(id)).await?;
        Ok(Track {
            id: id.to_string(),
            title: resp.title,
            artist: first_credit_name(&resp.artist_credit),
            asin: None,
        })
    }

    pub async fn search_albums(&self, terms: &str) -> Result<Vec<AlbumSearchResult>, LookupError> {
        let resp: dto::ReleaseSearchResponse = self.get_json(release_search_url(terms)).await?;
        collect_album_results(resp)
    }

    pub async fn search_artists(&self, terms: &str) -> Result<Vec<ArtistSearchResult>, LookupError> {
        let resp: dto::ArtistSearchResponse = self.get_json(artist_search_url(terms)).await?;
        Ok(collect_artist_results(resp))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, LookupError> {
        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!("musicbrainz returned {} for {}", status, url);
            return Err(LookupError::Status(status));
        }
        resp.json::<T>()
            .await
            .map_err(|err| LookupError::Parse(err.to_string()))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}

fn artist_lookup_url(id: &str) -> String {
    musicbrainz_endpoint!("/artist/{id}?inc=releases&fmt=json&type=album|ep")
}

fn release_lookup_url(id: &str) -> String {
    musicbrainz_endpoint!("/release/{id}?inc=recordings&fmt=json")
}

fn recording_lookup_url(id: &str) -> String {
    musicbrainz_endpoint!("/recording/{id}?inc=artist-credits&fmt=json")
}

fn release_search_url(terms: &str) -> String {
    musicbrainz_endpoint!(
        "/release/?query={}&fmt=json&type=album|ep",
        urlencoding::encode(terms)
    )
}

fn artist_search_url(terms: &str) -> String {
    musicbrainz_endpoint!("/artist/?query={}&fmt=json", urlencoding::encode(terms))
}

/// Flattens the medium → track nesting into one ordered track list.
/// Only id and title are populated here; artist and asin stay empty.
fn flatten_media(media: Vec<dto::Medium>) -> Vec<Track> {
    media
        .into_iter()
        .flat_map(|medium| medium.tracks)
        .map(|track| Track {
            id: track.recording.id,
            title: track.title,
            artist: String::new(),
            asin: None,
        })
        .collect()
}

// first credited artist only; co-credits are dropped
fn first_credit_name(credits: &[dto::ArtistCredit]) -> String {
    credits
        .first()
        .map(|credit| credit.artist.name.clone())
        .unwrap_or_default()
}

fn collect_album_results(
    resp: dto::ReleaseSearchResponse,
) -> Result<Vec<AlbumSearchResult>, LookupError> {
    let mut albums: Vec<AlbumSearchResult> = Vec::new();
    for release in resp.releases {
        let (artist, artist_id) = {
            let credit = release
                .artist_credit
                .first()
                .ok_or(LookupError::MissingField("artist-credit"))?;
            (credit.artist.name.clone(), credit.artist.id.clone())
        };
        let result = AlbumSearchResult {
            score: release.score,
            title: release.title,
            id: release.id,
            artist,
            artist_id,
        };
        // skip results we already have, for more presentable search results
        if !already_listed(&albums, &result) {
            albums.push(result);
        }
    }
    Ok(albums)
}

fn collect_artist_results(resp: dto::ArtistSearchResponse) -> Vec<ArtistSearchResult> {
    resp.artists
        .into_iter()
        .map(|artist| ArtistSearchResult {
            score: artist.score,
            name: artist.name,
            id: artist.id,
        })
        .collect()
}

/// A candidate is dropped when a kept result credits the same artist and
/// that kept result's title matches the candidate's artist name.
fn already_listed(kept: &[AlbumSearchResult], candidate: &AlbumSearchResult) -> bool {
    kept.iter()
        .any(|result| result.artist == candidate.artist && result.title == candidate.artist)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn release_entry(score: u8, title: &str, id: &str, artist: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "score": score,
            "artist-credit": [
                { "artist": { "id": format!("{artist}-id"), "name": artist } }
            ]
        })
    }

    #[test]
    fn release_with_two_media_flattens_in_order() {
        let payload = json!({
            "title": "Physical Graffiti",
            "asin": "B000002J21",
            "media": [
                { "tracks": [
                    { "title": "Custard Pie", "recording": { "id": "r1" } },
                    { "title": "The Rover", "recording": { "id": "r2" } }
                ] },
                { "tracks": [
                    { "title": "In My Time of Dying", "recording": { "id": "r3" } },
                    { "title": "Houses of the Holy", "recording": { "id": "r4" } },
                    { "title": "Trampled Under Foot", "recording": { "id": "r5" } }
                ] }
            ]
        });
        let resp: dto::ReleaseResponse = serde_json::from_value(payload).unwrap();
        let tracks = flatten_media(resp.media);
        assert_eq!(tracks.len(), 5);
        let ids: Vec<&str> = tracks.iter().map(|track| track.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3", "r4", "r5"]);
        assert!(tracks
            .iter()
            .all(|track| track.artist.is_empty() && track.asin.is_none()));
    }

    #[test]
    fn track_artist_is_first_credit_only() {
        let payload = json!({
            "title": "Under Pressure",
            "artist-credit": [
                { "artist": { "id": "q", "name": "Queen" } },
                { "artist": { "id": "b", "name": "David Bowie" } }
            ]
        });
        let resp: dto::RecordingResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(first_credit_name(&resp.artist_credit), "Queen");
    }

    #[test]
    fn track_artist_is_empty_without_credits() {
        assert_eq!(first_credit_name(&[]), "");
    }

    #[test]
    fn search_drops_result_shadowed_by_self_titled_album() {
        // a kept self-titled release shadows every later result by the
        // same artist; the unrelated third entry survives
        let payload = json!({ "releases": [
            release_entry(100, "The Beatles", "rel-1", "The Beatles"),
            release_entry(98, "Abbey Road", "rel-2", "The Beatles"),
            release_entry(95, "Abbey Road", "rel-3", "Abbey Road Ensemble"),
        ]});
        let resp: dto::ReleaseSearchResponse = serde_json::from_value(payload).unwrap();
        let results = collect_album_results(resp).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "rel-1");
        assert_eq!(results[1].id, "rel-3");
    }

    #[test]
    fn search_keeps_identical_title_duplicates() {
        // the comparison is candidate-artist against kept-title, so two
        // exactly equal results are both kept
        let payload = json!({ "releases": [
            release_entry(100, "Definitely Maybe", "rel-1", "Oasis"),
            release_entry(100, "Definitely Maybe", "rel-2", "Oasis"),
        ]});
        let resp: dto::ReleaseSearchResponse = serde_json::from_value(payload).unwrap();
        let results = collect_album_results(resp).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "rel-1");
        assert_eq!(results[1].id, "rel-2");
    }

    #[test]
    fn search_entry_without_credit_fails() {
        let payload = json!({ "releases": [
            { "id": "rel-1", "title": "No Credit", "score": 80, "artist-credit": [] }
        ]});
        let resp: dto::ReleaseSearchResponse = serde_json::from_value(payload).unwrap();
        assert!(matches!(
            collect_album_results(resp),
            Err(LookupError::MissingField("artist-credit"))
        ));
    }

    #[test]
    fn artist_search_keeps_every_result() {
        let payload = json!({ "artists": [
            { "id": "a1", "name": "Nirvana", "score": 100 },
            { "id": "a2", "name": "Nirvana", "score": 92 }
        ]});
        let resp: dto::ArtistSearchResponse = serde_json::from_value(payload).unwrap();
        let results = collect_artist_results(resp);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Nirvana");
        assert_eq!(results[1].id, "a2");
    }

    #[test]
    fn search_terms_are_percent_encoded() {
        assert_eq!(
            release_search_url("abbey road & friends"),
            "https://musicbrainz.org/ws/2/release/?query=abbey%20road%20%26%20friends&fmt=json&type=album|ep"
        );
        assert_eq!(
            artist_search_url("emerson, lake & palmer"),
            "https://musicbrainz.org/ws/2/artist/?query=emerson%2C%20lake%20%26%20palmer&fmt=json"
        );
    }

    #[test]
    fn identifiers_are_embedded_verbatim() {
        let id = "9f7a4c28-cd4e-4a8f-8a39-6b2fb1d6ba1a";
        assert_eq!(
            artist_lookup_url(id),
            format!("https://musicbrainz.org/ws/2/artist/{id}?inc=releases&fmt=json&type=album|ep")
        );
        assert_eq!(
            release_lookup_url(id),
            format!("https://musicbrainz.org/ws/2/release/{id}?inc=recordings&fmt=json")
        );
        assert_eq!(
            recording_lookup_url(id),
            format!("https://musicbrainz.org/ws/2/recording/{id}?inc=artist-credits&fmt=json")
        );
    }
}
