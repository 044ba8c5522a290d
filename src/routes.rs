use rocket::figment::Figment;
use rocket::response::{Debug, Redirect};
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket, State};
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use uuid::Uuid;

use crate::config::SplicrConfig;
use crate::error::LookupError;
use crate::musicbrainz::MusicBrainzClient;
use crate::youtube::YoutubeClient;

pub fn build(figment: Figment, config: SplicrConfig) -> Rocket<Build> {
    let musicbrainz = MusicBrainzClient::new();
    let youtube = YoutubeClient::new(config.youtube_key.clone());
    rocket::custom(figment)
        .manage(config)
        .manage(musicbrainz)
        .manage(youtube)
        .attach(Template::fairing())
        .mount(
            "/",
            routes![
                index,
                album_search,
                album_search_missing,
                artist_search,
                artist_search_missing,
                search_path,
                search_query,
                search_missing,
                album,
                album_missing,
                artist,
                artist_missing,
                track,
                track_missing,
                ytid,
                ytid_missing
            ],
        )
}

#[get("/")]
fn index(config: &State<SplicrConfig>) -> Template {
    Template::render("index", context! { ga_tracking_id: &config.ga_tracking_id })
}

async fn render_album_search(
    musicbrainz: &MusicBrainzClient,
    config: &SplicrConfig,
    terms: String,
) -> Result<Template, Debug<LookupError>> {
    let albums = musicbrainz.search_albums(&terms).await?;
    Ok(Template::render(
        "album-search",
        context! { ga_tracking_id: &config.ga_tracking_id, terms, albums },
    ))
}

#[get("/search/album/<terms>")]
async fn album_search(
    musicbrainz: &State<MusicBrainzClient>,
    config: &State<SplicrConfig>,
    terms: String,
) -> Result<Template, Debug<LookupError>> {
    render_album_search(musicbrainz, config, terms).await
}

#[get("/search/album")]
fn album_search_missing() -> Redirect {
    Redirect::to("/")
}

// second spelling of the album search page
#[get("/search/<terms>")]
async fn search_path(
    musicbrainz: &State<MusicBrainzClient>,
    config: &State<SplicrConfig>,
    terms: String,
) -> Result<Template, Debug<LookupError>> {
    render_album_search(musicbrainz, config, terms).await
}

#[get("/search?<terms>")]
async fn search_query(
    musicbrainz: &State<MusicBrainzClient>,
    config: &State<SplicrConfig>,
    terms: String,
) -> Result<Template, Debug<LookupError>> {
    render_album_search(musicbrainz, config, terms).await
}

#[get("/search", rank = 2)]
fn search_missing() -> Redirect {
    Redirect::to("/")
}

#[get("/search/artist/<terms>")]
async fn artist_search(
    musicbrainz: &State<MusicBrainzClient>,
    config: &State<SplicrConfig>,
    terms: String,
) -> Result<Template, Debug<LookupError>> {
    let artists = musicbrainz.search_artists(&terms).await?;
    Ok(Template::render(
        "artist-search",
        context! { ga_tracking_id: &config.ga_tracking_id, terms, artists },
    ))
}

#[get("/search/artist")]
fn artist_search_missing() -> Redirect {
    Redirect::to("/")
}

#[get("/album/<id>")]
async fn album(
    musicbrainz: &State<MusicBrainzClient>,
    youtube: &State<YoutubeClient>,
    config: &State<SplicrConfig>,
    id: Uuid,
) -> Result<Template, Debug<LookupError>> {
    let album = musicbrainz.fetch_album(&id.to_string()).await?;
    let lead_track = album
        .tracks
        .first()
        .ok_or(LookupError::MissingField("tracks"))?;
    let ytid = youtube
        .find_top_video(&format!("{} {}", album.artist, lead_track.title))
        .await?;
    Ok(Template::render(
        "album",
        context! { ga_tracking_id: &config.ga_tracking_id, album, ytid },
    ))
}

#[get("/album")]
fn album_missing() -> Redirect {
    Redirect::to("/")
}

#[get("/artist/<id>")]
async fn artist(
    musicbrainz: &State<MusicBrainzClient>,
    config: &State<SplicrConfig>,
    id: Uuid,
) -> Result<Template, Debug<LookupError>> {
    let artist = musicbrainz.fetch_artist(&id.to_string()).await?;
    Ok(Template::render(
        "artist",
        context! { ga_tracking_id: &config.ga_tracking_id, artist },
    ))
}

#[get("/artist")]
fn artist_missing() -> Redirect {
    Redirect::to("/")
}

#[get("/track/<id>")]
async fn track(
    musicbrainz: &State<MusicBrainzClient>,
    youtube: &State<YoutubeClient>,
    config: &State<SplicrConfig>,
    id: Uuid,
) -> Result<Template, Debug<LookupError>> {
    let track = musicbrainz.fetch_track(&id.to_string()).await?;
    let ytid = youtube
        .find_top_video(&format!("{} {}", track.artist, track.title))
        .await?;
    Ok(Template::render(
        "track",
        context! { ga_tracking_id: &config.ga_tracking_id, track, ytid },
    ))
}

#[get("/track")]
fn track_missing() -> Redirect {
    Redirect::to("/")
}

#[derive(Debug, Serialize)]
struct YtidResponse {
    ytid: Option<String>,
}

#[get("/ytid/<target>")]
async fn ytid(
    musicbrainz: &State<MusicBrainzClient>,
    youtube: &State<YoutubeClient>,
    target: String,
) -> Result<Json<YtidResponse>, Debug<LookupError>> {
    // a UUID names a track; anything else is used as query terms directly
    let terms = match Uuid::parse_str(&target) {
        Ok(id) => {
            let track = musicbrainz.fetch_track(&id.to_string()).await?;
            format!("{} {}", track.artist, track.title)
        }
        Err(_) => target,
    };
    let ytid = youtube.find_top_video(&terms).await?;
    Ok(Json(YtidResponse { ytid }))
}

#[get("/ytid")]
fn ytid_missing() -> Redirect {
    Redirect::to("/")
}
