#[macro_export]
macro_rules! musicbrainz_endpoint {
    ( $( $x: expr),+ ) => {{
        format!("https://musicbrainz.org/ws/2{}", format_args!($($x),+))
    }};
}

#[macro_export]
macro_rules! youtube_endpoint {
    ( $( $x: expr),+ ) => {{
        format!("https://www.googleapis.com/youtube/v3{}", format_args!($($x),+))
    }};
}
