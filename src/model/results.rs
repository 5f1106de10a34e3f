//! Search result records and response decoding.

use std::cmp::Ordering;

use serde::Deserialize;
use thiserror::Error;

/// Category of a single search result, as reported by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ResultKind {
    MusicTrack,
    Software,
    Ebook,
    #[default]
    Unspecified,
}

impl ResultKind {
    fn from_payload(kind: Option<&str>) -> Self {
        match kind {
            Some("song") | Some("musicTrack") => Self::MusicTrack,
            Some("software") => Self::Software,
            Some("ebook") => Self::Ebook,
            _ => Self::Unspecified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MusicTrack => "Song",
            Self::Software => "App",
            Self::Ebook => "E-Book",
            Self::Unspecified => "Other",
        }
    }
}

/// One decoded search result. Immutable once constructed; only
/// [`decode_results`] produces these.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub artist: String,
    pub kind: ResultKind,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub artwork_url: Option<String>,
}

impl SearchResult {
    /// Display order: name, case-insensitive, with kind as tie-break.
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.kind.cmp(&b.kind))
    }
}

#[derive(Debug, Error)]
#[error("malformed search response: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Raw record shape as the endpoint returns it. Every field is optional —
/// track results carry `trackName`, collection-level results only
/// `collectionName` — but a field that is present with the wrong type fails
/// the decode of the whole envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    track_name: Option<String>,
    collection_name: Option<String>,
    artist_name: Option<String>,
    kind: Option<String>,
    track_price: Option<f64>,
    currency: Option<String>,
    artwork_url60: Option<String>,
}

#[derive(Deserialize)]
struct ResultEnvelope {
    results: Vec<RawResult>,
}

/// Parse a raw response body into result records, preserving payload order.
///
/// Unrecognized fields are ignored. A missing `results` field or a
/// type-malformed record fails the whole decode; the caller logs the error
/// and renders the empty set, which is indistinguishable from a search that
/// genuinely found nothing.
pub fn decode_results(body: &str) -> Result<Vec<SearchResult>, DecodeError> {
    let envelope: ResultEnvelope = serde_json::from_str(body)?;
    let results = envelope
        .results
        .into_iter()
        .map(|raw| SearchResult {
            name: raw.track_name.or(raw.collection_name).unwrap_or_default(),
            artist: raw.artist_name.unwrap_or_default(),
            kind: ResultKind::from_payload(raw.kind.as_deref()),
            price: raw.track_price,
            currency: raw.currency,
            artwork_url: raw.artwork_url60,
        })
        .collect();
    Ok(results)
}
