//! Data models for episodes API responses

use crate::error::{Error, Result};
use crate::format;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a string or number into a duration in whole seconds
fn deserialize_duration_secs<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Float(f64),
        Int(u64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => {
            let seconds = s.trim().parse::<f64>().map_err(D::Error::custom)?;
            Ok(seconds as u64)
        }
        StringOrNumber::Float(f) => Ok(f as u64),
        StringOrNumber::Int(i) => Ok(i),
    }
}

/// Raw episode entry as returned by the episodes API
///
/// This mirrors the wire format and is not exposed beyond conversion into
/// [`Episode`]. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    pub file: WireFile,
}

/// Audio file descriptor attached to a wire episode
#[derive(Debug, Clone, Deserialize)]
pub struct WireFile {
    pub url: String,
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub duration: u64,
}

/// Normalized episode, ready for rendering and playback
///
/// Serializes in camelCase so the same shape is shared by the embedded page
/// data, the player API and its subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// Duration of the audio file in seconds
    pub duration: u64,
    /// Duration formatted as `HH:MM:SS`
    pub duration_as_string: String,
    /// Publication date label, e.g. `8 jan 21`
    pub published_at: String,
    /// Direct URL of the audio file
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Episode {
    /// Converts a wire episode into its normalized form
    ///
    /// Duration and publication date are turned into display labels here,
    /// once, so every consumer renders them identically.
    pub fn from_wire(wire: WireEpisode) -> Result<Self> {
        let published = parse_published_at(&wire.published_at)?;

        Ok(Self {
            id: wire.id,
            title: wire.title,
            members: wire.members,
            thumbnail: wire.thumbnail,
            duration: wire.file.duration,
            duration_as_string: format::duration_as_string(wire.file.duration),
            published_at: format::short_date_label(published),
            url: wire.file.url,
            description: wire.description,
        })
    }
}

/// Parses the `published_at` field of the episodes API
///
/// The API emits `YYYY-MM-DD HH:MM:SS`; RFC 3339 and bare `YYYY-MM-DD`
/// values are accepted as well.
pub fn parse_published_at(raw: &str) -> Result<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}
