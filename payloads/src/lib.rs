//! Shared types for the cultural property API: domain records, request and
//! response payloads, and the HTTP client used by the frontend.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct CulturalPropertyId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct MovieId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct TagId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct AnnouncementId(pub i64);

/// A category label attached to cultural properties ("shrine", "bridge", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// A 3D-model/AR asset linked to a cultural property.
///
/// The frontend only links out to the model viewer; it never interprets the
/// model data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub cultural_property_id: CulturalPropertyId,
    pub title: String,
    pub model_url: String,
    pub thumbnail_url: Option<String>,
    pub created_at: Timestamp,
}

/// A cultural property record as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalProperty {
    pub id: CulturalPropertyId,
    pub name: String,
    /// Kana reading of the name, when the record has one.
    pub name_kana: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub image_urls: Vec<String>,
    pub tags: Vec<Tag>,
    pub movies: Vec<Movie>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The paginated wrapper returned by every list endpoint.
///
/// `next`/`previous` are opaque URLs from the backend; the client paginates
/// with explicit `page`/`limit` parameters instead of following them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// One page of results plus the total record count, the contract expected by
/// the paginated fetch hook.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_decodes() {
        let json = r#"{
            "count": 2,
            "next": "http://example.com/api/v1/tags?page=2",
            "previous": null,
            "results": [
                {"id": 1, "name": "shrine"},
                {"id": 3, "name": "bridge"}
            ]
        }"#;

        let envelope: Paginated<Tag> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.count, 2);
        assert!(envelope.previous.is_none());
        assert_eq!(
            envelope.results,
            vec![
                Tag { id: TagId(1), name: "shrine".into() },
                Tag { id: TagId(3), name: "bridge".into() },
            ]
        );
    }

    #[test]
    fn ids_parse_from_route_segments() {
        let id: CulturalPropertyId = "42".parse().unwrap();
        assert_eq!(id, CulturalPropertyId(42));
        assert_eq!(id.to_string(), "42");
    }
}
