use crate::{AnnouncementId, UserId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The current user's profile information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Authentication token issued on login. Stored client-side and attached to
/// mutating requests as `Authorization: Token <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// One row of the active-user ranking: users ordered by how many cultural
/// properties they have registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub user_id: UserId,
    pub username: String,
    pub registered_count: u32,
}

/// A site-wide announcement shown on the announcements page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub body: String,
    pub published_at: Timestamp,
}

/// Server-side diagnostics for one row of a CSV import preview.
///
/// Parsed field values are echoed back when the row is well-formed; `errors`
/// lists what the server rejected about the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPreviewRow {
    pub row_number: u32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub errors: Vec<String>,
}

impl ImportPreviewRow {
    pub fn is_importable(&self) -> bool {
        self.errors.is_empty()
    }
}
