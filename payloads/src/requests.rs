use crate::{CulturalPropertyId, MovieId, TagId};
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validation result for sign-up forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpValidation {
    Valid,
    EmailInvalid,
    UsernameTooShort,
    UsernameTooLong,
    PasswordTooShort,
    PasswordMismatch,
}

impl SignUpValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::EmailInvalid => Some("Enter a valid email address"),
            Self::UsernameTooShort => {
                Some("Username must be at least 3 characters")
            }
            Self::UsernameTooLong => {
                Some("Username must be at most 30 characters")
            }
            Self::PasswordTooShort => {
                Some("Password must be at least 8 characters")
            }
            Self::PasswordMismatch => Some("Passwords do not match"),
        }
    }
}

/// Validate sign-up form fields before sending them to the backend.
///
/// The backend performs the authoritative validation; this only catches the
/// obvious mistakes client-side.
pub fn validate_sign_up(
    email: &str,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> SignUpValidation {
    if !email.contains('@') || email.len() > EMAIL_MAX_LEN {
        return SignUpValidation::EmailInvalid;
    }
    if username.len() < USERNAME_MIN_LEN {
        return SignUpValidation::UsernameTooShort;
    }
    if username.len() > USERNAME_MAX_LEN {
        return SignUpValidation::UsernameTooLong;
    }
    if password.len() < PASSWORD_MIN_LEN {
        return SignUpValidation::PasswordTooShort;
    }
    if password != confirm_password {
        return SignUpValidation::PasswordMismatch;
    }
    SignUpValidation::Valid
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Query parameters for the cultural property list endpoints.
///
/// Only set, non-empty fields are serialized into the query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListCulturalProperties {
    pub tag_id: Option<TagId>,
    /// Substring match on name and kana reading.
    pub keyword: Option<String>,
    /// Restrict to records that have at least one linked movie.
    pub has_movie: Option<bool>,
}

impl ListCulturalProperties {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(tag_id) = self.tag_id {
            pairs.push(("tag_id", tag_id.to_string()));
        }
        if let Some(keyword) = &self.keyword
            && !keyword.is_empty()
        {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(has_movie) = self.has_movie {
            pairs.push(("has_movie", has_movie.to_string()));
        }
        pairs
    }
}

/// Query parameters for the movie list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMovies {
    pub cultural_property_id: Option<CulturalPropertyId>,
}

impl ListMovies {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.cultural_property_id {
            pairs.push(("cultural_property_id", id.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCulturalProperty {
    pub name: String,
    pub name_kana: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub image_urls: Vec<String>,
    pub tag_ids: Vec<TagId>,
}

/// Partial update; unset fields are left unchanged by the backend.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCulturalProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<TagId>>,
}

/// Raw CSV text for server-side import preview. The client never parses the
/// CSV itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportPreview {
    pub csv: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_unset_fields() {
        let query = ListCulturalProperties {
            tag_id: Some(TagId(3)),
            keyword: None,
            has_movie: None,
        };
        assert_eq!(query.query_pairs(), vec![("tag_id", "3".to_string())]);
    }

    #[test]
    fn query_pairs_skip_empty_keyword() {
        let query = ListCulturalProperties {
            tag_id: None,
            keyword: Some(String::new()),
            has_movie: Some(true),
        };
        assert_eq!(
            query.query_pairs(),
            vec![("has_movie", "true".to_string())]
        );
    }

    #[test]
    fn empty_query_serializes_to_no_pairs() {
        assert!(ListCulturalProperties::default().query_pairs().is_empty());
        assert!(ListMovies::default().query_pairs().is_empty());
    }

    #[test]
    fn sign_up_validation_catches_obvious_mistakes() {
        assert!(
            validate_sign_up("a@b.jp", "visitor", "correct horse", "correct horse")
                .is_valid()
        );
        assert_eq!(
            validate_sign_up("not-an-email", "visitor", "password1", "password1"),
            SignUpValidation::EmailInvalid
        );
        assert_eq!(
            validate_sign_up("a@b.jp", "ab", "password1", "password1"),
            SignUpValidation::UsernameTooShort
        );
        assert_eq!(
            validate_sign_up("a@b.jp", "visitor", "password1", "password2"),
            SignUpValidation::PasswordMismatch
        );
    }

    #[test]
    fn partial_update_omits_unset_fields() {
        let update = UpdateCulturalProperty {
            name: Some("Great Bridge".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Great Bridge"}"#);
    }
}
