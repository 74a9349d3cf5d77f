use crate::{
    CulturalProperty, CulturalPropertyId, Movie, MovieId, Page, Paginated,
    Tag, requests, responses,
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// One instance per call site; constructing one is cheap. The repository
/// functions below are stateless: each translates a typed query into a URL
/// and an HTTP call and decodes the JSON response. No retries.
pub struct APIClient {
    pub address: String,
    /// Token from local storage, attached as `Authorization: Token <value>`
    /// when present. Absence yields an unauthenticated request; the server
    /// is the authority on authorization failure.
    pub auth_token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => {
                request.header("Authorization", format!("Token {token}"))
            }
            None => request,
        }
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ReqwestResult {
        let request = self
            .inner_client
            .get(self.format_url(path))
            .query(query);
        self.authorize(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request =
            self.inner_client.patch(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// List cultural properties matching the query, without pagination
    /// metadata. For callers that want the full filtered set at once.
    pub async fn list_cultural_properties(
        &self,
        query: &requests::ListCulturalProperties,
    ) -> Result<Vec<CulturalProperty>, ClientError> {
        let response =
            self.get("cultural_properties", &query.query_pairs()).await?;
        ok_results(response).await
    }

    /// One page of cultural properties plus the total count, for the
    /// paginated list view.
    pub async fn cultural_properties_page(
        &self,
        page: u32,
        limit: u32,
        query: &requests::ListCulturalProperties,
    ) -> Result<Page<CulturalProperty>, ClientError> {
        let mut pairs = query.query_pairs();
        pairs.push(("page", page.to_string()));
        pairs.push(("limit", limit.to_string()));
        let response = self.get("cultural_properties", &pairs).await?;
        ok_page(response).await
    }

    pub async fn find_cultural_property(
        &self,
        id: CulturalPropertyId,
    ) -> Result<CulturalProperty, ClientError> {
        let response =
            self.get(&format!("cultural_properties/{id}"), &[]).await?;
        ok_body(response).await
    }

    pub async fn create_cultural_property(
        &self,
        details: &requests::CreateCulturalProperty,
    ) -> Result<CulturalProperty, ClientError> {
        let response = self.post("cultural_properties", details).await?;
        ok_body(response).await
    }

    pub async fn update_cultural_property(
        &self,
        id: CulturalPropertyId,
        details: &requests::UpdateCulturalProperty,
    ) -> Result<CulturalProperty, ClientError> {
        let response = self
            .patch(&format!("cultural_properties/{id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_cultural_property(
        &self,
        id: CulturalPropertyId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("cultural_properties/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_movies(
        &self,
        query: &requests::ListMovies,
    ) -> Result<Vec<Movie>, ClientError> {
        let response = self.get("movies", &query.query_pairs()).await?;
        ok_results(response).await
    }

    pub async fn find_movie(&self, id: MovieId) -> Result<Movie, ClientError> {
        let response = self.get(&format!("movies/{id}"), &[]).await?;
        ok_body(response).await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        let response = self.get("tags", &[]).await?;
        ok_results(response).await
    }

    /// One page of the active-user ranking.
    pub async fn active_users_page(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<responses::ActiveUser>, ClientError> {
        let pairs =
            [("page", page.to_string()), ("limit", limit.to_string())];
        let response = self.get("active_users", &pairs).await?;
        ok_page(response).await
    }

    pub async fn list_announcements(
        &self,
    ) -> Result<Vec<responses::Announcement>, ClientError> {
        let response = self.get("announcements", &[]).await?;
        ok_results(response).await
    }

    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<(), ClientError> {
        let response = self.post("users", details).await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<responses::AuthToken, ClientError> {
        let response = self.post("login", credentials).await?;
        ok_body(response).await
    }

    /// Get the current user's profile information. Requires a token.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.get("users/me", &[]).await?;
        ok_body(response).await
    }

    /// Submit raw CSV text for server-side parsing and validation. Nothing
    /// is persisted; the response describes what an import would do.
    pub async fn import_preview(
        &self,
        details: &requests::ImportPreview,
    ) -> Result<Vec<responses::ImportPreviewRow>, ClientError> {
        let response = self.post("imports/preview", details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

/// Unwrap a paginated envelope, surfacing only the results. Callers that
/// care about the total count use [`ok_page`] instead.
async fn ok_results<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ClientError> {
    let envelope: Paginated<T> = ok_body(response).await?;
    Ok(envelope.results)
}

/// Unwrap a paginated envelope into one page plus the total count.
async fn ok_page<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Page<T>, ClientError> {
    let envelope: Paginated<T> = ok_body(response).await?;
    Ok(Page { data: envelope.results, total: envelope.count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagId;

    fn client(token: Option<&str>) -> APIClient {
        APIClient {
            address: "http://localhost:8000".to_string(),
            auth_token: token.map(String::from),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn urls_are_rooted_at_the_versioned_api_path() {
        let client = client(None);
        assert_eq!(
            client.format_url("cultural_properties"),
            "http://localhost:8000/api/v1/cultural_properties"
        );
        assert_eq!(
            client.format_url("cultural_properties/7"),
            "http://localhost:8000/api/v1/cultural_properties/7"
        );
    }

    // Requests are built but never sent; this checks the wire shape only.
    #[test]
    fn tag_filter_becomes_a_query_parameter() {
        let client = client(None);
        let query = requests::ListCulturalProperties {
            tag_id: Some(TagId(3)),
            ..Default::default()
        };
        let request = client
            .inner_client
            .get(client.format_url("cultural_properties"))
            .query(&query.query_pairs())
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/v1/cultural_properties?tag_id=3"
        );
    }

    #[test]
    fn page_and_limit_are_appended_after_filters() {
        let client = client(None);
        let query = requests::ListCulturalProperties {
            keyword: Some("bridge".to_string()),
            ..Default::default()
        };
        let mut pairs = query.query_pairs();
        pairs.push(("page", "2".to_string()));
        pairs.push(("limit", "12".to_string()));
        let request = client
            .inner_client
            .get(client.format_url("cultural_properties"))
            .query(&pairs)
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/v1/cultural_properties?keyword=bridge&page=2&limit=12"
        );
    }

    #[test]
    fn token_is_attached_when_present() {
        let client = client(Some("secret"));
        let request = client
            .authorize(
                client.inner_client.post(client.format_url("imports/preview")),
            )
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Token secret"
        );
    }

    #[test]
    fn missing_token_yields_an_unauthenticated_request() {
        let client = client(None);
        let request = client
            .authorize(
                client.inner_client.post(client.format_url("imports/preview")),
            )
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }
}
