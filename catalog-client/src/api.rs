//! Catalog backend API
//!
//! Typed calls for the endpoints the client consumes. Every response except
//! `/auth_config` carries a `success` flag; a falsy flag is an error even
//! with a 2xx status.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::client::AuthConfig;
use shared::response::{ActorList, ActorMutation, MovieList, MovieMutation};
use shared::{ActorPayload, ApiErrorBody, MoviePayload, Resource};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Backend operations used by the views
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /auth_config`, sent without a bearer token
    async fn auth_config(&self) -> ClientResult<AuthConfig>;

    async fn list_movies(&self, page: u32) -> ClientResult<MovieList>;
    async fn create_movie(&self, payload: &MoviePayload) -> ClientResult<MovieMutation>;
    async fn update_movie(&self, id: i64, payload: &MoviePayload) -> ClientResult<MovieMutation>;
    async fn delete_movie(&self, id: i64) -> ClientResult<MovieMutation>;

    async fn list_actors(&self, page: u32) -> ClientResult<ActorList>;
    async fn create_actor(&self, payload: &ActorPayload) -> ClientResult<ActorMutation>;
    async fn update_actor(&self, id: i64, payload: &ActorPayload) -> ClientResult<ActorMutation>;
    async fn delete_actor(&self, id: i64) -> ClientResult<ActorMutation>;

    /// Replace the bearer token used for subsequent calls
    fn set_token(&mut self, token: Option<String>);
}

/// [`CatalogApi`] over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ApiClient<H> {
    http: H,
}

impl<H: HttpClient> ApiClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    fn listing_path(resource: Resource, page: u32) -> String {
        format!("{}?page={}", resource.api_path(), page)
    }

    fn item_path(resource: Resource, id: i64) -> String {
        format!("{}/{}", resource.api_path(), id)
    }
}

/// Check the `success` flag, then decode the body
fn enveloped<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    if !value.is_object() {
        return Err(ClientError::InvalidResponse(format!(
            "expected a JSON object, got {value}"
        )));
    }
    let body: ApiErrorBody = serde_json::from_value(value.clone())?;
    if !body.success {
        return Err(ClientError::Api {
            status: 200,
            code: body.error_code,
            description: body
                .description
                .or_else(|| Some("Backend reported failure".to_string())),
        });
    }
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl<H: HttpClient> CatalogApi for ApiClient<H> {
    async fn auth_config(&self) -> ClientResult<AuthConfig> {
        self.http.get_anonymous("auth_config").await
    }

    async fn list_movies(&self, page: u32) -> ClientResult<MovieList> {
        let value: Value = self
            .http
            .get(&Self::listing_path(Resource::Movies, page))
            .await?;
        enveloped(value)
    }

    async fn create_movie(&self, payload: &MoviePayload) -> ClientResult<MovieMutation> {
        let value: Value = self.http.post(Resource::Movies.api_path(), payload).await?;
        enveloped(value)
    }

    async fn update_movie(&self, id: i64, payload: &MoviePayload) -> ClientResult<MovieMutation> {
        let value: Value = self
            .http
            .patch(&Self::item_path(Resource::Movies, id), payload)
            .await?;
        enveloped(value)
    }

    async fn delete_movie(&self, id: i64) -> ClientResult<MovieMutation> {
        let value: Value = self
            .http
            .delete(&Self::item_path(Resource::Movies, id))
            .await?;
        enveloped(value)
    }

    async fn list_actors(&self, page: u32) -> ClientResult<ActorList> {
        let value: Value = self
            .http
            .get(&Self::listing_path(Resource::Actors, page))
            .await?;
        enveloped(value)
    }

    async fn create_actor(&self, payload: &ActorPayload) -> ClientResult<ActorMutation> {
        let value: Value = self.http.post(Resource::Actors.api_path(), payload).await?;
        enveloped(value)
    }

    async fn update_actor(&self, id: i64, payload: &ActorPayload) -> ClientResult<ActorMutation> {
        let value: Value = self
            .http
            .patch(&Self::item_path(Resource::Actors, id), payload)
            .await?;
        enveloped(value)
    }

    async fn delete_actor(&self, id: i64) -> ClientResult<ActorMutation> {
        let value: Value = self
            .http
            .delete(&Self::item_path(Resource::Actors, id))
            .await?;
        enveloped(value)
    }

    fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enveloped_accepts_success() {
        let list: MovieList =
            enveloped(json!({"success": true, "movies": [], "total_movies": 0})).unwrap();
        assert!(list.movies.is_empty());
    }

    #[test]
    fn test_enveloped_rejects_falsy_success() {
        let err = enveloped::<MovieList>(json!({
            "success": false,
            "error_code": "unprocessable_entity",
            "description": "The request was unable to be fulfilled"
        }))
        .unwrap_err();
        assert_eq!(err.api_code(), Some("unprocessable_entity"));
    }

    #[test]
    fn test_enveloped_treats_missing_flag_as_failure() {
        let err = enveloped::<MovieList>(json!({"movies": []})).unwrap_err();
        assert!(matches!(err, ClientError::Api { code: None, .. }));
    }

    #[test]
    fn test_enveloped_rejects_non_object() {
        let err = enveloped::<MovieList>(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_paths() {
        type Api = ApiClient<crate::NetworkHttpClient>;
        assert_eq!(Api::listing_path(Resource::Movies, 2), "api/movies?page=2");
        assert_eq!(Api::item_path(Resource::Actors, 9), "api/actors/9");
    }
}
