use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use store::config::ApiConfig;
use store::{
    ApiError, ApiResult, AuthToken, Credentials, FoodgramClient, Page, PasswordChange, Recipe,
    RecipeQuery, RecipeSummary, Subscription, SubscriptionQuery, User,
};

use crate::errors::error_from_status;

/// [`FoodgramClient`] over the Foodgram REST API.
///
/// Cheap to clone; clones share the connection pool. The token, when set, is
/// sent as `Authorization: Token <key>` on every request.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for HttpClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// A client sharing this one's pool, authenticated with `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Token {token}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let err = error_from_status(status.as_u16(), &body);
        tracing::warn!("{url} answered {status}: {err}");
        Err(err)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        self.send(builder)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.send(builder).await.map(|_| ())
    }
}

impl FoodgramClient for HttpClient {
    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<String> {
        let token: AuthToken = self
            .json(self.request(Method::POST, "auth/token/login/").json(credentials))
            .await?;
        tracing::info!("signed in as {}", credentials.email);
        Ok(token.auth_token)
    }

    async fn sign_out(&self) -> ApiResult<()> {
        self.empty(self.request(Method::POST, "auth/token/logout/"))
            .await
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.json(self.request(Method::GET, "users/me/")).await
    }

    async fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        self.empty(self.request(Method::POST, "users/set_password/").json(change))
            .await
    }

    async fn get_recipes(&self, query: &RecipeQuery) -> ApiResult<Page<Recipe>> {
        self.json(self.request(Method::GET, "recipes/").query(&query.to_pairs()))
            .await
    }

    async fn add_to_cart(&self, recipe_id: u64) -> ApiResult<RecipeSummary> {
        self.json(self.request(Method::GET, &format!("recipes/{recipe_id}/shopping_cart/")))
            .await
    }

    async fn remove_from_cart(&self, recipe_id: u64) -> ApiResult<()> {
        self.empty(self.request(Method::DELETE, &format!("recipes/{recipe_id}/shopping_cart/")))
            .await
    }

    async fn add_to_favorites(&self, recipe_id: u64) -> ApiResult<RecipeSummary> {
        self.json(self.request(Method::GET, &format!("recipes/{recipe_id}/favorite/")))
            .await
    }

    async fn remove_from_favorites(&self, recipe_id: u64) -> ApiResult<()> {
        self.empty(self.request(Method::DELETE, &format!("recipes/{recipe_id}/favorite/")))
            .await
    }

    async fn download_shopping_list(&self) -> ApiResult<String> {
        self.send(self.request(Method::GET, "recipes/download_shopping_cart/"))
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_subscriptions(&self, query: &SubscriptionQuery) -> ApiResult<Page<Subscription>> {
        self.json(self.request(Method::GET, "users/subscriptions/").query(&query.to_pairs()))
            .await
    }

    async fn unsubscribe(&self, author_id: u64) -> ApiResult<()> {
        self.empty(self.request(Method::DELETE, &format!("users/{author_id}/subscribe/")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new("http://localhost/api/");
        assert_eq!(client.base_url(), "http://localhost/api");
        assert_eq!(client.url("recipes/"), "http://localhost/api/recipes/");
        assert_eq!(client.url("/users/me/"), "http://localhost/api/users/me/");
    }

    #[test]
    fn test_with_token_keeps_base() {
        let anonymous = HttpClient::from_config(&ApiConfig::default());
        let signed_in = anonymous.with_token(Some("abc".to_string()));
        assert_eq!(signed_in.base_url(), anonymous.base_url());
        assert_eq!(signed_in.with_token(None), anonymous);
        assert_ne!(signed_in, anonymous);
    }

    #[test]
    fn test_authorization_header() {
        let client = HttpClient::new("http://localhost/api").with_token(Some("abc".to_string()));
        let request = client.request(Method::GET, "users/me/").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost/api/users/me/");
        assert_eq!(request.headers()["Authorization"], "Token abc");

        let anonymous = HttpClient::new("http://localhost/api");
        let request = anonymous.request(Method::GET, "recipes/").build().unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn test_recipe_query_string() {
        let client = HttpClient::new("http://localhost/api");
        let request = client
            .request(Method::GET, "recipes/")
            .query(&RecipeQuery::shopping_cart(999).to_pairs())
            .build()
            .unwrap();
        assert_eq!(
            request.url().query(),
            Some("page=1&limit=999&is_in_shopping_cart=1")
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = HttpClient::new("http://127.0.0.1:9");
        let result = client.current_user().await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
