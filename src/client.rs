use reqwest::Response;
use serde::Serialize;

/// Thin wrapper over `reqwest::Client` for the Categories endpoints.
///
/// Every method returns the raw [`Response`]: the tests own all status and
/// body assertions, since most calls accept several outcomes depending on the
/// state of the target environment.
#[derive(Debug, Clone)]
pub struct CategoriesClient {
    base_url: String,
    http: reqwest::Client,
}

impl CategoriesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn get_category(&self, id: i64) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/categories/{}", self.base_url, id))
            .send()
            .await
    }

    pub async fn get_all_categories(&self) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/categories", self.base_url))
            .send()
            .await
    }

    pub async fn get_category_by_alias(&self, alias: &str) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/categories/alias/{}", self.base_url, alias))
            .send()
            .await
    }

    /// Accepts any serializable body so the tests can send deliberately
    /// incomplete payloads as well as [`crate::models::CreateCategoryRequest`].
    pub async fn create_category<B>(&self, body: &B) -> reqwest::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.http
            .post(format!("{}/categories", self.base_url))
            .json(body)
            .send()
            .await
    }

    pub async fn update_category<B>(&self, id: i64, body: &B) -> reqwest::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.http
            .put(format!("{}/categories/{}", self.base_url, id))
            .json(body)
            .send()
            .await
    }

    pub async fn delete_category(&self, id: i64) -> reqwest::Result<Response> {
        self.http
            .delete(format!("{}/categories/{}", self.base_url, id))
            .send()
            .await
    }
}
