const DEFAULT_BASE_URL: &str = "http://localhost:8004/api";

/// Resolves the base URL of the Categories service under test.
///
/// Honors a `.env` file, then the `CATEGORIES_API_URL` environment variable,
/// falling back to the default local address.
pub fn api_base_url() -> String {
    dotenv::dotenv().ok();
    std::env::var("CATEGORIES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
