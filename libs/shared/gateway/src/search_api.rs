use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use shared_config::AppConfig;

/// JSON client for the external search collaborator.
pub struct SearchApiClient {
    client: Client,
    base_url: String,
}

impl SearchApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.search_api_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if self.base_url.is_empty() {
            return Err(anyhow!("Search API URL is not configured"));
        }

        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url)
            .headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Search API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                404 => anyhow!("Resource not found: {}", error_text),
                422 => anyhow!("Rejected search payload: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_sends_json_and_decodes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(body_json(json!({"distrito": "lince"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"ok": true}])))
            .mount(&mock_server)
            .await;

        let client = SearchApiClient::new(&AppConfig::with_base_url(mock_server.uri()));
        let result: Vec<Value> = client.post("/echo", &json!({"distrito": "lince"})).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["ok"], true);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = SearchApiClient::new(&AppConfig::with_base_url(mock_server.uri()));
        let result: Result<Value> = client.get("/broken").await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[tokio::test]
    async fn test_unconfigured_base_url_fails_fast() {
        let client = SearchApiClient::new(&AppConfig::with_base_url(""));
        let result: Result<Value> = client.get("/anything").await;
        assert!(result.is_err());
    }
}
