use crate::config;
use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Thin wrapper over one reqwest client. No per-request timeout is
/// configured: a hung fetch blocks its round, and the only retry unit is the
/// whole run (RunController policy).
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .default_headers(config::BASE_HEADERS.clone())
            .build()
            .map_err(AppError::from)?;
        Ok(HttpClient { client })
    }

    pub async fn fetch_text(&self, url: &str) -> AppResult<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(AppError::from)?;

        resp.text().await.map_err(AppError::from)
    }

    pub async fn fetch_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(AppError::from)?;

        let bytes = resp.bytes().await.map_err(AppError::from)?;

        serde_json::from_slice(&bytes).map_err(|e| {
            let snippet_len = bytes.len().min(200);
            let snippet = String::from_utf8_lossy(&bytes[..snippet_len]);
            log(
                LogLevel::Warning,
                &format!(
                    "Failed to parse JSON from {} as {}: {}. Snippet: '{}'",
                    url,
                    std::any::type_name::<T>(),
                    e,
                    snippet
                ),
            );
            AppError::SerdeParse(e.to_string())
        })
    }
}
