//! Byte fetching for avatar URLs.

use std::future::Future;

use crate::error::LoadError;

/// Something that can fetch the raw bytes behind a URI.
///
/// The loader thread calls this from Tokio tasks, so the returned future must
/// be `Send`.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;
}

/// HTTP(S) fetcher backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, max_bytes: u64) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, max_bytes })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>, LoadError> {
        let url = reqwest::Url::parse(uri)
            .map_err(|e| LoadError::Network(format!("invalid avatar url {}: {}", uri, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LoadError::Network(format!(
                "unsupported url scheme: {}",
                url.scheme()
            )));
        }

        let mut response = self.client.get(url).send().await?.error_for_status()?;

        if let Some(len) = response.content_length() {
            if len > self.max_bytes {
                return Err(LoadError::Network(format!(
                    "avatar too large: {} bytes (limit {})",
                    len, self.max_bytes
                )));
            }
        }

        // Servers may omit or lie about Content-Length, so enforce while reading
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(LoadError::Network(format!(
                    "avatar exceeded {} bytes",
                    self.max_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}
