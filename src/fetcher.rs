use crate::model::ImportError;

use reqwest::Client;
use tracing::debug;

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(user_agent: &str) -> Result<Self, ImportError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for FeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from feed", body.len());
        Ok(body)
    }
}
