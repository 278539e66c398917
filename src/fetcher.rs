use std::time::Duration;

use reqwest::Client;

use crate::error::InspectError;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SeoInspectBot/0.3; +https://github.com/seo-inspect/seo-inspect)";

/// Fetches the primary target page.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, InspectError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// The underlying client, shared with the prober so every outbound
    /// request carries the same timeout and user agent.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// GET the page and return its body. Non-2xx statuses are fatal here,
    /// unlike in the prober.
    pub async fn fetch(&self, url: &str) -> Result<String, InspectError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InspectError::Status(status));
        }
        response
            .text()
            .await
            .map_err(|err| InspectError::Body(err.to_string()))
    }
}
