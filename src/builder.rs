use std::time::Duration;

use crate::{inspect_with_options, InspectError, PageMetadata};

/// Builder for configuring and executing a page inspection
#[derive(Debug, Default)]
pub struct MetadataInspectorBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MetadataInspectorBuilder {
    /// Set the URL of the page to inspect
    ///
    /// # Example
    /// ```
    /// use seo_inspect::MetadataInspector;
    ///
    /// let builder = MetadataInspector::builder()
    ///     .url("https://example.com");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set a timeout applied to each outbound request
    ///
    /// # Example
    /// ```
    /// use seo_inspect::MetadataInspector;
    /// use std::time::Duration;
    ///
    /// let builder = MetadataInspector::builder()
    ///     .url("https://example.com")
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the user agent sent with every outbound request
    ///
    /// # Example
    /// ```
    /// use seo_inspect::MetadataInspector;
    ///
    /// let builder = MetadataInspector::builder()
    ///     .url("https://example.com")
    ///     .user_agent("MyCrawler/1.0 (+https://example.org/bot)");
    /// ```
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Execute the inspection
    ///
    /// # Errors
    /// Returns `InspectError` if:
    /// - No URL was specified
    /// - The URL is empty, unparseable, or not http(s)
    /// - The page fetch fails or returns a non-success status
    ///
    /// Probe failures (robots.txt, sitemap candidates) never error; they
    /// surface as `false`/absent fields in the record.
    ///
    /// # Example
    /// ```no_run
    /// # use seo_inspect::MetadataInspector;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let record = MetadataInspector::builder()
    ///     .url("https://example.com")
    ///     .build()
    ///     .await?;
    /// println!("{:?}", record.og_title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<PageMetadata, InspectError> {
        let url = self
            .url
            .ok_or_else(|| InspectError::Builder("No URL specified. Use .url()".to_string()))?;

        inspect_with_options(&url, self.timeout, self.user_agent.as_deref()).await
    }
}

/// Main entry point for the builder API
pub struct MetadataInspector;

impl MetadataInspector {
    /// Creates a new builder for inspecting a page
    ///
    /// # Example
    /// ```
    /// use seo_inspect::MetadataInspector;
    ///
    /// let builder = MetadataInspector::builder();
    /// ```
    pub fn builder() -> MetadataInspectorBuilder {
        MetadataInspectorBuilder::default()
    }
}
