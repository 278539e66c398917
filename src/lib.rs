pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod prober;

mod document;
mod extract;
mod fetcher;

use std::time::Duration;

use log::debug;
use url::Url;

pub use crate::builder::{MetadataInspector, MetadataInspectorBuilder};
pub use crate::config::InspectorConfig;
pub use crate::error::InspectError;
pub use crate::model::PageMetadata;
pub use crate::prober::{SiteProber, SiteResources};

use crate::document::ParsedDocument;
use crate::fetcher::{PageFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Fetch a page and extract its SEO and social-sharing metadata.
///
/// Fails only when the URL is invalid or the page itself cannot be
/// retrieved; robots.txt and sitemap probing are best-effort and reported
/// through the record's `sitemap_*`/`robots_txt_*` fields.
pub async fn inspect(url: &str) -> Result<PageMetadata, InspectError> {
    inspect_with_timeout(url, None).await
}

/// Like [`inspect`], with an explicit per-request timeout.
pub async fn inspect_with_timeout(
    url: &str,
    timeout: Option<Duration>,
) -> Result<PageMetadata, InspectError> {
    inspect_with_options(url, timeout, None).await
}

pub(crate) async fn inspect_with_options(
    url: &str,
    timeout: Option<Duration>,
    user_agent: Option<&str>,
) -> Result<PageMetadata, InspectError> {
    let target = validate_url(url)?;

    let fetcher = PageFetcher::new(
        timeout.unwrap_or(DEFAULT_TIMEOUT),
        user_agent.unwrap_or(DEFAULT_USER_AGENT),
    )?;

    let body = fetcher.fetch(target.as_str()).await?;
    let document = ParsedDocument::parse(&body);
    let mut record = extract::extract_markup(&document);

    let origin = target.origin().ascii_serialization();
    debug!("probing site resources under {origin}");
    let resources = SiteProber::new(fetcher.client()).probe(&origin).await;

    record.sitemap_url = resources.sitemap_url;
    record.sitemap_exists = resources.sitemap_exists;
    record.robots_txt_exists = resources.robots_txt_exists;
    record.robots_txt_content = resources.robots_txt_content;

    Ok(record)
}

/// Reject empty, unparseable, or non-http(s) input before any network
/// activity happens.
fn validate_url(url: &str) -> Result<Url, InspectError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(InspectError::InvalidUrl("URL must not be empty".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|err| InspectError::InvalidUrl(format!("{trimmed}: {err}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InspectError::InvalidUrl(format!(
            "unsupported scheme '{other}', expected http or https"
        ))),
    }
}
