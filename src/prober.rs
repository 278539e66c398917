//! Best-effort discovery of robots.txt and a sitemap under a site origin.
//!
//! Probing never fails the surrounding extraction: every transport error or
//! non-2xx answer is absorbed locally and reported as "not found".

use log::debug;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Candidate sitemap locations, probed in order when robots.txt does not
/// announce one. First 2xx wins.
const SITEMAP_CANDIDATES: &[&str] = &[
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap/",
    "/sitemap/sitemap.xml",
];

/// What the prober found under one origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteResources {
    pub sitemap_url: Option<String>,
    pub sitemap_exists: bool,
    pub robots_txt_exists: bool,
    pub robots_txt_content: Option<String>,
}

pub struct SiteProber {
    client: Client,
}

impl SiteProber {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Probe `{origin}/robots.txt`, then the fixed candidate paths.
    ///
    /// A `Sitemap:` line in robots.txt always takes precedence over path
    /// probing; the candidate loop only runs when robots.txt yielded nothing.
    pub async fn probe(&self, origin: &str) -> SiteResources {
        let mut resources = SiteResources::default();

        if let Some(response) = self.fetch_ok(&format!("{origin}/robots.txt")).await {
            resources.robots_txt_exists = true;
            match response.text().await {
                Ok(body) => {
                    if let Some(sitemap) = sitemap_from_robots(&body) {
                        resources.sitemap_url = Some(sitemap);
                        resources.sitemap_exists = true;
                    }
                    resources.robots_txt_content = Some(body);
                }
                Err(err) => debug!("failed to read robots.txt body from {origin}: {err}"),
            }
        }

        if !resources.sitemap_exists {
            for path in SITEMAP_CANDIDATES {
                let candidate = format!("{origin}{path}");
                if self.fetch_ok(&candidate).await.is_some() {
                    resources.sitemap_url = Some(candidate);
                    resources.sitemap_exists = true;
                    break;
                }
            }
        }

        resources
    }

    /// GET a URL, returning the response only on a 2xx answer. Transport
    /// failures and error statuses are logged and swallowed.
    async fn fetch_ok(&self, url: &str) -> Option<Response> {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => Some(response),
            Ok(response) => {
                debug!("probe {url} returned status {}", response.status());
                None
            }
            Err(err) => {
                debug!("probe {url} failed: {err}");
                None
            }
        }
    }
}

/// First `Sitemap:` declaration in a robots.txt body, matched
/// case-insensitively anywhere in a line. The announced URL is trimmed.
fn sitemap_from_robots(body: &str) -> Option<String> {
    for line in body.lines() {
        let lowered = line.to_ascii_lowercase();
        if let Some(pos) = lowered.find("sitemap:") {
            let value = line[pos + "sitemap:".len()..].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
