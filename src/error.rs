use thiserror::Error;

/// Errors that can occur while inspecting a page
#[derive(Error, Debug)]
pub enum InspectError {
    /// Supplied URL is empty, unparseable, or not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure while fetching the target page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Target page answered with a non-success status
    #[error("Page returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}
