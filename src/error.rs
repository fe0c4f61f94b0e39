use thiserror::Error;

/// Fatal scrape failures surfaced to the caller
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The requested URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Neither the static fetch nor the rendered fetch produced a document
    #[error("no content obtained for {0}: static fetch and rendering both failed")]
    NoContent(String),
}

/// Errors contained within the render layer. These are carried as data in the
/// render outcome and never abort the scrape: whatever document and visited
/// URLs were accumulated before the failure are still used for extraction.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Could not establish a WebDriver session
    #[error("failed to connect to WebDriver: {0}")]
    Session(String),

    /// Navigation or DOM read failed
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A bounded wait expired
    #[error("timed out waiting for {0}")]
    Timeout(String),

    /// A scroll or click action failed mid-loop
    #[error("interaction failed: {0}")]
    Interaction(String),
}

impl From<fantoccini::error::CmdError> for RenderError {
    fn from(e: fantoccini::error::CmdError) -> Self {
        RenderError::Navigation(e.to_string())
    }
}
