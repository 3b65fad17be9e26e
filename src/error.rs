//! quiet-hn error types

/// Message shown to end users when the front page cannot be assembled.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load top stories";

/// Message shown to end users when the page template fails.
pub const RENDER_FAILED_MESSAGE: &str = "Failed to process the template";

/// quiet-hn error types
#[derive(Debug, thiserror::Error)]
pub enum QuietHnError {
    // Upstream/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream answered with `null` (deleted or unknown item).
    #[error("empty response from upstream")]
    EmptyResponse,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The ranked id listing could not be fetched.
    ///
    /// Upstream detail is logged where the failure happens and deliberately
    /// not carried here.
    #[error("failed to load top stories")]
    Listing,

    #[error("render error: {0}")]
    Render(String),
}

impl QuietHnError {
    /// Message that is safe to show to an end user.
    ///
    /// Render failures get their own message; everything else collapses to
    /// the generic load failure so no upstream detail leaks into a response.
    pub fn public_message(&self) -> &'static str {
        match self {
            QuietHnError::Render(_) => RENDER_FAILED_MESSAGE,
            _ => LOAD_FAILED_MESSAGE,
        }
    }
}

/// Result type alias for quiet-hn operations
pub type Result<T> = std::result::Result<T, QuietHnError>;
