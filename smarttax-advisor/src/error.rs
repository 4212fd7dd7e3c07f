use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviceError {
    /// The API key environment variable is unset or empty.
    #[error("advice API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("advice service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The model produced no candidates or only blank text.
    #[error("advice service returned an empty response")]
    EmptyResponse,
}
