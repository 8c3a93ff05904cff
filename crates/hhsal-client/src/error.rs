use thiserror::Error;

/// Errors that abort a vacancy fetch. None of them carries partial results.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The listings endpoint answered a page request with a non-2xx status.
    #[error("listings API returned HTTP {status} for page {page}")]
    ApiStatus { status: u16, page: u32 },

    /// The page envelope (`items`, `pages`) did not have the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached: API reported more than {max_pages} pages")]
    PaginationLimit { max_pages: u32 },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
