/// Response arrived but is not a body this client can use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("Expected JSON response but received {content_type}")]
    UnexpectedContentType { content_type: String },
    #[error("Expected JSON response but received no content type")]
    MissingContentType,
    #[error("Response is missing the `{field}` field")]
    MissingField { field: &'static str },
    #[error("Malformed JSON response: {message}")]
    Malformed { message: String },
    #[error("Response larger than {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("scrape failed: {0}")]
    Scrape(Box<ApiError>),
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        ApiError::Network(err.to_string())
    }

    pub(crate) fn into_scrape(self) -> Self {
        match self {
            ApiError::Scrape(_) => self,
            other => ApiError::Scrape(Box::new(other)),
        }
    }
}
