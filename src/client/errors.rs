use super::ErrorDetail;

#[derive(Debug, thiserror::Error)]
pub enum RepustateError {
    #[error("InvalidCredentialError: {0}")]
    InvalidCredential(String),

    #[error("TransportError: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("MalformedResponseError: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("ApiError: {message}")]
    Api {
        message: String,
        details: Vec<ErrorDetail>,
    },

    #[error("MissingFieldError: expected field '{0}' missing from result")]
    MissingField(String),
}

impl RepustateError {
    pub(crate) fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepustateError>;
