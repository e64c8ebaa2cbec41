use thiserror::Error;

/// Anything that went wrong between issuing a request and holding its
/// decoded body. The only failure kind the front end knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered {code} {text}")]
    Status { code: u16, text: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn network(msg: impl Into<String>) -> Self {
        TransportError::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        TransportError::Decode(msg.into())
    }
}
