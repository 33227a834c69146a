use thiserror::Error;

/// Errors that can occur while building a request, talking to the eVatR
/// endpoint, or parsing its response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvatrError {
    /// The request is missing required data. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A field that every well-formed response carries is absent.
    #[error("missing field '{0}' in eVatR response")]
    MissingField(String),

    /// A qualified comparison field holds a value outside `A`..`D`.
    #[error("unexpected result type: {0}")]
    UnexpectedResultType(String),

    /// The payload is XML but does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The payload could not be decoded as XML.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// The configured endpoint URL is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network or HTTP status error from the transport.
    #[cfg(feature = "client")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl EvatrError {
    /// Name of the missing response field, if this is a [`EvatrError::MissingField`].
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) => Some(field),
            _ => None,
        }
    }
}
