//! Client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session token; the user has to log in.
    #[error("no hay sesión activa")]
    MissingToken,

    /// The configured API base URL is not a valid absolute URL.
    #[error("URL de API inválida {url:?}: {source}")]
    InvalidBaseUrl {
        /// Configured value
        url: String,

        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// Transport failure or undecodable body.
    #[error("error de red: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The message is the
    /// backend's own when it sent one.
    #[error("{message}")]
    Rejected {
        /// Response status
        status: StatusCode,

        /// Message for the cashier
        message: String,
    },

    /// The body was JSON but not the expected shape.
    #[error("respuesta inesperada del servidor: {0}")]
    Decode(#[from] serde_json::Error),
}
