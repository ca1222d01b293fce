//! CLI errors.

use std::io;

use nixgelato::register::RegisterError;
use nixgelato_client::{ApiError, SaleError};
use thiserror::Error;

/// Anything that stops a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Backend unreachable or refused a request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The order could not be built from the `--item` arguments.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// The sale was not registered.
    #[error(transparent)]
    Sale(#[from] SaleError),

    /// The invoice payload could not be rendered.
    #[error("failed to encode invoice: {0}")]
    Encode(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
