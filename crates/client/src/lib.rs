//! NixGelato Client
//!
//! REST client for the point of sale backend, and the catalog load and
//! checkout flows the front-ends build on.

pub mod api;
pub mod backend;
pub mod errors;
pub mod sale;
pub mod token;

pub use api::ApiClient;
pub use backend::PosBackend;
pub use errors::ApiError;
pub use sale::{SaleError, checkout, confirmation, load_catalog, submit_invoice};
pub use token::{BearerToken, TOKEN_STORAGE_KEY};
