use clap::Subcommand;
use nixgelato_client::{ApiClient, ApiError, BearerToken};

use crate::{config::ApiConfig, errors::CliError};

mod catalog;
mod payment_methods;
mod sell;

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products by category and the toppings
    Catalog,

    /// List the accepted payment methods
    PaymentMethods,

    /// Ring up a sale and register its invoice
    Sell(sell::SellArgs),
}

impl Command {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Returns the first error that stops the command.
    pub async fn run(self, api: &ApiConfig) -> Result<(), CliError> {
        match self {
            Self::Catalog => catalog::run(api).await,
            Self::PaymentMethods => payment_methods::run(),
            Self::Sell(args) => sell::run(api, args).await,
        }
    }
}

fn connect(api: &ApiConfig) -> Result<ApiClient, ApiError> {
    let token = BearerToken::from_stored(api.token.clone())?;

    ApiClient::new(&api.api_url, token)
}
