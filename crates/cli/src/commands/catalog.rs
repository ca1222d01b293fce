use std::io;

use nixgelato_client::load_catalog;

use crate::{config::ApiConfig, errors::CliError, render};

use super::connect;

pub(super) async fn run(api: &ApiConfig) -> Result<(), CliError> {
    let client = connect(api)?;
    let catalog = load_catalog(&client).await?;

    render::write_catalog(&mut io::stdout().lock(), &catalog)?;

    Ok(())
}
