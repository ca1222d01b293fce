use std::io;

use crate::{errors::CliError, render};

pub(super) fn run() -> Result<(), CliError> {
    render::write_payment_methods(&mut io::stdout().lock())?;

    Ok(())
}
