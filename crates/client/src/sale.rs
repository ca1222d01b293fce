//! Sale flows shared by the front-ends.

use nixgelato::{
    catalog::Catalog,
    checkout::{CheckoutError, InvoiceReceipt, InvoiceRequest},
    money,
    register::Register,
};
use thiserror::Error;
use tracing::{error, info};

use crate::{backend::PosBackend, errors::ApiError};

/// Why a sale was not registered. Display strings are the cashier alerts.
#[derive(Debug, Error)]
pub enum SaleError {
    /// The order did not pass validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CheckoutError),

    /// The backend refused the invoice or could not be reached.
    #[error("❌ Error: {0}")]
    Api(#[from] ApiError),
}

/// Fetch categories and toppings concurrently and build the catalog.
///
/// # Errors
///
/// Fails when either request fails.
pub async fn load_catalog<B>(backend: &B) -> Result<Catalog, ApiError>
where
    B: PosBackend + ?Sized,
{
    let (categories, toppings) =
        futures::try_join!(backend.fetch_categories(), backend.fetch_toppings())?;

    let catalog = Catalog::from_records(categories, toppings);

    info!(
        products = catalog.product_count(),
        toppings = catalog.toppings().len(),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Post a validated invoice.
///
/// # Errors
///
/// Returns the backend's error unchanged.
pub async fn submit_invoice<B>(
    backend: &B,
    invoice: &InvoiceRequest,
) -> Result<InvoiceReceipt, ApiError>
where
    B: PosBackend + ?Sized,
{
    match backend.post_invoice(invoice).await {
        Ok(receipt) => {
            info!(
                invoice = %receipt.id,
                total = %money::format_money(&invoice.total),
                payment_method = %invoice.payment_method,
                "invoice registered"
            );

            Ok(receipt)
        }
        Err(err) => {
            error!(error = %err, "invoice not registered");

            Err(err)
        }
    }
}

/// Validate the register's order, post it and reset the register on success.
///
/// On failure the register is left untouched so the cashier can retry.
///
/// # Errors
///
/// - [`SaleError::Invalid`] when validation fails; nothing is sent
/// - [`SaleError::Api`] when the backend rejects the invoice
pub async fn checkout<B>(backend: &B, register: &mut Register) -> Result<InvoiceReceipt, SaleError>
where
    B: PosBackend + ?Sized,
{
    let invoice = register.prepare_invoice()?;
    let receipt = submit_invoice(backend, &invoice).await?;

    register.complete_sale();

    Ok(receipt)
}

/// Message shown after a sale is registered.
pub fn confirmation(receipt: &InvoiceReceipt) -> String {
    format!("✅ Factura #{} registrada correctamente", receipt.id)
}
