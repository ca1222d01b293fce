//! Backend seam.

use async_trait::async_trait;
use mockall::automock;
use nixgelato::{
    catalog::{CategoryRecord, ToppingRecord},
    checkout::{InvoiceReceipt, InvoiceRequest},
};

use crate::errors::ApiError;

/// Operations the point of sale needs from its backend.
#[automock]
#[async_trait(?Send)]
pub trait PosBackend {
    /// `GET /api/productos`: categories with their products.
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError>;

    /// `GET /api/toppings`: the shared topping list.
    async fn fetch_toppings(&self) -> Result<Vec<ToppingRecord>, ApiError>;

    /// `POST /api/facturas`: register a sale.
    async fn post_invoice(&self, invoice: &InvoiceRequest) -> Result<InvoiceReceipt, ApiError>;
}
