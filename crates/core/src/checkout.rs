//! Checkout
//!
//! Validation of the payment form and the invoice payload posted to
//! `/api/facturas`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, LineItem},
    catalog::{ProductId, ToppingId},
    ids::TypedId,
    money::{self, Amount, serialize_pesos},
    totals::OrderTotals,
};

/// Reasons a sale cannot be submitted. Messages are shown to the cashier as-is.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Nothing to charge for.
    #[error("No hay productos en el pedido.")]
    EmptyCart,

    /// No payment method picked.
    #[error("Seleccione método de pago.")]
    MissingPaymentMethod,

    /// The amount received is below the total.
    #[error("El pago es insuficiente.")]
    InsufficientPayment {
        /// Amount due
        total: Amount,

        /// Amount received
        paid: Amount,
    },
}

/// Payment panel inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    /// Customer name, may be blank
    pub customer: String,

    /// Chosen payment method name
    pub payment_method: Option<String>,

    /// Requested discount, clamped when totals are computed
    pub discount: Amount,

    /// Amount handed over by the customer
    pub amount_paid: Amount,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            customer: String::new(),
            payment_method: None,
            discount: money::zero(),
            amount_paid: money::zero(),
        }
    }
}

impl CheckoutForm {
    /// The payment method, ignoring blank values.
    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method
            .as_deref()
            .map(str::trim)
            .filter(|method| !method.is_empty())
    }

    /// Totals for a cart using this form's discount and amount received.
    pub fn totals(&self, cart: &Cart) -> OrderTotals {
        OrderTotals::compute(cart.subtotal(), self.discount, self.amount_paid)
    }
}

/// Whether the submit button is enabled: the cart has lines and a payment
/// method is chosen. The amount received is checked on submit.
pub fn can_submit(cart: &Cart, form: &CheckoutForm) -> bool {
    !cart.is_empty() && form.payment_method().is_some()
}

/// Validate the form against the cart and build the invoice payload.
///
/// # Errors
///
/// Checked in order:
/// - [`CheckoutError::EmptyCart`]
/// - [`CheckoutError::MissingPaymentMethod`]
/// - [`CheckoutError::InsufficientPayment`]
pub fn prepare(cart: &Cart, form: &CheckoutForm) -> Result<InvoiceRequest, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let payment_method = form
        .payment_method()
        .ok_or(CheckoutError::MissingPaymentMethod)?;

    let totals = form.totals(cart);

    if !totals.is_covered_by(form.amount_paid) {
        return Err(CheckoutError::InsufficientPayment {
            total: totals.total,
            paid: form.amount_paid,
        });
    }

    Ok(InvoiceRequest {
        customer: form.customer.trim().to_string(),
        subtotal: totals.subtotal,
        discount: totals.discount,
        total: totals.total,
        payment_method: payment_method.to_string(),
        lines: cart.iter().map(InvoiceLine::from).collect(),
    })
}

/// Body of `POST /api/facturas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRequest {
    /// Customer name, without surrounding whitespace
    #[serde(rename = "cliente")]
    pub customer: String,

    /// Sum of line subtotals
    #[serde(serialize_with = "serialize_pesos")]
    pub subtotal: Amount,

    /// Clamped discount
    #[serde(rename = "descuento", serialize_with = "serialize_pesos")]
    pub discount: Amount,

    /// Amount due
    #[serde(serialize_with = "serialize_pesos")]
    pub total: Amount,

    /// Payment method name
    #[serde(rename = "metodo_pago")]
    pub payment_method: String,

    /// One entry per cart line
    #[serde(rename = "productos")]
    pub lines: Vec<InvoiceLine>,
}

/// Invoice entry for one cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    /// Product id
    #[serde(rename = "id")]
    pub product: ProductId,

    /// Units
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    /// Unit price including toppings
    #[serde(rename = "precio", serialize_with = "serialize_pesos")]
    pub unit_price: Amount,

    /// Size label
    #[serde(rename = "tamano")]
    pub size: String,

    /// Topping ids
    pub toppings: Vec<ToppingId>,
}

impl From<&LineItem> for InvoiceLine {
    fn from(line: &LineItem) -> Self {
        Self {
            product: line.product().id,
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            size: line.size().to_string(),
            toppings: line.toppings().iter().map(|topping| topping.id).collect(),
        }
    }
}

/// Invoice Id
pub type InvoiceId = TypedId<InvoiceReceipt>;

/// Successful response of `POST /api/facturas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InvoiceReceipt {
    /// Number of the registered invoice
    #[serde(rename = "id_factura")]
    pub id: InvoiceId,
}
