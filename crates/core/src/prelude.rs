//! NixGelato prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, DEFAULT_SIZE, LineId, LineItem, Selection},
    catalog::{
        Catalog, CatalogError, Category, CategoryRecord, Product, ProductId, ProductRecord,
        StockLevel, Topping, ToppingId, ToppingRecord,
    },
    checkout::{
        CheckoutError, CheckoutForm, InvoiceId, InvoiceLine, InvoiceReceipt, InvoiceRequest,
    },
    landing::{METRICS, Metric, MetricRotation, ROTATION_PERIOD},
    money::{Amount, CURRENCY, MoneyParseError, format_money, pesos},
    payments::PaymentMethod,
    register::{Phase, Register, RegisterError},
    totals::OrderTotals,
};
