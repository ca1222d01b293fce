//! Line Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use smallvec::SmallVec;

use crate::{
    catalog::{Product, ProductId, Topping},
    money::{self, Amount},
};

/// Size label for every line; the shop sells a single size.
pub const DEFAULT_SIZE: &str = "Único";

/// Line id: `{product id}-{creation unix millis}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineId(String);

impl LineId {
    /// Build the id for a product added at `millis`.
    pub fn new(product: ProductId, millis: i64) -> Self {
        Self(format!("{product}-{millis}"))
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One customized product in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: LineId,
    product: Product,
    size: &'static str,
    toppings: SmallVec<[Topping; 4]>,
    quantity: u32,
    unit_price: Amount,
    subtotal: Amount,
    created_at: Timestamp,
}

impl LineItem {
    pub(crate) fn new(
        id: LineId,
        product: Product,
        toppings: SmallVec<[Topping; 4]>,
        unit_price: Amount,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            product,
            size: DEFAULT_SIZE,
            toppings,
            quantity: 1,
            unit_price,
            subtotal: unit_price,
            created_at,
        }
    }

    /// Line id
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Product snapshot taken when the line was added
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Size label
    pub fn size(&self) -> &'static str {
        self.size
    }

    /// Toppings on this line
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Units ordered, always at least one
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Product plus toppings, rounded
    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// `unit price × quantity`
    pub fn subtotal(&self) -> Amount {
        self.subtotal
    }

    /// When the line was added
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.subtotal = money::times(self.unit_price, quantity);
    }
}
