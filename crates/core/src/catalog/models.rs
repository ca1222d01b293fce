//! Catalog Models

use crate::{ids::TypedId, money::Amount};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Topping Id
pub type ToppingId = TypedId<Topping>;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Stock above this is shown as plentiful.
pub const PLENTIFUL_STOCK: i64 = 10;

/// A product on sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Backend id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price before toppings
    pub price: Amount,

    /// Units in stock
    pub stock: i64,

    /// Whether toppings may be added
    pub allows_toppings: bool,

    /// Optional picture URL
    pub image: Option<String>,
}

impl Product {
    /// Whether at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock classification for display.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// Coarse stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than [`PLENTIFUL_STOCK`] units.
    Plenty,

    /// Between one and [`PLENTIFUL_STOCK`] units.
    Low,

    /// Nothing left.
    Out,
}

impl StockLevel {
    /// Classify a stock count.
    pub fn from_stock(stock: i64) -> Self {
        if stock > PLENTIFUL_STOCK {
            Self::Plenty
        } else if stock > 0 {
            Self::Low
        } else {
            Self::Out
        }
    }
}

/// An add-on applied to a single line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Topping {
    /// Backend id
    pub id: ToppingId,

    /// Display name
    pub name: String,

    /// Price added to the product
    pub price: Amount,
}

/// A named group of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Backend id, when the backend sends one
    pub id: Option<CategoryId>,

    /// Display name
    pub name: String,

    /// Products in this category
    pub products: Vec<Product>,
}
