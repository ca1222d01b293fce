//! Cart

use jiff::Timestamp;
use thiserror::Error;

use crate::money::{self, Amount};

pub mod line_item;
pub mod selection;

pub use line_item::{DEFAULT_SIZE, LineId, LineItem};
pub use selection::Selection;

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Quantities below one are rejected and the line is left untouched.
    #[error("cantidad inválida: {0}")]
    InvalidQuantity(i64),

    /// No line with this id.
    #[error("la línea {0} no está en el pedido")]
    LineNotFound(LineId),
}

/// Line items for one checkout session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for the selection with quantity one.
    ///
    /// Line ids stay unique: if another line of the same product was added in
    /// the same millisecond, the timestamp part is bumped.
    pub fn add(&mut self, selection: Selection, created_at: Timestamp) -> LineId {
        let unit_price = selection.unit_price();
        let (product, toppings) = selection.into_parts();

        let mut millis = created_at.as_millisecond();
        let mut id = LineId::new(product.id, millis);

        while self.contains(&id) {
            millis = millis.saturating_add(1);
            id = LineId::new(product.id, millis);
        }

        self.lines.push(LineItem::new(
            id.clone(),
            product,
            toppings,
            unit_price,
            created_at,
        ));

        id
    }

    /// Remove a line, returning it if it existed.
    pub fn remove(&mut self, id: &LineId) -> Option<LineItem> {
        let position = self.lines.iter().position(|line| line.id() == id)?;

        Some(self.lines.remove(position))
    }

    /// Change the quantity of a line and recompute its subtotal.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is below one (or too large).
    /// - [`CartError::LineNotFound`]: no line has this id.
    pub fn set_quantity(&mut self, id: &LineId, quantity: i64) -> Result<(), CartError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity >= 1)
            .ok_or(CartError::InvalidQuantity(quantity))?;

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id() == id)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;

        line.set_quantity(quantity);

        Ok(())
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> Amount {
        money::sum(self.lines.iter().map(LineItem::subtotal))
    }

    /// Look up a line.
    pub fn get(&self, id: &LineId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Whether a line with this id exists.
    pub fn contains(&self, id: &LineId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over lines in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
