//! `--item` argument: `PRODUCT[:TOPPING,...][xQTY]`.

use std::{num::ParseIntError, str::FromStr};

use nixgelato::catalog::{ProductId, ToppingId};
use thiserror::Error;

/// Malformed `--item` value.
#[derive(Debug, Error, PartialEq)]
pub enum ItemSpecError {
    /// Product id is not a number.
    #[error("invalid product id {input:?}: {source}")]
    InvalidProduct {
        /// Offending text
        input: String,

        /// Parse failure
        #[source]
        source: ParseIntError,
    },

    /// Topping id is not a number.
    #[error("invalid topping id {input:?}: {source}")]
    InvalidTopping {
        /// Offending text
        input: String,

        /// Parse failure
        #[source]
        source: ParseIntError,
    },

    /// Quantity is not a whole number.
    #[error("invalid quantity {input:?}: {source}")]
    InvalidQuantity {
        /// Offending text
        input: String,

        /// Parse failure
        #[source]
        source: ParseIntError,
    },

    /// Quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// One product to ring up, with its toppings and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    /// Product to add
    pub product: ProductId,

    /// Toppings to toggle on, in order
    pub toppings: Vec<ToppingId>,

    /// Units, at least one
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        let (body, quantity) = match input.rsplit_once(['x', 'X']) {
            Some((body, quantity)) => (body, parse_quantity(quantity)?),
            None => (input, 1),
        };

        let (product, toppings) = body.split_once(':').unwrap_or((body, ""));

        let product = product
            .trim()
            .parse()
            .map(ProductId::new)
            .map_err(|source| ItemSpecError::InvalidProduct {
                input: product.to_string(),
                source,
            })?;

        let mut topping_ids = Vec::new();

        for topping in toppings.split(',').map(str::trim) {
            if topping.is_empty() {
                continue;
            }

            let id = topping
                .parse()
                .map(ToppingId::new)
                .map_err(|source| ItemSpecError::InvalidTopping {
                    input: topping.to_string(),
                    source,
                })?;

            // Toppings toggle, so a repeat would remove the first one.
            if !topping_ids.contains(&id) {
                topping_ids.push(id);
            }
        }

        Ok(Self {
            product,
            toppings: topping_ids,
            quantity,
        })
    }
}

fn parse_quantity(input: &str) -> Result<u32, ItemSpecError> {
    let quantity = input
        .trim()
        .parse()
        .map_err(|source| ItemSpecError::InvalidQuantity {
            input: input.to_string(),
            source,
        })?;

    if quantity == 0 {
        return Err(ItemSpecError::ZeroQuantity);
    }

    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bare_product_is_one_unit_without_toppings() -> TestResult {
        let item: ItemSpec = "10".parse()?;

        assert_eq!(
            item,
            ItemSpec {
                product: ProductId::new(10),
                toppings: Vec::new(),
                quantity: 1,
            }
        );

        Ok(())
    }

    #[test]
    fn toppings_and_quantity() -> TestResult {
        let item: ItemSpec = "10:1, 2x3".parse()?;

        assert_eq!(item.product, ProductId::new(10));
        assert_eq!(item.toppings, vec![ToppingId::new(1), ToppingId::new(2)]);
        assert_eq!(item.quantity, 3);

        Ok(())
    }

    #[test]
    fn repeated_toppings_count_once() -> TestResult {
        let item: ItemSpec = "10:2,2,1".parse()?;

        assert_eq!(item.toppings, vec![ToppingId::new(2), ToppingId::new(1)]);

        Ok(())
    }

    #[test]
    fn quantity_without_toppings() -> TestResult {
        let item: ItemSpec = "7X2".parse()?;

        assert_eq!(item.product, ProductId::new(7));
        assert!(item.toppings.is_empty());
        assert_eq!(item.quantity, 2);

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!("7x0".parse::<ItemSpec>(), Err(ItemSpecError::ZeroQuantity));
    }

    #[test]
    fn malformed_parts_are_reported() {
        assert!(matches!(
            "copa".parse::<ItemSpec>(),
            Err(ItemSpecError::InvalidProduct { .. })
        ));
        assert!(matches!(
            "10:chispas".parse::<ItemSpec>(),
            Err(ItemSpecError::InvalidTopping { .. })
        ));
        assert!(matches!(
            "10xdos".parse::<ItemSpec>(),
            Err(ItemSpecError::InvalidQuantity { .. })
        ));
    }
}
