//! Selection

use smallvec::SmallVec;

use crate::{
    catalog::{Product, Topping, ToppingId},
    money::{self, Amount},
};

/// The product being customized before it goes into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    product: Product,
    toppings: SmallVec<[Topping; 4]>,
}

impl Selection {
    /// Start customizing a product with no toppings.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            toppings: SmallVec::new(),
        }
    }

    /// The product being customized.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Selected toppings in the order they were picked.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Whether a topping is currently selected.
    pub fn is_selected(&self, id: ToppingId) -> bool {
        self.toppings.iter().any(|topping| topping.id == id)
    }

    /// Add the topping if it is not selected, otherwise remove it.
    ///
    /// Returns whether the topping is selected afterwards.
    pub fn toggle(&mut self, topping: &Topping) -> bool {
        if let Some(position) = self.toppings.iter().position(|t| t.id == topping.id) {
            self.toppings.remove(position);
            false
        } else {
            self.toppings.push(topping.clone());
            true
        }
    }

    /// `round(product price + Σ topping prices)`.
    pub fn unit_price(&self) -> Amount {
        let extras = self.toppings.iter().map(|topping| topping.price);

        money::round_to_peso(money::sum(
            std::iter::once(self.product.price).chain(extras),
        ))
    }

    pub(crate) fn into_parts(self) -> (Product, SmallVec<[Topping; 4]>) {
        (self.product, self.toppings)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        catalog::ProductId,
        money::{from_decimal, pesos},
    };

    use super::*;

    fn cone(price: Amount) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Cono".to_string(),
            price,
            stock: 5,
            allows_toppings: true,
            image: None,
        }
    }

    fn topping(id: u64, price: Amount) -> Topping {
        Topping {
            id: ToppingId::new(id),
            name: format!("Topping {id}"),
            price,
        }
    }

    #[test]
    fn toggle_adds_then_removes_by_id() {
        let mut selection = Selection::new(cone(pesos(5000)));
        let sprinkles = topping(1, pesos(1200));

        assert!(selection.toggle(&sprinkles));
        assert!(selection.is_selected(sprinkles.id));

        assert!(!selection.toggle(&sprinkles));
        assert!(!selection.is_selected(sprinkles.id));
        assert!(selection.toppings().is_empty());
    }

    #[test]
    fn toggle_matches_on_id_not_contents() {
        let mut selection = Selection::new(cone(pesos(5000)));

        selection.toggle(&topping(1, pesos(1200)));

        let renamed = Topping {
            name: "Renombrado".to_string(),
            ..topping(1, pesos(1200))
        };

        assert!(!selection.toggle(&renamed));
    }

    #[test]
    fn unit_price_adds_toppings() {
        let mut selection = Selection::new(cone(pesos(5000)));

        assert_eq!(selection.unit_price(), pesos(5000));

        selection.toggle(&topping(1, pesos(1200)));
        selection.toggle(&topping(2, pesos(800)));

        assert_eq!(selection.unit_price(), pesos(7000));
    }

    #[test]
    fn unit_price_rounds_to_whole_pesos() -> TestResult {
        let mut selection = Selection::new(cone(from_decimal(Decimal::new(49_995, 1))?));

        selection.toggle(&topping(1, from_decimal(Decimal::new(10, 1))?));

        assert_eq!(selection.unit_price(), pesos(5001));

        Ok(())
    }
}
