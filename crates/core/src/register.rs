//! Register
//!
//! State behind the order screen: the loaded catalog, the product being
//! customized, the cart and the payment form.
//!
//! ```text
//! Loading ──finish/fail──▶ Browsing ◀──add/cancel── Customizing
//!                              └──────select────────▶
//! ```

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError, LineId, LineItem, Selection},
    catalog::{Catalog, ProductId, ToppingId},
    checkout::{self, CheckoutError, CheckoutForm, InvoiceRequest},
    money::{self, Amount},
    totals::OrderTotals,
};

/// Errors from register actions. Messages are shown to the cashier as-is.
#[derive(Debug, Error, PartialEq)]
pub enum RegisterError {
    /// Reference data has not finished loading.
    #[error("Cargando sistema de caja...")]
    NotReady,

    /// The product is not in the catalog.
    #[error("Producto {0} no encontrado")]
    UnknownProduct(ProductId),

    /// The product has no stock.
    #[error("Este producto no tiene stock disponible")]
    OutOfStock(ProductId),

    /// No product is being customized.
    #[error("Selecciona un producto primero")]
    NothingSelected,

    /// The topping is not in the catalog.
    #[error("Topping {0} no encontrado")]
    UnknownTopping(ToppingId),

    /// The product being customized does not take toppings.
    #[error("Este producto no admite toppings")]
    ToppingsNotAllowed(ProductId),

    /// Cart mutation failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Which part of the order screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the catalog.
    Loading,

    /// Catalog grid.
    Browsing,

    /// Topping picker for one product.
    Customizing,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Loading,
    Browsing,
    Customizing(Selection),
}

/// Order screen state.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    state: State,
    catalog: Catalog,
    cart: Cart,
    form: CheckoutForm,
}

impl Default for Register {
    fn default() -> Self {
        Self::loading()
    }
}

impl Register {
    /// A register waiting for its catalog.
    pub fn loading() -> Self {
        Self {
            state: State::Loading,
            catalog: Catalog::default(),
            cart: Cart::new(),
            form: CheckoutForm::default(),
        }
    }

    /// A ready register over an already loaded catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut register = Self::loading();
        register.finish_loading(catalog);
        register
    }

    /// Install the loaded catalog and start browsing.
    pub fn finish_loading(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.state = State::Browsing;
    }

    /// Loading failed: browse an empty catalog.
    pub fn fail_loading(&mut self) {
        self.finish_loading(Catalog::default());
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Loading => Phase::Loading,
            State::Browsing => Phase::Browsing,
            State::Customizing(_) => Phase::Customizing,
        }
    }

    /// Loaded catalog; empty while loading or after a failed load.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cart lines.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Payment form.
    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Product being customized, if any.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            State::Customizing(selection) => Some(selection),
            State::Loading | State::Browsing => None,
        }
    }

    /// Start customizing a product.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::NotReady`] while loading
    /// - [`RegisterError::UnknownProduct`] if the id is not in the catalog
    /// - [`RegisterError::OutOfStock`] if the product has no stock
    pub fn select_product(&mut self, id: ProductId) -> Result<&Selection, RegisterError> {
        if self.state == State::Loading {
            return Err(RegisterError::NotReady);
        }

        let product = self
            .catalog
            .find_product(id)
            .ok_or(RegisterError::UnknownProduct(id))?;

        if !product.in_stock() {
            return Err(RegisterError::OutOfStock(id));
        }

        self.state = State::Customizing(Selection::new(product.clone()));

        self.selection().ok_or(RegisterError::NothingSelected)
    }

    /// Toggle a topping on the product being customized.
    ///
    /// Returns whether the topping is selected afterwards.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::NothingSelected`] when not customizing
    /// - [`RegisterError::ToppingsNotAllowed`] for products without toppings
    /// - [`RegisterError::UnknownTopping`] if the id is not in the catalog
    pub fn toggle_topping(&mut self, id: ToppingId) -> Result<bool, RegisterError> {
        let State::Customizing(selection) = &mut self.state else {
            return Err(RegisterError::NothingSelected);
        };

        if !selection.product().allows_toppings {
            return Err(RegisterError::ToppingsNotAllowed(selection.product().id));
        }

        let topping = self
            .catalog
            .find_topping(id)
            .ok_or(RegisterError::UnknownTopping(id))?;

        Ok(selection.toggle(topping))
    }

    /// Price of the product being customized, zero when browsing.
    pub fn current_price(&self) -> Amount {
        self.selection()
            .map_or_else(money::zero, Selection::unit_price)
    }

    /// Put the product being customized into the cart and go back to browsing.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::NothingSelected`] when not customizing.
    pub fn add_to_cart(&mut self, now: Timestamp) -> Result<LineId, RegisterError> {
        match std::mem::replace(&mut self.state, State::Browsing) {
            State::Customizing(selection) => Ok(self.cart.add(selection, now)),
            other => {
                self.state = other;
                Err(RegisterError::NothingSelected)
            }
        }
    }

    /// Drop the product being customized and go back to browsing.
    pub fn cancel_selection(&mut self) {
        if let State::Customizing(_) = self.state {
            self.state = State::Browsing;
        }
    }

    /// Remove a cart line.
    pub fn remove_line(&mut self, id: &LineId) -> Option<LineItem> {
        self.cart.remove(id)
    }

    /// Change a line's quantity; values below one leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Cart`] for invalid quantities or unknown lines.
    pub fn set_quantity(&mut self, id: &LineId, quantity: i64) -> Result<(), RegisterError> {
        Ok(self.cart.set_quantity(id, quantity)?)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Set the customer name.
    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.form.customer = customer.into();
    }

    /// Set or clear the payment method.
    pub fn set_payment_method(&mut self, method: Option<String>) {
        self.form.payment_method = method;
    }

    /// Set the requested discount.
    pub fn set_discount(&mut self, discount: Amount) {
        self.form.discount = discount;
    }

    /// Set the amount received.
    pub fn set_amount_paid(&mut self, amount_paid: Amount) {
        self.form.amount_paid = amount_paid;
    }

    /// Number of cart lines.
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    /// Current totals.
    pub fn totals(&self) -> OrderTotals {
        self.form.totals(&self.cart)
    }

    /// Whether the submit button is enabled.
    pub fn can_checkout(&self) -> bool {
        checkout::can_submit(&self.cart, &self.form)
    }

    /// Validate and build the invoice payload.
    ///
    /// # Errors
    ///
    /// See [`checkout::prepare`].
    pub fn prepare_invoice(&self) -> Result<InvoiceRequest, CheckoutError> {
        checkout::prepare(&self.cart, &self.form)
    }

    /// The sale was registered: clear the cart and the payment form.
    pub fn complete_sale(&mut self) {
        self.cart.clear();
        self.form = CheckoutForm::default();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        catalog::{Category, Product, Topping},
        money::pesos,
    };

    use super::*;

    fn product(id: u64, stock: i64, allows_toppings: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            price: pesos(5000),
            stock,
            allows_toppings,
            image: None,
        }
    }

    fn register() -> Register {
        Register::with_catalog(Catalog::new(
            vec![Category {
                id: None,
                name: "Helados".to_string(),
                products: vec![product(1, 4, true), product(2, 0, true), product(3, 9, false)],
            }],
            vec![Topping {
                id: ToppingId::new(10),
                name: "Chispas".to_string(),
                price: pesos(1200),
            }],
        ))
    }

    #[test]
    fn loading_blocks_selection() {
        let mut register = Register::loading();

        assert_eq!(register.phase(), Phase::Loading);
        assert_eq!(
            register.select_product(ProductId::new(1)).err(),
            Some(RegisterError::NotReady)
        );
    }

    #[test]
    fn failed_load_leaves_empty_catalog_ready() {
        let mut register = Register::loading();

        register.fail_loading();

        assert_eq!(register.phase(), Phase::Browsing);
        assert!(register.catalog().is_empty());
    }

    #[test]
    fn out_of_stock_product_is_rejected() {
        let mut register = register();

        assert_eq!(
            register.select_product(ProductId::new(2)).err(),
            Some(RegisterError::OutOfStock(ProductId::new(2)))
        );
        assert_eq!(register.phase(), Phase::Browsing);
    }

    #[test]
    fn selection_starts_with_no_toppings() -> TestResult {
        let mut register = register();

        register.select_product(ProductId::new(1))?;
        register.toggle_topping(ToppingId::new(10))?;
        register.select_product(ProductId::new(1))?;

        assert_eq!(register.phase(), Phase::Customizing);
        assert!(register.selection().is_some_and(|s| s.toppings().is_empty()));

        Ok(())
    }

    #[test]
    fn toggling_toppings_updates_current_price() -> TestResult {
        let mut register = register();

        assert_eq!(register.current_price(), money::zero());

        register.select_product(ProductId::new(1))?;

        assert!(register.toggle_topping(ToppingId::new(10))?);
        assert_eq!(register.current_price(), pesos(6200));

        assert!(!register.toggle_topping(ToppingId::new(10))?);
        assert_eq!(register.current_price(), pesos(5000));

        Ok(())
    }

    #[test]
    fn toppings_are_refused_for_plain_products() -> TestResult {
        let mut register = register();

        register.select_product(ProductId::new(3))?;

        assert_eq!(
            register.toggle_topping(ToppingId::new(10)),
            Err(RegisterError::ToppingsNotAllowed(ProductId::new(3)))
        );

        Ok(())
    }

    #[test]
    fn add_to_cart_requires_selection() -> TestResult {
        let mut register = register();

        assert_eq!(
            register.add_to_cart(Timestamp::from_millisecond(1)?),
            Err(RegisterError::NothingSelected)
        );
        assert_eq!(register.phase(), Phase::Browsing);

        Ok(())
    }

    #[test]
    fn add_to_cart_returns_to_browsing() -> TestResult {
        let mut register = register();

        register.select_product(ProductId::new(1))?;
        register.toggle_topping(ToppingId::new(10))?;

        let id = register.add_to_cart(Timestamp::from_millisecond(1)?)?;

        assert_eq!(register.phase(), Phase::Browsing);
        assert_eq!(register.item_count(), 1);
        assert_eq!(
            register.cart().get(&id).map(LineItem::subtotal),
            Some(pesos(6200))
        );

        Ok(())
    }

    #[test]
    fn cancel_selection_discards_customization() -> TestResult {
        let mut register = register();

        register.select_product(ProductId::new(1))?;
        register.cancel_selection();

        assert_eq!(register.phase(), Phase::Browsing);
        assert!(register.cart().is_empty());

        Ok(())
    }

    #[test]
    fn complete_sale_resets_cart_and_form() -> TestResult {
        let mut register = register();

        register.select_product(ProductId::new(1))?;
        register.add_to_cart(Timestamp::from_millisecond(1)?)?;
        register.set_customer("Ana");
        register.set_payment_method(Some("Tarjeta".to_string()));
        register.set_discount(pesos(500));
        register.set_amount_paid(pesos(10_000));

        assert!(register.can_checkout());
        assert!(register.prepare_invoice().is_ok());

        register.complete_sale();

        assert!(register.cart().is_empty());
        assert_eq!(register.form(), &CheckoutForm::default());
        assert!(!register.can_checkout());

        Ok(())
    }
}
