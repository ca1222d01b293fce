//! NixGelato
//!
//! Order arithmetic and catalog model for the NixGelato ice-cream shop point
//! of sale: product and topping selection, the cart, discount and change
//! calculation, and the invoice payload sent to the backend.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ids;
pub mod landing;
pub mod money;
pub mod payments;
pub mod prelude;
pub mod register;
pub mod totals;
