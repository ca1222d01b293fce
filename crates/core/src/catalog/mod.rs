//! Catalog
//!
//! Categories of products and the shared topping list, as loaded from the
//! backend.

use rustc_hash::FxHashMap;
use tracing::warn;

pub mod errors;
pub mod models;
pub mod records;

pub use errors::CatalogError;
pub use models::{Category, CategoryId, Product, ProductId, StockLevel, Topping, ToppingId};
pub use records::{CategoryRecord, ProductRecord, ToppingRecord};

/// Reference data for the order screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    toppings: Vec<Topping>,

    /// Product id -> (category position, product position)
    product_index: FxHashMap<ProductId, (usize, usize)>,

    /// Topping id -> topping position
    topping_index: FxHashMap<ToppingId, usize>,
}

impl Catalog {
    /// Build a catalog from canonical models.
    ///
    /// When an id appears more than once the first occurrence wins.
    pub fn new(categories: Vec<Category>, toppings: Vec<Topping>) -> Self {
        let mut product_index = FxHashMap::default();

        for (category_position, category) in categories.iter().enumerate() {
            for (product_position, product) in category.products.iter().enumerate() {
                product_index
                    .entry(product.id)
                    .or_insert((category_position, product_position));
            }
        }

        let mut topping_index = FxHashMap::default();

        for (position, topping) in toppings.iter().enumerate() {
            topping_index.entry(topping.id).or_insert(position);
        }

        Self {
            categories,
            toppings,
            product_index,
            topping_index,
        }
    }

    /// Build a catalog from backend records.
    ///
    /// Records that cannot be normalized are logged and left out, so one bad
    /// row does not hide the rest of the menu.
    pub fn from_records(categories: Vec<CategoryRecord>, toppings: Vec<ToppingRecord>) -> Self {
        let categories = categories.into_iter().map(Category::from).collect();

        let toppings = toppings
            .into_iter()
            .filter_map(|record| {
                Topping::try_from(record)
                    .inspect_err(|error| warn!(%error, "skipping topping record"))
                    .ok()
            })
            .collect();

        Self::new(categories, toppings)
    }

    /// Categories in backend order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Toppings in backend order.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Every product across all categories.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories
            .iter()
            .flat_map(|category| category.products.iter())
    }

    /// Number of products across all categories.
    pub fn product_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.products.len())
            .sum()
    }

    /// Look up a product by id.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        let (category, product) = self.product_index.get(&id)?;

        self.categories.get(*category)?.products.get(*product)
    }

    /// Look up a topping by id.
    pub fn find_topping(&self, id: ToppingId) -> Option<&Topping> {
        self.toppings.get(*self.topping_index.get(&id)?)
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
