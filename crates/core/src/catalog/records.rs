//! Catalog Records
//!
//! Wire shapes returned by `/api/productos` and `/api/toppings`. The backend
//! is not consistent about field names, so every record accepts each known
//! spelling and resolves them in a fixed order when converted into the
//! canonical models.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::{
    catalog::{
        errors::CatalogError,
        models::{Category, CategoryId, Product, ProductId, Topping, ToppingId},
    },
    money::{self, Amount},
};

/// Category as returned by `/api/productos`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CategoryRecord {
    id: Option<CategoryId>,
    id_categoria: Option<CategoryId>,
    nombre: Option<String>,
    productos: Option<Vec<ProductRecord>>,
}

/// Product nested under a category.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductRecord {
    id: Option<ProductId>,
    id_producto: Option<ProductId>,
    nombre: Option<String>,
    nombre_producto: Option<String>,
    precio: Option<Decimal>,
    precio_venta_unitario: Option<Decimal>,
    stock: Option<Decimal>,
    stock_actual: Option<Decimal>,
    #[serde(rename = "permiteToppings", default, deserialize_with = "flag")]
    permite_toppings_camel: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    permite_toppings: Option<bool>,
    img: Option<String>,
}

/// Topping as returned by `/api/toppings`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ToppingRecord {
    id_topping: Option<ToppingId>,
    id: Option<ToppingId>,
    nombre: Option<String>,
    nombre_topping: Option<String>,
    precio_adicional: Option<Decimal>,
    precio: Option<Decimal>,
}

/// Boolean column as the backend may send it: `true`, `1`, `"1"`, `"true"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawFlag {
    fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(value) => *value,
            RawFlag::Integer(value) => *value != 0,
            RawFlag::Float(value) => value.abs() > 0.0,
            RawFlag::Text(text) => {
                let text = text.trim();

                text == "1" || text.eq_ignore_ascii_case("true")
            }
        }
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<RawFlag>::deserialize(deserializer)?.map(|flag| flag.is_set()))
}

fn price(record: &'static str, value: Option<Decimal>) -> Result<Amount, CatalogError> {
    value
        .map_or_else(|| Ok(money::zero()), money::from_decimal)
        .map_err(|source| CatalogError::InvalidPrice { record, source })
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.id_producto)
            .ok_or(CatalogError::MissingField {
                record: "producto",
                field: "id",
            })?;

        let stock = record
            .stock
            .or(record.stock_actual)
            .and_then(|stock| stock.trunc().to_i64())
            .unwrap_or(0);

        Ok(Product {
            id,
            name: record
                .nombre
                .or(record.nombre_producto)
                .unwrap_or_default(),
            price: price("producto", record.precio.or(record.precio_venta_unitario))?,
            stock,
            allows_toppings: record
                .permite_toppings_camel
                .or(record.permite_toppings)
                .unwrap_or(false),
            image: record.img.filter(|url| !url.trim().is_empty()),
        })
    }
}

impl TryFrom<ToppingRecord> for Topping {
    type Error = CatalogError;

    fn try_from(record: ToppingRecord) -> Result<Self, Self::Error> {
        let id = record
            .id_topping
            .or(record.id)
            .ok_or(CatalogError::MissingField {
                record: "topping",
                field: "id_topping",
            })?;

        Ok(Topping {
            id,
            name: record
                .nombre
                .or(record.nombre_topping)
                .unwrap_or_default(),
            price: price("topping", record.precio_adicional.or(record.precio))?,
        })
    }
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        let products = record
            .productos
            .unwrap_or_default()
            .into_iter()
            .filter_map(|product| {
                Product::try_from(product)
                    .inspect_err(|error| warn!(%error, "skipping product record"))
                    .ok()
            })
            .collect();

        Category {
            id: record.id.or(record.id_categoria),
            name: record.nombre.unwrap_or_default(),
            products,
        }
    }
}
