//! Catalog errors.

use thiserror::Error;

use crate::money::MoneyParseError;

/// Errors normalizing backend catalog records.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A record has none of the accepted names for a required field.
    #[error("{record} sin campo {field}")]
    MissingField {
        /// Record kind (`producto`, `topping`)
        record: &'static str,

        /// Canonical field name
        field: &'static str,
    },

    /// A price could not be represented.
    #[error("precio inválido en {record}: {source}")]
    InvalidPrice {
        /// Record kind
        record: &'static str,

        /// Underlying conversion error
        #[source]
        source: MoneyParseError,
    },
}
