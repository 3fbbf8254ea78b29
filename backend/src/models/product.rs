use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One catalog entry, served as-is inside the JSON envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Non-negative, currency unspecified.
    pub price: f64,
    /// Static asset reference; not checked against the static directory.
    pub image: String,
    pub description: String,
    pub category: String,
}

impl Product {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    /// Checks the per-record invariants. Uniqueness is the catalog's job.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id == 0 {
            return Err(CatalogError::ZeroId {
                name: self.name.clone(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.id));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: self.id,
                price: self.price,
            });
        }
        Ok(())
    }

    /// Price with two decimals, for display.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}
