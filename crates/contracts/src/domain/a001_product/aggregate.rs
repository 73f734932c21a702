use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::{Entity, EntityId};

/// Stock level below which a product is flagged in the UI
pub const LOW_STOCK_THRESHOLD: i32 = 10;

// ============================================================================
// Category
// ============================================================================

/// Fixed set of product categories. Serialized as the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Appliances,
    Books,
    Sports,
    Furniture,
    Clothing,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Electronics,
        ProductCategory::Appliances,
        ProductCategory::Books,
        ProductCategory::Sports,
        ProductCategory::Furniture,
        ProductCategory::Clothing,
        ProductCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Appliances => "Appliances",
            ProductCategory::Books => "Books",
            ProductCategory::Sports => "Sports",
            ProductCategory::Furniture => "Furniture",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown product category: {}", s))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Build a record from a payload and a server-assigned id
    pub fn from_dto(id: EntityId, dto: ProductDto) -> Self {
        Self {
            id,
            name: dto.name,
            price: dto.price,
            category: dto.category,
            stock: dto.stock,
            description: dto.description,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

impl Entity for Product {
    type Payload = ProductDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_payload(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of create and full-replace update requests. Has no `id`:
/// `description: None` is sent as `null` and clears the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: i32,
    pub description: Option<String>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if self.stock < 0 {
            return Err("Stock must be a non-negative whole number".into());
        }
        Ok(())
    }
}
