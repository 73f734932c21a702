use contracts::domain::a001_product::{Product, ProductCategory, ProductDto};
use contracts::domain::common::normalize_optional;

use crate::shared::crud_page::CrudEntity;

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in all required fields (Name, Price, Category, Stock)";

/// Product form as typed by the user. `category` is empty until chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price.to_string(),
            category: p.category.as_str().to_string(),
            stock: p.stock.to_string(),
            description: p.description.clone().unwrap_or_default(),
        }
    }

    /// Required fields first, then number parsing, then value ranges
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let required = [&self.name, &self.price, &self.category, &self.stock];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(REQUIRED_FIELDS_MESSAGE.into());
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a non-negative number".to_string())?;
        let stock: i32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| "Stock must be a non-negative whole number".to_string())?;
        let category: ProductCategory = self.category.parse()?;

        let dto = ProductDto {
            name: self.name.trim().to_string(),
            price,
            category,
            stock,
            description: normalize_optional(&self.description),
        };
        dto.validate()?;
        Ok(dto)
    }
}

impl CrudEntity for Product {
    type Form = ProductForm;

    fn to_form(&self) -> ProductForm {
        ProductForm::from_product(self)
    }

    fn form_to_payload(form: &ProductForm) -> Result<ProductDto, String> {
        form.to_dto()
    }
}
