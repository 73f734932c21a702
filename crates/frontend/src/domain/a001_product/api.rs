use contracts::domain::a001_product::{Product, ProductCategory};
use contracts::shared::api_error::ApiError;

use crate::shared::http::{GlooTransport, Transport};
use crate::shared::resource::{segment, ResourceService};

/// `/products` resource
pub type ProductService<T = GlooTransport> = ResourceService<Product, T>;

impl<T: Transport> ResourceService<Product, T> {
    /// `GET /products/category/{category}`
    pub async fn by_category(&self, category: ProductCategory) -> Result<Vec<Product>, ApiError> {
        let path = format!("{}/category/{}", Self::collection_path(), segment(category.as_str()));
        self.client().get(&path).await
    }
}
