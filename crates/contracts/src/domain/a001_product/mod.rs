pub mod aggregate;
pub mod stats;

pub use aggregate::{Product, ProductCategory, ProductDto};
pub use stats::ProductStats;
