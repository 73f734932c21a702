use std::collections::BTreeSet;

use super::aggregate::Product;

/// Summary shown under the products table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStats {
    pub total: usize,
    pub total_stock: i64,
    pub low_stock: usize,
    pub categories: usize,
}

impl ProductStats {
    pub fn from_items(items: &[Product]) -> Self {
        Self {
            total: items.len(),
            total_stock: items.iter().map(|p| i64::from(p.stock)).sum(),
            low_stock: items.iter().filter(|p| p.is_low_stock()).count(),
            categories: items.iter().map(|p| p.category).collect::<BTreeSet<_>>().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductCategory;

    fn product(id: i64, category: ProductCategory, stock: i32) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            price: 1.0,
            category,
            stock,
            description: None,
        }
    }

    #[test]
    fn test_stats() {
        let items = vec![
            product(1, ProductCategory::Books, 5),
            product(2, ProductCategory::Books, 20),
            product(3, ProductCategory::Sports, 10),
        ];
        let stats = ProductStats::from_items(&items);
        assert_eq!(
            stats,
            ProductStats {
                total: 3,
                total_stock: 35,
                low_stock: 1,
                categories: 2
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(ProductStats::from_items(&[]), ProductStats::default());
    }
}
