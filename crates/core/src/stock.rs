//! Stock availability checks that gate the buy-now call to action.

use crate::types::{Product, ProductKind};

/// Decides whether a product can currently be purchased.
///
/// Any `Fn(&Product) -> bool` is a `StockCheck`, which keeps tests and
/// alternative inventory rules cheap to plug in.
pub trait StockCheck {
    /// Returns `true` if the product is available.
    fn in_stock(&self, product: &Product) -> bool;
}

impl<F> StockCheck for F
where
    F: Fn(&Product) -> bool,
{
    fn in_stock(&self, product: &Product) -> bool {
        self(product)
    }
}

/// Default rule based on the inventory fields the backend sends.
///
/// Simple products need a positive `quantity`; variable products need at
/// least one variant with positive stock.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryStock;

impl StockCheck for InventoryStock {
    fn in_stock(&self, product: &Product) -> bool {
        match product.kind {
            ProductKind::Simple => product.quantity.is_some_and(|qty| qty > 0),
            ProductKind::Variable => product.variants.iter().any(|v| v.quantity > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::Variant;

    fn product() -> Product {
        Product::new("p1", Decimal::TEN, Decimal::TEN)
    }

    #[test]
    fn test_simple_product_stock() {
        let mut p = product();
        assert!(!InventoryStock.in_stock(&p));

        p.quantity = Some(0);
        assert!(!InventoryStock.in_stock(&p));

        p.quantity = Some(3);
        assert!(InventoryStock.in_stock(&p));
    }

    #[test]
    fn test_variable_product_stock() {
        let mut p = product();
        p.kind = ProductKind::Variable;
        p.quantity = Some(10);
        p.variants = vec![Variant {
            name: Some("S".to_string()),
            quantity: 0,
        }];
        assert!(!InventoryStock.in_stock(&p));

        p.variants.push(Variant {
            name: Some("M".to_string()),
            quantity: 2,
        });
        assert!(InventoryStock.in_stock(&p));
    }

    #[test]
    fn test_closure_stock_check() {
        let never = |_: &Product| false;
        assert!(!never.in_stock(&product()));
    }
}
