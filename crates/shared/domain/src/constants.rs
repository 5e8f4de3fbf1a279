//! Seed dataset and column limits.

use crate::sales_order::NewSalesOrder;

// =============================================================================
// Column limits
// =============================================================================

/// `Category.Name` is `VARCHAR(50)`
pub const CATEGORY_NAME_MAX_LEN: usize = 50;

/// `SalesOrder.CustomerName` is `VARCHAR(100)`
pub const CUSTOMER_NAME_MAX_LEN: usize = 100;

/// `SalesOrder.TotalDue` is `DECIMAL(12, 2)`
pub const TOTAL_DUE_SCALE: u32 = 2;

// =============================================================================
// Seed data
// =============================================================================

/// Category names inserted on every seed run, in insertion order.
pub const SEED_CATEGORY_NAMES: [&str; 5] = ["Electronics", "Apparel", "Toys", "Books", "Furniture"];

/// Sales orders inserted on every seed run, in insertion order.
pub const SEED_SALES_ORDERS: [NewSalesOrder; 5] = [
    NewSalesOrder::new("John Doe", 12345),
    NewSalesOrder::new("Jane Smith", 6789),
    NewSalesOrder::new("Alice Brown", 34567),
    NewSalesOrder::new("Bob Johnson", 8956),
    NewSalesOrder::new("Charlie Wilson", 15678),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_categories_fit_column() {
        for name in SEED_CATEGORY_NAMES {
            assert!(!name.is_empty());
            assert!(name.len() <= CATEGORY_NAME_MAX_LEN);
        }
    }

    #[test]
    fn test_seed_orders_fit_columns() {
        for order in SEED_SALES_ORDERS {
            assert!(!order.customer_name.is_empty());
            assert!(order.customer_name.len() <= CUSTOMER_NAME_MAX_LEN);
            // DECIMAL(12, 2) holds at most 10 integer digits
            assert!(order.total_due_cents.abs() < 10_i64.pow(12));
        }
    }

    #[test]
    fn test_seed_order_amounts() {
        let amounts: Vec<i64> = SEED_SALES_ORDERS.iter().map(|o| o.total_due_cents).collect();
        assert_eq!(amounts, vec![12345, 6789, 34567, 8956, 15678]);
    }
}
