//! Sales order entity and insert payload.
//!
//! Monetary amounts are carried as integer cents so that the two-digit
//! fixed-point `TotalDue` column never passes through a float. Rendering
//! them as decimals is left to the database layer.

use chrono::NaiveDateTime;

/// A persisted `SalesOrder` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesOrder {
    pub id: i32,
    pub order_date: NaiveDateTime,
    pub customer_name: String,
    pub total_due_cents: i64,
}

/// Values supplied when inserting a sales order.
///
/// `OrderDate` and `SalesOrderID` are assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSalesOrder {
    pub customer_name: &'static str,
    pub total_due_cents: i64,
}

impl NewSalesOrder {
    pub const fn new(customer_name: &'static str, total_due_cents: i64) -> Self {
        Self {
            customer_name,
            total_due_cents,
        }
    }
}
