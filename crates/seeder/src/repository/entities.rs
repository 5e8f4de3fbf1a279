//! Raw query result rows and their domain conversions.

use sea_orm::prelude::Decimal;
use sea_orm::FromQueryResult;

use common::{AppError, AppResult};
use domain::{Category, SalesOrder, TOTAL_DUE_SCALE};

#[derive(Debug, FromQueryResult)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct SalesOrderRow {
    pub id: i32,
    pub order_date: chrono::NaiveDateTime,
    pub customer_name: String,
    pub total_due: Decimal,
}

impl TryFrom<SalesOrderRow> for SalesOrder {
    type Error = AppError;

    fn try_from(row: SalesOrderRow) -> AppResult<Self> {
        Ok(Self {
            id: row.id,
            order_date: row.order_date,
            customer_name: row.customer_name,
            total_due_cents: decimal_to_cents(row.total_due)?,
        })
    }
}

/// Convert integer cents to a fixed-point amount with two decimal places.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, TOTAL_DUE_SCALE)
}

/// Convert a `DECIMAL(12, 2)` value back to integer cents.
pub fn decimal_to_cents(amount: Decimal) -> AppResult<i64> {
    let mut amount = amount;
    amount.rescale(TOTAL_DUE_SCALE);
    i64::try_from(amount.mantissa())
        .map_err(|_| AppError::internal(format!("amount out of range: {}", amount)))
}
