//! SQL statements for the demonstration tables.
//!
//! Identifiers are unquoted, so PostgreSQL stores them folded to lowercase.

use domain::SeedTable;

/// `Category` table definition
pub const CREATE_CATEGORY_TABLE: &str = "CREATE TABLE IF NOT EXISTS Category (
    CategoryID SERIAL PRIMARY KEY,
    Name VARCHAR(50) NOT NULL
)";

/// `SalesOrder` table definition
pub const CREATE_SALES_ORDER_TABLE: &str = "CREATE TABLE IF NOT EXISTS SalesOrder (
    SalesOrderID SERIAL PRIMARY KEY,
    OrderDate TIMESTAMP NOT NULL DEFAULT NOW(),
    CustomerName VARCHAR(100) NOT NULL,
    TotalDue DECIMAL(12, 2) NOT NULL
)";

pub const SELECT_VERSION: &str = "SELECT version()";

pub const INSERT_CATEGORY: &str = "INSERT INTO Category (Name) VALUES ($1)";

pub const INSERT_SALES_ORDER: &str =
    "INSERT INTO SalesOrder (CustomerName, TotalDue) VALUES ($1, $2)";

/// `to_regclass` yields NULL for relations that do not exist
pub const TABLE_EXISTS: &str = "SELECT to_regclass($1) IS NOT NULL AS present";

pub const SELECT_CATEGORIES: &str =
    "SELECT CategoryID AS id, Name AS name FROM Category ORDER BY CategoryID";

pub const SELECT_SALES_ORDERS: &str = "SELECT SalesOrderID AS id, OrderDate AS order_date, \
     CustomerName AS customer_name, TotalDue AS total_due \
     FROM SalesOrder ORDER BY SalesOrderID";

/// DDL that creates `table` when it is absent.
pub fn create_table(table: SeedTable) -> &'static str {
    match table {
        SeedTable::Category => CREATE_CATEGORY_TABLE,
        SeedTable::SalesOrder => CREATE_SALES_ORDER_TABLE,
    }
}

/// Row count query for `table`, yielding a single `count` column.
pub fn count_rows(table: SeedTable) -> String {
    format!("SELECT COUNT(*) AS count FROM {}", table.name())
}
