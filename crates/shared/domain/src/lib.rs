//! Domain layer - Seed entities and the fixed demonstration dataset.
//!
//! This crate contains plain data with no infrastructure dependencies.
//! The seeder crate maps these types onto SQL statements.

pub mod category;
pub mod constants;
pub mod sales_order;
pub mod table;

pub use category::Category;
pub use constants::*;
pub use sales_order::{NewSalesOrder, SalesOrder};
pub use table::SeedTable;
