//! Infrastructure layer - database connection and schema statements.

mod db;
pub mod schema;

pub use db::Database;
