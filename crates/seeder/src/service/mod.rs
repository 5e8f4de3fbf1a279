//! Service layer - Seeding use cases.

mod seeder;

pub use seeder::{SeedReport, Seeder};
