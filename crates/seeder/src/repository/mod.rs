//! Repository layer for data access.

pub mod entities;
mod seed_repository;

pub use seed_repository::{SeedRepository, SeedStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use seed_repository::MockSeedRepository;
