//! Tables provisioned by the seeder.

use std::fmt;

/// One of the two demonstration tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedTable {
    Category,
    SalesOrder,
}

impl SeedTable {
    /// Both tables in provisioning order
    pub const ALL: [SeedTable; 2] = [SeedTable::Category, SeedTable::SalesOrder];

    /// Table name as written in SQL (unquoted, so PostgreSQL folds it to lowercase)
    pub fn name(&self) -> &'static str {
        match self {
            SeedTable::Category => "Category",
            SeedTable::SalesOrder => "SalesOrder",
        }
    }
}

impl fmt::Display for SeedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
