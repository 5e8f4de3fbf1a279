//! Seeder - Provisions the demonstration tables and reports on them.
//!
//! Steps run strictly in sequence and the first failure aborts the rest.
//! Rows are appended on every run without checking for duplicates, so
//! repeated runs grow both tables.

use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use domain::{SeedTable, SEED_CATEGORY_NAMES, SEED_SALES_ORDERS};

use crate::repository::entities::cents_to_decimal;
use crate::repository::SeedRepository;

/// Outcome of a completed seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub version: String,
    pub category_count: i64,
    pub sales_order_count: i64,
}

/// Runs the seeding sequence against a repository.
pub struct Seeder {
    repo: Arc<dyn SeedRepository>,
}

impl Seeder {
    /// Create new seeder with repository
    pub fn new(repo: Arc<dyn SeedRepository>) -> Self {
        Self { repo }
    }

    /// Query the version, seed both tables and report their row counts.
    ///
    /// Progress lines are written to `out` as each step completes.
    pub async fn run<W: Write>(&self, out: &mut W) -> AppResult<SeedReport> {
        let version = self.repo.server_version().await?;
        writeln!(out, "version={}", version)?;

        writeln!(out, "Creating Category in PostgreSQL!")?;
        self.seed_categories().await?;
        writeln!(out, "Category table created and data is inserted!")?;

        let category_count = self.repo.count_rows(SeedTable::Category).await?;
        writeln!(out, "Number of rows in Category table: {}", category_count)?;

        writeln!(out, "Creating SalesOrder in PostgreSQL!")?;
        self.seed_sales_orders().await?;
        writeln!(out, "SalesOrder table created and data is inserted!")?;

        let sales_order_count = self.repo.count_rows(SeedTable::SalesOrder).await?;
        writeln!(out, "Number of rows in SalesOrder table: {}", sales_order_count)?;

        Ok(SeedReport {
            version,
            category_count,
            sales_order_count,
        })
    }

    /// Create `Category` if missing and insert the seed names one by one.
    pub async fn seed_categories(&self) -> AppResult<()> {
        self.repo.create_table(SeedTable::Category).await?;

        for name in SEED_CATEGORY_NAMES {
            self.repo.insert_category(name).await?;
        }

        tracing::info!(rows = SEED_CATEGORY_NAMES.len(), "Category rows inserted");
        Ok(())
    }

    /// Create `SalesOrder` if missing and insert the seed orders one by one.
    pub async fn seed_sales_orders(&self) -> AppResult<()> {
        self.repo.create_table(SeedTable::SalesOrder).await?;

        for order in &SEED_SALES_ORDERS {
            self.repo.insert_sales_order(order).await?;
        }

        tracing::info!(rows = SEED_SALES_ORDERS.len(), "SalesOrder rows inserted");
        Ok(())
    }

    /// Report the version and each table's row count without writing.
    ///
    /// Missing tables are reported rather than treated as errors.
    pub async fn status<W: Write>(&self, out: &mut W, show_rows: bool) -> AppResult<()> {
        let version = self.repo.server_version().await?;
        writeln!(out, "version={}", version)?;

        for table in SeedTable::ALL {
            if !self.repo.table_exists(table).await? {
                writeln!(out, "{}: missing", table)?;
                continue;
            }

            let count = self.repo.count_rows(table).await?;
            writeln!(out, "{}: {} rows", table, count)?;

            if show_rows {
                self.write_rows(out, table).await?;
            }
        }

        Ok(())
    }

    async fn write_rows<W: Write>(&self, out: &mut W, table: SeedTable) -> AppResult<()> {
        match table {
            SeedTable::Category => {
                for category in self.repo.list_categories().await? {
                    writeln!(out, "  {}\t{}", category.id, category.name)?;
                }
            }
            SeedTable::SalesOrder => {
                for order in self.repo.list_sales_orders().await? {
                    writeln!(
                        out,
                        "  {}\t{}\t{}\t{}",
                        order.id,
                        order.order_date.format("%Y-%m-%d %H:%M:%S"),
                        order.customer_name,
                        cents_to_decimal(order.total_due_cents)
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::AppError;
    use domain::{Category, SalesOrder};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use sea_orm::DbErr;

    use super::*;
    use crate::repository::MockSeedRepository;

    const VERSION: &str = "PostgreSQL 16.2 on x86_64-pc-linux-gnu";

    fn output(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn expect_full_run(repo: &mut MockSeedRepository, seq: &mut Sequence, counts: (i64, i64)) {
        repo.expect_server_version()
            .times(1)
            .in_sequence(seq)
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_create_table()
            .with(eq(SeedTable::Category))
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
        for name in SEED_CATEGORY_NAMES {
            repo.expect_insert_category()
                .withf(move |n| n == name)
                .times(1)
                .in_sequence(seq)
                .returning(|_| Ok(()));
        }
        repo.expect_count_rows()
            .with(eq(SeedTable::Category))
            .times(1)
            .in_sequence(seq)
            .returning(move |_| Ok(counts.0));
        repo.expect_create_table()
            .with(eq(SeedTable::SalesOrder))
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
        for order in SEED_SALES_ORDERS {
            repo.expect_insert_sales_order()
                .withf(move |o| *o == order)
                .times(1)
                .in_sequence(seq)
                .returning(|_| Ok(()));
        }
        repo.expect_count_rows()
            .with(eq(SeedTable::SalesOrder))
            .times(1)
            .in_sequence(seq)
            .returning(move |_| Ok(counts.1));
    }

    #[tokio::test]
    async fn test_run_executes_steps_in_order() {
        let mut repo = MockSeedRepository::new();
        let mut seq = Sequence::new();
        expect_full_run(&mut repo, &mut seq, (5, 5));

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        let report = seeder.run(&mut out).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                version: VERSION.to_string(),
                category_count: 5,
                sales_order_count: 5,
            }
        );
        assert_eq!(
            output(out),
            vec![
                format!("version={}", VERSION),
                "Creating Category in PostgreSQL!".to_string(),
                "Category table created and data is inserted!".to_string(),
                "Number of rows in Category table: 5".to_string(),
                "Creating SalesOrder in PostgreSQL!".to_string(),
                "SalesOrder table created and data is inserted!".to_string(),
                "Number of rows in SalesOrder table: 5".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_reports_counts_as_returned() {
        // A second run appends again; the seeder reports whatever the table holds
        let mut repo = MockSeedRepository::new();
        let mut seq = Sequence::new();
        expect_full_run(&mut repo, &mut seq, (10, 10));

        let seeder = Seeder::new(Arc::new(repo));
        let report = seeder.run(&mut Vec::new()).await.unwrap();

        assert_eq!(report.category_count, 10);
        assert_eq!(report.sales_order_count, 10);
    }

    #[tokio::test]
    async fn test_version_failure_stops_before_any_table_work() {
        let mut repo = MockSeedRepository::new();
        repo.expect_server_version().times(1).returning(|| {
            Err(AppError::statement(
                "error querying server version",
                DbErr::Custom("connection reset".to_string()),
            ))
        });

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        let err = seeder.run(&mut out).await.unwrap_err();

        assert!(err.to_string().starts_with("error querying server version"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_aborts_remaining_inserts() {
        let mut repo = MockSeedRepository::new();
        repo.expect_server_version()
            .times(1)
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_create_table()
            .with(eq(SeedTable::Category))
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_insert_category()
            .withf(|n| n == "Electronics" || n == "Apparel")
            .times(2)
            .returning(|_| Ok(()));
        repo.expect_insert_category()
            .withf(|n| n == "Toys")
            .times(1)
            .returning(|_| {
                Err(AppError::statement(
                    "error inserting into Category",
                    DbErr::Custom("disk full".to_string()),
                ))
            });

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        let err = seeder.run(&mut out).await.unwrap_err();

        assert!(err.to_string().starts_with("error inserting into Category"));
        assert_eq!(
            output(out),
            vec![
                format!("version={}", VERSION),
                "Creating Category in PostgreSQL!".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_sales_order_create_failure_after_categories() {
        let mut repo = MockSeedRepository::new();
        repo.expect_server_version()
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_create_table()
            .with(eq(SeedTable::Category))
            .returning(|_| Ok(()));
        repo.expect_insert_category()
            .times(SEED_CATEGORY_NAMES.len())
            .returning(|_| Ok(()));
        repo.expect_count_rows()
            .with(eq(SeedTable::Category))
            .returning(|_| Ok(5));
        repo.expect_create_table()
            .with(eq(SeedTable::SalesOrder))
            .times(1)
            .returning(|_| {
                Err(AppError::statement(
                    "error creating SalesOrder table",
                    DbErr::Custom("permission denied".to_string()),
                ))
            });

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        let err = seeder.run(&mut out).await.unwrap_err();

        assert!(err.to_string().starts_with("error creating SalesOrder table"));
        assert_eq!(output(out).last().unwrap(), "Creating SalesOrder in PostgreSQL!");
    }

    #[tokio::test]
    async fn test_status_reports_missing_tables() {
        let mut repo = MockSeedRepository::new();
        repo.expect_server_version()
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_table_exists().returning(|_| Ok(false));

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        seeder.status(&mut out, true).await.unwrap();

        assert_eq!(
            output(out),
            vec![
                format!("version={}", VERSION),
                "Category: missing".to_string(),
                "SalesOrder: missing".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_status_lists_rows() {
        let order_date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        let mut repo = MockSeedRepository::new();
        repo.expect_server_version()
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_table_exists().returning(|_| Ok(true));
        repo.expect_count_rows().returning(|_| Ok(1));
        repo.expect_list_categories().times(1).returning(|| {
            Ok(vec![Category {
                id: 1,
                name: "Electronics".to_string(),
            }])
        });
        repo.expect_list_sales_orders().times(1).returning(move || {
            Ok(vec![SalesOrder {
                id: 1,
                order_date,
                customer_name: "John Doe".to_string(),
                total_due_cents: 12345,
            }])
        });

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        seeder.status(&mut out, true).await.unwrap();

        assert_eq!(
            output(out),
            vec![
                format!("version={}", VERSION),
                "Category: 1 rows".to_string(),
                "  1\tElectronics".to_string(),
                "SalesOrder: 1 rows".to_string(),
                "  1\t2024-03-01 09:30:00\tJohn Doe\t123.45".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_status_without_rows_never_lists() {
        let mut repo = MockSeedRepository::new();
        repo.expect_server_version()
            .returning(|| Ok(VERSION.to_string()));
        repo.expect_table_exists().returning(|_| Ok(true));
        repo.expect_count_rows().returning(|_| Ok(3));
        repo.expect_list_categories().never();
        repo.expect_list_sales_orders().never();

        let seeder = Seeder::new(Arc::new(repo));
        let mut out = Vec::new();
        seeder.status(&mut out, false).await.unwrap();

        assert_eq!(output(out).len(), 3);
    }
}
