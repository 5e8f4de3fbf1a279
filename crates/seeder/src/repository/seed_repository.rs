//! Seed repository implementation over raw SQL statements.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, QueryResult, Statement, Value};

use common::{AppError, AppResult};
use domain::{Category, NewSalesOrder, SalesOrder, SeedTable};

use super::entities::{cents_to_decimal, CategoryRow, SalesOrderRow};
use crate::infra::schema;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Seed repository trait for dependency injection.
///
/// Every method issues exactly one statement.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Server version string reported by `SELECT version()`
    async fn server_version(&self) -> AppResult<String>;

    /// Create the table if it does not exist
    async fn create_table(&self, table: SeedTable) -> AppResult<()>;

    /// Insert one category row
    async fn insert_category(&self, name: &str) -> AppResult<()>;

    /// Insert one sales order row
    async fn insert_sales_order(&self, order: &NewSalesOrder) -> AppResult<()>;

    /// Number of rows currently in the table
    async fn count_rows(&self, table: SeedTable) -> AppResult<i64>;

    /// Whether the table exists in the current search path
    async fn table_exists(&self, table: SeedTable) -> AppResult<bool>;

    /// All categories in primary key order
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// All sales orders in primary key order
    async fn list_sales_orders(&self) -> AppResult<Vec<SalesOrder>>;
}

/// Concrete implementation of SeedRepository
pub struct SeedStore {
    db: Arc<DatabaseConnection>,
}

impl SeedStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn statement(&self, sql: impl Into<String>) -> Statement {
        Statement::from_string(self.db.get_database_backend(), sql)
    }

    fn statement_with_values<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    async fn query_scalar_row(&self, stmt: Statement, context: &str) -> AppResult<QueryResult> {
        let sql = stmt.sql.clone();
        self.db
            .query_one(stmt)
            .await
            .map_err(|e| AppError::statement(context, e))?
            .ok_or_else(|| AppError::empty_result(sql))
    }
}

#[async_trait]
impl SeedRepository for SeedStore {
    async fn server_version(&self) -> AppResult<String> {
        let context = "error querying server version";
        let row = self
            .query_scalar_row(self.statement(schema::SELECT_VERSION), context)
            .await?;

        row.try_get::<String>("", "version")
            .map_err(|e| AppError::statement(context, e))
    }

    async fn create_table(&self, table: SeedTable) -> AppResult<()> {
        tracing::debug!(%table, "Creating table if missing");

        self.db
            .execute(self.statement(schema::create_table(table)))
            .await
            .map_err(|e| AppError::statement(format!("error creating {} table", table), e))?;
        Ok(())
    }

    async fn insert_category(&self, name: &str) -> AppResult<()> {
        tracing::debug!(name, "Inserting category");

        self.db
            .execute(self.statement_with_values(schema::INSERT_CATEGORY, [Value::from(name)]))
            .await
            .map_err(|e| AppError::statement("error inserting into Category", e))?;
        Ok(())
    }

    async fn insert_sales_order(&self, order: &NewSalesOrder) -> AppResult<()> {
        tracing::debug!(
            customer = order.customer_name,
            total_due = %cents_to_decimal(order.total_due_cents),
            "Inserting sales order"
        );

        let values = [
            Value::from(order.customer_name),
            Value::from(cents_to_decimal(order.total_due_cents)),
        ];
        self.db
            .execute(self.statement_with_values(schema::INSERT_SALES_ORDER, values))
            .await
            .map_err(|e| AppError::statement("error inserting into SalesOrder", e))?;
        Ok(())
    }

    async fn count_rows(&self, table: SeedTable) -> AppResult<i64> {
        let context = format!("error counting {} rows", table);
        let row = self
            .query_scalar_row(self.statement(schema::count_rows(table)), &context)
            .await?;

        row.try_get::<i64>("", "count")
            .map_err(|e| AppError::statement(context, e))
    }

    async fn table_exists(&self, table: SeedTable) -> AppResult<bool> {
        let context = format!("error checking {} table", table);
        let stmt = self.statement_with_values(schema::TABLE_EXISTS, [Value::from(table.name())]);
        let row = self.query_scalar_row(stmt, &context).await?;

        row.try_get::<bool>("", "present")
            .map_err(|e| AppError::statement(context, e))
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let rows = CategoryRow::find_by_statement(self.statement(schema::SELECT_CATEGORIES))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::statement("error listing Category rows", e))?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_sales_orders(&self) -> AppResult<Vec<SalesOrder>> {
        let rows = SalesOrderRow::find_by_statement(self.statement(schema::SELECT_SALES_ORDERS))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::statement("error listing SalesOrder rows", e))?;

        rows.into_iter().map(SalesOrder::try_from).collect()
    }
}
