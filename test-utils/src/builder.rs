use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GuildChannels, GuildRoles};
///
/// let test = TestBuilder::new()
///     .with_table(GuildChannels)
///     .with_table(GuildRoles)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements derived from the registered entities.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new builder with no tables registered.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers an entity whose table should exist in the test database.
    ///
    /// The table schema is derived from the entity definition, matching what
    /// the migrations would create for SQLite.
    ///
    /// # Arguments
    /// - `entity` - The SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DatabaseBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every
    /// registered table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test environment
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
