//! Throwaway Postgres schemas for the database tests.
//!
//! Every [`PgTest`] creates its own schema on the server at `DATABASE_URL`,
//! loads the table definitions and the requested fixtures into it and points
//! the pool's `search_path` at it, so tests can run in parallel. Without
//! `DATABASE_URL` the constructor returns `None` and the test returns early.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

const SCHEMA_SQL: &str = include_str!("../schema/food_waste.sql");

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    Providers,
    Donations,
}

impl Fixture {
    fn sql(self) -> &'static str {
        match self {
            Fixture::Providers => include_str!("../fixtures/providers.sql"),
            Fixture::Donations => include_str!("../fixtures/donations.sql"),
        }
    }
}

pub struct PgTest {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl PgTest {
    pub async fn new(fixtures: &[Fixture]) -> Option<Self> {
        let url = dotenvy::var("DATABASE_URL").unwrap_or_default();
        if url.is_empty() {
            eprintln!("DATABASE_URL is not set, skipping database test");
            return None;
        }

        let options = PgConnectOptions::from_str(&url)
            .expect("DATABASE_URL must be a valid connection string");
        let schema = Self::generate_unique_schema_name();

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await
            .expect("failed to connect to DATABASE_URL");
        let create = format!(
            "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema};"
        );
        sqlx::raw_sql(&create)
            .execute(&admin)
            .await
            .expect("failed to create test schema");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options.options([("search_path", schema.as_str())]))
            .await
            .expect("failed to connect to test schema");

        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&pool)
            .await
            .expect("failed to create tables");
        for fixture in fixtures {
            sqlx::raw_sql(fixture.sql())
                .execute(&pool)
                .await
                .unwrap_or_else(|e| panic!("failed to load {fixture:?} fixture: {e}"));
        }

        Some(PgTest {
            pool,
            admin,
            schema,
        })
    }

    /// Drops the schema and everything in it.
    pub async fn teardown(self) {
        self.pool.close().await;

        let drop = format!("DROP SCHEMA IF EXISTS {} CASCADE;", self.schema);
        if let Err(e) = sqlx::raw_sql(&drop).execute(&self.admin).await {
            eprintln!("failed to drop test schema {}: {e}", self.schema);
        }
        self.admin.close().await;
    }

    fn generate_unique_schema_name() -> String {
        let n = NEXT_SCHEMA.fetch_add(1, Ordering::Relaxed);
        format!("food_donations_test_{}_{n}", std::process::id())
    }
}
