use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow, PgSslMode};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use tracing::debug;
use uuid::Uuid;

use super::{DatabaseClient, DbError, PostgresConfig, QueryResult};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// A parameter value for [`PostgresClient::query`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
    Null,
}

impl SqlParam {
    fn bind_to<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> QueryAs<'q, Postgres, T, PgArguments> {
        match self {
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Uuid(v) => query.bind(*v),
            SqlParam::Null => query.bind(Option::<String>::None),
        }
    }
}

/// Relational adapter over a sqlx connection pool.
///
/// Construction is lazy and never fails; the pool only dials out on
/// [`DatabaseClient::connect`] or the first query.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    pub fn new(config: &PostgresConfig) -> Self {
        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database);
        if config.ssl.unwrap_or(false) {
            options = options.ssl_mode(PgSslMode::Require);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Single-shot parameterized query. No transactions, no retries,
    /// no statement caching beyond what the pool does on its own.
    ///
    /// Zero matching rows come back as `rows: []`, `row_count: 0`.
    pub async fn query<T>(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, T>(sql);
        for param in params {
            query = param.bind_to(query);
        }
        let rows = query.fetch_all(&self.pool).await?;
        debug!(row_count = rows.len(), "query executed");
        Ok(QueryResult {
            row_count: rows.len(),
            rows,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DatabaseClient for PostgresClient {
    /// Establishes readiness by checking out one pooled connection.
    /// Unreachable hosts and rejected credentials surface as the pool's
    /// own error, unmodified.
    async fn connect(&self) -> Result<(), DbError> {
        let conn = self.pool.acquire().await?;
        drop(conn);
        Ok(())
    }

    /// Closes the pool. Idempotent.
    async fn disconnect(&self) -> Result<(), DbError> {
        self.pool.close().await;
        Ok(())
    }

    /// True only while the pool holds at least one open connection.
    fn is_connected(&self) -> bool {
        !self.pool.is_closed() && self.pool.size() > 0
    }
}
