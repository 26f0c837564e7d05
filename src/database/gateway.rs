use std::future::Future;
use std::time::Duration;

use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{FromRow, Sqlite};
use thiserror::Error;

use crate::config::AppConfig;
use crate::database::statements::{QueryDescriptor, SqlArg};

/// Store failures, split by who can do something about them.
///
/// `Malformed` is a programmer error (bad SQL text or a row that does not
/// decode into the requested type) and should never be retried. `Rejected`
/// means the store refused an otherwise well-formed statement (constraint
/// violation, missing table). `Unavailable` and `Timeout` are transport-level
/// and safe to retry.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("malformed statement: {0}")]
    Malformed(#[source] sqlx::Error),
    #[error("store rejected statement: {0}")]
    Rejected(#[source] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    #[error("statement timed out after {0:?}")]
    Timeout(Duration),
}

impl DbError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, DbError::Unavailable(_) | DbError::Timeout(_))
    }

    fn classify(err: sqlx::Error) -> DbError {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::Unavailable(err),
            sqlx::Error::Database(_) => DbError::Rejected(err),
            _ => DbError::Malformed(err),
        }
    }
}

/// Executes query descriptors against the pool.
///
/// Connections are scoped per call (checked out of the pool, returned when
/// the statement finishes). Every statement runs under the configured
/// per-statement timeout.
#[derive(Clone)]
pub struct Gateway {
    pool: SqlitePool,
    statement_timeout: Duration,
}

impl Gateway {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        Gateway {
            pool,
            statement_timeout: config.statement_timeout,
        }
    }

    /// Run a read, collecting every row into `T`.
    pub async fn fetch_all<T>(&self, query: QueryDescriptor) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let QueryDescriptor { text, args } = query;
        let fut = async {
            let mut q = sqlx::query_as::<_, T>(&text);
            for arg in args {
                q = bind_query_as(q, arg);
            }
            q.fetch_all(&self.pool).await
        };
        self.timed(fut).await
    }

    /// Run a write, returning rows affected.
    pub async fn execute(&self, query: QueryDescriptor) -> Result<u64, DbError> {
        let QueryDescriptor { text, args } = query;
        let fut = async {
            let mut q = sqlx::query(&text);
            for arg in args {
                q = bind_query(q, arg);
            }
            q.execute(&self.pool).await.map(|res| res.rows_affected())
        };
        self.timed(fut).await
    }

    /// Run every statement inside one transaction; any failure rolls back the
    /// whole batch. The timeout covers the batch as a whole, and an expired
    /// timeout drops (and thereby rolls back) the open transaction.
    pub async fn execute_batch_atomic(
        &self,
        queries: Vec<QueryDescriptor>,
    ) -> Result<u64, DbError> {
        let fut = async {
            let mut tx = self.pool.begin().await?;
            let mut affected = 0u64;
            for QueryDescriptor { text, args } in &queries {
                let mut q = sqlx::query(text);
                for arg in args {
                    q = bind_query(q, arg.clone());
                }
                affected += q.execute(&mut *tx).await?.rows_affected();
            }
            tx.commit().await?;
            Ok(affected)
        };
        self.timed(fut).await
    }

    async fn timed<T>(
        &self,
        fut: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, DbError> {
        match tokio::time::timeout(self.statement_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(DbError::classify(err)),
            Err(_) => Err(DbError::Timeout(self.statement_timeout)),
        }
    }
}

fn bind_query_as<'q, T>(
    q: sqlx::query::QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    arg: SqlArg,
) -> sqlx::query::QueryAs<'q, Sqlite, T, SqliteArguments<'q>> {
    match arg {
        SqlArg::Int(v) => q.bind(v),
        SqlArg::Text(v) => q.bind(v),
        SqlArg::Date(v) => q.bind(v),
        SqlArg::Timestamp(v) => q.bind(v),
        SqlArg::Null => q.bind(Option::<String>::None),
    }
}

fn bind_query<'q>(
    q: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    arg: SqlArg,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match arg {
        SqlArg::Int(v) => q.bind(v),
        SqlArg::Text(v) => q.bind(v),
        SqlArg::Date(v) => q.bind(v),
        SqlArg::Timestamp(v) => q.bind(v),
        SqlArg::Null => q.bind(Option::<String>::None),
    }
}
