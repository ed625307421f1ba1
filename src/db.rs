use crate::config::PostgresConfig;
use crate::repo::RepositoryError;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::sql_query;
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

const MAX_CONNECTIONS: u32 = 10;
const MIN_IDLE_CONNECTIONS: u32 = 2;
const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60);
const MAX_IDLE_TIME: Duration = Duration::from_secs(30 * 60);

/// Builds the bounded connection pool and probes liveness with a `select 1`
/// before the pool is handed out. Callers blocked on an exhausted pool wait
/// until a connection frees or r2d2's checkout timeout elapses.
pub fn create_pool(cfg: &PostgresConfig) -> Result<DbPool, RepositoryError> {
    let manager = ConnectionManager::<PgConnection>::new(cfg.connection_string());
    let pool = r2d2::Pool::builder()
        .max_size(MAX_CONNECTIONS)
        .min_idle(Some(MIN_IDLE_CONNECTIONS))
        .max_lifetime(Some(MAX_CONNECTION_LIFETIME))
        .idle_timeout(Some(MAX_IDLE_TIME))
        .build(manager)
        .map_err(|e| RepositoryError::persistence("create connection pool", e))?;

    let mut conn = pool
        .get()
        .map_err(|e| RepositoryError::persistence("check out connection", e))?;
    sql_query("select 1")
        .execute(&mut conn)
        .map_err(|e| RepositoryError::persistence("ping database", e))?;

    Ok(pool)
}
