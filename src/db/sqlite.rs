use crate::db::models::UserRecord;
use crate::db::schema::{INSERT_USER, LOOKUP_BY_NAME, SEED_USERS, USERS_DDL};
use crate::error::DemoError;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Connection, Executor, Sqlite, SqliteConnection};
use std::str::FromStr;
use tracing::{debug, info};

/// The one database handle of a run.
///
/// Wraps a single connection rather than a pool: every pooled `:memory:`
/// connection would open its own empty database.
pub struct UsersStorage {
    conn: SqliteConnection,
}

impl UsersStorage {
    pub async fn open(database_url: &str) -> Result<Self, DemoError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let conn = SqliteConnection::connect_with(&connect_opts).await?;
        debug!(database_url = %database_url, "connected");
        Ok(Self { conn })
    }

    /// Create `USERS` and insert the seed rows in one transaction.
    /// On failure the handle stays open; closing it is up to the caller.
    pub async fn initialize(&mut self) -> Result<(), DemoError> {
        const CREATE: &str = "create USERS table";
        const SEED: &str = "seed USERS table";

        sqlx::query(USERS_DDL)
            .execute(&mut self.conn)
            .await
            .map_err(DemoError::init(CREATE))?;

        let mut tx = self.conn.begin().await.map_err(DemoError::init(SEED))?;
        for (id, name, password) in SEED_USERS {
            insert(&mut *tx, id, name, password)
                .await
                .map_err(DemoError::init(SEED))?;
        }
        tx.commit().await.map_err(DemoError::init(SEED))?;

        info!(rows = SEED_USERS.len(), "USERS table seeded");
        Ok(())
    }

    pub async fn insert_user(
        &mut self,
        id: i64,
        name: &str,
        password: &str,
    ) -> Result<(), DemoError> {
        insert(&mut self.conn, id, name, password).await?;
        Ok(())
    }

    /// Run the fixed lookup with `name` bound, appending hits to `out`.
    pub async fn lookup_by_name(
        &mut self,
        name: &str,
        out: &mut Vec<UserRecord>,
    ) -> Result<(), DemoError> {
        let mut rows = sqlx::query(LOOKUP_BY_NAME).bind(name).fetch(&mut self.conn);
        while let Some(row) = rows.try_next().await? {
            out.push(UserRecord::from_typed_row(&row)?);
        }
        Ok(())
    }

    /// Execute `sql` verbatim, calling `on_row` once per result row.
    ///
    /// Multiple statements are allowed. Nothing here is bound or escaped.
    pub async fn scan<F>(&mut self, sql: &str, mut on_row: F) -> Result<(), DemoError>
    where
        F: FnMut(&SqliteRow) -> Result<(), DemoError>,
    {
        let mut rows = sqlx::raw_sql(sql).fetch(&mut self.conn);
        while let Some(row) = rows.try_next().await? {
            on_row(&row)?;
        }
        Ok(())
    }

    pub async fn close(self) -> Result<(), DemoError> {
        self.conn.close().await?;
        debug!("connection closed");
        Ok(())
    }
}

async fn insert<'c, E>(executor: E, id: i64, name: &str, password: &str) -> Result<(), sqlx::Error>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query(INSERT_USER)
        .bind(id)
        .bind(name)
        .bind(password)
        .execute(executor)
        .await?;
    Ok(())
}
