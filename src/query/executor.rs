use crate::db::models::UserRecord;
use crate::db::sqlite::UsersStorage;
use crate::error::DemoError;
use crate::query::request::QueryRequest;
use tracing::debug;

/// Classify `sql`, then run it. `records` is cleared first.
///
/// Lookup-shaped text is routed to the bound statement; everything else is
/// executed as written.
pub async fn run_query(
    storage: &mut UsersStorage,
    sql: &str,
    records: &mut Vec<UserRecord>,
) -> Result<(), DemoError> {
    records.clear();
    let request = QueryRequest::from_sql(sql)?;
    execute(storage, &request, records).await
}

/// Run an already classified request. `records` is cleared first and keeps
/// whatever was read if the engine fails midway.
pub async fn execute(
    storage: &mut UsersStorage,
    request: &QueryRequest,
    records: &mut Vec<UserRecord>,
) -> Result<(), DemoError> {
    records.clear();
    match request {
        QueryRequest::LookupByName { name } => {
            debug!(name = %name, sql = request.sql(), "bound lookup");
            storage.lookup_by_name(name, records).await
        }
        QueryRequest::Scan { sql } => {
            debug!(sql = %sql, "verbatim scan");
            storage
                .scan(sql, |row| {
                    records.push(UserRecord::from_raw_row(row)?);
                    Ok(())
                })
                .await
        }
    }
}
