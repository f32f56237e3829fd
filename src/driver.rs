//! The fixed demonstration sequence.

use crate::config::Config;
use crate::db::models::UserRecord;
use crate::db::sqlite::UsersStorage;
use crate::error::DemoError;
use crate::query::{run_query, run_query_injection};
use crate::report::Reporter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::{error, info, warn};

pub const FULL_SCAN_SQL: &str = "SELECT * from USERS";
pub const NAME_LOOKUP_SQL: &str = "SELECT ID, NAME, PASSWORD FROM USERS WHERE NAME='Fred'";

/// Open, seed, query, attack, close.
///
/// Returns `Err` only for fatal failures: connection, initialization, or
/// writing the transcript. Failed queries are logged and skipped.
pub async fn run<W: Write>(config: &Config, out: W) -> Result<(), DemoError> {
    let mut reporter = Reporter::new(out, config.report_format);
    reporter.line("SQL Injection Example")?;

    let mut storage = UsersStorage::open(&config.database_url)
        .await
        .inspect_err(|e| error!(error = %e, "failed to connect to the database"))?;
    reporter.line("Connected to the database.")?;

    let outcome = seed_and_query(&mut storage, &mut reporter, config).await;
    let closed = storage.close().await;
    outcome?;
    closed
}

async fn seed_and_query<W: Write>(
    storage: &mut UsersStorage,
    reporter: &mut Reporter<W>,
    config: &Config,
) -> Result<(), DemoError> {
    if let Err(e) = storage.initialize().await {
        error!(error = %e, "database initialization failed; terminating");
        return Err(e);
    }
    reporter.line("USERS table created.")?;

    let mut rng = match config.injection_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut records: Vec<UserRecord> = Vec::new();

    for sql in [FULL_SCAN_SQL, NAME_LOOKUP_SQL] {
        if let Err(e) = run_query(storage, sql, &mut records).await {
            error!(sql = %sql, error = %e, "query failed; stopping");
            return Ok(());
        }
        reporter.dump_results(sql, &records)?;
    }

    for attempt in 0..config.injection_attempts {
        match run_query_injection(storage, NAME_LOOKUP_SQL, &mut rng, &mut records).await {
            Ok(injected) => reporter.dump_results(&injected.sql, &records)?,
            Err(e) => warn!(attempt, error = %e, "injection attempt failed; skipping"),
        }
    }

    info!(attempts = config.injection_attempts, "demonstration finished");
    Ok(())
}
