use crate::db::models::UserRecord;
use crate::db::sqlite::UsersStorage;
use crate::error::DemoError;
use crate::query::executor::run_query;
use rand::Rng;
use tracing::info;

/// Clauses appended to any query that has a WHERE clause.
pub const INJECTION_SUFFIXES: [&str; 4] = ["or 1=1;", "or 2=2;", "or 'hi'='hi';", "or 'hack'='hack';"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionAttempt {
    /// Text that will be handed to the executor.
    pub sql: String,
    /// `None` when the input had no WHERE clause to attack.
    pub suffix: Option<&'static str>,
}

/// Append a uniformly chosen suffix if `sql` contains `where` in any case.
pub fn inject<R: Rng>(sql: &str, rng: &mut R) -> InjectionAttempt {
    if !sql.to_lowercase().contains("where") {
        return InjectionAttempt {
            sql: sql.to_string(),
            suffix: None,
        };
    }

    let suffix = INJECTION_SUFFIXES[rng.gen_range(0..INJECTION_SUFFIXES.len())];
    InjectionAttempt {
        sql: format!("{sql} {suffix}"),
        suffix: Some(suffix),
    }
}

/// Inject into `sql` and run the result through [`run_query`].
///
/// Returns the attempt so the caller can show what was actually executed.
pub async fn run_query_injection<R: Rng>(
    storage: &mut UsersStorage,
    sql: &str,
    rng: &mut R,
    records: &mut Vec<UserRecord>,
) -> Result<InjectionAttempt, DemoError> {
    let attempt = inject(sql, rng);
    info!(
        suffix = attempt.suffix.unwrap_or("<none>"),
        sql = %attempt.sql,
        "simulating injection"
    );
    run_query(storage, &attempt.sql, records).await?;
    Ok(attempt)
}
