use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// One row of `USERS`. The identifier is kept as text, the way verbatim
/// queries hand it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(id: impl ToString, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Decode a row produced by the fixed `ID, NAME, PASSWORD` lookup.
    pub(crate) fn from_typed_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get(0)?;
        let name: String = row.try_get(1)?;
        let password: String = row.try_get(2)?;
        Ok(Self::new(id, name, password))
    }

    /// Decode the first three columns of an arbitrary row as text.
    /// SQLite converts integers and reals to their text form; NULL reads as `NULL`.
    pub(crate) fn from_raw_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: column_text(row, 0)?,
            name: column_text(row, 1)?,
            password: column_text(row, 2)?,
        })
    }
}

fn column_text(row: &SqliteRow, index: usize) -> Result<String, sqlx::Error> {
    let value: Option<String> = row.try_get_unchecked(index)?;
    Ok(value.unwrap_or_else(|| "NULL".to_string()))
}
