//! SQL DDL and fixed seed data for the `USERS` table.

/// `ID` is declared `INT`, not `INTEGER`, so it is not a rowid alias.
/// No `IF NOT EXISTS`: creating the table twice is an error.
pub const USERS_DDL: &str = r#"
CREATE TABLE USERS(
    ID       INT  PRIMARY KEY NOT NULL,
    NAME     TEXT NOT NULL,
    PASSWORD TEXT NOT NULL
)
"#;

pub const INSERT_USER: &str = "INSERT INTO USERS (ID, NAME, PASSWORD) VALUES (?, ?, ?)";

/// The only statement that ever sees user-supplied names.
pub const LOOKUP_BY_NAME: &str = "SELECT ID, NAME, PASSWORD FROM USERS WHERE NAME = ?";

/// (ID, NAME, PASSWORD), inserted in this order.
pub const SEED_USERS: [(i64, &str, &str); 4] = [
    (1, "Fred", "Flinstone"),
    (2, "Barney", "Rubble"),
    (3, "Wilma", "Flinstone"),
    (4, "Betty", "Rubble"),
];
