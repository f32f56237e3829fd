use crate::db::schema::LOOKUP_BY_NAME;
use crate::error::DemoError;

/// Text that marks a query as a name lookup. Matched case-sensitively.
pub const LOOKUP_MARKER: &str = "WHERE NAME=";

/// What a query asks for.
///
/// `Scan` text goes to the engine untouched. `LookupByName` never puts the
/// name into SQL text; it is bound to [`LOOKUP_BY_NAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    Scan { sql: String },
    LookupByName { name: String },
}

impl QueryRequest {
    pub fn scan(sql: impl Into<String>) -> Self {
        Self::Scan { sql: sql.into() }
    }

    pub fn lookup_by_name(name: impl Into<String>) -> Self {
        Self::LookupByName { name: name.into() }
    }

    /// Classify raw query text.
    ///
    /// Text containing [`LOOKUP_MARKER`] becomes a lookup for the first string
    /// literal after the marker; anything after that literal is dropped.
    /// All other text is a scan.
    pub fn from_sql(sql: &str) -> Result<Self, DemoError> {
        let Some(pos) = sql.find(LOOKUP_MARKER) else {
            return Ok(Self::scan(sql));
        };
        let rest = &sql[pos + LOOKUP_MARKER.len()..];
        let name = parse_string_literal(rest).map_err(|reason| DemoError::MalformedLookup {
            query: sql.to_string(),
            reason,
        })?;
        Ok(Self::LookupByName { name })
    }

    /// The statement text the engine will see.
    pub fn sql(&self) -> &str {
        match self {
            Self::Scan { sql } => sql,
            Self::LookupByName { .. } => LOOKUP_BY_NAME,
        }
    }
}

/// Read one single-quoted SQL literal from the start of `input`.
/// A doubled quote inside the literal stands for one quote.
fn parse_string_literal(input: &str) -> Result<String, &'static str> {
    let mut chars = input.trim_start().chars().peekable();
    if chars.next() != Some('\'') {
        return Err("expected a quoted name after WHERE NAME=");
    }

    let mut value = String::new();
    while let Some(c) = chars.next() {
        if c != '\'' {
            value.push(c);
            continue;
        }
        if chars.peek() == Some(&'\'') {
            chars.next();
            value.push('\'');
        } else {
            return Ok(value);
        }
    }
    Err("unterminated string literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_marker_is_a_scan() {
        let req = QueryRequest::from_sql("SELECT * from USERS").unwrap();
        assert_eq!(req, QueryRequest::scan("SELECT * from USERS"));
        assert_eq!(req.sql(), "SELECT * from USERS");
    }

    #[test]
    fn lookup_extracts_first_literal() {
        let req =
            QueryRequest::from_sql("SELECT ID, NAME, PASSWORD FROM USERS WHERE NAME='Fred'")
                .unwrap();
        assert_eq!(req, QueryRequest::lookup_by_name("Fred"));
        assert_eq!(req.sql(), LOOKUP_BY_NAME);
    }

    #[test]
    fn trailing_clauses_are_discarded() {
        let req = QueryRequest::from_sql(
            "SELECT ID, NAME, PASSWORD FROM USERS WHERE NAME='Fred' or 'hack'='hack';",
        )
        .unwrap();
        assert_eq!(req, QueryRequest::lookup_by_name("Fred"));
    }

    #[test]
    fn doubled_quote_unescapes() {
        let req = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME='O''Brien'").unwrap();
        assert_eq!(req, QueryRequest::lookup_by_name("O'Brien"));
    }

    #[test]
    fn lone_quote_ends_the_literal() {
        let req = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME='O'Brien'").unwrap();
        assert_eq!(req, QueryRequest::lookup_by_name("O"));
    }

    #[test]
    fn whitespace_before_literal_is_allowed() {
        let req = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME=  'Wilma'").unwrap();
        assert_eq!(req, QueryRequest::lookup_by_name("Wilma"));
    }

    #[test]
    fn lowercase_marker_is_not_a_lookup() {
        let sql = "SELECT * FROM USERS where name='Fred'";
        assert_eq!(QueryRequest::from_sql(sql).unwrap(), QueryRequest::scan(sql));
    }

    #[test]
    fn missing_quote_is_malformed() {
        let err = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME=Fred").unwrap_err();
        match err {
            DemoError::MalformedLookup { query, reason } => {
                assert_eq!(query, "SELECT * FROM USERS WHERE NAME=Fred");
                assert!(reason.contains("expected a quoted name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unterminated_literal_is_malformed() {
        let err = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME='Fred").unwrap_err();
        assert!(matches!(
            err,
            DemoError::MalformedLookup { reason: "unterminated string literal", .. }
        ));
    }

    #[test]
    fn marker_at_end_of_text_is_malformed() {
        let err = QueryRequest::from_sql("SELECT * FROM USERS WHERE NAME=").unwrap_err();
        assert!(matches!(err, DemoError::MalformedLookup { .. }));
    }
}
