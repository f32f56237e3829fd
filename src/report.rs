use crate::config::ReportFormat;
use crate::db::models::UserRecord;
use crate::error::DemoError;
use serde::Serialize;
use std::io::Write;

/// One query's results, as written in the JSON format.
#[derive(Serialize)]
struct QueryReport<'a> {
    sql: &'a str,
    count: usize,
    records: &'a [UserRecord],
}

/// Writes the demo transcript.
pub struct Reporter<W> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// A plain status line. Omitted in the JSON format.
    pub fn line(&mut self, text: &str) -> Result<(), DemoError> {
        if self.format == ReportFormat::Text {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    pub fn dump_results(&mut self, sql: &str, records: &[UserRecord]) -> Result<(), DemoError> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.out)?;
                writeln!(self.out, "SQL: {sql} ==> {} records found.", records.len())?;
                for record in records {
                    writeln!(
                        self.out,
                        "User: {} [UID={} PWD={}]",
                        record.name, record.id, record.password
                    )?;
                }
            }
            ReportFormat::Json => {
                let report = QueryReport {
                    sql,
                    count: records.len(),
                    records,
                };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
