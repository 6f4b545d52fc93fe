//! Column decoding shared by the repositories

use crate::{DbError, Result};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) fn uuid_column(row: &SqliteRow, table: &'static str, column: &str) -> Result<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DbError::corrupt(table, format!("{column} '{raw}' is not a UUID: {e}")))
}

/// Timestamps are stored as Unix milliseconds
pub(crate) fn timestamp_column(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> Result<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::corrupt(table, format!("{column} {millis} is out of range")))
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'`
pub(crate) fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
