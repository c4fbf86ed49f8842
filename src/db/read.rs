//! Read paths never surface a failure to the caller: a miss or an error
//! degrades to a sentinel, an empty list or a fixed scalar. The error is still
//! logged here so a broken store does not go unnoticed.

use rusqlite::{Connection, Params};
use tracing::warn;

use super::connection::Database;
use crate::error::Result;

/// Unwrap a single-row lookup, substituting `invalid()` on a miss or failure.
pub(crate) fn or_sentinel<T>(result: Result<Option<T>>, invalid: fn() -> T, what: &str) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => invalid(),
        Err(err) => {
            warn!(error = %err, "failed to read {what} profile");
            invalid()
        }
    }
}

/// Unwrap a scalar query, substituting `fallback` on failure.
pub(crate) fn or_fallback<T>(result: Result<T>, fallback: T, what: &str) -> T {
    result.unwrap_or_else(|err| {
        warn!(error = %err, "failed to compute {what}");
        fallback
    })
}

/// Run a query whose first column is an id and collect the ids in row order.
/// Any failure yields an empty list.
pub(crate) fn id_list(db: &Database, what: &str, sql: &str, params: impl Params) -> Vec<i64> {
    let result = db.with_connection(|conn: &Connection| {
        let mut stmt = conn.prepare(sql)?;
        let ids = stmt
            .query_map(params, |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
    });
    or_fallback(result, Vec::new(), what)
}
