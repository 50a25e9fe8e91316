use rusqlite::{Connection, OpenFlags};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use loan_perf_core::{LoanPerfError, LoanPerfResult, Money, RawLoanRow};

/// Columns the loan table must expose. The underlying schema keeps the
/// original LendingClub field names.
const REQUIRED_COLUMNS: &str =
    "funded_amnt_inv, total_pymnt, out_prncp, recoveries, grade, loan_status";

/// Pull every loan row out of the SQLite database at `path`.
///
/// The database is opened read-only, so a misnamed path is a connection
/// error rather than a silently created empty database. The connection is
/// dropped (closed) when this function returns, on all paths.
pub fn load_loans(path: &str) -> LoanPerfResult<Vec<RawLoanRow>> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| LoanPerfError::Connection {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    // Preparing the statement validates the schema without executing it,
    // so a missing table/column is reported as such, not as a mid-read
    // failure.
    let query = format!("SELECT {} FROM loan", REQUIRED_COLUMNS);
    let mut stmt = conn.prepare(&query).map_err(|_| LoanPerfError::Schema {
        path: path.to_string(),
        columns: REQUIRED_COLUMNS.to_string(),
    })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(RawLoanRow {
                funded_amount: money(row.get(0)?),
                total_payment: money(row.get(1)?),
                outstanding_principal: money(row.get(2)?),
                recoveries: money(row.get(3)?),
                grade: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                raw_status: row.get(5)?,
            })
        })
        .map_err(|e| connection_error(path, e))?;

    let mut loans = Vec::new();
    for row in rows {
        loans.push(row.map_err(|e| connection_error(path, e))?);
    }

    Ok(loans)
}

fn connection_error(path: &str, e: rusqlite::Error) -> LoanPerfError {
    LoanPerfError::Connection {
        path: path.to_string(),
        reason: e.to_string(),
    }
}

/// SQLite REAL (or NULL) to Decimal at the load boundary. NULL and
/// non-finite values count as zero.
fn money(value: Option<f64>) -> Money {
    value
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn fixture_db(dir: &std::path::Path) -> String {
        let path = dir.join("loans.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE loan (
                funded_amnt_inv REAL,
                total_pymnt REAL,
                out_prncp REAL,
                recoveries REAL,
                grade TEXT,
                loan_status TEXT
            );",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO loan VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![1000.0, 1100.0, 0.0, 0.0, "A", "Fully Paid"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO loan VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![500.0, 100.0, 400.0, 0.0, "B", Option::<String>::None],
        )
        .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn loads_rows_including_null_statuses() {
        let dir = tempdir().unwrap();
        let loans = load_loans(&fixture_db(dir.path())).unwrap();

        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].funded_amount, dec!(1000));
        assert_eq!(loans[0].grade, "A");
        assert_eq!(loans[0].raw_status.as_deref(), Some("Fully Paid"));
        assert_eq!(loans[1].raw_status, None);
    }

    #[test]
    fn missing_file_is_a_connection_error() {
        let err = load_loans("no_such_database.sqlite").unwrap_err();
        assert!(matches!(err, LoanPerfError::Connection { .. }));
    }

    #[test]
    fn missing_table_is_a_schema_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE unrelated (id INTEGER);")
            .unwrap();

        let err = load_loans(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoanPerfError::Schema { .. }));
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE loan (funded_amnt_inv REAL, grade TEXT);")
            .unwrap();

        let err = load_loans(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoanPerfError::Schema { .. }));
    }
}
