//! DuckDB database backend implementation
//!
//! Provides an embedded relational source for the export engine. Supports
//! both file-based persistence and in-memory mode.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{DatabaseBackend, DatabaseError, DatabaseResult};
use crate::schema::{FieldValue, Row};

/// DuckDB-backed archive source.
pub struct DuckDBBackend {
    /// Path to the database file (None for in-memory)
    db_path: Option<PathBuf>,
    connection: duckdb::Connection,
}

impl DuckDBBackend {
    /// Create a new DuckDB backend with a file-based database
    ///
    /// # Arguments
    /// * `db_path` - Path to the DuckDB database file
    pub fn new(db_path: impl AsRef<Path>) -> DatabaseResult<Self> {
        let path = db_path.as_ref().to_path_buf();
        let connection = duckdb::Connection::open(&path).map_err(|e| {
            DatabaseError::ConnectionFailed(format!("Failed to open DuckDB: {}", e))
        })?;

        Ok(Self {
            db_path: Some(path),
            connection,
        })
    }

    /// Create an in-memory DuckDB backend
    ///
    /// Useful for testing or scratch exports where persistence is not needed.
    pub fn in_memory() -> DatabaseResult<Self> {
        let connection = duckdb::Connection::open_in_memory().map_err(|e| {
            DatabaseError::ConnectionFailed(format!("Failed to create in-memory DuckDB: {}", e))
        })?;

        Ok(Self {
            db_path: None,
            connection,
        })
    }

    /// Get the database file path (None for in-memory)
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Check if this is an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.db_path.is_none()
    }

    fn transaction_statement(&mut self, sql: &str) -> DatabaseResult<()> {
        self.connection
            .execute_batch(sql)
            .map_err(|e| DatabaseError::TransactionFailed(format!("{} failed: {}", sql, e)))
    }

    /// Convert a DuckDB ValueRef to a field value
    fn value_ref_to_field(value: duckdb::types::ValueRef) -> FieldValue {
        use duckdb::types::ValueRef;

        match value {
            ValueRef::Null => FieldValue::Null,
            ValueRef::Boolean(b) => FieldValue::Integer(i64::from(b)),
            ValueRef::TinyInt(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::SmallInt(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::Int(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::BigInt(i) => FieldValue::Integer(i),
            ValueRef::HugeInt(i) => {
                // i128 may not fit; fall back to text
                match i64::try_from(i) {
                    Ok(n) => FieldValue::Integer(n),
                    Err(_) => FieldValue::Text(i.to_string()),
                }
            }
            ValueRef::UTinyInt(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::USmallInt(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::UInt(i) => FieldValue::Integer(i64::from(i)),
            ValueRef::UBigInt(i) => match i64::try_from(i) {
                Ok(n) => FieldValue::Integer(n),
                Err(_) => FieldValue::Text(i.to_string()),
            },
            ValueRef::Float(f) => FieldValue::Text(f.to_string()),
            ValueRef::Double(f) => FieldValue::Text(f.to_string()),
            ValueRef::Text(bytes) => FieldValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => FieldValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Timestamp(unit, raw) => {
                use duckdb::types::TimeUnit;
                let seconds = match unit {
                    TimeUnit::Second => raw,
                    TimeUnit::Millisecond => raw.div_euclid(1_000),
                    TimeUnit::Microsecond => raw.div_euclid(1_000_000),
                    TimeUnit::Nanosecond => raw.div_euclid(1_000_000_000),
                };
                match date_from_epoch_days(seconds.div_euclid(86_400)) {
                    Some(date) => FieldValue::Date(date),
                    None => FieldValue::Null,
                }
            }
            ValueRef::Date32(days) => match date_from_epoch_days(i64::from(days)) {
                Some(date) => FieldValue::Date(date),
                None => FieldValue::Null,
            },
            ValueRef::Time64(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Interval { .. } => FieldValue::Text(format!("{:?}", value)),
            ValueRef::List(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Enum(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Struct(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Map(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Union(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Array(_, _) => FieldValue::Text(format!("{:?}", value)),
            ValueRef::Decimal(d) => FieldValue::Text(d.to_string()),
        }
    }
}

fn date_from_epoch_days(days: i64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    epoch.checked_add_signed(chrono::Duration::try_days(days)?)
}

impl DatabaseBackend for DuckDBBackend {
    fn begin(&mut self) -> DatabaseResult<()> {
        self.transaction_statement("BEGIN TRANSACTION")
    }

    fn commit(&mut self) -> DatabaseResult<()> {
        self.transaction_statement("COMMIT")
    }

    fn rollback(&mut self) -> DatabaseResult<()> {
        self.transaction_statement("ROLLBACK")
    }

    fn fetch_all(&mut self, sql: &str) -> DatabaseResult<Vec<Row>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|e| DatabaseError::QueryFailed(format!("Prepare failed: {}", e)))?;

        // In DuckDB 1.4+, the query runs first, then columns are available
        let mut result_rows = stmt
            .query([])
            .map_err(|e| DatabaseError::QueryFailed(format!("Query failed: {}", e)))?;

        let column_count = result_rows.as_ref().map(|r| r.column_count()).unwrap_or(0);

        let mut rows = Vec::new();
        while let Some(row) = result_rows
            .next()
            .map_err(|e| DatabaseError::QueryFailed(format!("Row fetch error: {}", e)))?
        {
            let mut fields = Vec::with_capacity(column_count);
            for i in 0..column_count {
                let field = match row.get_ref(i) {
                    Ok(value_ref) => Self::value_ref_to_field(value_ref),
                    Err(_) => FieldValue::Null,
                };
                fields.push(field);
            }
            rows.push(fields);
        }

        Ok(rows)
    }

    fn execute_batch(&mut self, sql: &str) -> DatabaseResult<()> {
        self.connection
            .execute_batch(sql)
            .map_err(|e| DatabaseError::QueryFailed(format!("Batch execute failed: {}", e)))
    }
}
