//! Schema migrations, gated on `PRAGMA user_version` so that repeated
//! initialization against the same database never resets or duplicates data.

mod v001_analytics_tables;

use rusqlite::Connection;

use docent_core::errors::DocentResult;

use crate::to_storage_err;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Run all pending migrations. Idempotent.
pub fn run_migrations(conn: &Connection) -> DocentResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if current < 1 {
        v001_analytics_tables::migrate(conn)?;
    }

    if current < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(from = current, to = SCHEMA_VERSION, "analytics schema migrated");
    }
    Ok(())
}
