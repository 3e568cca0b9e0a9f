//! Read-only inspection of an initialized database.

use crate::db::pool::DbPool;
use crate::db::schema::{VERSION_SEEDS, table_names};
use crate::errors::AppResult;
use rusqlite::OptionalExtension;
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionRow {
    pub table_name: String,
    pub table_version: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub tables: Vec<String>,
    pub versions: Vec<VersionRow>,
    /// Tables of the SBC schema not present in the file.
    pub missing_tables: Vec<String>,
    /// Seed rows absent from `version` or carrying a different version number.
    pub missing_seeds: Vec<String>,
}

/// User tables, sorted by name.
pub fn list_tables(pool: &DbPool) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Rows of the `version` table, or an empty list when the table is missing.
pub fn version_rows(pool: &DbPool) -> rusqlite::Result<Vec<VersionRow>> {
    let exists: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'version'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if exists.is_none() {
        return Ok(Vec::new());
    }

    let mut stmt = pool
        .conn
        .prepare("SELECT table_name, table_version FROM version ORDER BY rowid")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(VersionRow {
                table_name: row.get(0)?,
                table_version: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

pub fn db_info(pool: &DbPool, db_path: &str) -> AppResult<DbInfo> {
    let size_bytes = fs::metadata(db_path).map(|m| m.len())?;

    let tables = list_tables(pool)?;
    let versions = version_rows(pool)?;

    Ok(DbInfo {
        path: db_path.to_string(),
        size_bytes,
        missing_tables: missing_tables(&tables),
        missing_seeds: missing_seeds(&versions),
        tables,
        versions,
    })
}

/// Schema tables not found in `tables`, in application order.
pub fn missing_tables(tables: &[String]) -> Vec<String> {
    table_names()
        .filter(|name| !tables.iter().any(|t| t == name))
        .map(str::to_string)
        .collect()
}

/// Expected `version` seeds that are absent or differ, as `name=version`.
pub fn missing_seeds(versions: &[VersionRow]) -> Vec<String> {
    VERSION_SEEDS
        .iter()
        .filter(|(name, version)| {
            !versions
                .iter()
                .any(|r| r.table_name == *name && r.table_version == *version)
        })
        .map(|(name, version)| format!("{}={}", name, version))
        .collect()
}

/// Run `PRAGMA integrity_check`; returns the engine's report lines (`["ok"]` when healthy).
pub fn integrity_check(pool: &DbPool) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let lines = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(lines)
}
