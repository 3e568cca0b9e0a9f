//! Scoped SQLite connection handle (lightweight for CLI usage).
//!
//! The connection is released when the handle goes out of scope; [`DbPool::close`] does the same
//! explicitly and reports the close error instead of discarding it.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database at `path`, creating the file if it does not exist.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open an existing database without creating it.
    pub fn open_existing(path: &str) -> Result<Self> {
        use rusqlite::OpenFlags;

        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }

    pub fn close(self) -> Result<()> {
        // On failure rusqlite hands the connection back; dropping it releases the handle.
        self.conn.close().map_err(|(_conn, e)| e)
    }
}
