use crate::db::pool::DbPool;
use crate::db::schema::{SCHEMA_GROUPS, SchemaGroup};
use crate::models::{GroupOutcome, InitReport};
use crate::ui::messages::{error, group_failure};
use chrono::Local;

/// Initialize the SBC database at `path` with the full schema.
///
/// Best effort: every group is attempted, failures are logged and recorded in the returned
/// report, nothing is propagated to the caller.
pub fn initialize_schema(path: &str) -> InitReport {
    apply_groups(path, SCHEMA_GROUPS)
}

/// Apply `groups` in order to the database at `path`.
///
/// A group stops at its first failing statement; the next group is attempted regardless.
/// The connection is closed before returning.
pub fn apply_groups(path: &str, groups: &[SchemaGroup]) -> InitReport {
    let mut report = InitReport::new(path, Local::now().to_rfc3339());

    let mut pool = match DbPool::new(path) {
        Ok(pool) => pool,
        Err(e) => {
            error(format!("{}: {}", path, e));
            let reason = format!("database not open: {}", e);
            report.open_error = Some(e.to_string());

            for group in groups {
                group_failure(group.name, &reason);
                report.outcomes.push(GroupOutcome::failed(group.name, reason.clone()));
            }
            return report;
        }
    };

    for group in groups {
        match pool.with_conn(|conn| conn.execute_batch(group.sql)) {
            Ok(()) => report.outcomes.push(GroupOutcome::ok(group.name)),
            Err(e) => {
                group_failure(group.name, &e.to_string());
                report.outcomes.push(GroupOutcome::failed(group.name, e.to_string()));
            }
        }
    }

    if let Err(e) = pool.close() {
        error(format!("{}: failed to close database: {}", path, e));
        report.close_error = Some(e.to_string());
    }

    report
}
