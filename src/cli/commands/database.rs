use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize_schema;
use crate::db::pool::DbPool;
use crate::db::stats::{self, DbInfo};
use crate::errors::{AppError, AppResult};
use crate::models::InitReport;
use crate::ui::messages::{group_failure_line, info, section, success, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::path::expand_tilde_str;
use crate::utils::table::Table;
use std::path::Path;

/// Handle the `database` command
///
/// `--init` never fails from the caller's point of view: statement errors are logged by the
/// initializer and summarized here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Database {
        init,
        info: show_info,
        check,
        json,
        db,
    } = cmd
    {
        let db_path = match (init, db) {
            (Some(Some(path)), _) => expand_tilde_str(path),
            (_, Some(path)) => expand_tilde_str(path),
            _ => expand_tilde_str(&cfg.database),
        };

        if init.is_none() && !*show_info && !*check {
            info("Nothing to do: use --init [PATH], --info or --check");
            return Ok(());
        }

        //
        // 1) INIT
        //
        if init.is_some() {
            if *json {
                eprintln!("database called: {}", db_path);
            } else {
                println!("database called: {}", db_path);
            }

            let report = initialize_schema(&db_path);

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        //
        // 2) INFO
        //
        if *show_info {
            let pool = open_existing(&db_path)?;
            let db_info = stats::db_info(&pool, &db_path)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&db_info)?);
            } else {
                print_info(&db_info);
            }
        }

        //
        // 3) CHECK
        //
        if *check {
            let pool = open_existing(&db_path)?;
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let lines = stats::integrity_check(&pool)?;
            if lines.len() == 1 && lines[0] == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{}", RED, RESET);
                for line in lines {
                    println!("    {}", line);
                }
            }
        }
    }

    Ok(())
}

fn open_existing(db_path: &str) -> AppResult<DbPool> {
    if !Path::new(db_path).exists() {
        return Err(AppError::DbNotFound(db_path.to_string()));
    }
    Ok(DbPool::open_existing(db_path)?)
}

fn print_report(report: &InitReport) {
    if report.is_clean() {
        success(format!(
            "{} groups applied to {}",
            report.applied(),
            report.database
        ));
        return;
    }

    warning(format!(
        "{} groups applied, {}{}{} failed",
        report.applied(),
        RED,
        report.failures().count(),
        RESET
    ));
    for outcome in report.failures() {
        let reason = outcome.error.as_deref().unwrap_or_default();
        println!("    {}", group_failure_line(&outcome.name, reason));
    }
}

fn print_info(db_info: &DbInfo) {
    section("Database");
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_info.path, RESET);
    println!(
        "{}• Size:{} {:.2} KB",
        CYAN,
        RESET,
        db_info.size_bytes as f64 / 1024.0
    );
    println!("{}• Tables:{} {}", CYAN, RESET, db_info.tables.len());
    for name in &db_info.tables {
        println!("    {}", name);
    }
    println!();

    let mut table = Table::new(&["TABLE", "VERSION"]);
    for row in &db_info.versions {
        table.add_row(vec![row.table_name.clone(), row.table_version.to_string()]);
    }
    if table.is_empty() {
        println!("{}(no version rows){}", GREY, RESET);
    } else {
        print!("{}", table.render());
    }
    println!();

    if db_info.missing_tables.is_empty() && db_info.missing_seeds.is_empty() {
        success("Schema complete");
        return;
    }
    if !db_info.missing_tables.is_empty() {
        warning(format!(
            "Missing tables: {}",
            db_info.missing_tables.join(", ")
        ));
    }
    if !db_info.missing_seeds.is_empty() {
        warning(format!(
            "Missing version rows: {}",
            db_info.missing_seeds.join(", ")
        ));
    }
}
