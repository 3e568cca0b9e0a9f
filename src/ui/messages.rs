//! Console messages. Errors go to stderr so that `--json` output on stdout stays parseable.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg);
    if level == Level::Error {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Format the line reported for a schema group that failed to apply.
pub fn group_failure_line(group: &str, reason: &str) -> String {
    format!("{}: {}", group, reason)
}

/// Log a schema group that failed to apply, e.g. `❌ dispatcher: UNIQUE constraint failed: ...`.
pub fn group_failure(group: &str, reason: &str) {
    error(group_failure_line(group, reason));
}

/// Section title for `database --info`.
pub fn section<T: fmt::Display>(title: T) {
    println!("{}{}── {} ──{}", Level::Info.color(), BOLD, title, RESET);
}
