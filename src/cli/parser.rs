use clap::{Parser, Subcommand};

/// Command-line interface definition for sbcdb
/// CLI application to create the SQLite configuration database of a session border controller
#[derive(Parser)]
#[command(
    name = "sbcdb",
    version = env!("CARGO_PKG_VERSION"),
    about = "Initialize and inspect the SQLite configuration database of a session border controller",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or inspect the SBC database
    Database {
        /// Create every missing table in PATH (default: the configured database, sbc-database.db)
        #[arg(
            short = 'i',
            long = "init",
            value_name = "PATH",
            num_args = 0..=1,
            help = "Init new database"
        )]
        init: Option<Option<String>>,

        /// Show tables and version rows of the database
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        /// Run `PRAGMA integrity_check`
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        /// Print reports as JSON instead of text
        #[arg(long = "json", help = "Print --init / --info reports as JSON")]
        json: bool,

        /// Database used by --info/--check when --init is not given
        #[arg(long = "db", value_name = "PATH")]
        db: Option<String>,
    },

    /// Show or write the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "write", help = "Write the effective configuration to the config file")]
        write: bool,
    },
}
