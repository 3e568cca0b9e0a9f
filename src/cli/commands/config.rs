use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` command
pub fn handle(cmd: &Commands, cfg: &Config, config_file: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        write,
    } = cmd
    {
        if !*print_config && !*write {
            info(format!("Config file: {}", config_file.display()));
            return Ok(());
        }

        if *print_config {
            println!("📄 Current configuration ({}):", config_file.display());
            print!("{}", cfg.to_yaml()?);
        }

        if *write {
            cfg.save_to(config_file)?;
            success(format!("Configuration written to {}", config_file.display()));
        }
    }

    Ok(())
}
