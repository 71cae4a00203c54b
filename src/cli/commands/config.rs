use crate::cli::parser::Commands;
use crate::config::migrate::ensure_config_keys;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{}", yaml);
        }

        if *check {
            ensure_config_keys()?;
        }
    }

    Ok(())
}
