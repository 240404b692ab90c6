use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            let path = Config::path()?;
            println!("{} {}", "Config file:".bold(), path.display());
            match Config::load() {
                Ok(config) => print!("{}", serde_yaml::to_string(&config)?),
                Err(err) => println!("{err}"),
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!("{} {} = {value}", "Updated".green(), key.bold());
            println!("Written to {}", path.display());
            Ok(())
        }
    }
}
