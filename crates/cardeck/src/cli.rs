use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardeck")]
#[command(author, version, about)]
#[command(long_about = "Render carousel text slides into square branded images.\n\n\
    Describe your slides in a YAML deck file and export them as a numbered\n\
    sequence of 1080x1080 PNG images, ready to post in order.\n\n\
    Examples:\n  \
    cardeck export deck.yaml                 Render every slide to ./export\n  \
    cardeck plan \"5 tips for engagement\"     Scaffold a starter deck\n  \
    cardeck themes                           List built-in themes")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a deck file to PNG images
    Export {
        /// Deck file (YAML) to render
        file: PathBuf,

        /// Output directory for PNG files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Override the deck's theme by name
        #[arg(long)]
        theme: Option<String>,
    },

    /// Scaffold a starter deck from a topic
    Plan {
        /// Topic the carousel should cover
        topic: String,

        /// Number of slides including hook and call-to-action
        #[arg(long, default_value = "5")]
        slides: usize,

        /// Deck file to write
        #[arg(short, long, default_value = "deck.yaml")]
        output: PathBuf,

        /// Also write the raw plan as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List built-in themes
    Themes,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.output_dir)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }
        match self.command {
            Some(Commands::Export {
                file,
                output_dir,
                theme,
            }) => crate::commands::export::run(file, output_dir, theme, self.quiet, self.verbose),
            Some(Commands::Plan {
                topic,
                slides,
                output,
                json,
            }) => crate::commands::plan::run(&topic, slides, output, json, self.quiet),
            Some(Commands::Themes) => {
                crate::commands::themes::run();
                Ok(())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
