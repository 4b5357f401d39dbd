//! Dashboard Chart Theming Tool
//!
//! Restyles chart figure JSON for the dark or light dashboard theme and
//! manages the persisted theme preference.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use dashtheme::commands;
use dashtheme::config::AppConfig;
use dashtheme::logging::init_logging;
use dashtheme::storage::persist_theme;
use dashtheme::types::ThemeMode;

#[derive(Parser)]
#[command(name = "dashtheme", version, about = "Dark/light theming for dashboard chart figures")]
struct Cli {
    /// Configuration file
    #[arg(long, env = "DASHTHEME_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Theme storage file, overrides the configured one
    #[arg(long, env = "DASHTHEME_STORAGE", global = true)]
    storage: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "DASHTHEME_LOG_LEVEL", global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Restyle a JSON array of figures
    Apply {
        /// Theme to apply; the persisted theme, then the configured default, when omitted
        #[arg(long)]
        theme: Option<ThemeMode>,
        /// Input file, `-` for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,
        /// Output file, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the persisted theme
    Show,
    /// Persist a theme
    Set { theme: ThemeMode },
    /// Switch the persisted theme and print the new one
    Toggle,
    /// Print the template layout for a theme
    Template { theme: Option<ThemeMode> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.storage {
        config.storage.path = Some(path);
    }
    init_logging(cli.log_level.unwrap_or_else(|| config.logging.level_filter()));

    match cli.command {
        Command::Apply { theme, input, output } => {
            let storage = config.open_storage()?;
            let contents = read_input(&input)?;
            if let Some(rendered) = commands::apply_figures(&config, &storage, theme, &contents)? {
                write_output(output.as_deref(), &rendered)?;
            }
        }
        Command::Show => {
            let storage = config.open_storage()?;
            println!("{}", commands::show_theme(&config, &storage));
        }
        Command::Set { theme } => {
            let mut storage = config.open_storage()?;
            persist_theme(&mut storage, theme)?;
            println!("{}", theme);
        }
        Command::Toggle => {
            let mut storage = config.open_storage()?;
            println!("{}", commands::toggle_persisted(&config, &mut storage)?);
        }
        Command::Template { theme } => {
            write_output(None, &commands::render_template(&config, theme)?)?;
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read figures from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
            Ok(())
        }
    }
}
