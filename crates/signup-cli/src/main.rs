mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use signup_form::config::DEFAULT_CONFIG_FILE;
use signup_form::Config;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Signup form validation from the command line", long_about = None)]
struct Cli {
    /// Path to the form configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON values record and print the error map
    Validate {
        /// JSON file holding the values record
        file: PathBuf,
    },

    /// Render the form as HTML
    Render {
        /// JSON file with values to fill in
        #[arg(short, long)]
        values: Option<PathBuf>,

        /// Mark every field touched so all errors are shown
        #[arg(long)]
        touch_all: bool,
    },

    /// Submit a JSON values record
    Submit {
        /// JSON file holding the values record
        file: PathBuf,
    },

    /// Drive the form with line commands read from stdin
    Session,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    debug!(path = ?cli.config, title = %config.form.title, "config loaded");

    // Execute command
    match cli.command {
        Commands::Validate { file } => {
            info!(file = ?file, "validate");
            commands::validate::execute(&file)?;
        }
        Commands::Render { values, touch_all } => {
            info!(values = ?values, touch_all, "render");
            commands::render::execute(config, values.as_deref(), touch_all)?;
        }
        Commands::Submit { file } => {
            info!(file = ?file, "submit");
            commands::submit::execute(config, &file)?;
        }
        Commands::Session => {
            info!("session");
            commands::session::execute(config)?;
        }
    }

    Ok(())
}
