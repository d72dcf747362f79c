use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use library::cli::run_terminal_session;
use library::config::{paths::LibraryPaths, settings::Settings};
use library::export::{export_to_path, ExportFormat};
use library::services::LibraryService;

#[derive(Parser)]
#[command(
    name = "library",
    version,
    about = "Interactive manager for a small library's books and users",
    long_about = "library-cli keeps a catalog of books and a registry of users in \
                  memory. Add books and users, lend and take back copies, and \
                  search the catalog from an interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with an empty library instead of the demo records
    #[arg(long)]
    no_seed: bool,

    /// Write the final state to this file when the session ends
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Format used with --export
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LibraryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    match cli.command {
        None | Some(Commands::Run) => {
            let mut service = LibraryService::new();
            if settings.seed_demo_data && !cli.no_seed {
                service.seed_demo_data()?;
            }

            run_terminal_session(&mut service, &settings)?;

            if let Some(path) = cli.export {
                export_to_path(&service, &path, cli.format)?;
                println!("Library exported to: {}", path.display());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing library-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("library-cli Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!(
                "Settings file:  {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  Max retries:     {}", settings.max_retries);
            println!("  Seed demo data:  {}", settings.seed_demo_data);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

/// Log to stderr so the menu on stdout stays readable
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
