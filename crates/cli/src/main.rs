use clap::{Parser, Subcommand};
use hub_core::config::resolve_data_file;
use hub_core::constants::DATA_FILE_ENV;
use hub_core::CoreConfig;
use hub_storage::JsonAddressBookStorage;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "hubhealth")]
#[command(about = "HubHealth patient and appointment book")]
struct Cli {
    /// Address book file (overrides HUBHEALTH_DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Run a single command, e.g. `run addappt -IC S1234567A -D 25/12/2025 14:30`
    Run {
        /// The command line, words joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        line: Vec<String>,
    },
    /// List all patients
    List,
}

/// Main entry point for the HubHealth CLI.
///
/// # Environment Variables
/// - `HUBHEALTH_DATA_FILE`: address book file (default: "data/hubhealth.json")
/// - `RUST_LOG`: log filter; logs are written to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hub_storage=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_file = resolve_data_file(cli.data_file, std::env::var(DATA_FILE_ENV).ok());
    let cfg = CoreConfig::new(data_file)?;
    let storage = JsonAddressBookStorage::new(cfg.data_file());

    let loaded = storage.load()?;
    for rejected in &loaded.rejected {
        eprintln!(
            "Skipped record {} in {}: {}",
            rejected.position + 1,
            storage.path().display(),
            rejected.reason
        );
    }

    let mut session = Session::new(loaded.book, storage);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session.run_shell(stdin.lock(), stdout.lock())?;
        }
        Commands::Run { line } => {
            let line = line.join(" ");
            match session.run_line(&line) {
                Ok(outcome) => println!("{}", outcome.feedback),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List => match session.run_line("list") {
            Ok(outcome) => println!("{}", outcome.feedback),
            Err(e) => eprintln!("Error listing patients: {e}"),
        },
    }

    Ok(())
}
