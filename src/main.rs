use clap::Parser;
use fintrack::args::{Args, Command, SettingsSubcommand};
use fintrack::{commands, Result, Store};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let store = Store::open(args.common().home().path()).await?;

    // Route to the appropriate command handler
    let _: () = match args.command() {
        Command::Add(add_args) => commands::add(&store, add_args.clone()).await?.print(),

        Command::Update(update_args) => {
            commands::update(&store, update_args.clone()).await?.print()
        }

        Command::Delete(delete_args) => {
            commands::delete(&store, delete_args.clone()).await?.print()
        }

        Command::List(list_args) => commands::list(&store, list_args.clone()).await?.print(),

        Command::Dashboard => commands::dashboard(&store).await?.print(),

        Command::Settings(settings_args) => match settings_args {
            SettingsSubcommand::Show => commands::show_settings(&store).await?.print(),
            SettingsSubcommand::Budget(budget_args) => {
                commands::set_budget(&store, budget_args.clone()).await?.print()
            }
            SettingsSubcommand::Rates(rates_args) => {
                commands::set_rates(&store, rates_args.clone()).await?.print()
            }
        },

        Command::Convert(convert_args) => {
            commands::convert(&store, convert_args.clone()).await?.print()
        }

        Command::Export(export_args) => {
            commands::export(&store, export_args.clone()).await?.print()
        }

        Command::Import(import_args) => {
            commands::import(&store, import_args.clone()).await?.print()
        }

        Command::Clear(clear_args) => commands::clear(&store, clear_args.clone()).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
