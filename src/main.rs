use clap::{Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rotor cipher machine simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode (or decode) a message read from stdin or --message.
    Encode(cmd::encode::EncodeArgs),
    /// Print the machine's configuration tables.
    Inspect(cmd::inspect::InspectArgs),
    /// Write a random valid configuration set.
    Keygen(cmd::keygen::KeygenArgs),
    /// List the built-in historical rotors and reflectors.
    Presets,
}

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Keygen(args) => cmd::keygen::run(args),
        Commands::Presets => {
            reports::print_presets();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(e.exit_code());
    }
}
