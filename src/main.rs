use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gramforge::api::Resources;
use gramforge::config::RunConfig;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON run configuration; flags given on the command line take precedence
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count grams and skip-grams over all inputs as one document
    Count(cmd::count::CountArgs),
    /// Count each input independently, in parallel
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("🚀 Initializing GramForge...");

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Count(args) => (&args.config, matches.subcommand_matches("count")),
        Commands::Batch(args) => (&args.config, matches.subcommand_matches("batch")),
    };

    let config = match (&cli.config, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = RunConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        _ => cli_config.clone(),
    };

    // Everything is validated before any input is read or output written.
    let resources = match Resources::load(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("❌ FATAL ERROR LOADING RESOURCES:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Count(args) => {
            if let Err(e) = cmd::count::run(args, &config, &resources) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Batch(args) => {
            match cmd::batch::run(args, &config, &resources) {
                Ok(0) => {}
                Ok(failures) => {
                    error!("❌ {} input(s) failed", failures);
                    process::exit(1);
                }
                Err(e) => {
                    error!("❌ {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
