use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use seoscore::config::ScoringWeights;
use seoscore::error::SeoResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Product and content SEO scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weights file; explicit weight flags still win over it.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Project(cmd::project::ProjectArgs),
    Analyze(cmd::analyze::AnalyzeArgs),
}

/// File weights as the base, explicit CLI overrides on top.
fn resolve_weights(
    path: Option<&str>,
    cli_weights: &ScoringWeights,
    sub_matches: Option<&ArgMatches>,
) -> SeoResult<ScoringWeights> {
    let Some(path) = path else {
        info!("⚖️  No external weights loaded. Using embedded defaults.");
        return Ok(cli_weights.clone());
    };

    let mut weights = ScoringWeights::load_from_file(path)?;
    if let Some(m) = sub_matches {
        weights.merge_from_cli(cli_weights, m);
    }
    weights.validate()?;
    Ok(weights)
}

fn execute(cli: Cli, matches: &ArgMatches) -> SeoResult<()> {
    let weights_path = cli.weights.as_deref();
    match cli.command {
        Commands::Score(args) => {
            let weights =
                resolve_weights(weights_path, &args.weights, matches.subcommand_matches("score"))?;
            cmd::score::run(args, weights)
        }
        Commands::Project(args) => {
            let weights = resolve_weights(
                weights_path,
                &args.weights,
                matches.subcommand_matches("project"),
            )?;
            cmd::project::run(args, weights)
        }
        Commands::Analyze(args) => cmd::analyze::run(args),
    }
}

fn main() {
    // Raw matches tell user input apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
