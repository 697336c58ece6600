//! Kanji Idiom Chain Puzzle - CLI
//!
//! Posts the daily question, posts the scored results, or solves a pair of
//! characters directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jukugo_chain::{
    chat::SlackClient,
    commands::{post_answer, post_question, solve_pair},
    config::{ChatConfig, DEFAULT_API_BASE, DEFAULT_WINDOW_HOURS},
    idioms::{KANJI, load_embedded, load_from_file},
    output::{print_answer_posted, print_question_posted, print_solve_result},
    solver::IdiomGraph,
};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jukugo_chain",
    about = "Daily kanji idiom chain puzzle for a chat channel",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gzip dictionary with one idiom per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Chat API token
    #[arg(long, global = true, env = "USER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Channel to post to and read from
    #[arg(long, global = true, env = "CHANNEL_ID")]
    channel: Option<String>,

    /// Base URL of the Slack Web API
    #[arg(long, global = true, env = "SLACK_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Hours of history scanned for the question and the answers
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_HOURS)]
    window_hours: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Post today's question
    Question,

    /// Score today's replies and post the results
    Answer {
        /// Leave out the solver's own chain
        #[arg(long)]
        no_solution: bool,
    },

    /// Print the shortest chain between two characters
    Solve {
        /// Start character
        start: String,

        /// End character
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Question => run_question_command(&cli),
        Commands::Answer { no_solution } => run_answer_command(&cli, *no_solution),
        Commands::Solve { start, end } => run_solve_command(cli.dictionary.as_deref(), start, end),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn chat_config(cli: &Cli) -> Result<ChatConfig> {
    Ok(ChatConfig::resolve(
        cli.token.clone(),
        cli.channel.clone(),
        cli.api_base.clone(),
        cli.window_hours,
    )?)
}

/// Load the dictionary from `--dictionary` or fall back to the embedded one
fn load_graph(dictionary: Option<&Path>) -> Result<IdiomGraph> {
    match dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading dictionary {}", path.display())),
        None => load_embedded().context("loading embedded dictionary"),
    }
}

fn run_question_command(cli: &Cli) -> Result<()> {
    let config = chat_config(cli)?;
    let client = SlackClient::new(&config.api_base, &config.token);

    let question = post_question(&client, &config.channel, &mut rand::rng(), KANJI)?;
    print_question_posted(&question, &config.channel);
    Ok(())
}

fn run_answer_command(cli: &Cli, no_solution: bool) -> Result<()> {
    let config = chat_config(cli)?;
    let client = SlackClient::new(&config.api_base, &config.token);

    let graph = if no_solution {
        None
    } else {
        Some(load_graph(cli.dictionary.as_deref())?)
    };

    let oldest = config.oldest(SystemTime::now());
    let result = post_answer(&client, &config.channel, oldest, graph.as_ref())?;
    print_answer_posted(&result.text, &config.channel);
    Ok(())
}

fn run_solve_command(dictionary: Option<&Path>, start: &str, end: &str) -> Result<()> {
    let graph = load_graph(dictionary)?;
    let result = solve_pair(&graph, start, end)?;

    print_solve_result(&result);
    Ok(())
}
