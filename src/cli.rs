//! CLI entry for quip, defining clap subcommands and wiring config, store,
//! registry, and dispatcher together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use crate::bot::{BotContext, Dispatcher};
use crate::command;
use crate::config::BotConfig;
use crate::console;
use crate::storage::{BotStore, JsonStore};

#[derive(Parser, Debug)]
#[command(
    name = "quip",
    about = "An IRC-style chat bot with command substitution",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Run an interactive console session")]
    Run(RunArgs),
    #[command(about = "Validate the configuration and print the alias table")]
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Channel name for this session
    #[arg(long, default_value = "#console")]
    channel: String,
    /// Nick to speak as
    #[arg(long, default_value = "operator")]
    nick: String,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse the command line and execute the chosen subcommand.
/// - Caution: this is a `synchronous` function, declared as `async` to be
///   able to use `[tokio::main]`
/// - `args`: parse from the process arguments when `None`, otherwise from
///   the given list
#[tokio::main]
pub async fn parse(args: Option<&[&str]>) -> anyhow::Result<()> {
    parse_async(args).await
}

/// `async` version of the [parse] function.
pub async fn parse_async(args: Option<&[&str]>) -> anyhow::Result<()> {
    let cli = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };
    match cli.command {
        Commands::Run(args) => run(args).await,
        Commands::Check(args) => check(args),
    }
}

async fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = BotConfig::load(args.config.as_deref())?;
    let store = open_store(&config)?;
    let registry = Arc::new(command::build_registry()?);
    let ctx = Arc::new(BotContext::new(config, store));
    let dispatcher = Arc::new(Dispatcher::new(ctx, registry));
    console::run(dispatcher, &args.channel, &args.nick).await
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let config = BotConfig::load(args.config.as_deref())?;
    let registry = command::build_registry()?;
    println!(
        "config ok: nick={} sentinels={}{}",
        config.nick, config.command_sentinel, config.fact_sentinel
    );
    println!("{} aliases registered:", registry.len());
    for (alias, name, substitution) in registry.alias_table() {
        let note = if substitution { "" } else { "  (no substitution)" };
        println!("  {alias:<12} -> {name}{note}");
    }
    Ok(())
}

fn open_store(config: &BotConfig) -> anyhow::Result<Arc<dyn BotStore>> {
    Ok(match &config.data_dir {
        Some(dir) => Arc::new(
            JsonStore::open(dir).with_context(|| format!("opening store in {}", dir.display()))?,
        ),
        None => {
            tracing::warn!("no data_dir configured, facts will not survive a restart");
            Arc::new(JsonStore::in_memory())
        }
    })
}

/// this test is to verify that the CLI can be built without panicking
/// according [clap dock](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_4/index.html)
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}
