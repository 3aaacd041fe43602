//! CLI for inspecting Saviour chain parameters
//!
//! This tool allows:
//! - Dumping a network's parameters as JSON
//! - Resolving the masternode collateral at a height
//! - Listing the cost schedule and checkpoints

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use saviour_params::{ChainContext, CostQuery, NetworkId};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "chain-inspect")]
#[command(about = "Saviour chain parameter inspector", long_about = None)]
struct Cli {
    /// Network name (main, test, regtest, unittest)
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// Use the test network
    #[arg(long, global = true)]
    testnet: bool,

    /// Use the regression test network
    #[arg(long, global = true)]
    regtest: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected network's parameters as JSON
    Show,

    /// Resolve the masternode collateral at a height
    Cost {
        /// Block height
        #[arg(long, allow_negative_numbers = true)]
        height: i64,

        /// Ask for the previous tier (only inside the grace window)
        #[arg(long)]
        previous: bool,
    },

    /// List the masternode cost tiers
    Schedule,

    /// List the checkpoints
    Checkpoints,
}

impl Cli {
    fn network(&self) -> anyhow::Result<NetworkId> {
        match &self.network {
            Some(_) if self.testnet || self.regtest => {
                bail!("--network cannot be combined with --testnet or --regtest")
            }
            Some(name) => Ok(name.parse()?),
            None => Ok(NetworkId::from_flags(self.testnet, self.regtest)?),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let network = cli.network()?;
    let ctx = ChainContext::select(network)
        .with_context(|| format!("failed to load chain parameters for {}", network))?;
    info!("Selected network: {}", ctx.active_network());

    match cli.command {
        Commands::Show => show(&ctx)?,
        Commands::Cost { height, previous } => cost(&ctx, height, previous),
        Commands::Schedule => schedule(&ctx),
        Commands::Checkpoints => checkpoints(&ctx),
    }

    Ok(())
}

fn show(ctx: &ChainContext) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(ctx.active_params())?;
    println!("{}", json);
    Ok(())
}

fn cost(ctx: &ChainContext, height: i64, previous: bool) {
    let query = if previous {
        CostQuery::Previous
    } else {
        CostQuery::Current
    };
    if height < 0 {
        warn!("Negative height {}, resolving against the first tier", height);
    }

    match ctx.active_params().masternode_cost(height, query) {
        Some(cost) => println!("{}", cost),
        None => println!("n/a"),
    }
}

fn schedule(ctx: &ChainContext) {
    let schedule = &ctx.active_params().masternode_cost;
    println!("grace window: {} blocks", schedule.grace_window());
    for (tier, step) in schedule.steps().iter().enumerate() {
        println!(
            "tier {}: {} coins after block {}",
            tier, step.cost, step.activation_height
        );
    }
}

fn checkpoints(ctx: &ChainContext) {
    let table = &ctx.active_params().checkpoints;
    for cp in table.checkpoints() {
        println!("{:>10} {}", cp.height, cp.hash);
    }
    match table.last_checkpoint_datetime() {
        Some(at) => println!("last checkpoint time: {}", at.to_rfc3339()),
        None => println!("last checkpoint time: {}", table.last_checkpoint_time),
    }
    println!(
        "transactions: {} (+{}/day)",
        table.transactions_last_checkpoint, table.transactions_per_day
    );
}
