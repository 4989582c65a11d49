//! Genesis block tool for the Step networks.
//!
//! Prints the active chain parameters, checks that every network's genesis
//! block still hashes to its published constant, and searches for new
//! genesis nonces offline.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use clap::{Parser, Subcommand};
use serde::Serialize;
use step_common::step::{
    blockdata::genesis::{ForgedGenesis, GenesisForge, SearchConfig},
    network::Network,
    params::{ChainParams, ParamsLayer},
    registry::NetworkRegistry,
    selection::{self, NetworkFlags},
};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt::time::ChronoUtc, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser, Debug)]
#[command(name = "step-genesis", version)]
#[command(about = "Inspect, verify and mine Step genesis blocks.", long_about = None)]
struct Args {
    /// Use the regression test network.
    #[arg(long, global = true)]
    regtest: bool,

    /// Use the test network.
    #[arg(long, global = true)]
    testnet: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the selected network's parameters as JSON.
    Show,
    /// Rebuild every network and check its genesis block.
    Verify,
    /// Search for a genesis nonce for the selected network.
    Mine {
        /// Nonce to start from (defaults to the published nonce).
        #[arg(long)]
        start_nonce: Option<u32>,

        /// Genesis timestamp (defaults to the published timestamp).
        #[arg(long)]
        time: Option<u32>,

        /// Stop after this many hashes.
        #[arg(long)]
        max_iterations: Option<u64>,
    },
}

#[derive(Serialize)]
struct MineReport {
    network: Network,
    hash: String,
    merkle_root: String,
    pow_hash: String,
    time: u32,
    nonce: u32,
    bits: String,
    iterations: u64,
    time_bumps: u32,
}

impl MineReport {
    fn new(network: Network, forged: &ForgedGenesis) -> Self {
        let (pow_hash, iterations, time_bumps) = match forged.search {
            Some(outcome) => {
                let mut pow_hash = outcome.pow_hash;
                pow_hash.reverse();
                (hex::encode(pow_hash), outcome.iterations, outcome.time_bumps)
            }
            None => (String::new(), 0, 0),
        };
        Self {
            network,
            hash: forged.hash.to_string(),
            merkle_root: forged.block.merkle_root().to_string(),
            pow_hash,
            time: forged.block.time(),
            nonce: forged.block.nonce(),
            bits: format!("{:08x}", forged.block.bits()),
            iterations,
            time_bumps,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(&args)?;

    let flags = NetworkFlags {
        regtest: args.regtest,
        testnet: args.testnet,
    };
    let network = flags.resolve()?;

    match args.command {
        Command::Show => show(flags)?,
        Command::Verify => verify()?,
        Command::Mine {
            start_nonce,
            time,
            max_iterations,
        } => mine(network, start_nonce, time, max_iterations).await?,
    }

    Ok(())
}

fn show(flags: NetworkFlags) -> Result<(), Box<dyn std::error::Error>> {
    let registry = NetworkRegistry::new()?;
    selection::select_from_flags(&registry, flags)?;
    let summary = registry.active().summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn verify() -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = 0usize;
    for network in Network::ALL {
        match ChainParams::build(network) {
            Ok(params) => info!(
                %network,
                hash = %params.genesis_hash(),
                merkle_root = %params.genesis().merkle_root(),
                "genesis verified"
            ),
            Err(e) => {
                error!(%network, "{e}");
                failed = failed.saturating_add(1);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} network(s) failed genesis verification").into());
    }
    Ok(())
}

async fn mine(
    network: Network,
    start_nonce: Option<u32>,
    time: Option<u32>,
    max_iterations: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut template = ParamsLayer::for_network(network).genesis_template();
    if let Some(nonce) = start_nonce {
        template.nonce = nonce;
    }
    if let Some(time) = time {
        template.time = time;
    }
    let block = template.build()?;
    info!(%network, time = block.time(), nonce = block.nonce(), "starting genesis search");

    let cancel = Arc::new(AtomicBool::new(false));
    let ctrl_c = {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, stopping search");
                cancel.store(true, Ordering::Relaxed);
            }
        })
    };

    let result = tokio::task::spawn_blocking(move || {
        let config = SearchConfig {
            max_iterations,
            cancel: Some(&*cancel),
        };
        GenesisForge::new().mine(block, &config)
    })
    .await;
    ctrl_c.abort();

    let forged = result??;
    let report = MineReport::new(network, &forged);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = match args.log_level.as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => {
            eprintln!(
                "Invalid log level: {}. Using 'info' as default.",
                args.log_level
            );
            tracing::Level::INFO
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("tokio=warn".parse()?);

    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr()) && !args.no_color;

    let subscriber = Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_target(args.verbose)
            .with_thread_names(args.verbose)
            .with_ansi(use_ansi)
            .with_file(args.verbose)
            .with_line_number(args.verbose)
            .with_timer(ChronoUtc::rfc_3339()),
    );

    subscriber.try_init()?;

    Ok(())
}
