//! smcdecode CLI: decode KardiaChain contract calls and event logs.
//!
//! # Commands
//! ```text
//! smcdecode decode-call  --config <f> --to <addr> --input <hex>
//! smcdecode decode-log   --config <f> --address <addr> --topics <t0> <t1>... --data <hex>
//! smcdecode decode-logs  --config <f> --file <logs.json> --error-mode collect
//! smcdecode contracts    --config <f>
//! smcdecode selector     "transfer(address,uint256)"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use smcdecode_core::event::RawLog;
use smcdecode_evm::ErrorMode;
use smcdecode_observability::{init_tracing, LogConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod cmd_contracts;
mod cmd_decode;
mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "smcdecode",
    about = "Decode smart-contract calls and event logs on KardiaChain",
    long_about = "
smcdecode: decode transaction input data and event logs emitted by registered
contracts (staking, validator, tokens) using their JSON ABIs.

The config file lists contracts and where their ABIs live, and may carry a
`log:` section. Set RUST_LOG to override log levels.
",
    version
)]
struct Cli {
    /// Registry config file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a transaction's input data
    #[command(name = "decode-call")]
    DecodeCall {
        /// Contract the transaction was sent to
        #[arg(long)]
        to: String,
        /// Call payload (hex, 0x optional)
        #[arg(long)]
        input: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode one event log from raw topics + data
    #[command(name = "decode-log")]
    DecodeLog {
        /// Contract that emitted the log
        #[arg(long)]
        address: String,
        /// topics[0] = event topic hash, topics[1..] = indexed arguments
        #[arg(long, num_args = 1.., required = true)]
        topics: Vec<String>,
        /// Non-indexed arguments (hex, 0x optional)
        #[arg(long, default_value = "")]
        data: String,
        /// Print unpacked values without hex/decimal normalization
        #[arg(long)]
        raw: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Batch-decode a JSON array of log records, one JSON line per event
    #[command(name = "decode-logs")]
    DecodeLogs {
        /// File holding `[{address, topics, data, ...}, ...]`
        #[arg(long)]
        file: PathBuf,
        /// What to do with logs that fail to decode
        #[arg(long, value_enum, default_value_t = ErrorModeArg::Collect)]
        error_mode: ErrorModeArg,
        /// Print unpacked values without hex/decimal normalization
        #[arg(long)]
        raw: bool,
    },

    /// List registered contracts
    Contracts {
        /// Also list every method selector and event topic
        #[arg(long)]
        detail: bool,
    },

    /// Print the selector and topic hash of a signature
    Selector {
        /// e.g. `transfer(address,uint256)` or `event Transfer(address indexed from, ...)`
        signature: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ErrorModeArg {
    Skip,
    Collect,
    Throw,
}

impl From<ErrorModeArg> for ErrorMode {
    fn from(arg: ErrorModeArg) -> Self {
        match arg {
            ErrorModeArg::Skip => ErrorMode::Skip,
            ErrorModeArg::Collect => ErrorMode::Collect,
            ErrorModeArg::Throw => ErrorMode::Throw,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.config.as_deref().map(AppConfig::load).transpose()?;
    let log = config.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_tracing(&LogConfig::with_verbosity(log, cli.verbose));

    match cli.command {
        Commands::DecodeCall { to, input, json } => {
            let registry = registry(config.as_ref(), cli.config.as_deref())?;
            cmd_decode::decode_call(registry, &to, &input, json)
        }

        Commands::DecodeLog { address, topics, data, raw, json } => {
            let registry = registry(config.as_ref(), cli.config.as_deref())?;
            let log = RawLog::new(address, topics, data);
            cmd_decode::decode_log(registry, &log, raw, json)
        }

        Commands::DecodeLogs { file, error_mode, raw } => {
            let registry = registry(config.as_ref(), cli.config.as_deref())?;
            cmd_decode::decode_logs(registry, &file, error_mode.into(), raw)
        }

        Commands::Contracts { detail } => {
            let registry = registry(config.as_ref(), cli.config.as_deref())?;
            cmd_contracts::list(&registry, detail)
        }

        Commands::Selector { signature } => cmd_contracts::selector(&signature),
    }
}

fn registry(
    config: Option<&AppConfig>,
    path: Option<&Path>,
) -> Result<Arc<smcdecode_registry::AbiRegistry>> {
    let config = config.context("this command needs --config <file>")?;
    let registry = config.build_registry().with_context(|| {
        format!(
            "load contracts from '{}'",
            path.map(|p| p.display().to_string()).unwrap_or_default()
        )
    })?;
    Ok(Arc::new(registry))
}
