//! `smcdecode decode-call`, `decode-log` and `decode-logs`.

use anyhow::{Context, Result};
use smcdecode_core::event::{DecodedEvent, RawLog};
use smcdecode_evm::{batch, CallDecoder, ErrorMode, LogDecoder};
use smcdecode_registry::AbiRegistry;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub fn decode_call(registry: Arc<AbiRegistry>, to: &str, input: &str, as_json: bool) -> Result<()> {
    let decoder = CallDecoder::new(registry);
    let Some(call) = decoder.decode_input(to, input)? else {
        if as_json {
            println!("null");
        } else {
            println!("No call data (plain value transfer)");
        }
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&call)?);
    } else {
        println!("Function:   {}", call.function);
        println!("Method ID:  {}", call.method_id);
        println!("Arguments:");
        for (name, val) in &call.arguments {
            println!("  {}: {}", name, val);
        }
    }
    Ok(())
}

pub fn decode_log(
    registry: Arc<AbiRegistry>,
    raw: &RawLog,
    raw_values: bool,
    as_json: bool,
) -> Result<()> {
    let decoder = LogDecoder::new(registry);
    let mut event = decoder.decode(raw)?;
    if !raw_values {
        event = event.normalized();
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        print_event(&event);
    }
    Ok(())
}

pub fn decode_logs(
    registry: Arc<AbiRegistry>,
    file: &Path,
    mode: ErrorMode,
    raw_values: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("read log file '{}'", file.display()))?;
    let logs: Vec<RawLog> = serde_json::from_str(&text)
        .with_context(|| format!("parse log file '{}' (expected a JSON array)", file.display()))?;
    info!("decoding {} logs from {}", logs.len(), file.display());

    let decoder = LogDecoder::new(registry);
    let out = batch::decode_logs(&decoder, &logs, mode)?;

    for (_, event) in out.items {
        let event = if raw_values { event } else { event.normalized() };
        println!("{}", serde_json::to_string(&event)?);
    }
    for (idx, err) in &out.errors {
        eprintln!("log {}: {}", idx, err);
    }
    Ok(())
}

fn print_event(event: &DecodedEvent) {
    println!("Event:      {}", event.signature);
    println!("Contract:   {}", event.address);
    if !event.tx_hash.is_empty() {
        println!("Tx:         {} (log {})", event.tx_hash, event.log_index);
    }
    println!("Arguments:");
    for (name, val) in &event.arguments {
        println!("  {}: {}", name, val);
    }
}
