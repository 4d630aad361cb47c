//! Rayon-powered batch decoding.
//!
//! Both entry points decode every item in parallel, then fold the results
//! back in input order according to an [`ErrorMode`].

use rayon::prelude::*;
use smcdecode_core::{
    call::DecodedCall,
    error::{BatchDecodeError, DecodeError},
    event::{DecodedEvent, RawLog},
};
use tracing::{info, warn};

use crate::{call_decoder::CallDecoder, decoder::LogDecoder};

/// Controls how batch decoding handles per-item errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Skip items that fail to decode (logged at `warn`).
    #[default]
    Skip,
    /// Collect decode errors alongside successes and return both at the end.
    Collect,
    /// Abort the batch on the first error, by input position.
    Throw,
}

/// Output of a batch decode.
#[derive(Debug)]
pub struct BatchDecodeResult<T> {
    /// Successfully decoded items, tagged with their input position.
    pub items: Vec<(usize, T)>,
    /// Populated only when `ErrorMode::Collect` is used.
    pub errors: Vec<(usize, DecodeError)>,
}

impl<T> BatchDecodeResult<T> {
    /// Decoded items without their positions.
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().map(|(_, item)| item).collect()
    }
}

/// Decode a slice of logs in parallel.
pub fn decode_logs(
    decoder: &LogDecoder,
    logs: &[RawLog],
    mode: ErrorMode,
) -> Result<BatchDecodeResult<DecodedEvent>, BatchDecodeError> {
    let results: Vec<Result<Option<DecodedEvent>, DecodeError>> = logs
        .par_iter()
        .map(|log| decoder.decode(log).map(Some))
        .collect();

    let out = fold(results, mode)?;
    info!(
        "decoded {} of {} logs ({} errors collected)",
        out.items.len(),
        logs.len(),
        out.errors.len()
    );
    Ok(out)
}

/// Decode `(to, input)` call payloads in parallel.
///
/// Payloads that carry no call (`""`, `"0x"`) are omitted from `items`
/// and are not errors.
pub fn decode_inputs(
    decoder: &CallDecoder,
    calls: &[(&str, &str)],
    mode: ErrorMode,
) -> Result<BatchDecodeResult<DecodedCall>, BatchDecodeError> {
    let results: Vec<Result<Option<DecodedCall>, DecodeError>> = calls
        .par_iter()
        .map(|(to, input)| decoder.decode_input(to, input))
        .collect();

    let out = fold(results, mode)?;
    info!(
        "decoded {} of {} call payloads ({} errors collected)",
        out.items.len(),
        calls.len(),
        out.errors.len()
    );
    Ok(out)
}

fn fold<T>(
    results: Vec<Result<Option<T>, DecodeError>>,
    mode: ErrorMode,
) -> Result<BatchDecodeResult<T>, BatchDecodeError> {
    let mut items = Vec::with_capacity(results.len());
    let mut errors = Vec::new();

    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(Some(item)) => items.push((idx, item)),
            Ok(None) => {}
            Err(err) => match mode {
                ErrorMode::Skip => warn!("skipping item {}: {}", idx, err),
                ErrorMode::Collect => errors.push((idx, err)),
                ErrorMode::Throw => {
                    return Err(BatchDecodeError::ItemFailed {
                        index: idx,
                        source: err,
                    })
                }
            },
        }
    }

    Ok(BatchDecodeResult { items, errors })
}
