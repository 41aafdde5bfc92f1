//! Block scanning module
//!
//! Splits a buffer of concatenated codewords into blocks of a fixed symbol
//! count and decodes each one independently, in parallel when configured.
//! A trailing block shorter than the full size is decoded as a shortened
//! codeword as long as it still holds the parity symbols.

mod config;
mod types;

pub use config::ScanConfig;
pub use types::{BlockOutcome, BlockStatus, ScanMode, ScanResults};

use crate::reed_solomon::{DecodeError, DecodeResult, GaloisField, RsDecoder};
use crate::reporters::{ScanReporter, SilentScanReporter};
use log::{debug, warn};
use rayon::prelude::*;

/// Scan `data` with the default configuration and no output
pub fn scan_blocks<F: GaloisField>(
    decoder: &RsDecoder<F>,
    data: &mut [F::Symbol],
    block_len: usize,
    mode: ScanMode,
) -> DecodeResult<ScanResults> {
    scan_blocks_with_config_and_reporter(
        decoder,
        data,
        block_len,
        mode,
        &ScanConfig::default(),
        &SilentScanReporter::new(),
    )
}

/// Scan `data` as consecutive codewords of `block_len` symbols.
///
/// Fails up front with [`DecodeError::InvalidLength`] if `block_len` is not a
/// valid codeword length for the decoder; per-block failures are collected in
/// the results instead. In [`ScanMode::Verify`] the buffer is never modified.
pub fn scan_blocks_with_config_and_reporter<F, R>(
    decoder: &RsDecoder<F>,
    data: &mut [F::Symbol],
    block_len: usize,
    mode: ScanMode,
    config: &ScanConfig,
    reporter: &R,
) -> DecodeResult<ScanResults>
where
    F: GaloisField,
    R: ScanReporter + ?Sized,
{
    let max = decoder.field().max();
    if block_len < decoder.npar() || block_len > max {
        return Err(DecodeError::InvalidLength {
            length: block_len,
            npar: decoder.npar(),
            max,
        });
    }

    configure_threads(config);
    let total_blocks = data.len().div_ceil(block_len);
    reporter.report_scan_start(total_blocks, config.parallel);

    let decode_block = |(index, block): (usize, &mut [F::Symbol])| -> DecodeResult<BlockOutcome> {
        let outcome = decode_one(decoder, index, index * block_len, block, mode)?;
        if outcome.status != BlockStatus::Clean {
            reporter.report_block(&outcome);
        }
        Ok(outcome)
    };

    let blocks = if config.parallel {
        data.par_chunks_mut(block_len)
            .enumerate()
            .map(decode_block)
            .collect::<DecodeResult<Vec<_>>>()?
    } else {
        data.chunks_mut(block_len)
            .enumerate()
            .map(decode_block)
            .collect::<DecodeResult<Vec<_>>>()?
    };

    let results = ScanResults::from_blocks(mode, blocks);
    debug!(
        "scanned {} blocks: {} damaged, {} uncorrectable",
        results.total_block_count(),
        results.damaged_block_count,
        results.uncorrectable_block_count
    );
    reporter.report_scan_results(&results);
    Ok(results)
}

fn decode_one<F: GaloisField>(
    decoder: &RsDecoder<F>,
    index: usize,
    offset: usize,
    block: &mut [F::Symbol],
    mode: ScanMode,
) -> DecodeResult<BlockOutcome> {
    let status = if block.len() < decoder.npar() {
        BlockStatus::Skipped
    } else {
        match decoder.decode(block, !mode.corrects()) {
            Ok(0) => BlockStatus::Clean,
            Ok(count) => BlockStatus::Damaged(count),
            Err(DecodeError::Uncorrectable(reason)) => BlockStatus::Uncorrectable(reason),
            Err(other) => return Err(other),
        }
    };

    Ok(BlockOutcome {
        index,
        offset,
        length: block.len(),
        status,
    })
}

/// Size rayon's global pool once; later calls keep whatever pool exists
fn configure_threads(config: &ScanConfig) {
    if !config.parallel || config.threads == 0 {
        return;
    }
    let threads = config.effective_threads();
    if rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .is_err()
    {
        warn!(
            "Could not set thread count to {}, using the existing pool",
            threads
        );
    }
}
