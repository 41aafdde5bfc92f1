//! Reed-Solomon codeword verification and repair tool
//!
//! Treats a file as a sequence of codewords with a fixed number of symbols
//! each (8-bit, or little-endian 16-bit) and checks or corrects every one.
//!
//! Exit status for `verify`: 0 when every block is clean, 1 when damage was
//! found and all of it can be repaired, 2 when some block is uncorrectable.
//! `repair` exits 2 when some block could not be corrected.

use anyhow::{Context, Result};
use rsdecode::reed_solomon::{symbols_from_le_bytes, symbols_to_le_bytes, GaloisField, RsDecoder};
use rsdecode::reporters::{ConsoleScanReporter, Reporter, ScanReporter, SilentScanReporter};
use rsdecode::scan::{scan_blocks_with_config_and_reporter, ScanConfig, ScanMode, ScanResults};
use rsdecode::{RsDecode16, RsDecode8};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = rsdecode::parse_args();

    match matches.subcommand() {
        Some(("verify", sub_matches)) => handle_scan(sub_matches, ScanMode::Verify),
        Some(("repair", sub_matches)) => handle_scan(sub_matches, ScanMode::Repair),
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified"),
    }
}

fn handle_scan(matches: &clap::ArgMatches, mode: ScanMode) -> Result<()> {
    let file = PathBuf::from(
        matches
            .get_one::<String>("file")
            .context("FILE is required")?,
    );
    let npar = *matches
        .get_one::<usize>("npar")
        .context("--npar is required")?;
    let block = matches.get_one::<usize>("block").copied();
    let wide = matches.get_one::<String>("width").map(String::as_str) == Some("16");
    let quiet = matches.get_flag("quiet");
    let config = ScanConfig::from_args(matches);

    let reporter: Box<dyn ScanReporter> = if quiet {
        Box::new(SilentScanReporter::new())
    } else {
        Box::new(ConsoleScanReporter::verbose(matches.get_flag("verbose")))
    };

    let mut data =
        std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;

    let results = if wide {
        anyhow::ensure!(
            data.len() % 2 == 0,
            "{} holds {} bytes, not a whole number of 16-bit symbols",
            file.display(),
            data.len()
        );
        let mut symbols = symbols_from_le_bytes(&data)?;
        let results = scan_file(
            &RsDecode16::with_parity(npar),
            &mut symbols,
            block,
            mode,
            &config,
            &*reporter,
        )?;
        symbols_to_le_bytes(&symbols, &mut data);
        results
    } else {
        scan_file(
            &RsDecode8::with_parity(npar),
            &mut data,
            block,
            mode,
            &config,
            &*reporter,
        )?
    };

    match mode {
        ScanMode::Verify => verify_exit(&results, quiet),
        ScanMode::Repair => {
            let output = matches.get_one::<String>("output").map(PathBuf::from);
            if output.is_some() || results.damaged_block_count > 0 {
                let target = output.unwrap_or(file);
                std::fs::write(&target, &data)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                if !quiet {
                    reporter.report_complete(&format!("Wrote {}", target.display()));
                }
            }
            if results.repair_possible() {
                Ok(())
            } else {
                reporter.report_error("Some blocks could not be repaired.");
                std::process::exit(2);
            }
        }
    }
}

fn scan_file<F: GaloisField>(
    decoder: &RsDecoder<F>,
    symbols: &mut [F::Symbol],
    block: Option<usize>,
    mode: ScanMode,
    config: &ScanConfig,
    reporter: &dyn ScanReporter,
) -> Result<ScanResults> {
    let block_len = block.unwrap_or_else(|| decoder.field().max());
    scan_blocks_with_config_and_reporter(decoder, symbols, block_len, mode, config, reporter)
        .with_context(|| format!("Cannot scan codewords of {} symbols", block_len))
}

fn verify_exit(results: &ScanResults, quiet: bool) -> Result<()> {
    if results.is_clean() {
        Ok(())
    } else if results.repair_possible() {
        if !quiet {
            eprintln!("\nRepair is required.");
        }
        std::process::exit(1);
    } else {
        if !quiet {
            eprintln!("\nRepair is not possible.");
        }
        std::process::exit(2);
    }
}
