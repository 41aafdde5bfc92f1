//! Console reporter for block scans

use super::{Reporter, ScanReporter};
use crate::scan::{BlockOutcome, BlockStatus, ScanResults};

/// Constants for output formatting
const MIN_BLOCKS_FOR_SUMMARY: usize = 20; // Show detailed block list if <= this many blocks
const BLOCK_SUMMARY_HEAD_TAIL: usize = 10; // Show first/last N blocks for large lists

/// Console implementation for scans
#[derive(Default)]
pub struct ConsoleScanReporter {
    verbose: bool,
}

impl ConsoleScanReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print every damaged block as it is found
    pub fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleScanReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl ScanReporter for ConsoleScanReporter {
    fn report_scan_start(&self, total_blocks: usize, parallel: bool) {
        println!(
            "Scanning {} blocks ({})...",
            total_blocks,
            if parallel { "parallel" } else { "sequential" }
        );
    }

    fn report_block(&self, outcome: &BlockOutcome) {
        if self.verbose {
            println!("  Block {}: {}", outcome.index, outcome.status);
        }
    }

    fn report_scan_results(&self, results: &ScanResults) {
        print!("{}", results);

        let damaged: Vec<&BlockOutcome> = results
            .blocks
            .iter()
            .filter(|b| matches!(b.status, BlockStatus::Damaged(_) | BlockStatus::Uncorrectable(_)))
            .collect();
        if !damaged.is_empty() && !self.verbose {
            println!("\nDamaged blocks:");
            print_block_list(&damaged);
        }
    }
}

/// Print block outcomes, with summary for large lists
fn print_block_list(blocks: &[&BlockOutcome]) {
    let print = |b: &BlockOutcome| println!("  Block {} at symbol {}: {}", b.index, b.offset, b.status);

    if blocks.len() <= MIN_BLOCKS_FOR_SUMMARY {
        blocks.iter().for_each(|b| print(b));
    } else {
        blocks[..BLOCK_SUMMARY_HEAD_TAIL].iter().for_each(|b| print(b));
        println!(
            "  ... {} more damaged blocks ...",
            blocks.len() - (2 * BLOCK_SUMMARY_HEAD_TAIL)
        );
        blocks[blocks.len() - BLOCK_SUMMARY_HEAD_TAIL..]
            .iter()
            .for_each(|b| print(b));
    }
}
