//! Progress and output reporting for block scans
//!
//! This module provides traits and implementations for reporting progress and
//! results while a buffer of codewords is verified or repaired. It allows the
//! scanning logic to be decoupled from output formatting.

mod console;
mod silent;

pub use console::ConsoleScanReporter;
pub use silent::SilentScanReporter;

use crate::scan::{BlockOutcome, ScanResults};

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting scan progress and results
///
/// Block reports may arrive from several threads and in any order.
pub trait ScanReporter: Reporter {
    /// Report starting a scan over `total_blocks` codewords
    fn report_scan_start(&self, total_blocks: usize, parallel: bool);

    /// Report a block that is not clean
    fn report_block(&self, outcome: &BlockOutcome);

    /// Report final scan results summary
    fn report_scan_results(&self, results: &ScanResults);
}
