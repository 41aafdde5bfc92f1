//! Silent reporter for block scans
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{Reporter, ScanReporter};
use crate::scan::{BlockOutcome, ScanResults};

/// Silent implementation for scans
#[derive(Default)]
pub struct SilentScanReporter;

impl SilentScanReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentScanReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl ScanReporter for SilentScanReporter {
    fn report_scan_start(&self, _total_blocks: usize, _parallel: bool) {}
    fn report_block(&self, _outcome: &BlockOutcome) {}
    fn report_scan_results(&self, _results: &ScanResults) {}
}
