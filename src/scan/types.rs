//! Type definitions for block scans

use crate::reed_solomon::Uncorrectable;
use std::fmt;

/// What a scan does with damaged blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Count damage, never modify the buffer
    Verify,
    /// Repair every correctable block in place
    Repair,
}

impl ScanMode {
    pub fn corrects(&self) -> bool {
        matches!(self, ScanMode::Repair)
    }
}

/// Outcome of decoding one codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    /// Syndromes are zero
    Clean,
    /// This many symbols are corrupted; repaired when scanning in repair mode
    Damaged(usize),
    /// More damage than the parity can locate
    Uncorrectable(Uncorrectable),
    /// Trailing block too short to hold the parity symbols
    Skipped,
}

impl BlockStatus {
    /// Returns true if the block holds damage the scan could not fix
    pub fn is_fatal(&self) -> bool {
        matches!(self, BlockStatus::Uncorrectable(_))
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockStatus::Clean => write!(f, "clean"),
            BlockStatus::Damaged(count) => write!(f, "{} damaged symbols", count),
            BlockStatus::Uncorrectable(reason) => write!(f, "uncorrectable: {}", reason),
            BlockStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Per-block scan result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOutcome {
    pub index: usize,
    /// First symbol of the block within the scanned buffer
    pub offset: usize,
    pub length: usize,
    pub status: BlockStatus,
}

/// Aggregated results of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResults {
    pub mode: ScanMode,
    pub blocks: Vec<BlockOutcome>,
    pub clean_block_count: usize,
    pub damaged_block_count: usize,
    pub uncorrectable_block_count: usize,
    pub skipped_block_count: usize,
    pub damaged_symbol_count: usize,
}

impl ScanResults {
    pub(crate) fn from_blocks(mode: ScanMode, blocks: Vec<BlockOutcome>) -> Self {
        let mut results = Self {
            mode,
            blocks: Vec::new(),
            clean_block_count: 0,
            damaged_block_count: 0,
            uncorrectable_block_count: 0,
            skipped_block_count: 0,
            damaged_symbol_count: 0,
        };

        for block in &blocks {
            match block.status {
                BlockStatus::Clean => results.clean_block_count += 1,
                BlockStatus::Damaged(count) => {
                    results.damaged_block_count += 1;
                    results.damaged_symbol_count += count;
                }
                BlockStatus::Uncorrectable(_) => results.uncorrectable_block_count += 1,
                BlockStatus::Skipped => results.skipped_block_count += 1,
            }
        }
        results.blocks = blocks;
        results
    }

    pub fn total_block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_clean(&self) -> bool {
        self.damaged_block_count == 0 && self.uncorrectable_block_count == 0
    }

    /// Every damaged block can be (or was) repaired
    pub fn repair_possible(&self) -> bool {
        self.uncorrectable_block_count == 0
    }

    pub fn damaged_blocks(&self) -> impl Iterator<Item = &BlockOutcome> {
        self.blocks
            .iter()
            .filter(|b| matches!(b.status, BlockStatus::Damaged(_)))
    }

    pub fn uncorrectable_blocks(&self) -> impl Iterator<Item = &BlockOutcome> {
        self.blocks.iter().filter(|b| b.status.is_fatal())
    }
}

impl fmt::Display for ScanResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Results:")?;
        writeln!(f, "=============")?;

        [
            (self.clean_block_count, "block(s) are clean."),
            (self.damaged_block_count, "block(s) are damaged."),
            (self.uncorrectable_block_count, "block(s) cannot be corrected."),
            (self.skipped_block_count, "trailing block(s) too short to check."),
        ]
        .iter()
        .filter(|(count, _)| *count > 0)
        .try_for_each(|(count, message)| writeln!(f, "{} {}", count, message))?;

        match (self.damaged_block_count, self.uncorrectable_block_count, self.mode) {
            (0, 0, _) => writeln!(f, "All blocks are correct, repair is not required.")?,
            (_, 0, ScanMode::Verify) => writeln!(
                f,
                "Repair is possible: {} symbols need correcting.",
                self.damaged_symbol_count
            )?,
            (_, 0, ScanMode::Repair) => writeln!(
                f,
                "Repair complete: {} symbols corrected.",
                self.damaged_symbol_count
            )?,
            (_, bad, _) => writeln!(f, "Repair is not possible for {} block(s).", bad)?,
        }

        Ok(())
    }
}
