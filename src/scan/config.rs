//! Configuration for block scans

/// Configuration for scanning a buffer of codewords
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of threads for decoding (0 = auto-detect)
    pub threads: usize,
    /// Whether blocks are decoded in parallel (false = single-threaded)
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl ScanConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);
        let parallel = !matches.get_flag("no-parallel");

        Self::new(threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_parallel_auto() {
        let config = ScanConfig::default();
        assert_eq!(config.threads, 0);
        assert!(config.parallel);
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_sequential_uses_one_thread() {
        assert_eq!(ScanConfig::new(8, false).effective_threads(), 1);
        assert_eq!(ScanConfig::new(3, true).effective_threads(), 3);
    }
}
