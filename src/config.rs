use std::path::PathBuf;

/// record counts trialled when none are given
pub const DEFAULT_SIZES: [usize; 6] = [500, 1000, 3000, 6000, 9000, 12000];

pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// one trial per entry, run in this order
    pub sizes: Vec<usize>,
    /// results file receiving one CSV row per trial
    pub output: PathBuf,
    /// `None` shuffles with fresh entropy, so random-order trials differ between runs
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// the most records any trial needs
    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}
