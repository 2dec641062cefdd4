//! Status line shown in the window title.

use crate::config::VisualizerConfig;
use crate::stats::RunStats;

/// `"BUBBLE - Ascending | 50 elements | Speed: 50% | Comparisons: 12 | Time: 0.61s"`
pub fn title(config: &VisualizerConfig, stats: &RunStats) -> String {
    format!(
        "{} - {} | {} elements | Speed: {}% | Comparisons: {} | Time: {:.2}s",
        config.algorithm.name().to_uppercase(),
        config.direction(),
        config.array_size,
        config.speed,
        stats.comparisons,
        stats.elapsed_secs(),
    )
}
