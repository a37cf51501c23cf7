//! The per-cycle statistics block shared by both renderers.

use bt_core::SimConfig;
use bt_sim::CycleStats;

/// Format the four statistics lines.  Both renderers print exactly these,
/// in this order, so batch output and the live view never disagree.
pub fn stat_lines(config: &SimConfig, stats: &CycleStats) -> [String; 4] {
    [
        format!("cycle: {}", stats.cycle),
        format!("moves this cycle: {}", stats.moves),
        format!("teams' \"happiness\": {:.4}", stats.mean_happiness),
        format!(
            "dim: {}, %strength of preference: {}%, %vacancy: {}%, %end: {}%",
            config.dimension,
            config.strength_percent,
            config.vacancy_percent,
            config.endline_percent
        ),
    ]
}
