//! Report rendering for evaluation runs.

use boxbench_harness::RoundReport;

/// Print the per-round table: one row per training-set size, timing
/// columns in seconds.
pub fn print_table(name: &str, reports: &[RoundReport]) {
    println!(
        "{:<16} {:>5} {:>9} {:>9} {:>9} {:>6} {:>12} {:>8} {:>8} {:>8}",
        "name", "round", "width", "error", "pixels", "elems", "accuracy", "prep", "resize", "synth"
    );
    for report in reports {
        println!(
            "{:<16} {:>5} {:>9.1} {:>9.3} {:>9.1} {:>6} {:>12.4} {:>8.3} {:>8.3} {:>8.3}",
            name,
            report.round,
            report.train_root_width,
            report.mean_rms,
            report.mean_pixel_diff,
            report.node_count,
            report.accuracy,
            report.timings.prep_s,
            report.timings.resize_s,
            report.timings.synth_s,
        );
    }
}
