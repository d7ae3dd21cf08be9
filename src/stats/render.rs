//! Terminal rendering of latency summaries.

use super::LatencySummary;
use colored::*;

/// Render a summary as an aligned text table
pub fn render_summary_table(summary: &LatencySummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        format!("Round-trip latency summary: {}", summary.source).bold()
    ));
    out.push_str(&format!(
        "  Samples: {} used, {} outside (0, {}] bytes\n\n",
        summary.samples_used, summary.samples_dropped, summary.max_size_bytes
    ));

    if summary.by_size.is_empty() {
        out.push_str(&format!("  {}\n", "No samples in range".yellow()));
        return out;
    }

    out.push_str(&format!(
        "  {:>10} {:>7} {:>12} {:>12} {:>12} {:>12} {:>10}\n",
        "size", "count", "min", "trim-mean", "median", "max", "iqr"
    ));

    for s in &summary.by_size {
        out.push_str(&format!(
            "  {:>10} {:>7} {:>12} {:>12} {:>12} {:>12} {:>10}\n",
            s.size_bytes.to_string().cyan(),
            s.count,
            s.min_ns,
            format!("{:.1}", s.trimmed_mean_ns).green(),
            format!("{:.1}", s.median_ns),
            s.max_ns,
            format!("{:.1}", s.iqr_ns)
        ));
    }

    out
}
