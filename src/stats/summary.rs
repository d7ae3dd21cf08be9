use crate::rtt::RoundTrip;
use crate::utils::config::{SCHEMA_VERSION, TRIM_FRACTION};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one message size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeStats {
    pub size_bytes: u64,
    pub count: usize,
    pub min_ns: i64,
    pub max_ns: i64,
    pub mean_ns: f64,
    /// Mean after cutting 5% from each tail
    pub trimmed_mean_ns: f64,
    pub median_ns: f64,
    /// Interquartile range (q75 - q25)
    pub iqr_ns: f64,
    /// Standard error of the mean; absent for single samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sem_ns: Option<f64>,
}

/// Summary report written as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Table the samples came from
    pub source: String,

    /// Upper bound of the size filter
    pub max_size_bytes: u64,

    pub samples_used: usize,
    pub samples_dropped: usize,

    /// One entry per size, ascending
    pub by_size: Vec<SizeStats>,

    /// Timestamp when summary was generated
    pub generated_at: String,
}

/// Group samples by size and compute per-size statistics
pub fn summarize(samples: &[RoundTrip], max_size: u64, source: &str) -> LatencySummary {
    let mut groups: BTreeMap<u64, Vec<i64>> = BTreeMap::new();
    let mut dropped = 0;

    for sample in samples {
        if sample.size_bytes == 0 || sample.size_bytes > max_size {
            dropped += 1;
            continue;
        }
        groups
            .entry(sample.size_bytes)
            .or_default()
            .push(sample.duration_ns);
    }

    debug!(
        "Summarizing {} sizes, {} samples dropped by size filter",
        groups.len(),
        dropped
    );

    let by_size: Vec<SizeStats> = groups
        .into_iter()
        .map(|(size, mut durations)| {
            durations.sort_unstable();
            size_stats(size, &durations)
        })
        .collect();

    LatencySummary {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        max_size_bytes: max_size,
        samples_used: samples.len() - dropped,
        samples_dropped: dropped,
        by_size,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// `sorted` must be non-empty and ascending
fn size_stats(size_bytes: u64, sorted: &[i64]) -> SizeStats {
    let n = sorted.len();
    let mean = sorted.iter().map(|&d| d as f64).sum::<f64>() / n as f64;

    let sem_ns = if n > 1 {
        let variance = sorted
            .iter()
            .map(|&d| (d as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        Some(variance.sqrt() / (n as f64).sqrt())
    } else {
        None
    };

    SizeStats {
        size_bytes,
        count: n,
        min_ns: sorted[0],
        max_ns: sorted[n - 1],
        mean_ns: mean,
        trimmed_mean_ns: trimmed_mean(sorted, TRIM_FRACTION),
        median_ns: quantile(sorted, 0.5),
        iqr_ns: quantile(sorted, 0.75) - quantile(sorted, 0.25),
        sem_ns,
    }
}

/// Mean of `sorted` after removing `floor(fraction * n)` values from each end
pub fn trimmed_mean(sorted: &[i64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let cut = (fraction * sorted.len() as f64) as usize;
    let kept = &sorted[cut..sorted.len() - cut];
    if kept.is_empty() {
        return quantile(sorted, 0.5);
    }

    kept.iter().map(|&d| d as f64).sum::<f64>() / kept.len() as f64
}

/// Linearly interpolated quantile of ascending `sorted`
pub fn quantile(sorted: &[i64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0] as f64,
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
        }
    }
}
