//! Report formatting.

use std::io;
use std::time::Duration;

use clap::ValueEnum;
use fibdrv_device::DEVICE_PATH;
use serde::Serialize;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// A single JSON document.
    Json,
}

/// One read from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepRead {
    /// Device position the read was taken at.
    pub offset: u64,
    /// Decimal value returned by the read.
    pub value: String,
    /// Kernel-side computation time reported by the following write.
    pub elapsed_ns: u64,
}

/// One calculator's answer to a single-index request.
#[derive(Debug, Clone, Serialize)]
pub struct CalcOutcome {
    /// Calculator name.
    pub algorithm: String,
    /// Requested index.
    pub n: u64,
    /// Decimal F(n), absent when the calculator failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Digit count of `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<usize>,
    /// Failure message, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock time spent in the calculator.
    pub duration_ns: u64,
}

#[derive(Serialize)]
struct TimingRecord {
    offset: u64,
    elapsed_ns: u64,
}

#[derive(Serialize)]
struct ReadRecord<'a> {
    offset: u64,
    value: &'a str,
}

/// The line printed for every read of the sweep.
#[must_use]
pub fn format_read_line(offset: u64, value: &str) -> String {
    format!("Reading from {DEVICE_PATH} at offset {offset}, returned the sequence {value}.")
}

/// Format a decimal value for display, potentially truncating.
#[must_use]
pub fn format_result(value: &str, verbose: bool) -> String {
    if !verbose && value.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &value[..50],
            &value[value.len() - 50..],
            value.len()
        )
    } else {
        value.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Render the read sweep.
///
/// With `timing`, each read becomes `offset elapsed_ns`; with `quiet`, only
/// the value is printed.
pub fn render_sweep(
    reads: &[SweepRead],
    format: OutputFormat,
    timing: bool,
    quiet: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json if timing => {
            let records: Vec<_> = reads
                .iter()
                .map(|r| TimingRecord {
                    offset: r.offset,
                    elapsed_ns: r.elapsed_ns,
                })
                .collect();
            serde_json::to_string_pretty(&records)
        }
        OutputFormat::Json => {
            let records: Vec<_> = reads
                .iter()
                .map(|r| ReadRecord {
                    offset: r.offset,
                    value: &r.value,
                })
                .collect();
            serde_json::to_string_pretty(&records)
        }
        OutputFormat::Text => Ok(reads
            .iter()
            .map(|r| {
                let line = if timing {
                    format!("{} {}", r.offset, r.elapsed_ns)
                } else if quiet {
                    r.value.clone()
                } else {
                    format_read_line(r.offset, &r.value)
                };
                line + "\n"
            })
            .collect()),
    }
}

/// Render single-index results.
pub fn render_results(
    outcomes: &[CalcOutcome],
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(outcomes);
    }

    Ok(outcomes
        .iter()
        .filter_map(|outcome| match (&outcome.value, quiet) {
            (Some(value), true) => Some(format!("{value}\n")),
            (Some(value), false) => Some(format!(
                "{}: F({}) = {} [{}]\n",
                outcome.algorithm,
                outcome.n,
                format_result(value, verbose),
                format_duration(Duration::from_nanos(outcome.duration_ns))
            )),
            (None, true) => None,
            (None, false) => {
                let error = outcome.error.as_deref().unwrap_or("no result");
                Some(format!("{}: error: {error}\n", outcome.algorithm))
            }
        })
        .collect())
}

/// Write a report to a file.
pub fn write_to_file(path: &str, report: &str) -> io::Result<()> {
    std::fs::write(path, report)
}
