//! Application configuration from CLI flags and environment.

use clap::Parser;
use fibdrv_core::FibError;
use fibdrv_device::MAX_LENGTH;

use crate::output::OutputFormat;

/// Read Fibonacci numbers from the emulated /dev/fibonacci device.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Highest offset of the read sweep.
    #[arg(long, default_value = "100", env = "FIBDRV_OFFSET")]
    pub offset: u64,

    /// Compute a single F(N) instead of sweeping the device.
    #[arg(short = 'n', long = "index")]
    pub index: Option<u64>,

    /// Algorithm: doubling, doubling-karatsuba, linear, fixed, decimal (or all with --index).
    #[arg(long, default_value = "doubling", env = "FIBDRV_ALGO")]
    pub algo: String,

    /// Check every result against the linear baseline.
    #[arg(long)]
    pub verify: bool,

    /// Print `offset elapsed_ns` for each read instead of values.
    #[arg(long)]
    pub timing: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject flag combinations that cannot run.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.index.is_none() {
            if self.offset > MAX_LENGTH {
                return Err(FibError::Config(format!(
                    "offset {} exceeds the device limit {MAX_LENGTH}",
                    self.offset
                )));
            }
            if self.algo == "all" {
                return Err(FibError::Config("--algo all requires --index".into()));
            }
        } else if self.timing {
            return Err(FibError::Config("--timing applies to the read sweep only".into()));
        }
        Ok(())
    }
}
