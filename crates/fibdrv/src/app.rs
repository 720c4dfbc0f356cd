//! Application entry point and dispatch.

use std::io::SeekFrom;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap_complete::generate;
use tracing::{debug, info};

use fibdrv_bignum::render;
use fibdrv_core::{
    cross_check, generate_parallel, select, Calculator, CalculatorFactory, DefaultFactory,
    FibError, LinearIteration,
};
use fibdrv_device::FibDevice;

use crate::config::AppConfig;
use crate::output::{render_results, render_sweep, write_to_file, CalcOutcome, SweepRead};

/// Read buffer handed to the device; F(1000) has 209 digits.
const READ_BUFFER_LEN: usize = 256;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate(shell, &mut cmd, "fibdrv", &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    let factory = DefaultFactory::new();
    let report = match config.index {
        Some(n) => run_single(config, &factory, n)?,
        None => run_sweep(config, &factory)?,
    };

    if let Some(ref path) = config.output {
        write_to_file(path, &report).with_context(|| format!("writing {path}"))?;
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Sweep the device forward over `0..=offset`, then back down.
fn run_sweep(config: &AppConfig, factory: &dyn CalculatorFactory) -> Result<String> {
    let calc = factory.get(&config.algo)?;
    let device = FibDevice::with_calculator(Arc::clone(&calc));
    let reads = sweep(&device, config.offset)?;

    if config.verify {
        verify_sweep(&reads, calc.name(), config.offset)?;
        info!(reads = reads.len(), "sweep verified against linear baseline");
    }

    Ok(render_sweep(
        &reads,
        config.format,
        config.timing,
        config.quiet,
    )?)
}

fn sweep(device: &FibDevice, limit: u64) -> Result<Vec<SweepRead>> {
    let mut session = device.open()?;
    let mut buf = [0u8; READ_BUFFER_LEN];
    let mut reads = Vec::new();

    for offset in (0..=limit).chain((0..=limit).rev()) {
        session.seek(SeekFrom::Start(offset));
        let len = session.read(&mut buf)?;
        let value = String::from_utf8(buf[..len].to_vec())?;
        let elapsed_ns = session.write(&[]);
        reads.push(SweepRead {
            offset,
            value,
            elapsed_ns,
        });
    }
    debug!(reads = reads.len(), calculator = device.calculator_name(), "sweep done");
    Ok(reads)
}

fn verify_sweep(reads: &[SweepRead], name: &str, limit: u64) -> Result<(), FibError> {
    let baseline: Vec<String> = generate_parallel(&LinearIteration, 0..=limit)?
        .iter()
        .map(|(_, value)| render(value))
        .collect();
    for read in reads {
        let expected = usize::try_from(read.offset)
            .ok()
            .and_then(|i| baseline.get(i));
        if expected != Some(&read.value) {
            return Err(FibError::Mismatch {
                n: read.offset,
                left: name.to_string(),
                right: LinearIteration.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Compute F(n) with every selected calculator.
fn run_single(config: &AppConfig, factory: &dyn CalculatorFactory, n: u64) -> Result<String> {
    let calcs = select(&config.algo, factory)?;
    let mut outcomes = Vec::with_capacity(calcs.len());
    let mut first_error = None;
    let mut agreed: Option<(&Arc<dyn Calculator>, String)> = None;

    for calc in &calcs {
        let started = Instant::now();
        let result = calc.calculate(n);
        let duration_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        match result {
            Ok(value) => {
                let text = render(&value);
                if let Some((first, expected)) = &agreed {
                    if *expected != text {
                        return Err(FibError::Mismatch {
                            n,
                            left: first.name().to_string(),
                            right: calc.name().to_string(),
                        }
                        .into());
                    }
                } else {
                    agreed = Some((calc, text.clone()));
                }
                outcomes.push(CalcOutcome {
                    algorithm: calc.name().to_string(),
                    n,
                    digits: Some(text.len()),
                    value: Some(text),
                    error: None,
                    duration_ns,
                });
            }
            Err(err) => {
                debug!(calculator = calc.name(), error = %err, "calculation failed");
                outcomes.push(CalcOutcome {
                    algorithm: calc.name().to_string(),
                    n,
                    value: None,
                    digits: None,
                    error: Some(err.to_string()),
                    duration_ns,
                });
                first_error.get_or_insert(err);
            }
        }
    }

    match (agreed, first_error) {
        (None, Some(err)) => return Err(err.into()),
        (Some((first, _)), _) if config.verify => {
            let checked: Vec<Arc<dyn Calculator>> =
                vec![Arc::clone(first), Arc::new(LinearIteration)];
            cross_check(&checked, n)?;
        }
        _ => {}
    }

    Ok(render_results(
        &outcomes,
        config.format,
        config.quiet,
        config.verbose,
    )?)
}
