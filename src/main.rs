use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slope_angles::{IoPolicy, WindowSize, io};

/// Angles of the steepest rise and fall within a trailing window of price changes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace-delimited file of price changes, one per line
    input: PathBuf,

    /// Observations spanned by the trailing window, the current one included
    #[arg(allow_negative_numbers = true)]
    window_size: WindowSize,

    /// Directory receiving window_<WINDOW_SIZE>.csv, must already exist
    #[arg(long, default_value = io::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Treat a missing input as empty and skip an unwritable output instead of failing
    #[arg(long)]
    lenient: bool,

    /// Spread the computation across all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn policy(&self) -> IoPolicy {
        if self.lenient {
            IoPolicy::Lenient
        } else {
            IoPolicy::Strict
        }
    }

    #[cfg(feature = "parallel")]
    fn compute(&self, series: &[f64]) -> Vec<slope_angles::AnglePair<f64>> {
        if self.parallel {
            slope_angles::compute_parallel(series, self.window_size)
        } else {
            slope_angles::compute(series, self.window_size)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn compute(&self, series: &[f64]) -> Vec<slope_angles::AnglePair<f64>> {
        if self.parallel {
            tracing::warn!("built without the parallel feature, computing sequentially");
        }
        slope_angles::compute(series, self.window_size)
    }
}

fn run(args: &Args) -> Result<()> {
    let policy = args.policy();
    let series = io::read_series(&args.input, policy)?;

    let started = Instant::now();
    let angles = args.compute(&series);
    let elapsed = started.elapsed();

    let output = io::output_path(&args.output_dir, args.window_size);
    let written = io::write_series(&output, &angles, policy)?;

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        window = %args.window_size,
        observations = series.len(),
        written,
        ?elapsed,
        "slope angles computed"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slope_angles=info".into()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
