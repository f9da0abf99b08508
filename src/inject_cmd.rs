//! Inject command: generate a synthetic event strain file.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use oread_io::{synthesize_event, write_strain_txt};

use crate::cli::InjectArgs;
use crate::config::OreadConfig;
use crate::convert;

/// Run the injection pipeline.
pub fn run(args: InjectArgs) -> Result<()> {
    let _cmd = info_span!("inject").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: OreadConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let injection = convert::build_injection_config(&config.inject);
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let series = synthesize_event(&injection, &mut rng).context("injection failed")?;
    info!(
        n_samples = series.len(),
        duration_s = series.duration(),
        "synthetic event generated"
    );

    write_strain_txt(&args.output, &series)
        .with_context(|| format!("failed to write strain file: {}", args.output.display()))?;
    println!(
        "Wrote {} samples at {} Hz to {}",
        series.len(),
        series.sample_rate(),
        args.output.display()
    );

    Ok(())
}
