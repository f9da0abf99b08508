//! Search command: run the echo search on a strain file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use oread_filter::bandpass_filter;
use oread_io::{
    CurvePoint, GridSummary, SearchRecord, TemplateSummary, read_strain_txt, write_search_json,
};
use oread_search::{
    DelayGrid, SearchResult, Template, estimate_significance, extract_template, scan,
};

use crate::cli::SearchArgs;
use crate::config::OreadConfig;
use crate::{convert, report};

/// Run the search pipeline.
pub fn run(args: SearchArgs) -> Result<()> {
    let _cmd = info_span!("search").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: OreadConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Read strain data
    let input = args.input.as_ref().or(config.io.input.as_ref()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let series = read_strain_txt(input)
        .with_context(|| format!("failed to read strain file: {}", input.display()))?;

    // 3. Band-limit to the ringdown frequency range
    let series = if config.filter.enabled {
        let bandpass = convert::build_bandpass_config(&config.filter);
        info!(
            low_hz = bandpass.low_hz(),
            high_hz = bandpass.high_hz(),
            "band-passing strain"
        );
        bandpass_filter(&series, &bandpass).context("band-pass filtering failed")?
    } else {
        series
    };

    // 4. Extract the ringdown template
    let template_config = convert::build_template_config(&config.template, args.peak_time);
    let template =
        extract_template(&series, &template_config).context("template extraction failed")?;
    info!(
        peak_time = template.peak_time(),
        n_samples = template.len(),
        "ringdown template ready"
    );

    // 5. Scan the delay grid
    let grid = convert::build_delay_grid(&config.search)?;
    info!(n_delays = grid.len(), "scanning delay grid");
    let curve = scan(&series, &template, &grid).context("delay scan failed")?;

    // 6. Score the peak
    let significance =
        estimate_significance(&curve, template.len()).context("significance estimation failed")?;
    let result = SearchResult::new(curve, significance);
    info!(
        sigma = result.sigma(),
        peak_delay_ms = result.peak_delay() * 1e3,
        classification = %result.classification(),
        "search complete"
    );

    // 7. Report
    let text = report::render(
        config.event.name.as_deref(),
        &config.event.detector,
        &template,
        &grid,
        &result,
    );
    println!("{text}");

    // 8. Persist the record if requested
    if let Some(output) = args.output.as_ref().or(config.io.output.as_ref()) {
        let record = build_record(&config, &template, &grid, &result);
        write_search_json(output, &record)
            .with_context(|| format!("failed to write record: {}", output.display()))?;
    }

    Ok(())
}

/// Flattens the search outcome into a serializable record.
fn build_record(
    config: &OreadConfig,
    template: &Template,
    grid: &DelayGrid,
    result: &SearchResult,
) -> SearchRecord {
    SearchRecord {
        event: config.event.name.clone(),
        detector: Some(config.event.detector.clone()),
        grid: GridSummary {
            delay_min_s: grid.min(),
            delay_max_s: grid.max(),
            delay_step_s: grid.step(),
            n_delays: grid.len(),
        },
        template: TemplateSummary {
            peak_time: template.peak_time(),
            duration_s: template.duration(),
            n_samples: template.len(),
        },
        peak_delay_s: result.peak_delay(),
        peak_correlation: result.peak_correlation(),
        noise_std: result.noise_std(),
        significance: result.sigma(),
        classification: result.classification().to_string(),
        p_value: result.significance().p_value(),
        curve: result
            .curve()
            .iter()
            .map(|(delay_s, correlation)| CurvePoint {
                delay_s,
                correlation,
            })
            .collect(),
    }
}
