//! Text report rendering for search results.
//!
//! All formatting and unit conversion (seconds to milliseconds) happens
//! here; the search crates only return values.

use std::fmt::Write as _;

use oread_search::{
    Classification, DelayGrid, MARGINAL_SIGMA, STRONG_CANDIDATE_SIGMA, SearchResult, Template,
};

const RULE: &str =
    "======================================================================";

/// Renders the search outcome as a plain-text report.
pub fn render(
    event: Option<&str>,
    detector: &str,
    template: &Template,
    grid: &DelayGrid,
    result: &SearchResult,
) -> String {
    let mut out = String::new();
    let significance = result.significance();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "OREAD ECHO SEARCH REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Event:     {}", event.unwrap_or("(unnamed)"));
    let _ = writeln!(out, "Detector:  {detector}");
    let _ = writeln!(
        out,
        "Delays:    {:.4} - {:.4} ms in {:.5} ms steps ({} candidates)",
        grid.min() * 1e3,
        grid.max() * 1e3,
        grid.step() * 1e3,
        grid.len()
    );
    let _ = writeln!(
        out,
        "Template:  {} samples ({:.1} ms) from peak at GPS {:.6}",
        template.len(),
        template.duration() * 1e3,
        template.peak_time()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "RESULTS");
    let _ = writeln!(out, "-------");
    let _ = writeln!(out, "Peak correlation:    {:.6}", result.peak_correlation());
    let _ = writeln!(out, "Peak delay:          {:.4} ms", result.peak_delay() * 1e3);
    let _ = writeln!(
        out,
        "Significance:        {:.2} sigma (p = {:.3e})",
        result.sigma(),
        significance.p_value()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Expected noise correlation: {:.6}", result.noise_std());
    let _ = writeln!(
        out,
        "{MARGINAL_SIGMA:.0} sigma threshold:           {:.6}",
        MARGINAL_SIGMA * result.noise_std()
    );
    let _ = writeln!(
        out,
        "{STRONG_CANDIDATE_SIGMA:.0} sigma threshold:           {:.6}",
        STRONG_CANDIDATE_SIGMA * result.noise_std()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "INTERPRETATION");
    let _ = writeln!(out, "--------------");
    match result.classification() {
        Classification::StrongCandidate => {
            let _ = writeln!(out, "Strong echo candidate (> {STRONG_CANDIDATE_SIGMA:.0} sigma).");
            let _ = writeln!(out, "Verify against other detectors and events before");
            let _ = writeln!(out, "drawing conclusions; a single-detector correlation");
            let _ = writeln!(out, "peak is not a detection.");
        }
        Classification::Marginal => {
            let _ = writeln!(
                out,
                "Marginal ({MARGINAL_SIGMA:.0}-{STRONG_CANDIDATE_SIGMA:.0} sigma): interesting but not conclusive."
            );
            let _ = writeln!(out, "Requires additional investigation.");
        }
        Classification::NotSignificant => {
            let _ = writeln!(out, "No significant echo in this delay range.");
            let _ = writeln!(out, "Either no echo exists here, or its amplitude is");
            let _ = writeln!(out, "below the detection threshold of this data.");
        }
    }
    let _ = writeln!(out, "{RULE}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oread_search::{SearchConfig, TemplateConfig, extract_template, run_search};
    use oread_strain::StrainSeries;

    fn small_result() -> (Template, DelayGrid, SearchResult) {
        let samples: Vec<f64> = (0..400)
            .map(|k| ((k as f64) * 0.37).sin() * (1.0 - k as f64 / 500.0))
            .collect();
        let series = StrainSeries::new(samples, 1000.0, 0.0).unwrap();
        let grid = DelayGrid::new(0.001, 0.05, 0.001).unwrap();
        let template_config = TemplateConfig::new(0.1).with_peak_time(0.0);
        let template = extract_template(&series, &template_config).unwrap();
        let config = SearchConfig::new(template_config, grid.clone());
        let result = run_search(&series, &config).unwrap();
        (template, grid, result)
    }

    #[test]
    fn report_names_event_and_detector() {
        let (template, grid, result) = small_result();
        let text = render(Some("GW150914"), "H1", &template, &grid, &result);
        assert!(text.contains("Event:     GW150914"));
        assert!(text.contains("Detector:  H1"));
        assert!(text.contains("RESULTS"));
        assert!(text.contains("INTERPRETATION"));
    }

    #[test]
    fn report_handles_unnamed_event() {
        let (template, grid, result) = small_result();
        let text = render(None, "L1", &template, &grid, &result);
        assert!(text.contains("(unnamed)"));
    }

    #[test]
    fn report_converts_delay_to_milliseconds() {
        let (template, grid, result) = small_result();
        let text = render(None, "H1", &template, &grid, &result);
        // Grid runs 1 ms - 50 ms
        assert!(text.contains("1.0000 - 50.0000 ms"), "report was:\n{text}");
    }
}
