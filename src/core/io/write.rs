use anyhow::{Context, Result};
use matlib::{LINE_PADDING, Point, RegressionResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::analysis::Analysis;

/// Writes contents to a file, creating parent directories if they don't exist.
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}

fn fmt_point(p: &Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

fn write_fit(out: &mut String, fit: &RegressionResult, points: &[Point]) {
    let _ = writeln!(out, "  Slope:     {:.4}", fit.slope);
    let _ = writeln!(out, "  Intercept: {:.4}", fit.intercept);
    if let Some((left, right)) = fit.line_extent(points, LINE_PADDING) {
        let _ = writeln!(out, "  Line:      {} -> {}", fmt_point(&left), fmt_point(&right));
    }
}

/// Human readable report: slopes to 4 decimals, points to 2.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analysis with {} points", analysis.points.len());
    let listed: Vec<String> = analysis.points.iter().map(fmt_point).collect();
    let _ = writeln!(out, "  Points:    {}", listed.join(" "));
    write_fit(&mut out, &analysis.fit, &analysis.points);

    let _ = writeln!(out, "\nSuggested reversal point: {}", fmt_point(&analysis.suggestion));

    if let (Some(fifth), Some(combined)) = (analysis.fifth, analysis.combined_fit) {
        let all = analysis.combined_points();
        let _ = writeln!(out, "\nAnalysis with {} points", all.len());
        let _ = writeln!(out, "  Outlier:   {}", fmt_point(&fifth));
        write_fit(&mut out, &combined, &all);

        let verdict = if analysis.is_reversed() {
            "reversed (positive -> negative)"
        } else {
            "not reversed"
        };
        let _ = writeln!(out, "\nSlope {}", verdict);
    }

    out
}

pub fn render_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("Cannot serialize analysis")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::default_points;
    use matlib::ReversalPolicy;
    use tempfile::tempdir;

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir/report.txt");

        write_report(&file_path, "Slope: 2.0000").unwrap();

        let read_content = fs::read_to_string(file_path).unwrap();
        assert_eq!(read_content, "Slope: 2.0000");
    }

    #[test]
    fn test_render_report() {
        let mut analysis = Analysis::new(&default_points(), &ReversalPolicy::default()).unwrap();
        let before = render_report(&analysis);
        assert!(before.contains("Analysis with 4 points"));
        assert!(before.contains("Slope:     2.0000"));
        assert!(before.contains("Intercept: 5.0000"));
        assert!(before.contains("Line:      (-0.80, 3.40) -> (11.80, 28.60)"));
        assert!(before.contains("Suggested reversal point: (24.41, -3.73)"));
        assert!(!before.contains("Analysis with 5 points"));

        analysis.use_suggestion();
        let after = render_report(&analysis);
        assert!(after.contains("Analysis with 5 points"));
        assert!(after.contains("Outlier:   (24.41, -3.73)"));
        assert!(after.contains("Slope reversed (positive -> negative)"));
    }

    #[test]
    fn test_render_json() {
        let mut analysis = Analysis::new(&default_points(), &ReversalPolicy::default()).unwrap();
        analysis.use_suggestion();
        let json: serde_json::Value = serde_json::from_str(&render_json(&analysis).unwrap()).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 4);
        assert!(json["combined_fit"]["slope"].as_f64().unwrap() < 0.0);
        assert_eq!(json["suggestion"]["x"], json["fifth"]["x"]);
    }
}
