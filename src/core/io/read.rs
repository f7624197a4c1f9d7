use anyhow::{Context, Result};
use matlib::Point;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analysis::parse_point;

/// Read points from a text file, one `x y` (or `x,y`) pair per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn read_points_file<P: AsRef<Path>>(filename: P) -> Result<Vec<Point>> {
    let filename = filename.as_ref();
    let file = File::open(filename)
        .with_context(|| format!("Cannot open points file {}", filename.display()))?;

    let reader = BufReader::new(file);
    let mut points = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.with_context(|| format!("Error reading line {}", line_num + 1))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let point = parse_point(line).with_context(|| format!("Line {}", line_num + 1))?;
        points.push(point);
    }

    Ok(points)
}
