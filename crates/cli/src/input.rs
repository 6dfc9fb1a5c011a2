//! Point-file parsing and validation.
//!
//! Format: the first whitespace-delimited token is the point count, then
//! one `x y` pair per point. Extra whitespace and blank lines are
//! tolerated anywhere; tokens past the declared count are ignored.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use closest_pair::points::Point;

/// Read and validate a point file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("in {}", path.display()))
}

/// Parse point-file text into validated points.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let count_tok = match tokens.next() {
        Some(t) => t,
        None => bail!("file is empty"),
    };
    let count: usize = count_tok
        .parse()
        .with_context(|| format!("point count {count_tok:?} is not a number"))?;
    if count == 0 {
        bail!("file is empty");
    }
    if count == 1 {
        bail!("number of coordinates should be at least two to find a distance");
    }
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x = next_coordinate(&mut tokens, i, "x")?;
        let y = next_coordinate(&mut tokens, i, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn next_coordinate<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    index: usize,
    axis: &str,
) -> Result<f64> {
    let tok = tokens
        .next()
        .with_context(|| format!("missing {axis} coordinate for point {}", index + 1))?;
    tok.parse()
        .with_context(|| format!("coordinate {tok:?} for point {} is not a number", index + 1))
}
