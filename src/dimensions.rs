use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DimensionsError, ParseError};
use crate::process;

static DIMENSIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"dimensions:\s*([0-9]+)x([0-9]+) pixels").expect("dimensions pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Extracts the single `dimensions: WxH pixels` entry from `text`.
///
/// No match and several matches (one per screen) are the same error.
pub fn parse(text: &str) -> Result<Dimensions, ParseError> {
    let captures: Vec<(&str, &str)> = DIMENSIONS_RE
        .captures_iter(text)
        .map(|c| {
            let (_, [w, h]) = c.extract();
            (w, h)
        })
        .collect();

    let matches = || {
        captures
            .iter()
            .map(|(w, h)| format!("{}x{}", w, h))
            .collect::<Vec<_>>()
    };

    let [(w, h)] = captures.as_slice() else {
        return Err(ParseError { matches: matches() });
    };

    match (parse_side(w), parse_side(h)) {
        (Some(width), Some(height)) => Ok(Dimensions { width, height }),
        _ => Err(ParseError { matches: matches() }),
    }
}

fn parse_side(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Runs the display query and parses its stdout. Parsing only happens if
/// the command succeeded.
pub fn fetch(command: &str) -> Result<Dimensions, DimensionsError> {
    debug!("querying display with `{}`", command);
    let result = process::execute(command)?;
    debug!("query exited with {}", result.status);
    if !result.stderr.is_empty() {
        debug!("query stderr: {}", String::from_utf8_lossy(&result.stderr).trim_end());
    }
    let dims = parse(&result.stdout_lossy())?;
    debug!("found {}x{}", dims.width, dims.height);
    Ok(dims)
}

pub fn format_human(dims: &Dimensions) -> String {
    format!("{} {}", dims.width, dims.height)
}
