use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::Context;

/// Reads one event per line.
///
/// Blank lines and everything after a `#` are ignored. Any other line must hold exactly
/// one finite floating-point value.
pub(crate) fn load_events<R>(reader: R, name: &str) -> anyhow::Result<Vec<f64>>
where
    R: BufRead,
{
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("{name}: Cannot read raw data"))?;
        let content = line
            .split_once('#')
            .map_or(line.as_str(), |(head, _)| head)
            .trim();
        if content.is_empty() {
            continue;
        }
        let value = content
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .with_context(|| {
                format!("{name}:{lineno}: Not a single finite floating-point value: {line}")
            })?;
        events.push(value);
    }
    Ok(events)
}

/// Reads events from a file, or from standard input if `path` is `None` or `-`.
pub(crate) fn read_events(path: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            load_events(BufReader::new(file), &path.display().to_string())
        }
        _ => load_events(io::stdin().lock(), "/dev/stdin"),
    }
}
