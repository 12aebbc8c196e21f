use std::io::Write as _;

use anyhow::Context;
use graphstudy_analysis::output::Destination;

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// Nothing is written to the null destination.
pub(crate) fn write_json<T>(destination: &Destination, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let Some(mut output) = destination
        .open()
        .with_context(|| format!("Failed to open output: {destination}"))?
    else {
        return Ok(());
    };
    serde_json::to_writer_pretty(&mut output, value)
        .with_context(|| format!("Failed to write JSON to {destination}"))?;
    writeln!(output)
        .and_then(|()| output.flush())
        .with_context(|| format!("Failed to flush output to {destination}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        write_json(&Destination::File(path.clone()), &[1, 2]).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "[\n  1,\n  2\n]\n");
    }

    #[test]
    fn test_write_json_to_null() {
        write_json(&Destination::Null, &"ignored").unwrap();
    }

    #[test]
    fn test_write_json_reports_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("meta.json");
        let err = write_json(&Destination::File(path), &0).unwrap_err();
        assert!(err.to_string().contains("meta.json"));
    }
}
