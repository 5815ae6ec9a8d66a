use std::io::Write;

use strsplit::StrSplit;

use crate::config::Settings;

/// Splits `input` and writes the segments to `out`, one per line.
///
/// Returns the number of segments.
pub fn render<W: Write>(input: &str, settings: &Settings, out: &mut W) -> anyhow::Result<usize> {
    let input = if settings.trim_newline {
        trim_newline(input)
    } else {
        input
    };

    let segments = StrSplit::new(input, settings.delimiter.as_str())?;
    if settings.count {
        let count = segments.count();
        writeln!(out, "{count}")?;
        return Ok(count);
    }

    let mut count = 0;
    for (idx, segment) in segments.enumerate() {
        if settings.number {
            writeln!(out, "{idx}\t{segment}")?;
        } else {
            writeln!(out, "{segment}")?;
        }
        count += 1;
    }
    Ok(count)
}

fn trim_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
