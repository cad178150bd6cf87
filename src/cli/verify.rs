use anyhow::{bail, Result};
use std::io::{self, Write};

use crate::verify_round_trip;

use super::{read_input, VerifyArgs};

pub(crate) fn run_verify(args: VerifyArgs) -> Result<()> {
    let raw = read_input(&args.names, args.r#in.as_deref())?;
    let results = verify_round_trip(&raw)?;

    let mut failed = Vec::new();
    let mut out = io::stdout().lock();
    for result in &results {
        if result.is_ok() {
            if !args.quiet {
                writeln!(out, "{}: ok", result.format)?;
            }
            continue;
        }

        failed.push(result.format.to_string());
        if !args.quiet {
            let label = result.format.to_string();
            let expected = lines(&result.expected);
            let decoded = lines(&result.decoded);
            let diff = similar::TextDiff::from_lines(&expected, &decoded);
            let unified = diff
                .unified_diff()
                .context_radius(3)
                .header("expected", &label)
                .to_string();
            writeln!(out, "{}: mismatch ({})", result.format, result.rendered)?;
            write!(out, "{}", unified)?;
        }
    }

    if !failed.is_empty() {
        bail!("verify: round trip mismatch in {}", failed.join(", "));
    }
    Ok(())
}

fn lines(names: &[String]) -> String {
    let mut out = names.join("\n");
    out.push('\n');
    out
}
