//! mosaic: extract typed tokens from free text.
//!
//! Usage:
//!   mosaic --matcher number --matcher word [file...]
//!
//! Scans the given files (or stdin) with the listed matchers, in priority
//! order, and prints every token found. Scalars no matcher claims are
//! dropped, so the output is the structured substrings only.

use clap::Parser;
use miette::{bail, Context, IntoDiagnostic, Result};
use mosaic_matchers::{builtin, ScalarSet, SetMatcher};
use mosaic_scanner::{scan_str, Matcher, Token};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(
    name = "mosaic",
    about = "mosaic - extract typed tokens from free text"
)]
struct Cli {
    /// Files to scan. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// A token kind to scan with; repeat for several, listed from most- to
    /// least-specific. Builtins: number, word, identifier, whitespace,
    /// hash-format. Custom: `set:NAME:TAKE[:START]`, where TAKE and START
    /// are literal scalar lists (e.g. `set:date:0123456789/:0123456789`).
    #[arg(short, long = "matcher", value_name = "SPEC", required = true)]
    matchers: Vec<String>,

    /// Emit one JSON document per input instead of text lines.
    #[arg(long)]
    json: bool,
}

/// A token with its kind name resolved, ready for output.
#[derive(Serialize)]
struct TokenRecord {
    kind: String,
    start: u32,
    length: u32,
    text: String,
}

/// JSON output document for one input.
#[derive(Serialize)]
struct ScanReport {
    input: String,
    tokens: Vec<TokenRecord>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let matchers = cli
        .matchers
        .iter()
        .map(|spec| build_matcher(spec))
        .collect::<Result<Vec<_>>>()?;

    let inputs = read_inputs(&cli.files)?;

    // Scans are independent, so multiple inputs go wide.
    let reports = inputs
        .into_par_iter()
        .map(|(name, text)| scan_input(name, &text, &matchers))
        .collect::<Result<Vec<_>>>()?;

    for report in reports {
        if cli.json {
            println!(
                "{}",
                serde_json::to_string(&report).into_diagnostic()?
            );
        } else {
            print_report(&report);
        }
    }
    Ok(())
}

/// Read every input up front: named files, or stdin as `-`.
fn read_inputs(files: &[String]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .into_diagnostic()
            .wrap_err("failed to read stdin")?;
        return Ok(vec![("-".to_string(), text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read {path}"))?;
            Ok((path.clone(), text))
        })
        .collect()
}

/// Scan one input and resolve kind names for display.
fn scan_input(
    name: String,
    text: &str,
    matchers: &[Box<dyn Matcher + Send + Sync>],
) -> Result<ScanReport> {
    let refs: Vec<&dyn Matcher> = matchers.iter().map(|m| m.as_ref() as &dyn Matcher).collect();
    let tokens = scan_str(text, &refs).into_diagnostic()?;

    let records = tokens
        .into_iter()
        .map(|token: Token| TokenRecord {
            kind: refs[token.kind.0].name().to_string(),
            start: token.span.start,
            length: token.span.length,
            text: token.text,
        })
        .collect();
    Ok(ScanReport {
        input: name,
        tokens: records,
    })
}

fn print_report(report: &ScanReport) {
    for token in &report.tokens {
        println!(
            "{}:{}..{}\t{}\t{}",
            report.input,
            token.start,
            token.start + token.length,
            token.kind,
            token.text
        );
    }
}

/// Turn a `--matcher` spec into a matcher instance.
fn build_matcher(spec: &str) -> Result<Box<dyn Matcher + Send + Sync>> {
    match spec {
        "number" => return Ok(Box::new(builtin::number())),
        "word" => return Ok(Box::new(builtin::word())),
        "identifier" => return Ok(Box::new(builtin::identifier())),
        "whitespace" => return Ok(Box::new(builtin::whitespace())),
        "hash-format" => return Ok(Box::new(builtin::hash_format())),
        _ => {}
    }

    if let Some(rest) = spec.strip_prefix("set:") {
        let mut parts = rest.splitn(3, ':');
        let (Some(name), Some(take)) = (parts.next(), parts.next()) else {
            bail!("malformed matcher spec `{spec}`: expected set:NAME:TAKE[:START]");
        };
        if name.is_empty() || take.is_empty() {
            bail!("malformed matcher spec `{spec}`: NAME and TAKE must be non-empty");
        }
        let mut matcher = SetMatcher::new(name, ScalarSet::from_scalars(take));
        if let Some(start) = parts.next() {
            matcher = matcher.with_start(ScalarSet::from_scalars(start));
        }
        return Ok(Box::new(matcher));
    }

    bail!(
        "unknown matcher `{spec}`: expected a builtin name or set:NAME:TAKE[:START]"
    );
}
